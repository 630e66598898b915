//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the card works out of the box.

use crate::session::quiz::QuizQuestion;
use crate::session::validate::{MessageBounds, MAX_MESSAGE_LEN, MIN_MESSAGE_LEN};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub card: CardConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
    #[serde(default)]
    pub eggs: EggConfig,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub photos: PhotoConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub keepsake: KeepsakeConfig,
}

/// Wording around the card itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardConfig {
    #[serde(default = "default_title")]
    pub title: String,
    /// Completes "A little digital surprise for ...".
    #[serde(default = "default_relation")]
    pub recipient_relation: String,
    #[serde(default = "default_footer_hint")]
    pub footer_hint: String,
    #[serde(default = "default_closing")]
    pub closing: String,
    #[serde(default = "default_secret_phrase")]
    pub secret_phrase: String,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            recipient_relation: default_relation(),
            footer_hint: default_footer_hint(),
            closing: default_closing(),
            secret_phrase: default_secret_phrase(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    #[serde(default = "default_min_message_len")]
    pub min_message_len: usize,
    #[serde(default = "default_max_message_len")]
    pub max_message_len: usize,
    #[serde(default = "default_min_photos")]
    pub min_photos: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_message_len: default_min_message_len(),
            max_message_len: default_max_message_len(),
            min_photos: default_min_photos(),
        }
    }
}

impl ValidationConfig {
    pub fn message_bounds(&self) -> MessageBounds {
        MessageBounds::new(self.min_message_len, self.max_message_len)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EggConfig {
    #[serde(default = "default_sparkle_threshold")]
    pub sparkle_threshold: u32,
}

impl Default for EggConfig {
    fn default() -> Self {
        Self {
            sparkle_threshold: default_sparkle_threshold(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ornament {
    pub name: String,
    pub message: String,
}

/// Static content tables: pure data, swapped out freely in the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    #[serde(default = "default_wishes")]
    pub wishes: Vec<String>,
    #[serde(default = "default_compliments")]
    pub compliments: Vec<String>,
    #[serde(default = "default_coupons")]
    pub coupons: Vec<String>,
    #[serde(default = "default_ornaments")]
    pub ornaments: Vec<Ornament>,
    #[serde(default)]
    pub captions: Vec<String>,
    #[serde(default = "default_quiz")]
    pub quiz: Vec<QuizQuestion>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            wishes: default_wishes(),
            compliments: default_compliments(),
            coupons: default_coupons(),
            ornaments: default_ornaments(),
            captions: Vec::new(),
            quiz: default_quiz(),
        }
    }
}

impl ContentConfig {
    /// Drop quiz questions whose answer index points past their options.
    pub fn sanitize(&mut self) {
        self.quiz.retain(|q| {
            let ok = q.answer < q.options.len();
            if !ok {
                tracing::warn!(question = %q.question, "dropping quiz question with invalid answer");
            }
            ok
        });
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoConfig {
    /// Photos that are always part of the gallery.
    #[serde(default)]
    pub static_photos: Vec<PathBuf>,
    #[serde(default = "default_max_gallery")]
    pub max_gallery: usize,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for PhotoConfig {
    fn default() -> Self {
        Self {
            static_photos: Vec::new(),
            max_gallery: default_max_gallery(),
            extensions: default_extensions(),
        }
    }
}

/// UI pacing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    #[serde(default = "default_typing_chars_per_tick")]
    pub typing_chars_per_tick: usize,
    #[serde(default = "default_start_page")]
    pub start_page: String,
    #[serde(default = "default_celebration_ticks")]
    pub celebration_ticks: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            typing_chars_per_tick: default_typing_chars_per_tick(),
            start_page: default_start_page(),
            celebration_ticks: default_celebration_ticks(),
        }
    }
}

/// Diagnostic log settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

/// Export of the revealed letter to a text file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeepsakeConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_keepsake_dir")]
    pub dir: String,
}

impl Default for KeepsakeConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            dir: default_keepsake_dir(),
        }
    }
}

fn default_title() -> String {
    "🎄 Interactive Christmas Card 🎄".to_string()
}
fn default_relation() -> String {
    "my sister".to_string()
}
fn default_footer_hint() -> String {
    "Psst… somewhere a little ✨ is hiding".to_string()
}
fn default_closing() -> String {
    "Merry Christmas 🎄✨".to_string()
}
fn default_secret_phrase() -> String {
    "up up down down left right left right b a".to_string()
}
fn default_min_message_len() -> usize {
    MIN_MESSAGE_LEN
}
fn default_max_message_len() -> usize {
    MAX_MESSAGE_LEN
}
fn default_min_photos() -> usize {
    1
}
fn default_sparkle_threshold() -> u32 {
    5
}
fn default_max_gallery() -> usize {
    9
}
fn default_extensions() -> Vec<String> {
    vec!["png".into(), "jpg".into(), "jpeg".into()]
}
fn default_tick_ms() -> u64 {
    50
}
fn default_typing_chars_per_tick() -> usize {
    2
}
fn default_start_page() -> String {
    "start".to_string()
}
fn default_celebration_ticks() -> u64 {
    60
}
fn default_log_dir() -> String {
    "~/.local/share/xmascard/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_keepsake_dir() -> String {
    "~/.local/share/xmascard/cards".to_string()
}

fn default_wishes() -> Vec<String> {
    vec![
        "✨ Lots of little wonders in everyday life".into(),
        "❤️ More time for yourself".into(),
        "☕ Cosy evenings & good conversations".into(),
        "🌟 Courage for new adventures".into(),
        "🎄 A warm heart, no matter how cold it is outside".into(),
    ]
}

fn default_compliments() -> Vec<String> {
    vec![
        "You make every room a little brighter.".into(),
        "Your laugh is the best soundtrack of the holidays.".into(),
        "You are kinder than you give yourself credit for.".into(),
        "Nobody wraps presents (or hugs) like you.".into(),
    ]
}

fn default_coupons() -> Vec<String> {
    vec![
        "🎬 One movie night, your pick".into(),
        "🥞 Breakfast in bed".into(),
        "🍪 A fresh batch of cookies".into(),
        "🧹 One chore of your choice, done by me".into(),
    ]
}

fn default_ornaments() -> Vec<Ornament> {
    vec![
        Ornament {
            name: "🔴 Red bauble".into(),
            message: "For all the warmth you bring.".into(),
        },
        Ornament {
            name: "⭐ Golden star".into(),
            message: "You always find the way.".into(),
        },
        Ornament {
            name: "❄️ Snowflake".into(),
            message: "One of a kind, just like you.".into(),
        },
        Ornament {
            name: "🔔 Little bell".into(),
            message: "May this year ring in something wonderful.".into(),
        },
    ]
}

fn default_quiz() -> Vec<QuizQuestion> {
    vec![
        QuizQuestion {
            question: "Which season is best for hot chocolate?".into(),
            options: vec!["Summer".into(), "Autumn".into(), "Winter".into()],
            answer: 2,
        },
        QuizQuestion {
            question: "What goes best with Christmas?".into(),
            options: vec!["Mulled wine".into(), "Sushi".into(), "Iced tea".into()],
            answer: 0,
        },
        QuizQuestion {
            question: "What is the most important gift?".into(),
            options: vec!["Stress".into(), "Time together".into(), "More to-dos".into()],
            answer: 1,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.validation.min_message_len, 10);
        assert_eq!(cfg.validation.max_message_len, 600);
        assert_eq!(cfg.eggs.sparkle_threshold, 5);
        assert_eq!(cfg.content.quiz.len(), 3);
        assert_eq!(cfg.content.wishes.len(), 5);
        assert_eq!(cfg.ui.start_page, "start");
        assert!(!cfg.logging.enabled);
    }

    #[test]
    fn test_partial_toml_overrides() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [card]
            recipient_relation = "my brother"

            [validation]
            min_message_len = 20

            [content]
            wishes = ["Snow"]
            captions = ["Summer 2024", "Ski trip"]
            "#,
        )
        .unwrap();
        assert_eq!(cfg.card.recipient_relation, "my brother");
        assert_eq!(cfg.card.secret_phrase, default_secret_phrase());
        assert_eq!(cfg.validation.message_bounds(), MessageBounds::new(20, 600));
        assert_eq!(cfg.content.wishes, vec!["Snow".to_string()]);
        assert_eq!(cfg.content.captions.len(), 2);
        assert_eq!(cfg.content.coupons, default_coupons());
    }

    #[test]
    fn test_sanitize_drops_bad_quiz_questions() {
        let mut content = ContentConfig::default();
        content.quiz.push(QuizQuestion {
            question: "Broken?".into(),
            options: vec!["yes".into()],
            answer: 4,
        });
        content.sanitize();
        assert_eq!(content.quiz.len(), 3);
    }

    #[test]
    fn test_round_trip_default_config() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.content.ornaments, default_ornaments());
        assert_eq!(back.photos.extensions, default_extensions());
    }
}
