use crate::assets::{AssetError, AssetStore, Photo};
use crate::config::AppConfig;
use crate::session::letter::{compose_letter, LetterParts, TypingReveal};
use crate::session::validate::{self, Guidance};
use crate::session::{Flag, Page, Session, Slot};
use std::path::PathBuf;

/// A focusable widget on one of the pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    NameField,
    StartButton,
    WishButton,
    ComplimentButton,
    CouponPicker,
    OrnamentPicker,
    QuizQuestion(usize),
    QuizSubmit,
    SecretCode,
    SparkleButton,
    BackButton,
    ForwardButton,
    PhotoField,
    RemovePhotoButton,
    MessageField,
    RevealButton,
}

impl Control {
    pub fn is_text_field(self) -> bool {
        matches!(
            self,
            Control::NameField | Control::SecretCode | Control::PhotoField | Control::MessageField
        )
    }
}

/// Focus order of the controls on `page`.
pub fn controls(page: Page, quiz_len: usize) -> Vec<Control> {
    match page {
        Page::Start => vec![Control::NameField, Control::StartButton],
        Page::EasterEggs => {
            let mut list = vec![
                Control::WishButton,
                Control::ComplimentButton,
                Control::CouponPicker,
                Control::OrnamentPicker,
            ];
            list.extend((0..quiz_len).map(Control::QuizQuestion));
            list.extend([
                Control::QuizSubmit,
                Control::SecretCode,
                Control::SparkleButton,
                Control::BackButton,
                Control::ForwardButton,
            ]);
            list
        }
        Page::Final => vec![
            Control::PhotoField,
            Control::RemovePhotoButton,
            Control::MessageField,
            Control::BackButton,
            Control::RevealButton,
        ],
    }
}

#[derive(Debug)]
pub struct InputState {
    pub text: String,
    pub cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            cursor: 0,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn take_text(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }

    pub fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut pos = self.cursor;
        // Skip trailing whitespace
        while pos > 0 && self.text.as_bytes().get(pos - 1) == Some(&b' ') {
            pos -= 1;
        }
        // Skip word characters
        while pos > 0 && self.text.as_bytes().get(pos - 1) != Some(&b' ') {
            pos -= 1;
        }
        self.text.drain(pos..self.cursor);
        self.cursor = pos;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CelebrationKind {
    Balloons,
    Confetti,
}

/// A timed full-screen overlay animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Celebration {
    pub kind: CelebrationKind,
    pub started: u64,
    pub until: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub text: String,
    pub until: u64,
}

pub struct AppState {
    pub config: AppConfig,
    pub session: Session,
    pub focus: Control,
    pub name_input: InputState,
    pub code_input: InputState,
    pub photo_input: InputState,
    pub message_input: InputState,
    pub coupon_cursor: usize,
    pub ornament_cursor: usize,
    pub reveal: Option<TypingReveal>,
    /// Letter as composed by the last successful reveal.
    pub revealed_letter: Option<String>,
    pub celebration: Option<Celebration>,
    pub toast: Option<Toast>,
    /// Start-up problems such as missing static photos.
    pub notices: Vec<String>,
    pub photo_hint: Option<String>,
    pub tick_count: u64,
    pub should_quit: bool,
    pub dirty: bool,
    pub pending_bell: bool,
    pub status_message: Option<String>,
}

const TOAST_TICKS: u64 = 60;

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let mut session = Session::new();
        session.set_page(Page::restore(&config.ui.start_page));
        let focus = controls(session.page(), config.content.quiz.len())[0];
        Self {
            config,
            session,
            focus,
            name_input: InputState::new(),
            code_input: InputState::new(),
            photo_input: InputState::new(),
            message_input: InputState::new(),
            coupon_cursor: 0,
            ornament_cursor: 0,
            reveal: None,
            revealed_letter: None,
            celebration: None,
            toast: None,
            notices: Vec::new(),
            photo_hint: None,
            tick_count: 0,
            should_quit: false,
            dirty: true,
            status_message: None,
            pending_bell: false,
        }
    }

    pub fn controls(&self) -> Vec<Control> {
        controls(self.session.page(), self.config.content.quiz.len())
    }

    /// Change page. Focus resets; session data never does.
    pub fn go_to(&mut self, page: Page) {
        self.session.set_page(page);
        self.focus = self.controls()[0];
        self.status_message = None;
        self.dirty = true;
    }

    pub fn focus_next(&mut self) {
        self.shift_focus(1);
    }

    pub fn focus_prev(&mut self) {
        self.shift_focus(-1);
    }

    fn shift_focus(&mut self, step: isize) {
        let list = self.controls();
        let len = list.len() as isize;
        let current = list.iter().position(|c| *c == self.focus).unwrap_or(0) as isize;
        self.focus = list[(current + step).rem_euclid(len) as usize];
        self.dirty = true;
    }

    pub fn input_mut(&mut self, control: Control) -> Option<&mut InputState> {
        match control {
            Control::NameField => Some(&mut self.name_input),
            Control::SecretCode => Some(&mut self.code_input),
            Control::PhotoField => Some(&mut self.photo_input),
            Control::MessageField => Some(&mut self.message_input),
            _ => None,
        }
    }

    pub fn start_enabled(&self) -> bool {
        self.session.recipient_name().is_some()
    }

    pub fn photos_ok(&self) -> bool {
        validate::has_minimum_images(self.session.photos(), self.config.validation.min_photos)
    }

    pub fn message_ok(&self) -> bool {
        self.config.validation.message_bounds().check(&self.session.message)
    }

    pub fn reveal_enabled(&self) -> bool {
        self.photos_ok() && self.message_ok()
    }

    pub fn quiz_submit_enabled(&self) -> bool {
        self.session.quiz.can_submit(&self.config.content.quiz)
    }

    /// Inline hints for the final page.
    pub fn final_guidance(&self) -> Vec<Guidance> {
        let mut hints = Vec::new();
        hints.extend(validate::photo_guidance(
            self.session.photos(),
            self.config.validation.min_photos,
        ));
        hints.extend(validate::message_guidance(
            &self.session.message,
            self.config.validation.message_bounds(),
        ));
        hints
    }

    pub fn recipient_display(&self) -> &str {
        self.session.recipient_name().unwrap_or("friend")
    }

    pub fn compose_letter(&self) -> String {
        compose_letter(LetterParts {
            recipient: self.recipient_display(),
            message: &self.session.message,
            coupon: self.session.drawn(Slot::Coupon),
            closing: &self.config.card.closing,
        })
    }

    /// Compose the letter from the current inputs and keep it as the revealed one.
    pub fn snapshot_letter(&mut self) -> String {
        let letter = self.compose_letter();
        self.revealed_letter = Some(letter.clone());
        letter
    }

    /// What the final page shows of the letter, if it has been revealed.
    pub fn letter_view(&self) -> Option<&str> {
        let letter = self.revealed_letter.as_deref()?;
        match &self.reveal {
            Some(reveal) if !reveal.is_done() => Some(reveal.visible()),
            _ => Some(letter),
        }
    }

    pub fn ornament_message(&self) -> Option<&str> {
        let chosen = self.session.drawn(Slot::Ornament)?;
        self.config
            .content
            .ornaments
            .iter()
            .find(|o| o.name == chosen)
            .map(|o| o.message.as_str())
    }

    pub fn show_toast(&mut self, text: impl Into<String>) {
        self.toast = Some(Toast {
            text: text.into(),
            until: self.tick_count + TOAST_TICKS,
        });
        self.dirty = true;
    }

    pub fn celebrate(&mut self, kind: CelebrationKind) {
        self.celebration = Some(Celebration {
            kind,
            started: self.tick_count,
            until: self.tick_count + self.config.ui.celebration_ticks,
        });
        self.dirty = true;
    }

    /// Feedback for the one transition into secret mode.
    pub fn on_secret_unlocked(&mut self) {
        tracing::info!("secret mode unlocked");
        self.show_toast("🎆 Secret mode unlocked! (bonus in the final reveal)");
        self.celebrate(CelebrationKind::Confetti);
        self.pending_bell = true;
    }

    pub fn apply_photo(&mut self, result: Result<Photo, AssetError>) {
        match result {
            Ok(photo) => {
                let name = photo.name.clone();
                if self.session.attach_photo(photo) {
                    tracing::info!(photo = %name, "photo attached");
                    self.photo_hint = None;
                    self.status_message = Some(format!("Attached {}", name));
                } else {
                    self.photo_hint = Some(format!("{} is already attached", name));
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "photo rejected");
                self.photo_hint = Some(Guidance::MissingAsset(err.to_string()).to_string());
            }
        }
        self.dirty = true;
    }

    /// Attach the configured photos. Missing or rejected ones become notices.
    pub fn load_static_photos(&mut self, store: &impl AssetStore, paths: &[PathBuf]) {
        for path in paths {
            if !store.exists(path) {
                tracing::warn!(path = %path.display(), "static photo missing");
                self.notices
                    .push(Guidance::MissingAsset(path.display().to_string()).to_string());
                continue;
            }
            match store.load_photo(path) {
                Ok(photo) => {
                    self.session.attach_photo(photo);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "static photo rejected");
                    self.notices.push(Guidance::MissingAsset(e.to_string()).to_string());
                }
            }
        }
    }

    /// Record the outcome of a keepsake export. Only a written file counts.
    pub fn apply_keepsake(&mut self, result: anyhow::Result<Option<PathBuf>>) {
        match result {
            Ok(Some(path)) => {
                self.session.raise(Flag::KeepsakeSaved);
                self.status_message = Some(format!("Keepsake saved to {}", path.display()));
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(error = %e, "keepsake export failed");
                self.status_message = Some(format!("Keepsake not saved: {}", e));
            }
        }
        self.dirty = true;
    }

    /// Advance animations. Returns whether anything visible changed.
    pub fn tick(&mut self) -> bool {
        self.tick_count = self.tick_count.wrapping_add(1);
        let mut changed = false;

        if let Some(reveal) = self.reveal.as_mut() {
            if !reveal.is_done() {
                reveal.advance();
                changed = true;
            }
        }
        if let Some(c) = self.celebration {
            changed = true;
            if self.tick_count >= c.until {
                self.celebration = None;
            }
        }
        if let Some(t) = &self.toast {
            if self.tick_count >= t.until {
                self.toast = None;
                changed = true;
            }
        }
        changed
    }

    pub fn status_line(&self) -> String {
        if let Some(ref msg) = self.status_message {
            return msg.clone();
        }
        let page = self.session.page();
        format!(
            "{} ({}/{})",
            page.label(),
            page.index() + 1,
            Page::ALL.len()
        )
    }
}
