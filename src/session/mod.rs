//! Session navigator: the per-session state bag and its transitions.
//!
//! A [`Session`] lives for one run of the card. Every page renderer reads it
//! and every input event mutates it through the operations below. Nothing in
//! here touches the terminal or the filesystem.

pub mod calendar;
pub mod draw;
pub mod gallery;
pub mod letter;
pub mod quiz;
pub mod validate;

use crate::assets::Photo;
use rand::RngExt;
use std::collections::BTreeMap;

/// A screen in the fixed navigation sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Page {
    #[default]
    Start,
    EasterEggs,
    Final,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Start, Page::EasterEggs, Page::Final];

    pub fn key(self) -> &'static str {
        match self {
            Page::Start => "start",
            Page::EasterEggs => "eastereggs",
            Page::Final => "final",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Page::Start => "Start",
            Page::EasterEggs => "Easter Eggs",
            Page::Final => "Final Reveal",
        }
    }

    pub fn from_key(key: &str) -> Option<Page> {
        Page::ALL
            .into_iter()
            .find(|p| p.key().eq_ignore_ascii_case(key.trim()))
    }

    /// Resolve a possibly corrupted page key, falling back to the first page.
    pub fn restore(key: &str) -> Page {
        Page::from_key(key).unwrap_or_else(|| {
            tracing::warn!(key, "unknown page key, falling back to start");
            Page::default()
        })
    }

    pub fn index(self) -> usize {
        Page::ALL.iter().position(|p| *p == self).unwrap_or(0)
    }

    pub fn next(self) -> Page {
        Page::ALL[(self.index() + 1).min(Page::ALL.len() - 1)]
    }

    pub fn prev(self) -> Page {
        Page::ALL[self.index().saturating_sub(1)]
    }
}

/// One-shot booleans. Each goes false -> true at most once per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Flag {
    SecretUnlocked,
    QuizDone,
    RevealShown,
    TypingPlayed,
    BalloonsShown,
    KeepsakeSaved,
}

impl Flag {
    pub const ALL: [Flag; 6] = [
        Flag::SecretUnlocked,
        Flag::QuizDone,
        Flag::RevealShown,
        Flag::TypingPlayed,
        Flag::BalloonsShown,
        Flag::KeepsakeSaved,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Counter {
    SparkleClicks,
    EasterClicks,
}

impl Counter {
    pub const ALL: [Counter; 2] = [Counter::SparkleClicks, Counter::EasterClicks];
}

/// Collected answers that must survive re-renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    Wish,
    Compliment,
    Coupon,
    Ornament,
}

/// Result of [`Session::advance_on_threshold`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    Counting(u32),
    JustUnlocked,
    AlreadyUnlocked,
}

#[derive(Debug, Default)]
pub struct Session {
    page: Page,
    recipient_name: Option<String>,
    flags: BTreeMap<Flag, bool>,
    counters: BTreeMap<Counter, u32>,
    draws: BTreeMap<Slot, String>,
    pub quiz: quiz::QuizState,
    pub message: String,
    photos: Vec<Photo>,
}

impl Session {
    pub fn new() -> Self {
        let mut session = Self::default();
        session.initialize();
        session
    }

    /// Fill every flag and counter with its default, keeping existing values.
    pub fn initialize(&mut self) {
        for flag in Flag::ALL {
            self.flags.entry(flag).or_insert(false);
        }
        for counter in Counter::ALL {
            self.counters.entry(counter).or_insert(0);
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn set_page(&mut self, target: Page) {
        if self.page != target {
            tracing::debug!(from = self.page.key(), to = target.key(), "page change");
        }
        self.page = target;
    }

    /// Navigate by raw key. Unknown keys leave the page untouched.
    pub fn set_page_by_key(&mut self, key: &str) -> bool {
        match Page::from_key(key) {
            Some(page) => {
                self.set_page(page);
                true
            }
            None => false,
        }
    }

    pub fn recipient_name(&self) -> Option<&str> {
        self.recipient_name.as_deref()
    }

    /// Store the name if it validates. Returns whether it was accepted.
    pub fn set_recipient_name(&mut self, raw: &str) -> bool {
        if !validate::validate_name(raw) {
            return false;
        }
        self.recipient_name = Some(raw.trim().to_string());
        true
    }

    pub fn flag(&self, flag: Flag) -> bool {
        self.flags.get(&flag).copied().unwrap_or(false)
    }

    /// Set a flag. Returns true if this call flipped it.
    pub fn raise(&mut self, flag: Flag) -> bool {
        let slot = self.flags.entry(flag).or_insert(false);
        let flipped = !*slot;
        *slot = true;
        flipped
    }

    /// Run `action` once per session, gated on `flag`.
    pub fn record_one_shot<F: FnOnce()>(&mut self, flag: Flag, action: F) -> bool {
        if self.flag(flag) {
            return false;
        }
        action();
        self.raise(flag);
        true
    }

    pub fn counter(&self, counter: Counter) -> u32 {
        self.counters.get(&counter).copied().unwrap_or(0)
    }

    pub fn bump(&mut self, counter: Counter) -> u32 {
        let value = self.counters.entry(counter).or_insert(0);
        *value = value.saturating_add(1);
        *value
    }

    pub fn advance_on_threshold(&mut self, counter: Counter, threshold: u32, unlock: Flag) -> Progress {
        let value = self.bump(counter);
        if value < threshold {
            return if self.flag(unlock) {
                Progress::AlreadyUnlocked
            } else {
                Progress::Counting(value)
            };
        }
        if self.raise(unlock) {
            Progress::JustUnlocked
        } else {
            Progress::AlreadyUnlocked
        }
    }

    pub fn secret_unlocked(&self) -> bool {
        self.flag(Flag::SecretUnlocked)
    }

    /// Compare a typed phrase against the secret. A match unlocks secret mode.
    pub fn try_secret_phrase(&mut self, input: &str, secret: &str) -> bool {
        let normalized = input.trim().to_lowercase();
        if normalized.is_empty() || normalized != secret.trim().to_lowercase() {
            return false;
        }
        self.raise(Flag::SecretUnlocked);
        true
    }

    pub fn drawn(&self, slot: Slot) -> Option<&str> {
        self.draws.get(&slot).map(String::as_str)
    }

    /// Draw from `pool` and keep the value until the next explicit draw.
    pub fn commit_draw<R: RngExt>(&mut self, slot: Slot, pool: &[String], rng: &mut R) -> Option<&str> {
        let value = draw::draw_random(pool, rng)?.clone();
        self.draws.insert(slot, value);
        self.drawn(slot)
    }

    /// Commit a user-chosen value.
    pub fn choose(&mut self, slot: Slot, value: impl Into<String>) {
        self.draws.insert(slot, value.into());
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    /// Attach a photo unless the same path is already attached.
    pub fn attach_photo(&mut self, photo: Photo) -> bool {
        if self.photos.iter().any(|p| p.path == photo.path) {
            return false;
        }
        self.photos.push(photo);
        true
    }

    pub fn detach_last_photo(&mut self) -> Option<Photo> {
        self.photos.pop()
    }
}
