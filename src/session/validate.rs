//! Input checks. All of them return plain values; a failed check becomes a
//! [`Guidance`] hint on screen and keeps the dependent control disabled.

use std::fmt;

pub const MIN_MESSAGE_LEN: usize = 10;
pub const MAX_MESSAGE_LEN: usize = 600;

/// Letters (any script, accents included) and spaces, non-empty after trim.
pub fn validate_name(raw: &str) -> bool {
    let name = raw.trim();
    !name.is_empty() && name.chars().all(|c| c.is_alphabetic() || c == ' ')
}

/// Inclusive character-length bounds for the personal message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageBounds {
    pub min: usize,
    pub max: usize,
}

impl Default for MessageBounds {
    fn default() -> Self {
        Self {
            min: MIN_MESSAGE_LEN,
            max: MAX_MESSAGE_LEN,
        }
    }
}

impl MessageBounds {
    pub fn new(min: usize, max: usize) -> Self {
        if max < min {
            Self { min: max, max: min }
        } else {
            Self { min, max }
        }
    }

    pub fn check(&self, raw: &str) -> bool {
        let len = raw.trim().chars().count();
        len > 0 && (self.min..=self.max).contains(&len)
    }
}

pub fn validate_message(raw: &str) -> bool {
    MessageBounds::default().check(raw)
}

pub fn has_minimum_images<T>(images: &[T], min: usize) -> bool {
    images.len() >= min
}

/// An unmet input condition, rendered as inline help text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guidance {
    InvalidName,
    MessageLength { min: usize, max: usize },
    MissingPhotos { min: usize },
    MissingAsset(String),
}

impl fmt::Display for Guidance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Guidance::InvalidName => {
                write!(f, "Please use letters and spaces only (e.g. \"Sofia\").")
            }
            Guidance::MessageLength { min, max } => {
                write!(f, "The message should have {}-{} characters.", min, max)
            }
            Guidance::MissingPhotos { min: 1 } => {
                write!(f, "Tip: attach at least 1 photo to unlock the final reveal.")
            }
            Guidance::MissingPhotos { min } => {
                write!(f, "Tip: attach at least {} photos to unlock the final reveal.", min)
            }
            Guidance::MissingAsset(what) => write!(f, "Could not load photo: {}", what),
        }
    }
}

/// Guidance for the name field; empty input gets no hint.
pub fn name_guidance(raw: &str) -> Option<Guidance> {
    (!raw.is_empty() && !validate_name(raw)).then_some(Guidance::InvalidName)
}

/// Guidance for the message field; empty input gets no hint.
pub fn message_guidance(raw: &str, bounds: MessageBounds) -> Option<Guidance> {
    (!raw.is_empty() && !bounds.check(raw)).then_some(Guidance::MessageLength {
        min: bounds.min,
        max: bounds.max,
    })
}

pub fn photo_guidance<T>(images: &[T], min: usize) -> Option<Guidance> {
    (!has_minimum_images(images, min)).then_some(Guidance::MissingPhotos { min })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Sofia"));
        assert!(validate_name("  Sofia  "));
        assert!(validate_name("Anna Lena"));
        assert!(validate_name("Jürgen Größ"));
        assert!(validate_name("ÄÖÜäöüß"));
        assert!(validate_name("Zoë"));
        assert!(validate_name("José"));
        assert!(!validate_name(""));
        assert!(!validate_name("   "));
        assert!(!validate_name("Sofia2"));
        assert!(!validate_name("1234"));
        assert!(!validate_name("So-fia"));
        assert!(!validate_name("Sofia!"));
        assert!(!validate_name("<b>Sofia</b>"));
        assert!(!validate_name("Anna\tLena"));
    }

    #[test]
    fn test_validate_message_bounds() {
        assert!(!validate_message(""));
        assert!(!validate_message("          "));
        assert!(!validate_message(&"a".repeat(9)));
        assert!(validate_message(&"a".repeat(10)));
        assert!(validate_message(&format!("   {}   ", "a".repeat(10))));
        assert!(validate_message(&"a".repeat(600)));
        assert!(!validate_message(&"a".repeat(601)));
    }

    #[test]
    fn test_message_length_counts_chars_not_bytes() {
        // 10 two-byte characters.
        assert!(validate_message(&"ä".repeat(10)));
        assert!(!validate_message(&"ä".repeat(9)));
    }

    #[test]
    fn test_message_bounds_swap_inverted() {
        let b = MessageBounds::new(20, 5);
        assert_eq!(b, MessageBounds { min: 5, max: 20 });
        assert!(b.check("hello"));
        assert!(!b.check("hi"));
    }

    #[test]
    fn test_has_minimum_images() {
        let none: [u8; 0] = [];
        assert!(!has_minimum_images(&none, 1));
        assert!(has_minimum_images(&["img1"], 1));
        assert!(!has_minimum_images(&["img1"], 2));
        assert!(has_minimum_images(&none, 0));
    }

    #[test]
    fn test_guidance_only_for_non_empty_input() {
        let bounds = MessageBounds::default();
        assert_eq!(name_guidance(""), None);
        assert_eq!(name_guidance("R2D2"), Some(Guidance::InvalidName));
        assert_eq!(name_guidance("Sofia"), None);
        assert_eq!(message_guidance("", bounds), None);
        assert_eq!(
            message_guidance("short", bounds),
            Some(Guidance::MessageLength { min: 10, max: 600 })
        );
        assert_eq!(photo_guidance::<u8>(&[], 1), Some(Guidance::MissingPhotos { min: 1 }));
        assert_eq!(photo_guidance(&[1u8], 1), None);
    }

    #[test]
    fn test_guidance_text() {
        assert_eq!(
            Guidance::MessageLength { min: 10, max: 600 }.to_string(),
            "The message should have 10-600 characters."
        );
        assert!(Guidance::MissingPhotos { min: 2 }.to_string().contains("2 photos"));
    }
}
