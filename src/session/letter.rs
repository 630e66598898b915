//! The final letter and its character-by-character reveal.

/// Everything the letter is built from.
#[derive(Debug, Clone, Copy)]
pub struct LetterParts<'a> {
    pub recipient: &'a str,
    pub message: &'a str,
    pub coupon: Option<&'a str>,
    pub closing: &'a str,
}

pub fn compose_letter(parts: LetterParts<'_>) -> String {
    let mut letter = format!("Dear {},\n\n{}\n", parts.recipient, parts.message.trim());
    if let Some(coupon) = parts.coupon {
        letter.push_str(&format!("\nYour coupon: {}\n", coupon));
    }
    letter.push_str(&format!("\n{}\n", parts.closing));
    letter
}

/// Paces the letter out a few characters per UI tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingReveal {
    text: String,
    total: usize,
    shown: usize,
    step: usize,
}

impl TypingReveal {
    pub fn new(text: String, step: usize) -> Self {
        let total = text.chars().count();
        Self {
            text,
            total,
            shown: 0,
            step: step.max(1),
        }
    }

    pub fn advance(&mut self) {
        self.shown = (self.shown + self.step).min(self.total);
    }

    pub fn skip(&mut self) {
        self.shown = self.total;
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.total
    }

    pub fn visible(&self) -> &str {
        match self.text.char_indices().nth(self.shown) {
            Some((idx, _)) => &self.text[..idx],
            None => &self.text,
        }
    }
}
