use crate::app::state::{AppState, Control};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

const KEY_HELP: &str = " F1-F3 pages | Tab focus | Enter select | Esc skip | Ctrl+Q quit ";

fn focus_name(control: Control) -> String {
    match control {
        Control::NameField => "NAME".into(),
        Control::StartButton => "START".into(),
        Control::WishButton => "WISH".into(),
        Control::ComplimentButton => "COMPLIMENT".into(),
        Control::CouponPicker => "COUPON".into(),
        Control::OrnamentPicker => "ORNAMENT".into(),
        Control::QuizQuestion(i) => format!("QUIZ {}", i + 1),
        Control::QuizSubmit => "SUBMIT".into(),
        Control::SecretCode => "CODE".into(),
        Control::SparkleButton => "SPARKLE".into(),
        Control::BackButton => "BACK".into(),
        Control::ForwardButton => "FORWARD".into(),
        Control::PhotoField => "PHOTO".into(),
        Control::RemovePhotoButton => "REMOVE".into(),
        Control::MessageField => "MESSAGE".into(),
        Control::RevealButton => "REVEAL".into(),
    }
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let status = format!(" {} ", state.status_line());
    let focus = format!(" [{}] ", focus_name(state.focus));

    let mut parts = vec![Span::styled(status.clone(), Theme::status_bar())];

    // Key help only when there is room for it
    let used = status.width() + focus.width();
    let help = if used + KEY_HELP.width() <= area.width as usize {
        KEY_HELP
    } else {
        ""
    };
    let remaining = (area.width as usize).saturating_sub(used + help.width());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(help, Theme::status_bar()));
    parts.push(Span::styled(
        focus,
        Style::default().fg(Theme::GOLD).bg(Theme::SURFACE),
    ));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_names() {
        assert_eq!(focus_name(Control::QuizQuestion(0)), "QUIZ 1");
        assert_eq!(focus_name(Control::RevealButton), "REVEAL");
    }
}
