use crate::app::state::{AppState, Control};
use crate::session::validate::name_guidance;
use crate::ui::layout::rows;
use crate::ui::theme::Theme;
use crate::ui::input_box;
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let card = &state.config.card;
    let r = rows(area, &[2, 4, 3, 2, 2]);

    let header = vec![
        Line::from(Span::styled(card.title.as_str(), Theme::heading())),
        Line::from(Span::styled(
            format!("A little digital surprise for {} ❤️", card.recipient_relation),
            Theme::text(),
        )),
    ];
    frame.render_widget(Paragraph::new(header), r[0]);

    frame.render_widget(
        Paragraph::new(Span::styled(
            "This card is interactive: there are little Easter eggs along the way, and at the \
             end comes the final reveal with photos and a personal message.",
            Theme::muted(),
        ))
        .wrap(Wrap { trim: true }),
        r[1],
    );

    input_box::render(
        frame,
        r[2],
        "Who is the card for? (name or nickname)",
        &state.name_input,
        state.focus == Control::NameField,
        "e.g. Sofia",
    );

    if let Some(hint) = name_guidance(&state.name_input.text) {
        frame.render_widget(Paragraph::new(Span::styled(hint.to_string(), Theme::warning())), r[3]);
    } else if let Some(name) = state.session.recipient_name() {
        frame.render_widget(
            Paragraph::new(Span::styled(format!("Hello, {}! 👋", name), Theme::success())),
            r[3],
        );
    }

    let button = input_box::button(
        "🎁 Let's go",
        state.focus == Control::StartButton,
        state.start_enabled(),
    );
    frame.render_widget(Paragraph::new(Line::from(button)), r[4]);

    if !state.notices.is_empty() {
        let notes: Vec<Line> = state
            .notices
            .iter()
            .map(|n| Line::from(Span::styled(format!("⚠ {}", n), Theme::warning())))
            .collect();
        frame.render_widget(Paragraph::new(notes).wrap(Wrap { trim: true }), r[5]);
    }
}
