use crate::app::state::{AppState, Control};
use crate::session::gallery::pair_captions;
use crate::ui::input_box;
use crate::ui::layout::rows;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let gallery = gallery_lines(state);
    let guidance: Vec<Line> = state
        .final_guidance()
        .into_iter()
        .map(|g| Line::from(Span::styled(g.to_string(), Theme::warning())))
        .collect();
    let bonus_note = state.session.secret_unlocked() as u16;

    let r = rows(
        area,
        &[
            2,
            3,
            1,
            5,
            1,
            gallery.len() as u16,
            guidance.len() as u16 + bonus_note,
            1,
        ],
    );

    let header = vec![
        Line::from(Span::styled("🎁 Final Reveal", Theme::heading())),
        Line::from(Span::styled(
            format!(
                "Now for the finale: attach photos and write your personal message for {}.",
                state.recipient_display()
            ),
            Theme::text(),
        )),
    ];
    frame.render_widget(Paragraph::new(header), r[0]);

    let exts = state.config.photos.extensions.join("/");
    input_box::render(
        frame,
        r[1],
        &format!("Attach photo ({}), Enter to add", exts),
        &state.photo_input,
        state.focus == Control::PhotoField,
        "~/Pictures/us.jpg",
    );

    let mut photo_row = vec![input_box::button(
        "🗑 Remove last photo",
        state.focus == Control::RemovePhotoButton,
        !state.session.photos().is_empty(),
    )];
    if let Some(hint) = &state.photo_hint {
        photo_row.push(Span::styled(format!("  {}", hint), Theme::warning()));
    }
    frame.render_widget(Paragraph::new(Line::from(photo_row)), r[2]);

    input_box::render(
        frame,
        r[3],
        "Your message 💌",
        &state.message_input,
        state.focus == Control::MessageField,
        "Write your personal message here…",
    );

    let bounds = state.config.validation.message_bounds();
    let len = state.session.message.trim().chars().count();
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("{}/{} characters (min {})", len, bounds.max, bounds.min),
            if state.message_ok() { Theme::muted() } else { Theme::warning() },
        ))
        .alignment(Alignment::Right),
        r[4],
    );

    frame.render_widget(Paragraph::new(gallery), r[5]);

    let mut notes = guidance;
    if bonus_note > 0 {
        notes.push(Line::from(Span::styled(
            "🎆 Secret mode is active: a bonus appears after the reveal!",
            Theme::success(),
        )));
    }
    frame.render_widget(Paragraph::new(notes), r[6]);

    let buttons = Line::from(vec![
        input_box::button("⬅️ Back", state.focus == Control::BackButton, true),
        Span::raw("   "),
        input_box::button(
            "🎄 Show the card",
            state.focus == Control::RevealButton,
            state.reveal_enabled(),
        ),
    ]);
    frame.render_widget(Paragraph::new(buttons), r[7]);

    if let Some(letter) = state.letter_view() {
        render_letter(frame, r[8], state, letter);
    }
}

fn gallery_lines(state: &AppState) -> Vec<Line<'static>> {
    let gallery = pair_captions(
        state.session.photos(),
        &state.config.content.captions,
        state.config.photos.max_gallery,
    );
    if gallery.entries.is_empty() {
        return Vec::new();
    }

    let mut lines = vec![Line::from(Span::styled("📸 Our memories", Theme::heading()))];
    for entry in &gallery.entries {
        let mut spans = vec![
            Span::styled(format!("  🖼  {}", entry.photo.name), Theme::text()),
            Span::styled(format!("  ({})", entry.photo.size_label()), Theme::muted()),
        ];
        if let Some(caption) = entry.caption {
            spans.push(Span::styled(format!("  {}", caption), Theme::info()));
        }
        lines.push(Line::from(spans));
    }
    if gallery.hidden > 0 {
        lines.push(Line::from(Span::styled(
            format!("  +{} more", gallery.hidden),
            Theme::muted(),
        )));
    }
    lines
}

fn render_letter(frame: &mut Frame, area: Rect, state: &AppState, letter: &str) {
    if area.height < 3 {
        return;
    }
    let block = Block::default()
        .title(" 💌 ")
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border_focused())
        .padding(Padding::horizontal(1))
        .style(Theme::letter());

    let mut lines: Vec<Line> = letter
        .lines()
        .map(|l| Line::from(Span::styled(l.to_string(), Theme::letter())))
        .collect();

    let typing_done = state.reveal.as_ref().map(|r| r.is_done()).unwrap_or(true);
    if typing_done && state.session.secret_unlocked() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("🗝️ Bonus (secret mode)", Theme::heading())));
        lines.push(Line::from(Span::styled(
            "You found an Easter egg: you are officially a Christmas card pro 😄",
            Theme::info(),
        )));
        lines.push(Line::from(Span::styled(
            "Bonus idea: save the card with the keepsake export and tuck it into the gift.",
            Theme::text(),
        )));
    }

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}
