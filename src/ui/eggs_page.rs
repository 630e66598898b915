use crate::app::state::{AppState, Control};
use crate::session::{Flag, Slot};
use crate::ui::input_box;
use crate::ui::layout::rows;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let top = top_lines(state);
    let r = rows(area, &[top.len() as u16, 3, 1, 1]);

    frame.render_widget(Paragraph::new(top).wrap(Wrap { trim: false }), r[0]);

    input_box::render(
        frame,
        r[1],
        "🕹️ Secret code (optional): sometimes the code is longer than you think…",
        &state.code_input,
        state.focus == Control::SecretCode,
        "type here",
    );

    let sparkle = Line::from(vec![
        Span::styled(format!("{}  ", state.config.card.footer_hint), Theme::muted()),
        input_box::button("✨", state.focus == Control::SparkleButton, true),
    ]);
    frame.render_widget(Paragraph::new(sparkle), r[2]);

    let nav = Line::from(vec![
        input_box::button("⬅️ Back", state.focus == Control::BackButton, true),
        Span::raw("   "),
        input_box::button("🎁 To the final reveal", state.focus == Control::ForwardButton, true),
    ]);
    frame.render_widget(Paragraph::new(nav), r[3]);
}

fn top_lines(state: &AppState) -> Vec<Line<'static>> {
    let focus = state.focus;
    let session = &state.session;
    let content = &state.config.content;
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled("🎄 Easter Egg Zone", Theme::heading())));
    lines.push(Line::from(Span::styled(
        format!(
            "Okay {}… or rather: you, the card master 😄   (press * for luck)",
            state.recipient_display()
        ),
        Theme::text(),
    )));
    lines.push(Line::from(""));

    // Wish and compliment draws
    lines.push(draw_line(
        "🎄 Draw a wish",
        focus == Control::WishButton,
        session.drawn(Slot::Wish),
    ));
    lines.push(draw_line(
        "💐 Draw a compliment",
        focus == Control::ComplimentButton,
        session.drawn(Slot::Compliment),
    ));

    // Coupon picker
    let mut coupon = vec![Span::styled("🎟️ Coupon: ", Theme::text())];
    coupon.extend(input_box::picker(
        content
            .coupons
            .get(state.coupon_cursor)
            .map(String::as_str)
            .unwrap_or("-"),
        focus == Control::CouponPicker,
    ));
    if let Some(chosen) = session.drawn(Slot::Coupon) {
        coupon.push(Span::styled(format!("  ✔ {}", chosen), Theme::success()));
    }
    lines.push(Line::from(coupon));

    // Ornament picker
    let mut ornament = vec![Span::styled("🎀 Ornament: ", Theme::text())];
    ornament.extend(input_box::picker(
        content
            .ornaments
            .get(state.ornament_cursor)
            .map(|o| o.name.as_str())
            .unwrap_or("-"),
        focus == Control::OrnamentPicker,
    ));
    if let Some(message) = state.ornament_message() {
        ornament.push(Span::styled(format!("  “{}”", message), Theme::success()));
    }
    lines.push(Line::from(ornament));
    lines.push(Line::from(""));

    // Quiz
    lines.push(Line::from(Span::styled("🧠 Mini quiz (optional)", Theme::heading())));
    lines.push(Line::from(Span::styled(
        "Just for fun. Get everything right and there's a bonus in the finale 😄",
        Theme::muted(),
    )));
    for (i, q) in content.quiz.iter().enumerate() {
        let focused = focus == Control::QuizQuestion(i);
        let mut spans = vec![Span::styled(
            format!("{}) {} ", i + 1, q.question),
            if focused { Theme::selected() } else { Theme::text() },
        )];
        for (j, option) in q.options.iter().enumerate() {
            let chosen = session.quiz.answer(i) == Some(j);
            let mark = if chosen { "◉" } else { "○" };
            spans.push(Span::styled(
                format!(" {} {}", mark, option),
                if chosen { Theme::selected() } else { Theme::muted() },
            ));
        }
        lines.push(Line::from(spans));
    }

    let mut submit = vec![input_box::button(
        "✅ Submit quiz",
        focus == Control::QuizSubmit,
        state.quiz_submit_enabled(),
    )];
    if session.flag(Flag::QuizDone) {
        if let Some(score) = session.quiz.score() {
            let total = content.quiz.len();
            let (text, style) = if score as usize == total {
                (format!("  {}/{} 🎉 Bonus unlocked!", score, total), Theme::success())
            } else {
                (format!("  {}/{}, still great 😄", score, total), Theme::info())
            };
            submit.push(Span::styled(text, style));
        }
    }
    lines.push(Line::from(submit));

    if session.secret_unlocked() {
        lines.push(Line::from(Span::styled(
            "🎆 Secret mode is active! (bonus unlocked for the finale)",
            Theme::success(),
        )));
    }
    lines.push(Line::from(""));
    lines
}

fn draw_line(label: &str, focused: bool, drawn: Option<&str>) -> Line<'static> {
    let mut spans = vec![input_box::button(label, focused, true)];
    if let Some(value) = drawn {
        spans.push(Span::styled(format!("  {}", value), Theme::success()));
    }
    Line::from(spans)
}
