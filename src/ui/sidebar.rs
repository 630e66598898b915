use crate::app::state::AppState;
use crate::session::calendar::days_until_christmas_from_now;
use crate::session::{Counter, Flag, Page};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(Page::ALL.len() as u16 + 4), // Navigation
            Constraint::Min(9),                             // Status
        ])
        .split(area);

    render_navigation(frame, chunks[0], state);
    render_status(frame, chunks[1], state);
}

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {} ", title))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
}

fn render_navigation(frame: &mut Frame, area: Rect, state: &AppState) {
    let current = state.session.page();
    let mut lines: Vec<Line> = Page::ALL
        .iter()
        .enumerate()
        .map(|(i, page)| {
            let text = format!(" F{} {}", i + 1, page.label());
            if *page == current {
                Line::from(Span::styled(format!("{:<22}", text), Theme::nav_active()))
            } else {
                Line::from(Span::styled(text, Theme::text()))
            }
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Switch pages any time.",
        Theme::muted(),
    )));

    frame.render_widget(Paragraph::new(lines).block(panel("Navigation")), area);
}

fn render_status(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = panel("Status");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let session = &state.session;
    let threshold = state.config.eggs.sparkle_threshold.max(1);
    let clicks = session.counter(Counter::SparkleClicks);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(" Secret mode: ", Theme::muted()),
            if session.secret_unlocked() {
                Span::styled("✅", Theme::success())
            } else {
                Span::styled("❌", Theme::muted())
            },
        ]),
        Line::from(Span::styled(
            format!(" ✨ Clicks: {}/{}", clicks.min(threshold), threshold),
            Theme::text(),
        )),
    ];
    if session.flag(Flag::QuizDone) {
        if let Some(score) = session.quiz.score() {
            lines.push(Line::from(Span::styled(
                format!(" Quiz: {}/{}", score, state.config.content.quiz.len()),
                Theme::text(),
            )));
        }
    }
    let easter = session.counter(Counter::EasterClicks);
    if easter > 0 {
        lines.push(Line::from(Span::styled(
            format!(" 🥚 Easter clicks: {}", easter),
            Theme::text(),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(" ⏳ {} days until Christmas", days_until_christmas_from_now()),
        Theme::muted(),
    )));

    let text_h = lines.len() as u16;
    let para_area = Rect::new(inner.x, inner.y, inner.width, text_h.min(inner.height));
    frame.render_widget(Paragraph::new(lines), para_area);

    if inner.height > text_h + 1 {
        let gauge_area = Rect::new(inner.x + 1, inner.y + text_h + 1, inner.width.saturating_sub(2), 1);
        let ratio = (clicks.min(threshold) as f64) / threshold as f64;
        frame.render_widget(
            Gauge::default()
                .gauge_style(Style::default().fg(Theme::GOLD).bg(Theme::SURFACE))
                .ratio(ratio)
                .label(""),
            gauge_area,
        );
    }
}
