mod celebration;
mod eggs_page;
mod final_page;
mod input_box;
mod layout;
mod sidebar;
mod start_page;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use crate::session::Page;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding};
use theme::Theme;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(Theme::NIGHT)), area);
    let app_layout = layout::compute_layout(area);

    sidebar::render(frame, app_layout.sidebar, state);
    render_page(frame, app_layout.page, state);
    status_bar::render(frame, app_layout.status_bar, state);
    celebration::render(frame, state);
}

fn render_page(frame: &mut Frame, area: Rect, state: &AppState) {
    let page = state.session.page();
    let block = Block::default()
        .title(format!(" {} ", page.label()))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border_focused())
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match page {
        Page::Start => start_page::render(frame, inner, state),
        Page::EasterEggs => eggs_page::render(frame, inner, state),
        Page::Final => final_page::render(frame, inner, state),
    }
}
