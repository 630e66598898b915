//! Balloon and confetti overlays plus the toast popup.

use crate::app::state::{AppState, Celebration, CelebrationKind};
use crate::ui::layout::centered;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

const BALLOON_COLORS: [Color; 4] = [Theme::BERRY, Theme::GOLD, Theme::PINE, Color::Magenta];
const CONFETTI: [&str; 4] = ["✦", "*", "❄", "•"];

/// Cheap per-column scatter so every column moves at its own offset.
fn scatter(i: u16) -> u16 {
    ((i as u32).wrapping_mul(2_654_435_761) >> 16) as u16
}

/// Particle positions for one frame of a celebration.
pub fn particles(c: &Celebration, now: u64, area: Rect) -> Vec<(u16, u16, usize)> {
    if area.width == 0 || area.height == 0 {
        return Vec::new();
    }
    let elapsed = now.saturating_sub(c.started) as u16;
    let spacing = match c.kind {
        CelebrationKind::Balloons => 6,
        CelebrationKind::Confetti => 3,
    };
    let mut out = Vec::new();
    let mut col = 0u16;
    while col < area.width {
        let seed = scatter(col);
        let h = area.height;
        let travel = (elapsed / 2).wrapping_add(seed) % h;
        let y = match c.kind {
            // Balloons rise from the bottom.
            CelebrationKind::Balloons => h - 1 - travel,
            // Confetti falls from the top.
            CelebrationKind::Confetti => travel,
        };
        out.push((area.x + col, area.y + y, seed as usize));
        col += spacing + seed % 3;
    }
    out
}

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    if let Some(c) = &state.celebration {
        let buf = frame.buffer_mut();
        for (x, y, seed) in particles(c, state.tick_count, area) {
            let (symbol, color) = match c.kind {
                CelebrationKind::Balloons => ("🎈", BALLOON_COLORS[seed % BALLOON_COLORS.len()]),
                CelebrationKind::Confetti => (
                    CONFETTI[seed % CONFETTI.len()],
                    BALLOON_COLORS[(seed / 3) % BALLOON_COLORS.len()],
                ),
            };
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_symbol(symbol).set_fg(color);
            }
        }
    }

    if let Some(toast) = &state.toast {
        let width = (toast.text.chars().count() as u16 + 6).min(area.width);
        let popup = centered(area, width, 3);
        frame.render_widget(Clear, popup);
        frame.render_widget(
            Paragraph::new(Span::styled(toast.text.as_str(), Theme::title()))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(Theme::border_type())
                        .border_style(Theme::border_focused())
                        .style(Style::default().bg(Theme::SURFACE)),
                ),
            popup,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_particles_stay_inside_area() {
        let area = Rect::new(5, 2, 40, 12);
        for kind in [CelebrationKind::Balloons, CelebrationKind::Confetti] {
            let c = Celebration {
                kind,
                started: 3,
                until: 100,
            };
            for now in [0, 3, 10, 57, 99] {
                let ps = particles(&c, now, area);
                assert!(!ps.is_empty());
                for (x, y, _) in ps {
                    assert!(x >= area.x && x < area.right());
                    assert!(y >= area.y && y < area.bottom());
                }
            }
        }
    }

    #[test]
    fn test_balloons_rise() {
        let area = Rect::new(0, 0, 10, 20);
        let c = Celebration {
            kind: CelebrationKind::Balloons,
            started: 0,
            until: 100,
        };
        let first = particles(&c, 0, area)[0];
        let later = particles(&c, 2, area)[0];
        assert_eq!(first.0, later.0);
        assert!(later.1 < first.1 || first.1 == area.y);
    }

    #[test]
    fn test_empty_area() {
        let c = Celebration {
            kind: CelebrationKind::Confetti,
            started: 0,
            until: 1,
        };
        assert!(particles(&c, 0, Rect::new(0, 0, 0, 0)).is_empty());
    }
}
