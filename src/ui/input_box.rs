use crate::app::state::InputState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

/// A bordered text field. The terminal cursor is placed when focused.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    input: &InputState,
    focused: bool,
    placeholder: &str,
) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(if focused { Theme::title() } else { Theme::muted() })
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(if focused {
            Theme::border_focused()
        } else {
            Theme::border()
        })
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    if input.text.is_empty() {
        frame.render_widget(Paragraph::new(Span::styled(placeholder, Theme::placeholder())), inner);
    } else {
        frame.render_widget(
            Paragraph::new(input.text.as_str())
                .style(Theme::input_text())
                .wrap(Wrap { trim: false }),
            inner,
        );
    }

    if focused {
        let (col, row) = cursor_offset(&input.text[..input.cursor], inner.width);
        let x = inner.x + col.min(inner.width.saturating_sub(1));
        let y = inner.y + row.min(inner.height.saturating_sub(1));
        frame.set_cursor_position((x, y));
    }
}

/// Column and row of the cursor after `before`, assuming hard wrapping at `width`.
pub fn cursor_offset(before: &str, width: u16) -> (u16, u16) {
    let width = width.max(1) as usize;
    let cols = before.width();
    ((cols % width) as u16, (cols / width) as u16)
}

/// `[ label ]` as a clickable-looking span.
pub fn button(label: &str, focused: bool, enabled: bool) -> Span<'static> {
    let marker = if focused { "▶" } else { " " };
    Span::styled(format!("{}[ {} ]", marker, label), Theme::button(focused, enabled))
}

/// `◀ value ▶` picker.
pub fn picker(value: &str, focused: bool) -> Vec<Span<'static>> {
    let style = if focused { Theme::selected() } else { Theme::text() };
    vec![
        Span::styled(if focused { "◀ " } else { "  " }, Theme::warning()),
        Span::styled(value.to_string(), style),
        Span::styled(if focused { " ▶" } else { "  " }, Theme::warning()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_offset_wraps() {
        assert_eq!(cursor_offset("", 10), (0, 0));
        assert_eq!(cursor_offset("abc", 10), (3, 0));
        assert_eq!(cursor_offset("abcdefghijkl", 10), (2, 1));
        // Wide characters take two cells.
        assert_eq!(cursor_offset("🎄", 10), (2, 0));
    }
}
