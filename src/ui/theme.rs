use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const PINE: Color = Color::Rgb(46, 139, 87);
    pub const BERRY: Color = Color::Rgb(200, 40, 60);
    pub const GOLD: Color = Color::Rgb(230, 180, 80);
    pub const SNOW: Color = Color::Rgb(235, 240, 245);
    pub const FROST: Color = Color::Rgb(140, 160, 180);
    pub const NIGHT: Color = Color::Rgb(18, 24, 38);
    pub const SURFACE: Color = Color::Rgb(28, 36, 54);

    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::GOLD)
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn title() -> Style {
        Style::default().fg(Self::SNOW).add_modifier(Modifier::BOLD)
    }

    pub fn heading() -> Style {
        Style::default().fg(Self::BERRY).add_modifier(Modifier::BOLD)
    }

    pub fn text() -> Style {
        Style::default().fg(Self::SNOW)
    }

    pub fn muted() -> Style {
        Style::default().fg(Self::FROST)
    }

    pub fn success() -> Style {
        Style::default().fg(Self::PINE).add_modifier(Modifier::BOLD)
    }

    pub fn warning() -> Style {
        Style::default().fg(Self::GOLD)
    }

    pub fn info() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn button(focused: bool, enabled: bool) -> Style {
        match (focused, enabled) {
            (true, true) => Style::default()
                .fg(Self::NIGHT)
                .bg(Self::GOLD)
                .add_modifier(Modifier::BOLD),
            (true, false) => Style::default().fg(Self::NIGHT).bg(Color::DarkGray),
            (false, true) => Style::default().fg(Self::SNOW).bg(Self::PINE),
            (false, false) => Style::default().fg(Color::DarkGray),
        }
    }

    pub fn selected() -> Style {
        Style::default().fg(Self::GOLD).add_modifier(Modifier::BOLD)
    }

    pub fn nav_active() -> Style {
        Style::default()
            .fg(Self::NIGHT)
            .bg(Self::PINE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Self::SNOW)
    }

    pub fn placeholder() -> Style {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::SNOW).bg(Self::SURFACE)
    }

    pub fn letter() -> Style {
        Style::default().fg(Self::SNOW).bg(Self::SURFACE)
    }
}
