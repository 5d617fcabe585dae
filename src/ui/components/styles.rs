use ratatui::style::{Color, Modifier, Style};

/// Accent color used for prompts, highlights, and status badges.
pub const ACCENT: Color = Color::Indexed(208);

pub fn title_style() -> Style {
    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
}

pub fn help_style() -> Style {
    Style::default().fg(Color::Gray)
}

pub fn selection_style() -> Style {
    Style::default().add_modifier(Modifier::REVERSED)
}

pub fn header_cell_style() -> Style {
    Style::default().fg(Color::Yellow)
}

pub fn error_style() -> Style {
    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
}

pub fn success_style() -> Style {
    Style::default().fg(Color::Green)
}

pub fn info_style() -> Style {
    Style::default().fg(Color::LightBlue)
}
