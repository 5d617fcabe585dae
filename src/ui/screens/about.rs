use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{prelude::*, widgets::*};

use crate::error::Result;
use crate::records::sidebar::{Topic, ABOUT_TEXT, ABOUT_TITLE};
use crate::ui::components::{
    keys::{is_back, is_down, is_up, wrap_step},
    run_screen,
    styles::{help_style, info_style, title_style},
    text::markdown_lines,
    utils::{screen_chunks, split_horizontal, split_vertical},
    Screen,
};

/// Sidebar navigator: about text plus one selected learning topic.
#[derive(Debug, Default)]
pub struct AboutScreen {
    topic: usize,
}

impl AboutScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn topic(&self) -> Topic {
        Topic::ALL[self.topic]
    }
}

impl Screen for AboutScreen {
    type Output = ();

    fn render(&self, f: &mut Frame<'_>) {
        let (header_area, body_area, help_area) = screen_chunks(f.size(), 1);
        f.render_widget(Paragraph::new(ABOUT_TITLE).style(title_style()), header_area);

        let columns = split_horizontal(
            body_area,
            &[Constraint::Length(34), Constraint::Min(20)],
        );
        let sidebar = split_vertical(
            columns[0],
            &[Constraint::Min(6), Constraint::Length(Topic::ALL.len() as u16 + 2)],
        );

        f.render_widget(
            Paragraph::new(markdown_lines(ABOUT_TEXT, Style::default()))
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL)),
            sidebar[0],
        );

        let options: Vec<Line> = Topic::ALL
            .iter()
            .enumerate()
            .map(|(idx, topic)| {
                let mark = if idx == self.topic { "(•)" } else { "( )" };
                let line = Line::from(format!("{mark} {}", topic.label()));
                if idx == self.topic {
                    line.style(Style::default().add_modifier(Modifier::BOLD))
                } else {
                    line
                }
            })
            .collect();
        f.render_widget(
            Paragraph::new(options)
                .block(Block::default().borders(Borders::ALL).title("Pilih Topik:")),
            sidebar[1],
        );

        f.render_widget(
            Paragraph::new(vec![
                Line::styled(self.topic().label(), title_style()),
                Line::from(""),
                Line::styled(self.topic().info(), info_style()),
            ])
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Info")),
            columns[1],
        );

        f.render_widget(
            Paragraph::new("↑/↓ choose topic • Esc back").style(help_style()),
            help_area,
        );
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<()> {
        if is_back(&key) || key.code == KeyCode::Char('q') {
            return Some(());
        }
        if is_up(&key) {
            self.topic = wrap_step(self.topic, Topic::ALL.len(), false);
        } else if is_down(&key) {
            self.topic = wrap_step(self.topic, Topic::ALL.len(), true);
        }
        None
    }
}

pub fn run_about() -> Result<()> {
    run_screen(&mut AboutScreen::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::keys::press;
    use crate::ui::components::runner::testing::render_to_string;

    #[test]
    fn info_follows_selected_topic() {
        let mut screen = AboutScreen::new();
        assert_eq!(screen.topic(), Topic::Introduction);
        screen.handle_key(press(KeyCode::Down));
        screen.handle_key(press(KeyCode::Down));
        assert_eq!(screen.topic(), Topic::Projects);

        let text = render_to_string(&screen, 120, 24);
        assert!(text.contains("(•) Proyek ML"));
        assert!(text.contains("Lihat contoh proyek nyata"));
    }
}
