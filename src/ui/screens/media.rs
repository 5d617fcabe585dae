use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{prelude::*, widgets::*};

use crate::config::MediaEntry;
use crate::error::Result;
use crate::records::media::{location, media_status, MediaStatus};
use crate::ui::components::{
    keys::{is_back, is_down, is_up, wrap_step},
    run_screen,
    styles::{help_style, info_style, selection_style, title_style},
    utils::screen_chunks,
    Screen,
};

/// Lists the configured videos and whether each one can be found.
pub struct MediaScreen {
    entries: Vec<(MediaEntry, MediaStatus)>,
    selected: usize,
}

impl MediaScreen {
    pub fn new(entries: &[MediaEntry], root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            entries: entries
                .iter()
                .map(|entry| (entry.clone(), media_status(entry, &root)))
                .collect(),
            selected: 0,
        }
    }
}

impl Screen for MediaScreen {
    type Output = ();

    fn render(&self, f: &mut Frame<'_>) {
        let (header_area, body_area, help_area) = screen_chunks(f.size(), 2);
        f.render_widget(
            Paragraph::new(vec![
                Line::styled("Video", title_style()),
                Line::styled(
                    "Pemutaran tidak tersedia di terminal; buka lokasi berikut di pemutar video.",
                    info_style(),
                ),
            ]),
            header_area,
        );

        if self.entries.is_empty() {
            f.render_widget(
                Paragraph::new("Tidak ada video yang dikonfigurasi.")
                    .block(Block::default().borders(Borders::ALL).title("Media")),
                body_area,
            );
        } else {
            let items: Vec<ListItem> = self
                .entries
                .iter()
                .enumerate()
                .map(|(i, (entry, status))| {
                    let status_style = match status {
                        MediaStatus::LocalAvailable => Style::default().fg(Color::Green),
                        MediaStatus::LocalMissing => Style::default().fg(Color::Red),
                        MediaStatus::Remote => Style::default().fg(Color::Cyan),
                    };
                    let lines = vec![
                        Line::from(vec![
                            Span::styled(
                                entry.label.clone(),
                                Style::default().add_modifier(Modifier::BOLD),
                            ),
                            Span::raw("  "),
                            Span::styled(format!("[{}]", status.label()), status_style),
                        ]),
                        Line::from(format!("  {}", location(entry))),
                    ];
                    let item = ListItem::new(lines);
                    if i == self.selected {
                        item.style(selection_style())
                    } else {
                        item
                    }
                })
                .collect();
            f.render_widget(
                List::new(items).block(Block::default().borders(Borders::ALL).title("Media")),
                body_area,
            );
        }

        f.render_widget(
            Paragraph::new("↑/↓ move • Esc back").style(help_style()),
            help_area,
        );
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<()> {
        if is_back(&key) || key.code == KeyCode::Char('q') {
            return Some(());
        }
        if is_up(&key) {
            self.selected = wrap_step(self.selected, self.entries.len(), false);
        } else if is_down(&key) {
            self.selected = wrap_step(self.selected, self.entries.len(), true);
        }
        None
    }
}

pub fn run_media(entries: &[MediaEntry], root: impl Into<PathBuf>) -> Result<()> {
    run_screen(&mut MediaScreen::new(entries, root))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::ui::components::runner::testing::render_to_string;

    #[test]
    fn lists_configured_media_with_status() {
        let config = Config::builtin();
        let root = std::env::temp_dir().join("data-showcase-media-screen-missing");
        let screen = MediaScreen::new(&config.media, root);
        let text = render_to_string(&screen, 100, 12);
        assert!(text.contains("Video promosi (lokal)"));
        assert!(text.contains("[file tidak ditemukan]"));
        assert!(text.contains("https://youtu.be/oejoowV-cek"));
        assert!(text.contains("[tautan]"));
    }
}
