use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{prelude::*, widgets::*};

use crate::error::Result;
use crate::ui::components::{
    keys::{is_back, is_down, is_up, wrap_step},
    run_screen,
    styles::{help_style, info_style, selection_style},
    utils::screen_chunks,
    Screen,
};
use crate::utils::{format_file_modified, FileEntry};

/// Shown when the uploads folder has nothing to preview.
pub const EMPTY_UPLOAD_PROMPT: &str = "Silakan unggah file Excel/PDF untuk menampilkan data.";

/// Picks one file from the uploads folder.
pub struct UploadPicker {
    files: Vec<FileEntry>,
    selected: usize,
    folder: String,
    accepted: String,
}

impl UploadPicker {
    pub fn new(files: Vec<FileEntry>, folder: impl Into<String>, accepted: impl Into<String>) -> Self {
        Self {
            files,
            selected: 0,
            folder: folder.into(),
            accepted: accepted.into(),
        }
    }
}

impl Screen for UploadPicker {
    type Output = Option<PathBuf>;

    fn render(&self, f: &mut Frame<'_>) {
        let (header_area, body_area, help_area) = screen_chunks(f.size(), 2);

        f.render_widget(
            Paragraph::new(vec![
                Line::styled(
                    "Unggah File Excel atau PDF",
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Line::from(format!("Folder: {}  •  Tipe: {}", self.folder, self.accepted)),
            ]),
            header_area,
        );

        if self.files.is_empty() {
            f.render_widget(
                Paragraph::new(vec![
                    Line::styled(EMPTY_UPLOAD_PROMPT, info_style()),
                    Line::from(""),
                    Line::from(format!(
                        "Salin file {} ke folder {} lalu buka menu ini lagi.",
                        self.accepted, self.folder
                    )),
                ])
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL).title("Upload")),
                body_area,
            );
            f.render_widget(Paragraph::new("Esc back").style(help_style()), help_area);
            return;
        }

        let items: Vec<ListItem> = self
            .files
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let kb = entry.size as f64 / 1024.0;
                let text = format!(
                    "{}  —  {}  —  {:.1} KB",
                    entry.name,
                    format_file_modified(entry.modified),
                    kb
                );
                let line = Line::from(text);
                if i == self.selected {
                    ListItem::new(line).style(selection_style())
                } else {
                    ListItem::new(line)
                }
            })
            .collect();
        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Pilih file — ↑/↓/j/k move, Enter select, Esc cancel"),
        );
        f.render_widget(list, body_area);
        f.render_widget(
            Paragraph::new("Newest first • Enter preview • Esc back").style(help_style()),
            help_area,
        );
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Option<PathBuf>> {
        if is_back(&key) {
            return Some(None);
        }
        if self.files.is_empty() {
            return (key.code == KeyCode::Enter).then_some(None);
        }
        if is_up(&key) {
            self.selected = wrap_step(self.selected, self.files.len(), false);
        } else if is_down(&key) {
            self.selected = wrap_step(self.selected, self.files.len(), true);
        } else if key.code == KeyCode::Enter {
            return Some(Some(self.files[self.selected].path.clone()));
        }
        None
    }
}

pub fn run_upload_picker(picker: &mut UploadPicker) -> Result<Option<PathBuf>> {
    run_screen(picker)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::keys::press;
    use crate::ui::components::runner::testing::render_to_string;
    use std::time::SystemTime;

    fn entry(name: &str) -> FileEntry {
        FileEntry {
            name: name.to_string(),
            path: PathBuf::from("assets/uploads").join(name),
            modified: SystemTime::now(),
            size: 2048,
        }
    }

    #[test]
    fn empty_folder_shows_prompt() {
        let mut picker = UploadPicker::new(Vec::new(), "assets/uploads", ".xlsx/.csv");
        let text = render_to_string(&picker, 90, 10);
        assert!(text.contains(EMPTY_UPLOAD_PROMPT));
        assert_eq!(picker.handle_key(press(KeyCode::Down)), None);
        assert_eq!(picker.handle_key(press(KeyCode::Enter)), Some(None));
    }

    #[test]
    fn enter_returns_selected_path() {
        let mut picker = UploadPicker::new(
            vec![entry("b.csv"), entry("a.xlsx")],
            "assets/uploads",
            ".xlsx/.csv",
        );
        let text = render_to_string(&picker, 90, 10);
        assert!(text.contains("b.csv"));
        assert!(text.contains("2.0 KB"));

        picker.handle_key(press(KeyCode::Char('j')));
        assert_eq!(
            picker.handle_key(press(KeyCode::Enter)),
            Some(Some(PathBuf::from("assets/uploads/a.xlsx")))
        );
    }
}
