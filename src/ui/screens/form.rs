use std::path::{Path, PathBuf};

use crossterm::event::{KeyCode, KeyEvent};
use log::info;
use ratatui::{prelude::*, widgets::*};

use crate::error::Result;
use crate::records::form::{FieldError, FormDraft, FormField, Submission};
use crate::records::media::resolve_local;
use crate::ui::components::{
    keys::is_back,
    run_screen,
    styles::{error_style, help_style, selection_style, success_style, title_style},
    text::markdown_line,
    utils::{screen_chunks, split_horizontal},
    Screen,
};

/// Result of the last submit attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum FormOutcome {
    Pending,
    Submitted {
        submission: Submission,
        /// Photo line, checked against the filesystem once at submit.
        photo_note: Option<String>,
    },
    Rejected(Vec<FieldError>),
}

/// Edits the shared draft so values survive leaving and re-entering the form.
pub struct FormScreen<'a> {
    draft: &'a mut FormDraft,
    root: PathBuf,
    focus: usize,
    outcome: FormOutcome,
}

impl<'a> FormScreen<'a> {
    /// Relative photo paths are resolved against `root`, like media files.
    pub fn new(draft: &'a mut FormDraft, root: &Path) -> Self {
        Self {
            draft,
            root: root.to_path_buf(),
            focus: 0,
            outcome: FormOutcome::Pending,
        }
    }

    pub fn focused(&self) -> FormField {
        FormField::ALL[self.focus]
    }

    pub fn outcome(&self) -> &FormOutcome {
        &self.outcome
    }

    fn move_focus(&mut self, forward: bool) {
        let len = FormField::ALL.len();
        self.focus = if forward {
            (self.focus + 1) % len
        } else {
            (self.focus + len - 1) % len
        };
    }

    fn submit(&mut self) {
        self.outcome = match self.draft.submit() {
            Ok(submission) => {
                info!("Form submitted for {:?}", submission.name);
                let photo_note = self.photo_note(&submission);
                FormOutcome::Submitted {
                    submission,
                    photo_note,
                }
            }
            Err(errors) => {
                info!("Form rejected with {} invalid field(s)", errors.len());
                FormOutcome::Rejected(errors)
            }
        };
    }

    fn photo_note(&self, submission: &Submission) -> Option<String> {
        let photo = submission.photo()?;
        let path = photo.path();
        if resolve_local(&self.root, path).is_file() {
            Some(format!("{}: {}", photo.caption(), path.display()))
        } else {
            info!("Photo {} not found under {}", path.display(), self.root.display());
            Some(format!("{}: {} (file tidak ditemukan)", photo.caption(), path.display()))
        }
    }

    fn field_lines(&self) -> Vec<Line<'static>> {
        FormField::ALL
            .iter()
            .enumerate()
            .map(|(idx, field)| {
                let mut value = self.draft.display_value(*field);
                let focused = idx == self.focus;
                if focused && !field.is_choice() {
                    value.push('▏');
                }
                let label = Span::styled(
                    format!("{:<16}", field.label()),
                    Style::default().add_modifier(Modifier::BOLD),
                );
                let line = Line::from(vec![label, Span::raw(value)]);
                if focused {
                    line.style(selection_style())
                } else {
                    line
                }
            })
            .collect()
    }

    fn outcome_lines(&self) -> Vec<Line<'static>> {
        match &self.outcome {
            FormOutcome::Pending => vec![Line::styled(
                "Isi form lalu tekan Enter untuk mengirim.",
                help_style(),
            )],
            FormOutcome::Rejected(errors) => {
                let mut lines = vec![Line::styled("Data belum valid:", error_style())];
                lines.extend(
                    errors
                        .iter()
                        .map(|err| Line::styled(format!("- {err}"), error_style())),
                );
                lines
            }
            FormOutcome::Submitted {
                submission,
                photo_note,
            } => {
                let mut lines = vec![markdown_line(&submission.success_message(), success_style())];
                lines.extend(submission.echo_lines().into_iter().map(Line::from));
                if let Some(note) = photo_note {
                    lines.push(Line::from(""));
                    lines.push(Line::from(note.clone()));
                }
                lines
            }
        }
    }
}

impl Screen for FormScreen<'_> {
    type Output = ();

    fn render(&self, f: &mut Frame<'_>) {
        let (header_area, body_area, help_area) = screen_chunks(f.size(), 1);
        f.render_widget(
            Paragraph::new("Form Input Data Pengguna").style(title_style()),
            header_area,
        );

        let chunks = split_horizontal(
            body_area,
            &[Constraint::Percentage(55), Constraint::Percentage(45)],
        );
        f.render_widget(
            Paragraph::new(self.field_lines())
                .block(Block::default().borders(Borders::ALL).title("Form")),
            chunks[0],
        );
        f.render_widget(
            Paragraph::new(self.outcome_lines())
                .wrap(Wrap { trim: false })
                .block(Block::default().borders(Borders::ALL).title("Hasil")),
            chunks[1],
        );

        let hint = if self.focused() == FormField::Hobbies {
            "↑/↓ field • ←/→ option • Space toggle • Enter submit • Esc back"
        } else if self.focused().is_choice() {
            "↑/↓ field • ←/→ change • Enter submit • Esc back"
        } else {
            "↑/↓ field • type to edit • Backspace delete • Enter submit • Esc back"
        };
        f.render_widget(Paragraph::new(hint).style(help_style()), help_area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<()> {
        if is_back(&key) {
            return Some(());
        }
        let field = self.focused();
        match key.code {
            KeyCode::Up | KeyCode::BackTab => self.move_focus(false),
            KeyCode::Down | KeyCode::Tab => self.move_focus(true),
            KeyCode::Enter => self.submit(),
            KeyCode::Left if field.is_choice() => self.draft.step_choice(field, false),
            KeyCode::Right if field.is_choice() => self.draft.step_choice(field, true),
            KeyCode::Char(' ') if field == FormField::Hobbies => self.draft.toggle_hobby(),
            KeyCode::Char(ch) if !field.is_choice() => self.draft.push_char(field, ch),
            KeyCode::Backspace => self.draft.pop_char(field),
            _ => {}
        }
        None
    }
}

pub fn run_form(draft: &mut FormDraft, root: &Path) -> Result<()> {
    run_screen(&mut FormScreen::new(draft, root))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::form::Hobby;
    use crate::ui::components::keys::press;
    use crate::ui::components::runner::testing::render_to_string;
    use chrono::{NaiveDate, NaiveTime};

    fn draft() -> FormDraft {
        FormDraft::new(
            NaiveDate::from_ymd_opt(2000, 1, 2).unwrap(),
            NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
        )
    }

    fn type_text(screen: &mut FormScreen<'_>, text: &str) {
        for ch in text.chars() {
            screen.handle_key(press(KeyCode::Char(ch)));
        }
    }

    #[test]
    fn typing_and_choices_edit_the_draft() {
        let mut draft = draft();
        {
            let mut screen = FormScreen::new(&mut draft, Path::new("."));
            type_text(&mut screen, "Sifa");
            // Age: clear the default 0 and type digits.
            screen.handle_key(press(KeyCode::Down));
            screen.handle_key(press(KeyCode::Down));
            screen.handle_key(press(KeyCode::Backspace));
            type_text(&mut screen, "2x1");
            for _ in 0..4 {
                screen.handle_key(press(KeyCode::Down));
            }
            assert_eq!(screen.focused(), FormField::Hobbies);
            screen.handle_key(press(KeyCode::Right));
            screen.handle_key(press(KeyCode::Char(' ')));
            assert_eq!(screen.handle_key(press(KeyCode::Esc)), Some(()));
        }
        assert_eq!(draft.name, "Sifa");
        assert_eq!(draft.age, "21");
        assert_eq!(draft.hobbies, vec![Hobby::Olahraga]);
    }

    #[test]
    fn submit_echoes_or_lists_errors() {
        let mut draft = draft();
        draft.name = "Nadya".to_string();
        draft.color = "blue".to_string();
        let mut screen = FormScreen::new(&mut draft, Path::new("."));

        screen.handle_key(press(KeyCode::Enter));
        assert!(matches!(screen.outcome(), FormOutcome::Rejected(errors) if errors.len() == 1));
        let text = render_to_string(&screen, 120, 20);
        assert!(text.contains("Data belum valid"));

        screen.draft.color = "#ff0000".to_string();
        screen.handle_key(press(KeyCode::Enter));
        assert!(matches!(screen.outcome(), FormOutcome::Submitted { .. }));
        let text = render_to_string(&screen, 120, 20);
        assert!(text.contains("Nadya"));
        assert!(text.contains("- Usia: 0 tahun"));
    }

    #[test]
    fn missing_photo_is_a_note() {
        let mut draft = draft();
        draft.camera_capture = "definitely/not/here.png".to_string();
        let mut screen = FormScreen::new(&mut draft, Path::new("."));
        screen.handle_key(press(KeyCode::Enter));
        let text = render_to_string(&screen, 200, 24);
        assert!(text.contains("file tidak ditemukan"));
    }

    #[test]
    fn photo_path_resolves_against_workspace_root() {
        let root = std::env::temp_dir().join(format!("data-showcase-form-{}", std::process::id()));
        std::fs::create_dir_all(&root).expect("create root");
        std::fs::write(root.join("foto.png"), b"\0").expect("write photo");

        let mut draft = draft();
        draft.photo_upload = "foto.png".to_string();
        let mut screen = FormScreen::new(&mut draft, &root);
        screen.handle_key(press(KeyCode::Enter));
        match screen.outcome() {
            FormOutcome::Submitted { photo_note, .. } => {
                let note = photo_note.as_deref().expect("photo note");
                assert!(note.ends_with("foto.png"), "{note}");
            }
            other => panic!("unexpected outcome {other:?}"),
        }

        // The note is fixed at submit; removing the file later does not change it.
        std::fs::remove_file(root.join("foto.png")).expect("remove photo");
        let text = render_to_string(&screen, 200, 24);
        assert!(text.contains("foto.png"));
        assert!(!text.contains("file tidak ditemukan"));

        screen.handle_key(press(KeyCode::Enter));
        let text = render_to_string(&screen, 200, 24);
        assert!(text.contains("file tidak ditemukan"));
    }
}
