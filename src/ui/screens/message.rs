use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{prelude::*, widgets::*};

use crate::error::Result;
use crate::ui::components::{
    keys::is_back,
    run_screen,
    styles::{error_style, help_style, info_style, success_style},
    utils::centered_rect,
    Screen,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

/// Dismissable notice box.
pub struct Notice {
    kind: NoticeKind,
    title: String,
    body: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            body: body.into(),
        }
    }
}

impl Screen for Notice {
    type Output = ();

    fn render(&self, f: &mut Frame<'_>) {
        let area = centered_rect(70, 40, f.size());
        let style = match self.kind {
            NoticeKind::Info => info_style(),
            NoticeKind::Success => success_style(),
            NoticeKind::Error => error_style(),
        };
        f.render_widget(Clear, area);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(style)
            .title(self.title.clone());
        let inner = block.inner(area);
        f.render_widget(block, area);

        let mut lines: Vec<Line> = self
            .body
            .lines()
            .map(|line| Line::styled(line.to_string(), style))
            .collect();
        lines.push(Line::from(""));
        lines.push(Line::styled("Enter/Esc to continue", help_style()));
        f.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .alignment(Alignment::Center),
            inner,
        );
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<()> {
        (is_back(&key) || matches!(key.code, KeyCode::Enter | KeyCode::Char(' '))).then_some(())
    }
}

pub fn show_notice(kind: NoticeKind, title: &str, body: &str) -> Result<()> {
    run_screen(&mut Notice::new(kind, title, body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::keys::press;
    use crate::ui::components::runner::testing::render_to_string;

    #[test]
    fn notice_renders_body_and_dismisses() {
        let mut notice = Notice::new(
            NoticeKind::Error,
            "API Users",
            "Gagal mengambil data dari API: Status code 404",
        );
        let text = render_to_string(&notice, 100, 20);
        assert!(text.contains("Status code 404"));
        assert_eq!(notice.handle_key(press(KeyCode::Char('x'))), None);
        assert_eq!(notice.handle_key(press(KeyCode::Enter)), Some(()));
    }
}
