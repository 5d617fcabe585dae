use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{prelude::*, widgets::*};

use crate::error::Result;
use crate::records::series::{training_history, ChartKind, TrainingHistory};
use crate::ui::components::{
    chart::render_history,
    keys::is_back,
    run_screen,
    styles::{help_style, selection_style, title_style},
    utils::screen_chunks,
    Screen,
};

pub struct ChartsScreen {
    history: TrainingHistory,
    kind: ChartKind,
}

impl ChartsScreen {
    pub fn new() -> Self {
        Self {
            history: training_history(),
            kind: ChartKind::Line,
        }
    }

    pub fn kind(&self) -> ChartKind {
        self.kind
    }
}

impl Default for ChartsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for ChartsScreen {
    type Output = ();

    fn render(&self, f: &mut Frame<'_>) {
        let (header_area, chart_area, help_area) = screen_chunks(f.size(), 2);

        let mut tabs = vec![Span::raw("Grafik: ")];
        for kind in ChartKind::ALL {
            let label = format!(" {} Chart ", kind.label());
            if kind == self.kind {
                tabs.push(Span::styled(label, selection_style()));
            } else {
                tabs.push(Span::raw(label));
            }
        }
        f.render_widget(
            Paragraph::new(vec![
                Line::styled("Progres Pelatihan Model", title_style()),
                Line::from(tabs),
            ]),
            header_area,
        );

        render_history(f, chart_area, &self.history, self.kind);

        f.render_widget(
            Paragraph::new("←/→ or h/l switch chart • Esc back").style(help_style()),
            help_area,
        );
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<()> {
        if is_back(&key) || key.code == KeyCode::Char('q') {
            return Some(());
        }
        match key.code {
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => self.kind = self.kind.next(),
            KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => self.kind = self.kind.prev(),
            _ => {}
        }
        None
    }
}

pub fn run_charts() -> Result<()> {
    run_screen(&mut ChartsScreen::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::keys::press;
    use crate::ui::components::runner::testing::render_to_string;

    #[test]
    fn arrows_cycle_chart_kinds() {
        let mut screen = ChartsScreen::new();
        screen.handle_key(press(KeyCode::Right));
        assert_eq!(screen.kind(), ChartKind::Bar);
        screen.handle_key(press(KeyCode::Left));
        screen.handle_key(press(KeyCode::Left));
        assert_eq!(screen.kind(), ChartKind::Area);
        assert_eq!(screen.handle_key(press(KeyCode::Esc)), Some(()));
    }

    #[test]
    fn every_kind_renders() {
        let mut screen = ChartsScreen::new();
        for _ in ChartKind::ALL {
            let text = render_to_string(&screen, 100, 30);
            assert!(text.contains(&format!(" {} Chart ", screen.kind().label())));
            screen.handle_key(press(KeyCode::Right));
        }
    }
}
