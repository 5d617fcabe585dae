use std::cell::Cell;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{prelude::*, widgets::*};

use crate::error::Result;
use crate::records::{DataTable, Describe};
use crate::ui::components::{
    keys::{is_back, is_down, is_up},
    run_screen,
    styles::{help_style, info_style, title_style},
    table::data_table_widget,
    utils::{screen_chunks, split_horizontal},
    Screen, TableViewport,
};

/// Width reserved for the statistics panel.
const STATS_PANEL_WIDTH: u16 = 28;

/// Scrollable, sortable view of one table, optionally with descriptive statistics.
pub struct TableView {
    table: DataTable,
    title: String,
    subtitle: Option<String>,
    stats: Option<(String, Describe)>,
    order: Vec<usize>,
    sort: Option<(usize, bool)>,
    viewport: TableViewport,
    /// Rows that fit in the last render; drives paging.
    page_rows: Cell<usize>,
}

impl TableView {
    pub fn new(table: DataTable, title: impl Into<String>) -> Self {
        let order = (0..table.row_count()).collect();
        Self {
            table,
            title: title.into(),
            subtitle: None,
            stats: None,
            order,
            sort: None,
            viewport: TableViewport::default(),
            page_rows: Cell::new(10),
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Show `describe` output for `column` next to the table.
    pub fn with_stats(mut self, column: impl Into<String>, stats: Describe) -> Self {
        self.stats = Some((column.into(), stats));
        self
    }

    pub fn selected_row(&self) -> Option<usize> {
        self.order.get(self.viewport.selected).copied()
    }

    pub fn sort(&self) -> Option<(usize, bool)> {
        self.sort
    }

    /// Unsorted, then each column ascending in turn, then back to unsorted.
    fn cycle_sort_column(&mut self) {
        let columns = self.table.columns().len();
        self.sort = match self.sort {
            None if columns > 0 => Some((0, false)),
            Some((col, descending)) if col + 1 < columns => Some((col + 1, descending)),
            _ => None,
        };
        self.apply_sort();
    }

    fn flip_direction(&mut self) {
        if let Some((col, descending)) = self.sort {
            self.sort = Some((col, !descending));
            self.apply_sort();
        }
    }

    fn apply_sort(&mut self) {
        self.order = match self.sort {
            Some((col, descending)) => self.table.sorted_row_indices(col, descending),
            None => (0..self.table.row_count()).collect(),
        };
        self.viewport.home();
    }

    fn stats_widget(&self) -> Option<Paragraph<'static>> {
        let (column, stats) = self.stats.as_ref()?;
        let lines: Vec<Line> = stats
            .rows()
            .into_iter()
            .map(|(label, value)| {
                Line::from(vec![
                    Span::styled(format!("{label:<6}"), Style::default().fg(Color::Yellow)),
                    Span::raw(format!("{value:>16}")),
                ])
            })
            .collect();
        Some(
            Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("Statistik {column}")),
            ),
        )
    }
}

impl Screen for TableView {
    type Output = ();

    fn render(&self, f: &mut Frame<'_>) {
        let title_height = if self.subtitle.is_some() { 2 } else { 1 };
        let (header_area, body_area, help_area) = screen_chunks(f.size(), title_height);

        let mut header = vec![Line::styled(self.title.clone(), title_style())];
        if let Some(subtitle) = &self.subtitle {
            header.push(Line::styled(subtitle.clone(), info_style()));
        }
        f.render_widget(Paragraph::new(header), header_area);

        let table_area = match self.stats_widget() {
            Some(widget) => {
                let chunks = split_horizontal(
                    body_area,
                    &[Constraint::Min(10), Constraint::Length(STATS_PANEL_WIDTH)],
                );
                f.render_widget(widget, chunks[1]);
                chunks[0]
            }
            None => body_area,
        };

        // Borders plus header row.
        let capacity = table_area.height.saturating_sub(3).max(1) as usize;
        self.page_rows.set(capacity);

        if self.table.is_empty() {
            f.render_widget(
                Paragraph::new("Tabel kosong.").block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(self.table.name().to_string()),
                ),
                table_area,
            );
        } else {
            let mut viewport = self.viewport;
            viewport.clamp(self.order.len(), capacity);
            let title = format!(
                "{} — row {}/{}",
                self.table.name(),
                viewport.selected + 1,
                self.order.len()
            );
            let widget =
                data_table_widget(&self.table, &self.order, viewport, capacity, self.sort, title);
            f.render_widget(widget, table_area);
        }

        let sort_hint = match self.sort {
            Some((col, descending)) => format!(
                "sorted by {} {}",
                self.table.columns()[col],
                if descending { "desc" } else { "asc" }
            ),
            None => "unsorted".to_string(),
        };
        f.render_widget(
            Paragraph::new(format!(
                "↑/↓ move • PgUp/PgDn page • Home/End • s sort column • d direction ({sort_hint}) • Esc back"
            ))
            .style(help_style()),
            help_area,
        );
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<()> {
        if is_back(&key) || key.code == KeyCode::Char('q') {
            return Some(());
        }
        let total = self.order.len();
        let page = self.page_rows.get();
        if is_up(&key) {
            self.viewport.up(total);
        } else if is_down(&key) {
            self.viewport.down(total);
        } else {
            match key.code {
                KeyCode::PageDown => self.viewport.page_down(total, page),
                KeyCode::PageUp => self.viewport.page_up(page),
                KeyCode::Home | KeyCode::Char('g') => self.viewport.home(),
                KeyCode::End | KeyCode::Char('G') => self.viewport.end(total),
                KeyCode::Char('s') => self.cycle_sort_column(),
                KeyCode::Char('d') => self.flip_direction(),
                _ => {}
            }
        }
        self.viewport.clamp(total, page);
        None
    }
}

pub fn run_table_view(view: &mut TableView) -> Result<()> {
    run_screen(view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{describe_age, sample_people};
    use crate::ui::components::keys::press;
    use crate::ui::components::runner::testing::render_to_string;

    #[test]
    fn sort_cycles_columns_and_flips() {
        let mut view = TableView::new(sample_people(), "Sample");
        view.handle_key(press(KeyCode::Char('s')));
        view.handle_key(press(KeyCode::Char('s')));
        assert_eq!(view.sort(), Some((1, false)));
        // Youngest first: Naufal (18).
        assert_eq!(view.selected_row(), Some(1));

        view.handle_key(press(KeyCode::Char('d')));
        assert_eq!(view.sort(), Some((1, true)));
        assert_eq!(view.selected_row(), Some(4));

        for _ in 0..3 {
            view.handle_key(press(KeyCode::Char('s')));
        }
        assert_eq!(view.sort(), None);
        assert_eq!(view.selected_row(), Some(0));
    }

    #[test]
    fn cursor_wraps_and_jumps() {
        let mut view = TableView::new(sample_people(), "Sample");
        view.handle_key(press(KeyCode::Up));
        assert_eq!(view.selected_row(), Some(4));
        view.handle_key(press(KeyCode::Home));
        assert_eq!(view.selected_row(), Some(0));
        view.handle_key(press(KeyCode::End));
        assert_eq!(view.selected_row(), Some(4));
        assert_eq!(view.handle_key(press(KeyCode::Esc)), Some(()));
    }

    #[test]
    fn renders_rows_and_stats_panel() {
        let table = sample_people();
        let stats = describe_age(&table).expect("ages");
        let view = TableView::new(table, "Pratinjau").with_stats("Umur", stats);
        let text = render_to_string(&view, 100, 16);
        assert!(text.contains("Pratinjau"));
        assert!(text.contains("Naufal"));
        assert!(text.contains("Statistik Umur"));
        assert!(text.contains("21.800000"));
    }
}
