use std::convert::TryFrom;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Row, Table},
};
use unicode_width::UnicodeWidthStr;

use crate::records::DataTable;
use crate::utils::truncate_to_width;

use super::styles::{header_cell_style, selection_style};

/// Widest a single column is allowed to grow before cells are truncated.
const MAX_COLUMN_WIDTH: usize = 32;

pub fn build_table<'a>(
    rows: Vec<Row<'a>>,
    header: Row<'a>,
    widths: Vec<Constraint>,
    title: impl Into<String>,
) -> Table<'a> {
    Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(title.into()))
        .column_spacing(2)
}

pub fn highlight_row(row: Row<'_>) -> Row<'_> {
    row.style(selection_style())
}

/// Cursor and scroll offset over a list of `total` rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableViewport {
    pub selected: usize,
    pub offset: usize,
}

impl TableViewport {
    /// Keep the cursor inside `total` rows and visible within `capacity` lines.
    pub fn clamp(&mut self, total: usize, capacity: usize) {
        let capacity = capacity.max(1);
        if total == 0 {
            self.selected = 0;
            self.offset = 0;
            return;
        }
        self.selected = self.selected.min(total - 1);
        if self.selected < self.offset {
            self.offset = self.selected;
        }
        if self.selected >= self.offset + capacity {
            self.offset = self.selected + 1 - capacity;
        }
        self.offset = self.offset.min(total.saturating_sub(capacity));
    }

    pub fn down(&mut self, total: usize) {
        if total > 0 {
            self.selected = (self.selected + 1) % total;
        }
    }

    pub fn up(&mut self, total: usize) {
        if total > 0 {
            self.selected = self.selected.checked_sub(1).unwrap_or(total - 1);
        }
    }

    pub fn page_down(&mut self, total: usize, capacity: usize) {
        if total > 0 {
            self.selected = (self.selected + capacity.max(1)).min(total - 1);
        }
    }

    pub fn page_up(&mut self, capacity: usize) {
        self.selected = self.selected.saturating_sub(capacity.max(1));
    }

    pub fn home(&mut self) {
        self.selected = 0;
        self.offset = 0;
    }

    pub fn end(&mut self, total: usize) {
        self.selected = total.saturating_sub(1);
    }
}

/// Per-column widths fitted to header and cell display widths.
pub fn column_widths(table: &DataTable) -> Vec<usize> {
    table
        .columns()
        .iter()
        .enumerate()
        .map(|(idx, header)| {
            let data = table
                .rows()
                .iter()
                .map(|row| UnicodeWidthStr::width(row[idx].to_string().as_str()))
                .max()
                .unwrap_or(0);
            UnicodeWidthStr::width(header.as_str())
                .max(data)
                .clamp(1, MAX_COLUMN_WIDTH)
        })
        .collect()
}

/// Build the visible window of a [`DataTable`] as a ratatui `Table`.
///
/// `order` maps display positions to row indices; `sort` marks the sorted column header.
pub fn data_table_widget<'a>(
    table: &'a DataTable,
    order: &[usize],
    viewport: TableViewport,
    capacity: usize,
    sort: Option<(usize, bool)>,
    title: String,
) -> Table<'a> {
    let widths = column_widths(table);
    let end = (viewport.offset + capacity).min(order.len());
    let start = viewport.offset.min(end);

    let rows: Vec<Row> = order[start..end]
        .iter()
        .enumerate()
        .map(|(i, &row_idx)| {
            let cells: Vec<Cell> = table.rows()[row_idx]
                .iter()
                .zip(&widths)
                .map(|(cell, width)| Cell::from(truncate_to_width(&cell.to_string(), *width)))
                .collect();
            let row = Row::new(cells);
            if start + i == viewport.selected {
                highlight_row(row)
            } else {
                row
            }
        })
        .collect();

    let header = Row::new(
        table
            .columns()
            .iter()
            .enumerate()
            .map(|(idx, label)| {
                let mut content = label.clone();
                let mut style = header_cell_style();
                if let Some((column, descending)) = sort {
                    if column == idx {
                        content.push_str(if descending { " ↓" } else { " ↑" });
                        style = style.add_modifier(Modifier::BOLD);
                    }
                }
                Cell::from(content).style(style)
            })
            .collect::<Vec<_>>(),
    );

    let constraints = widths
        .iter()
        .map(|w| Constraint::Length(u16::try_from(w + 2).unwrap_or(u16::MAX)))
        .collect();

    build_table(rows, header, constraints, title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{sample_people, CellValue};

    #[test]
    fn viewport_follows_cursor() {
        let mut viewport = TableViewport::default();
        for _ in 0..7 {
            viewport.down(10);
        }
        viewport.clamp(10, 5);
        assert_eq!(viewport.selected, 7);
        assert_eq!(viewport.offset, 3);

        viewport.home();
        viewport.up(10);
        viewport.clamp(10, 5);
        assert_eq!(viewport.selected, 9);
        assert_eq!(viewport.offset, 5);

        viewport.page_up(5);
        viewport.clamp(10, 5);
        assert_eq!((viewport.selected, viewport.offset), (4, 4));
    }

    #[test]
    fn empty_table_resets_viewport() {
        let mut viewport = TableViewport {
            selected: 4,
            offset: 2,
        };
        viewport.clamp(0, 5);
        assert_eq!(viewport, TableViewport::default());
    }

    #[test]
    fn widths_fit_headers_and_cells() {
        let table = sample_people();
        assert_eq!(column_widths(&table), vec![6, 4, 9, 14]);

        let wide = DataTable::new(
            "w",
            vec!["x".to_string()],
            vec![vec![CellValue::from("y".repeat(80))]],
        );
        assert_eq!(column_widths(&wide), vec![MAX_COLUMN_WIDTH]);
    }
}
