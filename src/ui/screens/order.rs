use crossterm::event::{KeyCode, KeyEvent};
use log::info;
use ratatui::{prelude::*, widgets::*};

use crate::error::Result;
use crate::records::order::{OrderConfirmation, MAX_QUANTITY};
use crate::records::{summarize, Catalog, OrderSummary, QuantitySelection};
use crate::ui::components::{
    build_table, highlight_row,
    keys::{is_back, is_down, is_up, wrap_step},
    run_screen,
    styles::{header_cell_style, help_style, info_style, success_style, title_style},
    utils::{screen_chunks, split_vertical},
    Screen,
};
use crate::utils::format_rupiah;

/// Shown whenever nothing has been picked yet.
pub const EMPTY_ORDER_PROMPT: &str = "Silakan pilih barang thrift dan jumlahnya.";

pub struct OrderScreen<'a> {
    catalog: &'a Catalog,
    selection: &'a mut QuantitySelection,
    cursor: usize,
    confirmation: Option<OrderConfirmation>,
}

impl<'a> OrderScreen<'a> {
    pub fn new(catalog: &'a Catalog, selection: &'a mut QuantitySelection) -> Self {
        Self {
            catalog,
            selection,
            cursor: 0,
            confirmation: None,
        }
    }

    pub fn summary(&self) -> OrderSummary {
        summarize(self.catalog, self.selection)
    }

    pub fn confirmation(&self) -> Option<&OrderConfirmation> {
        self.confirmation.as_ref()
    }

    fn current_item(&self) -> Option<&str> {
        self.catalog
            .entries()
            .get(self.cursor)
            .map(|entry| entry.name.as_str())
    }

    fn change_quantity(&mut self, up: bool) {
        let Some(item) = self.current_item().map(str::to_string) else {
            return;
        };
        if up {
            self.selection.increment(&item);
        } else {
            self.selection.decrement(&item);
        }
        self.confirmation = None;
    }

    fn submit(&mut self) {
        // Empty orders cannot be submitted.
        if let Some(confirmation) = self.summary().submit() {
            info!(
                "Thrift order submitted: {} item(s), total {}",
                confirmation.items, confirmation.total
            );
            self.confirmation = Some(confirmation);
        }
    }

    fn catalog_table(&self) -> Table<'static> {
        let rows: Vec<Row> = self
            .catalog
            .entries()
            .iter()
            .enumerate()
            .map(|(idx, entry)| {
                let quantity = self.selection.get(&entry.name).get();
                let row = Row::new(vec![
                    Cell::from(entry.name.clone()),
                    Cell::from(format_rupiah(entry.unit_price)),
                    Cell::from(format!("◀ {quantity:>2} ▶")),
                ]);
                if idx == self.cursor {
                    highlight_row(row)
                } else {
                    row
                }
            })
            .collect();
        let header = Row::new(vec![
            Cell::from("Barang").style(header_cell_style()),
            Cell::from("Harga").style(header_cell_style()),
            Cell::from(format!("Jumlah (0-{MAX_QUANTITY})")).style(header_cell_style()),
        ]);
        build_table(
            rows,
            header,
            vec![
                Constraint::Length(20),
                Constraint::Length(12),
                Constraint::Length(14),
            ],
            "Katalog Thrift",
        )
    }

    fn summary_lines(&self) -> Vec<Line<'static>> {
        match self.summary() {
            OrderSummary::Empty => vec![Line::styled(EMPTY_ORDER_PROMPT, info_style())],
            OrderSummary::Lines { lines, total } => {
                let mut out: Vec<Line> = lines
                    .iter()
                    .map(|line| Line::from(format!("- {}", line.describe())))
                    .collect();
                out.push(Line::from(""));
                out.push(Line::styled(
                    format!("Total Harga: {}", format_rupiah(total)),
                    Style::default().add_modifier(Modifier::BOLD),
                ));
                if let Some(confirmation) = &self.confirmation {
                    out.push(Line::from(""));
                    out.push(Line::styled(confirmation.message(), success_style()));
                }
                out
            }
        }
    }
}

impl Screen for OrderScreen<'_> {
    type Output = ();

    fn render(&self, f: &mut Frame<'_>) {
        let (header_area, body_area, help_area) = screen_chunks(f.size(), 1);
        f.render_widget(
            Paragraph::new("Kalkulator Pemesanan Barang Thrift").style(title_style()),
            header_area,
        );

        let table_height = self.catalog.len() as u16 + 3;
        let chunks = split_vertical(
            body_area,
            &[Constraint::Length(table_height), Constraint::Min(3)],
        );
        f.render_widget(self.catalog_table(), chunks[0]);
        f.render_widget(
            Paragraph::new(self.summary_lines())
                .wrap(Wrap { trim: false })
                .block(Block::default().borders(Borders::ALL).title("Ringkasan Pesanan")),
            chunks[1],
        );

        f.render_widget(
            Paragraph::new("↑/↓ item • ←/→ or -/+ quantity • Enter pesan • Esc back")
                .style(help_style()),
            help_area,
        );
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<()> {
        if is_back(&key) || key.code == KeyCode::Char('q') {
            return Some(());
        }
        if is_up(&key) {
            self.cursor = wrap_step(self.cursor, self.catalog.len(), false);
        } else if is_down(&key) {
            self.cursor = wrap_step(self.cursor, self.catalog.len(), true);
        } else {
            match key.code {
                KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => {
                    self.change_quantity(true)
                }
                KeyCode::Left | KeyCode::Char('-') => self.change_quantity(false),
                KeyCode::Enter => self.submit(),
                _ => {}
            }
        }
        None
    }
}

pub fn run_order(catalog: &Catalog, selection: &mut QuantitySelection) -> Result<()> {
    run_screen(&mut OrderScreen::new(catalog, selection))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::keys::press;
    use crate::ui::components::runner::testing::render_to_string;

    #[test]
    fn empty_submit_is_a_no_op() {
        let catalog = Catalog::thrift();
        let mut selection = QuantitySelection::new();
        let mut screen = OrderScreen::new(&catalog, &mut selection);
        screen.handle_key(press(KeyCode::Enter));
        assert!(screen.confirmation().is_none());
        let text = render_to_string(&screen, 80, 20);
        assert!(text.contains(EMPTY_ORDER_PROMPT));
        assert!(!text.contains("Total Harga"));
    }

    #[test]
    fn quantities_drive_summary_and_confirmation() {
        let catalog = Catalog::thrift();
        let mut selection = QuantitySelection::new();
        let mut screen = OrderScreen::new(&catalog, &mut selection);
        screen.handle_key(press(KeyCode::Right));
        screen.handle_key(press(KeyCode::Char('+')));
        screen.handle_key(press(KeyCode::Down));
        screen.handle_key(press(KeyCode::Right));

        let summary = screen.summary();
        assert_eq!(summary.total(), Some(250_000));

        screen.handle_key(press(KeyCode::Enter));
        assert_eq!(screen.confirmation().map(|c| c.total), Some(250_000));
        let text = render_to_string(&screen, 80, 22);
        assert!(text.contains("Kaos Vintage x 2 = Rp 100,000"));
        assert!(text.contains("Total Harga: Rp 250,000"));
        assert!(text.contains("Pesanan thrift Anda telah diterima"));

        // Editing after confirming clears the confirmation.
        screen.handle_key(press(KeyCode::Left));
        assert!(screen.confirmation().is_none());
        assert_eq!(screen.handle_key(press(KeyCode::Esc)), Some(()));
        drop(screen);
        assert_eq!(selection.get("Kaos Vintage").get(), 2);
        assert_eq!(selection.get("Jaket Denim").get(), 0);
    }

    #[test]
    fn quantity_saturates_at_maximum() {
        let catalog = Catalog::thrift();
        let mut selection = QuantitySelection::new();
        let mut screen = OrderScreen::new(&catalog, &mut selection);
        for _ in 0..15 {
            screen.handle_key(press(KeyCode::Right));
        }
        assert_eq!(screen.summary().lines()[0].quantity, MAX_QUANTITY);
    }
}
