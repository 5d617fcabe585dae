use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{prelude::*, widgets::*};

use crate::error::Result;
use crate::ui::components::{
    keys::{is_back, is_down, is_up, wrap_step},
    run_screen,
    styles::{help_style, selection_style, title_style},
    utils::screen_chunks,
    Screen,
};

/// Logical actions triggered from the main menu screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Welcome,
    Users,
    Upload,
    Charts,
    Form,
    Order,
    Media,
    About,
    Exit,
}

const ENTRIES: [(&str, &str, MenuAction); 9] = [
    (
        "Welcome",
        "Text, sample table, metrics and random matrix",
        MenuAction::Welcome,
    ),
    ("API Users", "Fetch the public user directory", MenuAction::Users),
    (
        "Upload File",
        "Preview a spreadsheet from the uploads folder",
        MenuAction::Upload,
    ),
    ("Charts", "Line, bar and area charts of training progress", MenuAction::Charts),
    ("User Form", "Fill in and submit the user data form", MenuAction::Form),
    ("Thrift Order", "Pick thrift items and submit an order", MenuAction::Order),
    ("Media", "Configured video references", MenuAction::Media),
    ("About ML", "Sidebar navigator with learning topics", MenuAction::About),
    ("Quit", "Exit Data Showcase", MenuAction::Exit),
];

pub struct MainMenu {
    selected: usize,
    /// Item count of the current order, shown in the header.
    order_items: usize,
}

impl MainMenu {
    pub fn new(order_items: usize) -> Self {
        Self {
            selected: 0,
            order_items,
        }
    }
}

impl Screen for MainMenu {
    type Output = MenuAction;

    fn render(&self, f: &mut Frame<'_>) {
        let (header_area, list_area, help_area) = screen_chunks(f.size(), 3);

        let header_text = if self.order_items == 0 {
            "Data Showcase — Main Menu\nOrder: empty".to_string()
        } else {
            format!(
                "Data Showcase — Main Menu\nOrder: {} item(s) selected",
                self.order_items
            )
        };
        f.render_widget(Paragraph::new(header_text).style(title_style()), header_area);

        let list_items: Vec<ListItem> = ENTRIES
            .iter()
            .enumerate()
            .map(|(i, (label, description, _))| {
                let line = Line::from(vec![
                    Span::styled(
                        format!("{:<14}", label),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(*description, Style::default().fg(Color::Gray)),
                ]);
                let item = ListItem::new(line);
                if i == self.selected {
                    item.style(selection_style())
                } else {
                    item
                }
            })
            .collect();
        let list = List::new(list_items).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Menu (↑/↓ or j/k)"),
        );
        f.render_widget(list, list_area);

        f.render_widget(
            Paragraph::new("↑/↓ or j/k navigate • Enter select • Esc quit • Ctrl+C exit")
                .style(help_style()),
            help_area,
        );
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<MenuAction> {
        if is_back(&key) {
            return Some(MenuAction::Exit);
        }
        if is_up(&key) {
            self.selected = wrap_step(self.selected, ENTRIES.len(), false);
        } else if is_down(&key) {
            self.selected = wrap_step(self.selected, ENTRIES.len(), true);
        } else if key.code == KeyCode::Enter {
            return Some(ENTRIES[self.selected].2);
        }
        None
    }
}

pub fn run_main_menu(order_items: usize) -> Result<MenuAction> {
    run_screen(&mut MainMenu::new(order_items))
}
