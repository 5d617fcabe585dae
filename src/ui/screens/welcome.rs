use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{prelude::*, widgets::*};

use crate::error::Result;
use crate::records::content::{welcome_blocks, ContentBlock};
use crate::records::matrix::MatrixGenerator;
use crate::records::metrics::{model_metrics, DeltaDirection, Metric};
use crate::records::{sample_people, DataTable};
use crate::ui::components::{
    keys::{is_back, is_down, is_up},
    run_screen,
    styles::{help_style, title_style},
    table::data_table_widget,
    text::content_lines,
    utils::{screen_chunks, split_horizontal, split_vertical},
    Screen, TableViewport,
};

/// Static welcome content, model metrics, the sample table and a random matrix.
pub struct WelcomeScreen<'a> {
    blocks: Vec<ContentBlock>,
    metrics: [Metric; 3],
    people: DataTable,
    generator: &'a mut MatrixGenerator,
    matrix: DataTable,
    scroll: u16,
}

impl<'a> WelcomeScreen<'a> {
    pub fn new(generator: &'a mut MatrixGenerator) -> Self {
        let matrix = generator.next_matrix();
        Self {
            blocks: welcome_blocks(),
            metrics: model_metrics(),
            people: sample_people(),
            generator,
            matrix,
            scroll: 0,
        }
    }

    pub fn matrix(&self) -> &DataTable {
        &self.matrix
    }

    fn metric_widget(metric: &Metric) -> Paragraph<'static> {
        let (arrow, color) = match metric.direction() {
            DeltaDirection::Up => ("↑", Color::Green),
            DeltaDirection::Down => ("↓", Color::Red),
            DeltaDirection::Flat => ("·", Color::Gray),
        };
        Paragraph::new(vec![
            Line::styled(
                metric.value.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Line::styled(format!("{arrow} {}", metric.delta), Style::default().fg(color)),
        ])
        .block(Block::default().borders(Borders::ALL).title(metric.label))
    }

    fn table_widget(table: &DataTable) -> Table<'_> {
        let order: Vec<usize> = (0..table.row_count()).collect();
        let viewport = TableViewport {
            selected: usize::MAX,
            offset: 0,
        };
        data_table_widget(
            table,
            &order,
            viewport,
            table.row_count(),
            None,
            table.name().to_string(),
        )
    }
}

impl Screen for WelcomeScreen<'_> {
    type Output = ();

    fn render(&self, f: &mut Frame<'_>) {
        let (header_area, body_area, help_area) = screen_chunks(f.size(), 1);
        f.render_widget(Paragraph::new("Welcome").style(title_style()), header_area);

        let table_height = (self.people.row_count().max(self.matrix.row_count()) + 3) as u16;
        let chunks = split_vertical(
            body_area,
            &[
                Constraint::Min(3),
                Constraint::Length(4),
                Constraint::Length(table_height),
            ],
        );

        let content = Paragraph::new(content_lines(&self.blocks, chunks[0].width))
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0));
        f.render_widget(content, chunks[0]);

        let metric_areas = split_horizontal(
            chunks[1],
            &[
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ],
        );
        for (metric, area) in self.metrics.iter().zip(metric_areas) {
            f.render_widget(Self::metric_widget(metric), area);
        }

        let table_areas = split_horizontal(
            chunks[2],
            &[Constraint::Percentage(65), Constraint::Percentage(35)],
        );
        f.render_widget(Self::table_widget(&self.people), table_areas[0]);
        f.render_widget(Self::table_widget(&self.matrix), table_areas[1]);

        f.render_widget(
            Paragraph::new("↑/↓ scroll • r new random matrix • Esc back").style(help_style()),
            help_area,
        );
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<()> {
        if is_back(&key) || key.code == KeyCode::Char('q') {
            return Some(());
        }
        if is_up(&key) {
            self.scroll = self.scroll.saturating_sub(1);
        } else if is_down(&key) {
            self.scroll = self.scroll.saturating_add(1);
        } else if matches!(key.code, KeyCode::Char('r')) {
            self.matrix = self.generator.next_matrix();
        } else if matches!(key.code, KeyCode::Home) {
            self.scroll = 0;
        }
        None
    }
}

pub fn run_welcome(generator: &mut MatrixGenerator) -> Result<()> {
    run_screen(&mut WelcomeScreen::new(generator))
}
