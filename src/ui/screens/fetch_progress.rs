use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{prelude::*, widgets::*};

use crate::error::{AppError, Result};
use crate::fetch::{UsersClient, UsersOutcome};
use crate::ui::{
    components::{keys::is_back, styles::help_style, utils::centered_rect},
    TerminalGuard,
};

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

/// Draw the waiting dialog for a request to `endpoint` that has run for `elapsed`.
pub fn render_progress(f: &mut Frame<'_>, endpoint: &str, elapsed: Duration) {
    let area = centered_rect(70, 30, f.size());
    f.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Mengambil data dari API...");
    f.render_widget(block.clone(), area);
    let inner = block.inner(area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let tick = (elapsed.as_millis() / 120) as usize % SPINNER.len();
    f.render_widget(
        Paragraph::new(format!("{} GET {}", SPINNER[tick], endpoint)).alignment(Alignment::Center),
        chunks[0],
    );
    f.render_widget(
        Paragraph::new(format!("Elapsed: {:.1}s", elapsed.as_secs_f64()))
            .alignment(Alignment::Center),
        chunks[1],
    );
    f.render_widget(
        Paragraph::new("Esc to cancel")
            .style(help_style())
            .alignment(Alignment::Center),
        chunks[2],
    );
}

/// Run the users request on a background task while showing progress.
///
/// Request failures come back inside [`UsersOutcome`]; only cancellation and
/// terminal errors are returned as `Err`.
pub async fn run_fetch_progress(client: &UsersClient) -> Result<UsersOutcome> {
    let task_client = client.clone();
    let handle = tokio::spawn(async move { task_client.fetch().await });
    let started = Instant::now();

    let mut guard = TerminalGuard::new()?;
    let mut cancelled = false;

    loop {
        let elapsed = started.elapsed();
        guard
            .terminal_mut()
            .draw(|f| render_progress(f, client.endpoint(), elapsed))?;

        if handle.is_finished() {
            break;
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && is_back(&key) {
                    cancelled = true;
                    handle.abort();
                    break;
                }
            }
        }

        tokio::time::sleep(Duration::from_millis(120)).await;
    }

    guard.restore()?;
    if cancelled {
        let _ = handle.await;
        log::info!("Users fetch cancelled by user");
        return Err(AppError::Cancelled);
    }

    Ok(handle.await?)
}
