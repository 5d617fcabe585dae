use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::Frame;

use crate::error::Result;
use crate::ui::TerminalGuard;

/// A full-screen view: a pure `render` of its state plus a key-driven state transition.
pub trait Screen {
    type Output;

    fn render(&self, f: &mut Frame<'_>);

    /// Apply one key press. Returning `Some` closes the screen with that output.
    fn handle_key(&mut self, key: KeyEvent) -> Option<Self::Output>;
}

/// Drive `screen` until it produces an output. Each loop iteration is one render pass.
pub fn run_screen<S: Screen>(screen: &mut S) -> Result<S::Output> {
    // Keep raw/alternate mode scoped to this screen whatever way it exits.
    let mut guard = TerminalGuard::new()?;

    loop {
        guard.terminal_mut().draw(|f| screen.render(f))?;

        if event::poll(Duration::from_millis(200))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(output) = screen.handle_key(key) {
                    guard.restore()?;
                    return Ok(output);
                }
            }
        }
    }
}
