use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Esc or Ctrl+C: leave the current screen.
pub fn is_back(key: &KeyEvent) -> bool {
    key.code == KeyCode::Esc || is_interrupt(key)
}

pub fn is_interrupt(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

pub fn is_up(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Up | KeyCode::Char('k'))
}

pub fn is_down(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Down | KeyCode::Char('j'))
}

/// Wrap-around step through `len` entries.
pub fn wrap_step(selected: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (selected + 1) % len
    } else if selected == 0 {
        len - 1
    } else {
        selected - 1
    }
}

#[cfg(test)]
pub(crate) fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_in_both_directions() {
        assert_eq!(wrap_step(0, 3, false), 2);
        assert_eq!(wrap_step(2, 3, true), 0);
        assert_eq!(wrap_step(1, 3, true), 2);
        assert_eq!(wrap_step(0, 0, true), 0);
    }

    #[test]
    fn ctrl_c_counts_as_back() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(is_back(&key));
        assert!(!is_back(&press(KeyCode::Char('c'))));
        assert!(is_back(&press(KeyCode::Esc)));
    }
}
