//! Mapping from terminal events to pointer actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// A left-button pointer action at a terminal position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    Press { column: u16, row: u16 },
    Drag { column: u16, row: u16 },
    Release { column: u16, row: u16 },
}

/// Map a mouse event to a pointer action. Only the left button counts.
pub fn pointer_action(event: MouseEvent) -> Option<PointerAction> {
    let (column, row) = (event.column, event.row);
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(PointerAction::Press { column, row }),
        MouseEventKind::Drag(MouseButton::Left) => Some(PointerAction::Drag { column, row }),
        MouseEventKind::Up(MouseButton::Left) => Some(PointerAction::Release { column, row }),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_left_button_actions() {
        assert_eq!(
            pointer_action(mouse(MouseEventKind::Down(MouseButton::Left), 3, 4)),
            Some(PointerAction::Press { column: 3, row: 4 })
        );
        assert_eq!(
            pointer_action(mouse(MouseEventKind::Drag(MouseButton::Left), 5, 4)),
            Some(PointerAction::Drag { column: 5, row: 4 })
        );
        assert_eq!(
            pointer_action(mouse(MouseEventKind::Up(MouseButton::Left), 5, 4)),
            Some(PointerAction::Release { column: 5, row: 4 })
        );
    }

    #[test]
    fn test_other_buttons_and_motion_ignored() {
        assert_eq!(
            pointer_action(mouse(MouseEventKind::Down(MouseButton::Right), 1, 1)),
            None
        );
        assert_eq!(pointer_action(mouse(MouseEventKind::Moved, 1, 1)), None);
        assert_eq!(pointer_action(mouse(MouseEventKind::ScrollUp, 1, 1)), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }
}
