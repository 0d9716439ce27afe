//! Key bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use dk_simulation::{Intent, Mode};

/// What a key press asks the front end to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Leave the game.
    Quit,
    /// Show or hide the key reference.
    ToggleHelp,
    /// Forward an intent to the simulation.
    Game(Intent),
}

/// Translate a key press for the current mode. Unbound keys yield `None`.
pub fn command_for(mode: Mode, key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }

    match mode {
        Mode::Menu | Mode::InformationSubscreen => match key.code {
            KeyCode::Esc => Some(Command::Game(Intent::Cancel)),
            KeyCode::Char(c) if c.is_ascii_lowercase() => {
                Some(Command::Game(Intent::SelectItem(c)))
            }
            _ => None,
        },
        Mode::Normal | Mode::Examining => {
            if let Some((dx, dy)) = direction(key.code) {
                return Some(Command::Game(Intent::Move { dx, dy }));
            }
            let intent = match key.code {
                KeyCode::Char('.') | KeyCode::Char('5') => Intent::Wait,
                KeyCode::Char('x') => Intent::ToggleExamine,
                KeyCode::Char('i') => Intent::OpenInventory,
                KeyCode::Char(',') | KeyCode::Char('g') => Intent::Pickup,
                KeyCode::Esc => Intent::Cancel,
                KeyCode::Char('Q') => return Some(Command::Quit),
                KeyCode::Char('?') => return Some(Command::ToggleHelp),
                _ => return None,
            };
            Some(Command::Game(intent))
        }
    }
}

/// Arrow keys, vi keys and the numeric keypad digits.
fn direction(code: KeyCode) -> Option<(i32, i32)> {
    let step = match code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('4') => (-1, 0),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('6') => (1, 0),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('8') => (0, -1),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('2') => (0, 1),
        KeyCode::Char('y') | KeyCode::Char('7') => (-1, -1),
        KeyCode::Char('u') | KeyCode::Char('9') => (1, -1),
        KeyCode::Char('b') | KeyCode::Char('1') => (-1, 1),
        KeyCode::Char('n') | KeyCode::Char('3') => (1, 1),
        _ => return None,
    };
    Some(step)
}

/// Key help shown in the help popup.
pub const HELP: &[(&str, &str)] = &[
    ("arrows / hjklyubn", "move or attack"),
    (". / 5", "wait a turn"),
    (", / g", "pick up"),
    ("i", "inventory"),
    ("a-z", "item details (in inventory)"),
    ("x", "examine"),
    ("Esc", "back"),
    ("?", "toggle this help"),
    ("Q / Ctrl+C", "quit"),
];
