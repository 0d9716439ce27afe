//! Top-level application state.

use crossterm::event::KeyEvent;
use dk_simulation::{Game, Mode, Outcome, SimResult};
use log::debug;

use crate::camera::Camera;
use crate::input::{self, Command};

/// Main application state for the terminal front end.
pub struct TuiApp {
    /// The running game.
    pub game: Game,
    /// Viewport over the map.
    pub camera: Camera,
    /// Whether to show the help popup.
    pub show_help: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl TuiApp {
    /// Wrap a freshly created game.
    pub fn new(game: Game) -> Self {
        Self {
            game,
            camera: Camera::new(0, 0),
            show_help: false,
            should_quit: false,
        }
    }

    /// Handle one key press.
    pub fn handle_key(&mut self, key: KeyEvent) -> SimResult<()> {
        match input::command_for(self.game.mode(), key) {
            Some(Command::Quit) => self.should_quit = true,
            Some(Command::ToggleHelp) => self.show_help = !self.show_help,
            Some(Command::Game(intent)) => {
                self.show_help = false;
                let outcome = self.game.handle_intent(intent)?;
                if outcome == Outcome::TurnTaken {
                    debug!("turn {} done", self.game.turns());
                }
            }
            None => {}
        }
        Ok(())
    }

    /// Fit the camera to a `width` x `height` view and center it on the
    /// examine cursor, or on the player otherwise.
    pub fn follow(&mut self, width: i32, height: i32) {
        self.camera.resize(width, height);
        let target = match (self.game.mode(), self.game.examine_cursor()) {
            (Mode::Examining, Some(cursor)) => Some((cursor.x, cursor.y)),
            _ => self.game.player_position().map(|p| (p.x, p.y)),
        };
        if let Some((x, y)) = target {
            let map = self.game.map();
            self.camera.move_to(x, y, map.width(), map.height());
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};
    use dk_core::component::Position;
    use dk_core::map::Point;
    use dk_core::GameMap;
    use dk_mapgen::generate_arena;
    use dk_simulation::GameConfig;

    use super::*;

    fn app() -> TuiApp {
        let mut map = GameMap::new(40, 30);
        let open = generate_arena(&mut map).unwrap();
        let config = GameConfig::default().with_population(0, 0);
        TuiApp::new(Game::with_map(config, map, open, Point::new(20, 15)).unwrap())
    }

    fn press(app: &mut TuiApp, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    #[test]
    fn keys_drive_the_player() {
        let mut app = app();
        press(&mut app, KeyCode::Char('l'));
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.game.player_position(), Some(Position::new(21, 16)));
        assert_eq!(app.game.turns(), 2);
    }

    #[test]
    fn camera_follows_examine_cursor() {
        let mut app = app();
        press(&mut app, KeyCode::Char('x'));
        for _ in 0..10 {
            press(&mut app, KeyCode::Right);
        }
        app.follow(10, 10);
        assert_eq!(app.camera.x, 25);
        press(&mut app, KeyCode::Esc);
        app.follow(10, 10);
        assert_eq!(app.camera.x, 15);
    }

    #[test]
    fn help_and_quit() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        press(&mut app, KeyCode::Char('?'));
        assert!(!app.show_help);
        press(&mut app, KeyCode::Char('Q'));
        assert!(app.should_quit);
    }
}
