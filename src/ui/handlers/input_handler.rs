//! Keyboard dispatch.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tracker::{Direction, StatKind, Team};

use super::super::{app::App, types::Screen};
use super::{GameHandler, SetupHandler};

/// Helper struct for routing key presses to the active screen.
pub struct InputHandler<'a> {
    app: &'a mut App,
}

impl<'a> InputHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    /// Returns `true` when the user asked to quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if let (KeyCode::Char('q' | 'Q'), true) =
            (key.code, key.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.app.log("Exit requested");
            return true;
        }

        match self.app.screen() {
            Screen::Setup => self.handle_setup_key(key),
            Screen::Scoreboard => self.handle_scoreboard_key(key),
        }
        false
    }

    fn handle_setup_key(&mut self, key: KeyEvent) {
        let mut setup = SetupHandler::new(self.app);

        match key.code {
            KeyCode::Enter => setup.submit(),
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => setup.switch_field(),
            KeyCode::Backspace => setup.pop_char(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                setup.push_char(c)
            }
            _ => {}
        }
    }

    fn handle_scoreboard_key(&mut self, key: KeyEvent) {
        let mut game = GameHandler::new(self.app);

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('z' | 'Z') => game.undo(),
                KeyCode::Char('r' | 'R') => game.reset(),
                KeyCode::Char('s' | 'S') => game.save_game(),
                KeyCode::Char('n' | 'N') => game.new_game(),
                KeyCode::Char('e' | 'E') => game.export(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Left => game.change_period(Direction::Back),
            KeyCode::Right => game.change_period(Direction::Forward),
            KeyCode::Char('h') => game.record(Team::Home, StatKind::Shot),
            KeyCode::Char('a') => game.record(Team::Away, StatKind::Shot),
            KeyCode::Char('H') => game.record(Team::Home, StatKind::Goal),
            KeyCode::Char('A') => game.record(Team::Away, StatKind::Goal),
            KeyCode::Char('u' | 'U') => game.undo(),
            _ => {}
        }
    }
}
