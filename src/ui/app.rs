use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};

use crate::config::UiConfig;
use crate::game::{GameEngine, GameEvent, GameStatus, Rules};

/// Terminal front end for a single local match.
///
/// The app owns the engine and pumps it from the event loop: wall-clock
/// time flows in through `poll_timers`, key presses through `drop_piece`
/// and `reset`, and engine notifications flow back out through a queue
/// filled by the subscription below.
pub struct App {
    engine: GameEngine,
    events: Rc<RefCell<VecDeque<GameEvent>>>,
    selected_column: usize,
    message: Option<String>,
    tick_rate: Duration,
    ascii_pieces: bool,
    should_quit: bool,
}

impl App {
    pub fn new(ui: &UiConfig) -> Self {
        let mut engine = GameEngine::new(Rules::default(), Instant::now());

        let events = Rc::new(RefCell::new(VecDeque::new()));
        let queue = Rc::clone(&events);
        engine.subscribe(move |event| queue.borrow_mut().push_back(event));

        let selected_column = engine.board().columns() / 2;
        App {
            engine,
            events,
            selected_column,
            message: None,
            tick_rate: Duration::from_millis(ui.tick_rate_ms),
            ascii_pieces: ui.ascii_pieces,
            should_quit: false,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            self.engine.poll_timers(Instant::now());
            self.drain_events();

            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.tick_rate)? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.engine.board().columns() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.engine.drop_piece(self.selected_column, Instant::now());
            }
            KeyCode::Char('r') => {
                self.engine.reset(Instant::now());
                self.selected_column = self.engine.board().columns() / 2;
            }
            _ => {}
        }
    }

    /// Turn queued engine notifications into user-facing messages.
    fn drain_events(&mut self) {
        while let Some(event) = self.pop_event() {
            match event {
                GameEvent::GameEnded { status } => {
                    self.message = outcome_message(status);
                }
                GameEvent::GameReset => {
                    self.message = Some("New game started!".to_string());
                }
                GameEvent::PieceDropped { .. }
                | GameEvent::TurnStarted { .. }
                | GameEvent::CountdownTick { .. } => {}
            }
        }
    }

    fn pop_event(&self) -> Option<GameEvent> {
        self.events.borrow_mut().pop_front()
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.engine,
            self.selected_column,
            &self.message,
            self.ascii_pieces,
        );
    }
}

/// Message shown when a game ends. `None` for statuses that do not end it.
fn outcome_message(status: GameStatus) -> Option<String> {
    match status {
        GameStatus::Won(player) => {
            Some(format!("{} wins! Press 'r' for a new game.", player.name()))
        }
        GameStatus::Draw => Some("It's a draw! Press 'r' for a new game.".to_string()),
        GameStatus::TimedOut(player) => Some(format!(
            "Time's up for {}! Press 'r' for a new game.",
            player.name()
        )),
        GameStatus::InProgress => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, Player};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn test_selection_stays_on_the_board() {
        let mut app = App::new(&UiConfig::default());
        assert_eq!(app.selected_column, 3);

        for _ in 0..10 {
            app.handle_key(key(KeyCode::Left));
        }
        assert_eq!(app.selected_column, 0);

        for _ in 0..10 {
            app.handle_key(key(KeyCode::Right));
        }
        assert_eq!(app.selected_column, 6);
    }

    #[test]
    fn test_drop_and_restart_keys_reach_the_engine() {
        let mut app = App::new(&UiConfig::default());
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.engine.board().cell_at(3, 0), Cell::Red);

        app.handle_key(key(KeyCode::Char('r')));
        app.drain_events();
        assert_eq!(app.engine.board().cell_at(3, 0), Cell::Empty);
        assert_eq!(app.message.as_deref(), Some("New game started!"));
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(
            outcome_message(GameStatus::Won(Player::Yellow)).as_deref(),
            Some("Yellow wins! Press 'r' for a new game.")
        );
        assert_eq!(
            outcome_message(GameStatus::TimedOut(Player::Red)).as_deref(),
            Some("Time's up for Red! Press 'r' for a new game.")
        );
        assert_eq!(outcome_message(GameStatus::InProgress), None);
    }
}
