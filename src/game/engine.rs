use std::time::{Duration, Instant};

use crate::error::MoveError;

use super::board::Board;
use super::clock::TurnClock;
use super::player::Player;
use super::rules::Rules;

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
    /// The named player let their countdown expire. Nobody is crowned;
    /// the game simply ends.
    TimedOut(Player),
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// Notification pushed to subscribers after each observable state change.
///
/// Events carry enough data to react without reading the engine back; the
/// shipped view re-renders from engine state every frame anyway and uses
/// these only for one-shot messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    PieceDropped {
        player: Player,
        column: usize,
        row: usize,
    },
    TurnStarted {
        player: Player,
    },
    CountdownTick {
        seconds_left: u32,
    },
    GameEnded {
        status: GameStatus,
    },
    GameReset,
}

/// The authoritative game state machine.
///
/// Owns the board, the turn order, the per-turn countdown and the outcome.
/// All mutation goes through `drop_piece`, `poll_timers`,
/// `timeout_current_turn` and `reset`; illegal requests are ignored rather
/// than surfaced, since a stray key press is not an error the player needs
/// to hear about.
///
/// The engine never looks at a wall clock on its own. Every entry point
/// that involves time takes the current `Instant` from the caller, so tests
/// drive the countdown with synthetic instants instead of sleeping.
pub struct GameEngine {
    rules: Rules,
    board: Board,
    current_player: Player,
    status: GameStatus,
    remaining_seconds: u32,
    clock: TurnClock,
    subscribers: Vec<Box<dyn FnMut(GameEvent)>>,
}

impl GameEngine {
    /// Start a fresh game. Red moves first and their countdown starts
    /// running from `now`.
    pub fn new(rules: Rules, now: Instant) -> Self {
        let mut clock = TurnClock::new(Duration::from_secs(1));
        clock.arm(now);

        GameEngine {
            board: Board::new(rules.columns, rules.rows),
            current_player: Player::Red,
            status: GameStatus::InProgress,
            remaining_seconds: rules.turn_seconds,
            clock,
            subscribers: Vec::new(),
            rules,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Whole seconds left on the current turn's countdown.
    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// Register a callback invoked after every observable state change.
    /// Subscribers survive resets.
    pub fn subscribe(&mut self, subscriber: impl FnMut(GameEvent) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Drop the current player's piece into `column`.
    ///
    /// Requests that cannot be honored (out-of-range column, full column,
    /// finished game) leave the engine untouched, so the view can forward
    /// any input without pre-checking. A successful move restarts the
    /// countdown for the next player from `now`.
    pub fn drop_piece(&mut self, column: usize, now: Instant) {
        if let Err(reason) = self.try_drop(column, now) {
            log::debug!("ignoring drop into column {column}: {reason}");
        }
    }

    fn try_drop(&mut self, column: usize, now: Instant) -> Result<(), MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if column >= self.board.columns() {
            return Err(MoveError::InvalidColumn { column });
        }
        if !self.board.is_column_playable(column) {
            return Err(MoveError::ColumnFull { column });
        }

        let player = self.current_player;
        let row = self.board.drop_piece(column, player);
        self.notify(GameEvent::PieceDropped { player, column, row });

        // Judge the board as it stands after the piece landed, and only
        // for the player who owns that piece.
        if self.board.has_run(player, self.rules.connect) {
            self.finish(GameStatus::Won(player));
        } else if self.board.is_full() {
            self.finish(GameStatus::Draw);
        } else {
            self.start_turn(player.other(), now);
        }
        Ok(())
    }

    /// Advance the countdown to `now`, consuming every whole second that
    /// has elapsed since the turn started or the clock last ticked. When
    /// the countdown reaches zero the game ends against the player to move.
    ///
    /// Finished games have no armed clock, so polling them is free.
    pub fn poll_timers(&mut self, now: Instant) {
        let ticks = self.clock.poll(now);
        for _ in 0..ticks {
            if self.status.is_terminal() {
                break;
            }
            self.tick();
        }
    }

    /// End the game immediately as a timeout against the player to move.
    /// Does nothing once the game is over.
    pub fn timeout_current_turn(&mut self) {
        if self.status.is_terminal() {
            return;
        }
        self.remaining_seconds = 0;
        self.finish(GameStatus::TimedOut(self.current_player));
    }

    /// Throw the game away and start over with the same rules: empty board,
    /// Red to move, full countdown running from `now`. Subscribers stay
    /// attached.
    pub fn reset(&mut self, now: Instant) {
        self.board = Board::new(self.rules.columns, self.rules.rows);
        self.current_player = Player::Red;
        self.status = GameStatus::InProgress;
        self.remaining_seconds = self.rules.turn_seconds;
        self.clock.arm(now);
        log::debug!("game reset");
        self.notify(GameEvent::GameReset);
    }

    fn start_turn(&mut self, player: Player, now: Instant) {
        self.current_player = player;
        self.remaining_seconds = self.rules.turn_seconds;
        // Arming replaces the previous deadline, so nothing left over from
        // the last turn can tick into this one.
        self.clock.arm(now);
        self.notify(GameEvent::TurnStarted { player });
    }

    fn tick(&mut self) {
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        log::trace!(
            "countdown: {}s left for {}",
            self.remaining_seconds,
            self.current_player.name()
        );
        self.notify(GameEvent::CountdownTick {
            seconds_left: self.remaining_seconds,
        });
        if self.remaining_seconds == 0 {
            self.timeout_current_turn();
        }
    }

    fn finish(&mut self, status: GameStatus) {
        debug_assert!(status.is_terminal(), "finish called with {status:?}");
        self.status = status;
        self.clock.cancel();
        log::debug!("game over: {status:?}");
        self.notify(GameEvent::GameEnded { status });
    }

    fn notify(&mut self, event: GameEvent) {
        for subscriber in &mut self.subscribers {
            subscriber(event);
        }
    }
}
