use crate::error::RulesError;

/// Fixed parameters of a match: board geometry, the run length needed to
/// win, and the length of each turn's countdown.
///
/// The engine reads every dimension and duration from here, so the classic
/// 7x6 board with four-in-a-row and a 10 second turn is data, not scattered
/// constants. [`Rules::default`] is the only configuration the shipped game
/// uses; `new` exists so the engine can be exercised on small boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    pub columns: usize,
    pub rows: usize,
    /// How many aligned pieces win the game.
    pub connect: usize,
    /// Countdown length for each turn, in whole seconds.
    pub turn_seconds: u32,
}

impl Rules {
    /// Build a validated rule set.
    pub fn new(
        columns: usize,
        rows: usize,
        connect: usize,
        turn_seconds: u32,
    ) -> Result<Self, RulesError> {
        if columns == 0 {
            return Err(RulesError::NoColumns);
        }
        if rows == 0 {
            return Err(RulesError::NoRows);
        }
        if connect < 2 {
            return Err(RulesError::ConnectTooShort(connect));
        }
        // The run must fit somewhere: a horizontal needs enough columns,
        // a vertical enough rows. Diagonals need both and never help.
        if connect > columns && connect > rows {
            return Err(RulesError::ConnectTooLong {
                connect,
                columns,
                rows,
            });
        }
        if turn_seconds == 0 {
            return Err(RulesError::ZeroTurnDuration);
        }
        Ok(Rules {
            columns,
            rows,
            connect,
            turn_seconds,
        })
    }
}

impl Default for Rules {
    /// Classic Connect Four: 7 columns, 6 rows, four in a row, 10s turns.
    fn default() -> Self {
        Rules {
            columns: 7,
            rows: 6,
            connect: 4,
            turn_seconds: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_rules_validate() {
        let rules = Rules::new(7, 6, 4, 10).unwrap();
        assert_eq!(rules, Rules::default());
    }

    #[test]
    fn test_degenerate_boards_rejected() {
        assert_eq!(Rules::new(0, 6, 4, 10), Err(RulesError::NoColumns));
        assert_eq!(Rules::new(7, 0, 4, 10), Err(RulesError::NoRows));
        assert_eq!(Rules::new(7, 6, 1, 10), Err(RulesError::ConnectTooShort(1)));
        assert_eq!(Rules::new(7, 6, 4, 0), Err(RulesError::ZeroTurnDuration));
    }

    #[test]
    fn test_connect_must_fit_somewhere() {
        assert_eq!(
            Rules::new(7, 6, 8, 10),
            Err(RulesError::ConnectTooLong {
                connect: 8,
                columns: 7,
                rows: 6,
            })
        );
        // A run of 7 still fits horizontally on a 7x6 board.
        assert!(Rules::new(7, 6, 7, 10).is_ok());
    }
}
