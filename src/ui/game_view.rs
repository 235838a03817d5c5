use crate::game::{Board, Cell, GameEngine, GameStatus, Player};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    engine: &GameEngine,
    selected_column: usize,
    message: &Option<String>,
    ascii_pieces: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, engine, chunks[0]);
    render_board(frame, engine, selected_column, ascii_pieces, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::Red => Color::Red,
        Player::Yellow => Color::Yellow,
    }
}

/// Banner text for the current engine state: whose turn and how long they
/// have left, or how the game ended.
fn status_line(engine: &GameEngine) -> Line<'static> {
    match engine.status() {
        GameStatus::InProgress => {
            let player = engine.current_player();
            let seconds = engine.remaining_seconds();
            let time_style = if seconds <= 3 {
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::styled(
                    format!("{} to move", player.name()),
                    Style::default()
                        .fg(player_color(player))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("  |  "),
                Span::styled(format!("Time left: {seconds}s"), time_style),
            ])
        }
        GameStatus::Won(player) => Line::from(Span::styled(
            format!("{} wins!", player.name()),
            Style::default()
                .fg(player_color(player))
                .add_modifier(Modifier::BOLD),
        )),
        GameStatus::Draw => Line::from(Span::styled(
            "It's a draw!",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        GameStatus::TimedOut(player) => Line::from(Span::styled(
            format!("Time's up for {}!", player.name()),
            Style::default()
                .fg(player_color(player))
                .add_modifier(Modifier::BOLD),
        )),
    }
}

fn render_header(frame: &mut Frame, engine: &GameEngine, area: ratatui::layout::Rect) {
    let header = Paragraph::new(status_line(engine))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

/// Row a piece dropped into `column` would land in, or `None` when the
/// column is full or out of range.
fn landing_row(board: &Board, column: usize) -> Option<usize> {
    if !board.is_column_playable(column) {
        return None;
    }
    (0..board.rows()).find(|&row| board.cell_at(column, row) == Cell::Empty)
}

fn cell_span(cell: Cell, ascii: bool) -> Span<'static> {
    let (symbol, color) = match cell {
        Cell::Empty => (" . ", Color::DarkGray),
        Cell::Red => (if ascii { " R " } else { " ● " }, Color::Red),
        Cell::Yellow => (if ascii { " Y " } else { " ● " }, Color::Yellow),
    };
    Span::styled(symbol, Style::default().fg(color))
}

fn ghost_span(player: Player, ascii: bool) -> Span<'static> {
    let symbol = if ascii { " o " } else { " ○ " };
    Span::styled(
        symbol,
        Style::default()
            .fg(player_color(player))
            .add_modifier(Modifier::DIM),
    )
}

fn render_board(
    frame: &mut Frame,
    engine: &GameEngine,
    selected_column: usize,
    ascii: bool,
    area: ratatui::layout::Rect,
) {
    let board = engine.board();
    // Preview where the selected column's piece would land.
    let ghost = if engine.status() == GameStatus::InProgress {
        landing_row(board, selected_column).map(|row| (selected_column, row))
    } else {
        None
    };

    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..board.columns() {
        if col == selected_column {
            col_line.push(Span::styled(
                format!(" {} ", col + 1),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(format!(" {} ", col + 1)));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    let inner_width = board.columns() * 3 + 1;

    // Top border
    lines.push(Line::from(format!("  ╔{}╗", "═".repeat(inner_width))));

    // Board rows, top row first
    for row in (0..board.rows()).rev() {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..board.columns() {
            let span = if ghost == Some((col, row)) {
                ghost_span(engine.current_player(), ascii)
            } else {
                cell_span(board.cell_at(col, row), ascii)
            };
            row_spans.push(span);
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    // Bottom border
    lines.push(Line::from(format!("  ╚{}╝", "═".repeat(inner_width))));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")]; // Align with board (3 chars to match "  ║")
    for col in 0..board.columns() {
        if col == selected_column {
            indicator_line.push(Span::styled(
                if ascii { " ^ " } else { " ▲ " },
                Style::default().fg(Color::Cyan),
            ));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: ratatui::layout::Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: ratatui::layout::Rect) {
    let controls = Paragraph::new("←/→: Move  |  Enter/Space: Drop  |  R: Restart  |  Q: Quit")
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
