use crate::game::{Board, Cell, GameController, GameStatus, Player, COLS, ROWS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    game: &GameController,
    selected_column: usize,
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(4), // Controls
        ])
        .split(frame.area());

    render_header(frame, game, chunks[0]);
    render_board(frame, game.board(), game.status(), selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::A => Color::Red,
        Player::B => Color::Yellow,
    }
}

fn render_header(frame: &mut Frame, game: &GameController, area: Rect) {
    let current = game.current_player();
    let mode = game.mode().label();

    let status = match game.status() {
        GameStatus::Idle => format!("Press R to start  |  {mode}"),
        GameStatus::InProgress if game.is_computer_turn() => {
            format!("Computer is thinking...  |  {mode}")
        }
        GameStatus::InProgress => format!("Current Player: {}  |  {mode}", current.name()),
        GameStatus::Won(_) | GameStatus::Draw => format!("Game Over  |  {mode}"),
    };

    let scores = game.scores();
    let score_line = format!(
        "{}: {}   {}: {}   Draws: {}",
        Player::A.name(),
        scores.wins_a,
        Player::B.name(),
        scores.wins_b,
        scores.draws
    );

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            status,
            Style::default()
                .fg(player_color(current))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(score_line),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Align Four"));

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    board: &Board,
    status: &GameStatus,
    selected_column: usize,
    area: Rect,
) {
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")];
    for col in 0..COLS {
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
    col_line.push(Span::raw("  "));
    lines.push(Line::from(col_line));

    lines.push(Line::from("  ╔══════════════════════╗"));

    // Row 0 is the bottom, so draw from the top row down.
    for row in (0..ROWS).rev() {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..COLS {
            let highlighted = matches!(status, GameStatus::Won(run) if run.contains(row, col));
            let (symbol, mut style) = match board.get(row, col) {
                Cell::Empty => (" . ", Style::default().fg(Color::DarkGray)),
                Cell::Owner(player) => (" ● ", Style::default().fg(player_color(player))),
            };
            if highlighted {
                style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
            }
            row_spans.push(Span::styled(symbol, style));
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from("  ╚══════════════════════╝"));

    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..COLS {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line1 = Line::from("←/→: Move  |  Enter: Drop  |  R: New game  |  Q: Quit");
    let line2 = Line::from("S: Switch first player  |  T: Toggle computer  |  0-4: Computer level");

    let controls = Paragraph::new(vec![line1, line2])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
