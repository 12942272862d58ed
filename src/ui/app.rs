use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::ai::Difficulty;
use crate::error::MoveError;
use crate::game::{AiMoveRequest, GameController, GameMode, GameStatus, MoveOutcome, COLS};

/// A computer move waiting for its display delay to pass.
struct PendingAiMove {
    request: AiMoveRequest,
    due: Instant,
}

pub struct App {
    game: GameController,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    pending_ai: Option<PendingAiMove>,
    ai_delay: Duration,
}

impl App {
    pub fn new(game: GameController, ai_delay: Duration) -> Self {
        App {
            game,
            selected_column: 3, // Start in middle
            should_quit: false,
            message: None,
            pending_ai: None,
            ai_delay,
        }
    }

    /// Main application loop
    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
        loop {
            self.tick(Instant::now());
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Schedule the computer's move when it is on turn and play it once its
    /// delay has passed.
    fn tick(&mut self, now: Instant) {
        if let Some(pending) = self.pending_ai.take() {
            if now < pending.due {
                self.pending_ai = Some(pending);
                return;
            }
            let outcome = self.game.complete_ai_move(pending.request);
            self.report(outcome);
            return;
        }

        if self.game.is_computer_turn() {
            match self.game.schedule_ai_move() {
                Ok(request) => {
                    self.pending_ai = Some(PendingAiMove {
                        request,
                        due: now + self.ai_delay,
                    });
                }
                Err(err) => log::warn!("could not schedule computer move: {err}"),
            }
        }
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
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
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column < COLS - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                // Any computer move still pending is discarded as stale.
                self.game.new_game();
                self.selected_column = 3;
                self.message = Some("New game started!".to_string());
            }
            KeyCode::Char('s') => {
                let first = self.game.switch_first_player();
                self.message = Some(format!("{} starts next game", first.name()));
            }
            KeyCode::Char('t') => {
                let mode = match self.game.mode() {
                    GameMode::TwoPlayer => GameMode::VsAi(Difficulty::MIN),
                    GameMode::VsAi(_) => GameMode::TwoPlayer,
                };
                self.game.set_mode(mode);
                self.message = Some(format!("Mode: {}", mode.label()));
            }
            KeyCode::Char(c @ '0'..='9') => {
                let tier = c as u8 - b'0';
                self.message = Some(match self.game.set_difficulty(tier) {
                    Ok(difficulty) => format!("Computer level set to {difficulty}"),
                    Err(err) => err.to_string(),
                });
            }
            _ => {}
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        let outcome = self.game.apply_human_move(self.selected_column);
        self.report(outcome);
    }

    fn report(&mut self, outcome: MoveOutcome) {
        self.message = match outcome {
            Ok(placement) => {
                let mut text = match self.game.status() {
                    GameStatus::Won(run) => format!("{} wins!", run.player.name()),
                    GameStatus::Draw => "It's a draw!".to_string(),
                    GameStatus::Idle | GameStatus::InProgress => String::new(),
                };
                if let Some(level) = placement.promoted_to {
                    text.push_str(&format!("  Computer is now level {level}."));
                }
                (!text.is_empty()).then_some(text)
            }
            Err(MoveError::StaleMove) => None,
            Err(MoveError::GameNotInProgress) => {
                Some("Game over! Press 'r' to restart.".to_string())
            }
            Err(MoveError::OutOfTurn) => Some("Wait for the computer!".to_string()),
            Err(err) => Some(format!("{err}!")),
        };
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.game, self.selected_column, &self.message);
    }
}
