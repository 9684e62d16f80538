//! TUI application state and logic

use crate::core::{Error, Outcome, Word};
use crate::solver::{ConstraintSet, MAX_GUESSES, Solver, WordScore};
use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Messages kept on screen
const MESSAGE_LIMIT: usize = 5;

/// State snapshot for undo functionality
#[derive(Debug, Clone)]
pub struct StateSnapshot {
    pub constraints: ConstraintSet,
    pub history: Vec<HistoryEntry>,
}

/// Application state
pub struct App<'a> {
    pub solver: Solver<'a>,
    pub constraints: ConstraintSet,
    pub history: Vec<HistoryEntry>,
    pub suggestions: Vec<WordScore>,
    /// First few remaining candidates, for display
    pub candidates: Vec<Word>,
    pub candidates_count: usize,
    pub input_mode: InputMode,
    pub guess_buffer: String,
    pub outcome_buffer: String,
    /// Guess waiting for its outcome
    pub pending_guess: Option<Word>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub undo_stack: Vec<StateSnapshot>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guess,
    Outcome,
    /// Puzzle over, solved or out of guesses
    Finished,
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub guess: Word,
    pub outcome: Outcome,
    pub candidates_after: usize,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub guess_distribution: [usize; MAX_GUESSES + 1],
}

impl<'a> App<'a> {
    /// Candidates listed in the side panel
    pub const SHOWN_CANDIDATES: usize = 12;

    #[must_use]
    pub fn new(solver: Solver<'a>) -> Self {
        let mut app = Self {
            solver,
            constraints: ConstraintSet::new(),
            history: Vec::new(),
            suggestions: Vec::new(),
            candidates: Vec::new(),
            candidates_count: 0,
            input_mode: InputMode::Guess,
            guess_buffer: String::new(),
            outcome_buffer: String::new(),
            pending_guess: None,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            undo_stack: Vec::new(),
        };
        app.add_message(
            "Type your guess, or Tab for the top suggestion, then Enter.",
            MessageStyle::Info,
        );
        app.refresh();
        app
    }

    /// Recompute candidates and suggestions from the constraints
    pub fn refresh(&mut self) {
        let candidates = self.solver.candidates(&self.constraints);
        self.suggestions =
            self.solver
                .suggest_for(&candidates, &self.constraints, self.solver.default_pool());
        self.candidates_count = candidates.len();
        self.candidates = candidates
            .words()
            .take(Self::SHOWN_CANDIDATES)
            .copied()
            .collect();
        log::debug!(
            "{} candidates, {} suggestions",
            self.candidates_count,
            self.suggestions.len()
        );
    }

    /// Fill the guess buffer with the top suggestion
    pub fn take_suggestion(&mut self) {
        if let Some(top) = self.suggestions.first() {
            self.guess_buffer = top.word.to_string();
        }
    }

    /// Accept any well-formed typed guess and move on to outcome entry
    pub fn submit_guess(&mut self) {
        match Word::new(&self.guess_buffer) {
            Ok(word) => {
                self.pending_guess = Some(word);
                self.outcome_buffer.clear();
                self.input_mode = InputMode::Outcome;
                self.add_message(
                    &format!("Outcome for {word}? 0/- absent, 1/Y present, 2/G exact"),
                    MessageStyle::Info,
                );
            }
            Err(e) => self.add_message(&Error::from(e).to_string(), MessageStyle::Error),
        }
    }

    /// Record the typed outcome for the pending guess
    pub fn apply_outcome(&mut self) {
        let Some(guess) = self.pending_guess else {
            self.input_mode = InputMode::Guess;
            return;
        };
        let outcome = match Outcome::parse(&self.outcome_buffer) {
            Ok(outcome) => outcome,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };

        self.undo_stack.push(StateSnapshot {
            constraints: self.constraints.clone(),
            history: self.history.clone(),
        });
        self.constraints.update(&guess, &outcome);
        self.refresh();
        self.history.push(HistoryEntry {
            guess,
            outcome,
            candidates_after: self.candidates_count,
        });
        self.pending_guess = None;
        self.guess_buffer.clear();
        self.outcome_buffer.clear();

        let turn = self.history.len();
        if outcome.is_solved() {
            self.stats.total_games += 1;
            self.stats.games_won += 1;
            self.stats.guess_distribution[turn] += 1;
            self.input_mode = InputMode::Finished;
            self.add_message(&format!("Solved in {turn}!"), MessageStyle::Success);
            self.add_message("Ctrl-N for a new puzzle, Esc to quit.", MessageStyle::Info);
        } else if turn >= MAX_GUESSES {
            self.stats.total_games += 1;
            self.input_mode = InputMode::Finished;
            self.add_message("Out of guesses.", MessageStyle::Error);
        } else if self.candidates_count == 0 {
            self.input_mode = InputMode::Guess;
            self.add_message(
                "No word fits these outcomes. Ctrl-U to undo the last one.",
                MessageStyle::Error,
            );
        } else {
            self.input_mode = InputMode::Guess;
            self.add_message(
                &format!("{} candidates remaining", self.candidates_count),
                MessageStyle::Info,
            );
        }
    }

    pub fn new_game(&mut self) {
        self.constraints = ConstraintSet::new();
        self.history.clear();
        self.undo_stack.clear();
        self.pending_guess = None;
        self.guess_buffer.clear();
        self.outcome_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guess;
        self.add_message("New puzzle started!", MessageStyle::Info);
        self.refresh();
    }

    pub fn undo_last(&mut self) {
        if self.pending_guess.take().is_some() {
            self.input_mode = InputMode::Guess;
            self.add_message("Guess cleared", MessageStyle::Info);
        } else if let Some(snapshot) = self.undo_stack.pop() {
            // A finished puzzle that is undone no longer counts
            if self.input_mode == InputMode::Finished {
                let solved_turn = self
                    .history
                    .last()
                    .filter(|entry| entry.outcome.is_solved())
                    .map(|_| self.history.len());
                self.stats.total_games = self.stats.total_games.saturating_sub(1);
                if let Some(turn) = solved_turn {
                    self.stats.games_won = self.stats.games_won.saturating_sub(1);
                    self.stats.guess_distribution[turn] =
                        self.stats.guess_distribution[turn].saturating_sub(1);
                }
            }
            self.constraints = snapshot.constraints;
            self.history = snapshot.history;
            self.input_mode = InputMode::Guess;
            self.refresh();
            self.add_message("Undone!", MessageStyle::Info);
        } else {
            self.add_message("Nothing to undo!", MessageStyle::Error);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MESSAGE_LIMIT {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_game(),
            KeyCode::Char('u') if ctrl => self.undo_last(),
            code => match self.input_mode {
                InputMode::Guess => self.handle_guess_key(code),
                InputMode::Outcome => self.handle_outcome_key(code),
                InputMode::Finished => {}
            },
        }
    }

    fn handle_guess_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Tab => self.take_suggestion(),
            KeyCode::Char(c) if c.is_ascii_alphabetic() && self.guess_buffer.len() < 5 => {
                self.guess_buffer.push(c.to_ascii_uppercase());
            }
            KeyCode::Backspace => {
                self.guess_buffer.pop();
            }
            KeyCode::Enter => self.submit_guess(),
            _ => {}
        }
    }

    fn handle_outcome_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c) if !c.is_whitespace() && self.outcome_buffer.chars().count() < 5 => {
                self.outcome_buffer.push(c);
            }
            KeyCode::Backspace => {
                if self.outcome_buffer.pop().is_none() {
                    self.pending_guess = None;
                    self.input_mode = InputMode::Guess;
                }
            }
            KeyCode::Enter => self.apply_outcome(),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
