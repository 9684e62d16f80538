//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle, Statistics};
use crate::core::{Mark, WORD_LEN};
use crate::solver::{ConstraintSet, LetterStatus, MAX_GUESSES};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Alphabet
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_alphabet(f, app, chunks[2]);
    render_input(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 WORDLE ASSISTANT")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_suggestions(f, app, chunks[0]);
    render_history(f, app, chunks[1]);
}

fn render_suggestions(f: &mut Frame, app: &App, area: Rect) {
    let content: Vec<Line> = if app.suggestions.is_empty() {
        vec![Line::from(Span::styled(
            "No word fits the outcomes so far",
            Style::default().fg(Color::Red),
        ))]
    } else {
        app.suggestions
            .iter()
            .enumerate()
            .map(|(i, suggestion)| {
                let style = if i == 0 {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                Line::from(vec![
                    Span::raw(format!("{}. ", i + 1)),
                    Span::styled(suggestion.word.to_string(), style),
                    Span::styled(
                        format!("  score {:>4}", suggestion.score),
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::styled(
                        format!("  popularity {:.2}", suggestion.popularity),
                        Style::default().fg(Color::DarkGray),
                    ),
                ])
            })
            .collect()
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Suggestions ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn mark_style(mark: Mark) -> Style {
    let bg = match mark {
        Mark::Exact => Color::Green,
        Mark::Present => Color::Yellow,
        Mark::Absent => Color::DarkGray,
    };
    Style::default()
        .fg(Color::Black)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history_items: Vec<ListItem> = app
        .history
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let mut spans = vec![Span::raw(format!("{}: ", i + 1))];
            spans.extend(entry.outcome.tiles(&entry.guess).iter().map(|tile| {
                Span::styled(format!(" {} ", char::from(tile.letter)), mark_style(tile.mark))
            }));
            spans.push(Span::raw(format!("  → {} left", entry.candidates_after)));
            ListItem::new(Line::from(spans))
        })
        .collect();

    let history =
        List::new(history_items).block(Block::default().title(" History ").borders(Borders::ALL));

    f.render_widget(history, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Search space gauge
            Constraint::Percentage(50), // Candidates
            Constraint::Min(3),         // Messages
        ])
        .split(area);

    render_search_progress(f, app, chunks[0]);
    render_candidates(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_search_progress(f: &mut Frame, app: &App, area: Rect) {
    let total = app.solver.guess_pool().len().max(1);
    let eliminated = total.saturating_sub(app.candidates_count);
    let progress_pct = (eliminated * 100 / total).min(100) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Eliminated ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(progress_pct)
        .label(format!("{} of {total} remain", app.candidates_count));

    f.render_widget(gauge, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = app
        .candidates
        .iter()
        .map(|word| Line::from(format!("  {word}")))
        .collect();
    if app.candidates_count > app.candidates.len() {
        lines.push(Line::from(Span::styled(
            format!("  … {} more", app.candidates_count - app.candidates.len()),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(format!(" Candidates ({}) ", app.candidates_count))
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_alphabet(f: &mut Frame, app: &App, area: Rect) {
    let spans: Vec<Span> = app
        .constraints
        .alphabet()
        .into_iter()
        .map(|(letter, status)| {
            let style = match status {
                LetterStatus::Placed => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                LetterStatus::Present => Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                LetterStatus::Absent => Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT),
                LetterStatus::Unknown => Style::default().fg(Color::White),
            };
            Span::styled(format!("{} ", char::from(letter)), style)
        })
        .collect();

    let alphabet = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(" Known: {} ", known_letters(&app.constraints)))
                .borders(Borders::ALL),
        );
    f.render_widget(alphabet, area);
}

/// Placed letters by position, `_` where unknown
fn known_letters(constraints: &ConstraintSet) -> String {
    (0..WORD_LEN)
        .map(|position| constraints.fixed_letter(position).map_or('_', char::from))
        .collect()
}

/// Solved-in-N tally, e.g. `1:0 2:1 3:4 4:2 5:0 6:0`
fn distribution_text(stats: &Statistics) -> String {
    (1..=MAX_GUESSES)
        .map(|guesses| format!("{guesses}:{}", stats.guess_distribution[guesses]))
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Finished => (
            " Puzzle over | Ctrl-N new puzzle, Ctrl-U undo, Esc quit ".to_string(),
            String::new(),
            Color::Green,
        ),
        InputMode::Guess => (
            " Guess | Tab takes the top suggestion, Enter confirms ".to_string(),
            app.guess_buffer.clone(),
            Color::Yellow,
        ),
        InputMode::Outcome => (
            format!(
                " Outcome for {} | 0/- absent, 1/Y present, 2/G exact ",
                app.pending_guess.map(|w| w.to_string()).unwrap_or_default()
            ),
            app.outcome_buffer.clone(),
            Color::Cyan,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(15),
            Constraint::Percentage(45),
            Constraint::Percentage(40),
        ])
        .split(area);

    let mode_text = if app.solver.options().hard {
        "Mode: Hard"
    } else {
        "Mode: Normal"
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Solved {}/{} | {}",
        app.stats.games_won,
        app.stats.total_games,
        distribution_text(&app.stats)
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help = Paragraph::new("Esc quit  ^U undo  ^N new  Tab suggest")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
