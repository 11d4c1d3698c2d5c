//! TUI rendering with ratatui
//!
//! Category menu, board, gallows and attempt gauge for the hangman interface.

use super::app::{App, MessageStyle};
use crate::game::Phase;
use crate::output::formatters::join_letters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, ListState, Paragraph, Wrap},
};

/// Gallows drawings from an empty stage to a full figure
const GALLOWS: [[&str; 6]; 7] = [
    ["  +---+", "  |   |", "      |", "      |", "      |", "========="],
    ["  +---+", "  |   |", "  O   |", "      |", "      |", "========="],
    ["  +---+", "  |   |", "  O   |", "  |   |", "      |", "========="],
    ["  +---+", "  |   |", "  O   |", " /|   |", "      |", "========="],
    ["  +---+", "  |   |", "  O   |", " /|\\  |", "      |", "========="],
    ["  +---+", "  |   |", "  O   |", " /|\\  |", " /    |", "========="],
    ["  +---+", "  |   |", "  O   |", " /|\\  |", " / \\  |", "========="],
];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    if app.phase == Phase::Pending {
        render_menu(f, app, main_chunks[0]);
    } else {
        render_board(f, app, main_chunks[0]);
    }
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = match &app.category {
        Some(category) => format!("🪢 HANGMAN - {category}"),
        None => "🪢 HANGMAN".to_string(),
    };
    let header = Paragraph::new(title)
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

fn render_menu(f: &mut Frame, app: &App, area: Rect) {
    let mut items: Vec<ListItem> = app
        .corpus
        .iter()
        .map(|(name, words)| ListItem::new(format!("📂 {name} ({} words)", words.len())))
        .collect();
    items.push(ListItem::new("❌ Quit"));

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Select Category ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default().with_selected(Some(app.selected));
    f.render_stateful_widget(list, area, &mut state);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let Some(round) = &app.round else {
        return;
    };

    let (border_color, title) = match app.phase {
        Phase::Win => (Color::Green, " 🎉 Solved! "),
        Phase::Lose => (Color::Red, " 😢 Out of attempts "),
        _ => (Color::Yellow, " Word "),
    };

    // A lost round shows the answer in place of the mask
    let word_line = match round.answer() {
        Some(answer) if app.phase == Phase::Lose => answer
            .chars()
            .map(String::from)
            .collect::<Vec<_>>()
            .join(" "),
        _ => round.masked(),
    };

    let content = vec![
        Line::from(vec![
            Span::raw("Hint:      "),
            Span::styled(round.hint(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            word_line,
            Style::default()
                .fg(border_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("Incorrect: "),
            Span::styled(join_letters(round.incorrect()), Style::default().fg(Color::Red)),
        ]),
        Line::from(format!("Score:     {}", round.score())),
        Line::from(format!("Streak:    x{}", round.streak())),
    ];

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(border_color)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Gallows
            Constraint::Length(3), // Attempts gauge
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_gallows(f, app, chunks[0]);
    render_attempts(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_gallows(f: &mut Frame, app: &App, area: Rect) {
    let stage = usize::from(app.attempts_used_percent()) * (GALLOWS.len() - 1) / 100;
    let lines: Vec<Line> = GALLOWS[stage].iter().map(|row| Line::from(*row)).collect();

    let gallows = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(gallows, area);
}

fn render_attempts(f: &mut Frame, app: &App, area: Rect) {
    let remaining = app.round.as_ref().map_or(0, |round| round.remaining());
    let used = app.attempts_used_percent();
    let color = match used {
        0..=49 => Color::Green,
        50..=79 => Color::Yellow,
        _ => Color::Red,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(100 - used.min(100))
        .label(format!("{remaining}/{} remaining", app.budget));

    f.render_widget(gauge, area);
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

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(40),
            Constraint::Percentage(40),
        ])
        .split(area);

    let mode = Paragraph::new(format!("Phase: {:?}", app.phase)).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Won: {} | Lost: {} | Score: {}",
        app.stats.won, app.stats.lost, app.stats.total_score
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = match app.phase {
        Phase::Pending => "↑/↓: Select | Enter: Play | q: Quit",
        Phase::Playing => "a-z: Guess | Esc: Quit",
        Phase::Win | Phase::Lose => "Enter: Menu | q: Quit",
        Phase::Quit => "",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
