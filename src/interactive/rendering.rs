//! TUI rendering with ratatui
//!
//! Board, clue lists and feedback panels for the crossword interface.

use super::adapter::BoardView;
use super::app::{App, MessageStyle};
use crate::core::{Cell, Grid, PlacedWord};
use crate::solving::GameStatus;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};
use std::rc::Rc;

/// Terminal columns used by one grid cell
pub const CELL_WIDTH: u16 = 3;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let view = app.adapter.view();
    let chunks = screen_chunks(f.area());

    // Header
    render_header(f, &view, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = main_chunks(chunks[1]);

    render_board(f, &view, main_chunks[0]);
    render_clue_panel(f, &view, main_chunks[1]);

    render_messages(f, app, chunks[2]);

    // Status bar
    render_status(f, app, &view, chunks[3]);
}

fn screen_chunks(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board and clues
            Constraint::Length(7), // Messages
            Constraint::Length(3), // Status bar
        ])
        .split(area)
}

fn main_chunks(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(45), // Board
            Constraint::Percentage(55), // Clues
        ])
        .split(area)
}

fn board_block(view: Option<&BoardView>) -> Block<'static> {
    let title = view.map_or_else(
        || " Grid ".to_string(),
        |v| format!(" Grid {0}x{0} ", v.grid.size()),
    );

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
}

/// Screen rectangle holding the cells, for a frame of `area`
fn board_area(area: Rect) -> Rect {
    let chunks = screen_chunks(area);
    board_block(None).inner(main_chunks(chunks[1])[0])
}

/// Map terminal coordinates back to a grid cell
#[must_use]
pub fn cell_at(area: Rect, size: usize, column: u16, row: u16) -> Option<(usize, usize)> {
    let board = board_area(area);
    if column < board.x || row < board.y || column >= board.right() || row >= board.bottom() {
        return None;
    }

    let cell_row = usize::from(row - board.y);
    let cell_col = usize::from((column - board.x) / CELL_WIDTH);
    (cell_row < size && cell_col < size).then_some((cell_row, cell_col))
}

/// Terminal coordinates of the letter drawn for a grid cell
#[must_use]
pub fn cell_origin(area: Rect, row: usize, col: usize) -> (u16, u16) {
    let board = board_area(area);
    let col = u16::try_from(col).unwrap_or(u16::MAX);
    let row = u16::try_from(row).unwrap_or(u16::MAX);
    (
        board.x.saturating_add(col.saturating_mul(CELL_WIDTH)) + 1,
        board.y.saturating_add(row),
    )
}

fn render_header(f: &mut Frame, view: &BoardView, area: Rect) {
    let header = Paragraph::new(format!(
        "✏️  CROSSWORD - Level {} ({} words)",
        view.level, view.report.placed
    ))
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

fn render_board(f: &mut Frame, view: &BoardView, area: Rect) {
    let selected = view.selected_word();
    let lines: Vec<Line> = view
        .grid
        .rows()
        .enumerate()
        .map(|(r, row)| {
            let spans: Vec<Span> = row
                .iter()
                .enumerate()
                .map(|(c, cell)| cell_span(view, selected, cell, r, c))
                .collect();
            Line::from(spans)
        })
        .collect();

    let board = Paragraph::new(lines).block(board_block(Some(view)));
    f.render_widget(board, area);
}

fn cell_span<'a>(
    view: &BoardView,
    selected: Option<&PlacedWord>,
    cell: &Cell,
    row: usize,
    col: usize,
) -> Span<'a> {
    if cell.is_blocked() {
        return Span::styled("░░░", Style::default().fg(Color::DarkGray));
    }

    let arrow = cell.origin_marker().map_or(' ', |m| m.direction.arrow());
    let letter = cell.displayed_letter().unwrap_or('·');
    let text = format!("{arrow}{letter} ");

    let is_cursor = view
        .cursor
        .is_some_and(|cursor| cursor.row == row && cursor.col == col);
    let in_selection = selected.is_some_and(|word| word.covers(row, col));

    let mut style = Style::default().fg(if view.is_revealed {
        Color::Magenta
    } else if view.is_complete {
        Color::Green
    } else {
        Color::White
    });

    if is_cursor {
        style = style
            .bg(Color::Yellow)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD);
    } else if in_selection {
        style = style.bg(Color::Blue);
    }

    Span::styled(text, style)
}

fn render_clue_panel(f: &mut Frame, view: &BoardView, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50), // Horizontal clues
            Constraint::Min(4),         // Vertical clues
            Constraint::Length(3),      // Progress gauge
        ])
        .split(area);

    render_clues(f, view, &view.horizontal, " → Horizontal ", chunks[0]);
    render_clues(f, view, &view.vertical, " ↓ Vertical ", chunks[1]);
    render_progress(f, view, chunks[2]);
}

fn render_clues(f: &mut Frame, view: &BoardView, words: &[&PlacedWord], title: &str, area: Rect) {
    let items: Vec<ListItem> = words
        .iter()
        .map(|word| {
            let solved = is_word_filled(view.grid, word);
            let selected = view.selected_word_id == Some(word.id());

            let mut style = if solved {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::White)
            };
            if selected {
                style = style.bg(Color::Blue).add_modifier(Modifier::BOLD);
            }

            let mark = if solved { "✓" } else { " " };
            ListItem::new(format!(
                "{mark} {:>2}. {} ({})",
                word.id(),
                word.clue(),
                word.len()
            ))
            .style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(title.to_string())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(list, area);
}

fn is_word_filled(grid: &Grid, word: &PlacedWord) -> bool {
    word.letters().all(|((row, col), letter)| {
        grid.get(row, col)
            .is_some_and(|cell| cell.displayed_letter() == Some(letter))
    })
}

fn render_progress(f: &mut Frame, view: &BoardView, area: Rect) {
    let (correct, fillable) = view.progress;
    let progress_pct = if fillable == 0 {
        0
    } else {
        u16::try_from(correct * 100 / fillable).unwrap_or(100)
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Progress ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(progress_pct.min(100))
        .label(format!("{correct}/{fillable} cells correct"));

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

fn render_status(f: &mut Frame, app: &App, view: &BoardView, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(25),
            Constraint::Percentage(55),
        ])
        .split(area);

    let (status_text, color) = match view.status {
        GameStatus::NotStarted => ("Status: Ready", Color::White),
        GameStatus::InProgress => ("Status: Solving", Color::Yellow),
        GameStatus::Completed => ("Status: Solved 🎉", Color::Green),
        GameStatus::Revealed => ("Status: Revealed", Color::Magenta),
    };
    let status = Paragraph::new(status_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color));
    f.render_widget(status, chunks[0]);

    let stats_text = format!(
        "Games: {} | Solved: {} | Revealed: {}",
        app.stats.total_games, app.stats.games_completed, app.stats.games_revealed
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = if view.status.is_terminal() {
        "Esc: Quit | Ctrl-N: New Grid | 1-5: Level"
    } else {
        "Esc: Quit | Tab: Next Word | Space: Direction | Ctrl-R: Reveal | Ctrl-N: New"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_round_trips_to_cell() {
        let area = Rect::new(0, 0, 120, 40);
        for (row, col) in [(0, 0), (3, 1), (8, 8)] {
            let (x, y) = cell_origin(area, row, col);
            assert_eq!(cell_at(area, 9, x, y), Some((row, col)));
        }
    }

    #[test]
    fn click_outside_board_is_none() {
        let area = Rect::new(0, 0, 120, 40);
        assert_eq!(cell_at(area, 9, 0, 0), None);
        assert_eq!(cell_at(area, 9, 119, 39), None);
    }

    #[test]
    fn click_past_last_column_is_none() {
        let area = Rect::new(0, 0, 120, 40);
        let (x, y) = cell_origin(area, 0, 5);
        assert_eq!(cell_at(area, 5, x, y), None);
        assert_eq!(cell_at(area, 7, x, y), Some((0, 5)));
    }

    #[test]
    fn whole_cell_width_maps_to_one_cell() {
        let area = Rect::new(0, 0, 120, 40);
        let (x, y) = cell_origin(area, 2, 2);
        assert_eq!(cell_at(area, 7, x - 1, y), Some((2, 2)));
        assert_eq!(cell_at(area, 7, x + 1, y), Some((2, 2)));
        assert_eq!(cell_at(area, 7, x + 2, y), Some((2, 3)));
    }
}
