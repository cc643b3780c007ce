//! TUI application state and logic

use super::adapter::{InputEvent, Outcome, RenderAdapter};
use super::rendering;
use crate::core::Level;
use crate::generator::GenerationReport;
use crate::wordlists::WordBank;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::layout::Rect;
use ratatui::{Terminal, backend::CrosstermBackend};
use rand::rngs::StdRng;
use std::io;

/// Application state
pub struct App {
    pub adapter: RenderAdapter<StdRng>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

/// What a key press asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Input(InputEvent),
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_completed: usize,
    pub games_revealed: usize,
}

impl App {
    #[must_use]
    pub fn new(bank: WordBank, level: Level, rng: StdRng) -> Self {
        let adapter = RenderAdapter::new(bank, level, rng);

        let mut app = Self {
            adapter,
            messages: vec![Message {
                text: "Welcome! Click a cell or press Tab to pick a word.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics {
                total_games: 1,
                ..Statistics::default()
            },
            should_quit: false,
        };
        app.report_generation(app.adapter.report());
        app
    }

    /// Forward an event to the engine and narrate the result
    pub fn apply(&mut self, event: InputEvent) {
        match self.adapter.handle(event) {
            Outcome::Ignored | Outcome::Updated => {}
            Outcome::Completed => {
                self.stats.games_completed += 1;
                self.add_message("🎉 BRAVO! Puzzle complete! 🎉", MessageStyle::Success);
                self.add_message(
                    "Press Ctrl-N for a new grid or 1-5 to change level.",
                    MessageStyle::Info,
                );
            }
            Outcome::Revealed => {
                self.stats.games_revealed += 1;
                self.add_message("Solution revealed.", MessageStyle::Info);
            }
            Outcome::NewGame(report) => {
                self.stats.total_games += 1;
                self.report_generation(report);
            }
        }
    }

    fn report_generation(&mut self, report: GenerationReport) {
        let level = self.adapter.level();

        if report.placed == 0 {
            self.add_message(
                &format!("No words available for level {level}!"),
                MessageStyle::Error,
            );
        } else if report.is_shortfall() {
            self.add_message(
                &format!(
                    "Level {level}: placed {} of {} words",
                    report.placed, report.target
                ),
                MessageStyle::Info,
            );
        } else {
            self.add_message(
                &format!("Level {level}: new grid with {} words", report.placed),
                MessageStyle::Success,
            );
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Translate a mouse click at terminal coordinates into a cell click
    pub fn click(&mut self, area: Rect, column: u16, row: u16) {
        let size = self.adapter.view().grid.size();
        if let Some((cell_row, cell_col)) = rendering::cell_at(area, size, column, row) {
            self.apply(InputEvent::CellClicked {
                row: cell_row,
                col: cell_col,
            });
        }
    }
}

/// Map a key press to an action
///
/// Letters type, digits 1-5 switch level, Ctrl-N starts a new grid and
/// Ctrl-R reveals the solution.
#[must_use]
pub fn action_for_key(key: KeyEvent) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    let event = match key.code {
        KeyCode::Char('c') if ctrl => return Some(Action::Quit),
        KeyCode::Esc => return Some(Action::Quit),
        KeyCode::Char('n' | 'N') if ctrl => InputEvent::NewGame,
        KeyCode::Char('r' | 'R') if ctrl => InputEvent::Reveal,
        KeyCode::Char(c) if c.is_ascii_digit() => {
            let level = c
                .to_digit(10)
                .and_then(|d| u8::try_from(d).ok())
                .and_then(|d| Level::new(d).ok())?;
            InputEvent::ChangeLevel(level)
        }
        KeyCode::Char(' ') => InputEvent::ToggleDirection,
        KeyCode::Char(c) if c.is_alphabetic() && !ctrl => InputEvent::Key(c),
        KeyCode::Backspace | KeyCode::Delete => InputEvent::Erase,
        KeyCode::Up => InputEvent::Move { d_row: -1, d_col: 0 },
        KeyCode::Down => InputEvent::Move { d_row: 1, d_col: 0 },
        KeyCode::Left => InputEvent::Move { d_row: 0, d_col: -1 },
        KeyCode::Right => InputEvent::Move { d_row: 0, d_col: 1 },
        KeyCode::Tab => InputEvent::NextWord,
        KeyCode::BackTab => InputEvent::PreviousWord,
        _ => return None,
    };

    Some(Action::Input(event))
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| rendering::ui(f, &app))?;

        match event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            Event::Key(key) if key.kind == KeyEventKind::Press => match action_for_key(key) {
                Some(Action::Quit) => app.should_quit = true,
                Some(Action::Input(event)) => app.apply(event),
                None => {}
            },
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let size = terminal.size()?;
                let area = Rect::new(0, 0, size.width, size.height);
                app.click(area, mouse.column, mouse.row);
            }
            _ => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn app() -> App {
        App::new(
            WordBank::embedded(),
            Level::default(),
            StdRng::seed_from_u64(99),
        )
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn letters_type() {
        assert_eq!(
            action_for_key(key(KeyCode::Char('a'))),
            Some(Action::Input(InputEvent::Key('a')))
        );
        assert_eq!(
            action_for_key(key(KeyCode::Char('é'))),
            Some(Action::Input(InputEvent::Key('é')))
        );
    }

    #[test]
    fn control_shortcuts() {
        assert_eq!(action_for_key(ctrl('c')), Some(Action::Quit));
        assert_eq!(
            action_for_key(ctrl('n')),
            Some(Action::Input(InputEvent::NewGame))
        );
        assert_eq!(
            action_for_key(ctrl('r')),
            Some(Action::Input(InputEvent::Reveal))
        );
        assert_eq!(action_for_key(key(KeyCode::Esc)), Some(Action::Quit));
    }

    #[test]
    fn digits_change_level() {
        assert_eq!(
            action_for_key(key(KeyCode::Char('4'))),
            Some(Action::Input(InputEvent::ChangeLevel(Level::new(4).unwrap())))
        );
        assert_eq!(action_for_key(key(KeyCode::Char('0'))), None);
        assert_eq!(action_for_key(key(KeyCode::Char('9'))), None);
    }

    #[test]
    fn navigation_keys() {
        assert_eq!(
            action_for_key(key(KeyCode::Left)),
            Some(Action::Input(InputEvent::Move { d_row: 0, d_col: -1 }))
        );
        assert_eq!(
            action_for_key(key(KeyCode::Tab)),
            Some(Action::Input(InputEvent::NextWord))
        );
        assert_eq!(
            action_for_key(key(KeyCode::Char(' '))),
            Some(Action::Input(InputEvent::ToggleDirection))
        );
        assert_eq!(
            action_for_key(key(KeyCode::Backspace)),
            Some(Action::Input(InputEvent::Erase))
        );
        assert_eq!(action_for_key(key(KeyCode::F(5))), None);
    }

    #[test]
    fn new_app_reports_first_grid() {
        let app = app();
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.messages.len(), 2);
    }

    #[test]
    fn reveal_counts_in_stats() {
        let mut app = app();
        app.apply(InputEvent::Reveal);
        assert_eq!(app.stats.games_revealed, 1);
        assert_eq!(app.stats.games_completed, 0);
    }

    #[test]
    fn new_game_counts_in_stats() {
        let mut app = app();
        app.apply(InputEvent::NewGame);
        app.apply(InputEvent::ChangeLevel(Level::MAX));
        assert_eq!(app.stats.total_games, 3);
        assert_eq!(app.adapter.level(), Level::MAX);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app();
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[4].text, "message 9");
    }

    #[test]
    fn click_on_seed_word_selects_it() {
        let mut app = app();
        let area = Rect::new(0, 0, 120, 40);
        let (row, col) = app.adapter.view().horizontal[0].start();
        let (x, y) = rendering::cell_origin(area, row, col);

        app.click(area, x, y);
        assert_eq!(app.adapter.view().selected_word_id, Some(1));
    }
}
