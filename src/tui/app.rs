use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::config_io::read_config;
use crate::io::list_io::{self, resolve_store_dir};
use crate::io::session::{self, SessionRecord};
use crate::model::{ROOT_LIST, TodoList};

use super::input;
use super::render;
use super::theme::Theme;

/// How long a notice stays in the status row
const NOTICE_DURATION: Duration = Duration::from_secs(3);

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Input,
}

/// One list screen: an owned list plus its cursor, scroll, and input line.
///
/// Screens stack; each owns its own loaded items and never reaches into
/// another screen's state. A parent beneath a nested screen keeps its last
/// in-memory items and is not reloaded when the child is popped.
#[derive(Debug)]
pub struct ListScreen {
    pub list: TodoList,
    /// Cursor index into the item list
    pub cursor: usize,
    /// Scroll offset (first visible row), adjusted during render
    pub scroll: usize,
    /// Uncommitted input line text
    pub input: String,
    /// Byte offset of the input cursor
    pub input_cursor: usize,
}

impl ListScreen {
    /// Load a screen for a named list from the store. A list with no file
    /// opens empty.
    pub fn open(store_dir: &Path, name: &str) -> Self {
        let items = list_io::load_list(store_dir, name);
        ListScreen {
            list: TodoList::new(name, items),
            cursor: 0,
            scroll: 0,
            input: String::new(),
            input_cursor: 0,
        }
    }
}

/// Main application state
pub struct App {
    pub store_dir: PathBuf,
    /// Navigation stack; the last screen is the active one. Never empty.
    pub stack: Vec<ListScreen>,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    pub show_key_hints: bool,
    /// Transient notice shown in the status row
    pub notice: Option<String>,
    pub notice_at: Option<Instant>,
}

impl App {
    pub fn new(store_dir: PathBuf) -> Self {
        let config = read_config(&store_dir);
        let theme = Theme::from_config(&config.ui);
        let root = ListScreen::open(&store_dir, ROOT_LIST);
        App {
            store_dir,
            stack: vec![root],
            mode: Mode::Navigate,
            should_quit: false,
            theme,
            show_key_hints: config.ui.show_key_hints,
            notice: None,
            notice_at: None,
        }
    }

    /// The active screen (top of the navigation stack)
    pub fn screen(&self) -> &ListScreen {
        self.stack.last().expect("stack is never empty")
    }

    pub fn screen_mut(&mut self) -> &mut ListScreen {
        self.stack.last_mut().expect("stack is never empty")
    }

    pub fn notify(&mut self, message: impl Into<String>) {
        self.notice = Some(message.into());
        self.notice_at = Some(Instant::now());
    }

    /// Drop the notice once it has been displayed long enough
    pub fn expire_notice(&mut self) {
        if let Some(at) = self.notice_at
            && at.elapsed() >= NOTICE_DURATION
        {
            self.notice = None;
            self.notice_at = None;
        }
    }

    /// Rewrite the active screen's file from its in-memory items. Write
    /// failures are logged and swallowed; memory stays authoritative.
    fn persist_active(&mut self) {
        let screen = self.stack.last().expect("stack is never empty");
        if let Err(e) = list_io::save_list(&self.store_dir, &screen.list.name, &screen.list.items) {
            log::warn!("{e}");
        }
    }

    /// Commit the input line as a new item. Blank input (empty after
    /// trimming) changes nothing and surfaces a notice instead.
    pub fn add_item(&mut self) {
        let text = self.screen().input.clone();
        if !self.screen_mut().list.add(&text) {
            self.notify("nothing to add");
            return;
        }
        let screen = self.screen_mut();
        screen.input.clear();
        screen.input_cursor = 0;
        self.persist_active();
    }

    /// Open the nested list named by the item under the cursor
    pub fn select_item(&mut self) {
        let screen = self.screen();
        let Some(item) = screen.list.get(screen.cursor).map(|s| s.to_string()) else {
            return;
        };
        self.notify(format!("clicked on {item}"));
        self.stack.push(ListScreen::open(&self.store_dir, &item));
        self.mode = Mode::Navigate;
    }

    /// Remove the item under the cursor. The nested list headed by that
    /// item is deleted from disk as well, whether or not its file exists.
    pub fn remove_item(&mut self) {
        let screen = self.screen();
        let Some(child) = screen.list.get(screen.cursor).map(|s| s.to_string()) else {
            return;
        };
        if let Err(e) = list_io::delete_list(&self.store_dir, &child) {
            log::warn!("{e}");
        }
        let screen = self.screen_mut();
        screen.list.remove(screen.cursor);
        screen.cursor = screen.cursor.min(screen.list.len().saturating_sub(1));
        self.persist_active();
        self.notify("deleted");
    }

    /// Pop the active nested screen. Returns false at the root. The parent
    /// keeps its last in-memory items; there is no reload from disk.
    pub fn pop_screen(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        self.stack.pop();
        true
    }

    /// Record which screen was active and any uncommitted input, for the
    /// next launch to consume.
    pub fn save_session(&self) {
        let screen = self.screen();
        let nested = self.stack.len() > 1;
        let record = SessionRecord {
            nested_active: nested,
            list_name: nested.then(|| screen.list.name.clone()),
            pending_input: (!screen.input.is_empty()).then(|| screen.input.clone()),
        };
        if let Err(e) = session::write_session(&self.store_dir, &record) {
            log::warn!("save session: {e}");
        }
    }

    /// Consume the session record left by the previous run, if any.
    ///
    /// A nested screen is reconstructed fresh from its file; only the file
    /// contents come back, not the previous run's in-memory state. Otherwise
    /// pending input is restored into the root input line. The record is
    /// cleared by the read either way.
    pub fn restore_session(&mut self) {
        let Some(record) = session::take_session(&self.store_dir) else {
            return;
        };
        if record.nested_active {
            if let Some(name) = record.list_name {
                self.stack.push(ListScreen::open(&self.store_dir, &name));
            }
        } else if let Some(text) = record.pending_input {
            let screen = self.screen_mut();
            screen.input_cursor = text.len();
            screen.input = text;
        }
    }
}

/// Run the TUI application
pub fn run(dir_override: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let store_dir = resolve_store_dir(dir_override)?;

    let mut app = App::new(store_dir);
    app.restore_session();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Run event loop
    let result = run_event_loop(&mut terminal, &mut app);

    // Record the session before exit
    app.save_session();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        app.expire_notice();
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
