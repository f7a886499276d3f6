use std::io::{self, IsTerminal};
use std::sync::OnceLock;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use time::OffsetDateTime;
use time::format_description::FormatItem;
use time::format_description::well_known::Rfc3339;
use tracing::error;

use crate::catalog::{CatalogClient, CatalogLoad, spawn_load};
use crate::config::LateLoadPolicy;
use crate::model::{Book, Field};
use crate::store::{AddForm, BookStore, LoadOutcome};
use crate::tui::TuiRunOptions;

use super::{BooksView, Input, input_spans};

mod actions;
mod event_loop;
mod form_keys;
mod output;
mod render;
mod time_utils;
mod types;

use self::output::{EntryKind, ScrollEntry};
use self::time_utils::{fmt_ts_ui, now_ts};
use self::types::{Focus, FormInput, LoadState};

pub(super) fn run(opts: TuiRunOptions) -> Result<()> {
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        anyhow::bail!("TUI requires an interactive terminal (TTY)");
    }

    let client = CatalogClient::new(opts.catalog.clone())?;

    let mut stdout = io::stdout();
    enable_raw_mode().context("enable raw mode")?;
    execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;
    terminal.clear().ok();

    let mut app = App::new(opts);
    app.start_load(client);
    let res = event_loop::run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    res
}

pub(super) struct App {
    store: BookStore,
    late_load: LateLoadPolicy,
    subject: String,

    loader: Option<CatalogLoad>,
    load_state: LoadState,
    loaded_at: Option<String>,

    // Highlighted row in the book list.
    cursor: usize,
    focus: Focus,
    form: FormInput,

    last_result: Option<ScrollEntry>,

    quit: bool,
}

impl App {
    fn new(opts: TuiRunOptions) -> Self {
        Self {
            store: BookStore::new(),
            late_load: opts.late_load,
            subject: opts.catalog.subject,
            loader: None,
            load_state: LoadState::Idle,
            loaded_at: None,
            cursor: 0,
            focus: Focus::List,
            form: FormInput::default(),
            last_result: None,
            quit: false,
        }
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/app_tests.rs"]
mod tests;
