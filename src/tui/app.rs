//! Interactive timeline browser state and event loop.
//!
//! The [`App`] holds the current [`Session`] and swaps it for a new value on every filtering
//! action; it never edits session data in place. Input syntax is `query | search`:
//!
//! - the query (left of `|`) is a `field:value` expression applied when Enter is pressed
//! - the search (right of `|`, or the whole input without a `|`) filters live as you type
//!
//! Tab cycles the all/decision/milestone selector, Ctrl+E writes an export file and Ctrl+Y copies
//! the selected event's report.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use chrono::Utc;
use ratatui::Terminal;
use ratatui::backend::Backend;
use tracing::warn;

use super::events::{Action, poll_event};
use super::rendering::{RenderState, render_ui};
use crate::clipboard::copy_event_report;
use crate::export::write_export;
use crate::filters::split_query;
use crate::models::TimelineEvent;
use crate::session::Session;

const STATUS_SUCCESS_DURATION_MS: u64 = 3000;
const STATUS_ERROR_DURATION_MS: u64 = 5000;
/// Rows moved by PageUp/PageDown
const PAGE_SIZE: isize = 10;
/// Longest accepted input
const MAX_INPUT_CHARS: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Error,
}

/// Transient status message with expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub message_type: MessageType,
    pub expires_at: Instant,
}

pub struct App {
    session: Session,
    input: String,
    selected_idx: usize,
    should_quit: bool,
    query_error: Option<String>,
    status_message: Option<StatusMessage>,
    export_dir: PathBuf,
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl App {
    /// `export_dir` receives Ctrl+E exports
    pub fn new(session: Session, export_dir: PathBuf) -> Self {
        Self {
            session,
            input: String::new(),
            selected_idx: 0,
            should_quit: false,
            query_error: None,
            status_message: None,
            export_dir,
            needs_redraw: true,
            last_draw_time: Instant::now(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn set_status(&mut self, text: impl Into<String>, message_type: MessageType) {
        let duration_ms = match message_type {
            MessageType::Success => STATUS_SUCCESS_DURATION_MS,
            MessageType::Error => STATUS_ERROR_DURATION_MS,
        };
        self.status_message = Some(StatusMessage {
            text: text.into(),
            message_type,
            expires_at: Instant::now() + Duration::from_millis(duration_ms),
        });
        self.needs_redraw = true;
    }

    fn clear_expired_status(&mut self) {
        if self.status_message.as_ref().is_some_and(|msg| Instant::now() >= msg.expires_at) {
            self.status_message = None;
            self.needs_redraw = true;
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            self.clear_expired_status();

            // Periodic redraw picks up terminal resizes
            let now = Instant::now();
            if self.needs_redraw || now.duration_since(self.last_draw_time) >= Duration::from_millis(100) {
                self.draw(terminal)?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            let action = poll_event(Duration::from_millis(100))?;
            self.handle_action(action);
        }

        Ok(())
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> Result<()> {
        let events = self.session.visible_events();
        terminal.draw(|f| {
            let state = RenderState {
                events: &events,
                selected_idx: self.selected_idx,
                input: &self.input,
                stats: self.session.stats(),
                filters: self.session.filters(),
                query: self.session.query_text(),
                query_error: self.query_error.as_deref(),
                status_message: self.status_message.as_ref(),
                source: self.session.source(),
            };
            render_ui(f, &state);
        })?;
        Ok(())
    }

    fn visible_count(&self) -> usize {
        self.session.visible_events().len()
    }

    fn selected_event(&self) -> Option<&TimelineEvent> {
        self.session.visible_events().get(self.selected_idx).copied()
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ClearSearch => {
                if self.input.is_empty() {
                    self.should_quit = true;
                } else {
                    self.input.clear();
                    self.query_error = None;
                    self.sync_search_term();
                }
            }
            Action::MoveUp => self.move_selection(-1),
            Action::MoveDown => self.move_selection(1),
            Action::PageUp => self.move_selection(-PAGE_SIZE),
            Action::PageDown => self.move_selection(PAGE_SIZE),
            Action::UpdateSearch(c) => {
                if self.input.chars().count() < MAX_INPUT_CHARS {
                    self.input.push(c);
                    self.sync_search_term();
                }
            }
            Action::DeleteChar => {
                if self.input.pop().is_some() {
                    self.sync_search_term();
                }
            }
            Action::ApplyQuery => self.apply_query(),
            Action::CycleFilterType => {
                self.replace_session(self.session.cycle_filter_type());
            }
            Action::Export => self.export(),
            Action::CopyToClipboard => self.copy_selected(),
            Action::None => {}
        }
    }

    fn replace_session(&mut self, session: Session) {
        self.session = session;
        self.selected_idx = 0;
        self.needs_redraw = true;
    }

    /// Live search: the part right of `|` (or the whole input) is the search term
    fn sync_search_term(&mut self) {
        let (_, search) = split_query(&self.input);
        let next = self.session.with_search_term(search);
        self.replace_session(next);
    }

    fn apply_query(&mut self) {
        let (query, _) = split_query(&self.input);
        match self.session.with_query(query) {
            Ok(next) => {
                self.query_error = None;
                self.replace_session(next);
            }
            Err(e) => {
                self.query_error =
                    Some(format!("{:#} | Try: type:decision author:name | search", e));
                self.needs_redraw = true;
            }
        }
    }

    fn export(&mut self) {
        let doc = self.session.export(Utc::now());
        let path = self.export_dir.join(doc.default_filename());
        match write_export(&doc, &path) {
            Ok(()) => self.set_status(format!("✓ Exported to {}", path.display()), MessageType::Success),
            Err(e) => {
                warn!("Export failed: {:#}", e);
                self.set_status(format!("✗ Export failed: {:#}", e), MessageType::Error);
            }
        }
    }

    fn copy_selected(&mut self) {
        let result = match self.selected_event() {
            Some(event) => copy_event_report(event),
            None => {
                self.set_status("✗ No event to copy", MessageType::Error);
                return;
            }
        };
        match result {
            Ok(()) => self.set_status("✓ Copied to clipboard", MessageType::Success),
            Err(e) => self.set_status(format!("✗ Clipboard error: {}", e), MessageType::Error),
        }
    }

    fn move_selection(&mut self, delta: isize) {
        let total = self.visible_count();
        if total == 0 {
            self.selected_idx = 0;
            return;
        }

        let old_idx = self.selected_idx;
        let new_idx = (self.selected_idx as isize + delta).max(0) as usize;
        self.selected_idx = new_idx.min(total - 1);

        if old_idx != self.selected_idx {
            self.needs_redraw = true;
        }
    }
}
