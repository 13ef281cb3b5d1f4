//! Interactive timeline browser
mod app;
mod events;
mod layout;
mod rendering;
mod terminal;
mod timestamps;

use std::path::PathBuf;

use anyhow::Result;
pub use app::App;
use terminal::TerminalManager;
use tracing::debug;

use crate::session::Session;

/// Run the browser until the user quits; the terminal is restored on every exit path
pub fn run_interactive(session: Session, export_dir: PathBuf) -> Result<()> {
    debug!("Starting interactive browser with {} events", session.timeline().len());

    let mut manager = TerminalManager::new()?;
    let mut app = App::new(session, export_dir);
    app.run(manager.terminal_mut())
}
