use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Rows reserved for the Journey Overview header (2 text rows + borders)
const OVERVIEW_HEIGHT: u16 = 4;
/// Rows for the search input box
const INPUT_HEIGHT: u16 = 3;

/// Screen regions, top to bottom: overview, search input, events | details, status bar
pub struct AppLayout {
    pub overview_area: Rect,
    pub input_area: Rect,
    pub events_area: Rect,
    pub details_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Event list takes 45% of the width, the detail pane the rest
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(OVERVIEW_HEIGHT),
                Constraint::Length(INPUT_HEIGHT),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(rows[2]);

        Self {
            overview_area: rows[0],
            input_area: rows[1],
            events_area: columns[0],
            details_area: columns[1],
            status_area: rows[3],
        }
    }
}
