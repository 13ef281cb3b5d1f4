use std::path::Path;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use super::app::{MessageType, StatusMessage};
use super::layout::AppLayout;
use super::timestamps::{format_event_date, format_list_date};
use crate::filters::ViewFilters;
use crate::models::{AnalysisStats, EventKind, TimelineEvent};
use crate::utils::{format_path_with_tilde, single_line, strip_ansi_codes};

const TEXT: Color = Color::Rgb(250, 250, 250);
const MUTED: Color = Color::Rgb(113, 113, 122);
const ACCENT: Color = Color::Rgb(16, 185, 129);
const DECISION: Color = Color::Rgb(99, 102, 241);
const MILESTONE: Color = Color::Rgb(168, 85, 247);
const ERROR: Color = Color::Rgb(239, 68, 68);
const BAR_BG: Color = Color::Rgb(24, 24, 27);

/// Everything one frame needs
pub struct RenderState<'a> {
    pub events: &'a [&'a TimelineEvent],
    pub selected_idx: usize,
    pub input: &'a str,
    pub stats: &'a AnalysisStats,
    pub filters: &'a ViewFilters,
    pub query: &'a str,
    pub query_error: Option<&'a str>,
    pub status_message: Option<&'a StatusMessage>,
    pub source: Option<&'a Path>,
}

pub fn render_ui(frame: &mut Frame, state: &RenderState) {
    let layout = AppLayout::new(frame.area());

    render_overview(frame, layout.overview_area, state.stats, state.source);
    render_input(frame, layout.input_area, state.input, state.filters);
    render_event_list(frame, layout.events_area, state.events, state.selected_idx);
    render_details(frame, layout.details_area, state.events.get(state.selected_idx).copied());
    render_status_bar(frame, layout.status_area, state);
}

fn bordered(title: String) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(MUTED))
        .title(title)
}

fn kind_style(kind: EventKind) -> Style {
    match kind {
        EventKind::Decision => Style::default().fg(DECISION),
        EventKind::Milestone => Style::default().fg(MILESTONE),
    }
}

fn render_overview(frame: &mut Frame, area: Rect, stats: &AnalysisStats, source: Option<&Path>) {
    let label = Style::default().fg(MUTED);

    let counts = Line::from(vec![
        Span::styled("Events: ", label),
        Span::raw(stats.total_events.to_string()),
        Span::styled("  Decisions: ", label),
        Span::styled(stats.decisions.to_string(), Style::default().fg(DECISION)),
        Span::styled("  Milestones: ", label),
        Span::styled(stats.milestones.to_string(), Style::default().fg(MILESTONE)),
        Span::styled("  Span: ", label),
        Span::raw(stats.time_span.clone().unwrap_or_else(|| "-".to_string())),
        Span::styled("  Team: ", label),
        Span::raw(stats.team_members.len().to_string()),
    ]);

    let metrics = if stats.key_metrics.is_empty() {
        "-".to_string()
    } else {
        stats.key_metrics.join(", ")
    };
    let details = Line::from(vec![
        Span::styled("Phases: ", label),
        Span::raw(stats.care_phases.join(", ")),
        Span::styled("  Metrics: ", label),
        Span::raw(metrics),
    ]);

    let title = match source {
        Some(path) => format!(" Journey Overview: {} ", single_line(&format_path_with_tilde(path))),
        None => " Journey Overview ".to_string(),
    };

    frame.render_widget(Paragraph::new(vec![counts, details]).block(bordered(title)), area);
}

fn render_input(frame: &mut Frame, area: Rect, input: &str, filters: &ViewFilters) {
    let title = format!(" Search [type: {}] ", filters.filter_type);
    let paragraph = Paragraph::new(Line::from(vec![
        Span::styled("> ", Style::default().fg(ACCENT)),
        Span::raw(single_line(input)),
    ]))
    .block(bordered(title));

    frame.render_widget(paragraph, area);
}

fn render_event_list(frame: &mut Frame, area: Rect, events: &[&TimelineEvent], selected_idx: usize) {
    let items: Vec<ListItem> = events
        .iter()
        .map(|event| {
            let marker = match event.kind {
                EventKind::Decision => "◆",
                EventKind::Milestone => "●",
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", marker), kind_style(event.kind)),
                Span::styled(format!("{} ", format_list_date(&event.timestamp)), Style::default().fg(MUTED)),
                Span::raw(single_line(&event.title)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(bordered(format!(" Timeline ({}) ", events.len())))
        .highlight_style(Style::default().fg(TEXT).bg(ACCENT).add_modifier(Modifier::BOLD));

    let mut list_state =
        ListState::default().with_selected((!events.is_empty()).then_some(selected_idx));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_details(frame: &mut Frame, area: Rect, event: Option<&TimelineEvent>) {
    let Some(event) = event else {
        let empty = Paragraph::new("No events to show. Load a chat log or relax the filters.")
            .style(Style::default().fg(MUTED))
            .block(bordered(" Details ".to_string()))
            .wrap(Wrap { trim: false });
        frame.render_widget(empty, area);
        return;
    };

    let label = Style::default().fg(MUTED);
    let heading = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::styled(single_line(&event.title), Style::default().add_modifier(Modifier::BOLD)),
        Line::from(vec![
            Span::styled(event.kind.label(), kind_style(event.kind)),
            Span::styled(" | ", label),
            Span::raw(format_event_date(&event.timestamp)),
            Span::styled(" | ", label),
            Span::raw(single_line(&event.author)),
        ]),
        Line::from(""),
    ];

    for line in strip_ansi_codes(&event.summary).lines() {
        lines.push(Line::from(line.to_string()));
    }

    for (title, body) in event.detailed_analysis.sections() {
        lines.push(Line::from(""));
        lines.push(Line::styled(title, heading));
        for line in strip_ansi_codes(&body).lines() {
            lines.push(Line::from(line.to_string()));
        }
    }

    let paragraph = Paragraph::new(Text::from(lines))
        .block(bordered(" Details ".to_string()))
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &RenderState) {
    let bar = Style::default().bg(BAR_BG);

    let (text, style) = if let Some(error) = state.query_error {
        (format!(" [ERROR] {} ", error), bar.fg(ERROR))
    } else if let Some(message) = state.status_message {
        let fg = match message.message_type {
            MessageType::Success => ACCENT,
            MessageType::Error => ERROR,
        };
        (format!(" {} ", message.text), bar.fg(fg))
    } else {
        let mut parts = Vec::new();
        if state.events.is_empty() {
            parts.push("No events".to_string());
        } else {
            parts.push(format!("event {}/{}", state.selected_idx + 1, state.events.len()));
        }
        if !state.query.is_empty() {
            parts.push(format!("query: {}", single_line(state.query)));
        }
        parts.push("Tab: type".to_string());
        parts.push("Enter: apply query".to_string());
        parts.push("Ctrl+E: export".to_string());
        parts.push("Ctrl+Y: copy".to_string());
        parts.push(if state.input.is_empty() { "Esc: quit" } else { "Esc: clear" }.to_string());
        (format!(" {} ", parts.join(" | ")), bar.fg(TEXT))
    };

    frame.render_widget(Paragraph::new(text).style(style), area);
}
