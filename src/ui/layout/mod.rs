//! Layout management system

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Computed layout rects for all panels
#[derive(Debug, Clone)]
pub struct ComputedLayout {
    pub header: Rect,
    pub footer: Rect,
    pub overview: Rect,
    pub usage: Rect,
    pub transfer: Rect,
    pub cpu_chart: Rect,
    pub temp_chart: Rect,
    pub overlay_area: Rect,
}

pub struct LayoutManager;

impl LayoutManager {
    /// Compute all panel rects for the current terminal size.
    pub fn compute(area: Rect) -> ComputedLayout {
        // Main vertical split: header, body, footer
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Min(10),   // Body
                Constraint::Length(1), // Footer
            ])
            .split(area);

        // Body: text sidebar | chart column
        let body_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(40), Constraint::Min(40)])
            .split(main_chunks[1]);

        // Sidebar: overview fields, gauges, bar pairs
        let sidebar_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(18), // Overview text fields
                Constraint::Length(6),  // RAM/Swap gauges
                Constraint::Min(8),     // Disk/Net bars
            ])
            .split(body_chunks[0]);

        // Chart column: CPU on top, temperature below
        let chart_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(45), Constraint::Min(8)])
            .split(body_chunks[1]);

        ComputedLayout {
            header: main_chunks[0],
            footer: main_chunks[2],
            overview: sidebar_chunks[0],
            usage: sidebar_chunks[1],
            transfer: sidebar_chunks[2],
            cpu_chart: chart_chunks[0],
            temp_chart: chart_chunks[1],
            overlay_area: Self::centered_rect(60, 60, area),
        }
    }

    /// Create a centered rect with given percentage width/height
    fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(area);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}
