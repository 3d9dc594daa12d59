//! CPU history panel: line chart over the capped CPU series

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Widget},
};

use crate::core::state::AppState;
use crate::ui::theme::Theme;

pub struct CpuPanel<'a> {
    state: &'a AppState,
    theme: &'a Theme,
}

impl<'a> CpuPanel<'a> {
    pub fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl<'a> Widget for CpuPanel<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let series = &self.state.telemetry.cpu;
        let points = series.chart_points();

        let current = series
            .latest()
            .map(|v| format!(" CPU {:.1}% ", v))
            .unwrap_or_else(|| " CPU ".to_string());

        let datasets = vec![Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(self.theme.styles.cpu_line)
            .data(&points)];

        let x_bounds = [0.0, (series.cap() - 1) as f64];
        let x_labels = vec![
            Span::styled(
                series.first_label().unwrap_or("").to_string(),
                self.theme.styles.chart_axis,
            ),
            Span::styled(
                series.last_label().unwrap_or("").to_string(),
                self.theme.styles.chart_axis,
            ),
        ];

        let chart = Chart::new(datasets)
            .block(
                Block::default()
                    .title(Span::styled(current, self.theme.styles.panel_title))
                    .borders(Borders::ALL)
                    .border_style(self.theme.styles.panel_border)
                    .style(Style::default().bg(self.theme.colors.bg_primary)),
            )
            .x_axis(
                Axis::default()
                    .style(self.theme.styles.chart_axis)
                    .bounds(x_bounds)
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .style(self.theme.styles.chart_axis)
                    .bounds([0.0, 100.0])
                    .labels(vec![
                        Span::styled("0", self.theme.styles.chart_axis),
                        Span::styled("50", self.theme.styles.chart_axis),
                        Span::styled("100", self.theme.styles.chart_axis),
                    ]),
            );

        chart.render(area, buf);
    }
}
