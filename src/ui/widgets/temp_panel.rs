//! Temperature history panel: line chart over the capped temperature series

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

pub struct TempPanel<'a> {
    state: &'a AppState,
    theme: &'a Theme,
}

impl<'a> TempPanel<'a> {
    pub fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl<'a> Widget for TempPanel<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let series = &self.state.telemetry.temp;
        let points = series.chart_points();

        // Keep headroom above the hottest reading so the line never rides
        // the top border.
        let y_max = series
            .values()
            .fold(100.0_f64, |max, v| if v > max { v } else { max })
            .ceil();

        let title = series
            .latest()
            .map(|v| format!(" TEMP {:.1}°C ", v))
            .unwrap_or_else(|| " TEMP ".to_string());

        let datasets = vec![Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(self.theme.styles.temp_line)
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
                    .title(Span::styled(title, self.theme.styles.panel_title))
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
                    .bounds([0.0, y_max])
                    .labels(vec![
                        Span::styled("0", self.theme.styles.chart_axis),
                        Span::styled(format!("{:.0}", y_max / 2.0), self.theme.styles.chart_axis),
                        Span::styled(format!("{:.0}", y_max), self.theme.styles.chart_axis),
                    ]),
            );

        chart.render(area, buf);
    }
}
