//! Disk and network panel: paired bar charts

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Span,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Widget},
};

use crate::core::state::AppState;
use crate::metrics::format::format_bytes;
use crate::ui::theme::Theme;

pub struct TransferPanel<'a> {
    state: &'a AppState,
    theme: &'a Theme,
}

impl<'a> TransferPanel<'a> {
    pub fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    fn bar_chart(
        &self,
        title: &'a str,
        bars: Vec<Bar<'a>>,
        bar_style: Style,
    ) -> BarChart<'a> {
        BarChart::default()
            .block(
                Block::default()
                    .title(Span::styled(title, self.theme.styles.panel_title))
                    .borders(Borders::ALL)
                    .border_style(self.theme.styles.panel_border),
            )
            .bar_width(8)
            .bar_gap(2)
            .bar_style(bar_style)
            .label_style(self.theme.styles.bar_label)
            .value_style(self.theme.styles.bar_value)
            .data(BarGroup::default().bars(&bars))
    }
}

impl<'a> Widget for TransferPanel<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let background = Block::default().style(Style::default().bg(self.theme.colors.bg_primary));
        background.render(area, buf);

        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let telemetry = &self.state.telemetry;

        let disk_bars = vec![
            Bar::default()
                .value(telemetry.disk.data[0] as u64)
                .text_value(format!("{:.1}", telemetry.disk.data[0]))
                .label("USED".into()),
            Bar::default()
                .value(telemetry.disk.data[1] as u64)
                .text_value(format!("{:.1}", telemetry.disk.data[1]))
                .label("AVAIL".into()),
        ];
        self.bar_chart(" DISK (GB) ", disk_bars, self.theme.styles.bar_disk)
            .render(halves[0], buf);

        let net_bars = vec![
            Bar::default()
                .value(telemetry.net.data[0] as u64)
                .text_value(format_bytes(telemetry.net.data[0] as u64))
                .label("RX".into()),
            Bar::default()
                .value(telemetry.net.data[1] as u64)
                .text_value(format_bytes(telemetry.net.data[1] as u64))
                .label("TX".into()),
        ];
        self.bar_chart(" NET ", net_bars, self.theme.styles.bar_net)
            .render(halves[1], buf);
    }
}
