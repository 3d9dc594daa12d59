//! Memory usage panel: RAM and swap gauges

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Span,
    widgets::{Block, Borders, Gauge, Widget},
};

use crate::core::state::AppState;
use crate::metrics::PercentPair;
use crate::ui::theme::Theme;

pub struct UsagePanel<'a> {
    state: &'a AppState,
    theme: &'a Theme,
}

impl<'a> UsagePanel<'a> {
    pub fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    fn gauge(pair: &PercentPair, style: Style) -> Gauge<'_> {
        let used = pair.used().clamp(0.0, 100.0);
        Gauge::default()
            .gauge_style(style)
            .ratio(used / 100.0)
            .label(format!("{:.1}% used / {:.1}% free", pair.used(), pair.free()))
    }
}

impl<'a> Widget for UsagePanel<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled(" MEMORY ", self.theme.styles.panel_title))
            .borders(Borders::ALL)
            .border_style(self.theme.styles.panel_border)
            .style(Style::default().bg(self.theme.colors.bg_primary));

        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Length(2)])
            .split(inner);

        let telemetry = &self.state.telemetry;

        for (label, pair, style, row) in [
            ("RAM", &telemetry.ram, self.theme.styles.gauge_ram, rows[0]),
            ("SWAP", &telemetry.swap, self.theme.styles.gauge_swap, rows[1]),
        ] {
            if row.height == 0 {
                continue;
            }
            let label_span = Span::styled(format!("{:<5}", label), self.theme.styles.label);
            buf.set_span(row.x, row.y, &label_span, 5);

            let gauge_area = Rect {
                x: row.x + 5,
                y: row.y,
                width: row.width.saturating_sub(5),
                height: 1,
            };
            Self::gauge(pair, style).render(gauge_area, buf);
        }
    }
}
