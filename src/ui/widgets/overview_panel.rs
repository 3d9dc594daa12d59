//! Host overview panel: the scalar text fields of the snapshot

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::core::state::AppState;
use crate::metrics::format::{format_bytes, format_duration, format_temp};
use crate::ui::theme::Theme;

pub struct OverviewPanel<'a> {
    state: &'a AppState,
    theme: &'a Theme,
}

impl<'a> OverviewPanel<'a> {
    pub fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl<'a> Widget for OverviewPanel<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled(" HOST ", self.theme.styles.panel_title))
            .borders(Borders::ALL)
            .border_style(self.theme.styles.panel_border)
            .style(Style::default().bg(self.theme.colors.bg_primary));

        let inner = block.inner(area);
        block.render(area, buf);

        let Some(snapshot) = &self.state.telemetry.latest else {
            Paragraph::new("waiting for metrics…")
                .style(self.theme.styles.placeholder)
                .render(inner, buf);
            return;
        };

        let value = self.theme.styles.value;
        let temp_style = |v: Option<f64>| {
            if v.is_some() {
                value
            } else {
                self.theme.styles.placeholder
            }
        };

        let rows: Vec<(&str, String, Style)> = vec![
            ("CPU", format!("{:.1} %", snapshot.cpu), value),
            ("RAM", format!("{:.1} %", snapshot.ram), value),
            ("SWAP", format!("{:.1} %", snapshot.swap), value),
            ("DISK", format!("{:.1} %", snapshot.disk), value),
            (
                "USED",
                format!("{:.1} GB of {:.1} GB", snapshot.disk_used, snapshot.disk_total),
                value,
            ),
            ("AVAIL", format!("{:.1} GB", snapshot.disk_avail), value),
            ("LOAD", format!("{:.2}", snapshot.load), value),
            ("UPTIME", format_duration(snapshot.uptime), value),
            ("USERS", snapshot.users.to_string(), value),
            ("TEMP", format_temp(snapshot.temp), temp_style(snapshot.temp)),
            (
                "CPU0",
                format_temp(snapshot.temp_cpu0),
                temp_style(snapshot.temp_cpu0),
            ),
            (
                "CPU1",
                format_temp(snapshot.temp_cpu1),
                temp_style(snapshot.temp_cpu1),
            ),
            (
                "NVME",
                format_temp(snapshot.temp_nvme),
                temp_style(snapshot.temp_nvme),
            ),
            ("IFACE", snapshot.net_iface.clone(), value),
            ("RX", format_bytes(snapshot.net_rx), value),
            ("TX", format_bytes(snapshot.net_tx), value),
        ];

        for (i, (label, text, style)) in rows.into_iter().enumerate() {
            if i as u16 >= inner.height {
                break;
            }
            let line = Line::from(vec![
                Span::styled(format!("{:<7} ", label), self.theme.styles.label),
                Span::styled(text, style),
            ]);
            buf.set_line(inner.x, inner.y + i as u16, &line, inner.width);
        }
    }
}
