//! Help overlay widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Widget},
};

use crate::ui::theme::Theme;

pub struct HelpOverlay<'a> {
    theme: &'a Theme,
}

impl<'a> HelpOverlay<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl<'a> Widget for HelpOverlay<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .title(Span::styled(" Glance Help ", self.theme.styles.panel_title))
            .borders(Borders::ALL)
            .border_style(self.theme.styles.panel_border)
            .style(Style::default().bg(self.theme.colors.bg_secondary));

        let inner = block.inner(area);
        block.render(area, buf);

        let sections = [
            (
                "General",
                vec![
                    ("q / Ctrl-C", "Quit"),
                    ("r", "Refresh now"),
                    ("?", "Toggle help"),
                    ("Esc", "Close overlay"),
                ],
            ),
            (
                "Panels",
                vec![
                    ("HOST", "Latest snapshot text fields"),
                    ("MEMORY", "RAM and swap gauges"),
                    ("DISK/NET", "Used vs available, RX vs TX"),
                    ("CPU/TEMP", "History charts, oldest point drops first"),
                ],
            ),
        ];

        let mut y = inner.y;
        for (title, entries) in sections {
            if y >= inner.y + inner.height {
                break;
            }
            let title_span = Span::styled(
                title,
                Style::default()
                    .fg(self.theme.colors.accent_secondary)
                    .add_modifier(Modifier::BOLD),
            );
            buf.set_span(inner.x + 1, y, &title_span, inner.width);
            y += 1;

            for (key, description) in entries {
                if y >= inner.y + inner.height {
                    break;
                }
                let line = Line::from(vec![
                    Span::styled(format!("  {:<12}", key), self.theme.styles.keybind_key),
                    Span::styled(description, self.theme.styles.keybind),
                ]);
                buf.set_line(inner.x + 1, y, &line, inner.width.saturating_sub(2));
                y += 1;
            }
            y += 1;
        }
    }
}
