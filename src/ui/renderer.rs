//! Main UI renderer

use ratatui::Frame;

use crate::core::state::{AppMode, AppState};
use crate::ui::layout::LayoutManager;
use crate::ui::widgets::*;

pub struct Renderer;

impl Renderer {
    pub fn render(frame: &mut Frame, state: &AppState) {
        let area = frame.area();
        let theme = &state.theme;

        // Clear background
        frame.render_widget(
            ratatui::widgets::Block::default()
                .style(ratatui::style::Style::default().bg(theme.colors.bg_primary)),
            area,
        );

        // Compute layout
        let layout = LayoutManager::compute(area);

        frame.render_widget(Header::new(state, theme), layout.header);
        frame.render_widget(Footer::new(state, theme), layout.footer);

        frame.render_widget(OverviewPanel::new(state, theme), layout.overview);
        frame.render_widget(UsagePanel::new(state, theme), layout.usage);
        frame.render_widget(TransferPanel::new(state, theme), layout.transfer);
        frame.render_widget(CpuPanel::new(state, theme), layout.cpu_chart);
        frame.render_widget(TempPanel::new(state, theme), layout.temp_chart);

        // Render overlays based on mode
        if state.mode == AppMode::Help {
            frame.render_widget(HelpOverlay::new(theme), layout.overlay_area);
        }
    }
}
