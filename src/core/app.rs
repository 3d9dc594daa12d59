//! Main application orchestrator

use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::Stdout;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

use crate::config::Config;
use crate::core::events::{Event, EventHandler, EventResult, KeyBindings};
use crate::core::state::{AppMode, AppState, StateChange, StateStore};
use crate::metrics::{HttpMetricsSource, MetricsSource};
use crate::ui::renderer::Renderer;
use crate::ui::theme::Theme;

pub struct App {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    state: StateStore,
    event_tx: mpsc::UnboundedSender<Event>,
    source: Arc<dyn MetricsSource>,
    poll_interval: Duration,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        // Initialize terminal
        let backend = CrosstermBackend::new(std::io::stdout());
        let terminal = Terminal::new(backend)?;

        // Load theme
        let theme = Theme::from_name(&config.display.theme);

        // Build initial state
        let initial_state = AppState::new(config.endpoint.url.clone(), theme);
        let state = StateStore::new(initial_state);

        // Create a placeholder sender - will be replaced in run()
        let (event_tx, _) = mpsc::unbounded_channel::<Event>();

        let source: Arc<dyn MetricsSource> =
            Arc::new(HttpMetricsSource::new(config.endpoint.url.clone()));

        Ok(Self {
            terminal,
            state,
            event_tx,
            source,
            poll_interval: Duration::from_millis(config.endpoint.poll_interval_ms),
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        self.setup_terminal()?;

        // Spawn event sources; the poll ticker's immediate first tick issues
        // the startup refresh before the regular cadence begins.
        let (mut event_handler, event_tx) = EventHandler::new();
        self.event_tx = event_tx;
        EventHandler::spawn_sources(self.event_tx.clone(), self.poll_interval);

        // Initial render
        self.render()?;

        // Main event loop
        let result = self.event_loop(&mut event_handler).await;

        // Cleanup
        self.shutdown()?;
        result
    }

    fn setup_terminal(&mut self) -> Result<()> {
        crossterm::terminal::enable_raw_mode()?;
        crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::EnterAlternateScreen,
            crossterm::cursor::Hide,
        )?;
        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
        crossterm::terminal::disable_raw_mode()?;
        crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::cursor::Show,
        )?;
        Ok(())
    }

    async fn event_loop(&mut self, event_handler: &mut EventHandler) -> Result<()> {
        loop {
            // Wait for next event
            let Some(event) = event_handler.next().await else {
                break;
            };

            // Handle event
            match self.handle_event(event)? {
                EventResult::Continue => {}
                EventResult::Quit => break,
            }
        }
        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> Result<EventResult> {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Resize(w, h) => {
                self.state.update(|s| {
                    s.terminal_size = (w, h);
                    ((), None)
                });
                self.render()?;
                Ok(EventResult::Continue)
            }
            Event::Tick => {
                self.render()?;
                Ok(EventResult::Continue)
            }
            Event::PollTick => {
                self.issue_refresh();
                Ok(EventResult::Continue)
            }
            Event::ForceRefresh => {
                self.render()?;
                Ok(EventResult::Continue)
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<EventResult> {
        if KeyBindings::quit().matches(&key) || KeyBindings::quit_alt().matches(&key) {
            return Ok(EventResult::Quit);
        }

        let mode = self.state.read().mode;
        match mode {
            AppMode::Dashboard => {
                if KeyBindings::help().matches(&key) {
                    self.state.update(|s| {
                        s.mode = AppMode::Help;
                        ((), Some(StateChange::ModeChanged(AppMode::Help)))
                    });
                } else if KeyBindings::refresh().matches(&key) {
                    // Out-of-cadence refresh; bumps the generation, so any
                    // in-flight cycle is superseded.
                    self.issue_refresh();
                }
            }
            AppMode::Help => {
                if KeyBindings::escape().matches(&key) || KeyBindings::help().matches(&key) {
                    self.state.update(|s| {
                        s.mode = AppMode::Dashboard;
                        ((), Some(StateChange::ModeChanged(AppMode::Dashboard)))
                    });
                }
            }
        }

        Ok(EventResult::Continue)
    }

    fn issue_refresh(&mut self) {
        let generation = self.state.update(|s| (s.telemetry.begin_cycle(), None));
        tokio::spawn(poll_cycle(
            Arc::clone(&self.source),
            self.state.clone(),
            generation,
            self.event_tx.clone(),
        ));
    }

    fn render(&mut self) -> Result<()> {
        let state = self.state.snapshot();
        self.terminal.draw(|frame| {
            Renderer::render(frame, &state);
        })?;
        Ok(())
    }
}

/// One refresh cycle: fetch the endpoint, then distribute the snapshot to
/// every surface under this cycle's generation stamp. A failed fetch is
/// logged and dropped, leaving all surfaces at their last rendered values;
/// a completion superseded by a newer cycle is discarded.
pub(crate) async fn poll_cycle(
    source: Arc<dyn MetricsSource>,
    state: StateStore,
    generation: u64,
    event_tx: mpsc::UnboundedSender<Event>,
) {
    match source.fetch().await {
        Ok(snapshot) => {
            let label = chrono::Local::now().format("%H:%M:%S").to_string();
            let applied = state.update(|s| {
                let applied = s.telemetry.apply(generation, &snapshot, &label);
                (applied, applied.then_some(StateChange::SnapshotApplied))
            });
            if applied {
                let _ = event_tx.send(Event::ForceRefresh);
            } else {
                tracing::debug!(generation, "discarding superseded snapshot");
            }
        }
        Err(err) => tracing::warn!(%err, "metrics refresh failed"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::client::MockMetricsSource;
    use crate::metrics::{FetchError, MetricsSnapshot};

    fn sample_snapshot() -> MetricsSnapshot {
        serde_json::from_str(
            r#"{
                "cpu": 12.5, "ram": 42.0, "swap": 3.0, "disk": 55.0,
                "disk_used": 120.5, "disk_total": 240.0, "disk_avail": 119.5,
                "load": 1.24, "uptime": 90061, "users": 3,
                "temp": 54.0,
                "net_iface": "eth0", "net_rx": 1536, "net_tx": 1024
            }"#,
        )
        .unwrap()
    }

    fn test_store() -> StateStore {
        StateStore::new(AppState::new(
            "http://127.0.0.1:8080/metrics.json".to_string(),
            Theme::default(),
        ))
    }

    fn parse_error() -> FetchError {
        serde_json::from_str::<MetricsSnapshot>("not json")
            .unwrap_err()
            .into()
    }

    #[tokio::test]
    async fn successful_cycle_feeds_every_surface() {
        let mut source = MockMetricsSource::new();
        source.expect_fetch().returning(|| Ok(sample_snapshot()));

        let store = test_store();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let generation = store.update(|s| (s.telemetry.begin_cycle(), None));

        poll_cycle(Arc::new(source), store.clone(), generation, tx).await;

        let state = store.snapshot();
        assert_eq!(state.telemetry.ram.data, [42.0, 58.0]);
        assert_eq!(state.telemetry.cpu.len(), 1);
        assert!(state.telemetry.latest.is_some());
        assert!(matches!(rx.try_recv(), Ok(Event::ForceRefresh)));
    }

    #[tokio::test]
    async fn failed_cycle_leaves_surfaces_untouched() {
        let mut source = MockMetricsSource::new();
        source.expect_fetch().returning(|| Err(parse_error()));

        let store = test_store();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let generation = store.update(|s| (s.telemetry.begin_cycle(), None));

        poll_cycle(Arc::new(source), store.clone(), generation, tx).await;

        let state = store.snapshot();
        assert!(state.telemetry.latest.is_none());
        assert!(state.telemetry.cpu.is_empty());
        assert_eq!(state.telemetry.ram.data, [0.0, 0.0]);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn superseded_cycle_is_discarded() {
        let mut source = MockMetricsSource::new();
        source.expect_fetch().returning(|| Ok(sample_snapshot()));

        let store = test_store();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let stale = store.update(|s| (s.telemetry.begin_cycle(), None));
        let _current = store.update(|s| (s.telemetry.begin_cycle(), None));

        poll_cycle(Arc::new(source), store.clone(), stale, tx).await;

        let state = store.snapshot();
        assert!(state.telemetry.latest.is_none());
        assert!(state.telemetry.cpu.is_empty());
        assert!(rx.try_recv().is_err());
    }
}
