//! Application state with reactive updates

#![allow(dead_code)]

use chrono::{DateTime, Local};
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::sync::broadcast;

use crate::metrics::{MetricsSnapshot, PercentPair, TimeSeries, ValuePair};
use crate::ui::theme::Theme;

/// Points kept for the CPU line chart.
pub const CPU_SERIES_CAP: usize = 20;
/// Points kept for the temperature line chart.
pub const TEMP_SERIES_CAP: usize = 200;

/// Top-level application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    /// Normal dashboard view
    #[default]
    Dashboard,
    /// Help overlay showing
    Help,
}

/// Every surface the refresh loop writes into. Constructed once at startup
/// and mutated only through `StateStore::update`.
#[derive(Debug, Clone)]
pub struct TelemetryState {
    /// Latest successfully fetched snapshot; the text fields render from it.
    pub latest: Option<MetricsSnapshot>,
    pub last_refresh: Option<DateTime<Local>>,
    pub cpu: TimeSeries,
    pub temp: TimeSeries,
    pub ram: PercentPair,
    pub swap: PercentPair,
    /// `[used, available]` in GB.
    pub disk: ValuePair,
    /// `[rx, tx]` in bytes.
    pub net: ValuePair,
    generation: u64,
}

impl Default for TelemetryState {
    fn default() -> Self {
        Self {
            latest: None,
            last_refresh: None,
            cpu: TimeSeries::with_capacity(CPU_SERIES_CAP),
            temp: TimeSeries::with_capacity(TEMP_SERIES_CAP),
            ram: PercentPair::default(),
            swap: PercentPair::default(),
            disk: ValuePair::default(),
            net: ValuePair::default(),
            generation: 0,
        }
    }
}

impl TelemetryState {
    /// Stamp a new refresh cycle. `apply` refuses completions carrying an
    /// older stamp, so the last issued cycle wins over the last to resolve.
    pub fn begin_cycle(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    pub fn current_generation(&self) -> u64 {
        self.generation
    }

    /// Distribute one snapshot to every surface. Returns `false` without
    /// touching anything when a newer cycle was issued after this one.
    pub fn apply(&mut self, generation: u64, snapshot: &MetricsSnapshot, label: &str) -> bool {
        if generation != self.generation {
            return false;
        }

        self.ram.set(snapshot.ram);
        self.swap.set(snapshot.swap);
        self.disk.set(snapshot.disk_used, snapshot.disk_avail);
        self.net.set(snapshot.net_rx as f64, snapshot.net_tx as f64);

        self.cpu.push(label, snapshot.cpu);
        // A snapshot without a temperature reading contributes no point.
        if let Some(temp) = snapshot.temp {
            self.temp.push(label, temp);
        }

        self.latest = Some(snapshot.clone());
        self.last_refresh = Some(Local::now());
        true
    }
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub mode: AppMode,
    pub telemetry: TelemetryState,
    pub endpoint: String,
    pub theme: Theme,
    pub terminal_size: (u16, u16),
}

impl AppState {
    pub fn new(endpoint: String, theme: Theme) -> Self {
        Self {
            mode: AppMode::Dashboard,
            telemetry: TelemetryState::default(),
            endpoint,
            theme,
            terminal_size: (80, 24),
        }
    }
}

/// Reactive state changes via broadcast channel
#[derive(Debug, Clone)]
pub enum StateChange {
    ModeChanged(AppMode),
    SnapshotApplied,
}

/// Thread-safe state store
pub struct StateStore {
    state: Arc<RwLock<AppState>>,
    change_tx: broadcast::Sender<StateChange>,
}

impl StateStore {
    pub fn new(initial: AppState) -> Self {
        let (change_tx, _) = broadcast::channel(64);
        Self {
            state: Arc::new(RwLock::new(initial)),
            change_tx,
        }
    }

    /// Subscribe to state changes
    pub fn subscribe(&self) -> broadcast::Receiver<StateChange> {
        self.change_tx.subscribe()
    }

    /// Atomic state mutation with change notification
    pub fn update<F, R>(&self, mutator: F) -> R
    where
        F: FnOnce(&mut AppState) -> (R, Option<StateChange>),
    {
        let mut state = self.state.write();
        let (result, change) = mutator(&mut state);
        if let Some(change) = change {
            let _ = self.change_tx.send(change);
        }
        result
    }

    /// Read current state
    pub fn read(&self) -> parking_lot::RwLockReadGuard<'_, AppState> {
        self.state.read()
    }

    /// Get a clone of the current state
    pub fn snapshot(&self) -> AppState {
        self.state.read().clone()
    }
}

impl Clone for StateStore {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            change_tx: self.change_tx.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_snapshot() -> MetricsSnapshot {
        serde_json::from_str(
            r#"{
                "cpu": 12.5, "ram": 42.0, "swap": 3.0, "disk": 55.0,
                "disk_used": 120.5, "disk_total": 240.0, "disk_avail": 119.5,
                "load": 1.24, "uptime": 90061, "users": 3,
                "temp": 54.0, "temp_cpu0": 52.0, "temp_cpu1": 55.5,
                "net_iface": "eth0", "net_rx": 1536, "net_tx": 1024
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn apply_distributes_one_snapshot_to_every_surface() {
        let mut telemetry = TelemetryState::default();
        let generation = telemetry.begin_cycle();
        let snapshot = sample_snapshot();

        assert!(telemetry.apply(generation, &snapshot, "10:00:00"));

        assert_eq!(telemetry.ram.data, [42.0, 58.0]);
        assert_eq!(telemetry.swap.data, [3.0, 97.0]);
        assert_eq!(telemetry.disk.data, [120.5, 119.5]);
        assert_eq!(telemetry.net.data, [1536.0, 1024.0]);
        assert_eq!(telemetry.cpu.len(), 1);
        assert_eq!(telemetry.cpu.latest(), Some(12.5));
        assert_eq!(telemetry.temp.latest(), Some(54.0));
        assert_eq!(telemetry.latest, Some(snapshot));
        assert!(telemetry.last_refresh.is_some());
    }

    #[test]
    fn snapshot_without_temperature_appends_no_point() {
        let mut telemetry = TelemetryState::default();
        let generation = telemetry.begin_cycle();
        let mut snapshot = sample_snapshot();
        snapshot.temp = None;

        assert!(telemetry.apply(generation, &snapshot, "10:00:00"));

        assert!(telemetry.temp.is_empty());
        assert_eq!(telemetry.cpu.len(), 1);
    }

    #[test]
    fn superseded_generation_is_refused_untouched() {
        let mut telemetry = TelemetryState::default();
        let stale = telemetry.begin_cycle();
        let _current = telemetry.begin_cycle();

        assert!(!telemetry.apply(stale, &sample_snapshot(), "10:00:00"));

        assert!(telemetry.latest.is_none());
        assert!(telemetry.cpu.is_empty());
        assert_eq!(telemetry.ram.data, [0.0, 0.0]);
    }

    #[test]
    fn cpu_series_is_capped_across_cycles() {
        let mut telemetry = TelemetryState::default();
        let snapshot = sample_snapshot();
        for i in 0..CPU_SERIES_CAP + 5 {
            let generation = telemetry.begin_cycle();
            telemetry.apply(generation, &snapshot, &format!("t{}", i));
        }
        assert_eq!(telemetry.cpu.len(), CPU_SERIES_CAP);
    }
}
