//! Chart-backing datasets: capped time series and two-slot pairs.
//!
//! These are the display surfaces the refresh cycle writes into. They hold
//! plain numbers; widgets decide how to draw them.

use std::collections::VecDeque;

/// Ordered `(label, value)` points with FIFO eviction beyond a fixed cap.
#[derive(Debug, Clone)]
pub struct TimeSeries {
    cap: usize,
    points: VecDeque<(String, f64)>,
}

impl TimeSeries {
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            cap,
            points: VecDeque::with_capacity(cap),
        }
    }

    /// Append a point, evicting the oldest one if the series is full.
    pub fn push(&mut self, label: impl Into<String>, value: f64) {
        self.points.push_back((label.into(), value));
        if self.points.len() > self.cap {
            self.points.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|(_, v)| *v)
    }

    pub fn latest(&self) -> Option<f64> {
        self.points.back().map(|(_, v)| *v)
    }

    pub fn first_label(&self) -> Option<&str> {
        self.points.front().map(|(l, _)| l.as_str())
    }

    pub fn last_label(&self) -> Option<&str> {
        self.points.back().map(|(l, _)| l.as_str())
    }

    /// Points as `(index, value)` coordinates for a line chart.
    pub fn chart_points(&self) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .enumerate()
            .map(|(i, (_, v))| (i as f64, *v))
            .collect()
    }
}

/// Two-slot dataset `[value, 100 - value]` backing a percent gauge.
#[derive(Debug, Clone, Copy, Default)]
pub struct PercentPair {
    pub data: [f64; 2],
}

impl PercentPair {
    pub fn set(&mut self, percent: f64) {
        self.data = [percent, 100.0 - percent];
    }

    pub fn used(&self) -> f64 {
        self.data[0]
    }

    pub fn free(&self) -> f64 {
        self.data[1]
    }
}

/// Two-slot dataset `[a, b]` backing a paired bar chart.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValuePair {
    pub data: [f64; 2],
}

impl ValuePair {
    pub fn set(&mut self, a: f64, b: f64) {
        self.data = [a, b];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_never_exceeds_cap() {
        let mut series = TimeSeries::with_capacity(20);
        for i in 0..25 {
            series.push(format!("t{}", i), i as f64);
        }
        assert_eq!(series.len(), 20);
    }

    #[test]
    fn series_keeps_most_recent_points_in_order() {
        let mut series = TimeSeries::with_capacity(5);
        for i in 0..8 {
            series.push(format!("t{}", i), i as f64);
        }
        let values: Vec<f64> = series.values().collect();
        assert_eq!(values, vec![3.0, 4.0, 5.0, 6.0, 7.0]);
        assert_eq!(series.first_label(), Some("t3"));
        assert_eq!(series.last_label(), Some("t7"));
    }

    #[test]
    fn short_series_holds_everything_appended() {
        let mut series = TimeSeries::with_capacity(200);
        for i in 0..3 {
            series.push("now", i as f64);
        }
        assert_eq!(series.len(), 3);
        assert_eq!(series.latest(), Some(2.0));
    }

    #[test]
    fn chart_points_are_indexed() {
        let mut series = TimeSeries::with_capacity(4);
        series.push("a", 10.0);
        series.push("b", 20.0);
        assert_eq!(series.chart_points(), vec![(0.0, 10.0), (1.0, 20.0)]);
    }

    #[test]
    fn percent_pair_splits_against_hundred() {
        let mut pair = PercentPair::default();
        pair.set(42.0);
        assert_eq!(pair.data, [42.0, 58.0]);
        assert_eq!(pair.used(), 42.0);
        assert_eq!(pair.free(), 58.0);
    }

    #[test]
    fn value_pair_stores_both_slots() {
        let mut pair = ValuePair::default();
        pair.set(120.5, 98.2);
        assert_eq!(pair.data, [120.5, 98.2]);
    }
}
