//! The metrics payload fetched from the endpoint.
//!
//! This mirrors the JSON body the collector publishes; a body missing any
//! non-optional field fails to parse and the whole cycle is dropped.

use serde::Deserialize;

/// Shown for temperature fields the collector did not report.
pub const TEMP_PLACEHOLDER: &str = "N/A";

/// One fetched telemetry snapshot. Percent fields are 0-100, disk sizes are
/// GB, network counters are cumulative bytes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MetricsSnapshot {
    pub cpu: f64,
    pub ram: f64,
    pub swap: f64,
    pub disk: f64,
    pub disk_used: f64,
    pub disk_total: f64,
    pub disk_avail: f64,
    pub load: f64,
    pub uptime: u64,
    pub users: u64,
    #[serde(default)]
    pub temp: Option<f64>,
    #[serde(default)]
    pub temp_cpu0: Option<f64>,
    #[serde(default)]
    pub temp_cpu1: Option<f64>,
    #[serde(default)]
    pub temp_nvme: Option<f64>,
    pub net_iface: String,
    pub net_rx: u64,
    pub net_tx: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_BODY: &str = r#"{
        "cpu": 12.5, "ram": 42.0, "swap": 3.0, "disk": 55.0,
        "disk_used": 120.5, "disk_total": 240.0, "disk_avail": 119.5,
        "load": 1.24, "uptime": 90061, "users": 3,
        "temp": 54.0, "temp_cpu0": 52.0, "temp_cpu1": 55.5, "temp_nvme": 41.0,
        "net_iface": "eth0", "net_rx": 1536, "net_tx": 1024
    }"#;

    #[test]
    fn parses_complete_body() {
        let snapshot: MetricsSnapshot = serde_json::from_str(FULL_BODY).unwrap();
        assert_eq!(snapshot.cpu, 12.5);
        assert_eq!(snapshot.uptime, 90_061);
        assert_eq!(snapshot.users, 3);
        assert_eq!(snapshot.temp, Some(54.0));
        assert_eq!(snapshot.net_iface, "eth0");
    }

    #[test]
    fn temperature_fields_may_be_absent() {
        let body = r#"{
            "cpu": 1.0, "ram": 2.0, "swap": 0.0, "disk": 4.0,
            "disk_used": 1.0, "disk_total": 10.0, "disk_avail": 9.0,
            "load": 0.1, "uptime": 5, "users": 1,
            "net_iface": "wlan0", "net_rx": 0, "net_tx": 0
        }"#;
        let snapshot: MetricsSnapshot = serde_json::from_str(body).unwrap();
        assert_eq!(snapshot.temp, None);
        assert_eq!(snapshot.temp_nvme, None);
    }

    #[test]
    fn missing_required_field_is_rejected() {
        // No "cpu".
        let body = r#"{
            "ram": 2.0, "swap": 0.0, "disk": 4.0,
            "disk_used": 1.0, "disk_total": 10.0, "disk_avail": 9.0,
            "load": 0.1, "uptime": 5, "users": 1,
            "net_iface": "wlan0", "net_rx": 0, "net_tx": 0
        }"#;
        assert!(serde_json::from_str::<MetricsSnapshot>(body).is_err());
    }
}
