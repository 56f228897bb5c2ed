// Copyright 2026 the Funroad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `GET /api/health`: liveness for container orchestration and monitoring.
//!
//! The handler only reports clock, uptime and environment; it has no failure path.

use axum::Json;
use axum::extract::State;
use chrono::SecondsFormat;
use serde::Serialize;

use crate::AppState;
use crate::system::SystemInfo;

/// Health response body.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HealthReport {
    /// Always `"ok"`.
    pub status: &'static str,
    /// RFC 3339 UTC time with millisecond precision.
    pub timestamp: String,
    /// Seconds since start.
    pub uptime: f64,
    /// Deployment environment.
    pub environment: String,
}

impl HealthReport {
    /// Snapshot `system`.
    pub fn from_system(system: &(impl SystemInfo + ?Sized)) -> Self {
        Self {
            status: "ok",
            timestamp: system.now().to_rfc3339_opts(SecondsFormat::Millis, true),
            uptime: system.uptime().as_secs_f64(),
            environment: system.environment().to_owned(),
        }
    }
}

/// Handler for `GET /api/health`.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthReport> {
    let report = HealthReport::from_system(state.system.as_ref());
    tracing::debug!(uptime = report.uptime, "health check");
    Json(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::FixedInfo;
    use chrono::TimeZone;
    use std::time::Duration;

    #[test]
    fn report_serializes_the_four_keys() {
        let info = FixedInfo {
            now: chrono::Utc.with_ymd_and_hms(2026, 10, 19, 8, 30, 0).unwrap(),
            uptime: Duration::from_millis(12_500),
            environment: "production".to_owned(),
        };
        let value = serde_json::to_value(HealthReport::from_system(&info)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "status": "ok",
                "timestamp": "2026-10-19T08:30:00.000Z",
                "uptime": 12.5,
                "environment": "production",
            })
        );
    }
}
