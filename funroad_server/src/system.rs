// Copyright 2026 the Funroad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Read-only view of process state for the health endpoint.

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};

/// Clock, uptime and environment as seen by request handlers.
pub trait SystemInfo {
    /// Current wall-clock time.
    fn now(&self) -> DateTime<Utc>;
    /// Time since the process started serving.
    fn uptime(&self) -> Duration;
    /// Deployment environment name.
    fn environment(&self) -> &str;
}

/// The real process: wall clock and a start instant captured at construction.
#[derive(Clone, Debug)]
pub struct ProcessInfo {
    started: Instant,
    environment: String,
}

impl ProcessInfo {
    /// Start counting uptime now.
    pub fn new(environment: impl Into<String>) -> Self {
        Self {
            started: Instant::now(),
            environment: environment.into(),
        }
    }
}

impl SystemInfo for ProcessInfo {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn uptime(&self) -> Duration {
        self.started.elapsed()
    }

    fn environment(&self) -> &str {
        &self.environment
    }
}

/// Frozen values, for tests and snapshots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedInfo {
    /// Reported time.
    pub now: DateTime<Utc>,
    /// Reported uptime.
    pub uptime: Duration,
    /// Reported environment.
    pub environment: String,
}

impl SystemInfo for FixedInfo {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }

    fn uptime(&self) -> Duration {
        self.uptime
    }

    fn environment(&self) -> &str {
        &self.environment
    }
}
