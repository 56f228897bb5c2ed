// Copyright 2026 the Funroad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Print the database bootstrap script for the default configuration.
//!
//! Run:
//! - `cargo run -p funroad_demos --example bootstrap_script`

use funroad_server::DatabaseConfig;
use funroad_server::bootstrap::BootstrapPlan;

fn main() {
    let plan = BootstrapPlan::from_config(&DatabaseConfig::default());
    print!("{}", plan.render_script());
}
