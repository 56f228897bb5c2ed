// Copyright 2026 the Funroad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Enter/leave transitions as the pointer sweeps across the category strip.
//!
//! Run:
//! - `cargo run -p funroad_demos --example strip_hover`

use funroad_catalog::{Category, CategoryTree, Slug};
use funroad_layout::TextMetrics;
use funroad_nav::CategoryStrip;
use kurbo::Point;

fn main() {
    let cat = |s: &str| Category::new(s, s, Slug::new(s).unwrap());
    let tree = CategoryTree::from_roots(vec![cat("all"), cat("shoes"), cat("music")]).unwrap();
    let metrics = TextMetrics {
        advance: 10.0,
        padding: 10.0,
        height: 40.0,
    };
    let mut strip = CategoryStrip::measured(tree, &metrics);
    let _ = strip.resize(400.0);

    for x in [10.0, 60.0, 150.0, 220.0, 395.0, 450.0] {
        let events = strip.pointer_move(Point::new(x, 20.0));
        println!(
            "x={x:>5.1} hovered={} events={events:?}",
            strip.is_any_hovered()
        );
    }
    println!("leave -> {:?}", strip.pointer_leave());
}
