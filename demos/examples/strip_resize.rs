// Copyright 2026 the Funroad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Responsive category strip under a shrinking and growing window.
//!
//! Run:
//! - `cargo run -p funroad_demos --example strip_resize`

use funroad_catalog::{Category, CategoryTree, Slug};
use funroad_layout::TextMetrics;
use funroad_nav::{CategoryStrip, VIEW_ALL_LABEL};

fn main() {
    let names = [
        ("all", "All"),
        ("business-money", "Business & Money"),
        ("software-development", "Software Development"),
        ("writing-publishing", "Writing & Publishing"),
        ("design", "Design"),
        ("music", "Music"),
        ("photography", "Photography"),
    ];
    let roots = names
        .iter()
        .map(|(slug, name)| Category::new(*slug, *name, Slug::new(*slug).unwrap()))
        .collect();
    let tree = CategoryTree::from_roots(roots).unwrap();

    let metrics = TextMetrics {
        advance: 8.0,
        padding: 16.0,
        height: 44.0,
    };
    let mut strip = CategoryStrip::measured(tree, &metrics);
    strip.set_active(Slug::new("photography").unwrap());

    for width in [1200.0, 900.0, 640.0, 400.0, 200.0, 640.0, 1200.0] {
        let update = strip.resize(width);
        let shown: Vec<_> = strip.visible().iter().map(|c| c.name.as_str()).collect();
        let marker = if strip.view_all_highlighted() { " *" } else { "" };
        println!(
            "width={width:>6.1} {update:?}\n  shown: {shown:?}\n  [{VIEW_ALL_LABEL}{marker}] hides {} categories",
            strip.overflow().len()
        );
    }
}
