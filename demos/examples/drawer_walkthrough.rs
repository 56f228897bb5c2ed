// Copyright 2026 the Funroad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Category drawer driven from a "get many" document: open, drill, back, navigate.
//!
//! Run:
//! - `cargo run -p funroad_demos --example drawer_walkthrough`

use funroad_catalog::{CategorySource, CategoryTree, JsonSource};
use funroad_layout::TextMetrics;
use funroad_nav::{CategoryStrip, DrawerOutcome, Navbar, StripAction};
use kurbo::Point;

const DOCUMENT: &str = r##"[
  {"id": "1", "name": "All", "slug": "all"},
  {"id": "2", "name": "Music", "slug": "music", "color": "#FFB347", "subcategories": [
    {"id": "21", "name": "Guitar", "slug": "guitar"},
    {"id": "22", "name": "Songwriting", "slug": "songwriting"}
  ]},
  {"id": "3", "name": "Books", "slug": "books", "subcategories": null}
]"##;

fn main() {
    let source = JsonSource::new(DOCUMENT.as_bytes().to_vec());
    let tree = CategoryTree::from_roots(source.get_many().unwrap()).unwrap();
    let metrics = TextMetrics {
        advance: 10.0,
        padding: 10.0,
        height: 40.0,
    };
    let mut strip = CategoryStrip::measured(tree, &metrics);
    let _ = strip.resize(200.0);
    let trailing = strip.layout().trailing().bounds.center();

    assert_eq!(strip.click(trailing), StripAction::OpenDrawer);
    let listing: Vec<_> = strip.drawer_listing().iter().map(|c| c.name.clone()).collect();
    println!("drawer open, listing {listing:?}");

    let roots = strip.categories().to_vec();
    let outcome = strip.drawer_mut().select(&roots[1]);
    println!(
        "select Music -> {outcome:?}, background {}, back shown: {}",
        strip.drawer().background_color(),
        strip.drawer().show_back()
    );
    let listing: Vec<_> = strip.drawer_listing().iter().map(|c| c.name.clone()).collect();
    println!("  listing {listing:?}");

    let went_back = strip.drawer_mut().back();
    println!("back -> {went_back}, background {}", strip.drawer().background_color());

    let _ = strip.drawer_mut().select(&roots[1]);
    let guitar = roots[1].subcategories[0].clone();
    let mut navbar = Navbar::new("/");
    if let DrawerOutcome::Navigate(route) = strip.drawer_mut().select(&guitar) {
        navbar.set_pathname(route.to_string());
        println!("navigate -> {route}, drawer open: {}", strip.drawer().is_open());
    }
    println!(
        "navbar active item: {:?}",
        navbar.active_item().map(|item| item.label)
    );
}
