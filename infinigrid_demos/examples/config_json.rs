// Copyright 2025 the Infinigrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid configuration as JSON.
//!
//! Prints the default configuration, builds a grid from a partial override,
//! and lists the images visible in the initial layout.
//!
//! Run:
//! - `cargo run -p infinigrid_demos --example config_json`

use infinigrid::GridConfig;
use infinigrid_demos::{Session, sample_records};
use kurbo::Size;

const OVERRIDE: &str = r#"{
    "row_count": 3,
    "images_per_row": 7,
    "motion": { "scroll_speed": 2.0, "snap_duration_ms": 450 }
}"#;

fn main() {
    match serde_json::to_string_pretty(&GridConfig::default()) {
        Ok(json) => println!("default config:\n{json}"),
        Err(err) => eprintln!("cannot serialize config: {err}"),
    }

    let config: GridConfig = match serde_json::from_str(OVERRIDE) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("bad override: {err}");
            return;
        }
    };
    println!("override: {config:?}");

    let viewport = Size::new(1024.0, 768.0);
    let session = match Session::new(sample_records(10), viewport, config) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("cannot build grid: {err}");
            return;
        }
    };
    let Some(view) = session.grid.view() else {
        println!("no layout");
        return;
    };
    for (_, image, rect) in view.visible_in(viewport.to_rect()) {
        let marker = if image.priority { " [priority]" } else { "" };
        println!(
            "{:>10} at ({:>7.1}, {:>7.1}) {}{marker}",
            image.record.id,
            rect.x0,
            rect.y0,
            image.link.href()
        );
    }
}
