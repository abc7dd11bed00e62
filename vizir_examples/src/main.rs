// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolves a chart markup fixture and prints the result.
//!
//! ```text
//! vizir_examples [TREE.json] [--options OPTIONS.json]
//! ```
//!
//! Without a tree argument the bundled `weekly_sales.json` fixture is used. Set `RUST_LOG` to
//! control log output (default `info`).

use std::fs;

use vizir_charts::ChartAxis;
use vizir_markup::{Element, MarkupError, ResolveOptions, resolve_chart};

const WEEKLY_SALES: &str = include_str!("../fixtures/weekly_sales.json");

fn main() -> Result<(), MarkupError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut tree_path = None;
    let mut options_path = None;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--options" {
            options_path = args.next();
        } else {
            tree_path = Some(arg);
        }
    }

    let options: ResolveOptions = match &options_path {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => ResolveOptions::default(),
    };
    let root = match &tree_path {
        Some(path) => Element::from_json_str(&fs::read_to_string(path)?)?,
        None => Element::from_json_str(WEEKLY_SALES)?,
    };
    tracing::info!(
        tree = tree_path.as_deref().unwrap_or("weekly_sales.json"),
        "resolving chart"
    );

    let resolved = resolve_chart(&root, &options);
    let chart = &resolved.value;
    println!("{chart:#?}");
    println!(
        "{} marks, {} chart modifiers, x axis: {:?}, y axis: {:?}",
        chart.content.marks().len(),
        chart.modifiers.len(),
        chart.axis(ChartAxis::X).is_some(),
        chart.axis(ChartAxis::Y).is_some(),
    );
    if !resolved.is_clean() {
        println!("{}", serde_json::to_string_pretty(&resolved.diagnostics)?);
    }
    Ok(())
}
