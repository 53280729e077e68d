// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example for the site configuration crate.
//!
//! This example demonstrates:
//! - Loading a site document with `SiteConfigService`
//! - Inspecting the style-scan and dev-server records
//! - Printing both records in the shape their consumers expect
//!
//! To run this example:
//! ```bash
//! # Uses demos/site.yaml unless a path is given
//! cargo run --example basic_usage -- path/to/site.yaml
//! ```

use sitecfg::prelude::*;
use std::path::PathBuf;

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    println!("=== Site Configuration: Basic Usage ===\n");

    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos/site.yaml"));

    let service = SiteConfigService::from_file(&path)?;
    println!("Loaded {}\n", service.file().file_path().display());

    let config = service.load()?;

    if let Some(style) = &config.style {
        println!("--- Style Scan ---");
        for preset in style.presets() {
            println!("preset: {}", preset.name());
        }
        for pattern in style.resolved_content() {
            println!("content: {}", pattern);
        }
        let theme = style.merged_theme();
        println!("theme keys: {:?}\n", theme.iter().map(|(k, _)| k).collect::<Vec<_>>());
    }

    if let Some(server) = &config.dev_server {
        println!("--- Dev Server ---");
        println!("bind host: {}", server.bind_host());
        for host in ["framearch-juan.bonobo-fort.ts.net:3000", "attacker.example"] {
            let verdict = if server.accepts_host(host) { "accepted" } else { "rejected" };
            println!("Host: {} -> {}", host, verdict);
        }
        println!();
    }

    println!("--- Consumer JSON ---");
    let json = config.to_consumer_json();
    println!(
        "{}",
        serde_json::to_string_pretty(&json).map_err(|e| ConfigError::ParseError {
            message: format!("Failed to render JSON: {}", e),
            source: Some(Box::new(e)),
        })?
    );

    println!("\n=== Example Complete ===");
    Ok(())
}
