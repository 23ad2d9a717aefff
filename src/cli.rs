//! Command-line interface definitions for HYD Alerts.
//!
//! All arguments can be provided via command-line flags or environment variables.

use clap::Parser;

/// Command-line arguments for the HYD Alerts post generator.
///
/// # Examples
///
/// ```sh
/// # Fetch the default feeds and write post material to ./outputs
/// hyd_alerts
///
/// # Custom feeds, branding or clustering constants
/// hyd_alerts -c ./hyd_alerts.yaml -o /srv/posts
///
/// # Offline: pick the trending story from a saved article list
/// hyd_alerts -i ./articles.json
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Output directory for the caption and post metadata
    #[arg(short, long, env = "HYD_ALERTS_OUTPUT_DIR", default_value = "outputs")]
    pub output_dir: String,

    /// Optional path to a YAML config file
    #[arg(short, long, env = "HYD_ALERTS_CONFIG")]
    pub config: Option<String>,

    /// Read articles from a JSON array instead of fetching the feeds
    #[arg(short, long)]
    pub input: Option<String>,
}
