//! Command-line and environment configuration.

use std::path::PathBuf;

use clap::Parser;

use prodcat_observability::LogFormat;

#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "prodcat")]
#[command(about = "Browse and filter the product categories catalog")]
pub struct CliConfig {
    /// Directory holding users.json, categories.json and products.json
    /// (defaults to the catalog embedded in the binary)
    #[arg(long, env = "PRODCAT_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Log line format: json, pretty or compact
    #[arg(long, env = "PRODCAT_LOG_FORMAT", default_value_t = LogFormat::Json)]
    pub log_format: LogFormat,
}
