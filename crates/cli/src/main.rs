//! `prodcat` entry point.

use std::io;

use anyhow::Context;
use clap::Parser;

use prodcat_cli::{CliConfig, Dataset, Session};
use prodcat_filter::CatalogView;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();
    prodcat_observability::init(config.log_format);

    let catalog = Dataset::load(config.data_dir.as_deref())
        .and_then(Dataset::into_catalog)
        .context("failed to load catalog")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(CatalogView::new(catalog), stdin.lock(), stdout.lock());
    session.run()
}
