//! Paper box net generator CLI

mod args;

use anyhow::Context;
use clap::Parser;
use paperbox::{plan_net, write_pdf};

use crate::args::{level_filter, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(level_filter(cli.verbose))
        .format_timestamp(None)
        .init();

    let config = cli.layout_config()?;
    let page = cli.page_size();
    log::debug!("Layout config: {:?}, page {} x {} cm", config, page.width, page.height);

    let layout = plan_net(cli.length, cli.width, cli.height, &page, &config)
        .context("Could not lay out the box")?;

    if let Some(path) = &cli.dump_json {
        let json = serde_json::to_string_pretty(&layout)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write layout to {}", path.display()))?;
        println!("Layout saved to: {}", path.display());
    }

    let output = cli.output_path();
    let written = write_pdf(&layout, &output, page)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!("Net saved to: {}", written.display());
    println!(
        "  Box: {} cm, {} faces, {} warnings",
        layout.dimensions,
        layout.len(),
        layout.warnings.len()
    );

    Ok(())
}
