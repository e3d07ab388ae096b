//! Command-line arguments.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use paperbox::{LayoutConfig, Orientation, PageFormat, PageSize};
use serde_json::Value;

/// Glue allowance used when neither `--gap` nor a config file sets one.
pub const DEFAULT_GAP_MM: f64 = 0.75;

#[derive(Parser, Debug)]
#[command(name = "paperbox")]
#[command(about = "Draw the cut-and-fold net of a rectangular paper box as a PDF")]
#[command(version)]
pub struct Cli {
    /// Box length in centimeters
    pub length: f64,

    /// Box width in centimeters
    pub width: f64,

    /// Box height in centimeters
    pub height: f64,

    /// Glue allowance in millimeters [default: 0.75]
    #[arg(short, long)]
    pub gap: Option<f64>,

    /// Inset of tab outlines in millimeters [default: 1]
    #[arg(long)]
    pub cut_gap: Option<f64>,

    /// Page margin in centimeters, both axes [default: 0.5]
    #[arg(short, long)]
    pub margin: Option<f64>,

    /// Horizontal page margin in centimeters, overrides --margin
    #[arg(long)]
    pub margin_x: Option<f64>,

    /// Vertical page margin in centimeters, overrides --margin
    #[arg(long)]
    pub margin_y: Option<f64>,

    /// Page format
    #[arg(short, long, value_enum, default_value = "a4")]
    pub page: PageArg,

    /// Rotate the page
    #[arg(long)]
    pub landscape: bool,

    /// Fail instead of warning when the net is longer than the page
    #[arg(long)]
    pub strict: bool,

    /// Make the mid faces only as wide as the box height
    #[arg(long)]
    pub short_mid_faces: bool,

    /// Leave out the dashed tab and flap outlines
    #[arg(long)]
    pub no_tab_outlines: bool,

    /// Output directory
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Output file name
    #[arg(short = 'n', long, default_value = "paper_box.pdf")]
    pub output_name: String,

    /// Also write the computed layout as JSON
    #[arg(long)]
    pub dump_json: Option<PathBuf>,

    /// Layout configuration file (JSON), flags take precedence
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level: 1 debug, 2 info, 3 warning, 4 error, 5 critical
    #[arg(short, long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub verbose: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum PageArg {
    /// ISO A3
    A3,
    /// ISO A4
    A4,
    /// ISO A5
    A5,
    /// US Letter
    Letter,
    /// US Legal
    Legal,
}

impl From<PageArg> for PageFormat {
    fn from(arg: PageArg) -> Self {
        match arg {
            PageArg::A3 => PageFormat::A3,
            PageArg::A4 => PageFormat::A4,
            PageArg::A5 => PageFormat::A5,
            PageArg::Letter => PageFormat::Letter,
            PageArg::Legal => PageFormat::Legal,
        }
    }
}

/// Maps `--verbose` onto a log filter. `log` has nothing above error,
/// so "critical" shares its level.
pub fn level_filter(verbose: u8) -> LevelFilter {
    match verbose {
        1 => LevelFilter::Debug,
        2 => LevelFilter::Info,
        3 => LevelFilter::Warn,
        _ => LevelFilter::Error,
    }
}

/// Configuration used when no file or flag says otherwise.
pub fn default_config() -> LayoutConfig {
    LayoutConfig::default().with_gap(DEFAULT_GAP_MM / 10.0)
}

/// Reads a JSON config file. Fields the file leaves out keep the values
/// of [`default_config`].
fn load_config(path: &Path) -> anyhow::Result<LayoutConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let overrides: Value = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    let Value::Object(fields) = overrides else {
        anyhow::bail!("Config file {} must hold a JSON object", path.display());
    };

    let mut merged = serde_json::to_value(default_config())?;
    if let Some(base) = merged.as_object_mut() {
        base.extend(fields);
    }
    serde_json::from_value(merged)
        .with_context(|| format!("Invalid layout config in {}", path.display()))
}

impl Cli {
    /// Builds the layout configuration: config file (or defaults), then flags.
    pub fn layout_config(&self) -> anyhow::Result<LayoutConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => default_config(),
        };

        if let Some(gap) = self.gap {
            config.gap = gap / 10.0;
        }
        if let Some(cut_gap) = self.cut_gap {
            config.cut_gap = cut_gap / 10.0;
        }
        if let Some(margin) = self.margin {
            config = config.with_margin(margin);
        }
        if let Some(margin_x) = self.margin_x {
            config.margin_x = margin_x;
        }
        if let Some(margin_y) = self.margin_y {
            config.margin_y = margin_y;
        }
        if self.strict {
            config.allow_overflow = false;
        }
        if self.short_mid_faces {
            config.long_mid_faces = false;
        }
        if self.no_tab_outlines {
            config.tab_outlines = false;
        }

        Ok(config)
    }

    /// Page the net is laid out on.
    pub fn page_size(&self) -> PageSize {
        let orientation = if self.landscape {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        };
        PageSize::from_format(self.page.into(), orientation)
    }

    /// Full path of the PDF to write.
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.output_name)
    }
}
