// imgflat/src/cli.rs
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "imgflat",
    version,
    about = "Flattens a directory tree of images into a renumbered, resized set"
)]
pub struct Cli {
    /// Directory to scan (recursively) for images
    pub source: PathBuf,

    /// Directory the numbered artifacts are written to
    pub dest: PathBuf,

    /// Generate resized derivatives for every accepted image
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        default_value_t = true,
        default_missing_value = "true"
    )]
    pub resize: bool,

    /// Constrain derivatives by width regardless of which dimension
    /// exceeds the target size
    #[arg(long)]
    pub width_only: bool,

    /// Target sizes for derivatives, in pixels
    #[arg(long, value_delimiter = ',', default_values_t = vec![100, 300, 500])]
    pub sizes: Vec<u32>,

    /// JPEG quality for re-encoded and resized artifacts
    #[arg(long, default_value_t = 85, value_parser = clap::value_parser!(u8).range(1..=100))]
    pub quality: u8,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
