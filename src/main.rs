use clap::Parser;
use imgflat::{format_file_size, Cli, Pipeline, PipelineConfig};
use log::LevelFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logger
    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .init();

    let config = PipelineConfig {
        sizes: cli.sizes,
        resize: cli.resize,
        width_only: cli.width_only,
        quality: cli.quality,
    };

    let pipeline = Pipeline::new(config)?;
    let stats = pipeline.run(&cli.source, &cli.dest)?;

    if !stats.failures.is_empty() {
        log::warn!(
            "{} of {} artifacts could not be written",
            stats.failures.len(),
            stats.failures.len() + stats.artifacts_written
        );
    }

    println!(
        "Flattened {} of {} files into {} ({} artifacts, {})",
        stats.accepted,
        stats.visited,
        cli.dest.display(),
        stats.artifacts_written,
        format_file_size(stats.bytes_written)
    );

    Ok(())
}
