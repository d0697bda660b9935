use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use windsite::analysis::reporting::print_run_summary;
use windsite::cli::cli::Args;
use windsite::core::pipeline::{run_pipeline, PipelineConfig};
use windsite::utils::logging;

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    logging::init_logging(args.debug_logging());

    println!("Wind Farm Siting and Demand Satisfaction Analysis");
    println!(
        "Years: {:?}, parallel: {}, validation: {}",
        args.years(),
        if args.parallel() { "enabled" } else { "disabled" },
        if args.validate() { "enabled" } else { "disabled" }
    );

    let config = PipelineConfig {
        data_dir: PathBuf::from(args.data_dir()),
        output_dir: PathBuf::from(args.output_dir()),
        years: args.years().to_vec(),
        parallel: args.parallel(),
        overwrite: args.overwrite(),
        validate: args.validate(),
        timestamped_output: args.timestamped_output(),
        population_file: args.population_file().to_string(),
    };

    let selections = run_pipeline(&config)?;
    print_run_summary(&selections);

    Ok(())
}
