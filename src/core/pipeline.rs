use std::path::{Path, PathBuf};

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use crate::analysis::forecast::{load_city_populations, project_city_demand};
use crate::analysis::validation::validate_selections;
use crate::core::search::select_sites;
use crate::data::climate_loader::load_generation_grid;
use crate::data::demand_loader::load_demand_points;
use crate::models::demand::DemandPoint;
use crate::models::selection::SiteSelection;
use crate::utils::csv_export::CsvExporter;

pub struct PipelineConfig {
    pub data_dir: PathBuf,
    pub output_dir: PathBuf,
    pub years: Vec<u32>,
    pub parallel: bool,
    pub overwrite: bool,
    pub validate: bool,
    pub timestamped_output: bool,
    pub population_file: String,
}

fn climate_path(data_dir: &Path, year: u32) -> PathBuf {
    data_dir.join(format!("climate_{}.csv", year))
}

fn demand_path(data_dir: &Path, year: u32) -> PathBuf {
    data_dir.join(format!("city_power_demand_projection_{}.csv", year))
}

/// Loads the year's demand CSV, falling back to a population-based
/// projection when the file is missing and a population file exists.
fn demand_for_year(config: &PipelineConfig, year: u32) -> Option<Vec<DemandPoint>> {
    let path = demand_path(&config.data_dir, year);
    match load_demand_points(&path) {
        Ok(points) => Some(points),
        Err(e) => {
            warn!(year, error = %e, "failed to load demand projections");
            let population_path = config.data_dir.join(&config.population_file);
            match load_city_populations(&population_path) {
                Ok(cities) => {
                    info!(year, "projecting demand from population shares instead");
                    Some(project_city_demand(year, &cities))
                }
                Err(e) => {
                    warn!(year, error = %e, "no population data either, skipping year");
                    None
                }
            }
        }
    }
}

/// Runs the full per-year analysis and writes the outputs. Returns the
/// ordered result collection (years in configured order, cities in input
/// order within each year).
pub fn run_pipeline(config: &PipelineConfig) -> Result<Vec<SiteSelection>> {
    let exporter = CsvExporter::new(&config.output_dir, config.overwrite, config.timestamped_output)?;

    let progress = ProgressBar::new(config.years.len() as u64);
    progress.set_style(
        ProgressStyle::with_template("{msg} [{bar:40}] {pos}/{len} years")
            .expect("invalid progress template"),
    );

    let mut all_selections = Vec::new();

    for &year in &config.years {
        progress.set_message(format!("Analysing {}", year));

        let grid_path = climate_path(&config.data_dir, year);
        let grid = match load_generation_grid(&grid_path) {
            Ok(grid) => grid,
            Err(e) => {
                warn!(year, path = %grid_path.display(), error = %e, "skipping year: no usable climate grid");
                progress.inc(1);
                continue;
            }
        };

        let demands = match demand_for_year(config, year) {
            Some(demands) => demands,
            None => {
                progress.inc(1);
                continue;
            }
        };

        info!(
            year,
            cells = grid.num_cells(),
            cities = demands.len(),
            "searching best sites"
        );

        let selections = select_sites(year, &grid, &demands, config.parallel);
        all_selections.extend(selections);
        progress.inc(1);
    }

    progress.finish_and_clear();

    exporter.export_selections(&all_selections)?;

    if config.validate {
        let report = validate_selections(&all_selections);
        exporter.export_validation(&report)?;
    }

    Ok(all_selections)
}
