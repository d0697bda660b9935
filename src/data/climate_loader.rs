use std::fs::File;
use std::path::Path;

use csv::ReaderBuilder;
use serde::Deserialize;
use tracing::debug;

use crate::config::constants::{LCCS_URBAN, LCCS_WATER};
use crate::config::physics::{air_density, turbine_power_kw, wind_speed_at_hub_height};
use crate::models::grid::{GenerationGrid, GridValidationError};

/// One grid cell of the per-year climate CSV. Units follow the reanalysis
/// conventions: wind at 10 m in m/s, pressure in Pa, temperature in K,
/// relative humidity in percent, roughness length in metres.
#[derive(Debug, Deserialize)]
struct ClimateRecord {
    lat: f64,
    lon: f64,
    sfc_wind_ms: f64,
    surface_pressure_pa: f64,
    temperature_k: f64,
    relative_humidity_pct: f64,
    friction_coefficient: f64,
    lccs_class: u8,
}

#[derive(Debug)]
pub enum ClimateLoadError {
    IoError(std::io::Error),
    CsvError(csv::Error),
    InvalidCoordinate(String),
    InvalidGrid(GridValidationError),
}

impl From<std::io::Error> for ClimateLoadError {
    fn from(err: std::io::Error) -> Self {
        ClimateLoadError::IoError(err)
    }
}

impl From<csv::Error> for ClimateLoadError {
    fn from(err: csv::Error) -> Self {
        ClimateLoadError::CsvError(err)
    }
}

impl From<GridValidationError> for ClimateLoadError {
    fn from(err: GridValidationError) -> Self {
        ClimateLoadError::InvalidGrid(err)
    }
}

impl std::fmt::Display for ClimateLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClimateLoadError::IoError(e) => write!(f, "IO error: {}", e),
            ClimateLoadError::CsvError(e) => write!(f, "CSV error: {}", e),
            ClimateLoadError::InvalidCoordinate(s) => write!(f, "invalid coordinate: {}", s),
            ClimateLoadError::InvalidGrid(e) => write!(f, "invalid grid: {}", e),
        }
    }
}

impl std::error::Error for ClimateLoadError {}

fn sorted_unique(mut values: Vec<f64>) -> Vec<f64> {
    values.sort_by(|a, b| a.total_cmp(b));
    values.dedup();
    values
}

/// Derived power for one cell. Water and urban cells are excluded by the
/// land-cover mask; non-finite results collapse to 0, which the grid treats
/// as ineligible.
fn cell_power_kw(record: &ClimateRecord) -> f64 {
    if record.lccs_class == LCCS_WATER || record.lccs_class == LCCS_URBAN {
        return 0.0;
    }
    let wind_hub = wind_speed_at_hub_height(record.sfc_wind_ms, record.friction_coefficient);
    let rho = air_density(
        record.surface_pressure_pa,
        record.temperature_k,
        record.relative_humidity_pct,
    );
    let power = turbine_power_kw(wind_hub, rho);
    if power.is_finite() {
        power
    } else {
        0.0
    }
}

/// Loads a per-year climate CSV and derives the power-generation grid from
/// it. Latitude/longitude axes are the sorted unique coordinates found in
/// the file; cells the file does not mention stay at 0 (ineligible).
pub fn load_generation_grid(csv_path: &Path) -> Result<GenerationGrid, ClimateLoadError> {
    let file = File::open(csv_path)?;
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(file);

    let mut records = Vec::new();
    for result in reader.deserialize() {
        let record: ClimateRecord = result?;
        if !record.lat.is_finite() || !record.lon.is_finite() {
            return Err(ClimateLoadError::InvalidCoordinate(format!(
                "({}, {})",
                record.lat, record.lon
            )));
        }
        records.push(record);
    }

    let lats = sorted_unique(records.iter().map(|r| r.lat).collect());
    let lons = sorted_unique(records.iter().map(|r| r.lon).collect());

    let mut power_kw = vec![0.0; lats.len() * lons.len()];
    for record in &records {
        // Exact match is safe: the axes were built from these same values.
        let i = lats.iter().position(|&v| v == record.lat).unwrap();
        let j = lons.iter().position(|&v| v == record.lon).unwrap();
        power_kw[i * lons.len() + j] = cell_power_kw(record);
    }

    debug!(
        cells = records.len(),
        lats = lats.len(),
        lons = lons.len(),
        "derived generation grid"
    );

    Ok(GenerationGrid::new(lats, lons, power_kw)?)
}
