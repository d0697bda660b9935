use std::fs::File;
use std::path::Path;

use csv::ReaderBuilder;
use serde::Deserialize;
use tracing::warn;

use crate::data::geo::GeoPoint;
use crate::models::demand::DemandPoint;

/// Row of a per-year city demand projection CSV.
#[derive(Debug, Deserialize)]
struct DemandRow {
    #[serde(rename = "City")]
    city: String,
    #[serde(rename = "Latitude")]
    latitude: f64,
    #[serde(rename = "Longitude")]
    longitude: f64,
    #[serde(rename = "Energy Demand (kWh)")]
    energy_demand_kwh: f64,
}

#[derive(Debug)]
pub enum DemandLoadError {
    IoError(std::io::Error),
    CsvError(csv::Error),
}

impl From<std::io::Error> for DemandLoadError {
    fn from(err: std::io::Error) -> Self {
        DemandLoadError::IoError(err)
    }
}

impl From<csv::Error> for DemandLoadError {
    fn from(err: csv::Error) -> Self {
        DemandLoadError::CsvError(err)
    }
}

impl std::fmt::Display for DemandLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DemandLoadError::IoError(e) => write!(f, "IO error: {}", e),
            DemandLoadError::CsvError(e) => write!(f, "CSV error: {}", e),
        }
    }
}

impl std::error::Error for DemandLoadError {}

/// Loads the city demand list for one year, preserving file order. A row
/// that fails to parse is logged and skipped; the rest of the file still
/// loads. Only a missing or unreadable file is an error.
pub fn load_demand_points(csv_path: &Path) -> Result<Vec<DemandPoint>, DemandLoadError> {
    let file = File::open(csv_path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let mut points = Vec::new();
    for (index, result) in reader.deserialize::<DemandRow>().enumerate() {
        match result {
            Ok(row) => {
                points.push(DemandPoint::new(
                    row.city,
                    GeoPoint::new(row.latitude, row.longitude),
                    row.energy_demand_kwh,
                ));
            }
            Err(e) => {
                warn!(row = index + 1, error = %e, "skipping malformed demand row");
            }
        }
    }

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(rows: &[&str]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "City,Latitude,Longitude,Energy Demand (kWh)").unwrap();
        for row in rows {
            writeln!(file, "{}", row).unwrap();
        }
        file
    }

    #[test]
    fn loads_cities_in_file_order() {
        let file = write_csv(&[
            "Kirkwall,58.98,-2.96,1200000",
            "Lerwick,60.15,-1.15,900000",
        ]);
        let points = load_demand_points(file.path()).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].name(), "Kirkwall");
        assert_eq!(points[1].name(), "Lerwick");
        assert_eq!(points[0].annual_demand_kwh(), 1_200_000.0);
    }

    #[test]
    fn malformed_rows_are_skipped_not_fatal() {
        let file = write_csv(&[
            "Kirkwall,58.98,-2.96,1200000",
            "Brokenville,not_a_latitude,-2.0,5000",
            "Lerwick,60.15,-1.15,900000",
        ]);
        let points = load_demand_points(file.path()).unwrap();
        let names: Vec<&str> = points.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["Kirkwall", "Lerwick"]);
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load_demand_points(Path::new("/no/such/demand.csv")).unwrap_err();
        assert!(matches!(err, DemandLoadError::IoError(_)));
    }
}
