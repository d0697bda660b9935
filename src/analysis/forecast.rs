use std::fs::File;
use std::path::Path;

use csv::ReaderBuilder;
use lazy_static::lazy_static;
use serde::Deserialize;
use tracing::info;

use crate::config::constants::KTOE_TO_KWH;
use crate::data::geo::GeoPoint;
use crate::models::demand::DemandPoint;

#[derive(Debug, Deserialize)]
struct ConsumptionHistory {
    start_year: u32,
    values: Vec<f64>,
}

lazy_static! {
    static ref NATIONAL_CONSUMPTION: ConsumptionHistory = {
        let raw = include_str!("../../assets/national_consumption.json");
        serde_json::from_str(raw).expect("Failed to parse national consumption history")
    };
}

/// Least-squares linear fit over (x, y) pairs, returning (slope, intercept).
fn linear_trend(series: &[(f64, f64)]) -> (f64, f64) {
    let n = series.len() as f64;
    let sum_x: f64 = series.iter().map(|(x, _)| x).sum();
    let sum_y: f64 = series.iter().map(|(_, y)| y).sum();
    let mean_x = sum_x / n;
    let mean_y = sum_y / n;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for (x, y) in series {
        sxx += (x - mean_x) * (x - mean_x);
        sxy += (x - mean_x) * (y - mean_y);
    }

    let slope = sxy / sxx;
    (slope, mean_y - slope * mean_x)
}

/// Projects national annual consumption (ktoe) for a target year from the
/// embedded 1950-2018 history via a least-squares trend.
pub fn forecast_national_demand_ktoe(year: u32) -> f64 {
    let history: Vec<(f64, f64)> = NATIONAL_CONSUMPTION
        .values
        .iter()
        .enumerate()
        .map(|(i, &v)| ((NATIONAL_CONSUMPTION.start_year + i as u32) as f64, v))
        .collect();

    let (slope, intercept) = linear_trend(&history);
    slope * year as f64 + intercept
}

/// A city with its population, read from the population CSV used when a
/// year's demand projection file is missing.
#[derive(Debug, Clone, Deserialize)]
pub struct CityPopulation {
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
    #[serde(rename = "Population")]
    pub population: f64,
}

pub fn load_city_populations(csv_path: &Path) -> Result<Vec<CityPopulation>, csv::Error> {
    let file = File::open(csv_path).map_err(csv::Error::from)?;
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(file);
    reader.deserialize().collect()
}

/// Disaggregates the forecast national demand for a year to cities by
/// population share. Each city's demand in kWh is its share of the national
/// figure; shares sum to the national total by construction.
pub fn project_city_demand(year: u32, cities: &[CityPopulation]) -> Vec<DemandPoint> {
    let national_kwh = forecast_national_demand_ktoe(year) * KTOE_TO_KWH;
    let total_population: f64 = cities.iter().map(|c| c.population).sum();

    info!(
        year,
        national_kwh,
        cities = cities.len(),
        "projecting city demand from national trend"
    );

    cities
        .iter()
        .map(|c| {
            let share = if total_population > 0.0 {
                c.population / total_population
            } else {
                0.0
            };
            DemandPoint::new(
                c.city.clone(),
                GeoPoint::new(c.latitude, c.longitude),
                national_kwh * share,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_is_exact_on_linear_input() {
        let series: Vec<(f64, f64)> = (0..20).map(|i| (i as f64, 3.0 * i as f64 + 7.0)).collect();
        let (slope, intercept) = linear_trend(&series);
        assert!((slope - 3.0).abs() < 1e-9);
        assert!((intercept - 7.0).abs() < 1e-9);
    }

    #[test]
    fn national_forecast_is_finite_and_positive_for_study_years() {
        for year in [2020, 2050, 2075, 2099] {
            let f = forecast_national_demand_ktoe(year);
            assert!(f.is_finite() && f > 0.0, "year {year}: {f}");
        }
    }

    #[test]
    fn city_shares_sum_to_the_national_total() {
        let cities = vec![
            CityPopulation {
                city: "A".into(),
                latitude: 53.0,
                longitude: -6.0,
                population: 600_000.0,
            },
            CityPopulation {
                city: "B".into(),
                latitude: 52.0,
                longitude: -8.0,
                population: 200_000.0,
            },
            CityPopulation {
                city: "C".into(),
                latitude: 53.3,
                longitude: -9.0,
                population: 200_000.0,
            },
        ];
        let demands = project_city_demand(2050, &cities);
        let total: f64 = demands.iter().map(|d| d.annual_demand_kwh()).sum();
        let national = forecast_national_demand_ktoe(2050) * KTOE_TO_KWH;
        assert!((total - national).abs() / national < 1e-12);

        // Larger population, larger share.
        assert!(demands[0].annual_demand_kwh() > demands[1].annual_demand_kwh());
        assert_eq!(demands[1].annual_demand_kwh(), demands[2].annual_demand_kwh());
    }

    #[test]
    fn zero_population_yields_zero_demand_not_a_fault() {
        let cities = vec![CityPopulation {
            city: "Empty".into(),
            latitude: 0.0,
            longitude: 0.0,
            population: 0.0,
        }];
        let demands = project_city_demand(2050, &cities);
        assert_eq!(demands[0].annual_demand_kwh(), 0.0);
    }
}
