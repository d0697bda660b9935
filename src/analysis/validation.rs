use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::data::geo::GeoPoint;
use crate::models::selection::SiteSelection;

#[derive(Debug, Deserialize)]
struct KnownWindFarm {
    name: String,
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct KnownWindFarmList {
    wind_farms: Vec<KnownWindFarm>,
}

lazy_static! {
    static ref KNOWN_WIND_FARMS: Vec<KnownWindFarm> = {
        let raw = include_str!("../../assets/known_wind_farms.json");
        let list: KnownWindFarmList =
            serde_json::from_str(raw).expect("Failed to parse known wind farm data");
        list.wind_farms
    };
}

/// How far each selected site sits from the nearest real wind farm. Stands
/// in for the original visual map comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationRecord {
    #[serde(rename = "Year")]
    pub year: u32,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "Site_Lat")]
    pub site_lat: f64,
    #[serde(rename = "Site_Lon")]
    pub site_lon: f64,
    #[serde(rename = "Nearest_Wind_Farm")]
    pub nearest_farm: String,
    #[serde(rename = "Separation_km")]
    pub separation_km: f64,
}

fn nearest_known_farm(site: &GeoPoint) -> (&'static str, f64) {
    let mut best_name = "";
    let mut best_distance = f64::INFINITY;
    for farm in KNOWN_WIND_FARMS.iter() {
        let d = site.distance_km(&GeoPoint::new(farm.lat, farm.lon));
        if d < best_distance {
            best_distance = d;
            best_name = &farm.name;
        }
    }
    (best_name, best_distance)
}

/// Matches every found site against the known-wind-farm list. Selections
/// with no site are left out of the report.
pub fn validate_selections(selections: &[SiteSelection]) -> Vec<ValidationRecord> {
    selections
        .iter()
        .filter_map(|s| {
            let (lat, lon) = (s.best_lat?, s.best_lon?);
            let site = GeoPoint::new(lat, lon);
            let (farm, separation_km) = nearest_known_farm(&site);
            Some(ValidationRecord {
                year: s.year,
                city: s.city.clone(),
                site_lat: lat,
                site_lon: lon,
                nearest_farm: farm.to_string(),
                separation_km,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(year: u32, city: &str, lat: Option<f64>, lon: Option<f64>) -> SiteSelection {
        SiteSelection {
            year,
            city: city.to_string(),
            best_lat: lat,
            best_lon: lon,
            distance_km: lat.map(|_| 10.0),
            adjusted_power_kw: 100.0,
            annual_energy_kwh: 36_500.0,
            demand_kwh: 1000.0,
            satisfaction: 36.5,
        }
    }

    #[test]
    fn a_site_at_burgar_hill_matches_burgar_hill() {
        let records = validate_selections(&[selection(
            2020,
            "Kirkwall",
            Some(59.113944),
            Some(-3.144306),
        )]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].nearest_farm, "Burgar Hill");
        assert!(records[0].separation_km < 1e-6);
    }

    #[test]
    fn no_site_selections_are_excluded_from_the_report() {
        let records = validate_selections(&[
            selection(2020, "Found", Some(55.68), Some(-4.28)),
            selection(2020, "NotFound", None, None),
        ]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].city, "Found");
        assert_eq!(records[0].nearest_farm, "Whitelee");
    }
}
