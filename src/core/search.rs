use rayon::prelude::*;

use crate::config::constants::{DAYS_PER_YEAR, POWER_LOSS_PER_1000_KM};
use crate::data::geo::GeoPoint;
use crate::models::demand::DemandPoint;
use crate::models::grid::GenerationGrid;
use crate::models::selection::SiteSelection;

/// Fractional transmission loss over a given distance. Losses accrue in
/// whole-1000 km steps: 1999 km costs the same as 1000 km. The fraction is
/// deliberately not clamped, matching the upstream attenuation law; beyond
/// ~285,715 km it exceeds 1 and the adjusted power goes negative.
pub fn transmission_loss_fraction(distance_km: f64) -> f64 {
    POWER_LOSS_PER_1000_KM * (distance_km / 1000.0).floor()
}

/// Power remaining at the city after transmission from a site `distance_km` away.
pub fn attenuate_power_kw(power_kw: f64, distance_km: f64) -> f64 {
    power_kw * (1.0 - transmission_loss_fraction(distance_km))
}

#[derive(Debug, Clone, Copy)]
struct BestSite {
    location: GeoPoint,
    distance_km: f64,
    adjusted_power_kw: f64,
}

/// Scans every eligible grid cell and keeps the one with the strictly
/// greatest attenuated power. Ties keep the first cell in row-major order.
/// A site must beat zero adjusted power to count at all.
fn best_site_for(grid: &GenerationGrid, city: &GeoPoint) -> Option<BestSite> {
    let mut best: Option<BestSite> = None;
    let mut best_power = 0.0;

    for (cell, raw_power) in grid.eligible_cells() {
        let distance_km = cell.distance_km(city);
        let adjusted = attenuate_power_kw(raw_power, distance_km);
        if adjusted > best_power {
            best_power = adjusted;
            best = Some(BestSite {
                location: cell,
                distance_km,
                adjusted_power_kw: adjusted,
            });
        }
    }

    best
}

/// Produces the selection record for one city in one year.
pub fn select_site(year: u32, grid: &GenerationGrid, demand: &DemandPoint) -> SiteSelection {
    let demand_kwh = demand.annual_demand_kwh();

    match best_site_for(grid, demand.location()) {
        Some(site) => {
            let annual_energy_kwh = site.adjusted_power_kw * DAYS_PER_YEAR;
            let satisfaction = if demand_kwh.is_finite() && demand_kwh > 0.0 {
                annual_energy_kwh / demand_kwh
            } else {
                0.0
            };
            SiteSelection {
                year,
                city: demand.name().to_string(),
                best_lat: Some(site.location.lat),
                best_lon: Some(site.location.lon),
                distance_km: Some(site.distance_km),
                adjusted_power_kw: site.adjusted_power_kw,
                annual_energy_kwh,
                demand_kwh,
                satisfaction,
            }
        }
        None => SiteSelection {
            year,
            city: demand.name().to_string(),
            best_lat: None,
            best_lon: None,
            distance_km: None,
            adjusted_power_kw: 0.0,
            annual_energy_kwh: 0.0,
            demand_kwh,
            satisfaction: 0.0,
        },
    }
}

/// Runs the search for every city of one year. The cities are independent,
/// so the parallel path fans out with rayon; collect() preserves the input
/// enumeration order either way.
pub fn select_sites(
    year: u32,
    grid: &GenerationGrid,
    demands: &[DemandPoint],
    parallel: bool,
) -> Vec<SiteSelection> {
    if parallel {
        demands
            .par_iter()
            .map(|demand| select_site(year, grid, demand))
            .collect()
    } else {
        demands
            .iter()
            .map(|demand| select_site(year, grid, demand))
            .collect()
    }
}
