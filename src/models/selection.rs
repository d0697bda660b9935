use serde::Serialize;

/// One result row per (year, city). The site fields are `None` when no
/// eligible grid cell existed for the city, which the CSV layer serializes
/// as empty fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteSelection {
    #[serde(rename = "Year")]
    pub year: u32,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "Best_Lat")]
    pub best_lat: Option<f64>,
    #[serde(rename = "Best_Lon")]
    pub best_lon: Option<f64>,
    #[serde(rename = "Distance_to_City_km")]
    pub distance_km: Option<f64>,
    #[serde(rename = "Adjusted_Power_kWh")]
    pub adjusted_power_kw: f64,
    #[serde(rename = "Annual_Energy_Production_kWh")]
    pub annual_energy_kwh: f64,
    #[serde(rename = "City_Energy_Demand_kWh")]
    pub demand_kwh: f64,
    #[serde(rename = "Demand_Satisfaction_ratio")]
    pub satisfaction: f64,
}

impl SiteSelection {
    pub fn site_found(&self) -> bool {
        self.best_lat.is_some() && self.best_lon.is_some()
    }
}
