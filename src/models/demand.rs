use serde::{Deserialize, Serialize};

use crate::data::geo::GeoPoint;

/// A city with its projected annual electricity demand for one study year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandPoint {
    name: String,
    location: GeoPoint,
    annual_demand_kwh: f64,
}

impl DemandPoint {
    pub fn new(name: String, location: GeoPoint, annual_demand_kwh: f64) -> Self {
        Self {
            name,
            location,
            annual_demand_kwh,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &GeoPoint {
        &self.location
    }

    pub fn annual_demand_kwh(&self) -> f64 {
        self.annual_demand_kwh
    }
}
