use crate::config::constants::*;

/// Extrapolates a 10 m wind speed (m/s) to hub height using the logarithmic
/// wind profile. `friction_coefficient` is the surface roughness length z0 in
/// metres, taken per-cell from the land-use data.
pub fn wind_speed_at_hub_height(wind_10m_ms: f64, friction_coefficient: f64) -> f64 {
    wind_10m_ms * ((HUB_HEIGHT_M / friction_coefficient).ln()
        / (REFERENCE_HEIGHT_M / friction_coefficient).ln())
}

/// Saturation vapor pressure in Pa for a temperature in °C, via the Magnus
/// approximation. The Magnus constants are calibrated in hPa, hence the
/// final scaling.
pub fn saturation_vapor_pressure_pa(temp_celsius: f64) -> f64 {
    let es_hpa = MAGNUS_A * ((MAGNUS_B * temp_celsius) / (temp_celsius + MAGNUS_C)).exp();
    es_hpa * 100.0
}

/// Actual vapor pressure in Pa from temperature (°C) and relative humidity
/// as a percentage (0-100).
pub fn vapor_pressure_pa(temp_celsius: f64, relative_humidity_pct: f64) -> f64 {
    (relative_humidity_pct / 100.0) * saturation_vapor_pressure_pa(temp_celsius)
}

/// Moist-air density in kg/m³ from surface pressure (Pa), absolute
/// temperature (K) and relative humidity (%). Splits the pressure into dry
/// and vapor partial pressures and applies the ideal gas law to each.
pub fn air_density(surface_pressure_pa: f64, temperature_k: f64, relative_humidity_pct: f64) -> f64 {
    let temp_celsius = temperature_k - KELVIN_OFFSET;
    let e = vapor_pressure_pa(temp_celsius, relative_humidity_pct);
    let pd = surface_pressure_pa - e;
    (pd / (DRY_AIR_GAS_CONSTANT * temperature_k)) + (e / (WATER_VAPOR_GAS_CONSTANT * temperature_k))
}

/// Expected power output of a single turbine in kW, from hub-height wind
/// speed (m/s) and air density (kg/m³).
pub fn turbine_power_kw(wind_hub_ms: f64, air_density_kgm3: f64) -> f64 {
    let power_w = 0.5
        * air_density_kgm3
        * TURBINE_SWEPT_AREA_M2
        * wind_hub_ms.powi(3)
        * TURBINE_POWER_COEFFICIENT;
    power_w / 1000.0
}
