// Turbine Constants
pub const REFERENCE_HEIGHT_M: f64 = 10.0;          // Height of the reanalysis wind field
pub const HUB_HEIGHT_M: f64 = 80.0;                // Turbine hub height
pub const TURBINE_SWEPT_AREA_M2: f64 = 2000.0;     // Area swept by a single turbine's blades
pub const TURBINE_POWER_COEFFICIENT: f64 = 0.35;   // Power coefficient (Cp)

// Moist-Air Constants
pub const DRY_AIR_GAS_CONSTANT: f64 = 287.05;      // Rd, J/(kg K)
pub const WATER_VAPOR_GAS_CONSTANT: f64 = 461.5;   // Rv, J/(kg K)
pub const KELVIN_OFFSET: f64 = 273.15;

// Magnus approximation coefficients (saturation vapor pressure, hPa over °C)
pub const MAGNUS_A: f64 = 6.1094;
pub const MAGNUS_B: f64 = 17.625;
pub const MAGNUS_C: f64 = 243.04;

// Transmission and Energy Accounting
pub const POWER_LOSS_PER_1000_KM: f64 = 0.0035;    // Fractional loss per whole 1000 km
pub const DAYS_PER_YEAR: f64 = 365.0;              // Fixed calendar year, no leap adjustment

// Geodesy
pub const EARTH_RADIUS_KM: f64 = 6371.0088;        // IUGG mean Earth radius

// Land-Cover Class Codes (exclusion mask)
pub const LCCS_WATER: u8 = 2;
pub const LCCS_URBAN: u8 = 5;

// Demand Projection
pub const KTOE_TO_KWH: f64 = 1.163e7;              // 1 ktoe = 11.63 GWh
