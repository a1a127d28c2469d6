use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Types of power plants accepted on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PlantType {
    Gasfired,
    Turbojet,
    Windturbine,
}

/// Fuel prices and wind availability for a single planning request.
///
/// Field names follow the upstream payload convention, units embedded
/// in the key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fuels {
    #[serde(rename = "gas(euro/MWh)")]
    pub gas_euro_per_mwh: f64,
    #[serde(rename = "kerosine(euro/MWh)")]
    pub kerosine_euro_per_mwh: f64,
    #[serde(rename = "co2(euro/ton)")]
    pub co2_euro_per_ton: f64,
    /// Fraction of installed wind capacity currently available, 0-100.
    #[serde(rename = "wind(%)")]
    pub wind_percent: f64,
}

/// One plant of the fleet as described in the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerPlant {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PlantType,
    /// Thermal efficiency as a fraction. Ignored for wind turbines.
    pub efficiency: f64,
    /// Minimum stable output in MW once the plant is committed.
    pub pmin: f64,
    /// Maximum output in MW. For wind this is installed capacity.
    pub pmax: f64,
}

/// Request payload for `POST /productionplan`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionPlanRequest {
    pub load: f64,
    pub fuels: Fuels,
    pub powerplants: Vec<PowerPlant>,
}

/// Assigned output for one plant, in MW rounded to 0.1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantOutput {
    pub name: String,
    pub p: f64,
}
