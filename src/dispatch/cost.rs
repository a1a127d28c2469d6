use crate::domain::{Fuels, PlantType, PowerPlant};

/// Tons of CO2 emitted per MWh of fuel burned in a gas-fired unit.
/// A physical constant of the plant type, independent of the request.
pub const GAS_EMISSION_FACTOR_T_PER_MWH: f64 = 0.3;

/// Pricing policy fixed per deployment rather than per request.
#[derive(Debug, Clone, Copy)]
pub struct CostPolicy {
    /// Whether turbojets pay the CO2 charge. The merit-order convention
    /// treats turbojet fuel as exempt; the domain owner can flip this
    /// via configuration if the convention changes.
    pub charge_turbojet_co2: bool,
}

impl Default for CostPolicy {
    fn default() -> Self {
        Self {
            charge_turbojet_co2: false,
        }
    }
}

/// Cost of producing one MWh with the given plant at current prices.
///
/// Precondition: `efficiency > 0` for fuel-burning plants, enforced by
/// request validation before dispatch runs.
pub fn cost_per_mwh(plant: &PowerPlant, fuels: &Fuels, policy: CostPolicy) -> f64 {
    match plant.kind {
        PlantType::Windturbine => 0.0,
        PlantType::Gasfired => {
            (fuels.gas_euro_per_mwh + fuels.co2_euro_per_ton * GAS_EMISSION_FACTOR_T_PER_MWH)
                / plant.efficiency
        }
        PlantType::Turbojet => {
            let mut cost = fuels.kerosine_euro_per_mwh / plant.efficiency;
            if policy.charge_turbojet_co2 {
                cost += fuels.co2_euro_per_ton * GAS_EMISSION_FACTOR_T_PER_MWH / plant.efficiency;
            }
            cost
        }
    }
}
