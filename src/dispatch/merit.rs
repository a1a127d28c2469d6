use ordered_float::OrderedFloat;

use super::cost::{cost_per_mwh, CostPolicy};
use crate::domain::{Fuels, PlantType, PowerPlant};

/// A plant reduced to what dispatch needs: its cost and the capacity
/// band actually usable this request. Power is carried in tenths of a
/// MW so allocation arithmetic stays exact on the 0.1 MW grid.
#[derive(Debug, Clone)]
pub struct EffectivePlant {
    /// Position of the plant in the request fleet.
    pub index: usize,
    pub cost_per_mwh: f64,
    /// Minimum stable output in tenths of MW. 0 for wind.
    pub pmin: i64,
    /// Usable maximum output in tenths of MW. Wind is scaled by the
    /// available wind percentage.
    pub pmax: i64,
}

/// Convert MW to tenths of MW, rounding to the nearest 0.1.
pub fn to_tenths(mw: f64) -> i64 {
    (mw * 10.0).round() as i64
}

/// Convert tenths of MW back to MW.
pub fn to_mw(tenths: i64) -> f64 {
    tenths as f64 / 10.0
}

/// Derive effective plants and sort them ascending by cost per MWh.
///
/// The sort is stable: plants with equal cost keep their request order,
/// so identical inputs always yield identical plans.
pub fn merit_order(plants: &[PowerPlant], fuels: &Fuels, policy: CostPolicy) -> Vec<EffectivePlant> {
    let mut fleet: Vec<EffectivePlant> = plants
        .iter()
        .enumerate()
        .map(|(index, plant)| {
            let (pmin, pmax) = match plant.kind {
                PlantType::Windturbine => {
                    (0, to_tenths(plant.pmax * fuels.wind_percent / 100.0))
                }
                _ => (to_tenths(plant.pmin), to_tenths(plant.pmax)),
            };
            EffectivePlant {
                index,
                cost_per_mwh: cost_per_mwh(plant, fuels, policy),
                pmin,
                pmax,
            }
        })
        .collect();

    fleet.sort_by_key(|plant| OrderedFloat(plant.cost_per_mwh));
    fleet
}
