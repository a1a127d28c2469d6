use tracing::{debug, warn};

use super::cost::CostPolicy;
use super::error::DispatchError;
use super::merit::{merit_order, to_mw, to_tenths, EffectivePlant};
use crate::domain::{Fuels, PlantOutput, PowerPlant};

/// Compute a production plan for the fleet: walk the merit order
/// assigning as much cheap power as possible, then redistribute until
/// the total matches the load exactly.
///
/// Pure function of its inputs; expects a request that already passed
/// validation. All arithmetic runs in tenths of MW, so the returned
/// outputs sum to the load exactly and sit on the 0.1 MW grid.
pub fn plan(
    load_mw: f64,
    fuels: &Fuels,
    plants: &[PowerPlant],
    policy: CostPolicy,
) -> Result<Vec<PlantOutput>, DispatchError> {
    let load = to_tenths(load_mw);
    let fleet = merit_order(plants, fuels, policy);

    for plant in &fleet {
        debug!(
            name = %plants[plant.index].name,
            cost_per_mwh = plant.cost_per_mwh,
            pmin = to_mw(plant.pmin),
            pmax = to_mw(plant.pmax),
            "merit order entry"
        );
    }

    let available = fleet
        .iter()
        .fold(0_i64, |acc, plant| acc.saturating_add(plant.pmax));
    if available < load {
        return Err(DispatchError::LoadExceedsCapacity {
            requested: load_mw,
            available: to_mw(available),
        });
    }

    let mut assigned = vec![0_i64; fleet.len()];
    let mut remaining = load;

    // Greedy pass: cheapest first, up to pmax, never overshooting. A
    // plant whose pmin exceeds the unmet remainder is skipped here and
    // left to redistribution.
    for (slot, plant) in fleet.iter().enumerate() {
        if remaining <= 0 {
            break;
        }
        if plant.pmin > remaining {
            continue;
        }
        let take = plant.pmax.min(remaining);
        assigned[slot] = take;
        remaining -= take;
    }

    if remaining > 0 {
        warn!(shortfall = to_mw(remaining), "greedy pass left load unmet, redistributing");
        remaining = commit_with_reduction(&fleet, &mut assigned, remaining);
    }
    if remaining > 0 {
        return Err(DispatchError::NoFeasibleCommitment {
            requested: load_mw,
            shortfall: to_mw(remaining),
        });
    }

    let mut outputs: Vec<PlantOutput> = plants
        .iter()
        .map(|plant| PlantOutput {
            name: plant.name.clone(),
            p: 0.0,
        })
        .collect();
    for (plant, power) in fleet.iter().zip(&assigned) {
        outputs[plant.index].p = to_mw(*power);
    }
    Ok(outputs)
}

/// Redistribution path for a shortfall. After the greedy pass every
/// committed plant sits at pmax and every idle plant's pmin exceeds
/// the remainder, so the only move left is to switch on the cheapest
/// idle plant at its minimum and take the resulting overshoot back
/// from committed plants, most expensive first, never below their own
/// pmin. Returns the still-unmet remainder.
fn commit_with_reduction(fleet: &[EffectivePlant], assigned: &mut [i64], remaining: i64) -> i64 {
    let reducible: i64 = fleet
        .iter()
        .enumerate()
        .filter(|(slot, plant)| assigned[*slot] > plant.pmin)
        .map(|(slot, plant)| assigned[slot] - plant.pmin)
        .sum();

    for slot in 0..fleet.len() {
        if assigned[slot] > 0 {
            continue;
        }
        // Only plants whose minimum genuinely overshoots the remainder
        // are candidates. pmin <= remaining here means the plant has no
        // usable capacity (an idle wind turbine at 0%), not a plant the
        // greedy pass missed.
        let mut overshoot = fleet[slot].pmin - remaining;
        if overshoot <= 0 || overshoot > reducible {
            continue;
        }
        assigned[slot] = fleet[slot].pmin;
        for other in (0..fleet.len()).rev() {
            if overshoot == 0 {
                break;
            }
            if other == slot || assigned[other] == 0 {
                continue;
            }
            let decrease = (assigned[other] - fleet[other].pmin).min(overshoot);
            assigned[other] -= decrease;
            overshoot -= decrease;
        }
        return 0;
    }
    remaining
}
