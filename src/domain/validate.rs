use itertools::Itertools;
use serde::Serialize;

use super::{PlantType, PowerPlant, ProductionPlanRequest};

/// A single failed field check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    pub field: String,
    pub message: String,
}

impl Violation {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Run every field check and collect all violations before the
/// allocator is allowed to see the request.
pub fn validate_request(request: &ProductionPlanRequest) -> Result<(), Vec<Violation>> {
    let mut violations = Vec::new();

    check_load(request.load, &mut violations);
    check_fuels(request, &mut violations);
    check_fleet(&request.powerplants, &mut violations);

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

fn check_load(load: f64, out: &mut Vec<Violation>) {
    // `!(x > 0.0)` also rejects NaN.
    if !(load > 0.0) {
        out.push(Violation::new("load", "load must be greater than 0 MW"));
    }
}

fn check_fuels(request: &ProductionPlanRequest, out: &mut Vec<Violation>) {
    let fuels = &request.fuels;
    for (field, price) in [
        ("fuels.gas(euro/MWh)", fuels.gas_euro_per_mwh),
        ("fuels.kerosine(euro/MWh)", fuels.kerosine_euro_per_mwh),
        ("fuels.co2(euro/ton)", fuels.co2_euro_per_ton),
    ] {
        if !(price >= 0.0) {
            out.push(Violation::new(field, "price must be a non-negative number"));
        }
    }
    if !(0.0..=100.0).contains(&fuels.wind_percent) {
        out.push(Violation::new(
            "fuels.wind(%)",
            "wind percentage must be between 0 and 100",
        ));
    }
}

fn check_fleet(plants: &[PowerPlant], out: &mut Vec<Violation>) {
    if plants.is_empty() {
        out.push(Violation::new(
            "powerplants",
            "at least one power plant is required",
        ));
        return;
    }

    for name in plants.iter().map(|p| p.name.as_str()).duplicates() {
        out.push(Violation::new(
            "powerplants",
            format!("duplicate plant name: {name}"),
        ));
    }

    for (index, plant) in plants.iter().enumerate() {
        check_plant(index, plant, out);
    }
}

fn check_plant(index: usize, plant: &PowerPlant, out: &mut Vec<Violation>) {
    let field = |suffix: &str| format!("powerplants[{index}].{suffix}");

    if plant.name.trim().is_empty() {
        out.push(Violation::new(field("name"), "name must not be empty"));
    }
    if plant.kind != PlantType::Windturbine && !(plant.efficiency > 0.0 && plant.efficiency <= 1.0)
    {
        out.push(Violation::new(
            field("efficiency"),
            "efficiency must be in (0, 1] for fuel-burning plants",
        ));
    }
    if !(plant.pmin >= 0.0) {
        out.push(Violation::new(field("pmin"), "pmin must be non-negative"));
    }
    if !(plant.pmax > 0.0) {
        out.push(Violation::new(field("pmax"), "pmax must be greater than 0"));
    }
    if plant.pmin > plant.pmax {
        out.push(Violation::new(
            field("pmax"),
            "pmax must be greater than or equal to pmin",
        ));
    }
}
