use axum::extract::{rejection::JsonRejection, State};
use axum::Json;

use crate::{
    api::{error::ApiError, AppState},
    dispatch,
    domain::{validate_request, PlantOutput, ProductionPlanRequest},
};

/// POST /productionplan - Calculate production plan for power plants
///
/// Validates the request, runs the merit-order allocation and returns
/// one `{name, p}` entry per plant in request order.
pub async fn production_plan(
    State(state): State<AppState>,
    payload: Result<Json<ProductionPlanRequest>, JsonRejection>,
) -> Result<Json<Vec<PlantOutput>>, ApiError> {
    let Json(request) = payload?;

    tracing::info!(
        load_mw = request.load,
        plants = request.powerplants.len(),
        "calculating production plan"
    );

    validate_request(&request).map_err(ApiError::ValidationError)?;

    let outputs = dispatch::plan(
        request.load,
        &request.fuels,
        &request.powerplants,
        state.cost_policy,
    )?;

    let total: f64 = outputs.iter().map(|output| output.p).sum();
    tracing::info!(total_mw = total, "production plan calculated");

    Ok(Json(outputs))
}
