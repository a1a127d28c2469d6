pub mod error;
pub mod health;
pub mod production_plan;

use std::time::Duration;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{config::Config, dispatch::CostPolicy};

/// Per-process state shared by handlers. The planner is stateless, so
/// this only carries the dispatch policy derived from configuration.
#[derive(Debug, Clone, Copy)]
pub struct AppState {
    pub cost_policy: CostPolicy,
}

impl AppState {
    pub fn new(cfg: &Config) -> Self {
        Self {
            cost_policy: CostPolicy {
                charge_turbojet_co2: cfg.dispatch.charge_turbojet_co2,
            },
        }
    }
}

pub fn router(state: AppState, cfg: &Config) -> Router {
    Router::new()
        .route("/productionplan", post(production_plan::production_plan))
        .route("/healthz", get(health::healthz))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(axum::extract::DefaultBodyLimit::max(1024 * 1024))
                .layer(TimeoutLayer::new(Duration::from_secs(
                    cfg.server.request_timeout_secs,
                ))),
        )
        .layer(TraceLayer::new_for_http())
}
