use thiserror::Error;

/// Allocation failures. Both variants mean the requested load cannot be
/// met exactly; no partial plan is ever returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DispatchError {
    #[error("requested load of {requested} MW exceeds total available capacity of {available} MW")]
    LoadExceedsCapacity { requested: f64, available: f64 },

    #[error("no commitment of the fleet meets {requested} MW exactly ({shortfall} MW unmet)")]
    NoFeasibleCommitment { requested: f64, shortfall: f64 },
}
