use sis_core::{AgentId, SisError, Step};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Core(#[from] SisError),

    /// A computed probability left [0, 1] mid-run.  Under valid parameters
    /// this cannot happen; when it does, the run aborts with full context
    /// rather than clamping, which would silently corrupt the stochastic
    /// model.
    #[error("numeric anomaly at {step} for agent {agent}: infection probability {value} outside [0, 1]")]
    NumericAnomaly {
        step:  Step,
        agent: AgentId,
        value: f64,
    },
}

pub type SimResult<T> = Result<T, SimError>;
