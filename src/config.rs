use crate::{
    defs::Continous,
    error::{Error, Result},
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_GAMMA: Continous = 0.9;
pub const DEFAULT_THETA: Continous = 1e-8;
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    pub gamma: Continous,
    pub theta: Continous,
    pub max_iterations: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            gamma: DEFAULT_GAMMA,
            theta: DEFAULT_THETA,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    pub fn validate(&self) -> Result<()> {
        if !(0. ..=1.).contains(&self.gamma) {
            return Err(Error::InvalidConfiguration {
                message: format!("gamma must be in [0, 1], got {}", self.gamma),
            });
        }
        if !(self.theta > 0.) {
            return Err(Error::InvalidConfiguration {
                message: format!("theta must be positive, got {}", self.theta),
            });
        }
        if self.max_iterations == 0 {
            return Err(Error::InvalidConfiguration {
                message: "max_iterations must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}
