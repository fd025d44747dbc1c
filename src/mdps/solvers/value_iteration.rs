use super::MdpSolver;
use crate::{
    defs::Continous,
    error::Result,
    mdps::{action_value::*, mdp::Mdp, value_function::ValueFunction},
};
use std::rc::Rc;
use tracing::{debug, error, info};

/// Value iteration with synchronous sweeps - Sutton & Barto 2018, 4.4.
pub struct ValueIteration<M: Mdp> {
    mdp: Rc<M>,
    gamma: Continous,
    v: ValueFunction<M::State>,
}

impl<M: Mdp> ValueIteration<M> {
    pub fn new(mdp: Rc<M>, gamma: Continous) -> Self {
        let v = ValueFunction::zeros(mdp.states());

        Self { mdp, gamma, v }
    }

    pub fn value_function(&self) -> &ValueFunction<M::State> {
        &self.v
    }

    /// Sweeps until the largest change is below `theta` or `num_iterations`
    /// sweeps have run. Returns whether it converged and the sweep count.
    pub fn try_exec(
        &mut self,
        theta: Continous,
        num_iterations: Option<usize>,
    ) -> Result<(bool, usize)> {
        let max_iterations = num_iterations.unwrap_or(usize::MAX);
        let mut iterations = 0;
        while iterations < max_iterations {
            let mut delta: Continous = 0.;
            let mut v_new = ValueFunction::new();
            for s in self.mdp.states() {
                let v_s = state_value(&*self.mdp, &self.v, &s, self.gamma)?;
                let v_old = self.v.get(&s).unwrap_or(0.);
                delta = delta.max((v_s - v_old).abs());
                v_new.insert(s, v_s);
            }

            self.v = v_new;
            iterations += 1;
            debug!(iterations, delta, "value iteration sweep");

            if delta < theta {
                info!(iterations, theta, "value iteration converged");
                return Ok((true, iterations));
            }
        }

        info!(iterations, theta, "value iteration stopped before converging");
        Ok((false, iterations))
    }
}

impl<M: Mdp> MdpSolver<M::State, M::Action, bool> for ValueIteration<M> {
    fn v_star(&self, s: &M::State) -> Continous {
        self.v.get(s).unwrap_or(0.)
    }

    fn q_star(&self, s: &M::State, a: &M::Action) -> Option<Continous> {
        compute_q(&*self.mdp, &self.v, s, a, self.gamma).ok()
    }

    fn pi_star(&self, s: &M::State) -> Option<M::Action> {
        greedy_action(&*self.mdp, &self.v, s, self.gamma).ok().flatten()
    }

    fn exec(&mut self, theta: Continous, num_iterations: Option<usize>) -> (bool, usize) {
        match self.try_exec(theta, num_iterations) {
            Ok(ret) => ret,
            Err(e) => {
                error!(%e, "value iteration aborted");
                (false, 0)
            }
        }
    }
}
