use crate::{
    config::SolverConfig,
    defs::{Continous, Discrete},
    error::Result,
    mdps::{
        mdp::Mdp,
        solvers::{value_iteration::ValueIteration, MdpSolver},
        tabular::TabularMdp,
        value_function::ValueFunction,
    },
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Result of solving a tabular MDP; serializes with state and action keys as strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolveReport {
    pub gamma: Continous,
    pub theta: Continous,
    pub converged: bool,
    pub iterations: usize,
    pub v_star: ValueFunction<Discrete>,
    pub pi_star: BTreeMap<Discrete, Option<Discrete>>,
    pub q_star: BTreeMap<Discrete, BTreeMap<Discrete, Option<Continous>>>,
}

pub fn solve(mdp: &Rc<TabularMdp>, config: &SolverConfig) -> Result<SolveReport> {
    config.validate()?;

    let vi = &mut ValueIteration::new(Rc::clone(mdp), config.gamma);
    let (converged, iterations) = vi.try_exec(config.theta, Some(config.max_iterations))?;

    let q_star = mdp
        .states()
        .into_iter()
        .map(|s| {
            let qs = mdp
                .actions(&s)
                .into_iter()
                .map(|a| (a, vi.q_star(&s, &a)))
                .collect();
            (s, qs)
        })
        .collect();

    let pi_star = mdp
        .states()
        .into_iter()
        .map(|s| (s, vi.pi_star(&s)))
        .collect();

    Ok(SolveReport {
        gamma: config.gamma,
        theta: config.theta,
        converged,
        iterations,
        v_star: vi.value_function().clone(),
        pi_star,
        q_star,
    })
}
