//! Action values Q(s,a) and value-based planning on finite Markov Decision Processes.

pub mod config;
pub mod defs;
pub mod envs;
pub mod error;
pub mod mdps;
pub mod report;

pub use defs::*;
pub use error::{Error, Result};
pub use mdps::{
    action_value::{compute_q, greedy_action, state_value},
    mdp::Mdp,
    solvers::{value_iteration::ValueIteration, MdpSolver},
    tabular::TabularMdp,
    value_function::ValueFunction,
};
