use crate::{defs::Continous, error::Result};
use std::fmt::Debug;

/// Markov Decision Process - Sutton & Barto 2018.
pub trait Mdp {
    type State: Ord + Clone + Debug;

    type Action: Clone + Debug;

    fn states(&self) -> Vec<Self::State>;

    /// Actions available in `s`. Empty for states with no modelled transitions.
    fn actions(&self, s: &Self::State) -> Vec<Self::Action>;

    fn transition_probability(
        &self,
        s: &Self::State,
        a: &Self::Action,
        s_next: &Self::State,
    ) -> Result<Continous>;

    fn reward(&self, s: &Self::State, a: &Self::Action, s_next: &Self::State)
        -> Result<Continous>;

    /// Next states reachable from `(s, a)`, if the model can enumerate them.
    fn successors(&self, _s: &Self::State, _a: &Self::Action) -> Option<Vec<Self::State>> {
        None
    }
}
