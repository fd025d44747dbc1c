use super::{mdp::Mdp, value_function::ValueFunction};
use crate::{
    defs::Continous,
    error::{Error, Result},
};
use itertools::Itertools;
use tracing::trace;

/// Q(s,a) = Σ_{s'} P(s,a,s') · [R(s,a,s') + γ·V(s')].
///
/// Sums over the successors the model enumerates for `(s, a)`, each of which
/// must have a value. Models that cannot enumerate successors are summed over
/// the keys of `v`. Terms are accumulated in ascending state order.
pub fn compute_q<M: Mdp + ?Sized>(
    mdp: &M,
    v: &ValueFunction<M::State>,
    s: &M::State,
    a: &M::Action,
    gamma: Continous,
) -> Result<Continous> {
    let q = match mdp.successors(s, a) {
        Some(successors) => successors
            .into_iter()
            .sorted()
            .dedup()
            .map(|s_next| {
                let v_next = v.get(&s_next).ok_or_else(|| Error::MissingStateValue {
                    state: format!("{s_next:?}"),
                })?;
                backup_term(mdp, s, a, &s_next, v_next, gamma)
            })
            .sum::<Result<Continous>>()?,
        None => v
            .iter()
            .map(|(s_next, v_next)| backup_term(mdp, s, a, s_next, v_next, gamma))
            .sum::<Result<Continous>>()?,
    };

    trace!(?s, ?a, gamma, q, "q");
    Ok(q)
}

fn backup_term<M: Mdp + ?Sized>(
    mdp: &M,
    s: &M::State,
    a: &M::Action,
    s_next: &M::State,
    v_next: Continous,
    gamma: Continous,
) -> Result<Continous> {
    let p = mdp.transition_probability(s, a, s_next)?;
    let r = mdp.reward(s, a, s_next)?;

    Ok(p * (r + gamma * v_next))
}

/// V(s) = max_a Q(s,a). States without actions are worth 0.
pub fn state_value<M: Mdp + ?Sized>(
    mdp: &M,
    v: &ValueFunction<M::State>,
    s: &M::State,
    gamma: Continous,
) -> Result<Continous> {
    let best = best_action(mdp, v, s, gamma)?;

    Ok(best.map_or(0., |(_, q)| q))
}

/// Action maximising Q(s,a). Ties go to the first action the model lists.
pub fn greedy_action<M: Mdp + ?Sized>(
    mdp: &M,
    v: &ValueFunction<M::State>,
    s: &M::State,
    gamma: Continous,
) -> Result<Option<M::Action>> {
    let best = best_action(mdp, v, s, gamma)?;

    Ok(best.map(|(a, _)| a))
}

fn best_action<M: Mdp + ?Sized>(
    mdp: &M,
    v: &ValueFunction<M::State>,
    s: &M::State,
    gamma: Continous,
) -> Result<Option<(M::Action, Continous)>> {
    let mut best: Option<(M::Action, Continous)> = None;
    for a in mdp.actions(s) {
        let q = compute_q(mdp, v, s, &a, gamma)?;
        if best.as_ref().map_or(true, |(_, q_best)| q > *q_best) {
            best = Some((a, q));
        }
    }

    Ok(best)
}
