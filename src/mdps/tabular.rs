use super::mdp::Mdp;
use crate::{
    defs::{Continous, Discrete, Transition, Transitions},
    error::{Error, Result},
};
use itertools::Itertools;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

const PROBABILITY_MASS_TOLERANCE: Continous = 1e-6;

/// Merged rows of one `(s, a, s')` triple.
#[derive(Debug, Clone, Copy, Default)]
struct Outcome {
    probability: Continous,
    weighted_reward: Continous,
    /// Last listed reward, reported while the merged probability is zero.
    reward: Continous,
}

impl Outcome {
    fn reward(&self) -> Continous {
        if self.probability == 0. {
            self.reward
        } else {
            self.weighted_reward / self.probability
        }
    }
}

/// Finite MDP given by an explicit transition table. States are `0..n_s`.
#[derive(Debug)]
pub struct TabularMdp {
    n_s: usize,
    n_a: usize,
    transitions: Rc<Transitions>,
    outcomes: HashMap<(Discrete, Discrete), BTreeMap<Discrete, Outcome>>,
}

impl TabularMdp {
    pub fn new(n_s: usize, n_a: usize, transitions: Transitions) -> Result<Self> {
        check_size(n_s, "n_s")?;
        check_size(n_a, "n_a")?;

        let mut outcomes = HashMap::new();
        for (&(s, a), ts) in &transitions {
            check_state(n_s, s)?;
            check_action(n_a, s, a)?;

            let mut by_next: BTreeMap<Discrete, Outcome> = BTreeMap::new();
            for t in ts {
                check_state(n_s, t.next_state)?;
                if !(0. ..=1.).contains(&t.probability) {
                    return Err(Error::InvalidProbability {
                        state: s.to_string(),
                        action: a.to_string(),
                        probability: t.probability,
                    });
                }

                let outcome = by_next.entry(t.next_state).or_default();
                outcome.probability += t.probability;
                outcome.weighted_reward += t.probability * t.reward;
                outcome.reward = t.reward;
            }

            let total = by_next.values().map(|o| o.probability).sum::<Continous>();
            if (total - 1.).abs() > PROBABILITY_MASS_TOLERANCE {
                return Err(Error::ProbabilityMass {
                    state: s.to_string(),
                    action: a.to_string(),
                    total,
                });
            }

            outcomes.insert((s, a), by_next);
        }

        Ok(Self {
            n_s,
            n_a,
            transitions: Rc::new(transitions),
            outcomes,
        })
    }

    /// Parses `{"n_s": .., "n_a": .., "transitions": {"s": {"a": [[p, s', r, done], ..]}}}`.
    pub fn from_json(val: &Value) -> Result<Self> {
        let n_s = as_usize(&val["n_s"], "n_s")?;
        let n_a = as_usize(&val["n_a"], "n_a")?;
        let obj = val["transitions"]
            .as_object()
            .ok_or_else(|| Error::malformed("'transitions' must be an object"))?;

        let mut transitions = Transitions::new();
        for (s, s_trans) in obj {
            let s = parse_key(s)?;
            let s_trans = s_trans.as_object().ok_or_else(|| {
                Error::malformed(format!("transitions of state {s} must be an object"))
            })?;
            for (a, a_trans) in s_trans {
                let a = parse_key(a)?;
                let ts = a_trans
                    .as_array()
                    .ok_or_else(|| {
                        Error::malformed(format!("transitions of ({s}, {a}) must be an array"))
                    })?
                    .iter()
                    .map(transition_from_json)
                    .collect::<Result<Vec<_>>>()?;

                transitions.insert((s, a), ts);
            }
        }

        Self::new(n_s, n_a, transitions)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_json(&serde_json::from_str::<Value>(json)?)
    }

    pub fn n_s(&self) -> usize {
        self.n_s
    }

    pub fn n_a(&self) -> usize {
        self.n_a
    }

    pub fn transitions(&self) -> Rc<Transitions> {
        Rc::clone(&self.transitions)
    }

    fn outcome(
        &self,
        s: Discrete,
        a: Discrete,
        s_next: Discrete,
    ) -> Result<Outcome> {
        check_state(self.n_s, s_next)?;
        let by_next = self
            .outcomes
            .get(&(s, a))
            .ok_or_else(|| Error::UnknownStateAction {
                state: s.to_string(),
                action: a.to_string(),
            })?;

        Ok(by_next.get(&s_next).copied().unwrap_or_default())
    }
}

impl Mdp for TabularMdp {
    type State = Discrete;
    type Action = Discrete;

    fn states(&self) -> Vec<Discrete> {
        (0..self.n_s as Discrete).collect()
    }

    fn actions(&self, s: &Discrete) -> Vec<Discrete> {
        self.outcomes
            .keys()
            .filter(|&&(x, _)| x == *s)
            .map(|&(_, a)| a)
            .sorted()
            .collect()
    }

    fn transition_probability(
        &self,
        s: &Discrete,
        a: &Discrete,
        s_next: &Discrete,
    ) -> Result<Continous> {
        self.outcome(*s, *a, *s_next).map(|o| o.probability)
    }

    fn reward(&self, s: &Discrete, a: &Discrete, s_next: &Discrete) -> Result<Continous> {
        self.outcome(*s, *a, *s_next).map(|o| o.reward())
    }

    fn successors(&self, s: &Discrete, a: &Discrete) -> Option<Vec<Discrete>> {
        self.outcomes
            .get(&(*s, *a))
            .map(|by_next| by_next.keys().copied().collect())
    }
}

fn check_size(n: usize, name: &str) -> Result<()> {
    if Discrete::try_from(n).is_err() {
        return Err(Error::malformed(format!(
            "'{name}' = {n} does not fit the state/action index type"
        )));
    }

    Ok(())
}

fn check_state(n_s: usize, s: Discrete) -> Result<()> {
    if s < 0 || s as usize >= n_s {
        return Err(Error::UnknownState {
            state: s.to_string(),
        });
    }

    Ok(())
}

fn check_action(n_a: usize, s: Discrete, a: Discrete) -> Result<()> {
    if a < 0 || a as usize >= n_a {
        return Err(Error::UnknownStateAction {
            state: s.to_string(),
            action: a.to_string(),
        });
    }

    Ok(())
}

fn as_usize(val: &Value, name: &str) -> Result<usize> {
    val.as_u64()
        .map(|n| n as usize)
        .ok_or_else(|| Error::malformed(format!("'{name}' must be a non-negative integer")))
}

fn parse_key(key: &str) -> Result<Discrete> {
    key.parse::<Discrete>()
        .map_err(|_| Error::malformed(format!("'{key}' is not an integer key")))
}

fn transition_from_json(t: &Value) -> Result<Transition> {
    let bad = || {
        Error::malformed(format!(
            "transition {t} must be [probability, next_state, reward, done]"
        ))
    };
    let t = t.as_array().filter(|t| t.len() == 4).ok_or_else(bad)?;

    Ok(Transition {
        probability: t[0].as_f64().ok_or_else(bad)?,
        next_state: t[1]
            .as_i64()
            .and_then(|i| Discrete::try_from(i).ok())
            .ok_or_else(bad)?,
        reward: t[2].as_f64().ok_or_else(bad)?,
        done: t[3].as_bool().ok_or_else(bad)?,
    })
}
