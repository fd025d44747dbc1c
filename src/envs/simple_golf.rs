use crate::{defs::*, mdps::tabular::TabularMdp};

/// https://towardsdatascience.com/reinforcement-learning-an-easy-introduction-to-value-iteration-e4cfe0731fd5
///
/// States: 0 fairway, 1 green, 2 in the hole (terminal).
/// Actions: 0 hit to green, 1 hit backwards, 2 putt.
pub fn simple_golf_transitions() -> Transitions {
    Transitions::from([
        (
            (0, 0),
            vec![
                Transition {
                    next_state: 1,
                    probability: 0.9,
                    reward: 0.,
                    done: false,
                },
                Transition {
                    next_state: 0,
                    probability: 0.1,
                    reward: 0.,
                    done: false,
                },
            ],
        ),
        (
            (1, 1),
            vec![
                Transition {
                    next_state: 0,
                    probability: 0.9,
                    reward: 0.,
                    done: false,
                },
                Transition {
                    next_state: 1,
                    probability: 0.1,
                    reward: 0.,
                    done: false,
                },
            ],
        ),
        (
            (1, 2),
            vec![
                Transition {
                    next_state: 2,
                    probability: 0.9,
                    reward: 10.,
                    done: true,
                },
                Transition {
                    next_state: 1,
                    probability: 0.1,
                    reward: 0.,
                    done: false,
                },
            ],
        ),
    ])
}

pub fn simple_golf() -> TabularMdp {
    match TabularMdp::new(3, 3, simple_golf_transitions()) {
        Ok(mdp) => mdp,
        Err(e) => unreachable!("simple golf table is well formed: {e}"),
    }
}
