extern crate float_eq;
extern crate mdp_action_value;
extern crate rstest;

use float_eq::*;
use mdp_action_value::{envs::simple_golf::*, *};
use rstest::*;
use std::rc::Rc;

fn t(next_state: Discrete, probability: Continous, reward: Continous) -> Transition {
    Transition {
        next_state,
        probability,
        reward,
        done: false,
    }
}

/// State 0, action 0 leads to 1 and 2; states 1 and 2 loop on themselves.
fn two_successors(p1: Continous, r1: Continous, p2: Continous, r2: Continous) -> TabularMdp {
    TabularMdp::new(
        3,
        1,
        Transitions::from([
            ((0, 0), vec![t(1, p1, r1), t(2, p2, r2)]),
            ((1, 0), vec![t(1, 1., 0.)]),
            ((2, 0), vec![t(2, 1., 0.)]),
        ]),
    )
    .unwrap()
}

fn values(v: &[Continous]) -> ValueFunction<Discrete> {
    v.iter()
        .enumerate()
        .map(|(s, &v)| (s as Discrete, v))
        .collect()
}

#[rstest]
#[case(1., 5., 0.9)]
#[case(-2., 0.5, 0.)]
#[case(3., -4., 1.)]
fn single_state_self_loop(#[case] r: Continous, #[case] v: Continous, #[case] gamma: Continous) {
    let mdp = TabularMdp::new(1, 1, Transitions::from([((0, 0), vec![t(0, 1., r)])])).unwrap();

    let q = compute_q(&mdp, &values(&[v]), &0, &0, gamma).unwrap();

    assert_float_eq!(q, r + gamma * v, abs <= 1e-12);
}

#[rstest]
#[case(1., 2., 10., 20., 0.9)]
#[case(-1., 3., 0.5, -7., 0.5)]
#[case(0., 0., 1., 1., 1.)]
fn two_next_states(
    #[case] r1: Continous,
    #[case] r2: Continous,
    #[case] v1: Continous,
    #[case] v2: Continous,
    #[case] gamma: Continous,
) {
    let mdp = two_successors(0.3, r1, 0.7, r2);

    let q = compute_q(&mdp, &values(&[0., v1, v2]), &0, &0, gamma).unwrap();

    assert_float_eq!(
        q,
        0.3 * (r1 + gamma * v1) + 0.7 * (r2 + gamma * v2),
        abs <= 1e-12
    );
}

#[test]
fn zero_gamma_ignores_future_value() {
    let mdp = two_successors(0.3, 1., 0.7, 2.);

    let q = compute_q(&mdp, &values(&[0., 100., -100.]), &0, &0, 0.).unwrap();

    assert_float_eq!(q, 0.3 * 1. + 0.7 * 2., abs <= 1e-12);
}

#[rstest]
#[case(0.)]
#[case(0.5)]
#[case(1.)]
fn all_zero_rewards_and_values(#[case] gamma: Continous) {
    let mdp = two_successors(0.1, 0., 0.9, 0.);

    let q = compute_q(&mdp, &values(&[0., 0., 0.]), &0, &0, gamma).unwrap();

    assert_eq!(q, 0.);
}

#[test]
fn zero_probability_successor_contributes_nothing() {
    let mdp = two_successors(1., 2., 0., 1000.);

    let q = compute_q(&mdp, &values(&[0., 3., 1000.]), &0, &0, 0.9).unwrap();

    assert_float_eq!(q, 2. + 0.9 * 3., abs <= 1e-12);
}

#[test]
fn unlisted_state_in_value_function_contributes_nothing() {
    let mdp = TabularMdp::new(2, 1, Transitions::from([((0, 0), vec![t(0, 1., 1.)])])).unwrap();

    let q = compute_q(&mdp, &values(&[2., 1000.]), &0, &0, 0.5).unwrap();

    assert_float_eq!(q, 1. + 0.5 * 2., abs <= 1e-12);
}

#[rstest]
#[case(2.)]
#[case(-0.5)]
#[case(0.)]
fn scaling_values_scales_only_the_future_part(#[case] k: Continous) {
    let mdp = two_successors(0.3, 1., 0.7, 2.);
    let gamma = 0.9;
    let v = values(&[0., 4., 6.]);

    let immediate = compute_q(&mdp, &v, &0, &0, 0.).unwrap();
    let q = compute_q(&mdp, &v, &0, &0, gamma).unwrap();
    let q_scaled = compute_q(&mdp, &v.scaled(k), &0, &0, gamma).unwrap();

    assert_float_eq!(q_scaled - immediate, k * (q - immediate), abs <= 1e-12);
}

#[test]
fn missing_successor_value_is_an_error() {
    let mdp = two_successors(0.3, 1., 0.7, 2.);
    let v: ValueFunction<Discrete> = [(1, 4.)].into_iter().collect();

    let err = compute_q(&mdp, &v, &0, &0, 0.9).unwrap_err();

    assert!(matches!(err, Error::MissingStateValue { state } if state == "2"));
}

#[test]
fn invalid_state_action_surfaces_to_caller() {
    let mdp = two_successors(0.3, 1., 0.7, 2.);

    let err = compute_q(&mdp, &values(&[0., 0., 0.]), &0, &5, 0.9).unwrap_err();

    assert!(matches!(err, Error::UnknownStateAction { .. }));
}

#[test]
fn simple_golf_from_json_matches_table() {
    let json = r#"{
        "n_s": 3,
        "n_a": 3,
        "transitions": {
            "0": { "0": [[0.9, 1, 0.0, false], [0.1, 0, 0.0, false]] },
            "1": {
                "1": [[0.9, 0, 0.0, false], [0.1, 1, 0.0, false]],
                "2": [[0.9, 2, 10.0, true], [0.1, 1, 0.0, false]]
            }
        }
    }"#;
    let from_json = TabularMdp::from_json_str(json).unwrap();
    let from_table = simple_golf();
    let v = values(&[1., 2., 3.]);

    for s in 0..2 {
        for a in from_table.actions(&s) {
            let q_json = compute_q(&from_json, &v, &s, &a, 0.9).unwrap();
            let q_table = compute_q(&from_table, &v, &s, &a, 0.9).unwrap();
            assert_float_eq!(q_json, q_table, abs <= 1e-12);
        }
    }
    assert_eq!(from_json.transitions().len(), simple_golf_transitions().len());
}

#[test]
fn value_iteration_satisfies_bellman_optimality() {
    let mdp = Rc::new(simple_golf());
    let vi = &mut ValueIteration::new(Rc::clone(&mdp), 0.9);

    let (converged, _) = vi.try_exec(1e-12, Some(10_000)).unwrap();
    assert!(converged);

    for s in mdp.states() {
        let backed_up = state_value(mdp.as_ref(), vi.value_function(), &s, 0.9).unwrap();
        assert_float_eq!(backed_up, vi.v_star(&s), abs <= 1e-9);
        assert_eq!(
            greedy_action(mdp.as_ref(), vi.value_function(), &s, 0.9).unwrap(),
            vi.pi_star(&s)
        );
    }
}
