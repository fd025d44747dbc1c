pub mod value_iteration;

use crate::defs::Continous;

pub trait MdpSolver<S, A, T> {
    fn v_star(&self, s: &S) -> Continous;

    fn q_star(&self, s: &S, a: &A) -> Option<Continous>;

    fn pi_star(&self, s: &S) -> Option<A>;

    fn exec(&mut self, theta: Continous, num_iterations: Option<usize>) -> (T, usize);
}
