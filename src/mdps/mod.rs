pub mod action_value;
pub mod mdp;
pub mod solvers;
pub mod tabular;
pub mod value_function;
