pub mod objective;
pub mod test_functions;

pub use objective::{FnObjective, Objective};
