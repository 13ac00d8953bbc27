pub mod common;
pub mod descent;

pub use common::trace::SolverTraceRecord;
