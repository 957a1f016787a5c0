pub mod prober;
pub mod runner;

pub use crate::domain::model::{HttpOutcome, ProbeTarget};
pub use crate::domain::ports::Prober;
pub use crate::utils::error::Result;
