pub mod config;
pub mod core;
pub mod domain;
pub mod mock;
pub mod utils;

pub use config::{CliConfig, ServeConfig};
pub use core::{prober::RestProber, runner::CheckRunner};
pub use domain::model::{HttpOutcome, ProbeTarget};
pub use utils::error::{CheckError, Result};
