//! Configuration loading for payroll runs.
//!
//! This module loads a company's roster and pay period from YAML files so
//! that outer callers can run the engine over a stored employee list.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/demo").unwrap();
//! println!("Paying: {}", config.metadata().company);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{PayrollConfig, PayrollMetadata, RosterConfig};
