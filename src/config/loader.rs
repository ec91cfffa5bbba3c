//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configurations from YAML files.

use chrono::NaiveDate;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::calculation::{PayrollRun, run_monthly_payroll};
use crate::error::{PayrollError, PayrollResult};
use crate::models::Employee;

use super::types::{PayrollConfig, PayrollMetadata, RosterConfig};

/// Loads and provides access to a payroll configuration.
///
/// The engine itself never reads files; this loader is for outer callers
/// (the HTTP server, batch drivers) that want to keep a roster on disk.
///
/// # Directory Structure
///
/// ```text
/// config/demo/
/// ├── payroll.yaml   # Company, period and currency
/// └── roster.yaml    # Employees and units worked
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/demo").unwrap();
/// let run = loader.run_payroll().unwrap();
/// println!("Total net payroll: ${}", run.summary.total_net);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// - `ConfigNotFound` if either file is missing
    /// - `ConfigParseError` if a file is not valid YAML for its type, the
    ///   period is not a `YYYY-MM` month, or two employees share an id
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();

        let payroll_path = path.join("payroll.yaml");
        let metadata = Self::load_yaml::<PayrollMetadata>(&payroll_path)?;
        let period_start = Self::parse_period(&metadata.period, &payroll_path)?;

        let roster_path = path.join("roster.yaml");
        let roster = Self::load_yaml::<RosterConfig>(&roster_path)?;
        Self::check_unique_ids(&roster.employees, &roster_path)?;

        Ok(Self {
            config: PayrollConfig::new(metadata, period_start, roster),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> PayrollResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| PayrollError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn parse_period(period: &str, path: &Path) -> PayrollResult<NaiveDate> {
        NaiveDate::parse_from_str(&format!("{}-01", period), "%Y-%m-%d").map_err(|_| {
            PayrollError::ConfigParseError {
                path: path.display().to_string(),
                message: format!("period '{}' is not a YYYY-MM month", period),
            }
        })
    }

    fn check_unique_ids(employees: &[Employee], path: &Path) -> PayrollResult<()> {
        let mut seen = HashSet::new();
        for employee in employees {
            if !seen.insert(employee.id) {
                return Err(PayrollError::ConfigParseError {
                    path: path.display().to_string(),
                    message: format!("duplicate employee id {}", employee.id),
                });
            }
        }
        Ok(())
    }

    /// Returns the underlying payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the payroll metadata.
    pub fn metadata(&self) -> &PayrollMetadata {
        self.config.metadata()
    }

    /// Runs the monthly payroll for the loaded roster.
    pub fn run_payroll(&self) -> PayrollResult<PayrollRun> {
        run_monthly_payroll(self.config.employees(), self.config.units())
    }
}
