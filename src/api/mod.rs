//! HTTP API module for the payroll engine.
//!
//! This module provides the REST API endpoints for generating pay
//! statements and running monthly payroll.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{EmployeeRequest, PayrollRequest, StatementRequest};
pub use response::{ApiError, ENGINE_VERSION, PayrollRunResponse, StatementResponse};
pub use state::AppState;
