//! HTTP API for the payroll engine.
//!
//! Exposes the payout calculator, the session log and the exports as REST
//! endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, DateQuery, SessionPayload, SummaryRequest};
pub use response::{AddOnCatalogResponse, ApiError, ApiErrorResponse, HealthResponse};
pub use state::AppState;
