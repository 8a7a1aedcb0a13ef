//! # formula_api - HTTP front end for formula_core
//!
//! | Route | Description |
//! |-------|-------------|
//! | `GET /health` | Liveness plus formula count |
//! | `GET /formulas` | Every formula with its parameter declarations |
//! | `GET /formulas/{id}?v=10&r=5` | Evaluate from query parameters |
//! | `POST /formulas/{id}` | Evaluate from a JSON object body |
//! | `GET /explanations/{lang}` | Descriptor summaries for one language |
//! | `GET /explanations/{lang}/{subject}/{equation_id}` | One descriptor |
//!
//! Validation and domain failures return 400 with
//! `{error, code, kind}`; unknown formulas and explanations return 404.

pub mod config;
pub mod logging;
mod routes;
mod state;

pub use config::{Config, LogFormat};
pub use logging::init_logging;
pub use routes::app;
pub use state::AppState;
