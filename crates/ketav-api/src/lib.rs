//! ketav-api crate
//!
//! Web server providing Hebrew transliteration as an HTTP API.
//!
//! ## Endpoints
//! - `POST /transliterate` - Transliterate pointed Hebrew text
//! - `POST /query-keys` - Search keys for a Latin or Hebrew query
//! - `GET /health` - Health Check
//!
//! ## Usage Example
//! ```bash
//! curl -X POST http://127.0.0.1:5540/transliterate \
//!   -H "Content-Type: application/json" \
//!   -d '{"text": "בְּרֵאשִׁית"}'
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod service;

pub use api::AppState;
pub use config::Config;
pub use errors::{ApiError, ApiErrorKind};
pub use models::{
  QueryKeysRequest, QueryKeysResponse, TransliterateRequest, TransliterateResponse, WordDto,
};
pub use service::KetavApiServiceFull;
