//! Application bootstrap.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                       GeocacheApp                         │
//! │                                                           │
//! │  ReqwestClient ──► PositionstackProvider                  │
//! │                         │                                 │
//! │                         ▼                                 │
//! │  CacheRegistry ──► GeocodingService ──┐                   │
//! │       │                               ├──► axum Router    │
//! │       └──────────► CacheAdmin ────────┘                   │
//! └───────────────────────────────────────────────────────────┘
//! ```

mod bootstrap;
mod config;
mod error;

pub use bootstrap::GeocacheApp;
pub use config::AppConfig;
pub use error::AppError;
