//! `forecare` - Simulated care-monitoring dashboard
//!
//! This library provides the core behavior behind the ForeCare dashboard:
//! fixture datasets, the list filter/search engine, selection and
//! detail-view context, the mock authentication gate, the canned
//! decision-support assistant, and route resolution. All data is static
//! and in memory; nothing here talks to a backend.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod assistant;
pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod fixtures;
pub mod logging;
pub mod model;
pub mod routes;
pub mod selection;
pub mod session;
pub mod snapshot;

pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use session::{Session, SessionStore};
pub use snapshot::FacilitySnapshot;
