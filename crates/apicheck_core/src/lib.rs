//! apicheck core library
//!
//! A sequential end-to-end harness for the questionnaire API:
//! - Registers and logs in an admin and a regular account
//! - Exercises profile, question and submission endpoints
//! - Verifies that admin endpoints reject the regular account
//! - Deletes every question it created
//!
//! # Quick Start
//!
//! ```no_run
//! use apicheck_core::{Config, Harness, HttpTransport};
//!
//! let config = Config::default();
//! let transport = HttpTransport::new(&config.api.base_url, config.api.request_timeout()).unwrap();
//!
//! let report = Harness::new(transport, config).run();
//! println!("{}", report.summary());
//! ```
//!
//! # Testing against a fake
//!
//! Stages only see the [`Transport`] trait, so any in-process implementation
//! can stand in for the server:
//!
//! ```
//! use apicheck_core::{ApiRequest, ApiResponse, Config, Harness, Result, Stage, Transport};
//!
//! struct Offline;
//!
//! impl Transport for Offline {
//!     fn send(&self, _request: &ApiRequest) -> Result<ApiResponse> {
//!         Ok(ApiResponse::new(503, "maintenance"))
//!     }
//! }
//!
//! let mut config = Config::default();
//! config.run.stage_delay_ms = 0;
//!
//! let report = Harness::new(Offline, config).run();
//! assert_eq!(report.stages.len(), Stage::ALL.len());
//! assert!(!report.all_passed());
//! ```

mod client;
mod config;
mod error;
mod runner;
mod session;
mod stages;
mod transport;
mod types;

#[cfg(test)]
mod testing;

pub use client::ApiClient;
pub use config::{AccountsConfig, ApiConfig, Config, ProfileConfig, RunConfig};
pub use error::{CheckError, Result};
pub use runner::{Harness, HarnessEvent, RunReport, StageReport};
pub use session::{Account, SessionContext};
pub use stages::{Stage, ALREADY_REGISTERED_STATUS, FORBIDDEN_STATUS, SUBMITTED_ANSWERS};
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Method, Transport};
pub use types::{Answer, Credentials, NewQuestion, QuestionSpec, Role, StepResult};
