//! cscx-import - CSV customer import for the customer success platform
//!
//! This library provides the import pipeline behind the `cscx-import`
//! binary: parsing an uploaded CSV, matching its columns to the customer
//! schema, validating and building records, and sending them to the
//! import API through a five-step wizard.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Schema, mapping, warning and record types
//! - `services`: Parser, auto-mapping, validation and record building
//! - `wizard`: The Upload -> Mapping -> Preview -> Importing -> Results state machine
//! - `api`: The import API client
//! - `export`: CSV template and record export
//! - `history`: Log of completed imports
//! - `display`: Plain-text rendering for the CLI
//! - `cli`: Command handlers
//! - `tui`: The interactive wizard
//! - `logging`: tracing subscriber setup
//!
//! # Example
//!
//! ```rust,ignore
//! use cscx_import::models::Schema;
//! use cscx_import::wizard::ImportWizard;
//!
//! let mut wizard = ImportWizard::new(Schema::customers(), "default");
//! wizard.load_upload("customers.csv", text.len() as u64, &text)?;
//! let preview = wizard.enter_preview()?;
//! println!("{} records ready", preview.record_count());
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod history;
pub mod logging;
pub mod models;
pub mod services;
pub mod tui;
pub mod wizard;

pub use error::{CscxError, CscxResult};
