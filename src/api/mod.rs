//! Customer import API
//!
//! The wizard talks to the platform through the `ImportApi` trait;
//! `HttpImportClient` is the reqwest implementation.

pub mod client;

pub use client::{ApiError, HttpImportClient, ImportApi, ImportRequest};
