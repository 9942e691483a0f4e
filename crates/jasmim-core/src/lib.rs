//! # jasmim-core
//!
//! Core types, errors, and defaults for jasmim.
//!
//! This crate provides:
//! - The analysis request/response domain model
//! - The shared error taxonomy
//! - Centralized default constants

pub mod defaults;
pub mod error;
pub mod models;

pub use error::{Error, Result};
pub use models::{
    AnalysisType, Diagnostico, HealthStatus, Identificacao, PassoDeAcao, PlanoDeAcao,
    PlantAnalysis, Saude,
};
