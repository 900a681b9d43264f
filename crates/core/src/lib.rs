//! # PK/PD Core
//!
//! Core business logic for the drug release-profile reporter.
//!
//! This crate contains pure, stateless lookup operations:
//! - Drug registry validation and autocomplete search
//! - Suffix-based classification into profile categories
//! - Constant PK/PD release-profile tables with named overrides
//! - Narrative/recommendation template selection
//! - Report assembly into one immutable aggregate
//!
//! **No API concerns**: HTTP serving, CLI parsing, and file export belong in
//! the `pkpd-run` binary, `pkpd-cli`, and `pkpd-export`.

pub mod classifier;
pub mod config;
pub mod constants;
pub mod error;
pub mod narrative;
pub mod profiles;
pub mod registry;
pub mod report;
pub mod validation;

pub use classifier::{classify, Category};
pub use config::ServerConfig;
pub use error::{AnalysisError, CoreResult};
pub use profiles::{ProfileStore, ReleaseProfile};
pub use registry::DrugRegistry;
pub use report::{AnalysisReport, AnalysisType, AnalyzerService, ReleaseTable};
