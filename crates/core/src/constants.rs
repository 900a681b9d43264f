//! Constants used throughout the PK/PD core crate.
//!
//! This module contains the fixed table dimensions and input limits to ensure
//! consistency across the codebase and make maintenance easier.

/// PK/PD parameter names, in fixed table row order.
pub const PARAMETERS: [&str; 11] = [
    "Dissolution Rate",
    "Disintegration Time",
    "Kinetics",
    "Cmax",
    "Tmax",
    "AUC",
    "Half-life",
    "Onset of Action",
    "Duration of Action",
    "Side Effects",
    "Stability Studies",
];

/// Release formulation tags, in fixed table column order.
pub const FORMULATIONS: [&str; 6] = ["IR", "SR", "CR", "PR", "DR", "Targeted"];

/// Title of the leading table column.
pub const PARAMETER_COLUMN: &str = "Parameter";

/// Maximum accepted drug-name length, in characters.
pub const MAX_DRUG_NAME_LEN: usize = 50;

/// Queries shorter than this return no search results.
pub const MIN_SEARCH_QUERY_LEN: usize = 2;

/// Maximum number of names returned by a registry search.
pub const SEARCH_RESULT_LIMIT: usize = 10;
