//! Report assembly.
//!
//! [`AnalyzerService`] is the single entry point used by the HTTP and CLI
//! surfaces: it validates a drug name against the registry, then composes the
//! classifier, profile store, and narrative templates into one immutable
//! [`AnalysisReport`]. Pure data operations, no API concerns.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::constants::{FORMULATIONS, PARAMETERS, PARAMETER_COLUMN};
use crate::profiles::{ProfileStore, ReleaseProfile};
use crate::registry::DrugRegistry;
use crate::validation::validate_drug_name_well_formed;
use crate::{narrative, AnalysisError, CoreResult};

/// Cosmetic analysis focus carried through to the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisType {
    Comprehensive,
    Comparison,
    Clinical,
}

impl Default for AnalysisType {
    fn default() -> Self {
        Self::Comprehensive
    }
}

impl fmt::Display for AnalysisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Self::Comprehensive => "comprehensive",
            Self::Comparison => "comparison",
            Self::Clinical => "clinical",
        };
        f.write_str(tag)
    }
}

/// The release-profile table in its wire shape.
///
/// `structured_data` holds the header row followed by the 11 data rows; the
/// `parameters` and `formulations` lists repeat the fixed axes for consumers
/// that want them without slicing the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ReleaseTable {
    /// Header row followed by one row per parameter.
    pub structured_data: Vec<Vec<String>>,
    /// Parameter names, in row order.
    #[serde(default)]
    pub parameters: Vec<String>,
    /// Formulation tags, in column order.
    #[serde(default)]
    pub formulations: Vec<String>,
}

impl ReleaseTable {
    /// Build the wire table from a constant profile.
    pub fn from_profile(profile: &ReleaseProfile) -> Self {
        let mut header = Vec::with_capacity(1 + FORMULATIONS.len());
        header.push(PARAMETER_COLUMN.to_string());
        header.extend(FORMULATIONS.iter().map(|f| f.to_string()));

        let mut structured_data = Vec::with_capacity(1 + PARAMETERS.len());
        structured_data.push(header);
        for (parameter, values) in PARAMETERS.iter().zip(profile.rows()) {
            let mut row = Vec::with_capacity(1 + values.len());
            row.push(parameter.to_string());
            row.extend(values.iter().map(|v| v.to_string()));
            structured_data.push(row);
        }

        Self {
            structured_data,
            parameters: PARAMETERS.iter().map(|p| p.to_string()).collect(),
            formulations: FORMULATIONS.iter().map(|f| f.to_string()).collect(),
        }
    }

    /// The header row, if present.
    pub fn header(&self) -> Option<&[String]> {
        self.structured_data.first().map(Vec::as_slice)
    }

    /// The data rows (everything after the header).
    pub fn data_rows(&self) -> &[Vec<String>] {
        self.structured_data.get(1..).unwrap_or(&[])
    }

    /// Whether the grid has the full fixed shape: a header plus one row per
    /// parameter, every row one cell per formulation plus the leading name.
    pub fn is_well_formed(&self) -> bool {
        let width = 1 + FORMULATIONS.len();
        self.structured_data.len() == 1 + PARAMETERS.len()
            && self.structured_data.iter().all(|row| row.len() == width)
    }
}

/// The output aggregate: narrative, bibliography, and structured table.
///
/// Constructed fresh per request and immutable once returned.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AnalysisReport {
    /// The validated drug name.
    pub drug_name: String,
    /// Requested analysis focus.
    pub analysis_type: AnalysisType,
    /// What the drug is and how it works.
    pub explanation: String,
    /// Best release formulation recommendation.
    pub recommendation: String,
    /// Bibliography block.
    pub references: String,
    /// Explanation, recommendation, and references concatenated.
    pub content: String,
    /// Release-profile table.
    pub table_data: ReleaseTable,
}

/// Stateless analysis service shared across request handlers.
///
/// All lookup data is read-only after construction, so clones share the same
/// registry and profile store by reference.
#[derive(Clone, Default)]
pub struct AnalyzerService {
    registry: Arc<DrugRegistry>,
    profiles: Arc<ProfileStore>,
}

impl AnalyzerService {
    /// Create a service backed by the built-in registry and profiles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a service with an explicit registry (the registry is swappable
    /// configuration; the profile overrides are not).
    pub fn with_registry(registry: DrugRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
            profiles: Arc::new(ProfileStore::new()),
        }
    }

    pub fn registry(&self) -> &DrugRegistry {
        &self.registry
    }

    /// Autocomplete search with the default result cap.
    pub fn search(&self, query: &str) -> Vec<String> {
        self.registry
            .suggest(query)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Validate a drug name: structural guardrails plus registry membership.
    ///
    /// Registry membership is authoritative: a well-formed name that is not
    /// on the allow-list is rejected.
    pub fn validate(&self, name: &str) -> CoreResult<()> {
        validate_drug_name_well_formed(name)?;
        if !self.registry.is_known(name) {
            return Err(AnalysisError::InvalidName(format!(
                "'{name}' is not a known drug; pick a name from the suggestions"
            )));
        }
        Ok(())
    }

    /// Assemble the full report for a validated drug name.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidName` when the name fails validation;
    /// assembly itself cannot fail.
    pub fn analyze(&self, name: &str, analysis_type: AnalysisType) -> CoreResult<AnalysisReport> {
        self.validate(name)?;

        tracing::debug!(drug = %name, category = ?crate::classify(name), "assembling report");

        let explanation = narrative::explain(name);
        let recommendation = narrative::recommend(name);
        let references = narrative::references(name);
        let content = format!("{explanation}\n\n{recommendation}\n\n{references}");
        let table_data = ReleaseTable::from_profile(self.profiles.table_for(name));

        Ok(AnalysisReport {
            drug_name: name.to_string(),
            analysis_type,
            explanation,
            recommendation,
            references,
            content,
            table_data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_rejects_unknown_names() {
        let service = AnalyzerService::new();
        let err = service
            .analyze("NotARealDrug", AnalysisType::Comprehensive)
            .unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidName(_)));
    }

    #[test]
    fn analyze_rejects_malformed_names_before_the_registry() {
        let service = AnalyzerService::new();
        assert!(service.validate("").is_err());
        assert!(service.validate(&"x".repeat(51)).is_err());
        assert!(service.validate("Metformin; --").is_err());
    }

    #[test]
    fn metformin_report_matches_expected_constants() {
        let service = AnalyzerService::new();
        let report = service
            .analyze("Metformin", AnalysisType::Comprehensive)
            .unwrap();

        assert_eq!(report.drug_name, "Metformin");
        assert_eq!(report.analysis_type, AnalysisType::Comprehensive);
        assert!(report.explanation.contains("antidiabetic"));

        let kinetics = report
            .table_data
            .data_rows()
            .iter()
            .find(|row| row[0] == "Kinetics")
            .unwrap();
        assert_eq!(
            kinetics[1..],
            ["First-order", "Zero-order", "Mixed-order", "Zero-order", "First-order", "Targeted"]
                .map(String::from)
        );
    }

    #[test]
    fn report_table_has_full_shape() {
        let service = AnalyzerService::new();
        let report = service
            .analyze("Aspirin", AnalysisType::Clinical)
            .unwrap();

        let table = &report.table_data;
        assert!(table.is_well_formed());
        assert_eq!(
            table.header().unwrap(),
            ["Parameter", "IR", "SR", "CR", "PR", "DR", "Targeted"]
        );
        assert_eq!(table.data_rows().len(), 11);
    }

    #[test]
    fn content_concatenates_the_narrative_blocks() {
        let service = AnalyzerService::new();
        let report = service
            .analyze("Lisinopril", AnalysisType::Comparison)
            .unwrap();
        assert_eq!(
            report.content,
            format!(
                "{}\n\n{}\n\n{}",
                report.explanation, report.recommendation, report.references
            )
        );
    }

    #[test]
    fn every_registry_name_analyzes_successfully() {
        let service = AnalyzerService::new();
        for name in service.registry().names().to_vec() {
            let report = service.analyze(&name, AnalysisType::default()).unwrap();
            assert!(report.table_data.is_well_formed(), "{name}");
        }
    }

    #[test]
    fn well_formed_check_catches_ragged_grids() {
        let service = AnalyzerService::new();
        let mut table = service
            .analyze("Aspirin", AnalysisType::default())
            .unwrap()
            .table_data;
        table.structured_data[3].pop();
        assert!(!table.is_well_formed());
        table.structured_data.clear();
        assert!(!table.is_well_formed());
    }
}
