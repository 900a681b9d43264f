//! # PK/PD Export
//!
//! File exporters for analysis reports.
//!
//! Both exporters consume an [`AnalysisReport`](pkpd_core::AnalysisReport)
//! read-only and serialize entirely in memory; a malformed table or missing
//! drug name fails the whole export; no partial file is ever produced.
//!
//! - [`excel`]: two-sheet `.xlsx` workbook (metadata + release-profile table)
//! - [`pdf`]: paginated A4 report with a styled table

pub mod error;
pub mod excel;
pub mod pdf;

pub use error::{ExportError, ExportResult};
pub use excel::write_workbook;
pub use pdf::write_pdf;

use pkpd_core::AnalysisReport;

/// Attachment filename: drug name (spaces to underscores) plus a timestamp.
pub fn export_filename(drug_name: &str, extension: &str) -> String {
    let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    format!("{}_pk_pd_{}.{}", drug_name.replace(' ', "_"), stamp, extension)
}

/// Shared preconditions for both exporters.
pub(crate) fn validate_report(report: &AnalysisReport) -> ExportResult<()> {
    if report.drug_name.trim().is_empty() {
        return Err(ExportError::MissingDrugName);
    }

    let table = &report.table_data;
    if table.structured_data.is_empty() {
        return Err(ExportError::EmptyTable);
    }
    if !table.is_well_formed() {
        return Err(ExportError::MalformedTable(format!(
            "expected a header plus {} rows of {} cells",
            pkpd_core::constants::PARAMETERS.len(),
            1 + pkpd_core::constants::FORMULATIONS.len(),
        )));
    }

    Ok(())
}

#[cfg(test)]
pub(crate) mod test_support {
    use pkpd_core::{AnalysisReport, AnalysisType, AnalyzerService};

    pub fn sample_report(drug: &str) -> AnalysisReport {
        AnalyzerService::new()
            .analyze(drug, AnalysisType::Comprehensive)
            .expect("sample drug should analyze")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_report;

    #[test]
    fn filename_embeds_drug_and_extension() {
        let name = export_filename("Metformin", "xlsx");
        assert!(name.starts_with("Metformin_pk_pd_"));
        assert!(name.ends_with(".xlsx"));
    }

    #[test]
    fn filename_replaces_spaces() {
        let name = export_filename("flotufolastat F 18", "pdf");
        assert!(name.starts_with("flotufolastat_F_18_pk_pd_"));
    }

    #[test]
    fn validation_rejects_blank_drug_names() {
        let mut report = sample_report("Aspirin");
        report.drug_name = "  ".into();
        assert!(matches!(
            validate_report(&report),
            Err(ExportError::MissingDrugName)
        ));
    }

    #[test]
    fn validation_rejects_empty_and_ragged_tables() {
        let mut report = sample_report("Aspirin");
        report.table_data.structured_data[5].push("extra".into());
        assert!(matches!(
            validate_report(&report),
            Err(ExportError::MalformedTable(_))
        ));

        report.table_data.structured_data.clear();
        assert!(matches!(
            validate_report(&report),
            Err(ExportError::EmptyTable)
        ));
    }
}
