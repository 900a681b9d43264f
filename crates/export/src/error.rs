#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("drug name is required for export")]
    MissingDrugName,
    #[error("table data is missing or empty")]
    EmptyTable,
    #[error("malformed table data: {0}")]
    MalformedTable(String),
    #[error("failed to build workbook: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),
    #[error("failed to render PDF: {0}")]
    Pdf(String),
}

pub type ExportResult<T> = std::result::Result<T, ExportError>;
