use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};

use pkpd_core::{AnalysisType, AnalyzerService, ServerConfig};
use pkpd_export::{export_filename, write_pdf, write_workbook};

#[derive(Parser)]
#[command(name = "pkpd")]
#[command(about = "Drug PK/PD release-profile analysis CLI")]
struct Cli {
    /// Name of the drug to analyse
    drug_name: Option<String>,
    /// Analysis type
    #[arg(long = "type", value_enum, default_value_t = TypeArg::Comprehensive)]
    analysis_type: TypeArg,
    /// Output file path
    #[arg(long, short)]
    output: Option<PathBuf>,
    /// Output format
    #[arg(long, value_enum, default_value_t = FormatArg::Text)]
    format: FormatArg,
    /// List available drugs and exit
    #[arg(long)]
    list_drugs: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum TypeArg {
    Comprehensive,
    Comparison,
    Clinical,
}

impl From<TypeArg> for AnalysisType {
    fn from(arg: TypeArg) -> Self {
        match arg {
            TypeArg::Comprehensive => AnalysisType::Comprehensive,
            TypeArg::Comparison => AnalysisType::Comparison,
            TypeArg::Clinical => AnalysisType::Clinical,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Excel,
    Pdf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let service = AnalyzerService::new();

    // --list-drugs wins over everything else and never fails.
    if cli.list_drugs {
        println!("Available drugs:");
        for (i, drug) in service.registry().names().iter().enumerate() {
            println!("{:3}. {}", i + 1, drug);
        }
        return Ok(());
    }

    let Some(drug_name) = cli.drug_name.as_deref() else {
        bail!("a drug name is required (or pass --list-drugs)");
    };

    // Same startup contract as the server: refuse to run unconfigured.
    dotenvy::dotenv().ok();
    ServerConfig::new(None, None, None, std::env::var("PKPD_API_KEY").ok())?;

    println!("Analyzing {drug_name}...");
    let report = service.analyze(drug_name, cli.analysis_type.into())?;

    match cli.format {
        FormatArg::Text => {
            if let Some(path) = &cli.output {
                fs::write(path, &report.content)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                println!("Results saved to {}", path.display());
            } else {
                println!();
                println!("{}", "=".repeat(60));
                println!("Analysis Results: {} ({})", drug_name, report.analysis_type);
                println!("{}", "=".repeat(60));
                println!("{}", report.content);
            }
        }
        FormatArg::Excel => {
            let bytes = write_workbook(&report)?;
            let path = cli
                .output
                .clone()
                .unwrap_or_else(|| PathBuf::from(export_filename(drug_name, "xlsx")));
            fs::write(&path, bytes)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Excel file saved to {}", path.display());
        }
        FormatArg::Pdf => {
            let bytes = write_pdf(&report)?;
            let path = cli
                .output
                .clone()
                .unwrap_or_else(|| PathBuf::from(export_filename(drug_name, "pdf")));
            fs::write(&path, bytes)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("PDF file saved to {}", path.display());
        }
    }

    Ok(())
}
