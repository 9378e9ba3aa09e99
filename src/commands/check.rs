use crate::analysis::AnalysisPass;
use crate::config::{self, ProjectConfig};
use crate::detection::{DuplicateDetector, DuplicateReport};
use crate::formatting::FormattingConfig;
use crate::io::{self, OutputFormat, RunSummary, SourceSetResolver};
use anyhow::{Context, Result};
use std::path::PathBuf;

pub struct CheckConfig {
    pub path: PathBuf,
    pub whitelist: Vec<String>,
    pub ignore: Vec<String>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub config_file: Option<PathBuf>,
    pub no_parallel: bool,
    pub formatting_config: FormattingConfig,
}

/// Result of a completed check.
#[derive(Debug)]
pub struct CheckOutcome {
    pub files_analyzed: usize,
    pub report: DuplicateReport,
}

impl CheckOutcome {
    pub fn has_duplicates(&self) -> bool {
        !self.report.is_empty()
    }
}

/// Resolve, analyze, detect and write the report.
pub fn handle_check(config: CheckConfig) -> Result<CheckOutcome> {
    let project = load_project_config(&config)?.merge_cli(
        &config.whitelist,
        &config.ignore,
        config.no_parallel,
    );

    let sources = SourceSetResolver::new(&config.path)
        .with_ignore_patterns(&project.ignore)
        .context("Invalid ignore pattern")?
        .resolve()
        .with_context(|| format!("Failed to collect sources under {}", config.path.display()))?;
    let files_analyzed = sources.len();
    log::info!(
        "Checking {} files under {}",
        files_analyzed,
        config.path.display()
    );

    let files = AnalysisPass::new(project.parallel).run(sources)?;
    let detector = DuplicateDetector::new(project.whitelist.iter().cloned().collect());
    let report = detector.detect(&files);

    let mut writer = io::create_writer(config.format, config.output.clone(), config.formatting_config)
        .context("Failed to open output")?;
    writer.write_report(&report, &RunSummary { files_analyzed })?;

    Ok(CheckOutcome {
        files_analyzed,
        report,
    })
}

fn load_project_config(config: &CheckConfig) -> Result<ProjectConfig> {
    match &config.config_file {
        Some(path) => Ok(config::load_config_file(path)?),
        None => Ok(config::discover_config(&config.path)),
    }
}
