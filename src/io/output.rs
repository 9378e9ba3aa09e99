use crate::detection::DuplicateReport;
use crate::formatting::{FormattingConfig, ReportStyle};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

/// What a writer needs besides the report itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunSummary {
    pub files_analyzed: usize,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &DuplicateReport, summary: &RunSummary) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    files_analyzed: usize,
    duplicates: Vec<&'a crate::detection::DuplicateEntry>,
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &DuplicateReport, summary: &RunSummary) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(&JsonReport {
            files_analyzed: summary.files_analyzed,
            duplicates: report.iter().collect(),
        })?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    style: ReportStyle,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, formatting: FormattingConfig) -> Self {
        Self {
            writer,
            style: ReportStyle::new(formatting),
        }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &DuplicateReport, _summary: &RunSummary) -> anyhow::Result<()> {
        if report.is_empty() {
            writeln!(self.writer, "No duplications")?;
            self.writer.flush()?;
            return Ok(());
        }

        writeln!(self.writer, "{}", self.style.header("Duplications:"))?;
        writeln!(self.writer)?;
        for entry in report {
            writeln!(
                self.writer,
                "{}   {}",
                self.style.marker(),
                self.style.name(&entry.name)
            )?;
            for occurrence in &entry.occurrences {
                writeln!(
                    self.writer,
                    "    {}",
                    self.style.location(&occurrence.to_string())
                )?;
            }
            writeln!(self.writer)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

pub fn create_writer(
    format: OutputFormat,
    output: Option<PathBuf>,
    formatting: FormattingConfig,
) -> anyhow::Result<Box<dyn OutputWriter>> {
    let sink: Box<dyn Write> = match output {
        Some(path) => Box::new(std::io::BufWriter::new(std::fs::File::create(&path)?)),
        None => Box::new(std::io::stdout()),
    };
    Ok(match format {
        OutputFormat::Json => Box::new(JsonWriter::new(sink)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(sink, formatting)),
    })
}
