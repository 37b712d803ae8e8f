//! Output formatting module.
//!
//! Renders scan results as text, CSV or JSON and writes them to a file
//! whose location depends on the runtime environment.

mod csv_format;
mod json_format;
mod path;
mod plain;

pub use csv_format::render_csv;
pub use json_format::render_json;
pub use path::{generate_file_name, resolve_output_path, CONTAINER_OUTPUT_DIR, FILE_NAME_FORMAT};
pub use plain::{print_error, print_scan_header, print_summary, print_warning, render_txt};

use crate::error::{OutputError, OutputResult};
use crate::scanner::PortResult;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

/// Output format for exported results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Fixed-width text table
    #[default]
    Txt,
    /// JSON array of port results
    Json,
    /// CSV with a header row
    Csv,
}

impl OutputFormat {
    /// File extension including the leading dot.
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Txt => ".txt",
            Self::Json => ".json",
            Self::Csv => ".csv",
        }
    }

    /// Parse a format name, falling back to text for anything unknown.
    pub fn parse_or_default(name: &str) -> Self {
        name.parse().unwrap_or_else(|e| {
            debug!(error = %e, "using txt output format");
            Self::default()
        })
    }

    /// Render results in this format.
    pub fn render(self, results: &[PortResult]) -> OutputResult<String> {
        match self {
            Self::Txt => Ok(render_txt(results)),
            Self::Json => render_json(results),
            Self::Csv => render_csv(results),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Txt => write!(f, "txt"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = OutputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "txt" => Ok(Self::Txt),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(OutputError::InvalidFormat(s.to_string())),
        }
    }
}

/// Render `results`, resolve the destination and write the file.
///
/// Returns the path written to.
pub fn export(
    results: &[PortResult],
    format: OutputFormat,
    output: &str,
    dockerized: bool,
) -> OutputResult<PathBuf> {
    let content = format.render(results)?;
    let path = resolve_output_path(output, format.extension(), dockerized);
    write_to_file(&path, &content)?;
    debug!(path = %path.display(), %format, results = results.len(), "results exported");
    Ok(path)
}

/// Write `content` to `path`, creating parent directories as needed.
pub fn write_to_file(path: &Path, content: &str) -> OutputResult<()> {
    let write_err = |source: std::io::Error| OutputError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(write_err)?;
    }

    fs::write(path, content).map_err(write_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Port;

    fn sample() -> Vec<PortResult> {
        [(80, true), (443, false), (8080, true)]
            .iter()
            .map(|&(p, open)| PortResult::new(Port::new(p).unwrap(), open))
            .collect()
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("CSV".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("Txt".parse::<OutputFormat>().unwrap(), OutputFormat::Txt);
        assert!(matches!(
            "xml".parse::<OutputFormat>(),
            Err(OutputError::InvalidFormat(_))
        ));
        assert_eq!(OutputFormat::parse_or_default("unknown"), OutputFormat::Txt);
    }

    #[test]
    fn test_format_extensions() {
        assert_eq!(OutputFormat::Txt.extension(), ".txt");
        assert_eq!(OutputFormat::Json.extension(), ".json");
        assert_eq!(OutputFormat::Csv.extension(), ".csv");
    }

    #[test]
    fn test_render_never_empty() {
        for format in [OutputFormat::Txt, OutputFormat::Json, OutputFormat::Csv] {
            assert!(!format.render(&[]).unwrap().is_empty());
            assert!(!format.render(&sample()).unwrap().is_empty());
        }
    }

    #[test]
    fn test_export_writes_each_format() {
        let dir = tempfile::tempdir().unwrap();

        for format in [OutputFormat::Txt, OutputFormat::Json, OutputFormat::Csv] {
            let target = dir.path().join("nested").join("scan");
            let path = export(&sample(), format, &target.to_string_lossy(), false).unwrap();

            assert_eq!(path, target.with_extension(&format.extension()[1..]));
            let content = fs::read_to_string(&path).unwrap();
            assert!(content.contains("8080"));
        }
    }

    #[test]
    fn test_write_to_file_reports_path_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "x").unwrap();

        let err = write_to_file(&blocker.join("child.txt"), "data").unwrap_err();
        assert!(matches!(err, OutputError::Write { .. }));
    }
}
