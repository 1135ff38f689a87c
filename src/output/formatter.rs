//! Output formatters for lookups and registry listings
//!
//! Provides Table, JSON, YAML, and CSV output formats.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::models::{FormatEntry, Resolution};

/// Output format options
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    JsonPretty,
    Yaml,
    Csv,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "table" => Some(OutputFormat::Table),
            "json" => Some(OutputFormat::Json),
            "json-pretty" | "jsonpretty" => Some(OutputFormat::JsonPretty),
            "yaml" | "yml" => Some(OutputFormat::Yaml),
            "csv" => Some(OutputFormat::Csv),
            _ => None,
        }
    }
}

/// Formatter for resolver output
pub struct EntryFormatter {
    format: OutputFormat,
    colorize: bool,
}

impl EntryFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            colorize: true,
        }
    }

    pub fn no_color(mut self) -> Self {
        self.colorize = false;
        self
    }

    /// Format lookup results.
    ///
    /// Table output prints each resolved string on its own line, with an
    /// empty line for unknown identifiers.
    pub fn format_resolutions(&self, resolutions: &[Resolution]) -> Result<String> {
        match self.format {
            OutputFormat::Table => Ok(resolutions
                .iter()
                .map(|r| format!("{}\n", r.output_or_empty()))
                .collect()),
            OutputFormat::Csv => {
                let rows = resolutions.iter().map(|r| {
                    [
                        r.identifier.as_str(),
                        r.output_or_empty(),
                        if r.is_found() { "true" } else { "false" },
                    ]
                });
                write_csv(&["identifier", "output", "found"], rows)
            }
            _ => self.serialize(resolutions),
        }
    }

    /// Format a registry listing
    pub fn format_entries(&self, entries: &[FormatEntry]) -> Result<String> {
        match self.format {
            OutputFormat::Table => Ok(self.format_entries_table(entries)),
            OutputFormat::Csv => {
                let rows = entries
                    .iter()
                    .map(|e| [e.identifier.as_str(), e.output.as_str()]);
                write_csv(&["identifier", "output"], rows)
            }
            _ => self.serialize(entries),
        }
    }

    fn format_entries_table(&self, entries: &[FormatEntry]) -> String {
        let width = entries
            .iter()
            .map(|e| e.identifier.len())
            .max()
            .unwrap_or(0)
            .max("Identifier".len());

        let mut output = String::new();
        output.push_str(&format!("{:width$}  Output\n", "Identifier"));
        output.push_str(&format!("{}  {}\n", "─".repeat(width), "─".repeat(10)));

        for entry in entries {
            let id = format!("{:width$}", entry.identifier);
            let id = if self.colorize && !entry.is_builtin() {
                format!("\x1b[36m{id}\x1b[0m")
            } else {
                id
            };
            output.push_str(&format!("{}  {}\n", id, entry.output));
        }

        output
    }

    fn serialize<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        match self.format {
            OutputFormat::Json => serde_json::to_string(value).context("Failed to serialize JSON"),
            OutputFormat::Yaml => serde_yaml::to_string(value).context("Failed to serialize YAML"),
            _ => serde_json::to_string_pretty(value).context("Failed to serialize JSON"),
        }
    }
}

impl Default for EntryFormatter {
    fn default() -> Self {
        Self::new(OutputFormat::Table)
    }
}

fn write_csv<'a, R>(header: &[&str], rows: impl Iterator<Item = R>) -> Result<String>
where
    R: IntoIterator<Item = &'a str>,
{
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(header)?;
    for row in rows {
        writer.write_record(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV output: {}", e.error()))?;
    String::from_utf8(bytes).context("CSV output is not valid UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Resolution> {
        vec![Resolution::found("json", "{}"), Resolution::missing("pdf")]
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::from_str("json"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_str("TABLE"), Some(OutputFormat::Table));
        assert_eq!(OutputFormat::from_str("yml"), Some(OutputFormat::Yaml));
        assert_eq!(OutputFormat::from_str("unknown"), None);
    }

    #[test]
    fn test_formatter_creation() {
        let formatter = EntryFormatter::new(OutputFormat::Json).no_color();
        assert_eq!(formatter.format, OutputFormat::Json);
        assert!(!formatter.colorize);
    }

    #[test]
    fn test_resolutions_table() {
        let output = EntryFormatter::default()
            .format_resolutions(&sample())
            .unwrap();
        assert_eq!(output, "{}\n\n");
    }

    #[test]
    fn test_resolutions_json() {
        let output = EntryFormatter::new(OutputFormat::Json)
            .format_resolutions(&sample())
            .unwrap();
        assert_eq!(
            output,
            r#"[{"identifier":"json","output":"{}"},{"identifier":"pdf","output":null}]"#
        );
    }

    #[test]
    fn test_resolutions_csv() {
        let output = EntryFormatter::new(OutputFormat::Csv)
            .format_resolutions(&sample())
            .unwrap();
        assert_eq!(output, "identifier,output,found\njson,{},true\npdf,,false\n");
    }

    #[test]
    fn test_entries_csv_quotes_separator() {
        let entries = vec![FormatEntry::new("csv", ",")];
        let output = EntryFormatter::new(OutputFormat::Csv)
            .format_entries(&entries)
            .unwrap();
        assert_eq!(output, "identifier,output\ncsv,\",\"\n");
    }

    #[test]
    fn test_entries_yaml() {
        let entries = vec![FormatEntry::new("xml", "<xml/>")];
        let output = EntryFormatter::new(OutputFormat::Yaml)
            .format_entries(&entries)
            .unwrap();
        assert!(output.contains("identifier: xml"));
        assert!(output.contains("output: <xml/>"));
    }

    #[test]
    fn test_entries_table() {
        let entries = vec![
            FormatEntry::new("json", "{}"),
            FormatEntry::new("toml", "+++"),
        ];
        let output = EntryFormatter::default()
            .no_color()
            .format_entries(&entries)
            .unwrap();
        assert!(output.starts_with("Identifier  Output\n"));
        assert!(output.contains("json        {}\n"));
        assert!(output.contains("toml        +++\n"));
        assert!(!output.contains("\x1b["));
    }
}
