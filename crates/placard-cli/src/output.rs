//! Output formatting for scan, register, and show results.

use crate::cli::CliFormat;
use crate::error::Result;
use colored::Colorize;
use placard_domain::{PartialRecord, RecordCode, ValidationReport, VehicleField, VehicleRecord};
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "Field")]
    field: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

/// Formats command results as a table or JSON.
pub struct Formatter {
    format: CliFormat,
}

impl Formatter {
    /// Create a formatter for the given output format.
    pub fn new(format: CliFormat) -> Self {
        Self { format }
    }

    /// Print an extraction result together with its validation report.
    pub fn scan_result(&self, record: &PartialRecord, report: &ValidationReport) -> Result<()> {
        match self.format {
            CliFormat::Json => {
                let mut fields = serde_json::Map::new();
                for field in VehicleField::ALL {
                    fields.insert(
                        field.name().to_string(),
                        match record.get(field) {
                            Some(v) => v.into(),
                            None => serde_json::Value::Null,
                        },
                    );
                }
                let value = serde_json::json!({
                    "fields": fields,
                    "valid": report.valid,
                    "missing_fields": report
                        .missing_fields
                        .iter()
                        .map(|f| f.name())
                        .collect::<Vec<_>>(),
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            }
            CliFormat::Table => {
                let rows: Vec<FieldRow> = VehicleField::ALL
                    .iter()
                    .map(|f| FieldRow {
                        field: f.name(),
                        value: record.get(*f).unwrap_or("-").to_string(),
                    })
                    .collect();
                let mut table = Table::new(rows);
                table.with(Style::rounded());
                println!("{}", table);

                if report.valid {
                    println!("{}", "All required fields recognized.".green());
                } else {
                    let missing: Vec<&str> =
                        report.missing_fields.iter().map(|f| f.name()).collect();
                    println!(
                        "{} {}",
                        "Please complete these fields manually:".yellow(),
                        missing.join(", ")
                    );
                }
            }
        }
        Ok(())
    }

    /// Print the outcome of a successful registration.
    pub fn registered(&self, code: &RecordCode, share_url: &str) -> Result<()> {
        match self.format {
            CliFormat::Json => {
                let value = serde_json::json!({
                    "code": code.as_str(),
                    "share_url": share_url,
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            }
            CliFormat::Table => {
                println!("Registered under code {}", code.as_str().bold());
                println!("Share link: {}", share_url);
            }
        }
        Ok(())
    }

    /// Print a stored record.
    pub fn record(&self, record: &VehicleRecord) -> Result<()> {
        match self.format {
            CliFormat::Json => {
                let mut map = serde_json::Map::new();
                map.insert("code".to_string(), record.code.as_str().into());
                for field in VehicleField::ALL {
                    map.insert(field.name().to_string(), record.field(field).into());
                }
                map.insert(
                    "registered_at".to_string(),
                    record.registered_at.as_str().into(),
                );
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::Value::Object(map))?
                );
            }
            CliFormat::Table => {
                let mut rows = vec![FieldRow {
                    field: "code",
                    value: record.code.as_str().to_string(),
                }];
                rows.extend(VehicleField::ALL.iter().map(|f| FieldRow {
                    field: f.name(),
                    value: record.field(*f).to_string(),
                }));
                rows.push(FieldRow {
                    field: "registered_at",
                    value: record.registered_at.clone(),
                });
                let mut table = Table::new(rows);
                table.with(Style::rounded());
                println!("{}", table);
            }
        }
        Ok(())
    }
}
