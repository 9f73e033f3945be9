//! CSV Data Loader Module
//! Turns an uploaded file into a [`Dataset`]: encoding detection, CSV parsing
//! with Polars, and splitting of the combined column into typed fields.

use super::encoding::{self, DecodedText};
use super::record::{Dataset, Gender, SickLeaveRecord};
use crate::config::{AGE_COLUMN, COMBINED_COLUMN, SICK_DAYS_COLUMN};
use polars::prelude::*;
use std::io::Cursor;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),
    #[error("File is empty")]
    EmptyInput,
    #[error("File is not valid {encoding} text")]
    Decode { encoding: &'static str },
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("Expected column '{expected}' not found")]
    MissingColumn { expected: String },
    #[error("Row {row}: expected 3 comma-separated values, found {fields}")]
    MalformedRow { row: usize, fields: usize },
    #[error("Row {row}: column '{column}' value '{value}' is not an integer")]
    InvalidInteger {
        column: &'static str,
        row: usize,
        value: String,
    },
    #[error("Row {row}: unknown gender '{value}'")]
    InvalidGender { row: usize, value: String },
}

/// Loads sick-leave CSV files.
pub struct DataLoader;

impl DataLoader {
    /// Read a file from disk and parse it.
    pub fn load_file(path: &Path) -> Result<Dataset, LoaderError> {
        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        Self::load_bytes(&bytes, &name)
    }

    /// Detect the encoding of `bytes`, decode and parse them.
    pub fn load_bytes(bytes: &[u8], source_name: &str) -> Result<Dataset, LoaderError> {
        let result = encoding::decode(bytes).and_then(|decoded| {
            let encoding = decoded.encoding.name();
            let records = Self::parse_text(decoded)?;
            Ok(Dataset::new(records, source_name, encoding))
        });

        match &result {
            Ok(dataset) => info!(
                source = source_name,
                encoding = dataset.encoding(),
                rows = dataset.len(),
                "dataset loaded"
            ),
            Err(e) => warn!(source = source_name, error = %e, "failed to load dataset"),
        }
        result
    }

    /// Parse decoded text. The header must be the single combined column.
    pub fn parse_text(decoded: DecodedText) -> Result<Vec<SickLeaveRecord>, LoaderError> {
        // Every column is read as a string; typing happens after the split
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(Some(0))
            .into_reader_with_file_handle(Cursor::new(decoded.text.into_bytes()))
            .finish()?;

        let column = df
            .get_columns()
            .iter()
            .find(|col| Self::is_combined_header(col.name().as_str()))
            .ok_or_else(|| LoaderError::MissingColumn {
                expected: COMBINED_COLUMN.to_string(),
            })?;

        let values = column.as_materialized_series().str()?;

        values
            .into_iter()
            .enumerate()
            .map(|(i, value)| Self::parse_row(i + 1, value.unwrap_or_default()))
            .collect()
    }

    /// Header names may still carry the CSV quoting, depending on the reader.
    fn is_combined_header(name: &str) -> bool {
        let name = name.trim_start_matches('\u{feff}').trim();
        let name = if name.len() >= 2 && name.starts_with('"') && name.ends_with('"') {
            &name[1..name.len() - 1]
        } else {
            name
        };
        name.replace("\"\"", "\"") == COMBINED_COLUMN
    }

    /// Split one combined field into a record. `row` is 1-based.
    fn parse_row(row: usize, value: &str) -> Result<SickLeaveRecord, LoaderError> {
        let fields: Vec<&str> = value.split(',').collect();
        let [sick_days, age, gender] = fields.as_slice() else {
            return Err(LoaderError::MalformedRow {
                row,
                fields: if value.is_empty() { 0 } else { fields.len() },
            });
        };

        let sick_days = Self::parse_integer(row, SICK_DAYS_COLUMN, sick_days)?;
        let age = Self::parse_integer(row, AGE_COLUMN, age)?;

        let gender_label = gender.replace('"', "");
        let gender = gender_label
            .parse::<Gender>()
            .map_err(|_| LoaderError::InvalidGender {
                row,
                value: gender_label.trim().to_string(),
            })?;

        Ok(SickLeaveRecord::new(sick_days, age, gender))
    }

    fn parse_integer(row: usize, column: &'static str, value: &str) -> Result<u32, LoaderError> {
        value
            .trim()
            .parse::<u32>()
            .map_err(|_| LoaderError::InvalidInteger {
                column,
                row,
                value: value.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::WINDOWS_1251;

    const HEADER: &str = "\"Количество больничных дней,\"\"Возраст\"\",\"\"Пол\"\"\"";

    fn csv(rows: &[&str]) -> String {
        let mut text = String::from(HEADER);
        text.push('\n');
        for row in rows {
            text.push_str(&format!("\"{}\"\n", row.replace('"', "\"\"")));
        }
        text
    }

    #[test]
    fn test_combined_header_variants() {
        assert!(DataLoader::is_combined_header(COMBINED_COLUMN));
        assert!(DataLoader::is_combined_header(
            "Количество больничных дней,\"\"Возраст\"\",\"\"Пол\"\""
        ));
        assert!(DataLoader::is_combined_header(HEADER));
        assert!(!DataLoader::is_combined_header("Количество больничных дней"));
    }

    #[test]
    fn test_parse_row_strips_gender_quotes() {
        let record = DataLoader::parse_row(1, "5,39,\"Ж\"").unwrap();
        assert_eq!(record, SickLeaveRecord::new(5, 39, Gender::Female));

        let record = DataLoader::parse_row(2, " 3, 30,\"\"М\"\"").unwrap();
        assert_eq!(record, SickLeaveRecord::new(3, 30, Gender::Male));
    }

    #[test]
    fn test_parse_row_rejects_wrong_field_count() {
        let err = DataLoader::parse_row(4, "5,39").unwrap_err();
        assert!(matches!(err, LoaderError::MalformedRow { row: 4, fields: 2 }));
    }

    #[test]
    fn test_parse_row_names_non_integer_column() {
        let err = DataLoader::parse_row(7, "5,сорок,\"М\"").unwrap_err();
        match err {
            LoaderError::InvalidInteger { column, row, value } => {
                assert_eq!(column, AGE_COLUMN);
                assert_eq!(row, 7);
                assert_eq!(value, "сорок");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_utf8_file() {
        let text = csv(&["5,39,\"Ж\"", "4,54,\"М\"", "1,26,\"М\""]);
        let dataset = DataLoader::load_bytes(text.as_bytes(), "utf8.csv").unwrap();

        assert_eq!(dataset.encoding(), "UTF-8");
        assert_eq!(
            dataset.records(),
            &[
                SickLeaveRecord::new(5, 39, Gender::Female),
                SickLeaveRecord::new(4, 54, Gender::Male),
                SickLeaveRecord::new(1, 26, Gender::Male),
            ]
        );
    }

    #[test]
    fn test_load_windows_1251_file() {
        let rows: Vec<String> = (0..40)
            .map(|i| {
                let gender = if i % 2 == 0 { "М" } else { "Ж" };
                format!("{},{},\"{}\"", i % 8, 20 + i, gender)
            })
            .collect();
        let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
        let text = csv(&rows);
        let (bytes, _, _) = WINDOWS_1251.encode(&text);

        let dataset = DataLoader::load_bytes(&bytes, "cp1251.csv").unwrap();
        assert_eq!(dataset.encoding(), "windows-1251");
        assert_eq!(dataset.len(), 40);
        assert_eq!(dataset.records()[1], SickLeaveRecord::new(1, 21, Gender::Female));
    }

    #[test]
    fn test_missing_combined_column() {
        let text = "Количество больничных дней,Возраст,Пол\n5,39,Ж\n";
        let err = DataLoader::load_bytes(text.as_bytes(), "split.csv").unwrap_err();
        match err {
            LoaderError::MissingColumn { expected } => assert_eq!(expected, COMBINED_COLUMN),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_integer_sick_days_fails() {
        let text = csv(&["5,39,\"Ж\"", "много,54,\"М\""]);
        let err = DataLoader::load_bytes(text.as_bytes(), "bad.csv").unwrap_err();
        assert!(matches!(
            err,
            LoaderError::InvalidInteger {
                column: SICK_DAYS_COLUMN,
                row: 2,
                ..
            }
        ));
    }
}
