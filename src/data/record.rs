//! Sick-leave record types.

use std::fmt;
use std::str::FromStr;

/// Employee gender as recorded in the source data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Label used in the source files (Cyrillic initials).
    pub fn source_label(&self) -> &'static str {
        match self {
            Gender::Male => "М",
            Gender::Female => "Ж",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Gender::Male => "Men",
            Gender::Female => "Women",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.source_label())
    }
}

/// Error returned when a gender label is neither `М`/`Ж` nor `M`/`F`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownGender(pub String);

impl FromStr for Gender {
    type Err = UnknownGender;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "М" | "M" | "m" | "м" => Ok(Gender::Male),
            "Ж" | "F" | "f" | "ж" => Ok(Gender::Female),
            other => Err(UnknownGender(other.to_string())),
        }
    }
}

/// A single row of the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SickLeaveRecord {
    pub sick_days: u32,
    pub age: u32,
    pub gender: Gender,
}

impl SickLeaveRecord {
    pub fn new(sick_days: u32, age: u32, gender: Gender) -> Self {
        Self {
            sick_days,
            age,
            gender,
        }
    }
}

/// Records parsed from one loaded file. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<SickLeaveRecord>,
    source_name: String,
    encoding: &'static str,
}

impl Dataset {
    pub fn new(
        records: Vec<SickLeaveRecord>,
        source_name: impl Into<String>,
        encoding: &'static str,
    ) -> Self {
        Self {
            records,
            source_name: source_name.into(),
            encoding,
        }
    }

    pub fn records(&self) -> &[SickLeaveRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// Name of the encoding the file was decoded with.
    pub fn encoding(&self) -> &'static str {
        self.encoding
    }

    /// Observed (min, max) age, `None` for an empty dataset.
    pub fn age_range(&self) -> Option<(u32, u32)> {
        let min = self.records.iter().map(|r| r.age).min()?;
        let max = self.records.iter().map(|r| r.age).max()?;
        Some((min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_parses_cyrillic_and_latin() {
        assert_eq!("М".parse::<Gender>(), Ok(Gender::Male));
        assert_eq!("Ж".parse::<Gender>(), Ok(Gender::Female));
        assert_eq!("M".parse::<Gender>(), Ok(Gender::Male));
        assert_eq!(" F ".parse::<Gender>(), Ok(Gender::Female));
    }

    #[test]
    fn test_gender_rejects_unknown_label() {
        assert_eq!(
            "X".parse::<Gender>(),
            Err(UnknownGender("X".to_string()))
        );
    }

    #[test]
    fn test_age_range() {
        let dataset = Dataset::new(
            vec![
                SickLeaveRecord::new(3, 30, Gender::Male),
                SickLeaveRecord::new(5, 61, Gender::Female),
                SickLeaveRecord::new(1, 23, Gender::Male),
            ],
            "test.csv",
            "UTF-8",
        );
        assert_eq!(dataset.age_range(), Some((23, 61)));
        assert_eq!(dataset.len(), 3);
    }

    #[test]
    fn test_empty_dataset_has_no_age_range() {
        let dataset = Dataset::new(Vec::new(), "empty.csv", "UTF-8");
        assert!(dataset.is_empty());
        assert_eq!(dataset.age_range(), None);
    }
}
