//! Data module - CSV loading, decoding and record selection

pub mod encoding;
mod loader;
mod processor;
mod record;

pub use loader::{DataLoader, LoaderError};
pub use processor::{AgeCut, DataProcessor, RecordFilter};
pub use record::{Dataset, Gender, SickLeaveRecord, UnknownGender};
