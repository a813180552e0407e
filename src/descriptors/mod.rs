//! Calculadora de descriptores moleculares con saneamiento de valores.
pub mod calculator;
pub mod catalog;
pub mod sanitize;

pub use calculator::{DescriptorBatch, DescriptorValues, MolecularDescriptors};
pub use catalog::DescriptorCatalog;
pub use sanitize::{sanitize, sanitize_value, DESCRIPTOR_LIMIT};
