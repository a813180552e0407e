//! Calculadora de huellas moleculares.
pub mod bit_vector;
pub mod calculator;
pub mod strategy;

pub use bit_vector::BitVector;
pub use calculator::{Fingerprint, FingerprintBatch, FingerprintValue};
pub use strategy::{FingerprintFn, FnFingerprint, MorganFingerprint};
