//! ChemFeat Rust Library
//!
//! Capa fina sobre un toolkit químico (RDKit) para convertir SMILES en:
//! - huellas moleculares (`fingerprint`), por defecto Morgan radio 2 / 512 bits;
//! - tablas de descriptores saneados (`descriptors`);
//! - imágenes PNG de la estructura (`drawing`).
//!
//! Toda la química vive detrás de `toolkit::ChemToolkit`. Con la feature
//! `rdkit` se usa `RdkitToolkit` (Python embebido); `MockToolkit` funciona sin
//! dependencias nativas.

pub mod batch;
pub mod config;
pub mod descriptors;
pub mod drawing;
pub mod errors;
pub mod fingerprint;
pub mod loader;
pub mod table;
pub mod toolkit;

pub use config::FeatureConfig;
pub use descriptors::{DescriptorBatch, DescriptorValues, MolecularDescriptors};
pub use drawing::draw_smiles;
pub use errors::FeatureError;
pub use fingerprint::{BitVector, Fingerprint, FingerprintBatch, FingerprintValue, MorganFingerprint};
pub use loader::load_molecule;
pub use table::{Cell, ResultTable, ERROR_SENTINEL};
pub use toolkit::{ChemToolkit, MockToolkit};

/// Calculadora de descriptores sobre RDKit con el registro completo.
#[cfg(feature = "rdkit")]
pub type RdkitDescriptors = MolecularDescriptors<toolkit::RdkitToolkit>;
#[cfg(feature = "rdkit")]
pub use toolkit::RdkitToolkit;
