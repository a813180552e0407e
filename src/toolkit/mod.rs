pub mod implementations;
pub mod trait_toolkit;

pub use implementations::mock_toolkit::{MockMolecule, MockToolkit};
#[cfg(feature = "rdkit")]
pub use implementations::rdkit_toolkit::RdkitToolkit;
pub use trait_toolkit::ChemToolkit;
