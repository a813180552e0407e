pub mod mock_toolkit;
#[cfg(feature = "rdkit")]
pub mod rdkit_toolkit;
