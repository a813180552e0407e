use chemengine::{ChemEngine, RdMol};

use crate::errors::FeatureError;
use crate::fingerprint::BitVector;
use crate::toolkit::ChemToolkit;

/// Toolkit real: RDKit a través de `chemengine`.
pub struct RdkitToolkit {
    engine: ChemEngine,
}

impl RdkitToolkit {
    pub fn init() -> Result<Self, FeatureError> {
        let engine = ChemEngine::init()?;
        Ok(Self { engine })
    }
}

impl ChemToolkit for RdkitToolkit {
    type Mol = RdMol;

    fn name(&self) -> &str {
        "rdkit"
    }

    fn parse_smiles(&self, smiles: &str) -> Result<Option<RdMol>, FeatureError> {
        Ok(self.engine.mol_from_smiles(smiles)?)
    }

    fn morgan_fingerprint(&self, mol: &RdMol, radius: u32, n_bits: usize) -> Result<BitVector, FeatureError> {
        let bits = self.engine.morgan_bit_string(mol, radius, n_bits)?;
        BitVector::from_bit_string(&bits)
    }

    fn descriptor_names(&self) -> Result<Vec<String>, FeatureError> {
        Ok(self.engine.descriptor_names()?)
    }

    fn compute_descriptors(&self, mol: &RdMol, names: &[String]) -> Result<Vec<f64>, FeatureError> {
        Ok(self.engine.calc_descriptors(mol, names)?)
    }

    fn render_png(&self, mol: &RdMol, width: u32, height: u32) -> Result<Vec<u8>, FeatureError> {
        Ok(self.engine.draw_png(mol, width, height)?)
    }
}
