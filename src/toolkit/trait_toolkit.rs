//! Contrato del toolkit químico externo.
//! Todo el trabajo químico (interpretar SMILES, huellas, fórmulas de
//! descriptores, dibujo) ocurre detrás de este trait; los calculadores sólo
//! validan, delegan y dan forma a los resultados.
use crate::errors::FeatureError;
use crate::fingerprint::BitVector;

pub trait ChemToolkit: Send + Sync {
    /// Molécula en memoria del toolkit. Vive sólo dentro de la llamada que la crea.
    type Mol;

    fn name(&self) -> &str;

    /// `Ok(None)` si el toolkit rechaza la cadena como estructura inválida.
    fn parse_smiles(&self, smiles: &str) -> Result<Option<Self::Mol>, FeatureError>;

    fn morgan_fingerprint(&self, mol: &Self::Mol, radius: u32, n_bits: usize) -> Result<BitVector, FeatureError>;

    /// Registro completo de descriptores, en el orden del toolkit.
    fn descriptor_names(&self) -> Result<Vec<String>, FeatureError>;

    /// Un valor por nombre, en el mismo orden de `names`.
    fn compute_descriptors(&self, mol: &Self::Mol, names: &[String]) -> Result<Vec<f64>, FeatureError>;

    /// Imagen PNG de la estructura 2D.
    fn render_png(&self, mol: &Self::Mol, width: u32, height: u32) -> Result<Vec<u8>, FeatureError>;
}
