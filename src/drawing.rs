use log::warn;

use crate::errors::FeatureError;
use crate::loader::load_molecule;
use crate::toolkit::ChemToolkit;

pub const DEFAULT_DRAW_SIZE: (u32, u32) = (300, 300);

/// Dibuja la estructura 2D de `smiles` como PNG usando el toolkit.
pub fn draw_smiles<T: ChemToolkit>(toolkit: &T, smiles: &str, size: (u32, u32)) -> Result<Vec<u8>, FeatureError> {
    let mol = load_molecule(toolkit, smiles)?;
    let (width, height) = size;
    toolkit.render_png(&mol, width, height).map_err(|e| {
                                               warn!("draw:failed smiles={smiles:?} err={e}");
                                               FeatureError::computation(smiles, e)
                                           })
}
