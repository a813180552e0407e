//! Cargador de estructuras: SMILES → molécula del toolkit o `InvalidSmiles`.
use log::warn;

use crate::errors::FeatureError;
use crate::toolkit::ChemToolkit;

/// Nunca entra en pánico: tanto el rechazo del toolkit como sus errores
/// internos se reportan como `FeatureError::InvalidSmiles` y se registran con
/// `warn!` indicando la cadena.
pub fn load_molecule<T: ChemToolkit>(toolkit: &T, smiles: &str) -> Result<T::Mol, FeatureError> {
    match toolkit.parse_smiles(smiles) {
        Ok(Some(mol)) => Ok(mol),
        Ok(None) => {
            warn!("load:failed smiles={smiles:?} toolkit={} (revise el SMILES)", toolkit.name());
            Err(FeatureError::InvalidSmiles(smiles.to_string()))
        }
        Err(e) => {
            warn!("load:error smiles={smiles:?} toolkit={} err={e}", toolkit.name());
            Err(FeatureError::InvalidSmiles(smiles.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fingerprint::BitVector;
    use crate::toolkit::MockToolkit;

    #[test]
    fn test_load_valid() {
        let mol = load_molecule(&MockToolkit::new(), "CCO").unwrap();
        assert_eq!(mol.smiles, "CCO");
        assert_eq!(mol.atoms.len(), 3);
    }

    #[test]
    fn test_load_invalid_names_input() {
        let err = load_molecule(&MockToolkit::new(), "not-a-smiles").unwrap_err();
        assert_eq!(err.to_string(), "SMILES inválido: not-a-smiles");
    }

    // Toolkit cuyo parser falla con error en lugar de devolver None
    struct BrokenParser;

    impl ChemToolkit for BrokenParser {
        type Mol = ();
        fn name(&self) -> &str {
            "broken"
        }
        fn parse_smiles(&self, _smiles: &str) -> Result<Option<()>, FeatureError> {
            Err(FeatureError::Toolkit("parser caído".into()))
        }
        fn morgan_fingerprint(&self, _mol: &(), _radius: u32, n_bits: usize) -> Result<BitVector, FeatureError> {
            Ok(BitVector::zeros(n_bits))
        }
        fn descriptor_names(&self) -> Result<Vec<String>, FeatureError> {
            Ok(vec![])
        }
        fn compute_descriptors(&self, _mol: &(), _names: &[String]) -> Result<Vec<f64>, FeatureError> {
            Ok(vec![])
        }
        fn render_png(&self, _mol: &(), _width: u32, _height: u32) -> Result<Vec<u8>, FeatureError> {
            Ok(vec![])
        }
    }

    #[test]
    fn test_load_toolkit_error_becomes_invalid_smiles() {
        let err = load_molecule(&BrokenParser, "CCO").unwrap_err();
        assert!(matches!(err, FeatureError::InvalidSmiles(s) if s == "CCO"));
    }
}
