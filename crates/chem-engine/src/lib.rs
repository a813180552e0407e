use pyo3::PyErr;
use thiserror::Error;
pub mod core;
pub use crate::core::RdMol;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Error inicializando Python/RDKit: {0}")]
    Init(PyErr),
    #[error("Error llamando a RDKit ({op}): {source}")]
    Call {
        op: &'static str,
        #[source]
        source: PyErr,
    },
}

impl EngineError {
    fn call(op: &'static str) -> impl FnOnce(PyErr) -> EngineError {
        move |source| EngineError::Call { op, source }
    }
}

/// Acceso tipado al módulo auxiliar de RDKit embebido en el intérprete.
///
/// `init()` carga `.env` antes de arrancar Python para que `PYTHONPATH` o
/// `PYTHONHOME` puedan definirse ahí.
pub struct ChemEngine {
    _private: (),
}

impl ChemEngine {
    pub fn init() -> Result<Self, EngineError> {
        dotenvy::dotenv().ok();
        core::init_python().map_err(EngineError::Init)?;
        log::debug!("chemengine:init done");
        Ok(Self { _private: () })
    }

    pub fn mol_from_smiles(&self, smiles: &str) -> Result<Option<RdMol>, EngineError> {
        core::mol_from_smiles(smiles).map_err(EngineError::call("mol_from_smiles"))
    }

    pub fn morgan_bit_string(&self, mol: &RdMol, radius: u32, n_bits: usize) -> Result<String, EngineError> {
        core::morgan_bit_string(mol, radius, n_bits).map_err(EngineError::call("morgan_bit_string"))
    }

    pub fn descriptor_names(&self) -> Result<Vec<String>, EngineError> {
        core::descriptor_names().map_err(EngineError::call("descriptor_names"))
    }

    pub fn calc_descriptors(&self, mol: &RdMol, names: &[String]) -> Result<Vec<f64>, EngineError> {
        core::calc_descriptors(mol, names).map_err(EngineError::call("calc_descriptors"))
    }

    pub fn draw_png(&self, mol: &RdMol, width: u32, height: u32) -> Result<Vec<u8>, EngineError> {
        core::draw_png(mol, width, height).map_err(EngineError::call("draw_png"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_error_messages() {
        let err = EngineError::Init(PyErr::new::<pyo3::exceptions::PyRuntimeError, _>("sin rdkit"));
        assert!(err.to_string().starts_with("Error inicializando Python/RDKit"));
        let err = EngineError::Call { op: "draw_png",
                                      source: PyErr::new::<pyo3::exceptions::PyValueError, _>("x") };
        assert!(err.to_string().starts_with("Error llamando a RDKit (draw_png)"));
    }

    #[test]
    fn test_descriptor_names_registry() {
        let engine = ChemEngine::init().expect("Fallo al inicializar Python/RDKit");
        let names = engine.descriptor_names().unwrap();
        assert!(names.iter().any(|n| n == "MolWt"));
        assert_eq!(names, engine.descriptor_names().unwrap());
    }
}
