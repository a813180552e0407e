use pyo3::ffi::c_str;
use pyo3::prelude::*;
use pyo3::types::{PyBytes, PyModule};
use std::ffi::CString;
use std::sync::OnceLock;

static RDKIT_MODULE: OnceLock<Py<PyModule>> = OnceLock::new();

/// Compila el módulo auxiliar de RDKit una sola vez por proceso.
pub fn init_python() -> PyResult<()> {
    if RDKIT_MODULE.get().is_some() {
        return Ok(());
    }
    Python::attach(|py| {
        let code = CString::new(include_str!("../python/rdkit_wrapper.py"))?;
        let module = PyModule::from_code(py, code.as_c_str(), c_str!("rdkit_wrapper.py"), c_str!("rdkit_wrapper"))?;
        // Si otro hilo ganó la carrera, se descarta este módulo
        RDKIT_MODULE.set(module.unbind()).ok();
        Ok(())
    })
}

fn get_module(py: Python<'_>) -> PyResult<Py<PyModule>> {
    RDKIT_MODULE.get().map(|module| module.clone_ref(py)).ok_or_else(|| {
                                                             PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(
            "init_python() debe llamarse antes de usar RDKit"
        )
                                                         })
}

/// Molécula de RDKit (objeto `Mol` de Python) propiedad exclusiva de quien
/// la creó.
#[derive(Debug)]
pub struct RdMol {
    inner: Py<PyAny>,
}

/// `Ok(None)` cuando RDKit rechaza el SMILES.
pub fn mol_from_smiles(smiles: &str) -> PyResult<Option<RdMol>> {
    Python::attach(|py| {
        let rdkit_py = get_module(py)?;
        let mol = rdkit_py.bind(py).getattr("mol_from_smiles")?.call1((smiles,))?;
        if mol.is_none() {
            return Ok(None);
        }
        Ok(Some(RdMol { inner: mol.unbind() }))
    })
}

pub fn morgan_bit_string(mol: &RdMol, radius: u32, n_bits: usize) -> PyResult<String> {
    Python::attach(|py| {
        let rdkit_py = get_module(py)?;
        rdkit_py.bind(py)
                .getattr("morgan_bit_string")?
                .call1((mol.inner.bind(py), radius, n_bits))?
                .extract()
    })
}

pub fn descriptor_names() -> PyResult<Vec<String>> {
    Python::attach(|py| {
        let rdkit_py = get_module(py)?;
        rdkit_py.bind(py).getattr("descriptor_names")?.call0()?.extract()
    })
}

pub fn calc_descriptors(mol: &RdMol, names: &[String]) -> PyResult<Vec<f64>> {
    Python::attach(|py| {
        let rdkit_py = get_module(py)?;
        rdkit_py.bind(py)
                .getattr("calc_descriptors")?
                .call1((mol.inner.bind(py), names.to_vec()))?
                .extract()
    })
}

pub fn draw_png(mol: &RdMol, width: u32, height: u32) -> PyResult<Vec<u8>> {
    Python::attach(|py| {
        let rdkit_py = get_module(py)?;
        let binding = rdkit_py.bind(py)
                              .getattr("draw_png")?
                              .call1((mol.inner.bind(py), width, height))?;
        let png = binding.downcast::<PyBytes>()?;
        Ok(png.as_bytes().to_vec())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mol_from_smiles() {
        init_python().expect("Fallo al inicializar Python/RDKit");
        let mol = mol_from_smiles("CCO").expect("Fallo al llamar a RDKit"); // Etanol
        assert!(mol.is_some());
        let invalid = mol_from_smiles("not-a-smiles").expect("Fallo al llamar a RDKit");
        assert!(invalid.is_none());
    }

    #[test]
    fn test_morgan_bit_string_length() {
        init_python().expect("Fallo al inicializar Python/RDKit");
        let mol = mol_from_smiles("c1ccccc1O").unwrap().unwrap();
        let bits = morgan_bit_string(&mol, 2, 512).unwrap();
        assert_eq!(bits.len(), 512);
        assert!(bits.chars().all(|c| c == '0' || c == '1'));
    }

    #[test]
    fn test_calc_descriptors_mol_weight() {
        init_python().expect("Fallo al inicializar Python/RDKit");
        let mol = mol_from_smiles("CCO").unwrap().unwrap();
        let values = calc_descriptors(&mol, &["MolWt".to_string()]).unwrap();
        assert_eq!(values.len(), 1);
        assert!((values[0] - 46.07).abs() < 0.1); // Peso molecular aproximado
    }
}
