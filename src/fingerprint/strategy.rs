use crate::errors::FeatureError;
use crate::fingerprint::BitVector;
use crate::toolkit::ChemToolkit;

/// Función de huella intercambiable: molécula → vector de bits de longitud fija.
pub trait FingerprintFn<T: ChemToolkit>: Send + Sync {
    fn compute(&self, toolkit: &T, mol: &T::Mol) -> Result<BitVector, FeatureError>;

    /// Longitud de la huella si se conoce de antemano; fija las columnas de
    /// la tabla aunque ninguna fila sea válida.
    fn n_bits(&self) -> Option<usize> {
        None
    }
}

/// Huella circular (Morgan) del toolkit. Por defecto radio 2 y 512 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MorganFingerprint {
    pub radius: u32,
    pub n_bits: usize,
}

impl MorganFingerprint {
    pub fn new(radius: u32, n_bits: usize) -> Self {
        Self { radius, n_bits }
    }
}

impl Default for MorganFingerprint {
    fn default() -> Self {
        Self::new(2, 512)
    }
}

impl<T: ChemToolkit> FingerprintFn<T> for MorganFingerprint {
    fn compute(&self, toolkit: &T, mol: &T::Mol) -> Result<BitVector, FeatureError> {
        toolkit.morgan_fingerprint(mol, self.radius, self.n_bits)
    }

    fn n_bits(&self) -> Option<usize> {
        Some(self.n_bits)
    }
}

/// Adapta un closure como `FingerprintFn`.
pub struct FnFingerprint<F> {
    func: F,
}

impl<F> FnFingerprint<F> {
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

impl<T, F> FingerprintFn<T> for FnFingerprint<F>
    where T: ChemToolkit,
          F: Fn(&T, &T::Mol) -> Result<BitVector, FeatureError> + Send + Sync
{
    fn compute(&self, toolkit: &T, mol: &T::Mol) -> Result<BitVector, FeatureError> {
        (self.func)(toolkit, mol)
    }
}
