use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::batch::map_ordered;
use crate::config::FeatureConfig;
use crate::errors::FeatureError;
use crate::fingerprint::{BitVector, FingerprintFn, FnFingerprint, MorganFingerprint};
use crate::loader::load_molecule;
use crate::table::{Cell, ResultTable};
use crate::toolkit::ChemToolkit;

/// Huella en el formato configurado.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FingerprintValue {
    /// Lista de enteros 0/1.
    Bits(Vec<u8>),
    /// Cadena "0101...".
    Packed(String),
}

impl FingerprintValue {
    pub fn len(&self) -> usize {
        match self {
            FingerprintValue::Bits(bits) => bits.len(),
            FingerprintValue::Packed(s) => s.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_bits(&self) -> Option<&[u8]> {
        match self {
            FingerprintValue::Bits(bits) => Some(bits),
            FingerprintValue::Packed(_) => None,
        }
    }

    pub fn as_packed(&self) -> Option<&str> {
        match self {
            FingerprintValue::Packed(s) => Some(s),
            FingerprintValue::Bits(_) => None,
        }
    }
}

#[derive(Debug)]
pub enum FingerprintBatch {
    Table(ResultTable),
    List(Vec<Result<FingerprintValue, FeatureError>>),
}

/// Calculadora de huellas sobre un toolkit compartido.
///
/// ```ignore
/// let fp = Fingerprint::new(Arc::new(RdkitToolkit::init()?));
/// let bits = fp.calc("CCO")?; // 512 enteros 0/1
/// ```
pub struct Fingerprint<T: ChemToolkit, F = MorganFingerprint> {
    toolkit: Arc<T>,
    fp_func: F,
    str_mode: bool,
    parallel: bool,
}

impl<T: ChemToolkit> Fingerprint<T> {
    /// Morgan radio 2, 512 bits, salida como lista de enteros.
    pub fn new(toolkit: Arc<T>) -> Self {
        Self::with_strategy(toolkit, MorganFingerprint::default())
    }

    pub fn from_config(toolkit: Arc<T>, config: &FeatureConfig) -> Self {
        let fp = &config.fingerprint;
        Self::with_strategy(toolkit, MorganFingerprint::new(fp.radius, fp.n_bits)).str_mode(fp.str_mode)
                                                                               .parallel(config.batch.parallel)
    }

    pub fn with_fn<G>(toolkit: Arc<T>, func: G) -> Fingerprint<T, FnFingerprint<G>>
        where G: Fn(&T, &T::Mol) -> Result<BitVector, FeatureError> + Send + Sync
    {
        Fingerprint::with_strategy(toolkit, FnFingerprint::new(func))
    }
}

impl<T: ChemToolkit, F: FingerprintFn<T>> Fingerprint<T, F> {
    pub fn with_strategy(toolkit: Arc<T>, fp_func: F) -> Self {
        Self { toolkit,
               fp_func,
               str_mode: false,
               parallel: false }
    }

    pub fn str_mode(mut self, on: bool) -> Self {
        self.str_mode = on;
        self
    }

    pub fn parallel(mut self, on: bool) -> Self {
        self.parallel = on;
        self
    }

    pub fn is_str_mode(&self) -> bool {
        self.str_mode
    }

    /// Los fallos (SMILES rechazado o error de la función de huella) se
    /// devuelven como error tipado y se registran; nunca entra en pánico.
    pub fn calc(&self, smiles: &str) -> Result<FingerprintValue, FeatureError> {
        let mol = load_molecule(self.toolkit.as_ref(), smiles)?;
        let fp = self.fp_func.compute(self.toolkit.as_ref(), &mol).map_err(|e| {
                                                                     let err = FeatureError::computation(smiles, e);
                                                                     warn!("fingerprint:failed smiles={smiles:?} err={err}");
                                                                     err
                                                                 })?;
        if self.str_mode {
            Ok(FingerprintValue::Packed(fp.to_bit_string()))
        } else {
            Ok(FingerprintValue::Bits(fp.to_ints()))
        }
    }

    pub fn calc_list<S: AsRef<str> + Sync>(&self, inputs: &[S]) -> Vec<Result<FingerprintValue, FeatureError>> {
        debug!("fingerprint:calc_batch:start n={} parallel={}", inputs.len(), self.parallel);
        let results = map_ordered(inputs, self.parallel, |s| self.calc(s.as_ref()));
        debug!("fingerprint:calc_batch:done n={} failed={}",
               results.len(),
               results.iter().filter(|r| r.is_err()).count());
        results
    }

    /// Columnas "0".."n-1" (o una sola columna "fingerprint" en modo cadena).
    pub fn calc_table<S: AsRef<str> + Sync>(&self, inputs: &[S]) -> ResultTable {
        let results = self.calc_list(inputs);
        let columns = if self.str_mode {
            vec!["fingerprint".to_string()]
        } else {
            let width = self.fp_func
                            .n_bits()
                            .or_else(|| results.iter().find_map(|r| r.as_ref().ok().map(FingerprintValue::len)))
                            .unwrap_or(0);
            (0..width).map(|i| i.to_string()).collect()
        };
        let mut table = ResultTable::new(columns);
        let width = table.n_cols();
        for (input, result) in inputs.iter().zip(results) {
            let smiles = input.as_ref();
            let cells = result.and_then(|value| {
                                  let cells: Vec<Cell> = match value {
                                      FingerprintValue::Bits(bits) => bits.into_iter().map(|b| Cell::Int(b as i64)).collect(),
                                      FingerprintValue::Packed(s) => vec![Cell::Text(s)],
                                  };
                                  if cells.len() == width {
                                      return Ok(cells);
                                  }
                                  let err = FeatureError::computation(smiles,
                                                                      FeatureError::ShapeMismatch { expected: width,
                                                                                                    got: cells.len() });
                                  warn!("fingerprint:failed smiles={smiles:?} err={err}");
                                  Err(err)
                              });
            table.push_result(smiles, cells);
        }
        table
    }

    pub fn calc_batch<S: AsRef<str> + Sync>(&self, inputs: &[S], as_table: bool) -> FingerprintBatch {
        if as_table {
            FingerprintBatch::Table(self.calc_table(inputs))
        } else {
            FingerprintBatch::List(self.calc_list(inputs))
        }
    }
}
