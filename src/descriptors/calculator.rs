use indexmap::IndexMap;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::batch::map_ordered;
use crate::config::FeatureConfig;
use crate::descriptors::{sanitize, DescriptorCatalog};
use crate::errors::FeatureError;
use crate::loader::load_molecule;
use crate::table::{Cell, ResultTable};
use crate::toolkit::ChemToolkit;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DescriptorValues {
    /// Nombre → valor, en el orden del catálogo.
    Mapping(IndexMap<String, f64>),
    Sequence(Vec<f64>),
}

impl DescriptorValues {
    pub fn get(&self, name: &str) -> Option<f64> {
        match self {
            DescriptorValues::Mapping(map) => map.get(name).copied(),
            DescriptorValues::Sequence(_) => None,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            DescriptorValues::Mapping(map) => map.len(),
            DescriptorValues::Sequence(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_values(self) -> Vec<f64> {
        match self {
            DescriptorValues::Mapping(map) => map.into_values().collect(),
            DescriptorValues::Sequence(values) => values,
        }
    }
}

#[derive(Debug)]
pub enum DescriptorBatch {
    Table(ResultTable),
    List(Vec<Result<Vec<f64>, FeatureError>>),
}

/// Calcula el catálogo completo de descriptores del toolkit para cada SMILES.
pub struct MolecularDescriptors<T: ChemToolkit> {
    toolkit: Arc<T>,
    catalog: DescriptorCatalog,
    parallel: bool,
}

impl<T: ChemToolkit> MolecularDescriptors<T> {
    pub fn new(toolkit: Arc<T>) -> Result<Self, FeatureError> {
        let catalog = DescriptorCatalog::from_toolkit(toolkit.as_ref())?;
        debug!("descriptors:catalog toolkit={} n={}", toolkit.name(), catalog.len());
        Ok(Self { toolkit,
                  catalog,
                  parallel: false })
    }

    pub fn with_names<S: AsRef<str>>(toolkit: Arc<T>, names: &[S]) -> Result<Self, FeatureError> {
        let catalog = DescriptorCatalog::select(toolkit.as_ref(), names)?;
        Ok(Self { toolkit,
                  catalog,
                  parallel: false })
    }

    pub fn from_config(toolkit: Arc<T>, config: &FeatureConfig) -> Result<Self, FeatureError> {
        Ok(Self::new(toolkit)?.parallel(config.batch.parallel))
    }

    pub fn parallel(mut self, on: bool) -> Self {
        self.parallel = on;
        self
    }

    pub fn catalog(&self) -> &DescriptorCatalog {
        &self.catalog
    }

    fn compute(&self, smiles: &str) -> Result<Vec<f64>, FeatureError> {
        let mol = load_molecule(self.toolkit.as_ref(), smiles)?;
        let computed = self.toolkit
                           .compute_descriptors(&mol, self.catalog.names())
                           .and_then(|values| {
                               if values.len() == self.catalog.len() {
                                   Ok(values)
                               } else {
                                   Err(FeatureError::ShapeMismatch { expected: self.catalog.len(),
                                                                     got: values.len() })
                               }
                           });
        let mut values = computed.map_err(|e| {
                                     let err = FeatureError::computation(smiles, e);
                                     warn!("descriptors:failed smiles={smiles:?} err={err}");
                                     err
                                 })?;
        sanitize(&mut values);
        Ok(values)
    }

    /// Valores saneados para `smiles`, como mapa nombre → valor o como lista
    /// en el orden del catálogo.
    pub fn calc(&self, smiles: &str, as_mapping: bool) -> Result<DescriptorValues, FeatureError> {
        let values = self.compute(smiles)?;
        if as_mapping {
            Ok(DescriptorValues::Mapping(self.catalog.names().iter().cloned().zip(values).collect()))
        } else {
            Ok(DescriptorValues::Sequence(values))
        }
    }

    pub fn calc_list<S: AsRef<str> + Sync>(&self, inputs: &[S]) -> Vec<Result<Vec<f64>, FeatureError>> {
        debug!("descriptors:calc_batch:start n={} parallel={}", inputs.len(), self.parallel);
        let results = map_ordered(inputs, self.parallel, |s| self.compute(s.as_ref()));
        debug!("descriptors:calc_batch:done n={} failed={}",
               results.len(),
               results.iter().filter(|r| r.is_err()).count());
        results
    }

    /// Columnas = nombres del catálogo; filas inválidas con el centinela.
    pub fn calc_table<S: AsRef<str> + Sync>(&self, inputs: &[S]) -> ResultTable {
        let mut table = ResultTable::new(self.catalog.names().to_vec());
        for (input, result) in inputs.iter().zip(self.calc_list(inputs)) {
            table.push_result(input.as_ref(), result.map(|values| values.into_iter().map(Cell::Float).collect()));
        }
        table
    }

    pub fn calc_batch<S: AsRef<str> + Sync>(&self, inputs: &[S], as_table: bool) -> DescriptorBatch {
        if as_table {
            DescriptorBatch::Table(self.calc_table(inputs))
        } else {
            DescriptorBatch::List(self.calc_list(inputs))
        }
    }
}
