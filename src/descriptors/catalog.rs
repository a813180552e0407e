use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::errors::FeatureError;
use crate::toolkit::ChemToolkit;

/// Lista ordenada e inmutable de descriptores, enumerada una sola vez al
/// construir la calculadora.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptorCatalog {
    names: Vec<String>,
}

impl DescriptorCatalog {
    /// Registro completo del toolkit.
    pub fn from_toolkit<T: ChemToolkit>(toolkit: &T) -> Result<Self, FeatureError> {
        let names = toolkit.descriptor_names()?;
        if names.is_empty() {
            return Err(FeatureError::EmptyCatalog);
        }
        Ok(Self { names })
    }

    /// Subconjunto del registro, en el orden pedido.
    pub fn select<T: ChemToolkit, S: AsRef<str>>(toolkit: &T, names: &[S]) -> Result<Self, FeatureError> {
        if names.is_empty() {
            return Err(FeatureError::EmptyCatalog);
        }
        let registry: HashSet<String> = toolkit.descriptor_names()?.into_iter().collect();
        let names = names.iter()
                         .map(|n| {
                             let n = n.as_ref();
                             if registry.contains(n) {
                                 Ok(n.to_string())
                             } else {
                                 Err(FeatureError::UnknownDescriptor(n.to_string()))
                             }
                         })
                         .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { names })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
