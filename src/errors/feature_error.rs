use thiserror::Error;

/// Errores de carga y cálculo de huellas/descriptores.
#[derive(Debug, Error)]
pub enum FeatureError {
    #[error("SMILES inválido: {0}")]
    InvalidSmiles(String),
    #[error("Fallo de cálculo para {smiles}: {reason}")]
    Computation { smiles: String, reason: String },
    #[error("Error del toolkit químico: {0}")]
    Toolkit(String),
    #[error("Dimensión inesperada: se esperaban {expected} valores, se obtuvieron {got}")]
    ShapeMismatch { expected: usize, got: usize },
    #[error("Descriptor desconocido: {0}")]
    UnknownDescriptor(String),
    #[error("El catálogo de descriptores está vacío")]
    EmptyCatalog,
    #[error("Error de configuración: {0}")]
    Config(String),
    #[error("Error de serialización: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl FeatureError {
    /// Convierte un fallo del toolkit en un error de cálculo ligado al SMILES.
    pub fn computation(smiles: &str, err: FeatureError) -> Self {
        match err {
            FeatureError::InvalidSmiles(_) | FeatureError::Computation { .. } => err,
            other => FeatureError::Computation { smiles: smiles.to_string(),
                                                 reason: other.to_string() },
        }
    }
}

#[cfg(feature = "rdkit")]
impl From<chemengine::EngineError> for FeatureError {
    fn from(e: chemengine::EngineError) -> Self {
        FeatureError::Toolkit(e.to_string())
    }
}
