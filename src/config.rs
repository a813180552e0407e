//! Configuración de los calculadores.
//! Carga variables de entorno (.env) una sola vez y expone `FeatureConfig`,
//! usada por `Fingerprint::from_config` y `MolecularDescriptors::from_config`.
use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;
use std::str::FromStr;

use crate::errors::FeatureError;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() {
    Lazy::force(&DOTENV_LOADED);
}

/// Parámetros de la huella por defecto (Morgan).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FingerprintConfig {
    pub radius: u32,
    pub n_bits: usize,
    /// Devuelve la huella como cadena "0101..." en lugar de lista de enteros.
    pub str_mode: bool,
}

impl Default for FingerprintConfig {
    fn default() -> Self {
        Self { radius: 2,
               n_bits: 512,
               str_mode: false }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BatchConfig {
    /// Calcula las filas de un lote en paralelo (rayon), conservando el orden.
    pub parallel: bool,
}

/// Configuración completa de la librería.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureConfig {
    pub fingerprint: FingerprintConfig,
    pub batch: BatchConfig,
    /// Lado en píxeles de las imágenes generadas por `draw_smiles`.
    pub draw_size: u32,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self { fingerprint: FingerprintConfig::default(),
               batch: BatchConfig::default(),
               draw_size: 300 }
    }
}

impl FeatureConfig {
    /// Lee `CHEMFEAT_*` del entorno; las variables ausentes toman el valor
    /// por defecto.
    pub fn from_env() -> Result<Self, FeatureError> {
        init_dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Igual que `from_env` pero con una fuente de variables arbitraria.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, FeatureError>
        where F: Fn(&str) -> Option<String>
    {
        let defaults = Self::default();
        let radius = parse_var(&lookup, "CHEMFEAT_FP_RADIUS")?.unwrap_or(defaults.fingerprint.radius);
        let n_bits = parse_var(&lookup, "CHEMFEAT_FP_BITS")?.unwrap_or(defaults.fingerprint.n_bits);
        if n_bits == 0 {
            return Err(FeatureError::Config("CHEMFEAT_FP_BITS debe ser mayor que 0".into()));
        }
        let str_mode = parse_flag(&lookup, "CHEMFEAT_STR_MODE")?.unwrap_or(defaults.fingerprint.str_mode);
        let parallel = parse_flag(&lookup, "CHEMFEAT_PARALLEL")?.unwrap_or(defaults.batch.parallel);
        let draw_size = parse_var(&lookup, "CHEMFEAT_DRAW_SIZE")?.unwrap_or(defaults.draw_size);
        Ok(Self { fingerprint: FingerprintConfig { radius, n_bits, str_mode },
                  batch: BatchConfig { parallel },
                  draw_size })
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Result<Option<T>, FeatureError>
    where F: Fn(&str) -> Option<String>,
          T: FromStr
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw.trim()
                        .parse()
                        .map(Some)
                        .map_err(|_| FeatureError::Config(format!("{key} no es válido: {raw}"))),
    }
}

fn parse_flag<F>(lookup: &F, key: &str) -> Result<Option<bool>, FeatureError>
    where F: Fn(&str) -> Option<String>
{
    match lookup(key).as_deref().map(str::trim) {
        None => Ok(None),
        Some("1") | Some("true") | Some("yes") => Ok(Some(true)),
        Some("0") | Some("false") | Some("no") => Ok(Some(false)),
        Some(other) => Err(FeatureError::Config(format!("{key} no es válido: {other}"))),
    }
}
