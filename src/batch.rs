//! Recorrido de lotes fila a fila, secuencial o con rayon.
use rayon::prelude::*;

/// Aplica `f` a cada entrada de forma independiente y devuelve los
/// resultados en el mismo orden de `inputs`, también en modo paralelo.
pub fn map_ordered<S, R, F>(inputs: &[S], parallel: bool, f: F) -> Vec<R>
    where S: Sync,
          R: Send,
          F: Fn(&S) -> R + Sync + Send
{
    if parallel {
        inputs.par_iter().map(|s| f(s)).collect()
    } else {
        inputs.iter().map(|s| f(s)).collect()
    }
}
