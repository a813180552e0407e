//! Tabla de resultados: una fila por entrada, una columna por bit o descriptor.
//!
//! Las filas inválidas conservan su posición y se rellenan con
//! `ERROR_SENTINEL` en todas las columnas, de modo que la tabla siempre tiene
//! tantas filas como entradas y es rectangular.
use serde::{Deserialize, Serialize};

use crate::errors::FeatureError;

/// Valor que ocupa las celdas de una entrada inválida.
pub const ERROR_SENTINEL: i64 = -1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Cell {
    /// Texto → NaN.
    pub fn as_f64(&self) -> f64 {
        match self {
            Cell::Int(v) => *v as f64,
            Cell::Float(v) => *v,
            Cell::Text(_) => f64::NAN,
        }
    }

    pub fn is_sentinel(&self) -> bool {
        matches!(self, Cell::Int(ERROR_SENTINEL))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    /// Cadena de entrada que originó la fila.
    pub input: String,
    pub cells: Vec<Cell>,
    /// Mensaje de error si la fila es inválida.
    pub error: Option<String>,
}

impl TableRow {
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultTable {
    columns: Vec<String>,
    rows: Vec<TableRow>,
}

impl ResultTable {
    /// Sin columnas derivables se usa una única columna "0".
    pub fn new(columns: Vec<String>) -> Self {
        let columns = if columns.is_empty() { vec!["0".to_string()] } else { columns };
        Self { columns, rows: Vec::new() }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn push_invalid(&mut self, input: &str, err: &FeatureError) {
        self.rows.push(TableRow { input: input.to_string(),
                                  cells: vec![Cell::Int(ERROR_SENTINEL); self.columns.len()],
                                  error: Some(err.to_string()) });
    }

    /// Una fila cuyo ancho no coincide con la tabla se guarda como inválida.
    pub fn push_result(&mut self, input: &str, result: Result<Vec<Cell>, FeatureError>) {
        match result {
            Ok(cells) if cells.len() == self.columns.len() => {
                self.rows.push(TableRow { input: input.to_string(),
                                          cells,
                                          error: None })
            }
            Ok(cells) => {
                let err = FeatureError::ShapeMismatch { expected: self.columns.len(),
                                                        got: cells.len() };
                self.push_invalid(input, &err);
            }
            Err(err) => self.push_invalid(input, &err),
        }
    }

    /// `None` si la columna no existe o alguna fila no la tiene.
    pub fn column(&self, name: &str) -> Option<Vec<&Cell>> {
        let idx = self.columns.iter().position(|c| c == name)?;
        self.rows.iter().map(|r| r.cells.get(idx)).collect()
    }

    pub fn invalid_rows(&self) -> Vec<usize> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, r)| !r.is_valid())
            .map(|(i, _)| i)
            .collect()
    }

    /// Matriz numérica fila a fila; las filas inválidas quedan en -1.
    pub fn to_matrix(&self) -> Vec<Vec<f64>> {
        self.rows.iter().map(|r| r.cells.iter().map(Cell::as_f64).collect()).collect()
    }

    pub fn to_json(&self) -> Result<String, FeatureError> {
        Ok(serde_json::to_string(self)?)
    }
}
