use serde::{Deserialize, Serialize};

use crate::errors::FeatureError;

/// Vector de bits de longitud fija devuelto por una función de huella.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BitVector {
    bits: Vec<bool>,
}

impl BitVector {
    pub fn zeros(len: usize) -> Self {
        Self { bits: vec![false; len] }
    }

    /// Interpreta una cadena "0101..." como la que produce `ToBitString`.
    pub fn from_bit_string(bits: &str) -> Result<Self, FeatureError> {
        let bits = bits.chars()
                       .map(|c| match c {
                           '0' => Ok(false),
                           '1' => Ok(true),
                           other => Err(FeatureError::Toolkit(format!("carácter inesperado en la huella: {other:?}"))),
                       })
                       .collect::<Result<Vec<bool>, _>>()?;
        Ok(Self { bits })
    }

    /// Ignora silenciosamente índices fuera de rango.
    pub fn set(&mut self, idx: usize, value: bool) {
        if let Some(bit) = self.bits.get_mut(idx) {
            *bit = value;
        }
    }

    pub fn get(&self, idx: usize) -> Option<bool> {
        self.bits.get(idx).copied()
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn count_ones(&self) -> usize {
        self.bits.iter().filter(|b| **b).count()
    }

    pub fn to_bit_string(&self) -> String {
        self.bits.iter().map(|b| if *b { '1' } else { '0' }).collect()
    }

    pub fn to_ints(&self) -> Vec<u8> {
        self.bits.iter().map(|b| u8::from(*b)).collect()
    }
}

impl From<Vec<bool>> for BitVector {
    fn from(bits: Vec<bool>) -> Self {
        Self { bits }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_string_parsing() {
        let bv = BitVector::from_bit_string("0110").unwrap();
        assert_eq!(bv.len(), 4);
        assert_eq!(bv.to_ints(), vec![0, 1, 1, 0]);
        assert_eq!(bv.to_bit_string(), "0110");
        assert_eq!(bv.count_ones(), 2);
    }

    #[test]
    fn test_bit_string_rejects_other_chars() {
        assert!(BitVector::from_bit_string("01x").is_err());
    }

    #[test]
    fn test_set_out_of_range_is_ignored() {
        let mut bv = BitVector::zeros(3);
        bv.set(1, true);
        bv.set(7, true);
        assert_eq!(bv.to_ints(), vec![0, 1, 0]);
        assert_eq!(bv.get(7), None);
    }
}
