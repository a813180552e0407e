//! Toolkit determinista en memoria.
//! Reconoce un subconjunto orgánico de SMILES (átomos entre corchetes,
//! enlaces, cierres de anillo y ramas balanceadas) y genera huellas y
//! descriptores de conteo simples. Permite fijar valores crudos de
//! descriptores y simular fallos de cálculo por SMILES, útil para pruebas y
//! para trabajar sin Python/RDKit.
use sha2::{Digest, Sha256};
use std::collections::{HashMap, HashSet};

use crate::errors::FeatureError;
use crate::fingerprint::BitVector;
use crate::toolkit::ChemToolkit;

const MOCK_DESCRIPTORS: [&str; 5] =
    ["HeavyAtomCount", "AromaticAtomCount", "RingClosureCount", "BranchCount", "HeteroAtomCount"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockAtom {
    pub symbol: String,
    pub aromatic: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockMolecule {
    pub smiles: String,
    pub atoms: Vec<MockAtom>,
    pub ring_closures: usize,
    pub branches: usize,
}

pub struct MockToolkit {
    raw_descriptors: HashMap<String, Vec<f64>>,
    failing: HashSet<String>,
}

impl MockToolkit {
    pub fn new() -> Self {
        Self { raw_descriptors: HashMap::new(),
               failing: HashSet::new() }
    }

    /// Fija los valores crudos (sin sanear) del registro completo para `smiles`.
    pub fn with_raw_descriptors(mut self, smiles: &str, values: Vec<f64>) -> Self {
        self.raw_descriptors.insert(smiles.to_string(), values);
        self
    }

    /// El SMILES se interpreta bien pero huella y descriptores fallan.
    pub fn failing_on(mut self, smiles: &str) -> Self {
        self.failing.insert(smiles.to_string());
        self
    }

    fn check_failure(&self, mol: &MockMolecule) -> Result<(), FeatureError> {
        if self.failing.contains(&mol.smiles) {
            return Err(FeatureError::Toolkit(format!("fallo simulado para {}", mol.smiles)));
        }
        Ok(())
    }

    fn count_values(mol: &MockMolecule) -> Vec<f64> {
        let aromatic = mol.atoms.iter().filter(|a| a.aromatic).count();
        let hetero = mol.atoms
                        .iter()
                        .filter(|a| !a.symbol.eq_ignore_ascii_case("c") && a.symbol != "*")
                        .count();
        vec![mol.atoms.len() as f64,
             aromatic as f64,
             mol.ring_closures as f64,
             mol.branches as f64,
             hetero as f64]
    }
}

impl Default for MockToolkit {
    fn default() -> Self {
        Self::new()
    }
}

impl ChemToolkit for MockToolkit {
    type Mol = MockMolecule;

    fn name(&self) -> &str {
        "mock"
    }

    fn parse_smiles(&self, smiles: &str) -> Result<Option<MockMolecule>, FeatureError> {
        Ok(scan(smiles))
    }

    fn morgan_fingerprint(&self, mol: &MockMolecule, radius: u32, n_bits: usize) -> Result<BitVector, FeatureError> {
        self.check_failure(mol)?;
        if n_bits == 0 {
            return Err(FeatureError::Toolkit("n_bits debe ser mayor que 0".into()));
        }
        let mut fp = BitVector::zeros(n_bits);
        for start in 0..mol.atoms.len() {
            let end = (start + radius as usize + 1).min(mol.atoms.len());
            let mut hasher = Sha256::new();
            hasher.update(radius.to_le_bytes());
            for atom in &mol.atoms[start..end] {
                hasher.update(atom.symbol.as_bytes());
                hasher.update([u8::from(atom.aromatic)]);
            }
            let digest = hasher.finalize();
            let mut head = [0u8; 8];
            head.copy_from_slice(&digest[..8]);
            fp.set((u64::from_le_bytes(head) % n_bits as u64) as usize, true);
        }
        Ok(fp)
    }

    fn descriptor_names(&self) -> Result<Vec<String>, FeatureError> {
        Ok(MOCK_DESCRIPTORS.iter().map(|s| s.to_string()).collect())
    }

    fn compute_descriptors(&self, mol: &MockMolecule, names: &[String]) -> Result<Vec<f64>, FeatureError> {
        self.check_failure(mol)?;
        let full = match self.raw_descriptors.get(&mol.smiles) {
            Some(values) => values.clone(),
            None => Self::count_values(mol),
        };
        names.iter()
             .map(|name| {
                 MOCK_DESCRIPTORS.iter()
                                 .position(|d| d == name)
                                 .and_then(|idx| full.get(idx).copied())
                                 .ok_or_else(|| FeatureError::UnknownDescriptor(name.clone()))
             })
             .collect()
    }

    fn render_png(&self, _mol: &MockMolecule, _width: u32, _height: u32) -> Result<Vec<u8>, FeatureError> {
        Err(FeatureError::Toolkit("MockToolkit no soporta dibujo".into()))
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Prev {
    Start,
    Atom,
    Ring,
    Bond,
    Open,
    Close,
    Dot,
}

fn scan(smiles: &str) -> Option<MockMolecule> {
    let chars: Vec<char> = smiles.chars().collect();
    let mut atoms = Vec::new();
    let mut open_rings: HashSet<u32> = HashSet::new();
    let mut ring_closures = 0;
    let mut branches = 0;
    let mut depth = 0usize;
    let mut prev = Prev::Start;
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        match c {
            '[' => {
                let end = i + 1 + chars[i + 1..].iter().position(|&x| x == ']')?;
                let inner: String = chars[i + 1..end].iter().collect();
                atoms.push(bracket_atom(&inner)?);
                prev = Prev::Atom;
                i = end + 1;
                continue;
            }
            'C' if chars.get(i + 1) == Some(&'l') => {
                atoms.push(MockAtom { symbol: "Cl".into(), aromatic: false });
                prev = Prev::Atom;
                i += 2;
                continue;
            }
            'B' if chars.get(i + 1) == Some(&'r') => {
                atoms.push(MockAtom { symbol: "Br".into(), aromatic: false });
                prev = Prev::Atom;
                i += 2;
                continue;
            }
            'B' | 'C' | 'N' | 'O' | 'P' | 'S' | 'F' | 'I' | '*' => {
                atoms.push(MockAtom { symbol: c.to_string(), aromatic: false });
                prev = Prev::Atom;
            }
            'b' | 'c' | 'n' | 'o' | 'p' | 's' => {
                atoms.push(MockAtom { symbol: c.to_string(), aromatic: true });
                prev = Prev::Atom;
            }
            '0'..='9' | '%' => {
                if !matches!(prev, Prev::Atom | Prev::Ring | Prev::Bond | Prev::Close) {
                    return None;
                }
                let label = if c == '%' {
                    let tens = chars.get(i + 1)?.to_digit(10)?;
                    let units = chars.get(i + 2)?.to_digit(10)?;
                    i += 2;
                    tens * 10 + units
                } else {
                    c.to_digit(10)?
                };
                if !open_rings.remove(&label) {
                    open_rings.insert(label);
                } else {
                    ring_closures += 1;
                }
                prev = Prev::Ring;
            }
            '(' => {
                if !matches!(prev, Prev::Atom | Prev::Ring | Prev::Close) {
                    return None;
                }
                depth += 1;
                branches += 1;
                prev = Prev::Open;
            }
            ')' => {
                if depth == 0 || matches!(prev, Prev::Open | Prev::Bond) {
                    return None;
                }
                depth -= 1;
                prev = Prev::Close;
            }
            '-' | '=' | '#' | ':' | '/' | '\\' | '$' => {
                if matches!(prev, Prev::Start | Prev::Bond | Prev::Dot) {
                    return None;
                }
                prev = Prev::Bond;
            }
            '.' => {
                if matches!(prev, Prev::Start | Prev::Bond | Prev::Open | Prev::Dot) {
                    return None;
                }
                prev = Prev::Dot;
            }
            _ => return None,
        }
        i += 1;
    }
    if atoms.is_empty() || depth != 0 || !open_rings.is_empty() || matches!(prev, Prev::Bond | Prev::Dot) {
        return None;
    }
    Some(MockMolecule { smiles: smiles.to_string(),
                        atoms,
                        ring_closures,
                        branches })
}

// [13CH3], [nH], [Na+], [C@@H] -> símbolo del elemento
fn bracket_atom(inner: &str) -> Option<MockAtom> {
    let mut rest = inner.trim_start_matches(|c: char| c.is_ascii_digit()).chars().peekable();
    let first = rest.next().filter(|c| c.is_ascii_alphabetic() || *c == '*')?;
    let mut symbol = first.to_string();
    if first.is_ascii_uppercase() {
        if let Some(&next) = rest.peek() {
            if next.is_ascii_lowercase() {
                symbol.push(next);
            }
        }
    }
    Some(MockAtom { aromatic: first.is_ascii_lowercase(),
                    symbol })
}
