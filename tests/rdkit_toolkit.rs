//! Requiere Python con RDKit instalado (`cargo test --features rdkit`).
#![cfg(feature = "rdkit")]

use std::sync::Arc;

use chemfeat_rust::{draw_smiles, FeatureError, Fingerprint, RdkitDescriptors, RdkitToolkit};

fn toolkit() -> Arc<RdkitToolkit> {
    Arc::new(RdkitToolkit::init().expect("Fallo al inicializar Python/RDKit"))
}

#[test]
fn test_fingerprint_ethanol() {
    let fp = Fingerprint::new(toolkit());
    let value = fp.calc("CCO").unwrap();
    let bits = value.as_bits().unwrap();
    assert_eq!(bits.len(), 512);
    assert!(bits.iter().all(|b| *b <= 1));
    assert_eq!(fp.calc("CCO").unwrap(), value);
}

#[test]
fn test_fingerprint_invalid() {
    let fp = Fingerprint::new(toolkit());
    assert!(matches!(fp.calc("not-a-smiles"), Err(FeatureError::InvalidSmiles(_))));
}

#[test]
fn test_descriptors_ethanol_mol_weight() {
    let desc = RdkitDescriptors::new(toolkit()).unwrap();
    let values = desc.calc("CCO", true).unwrap();
    assert_eq!(values.len(), desc.catalog().len());
    let mol_wt = values.get("MolWt").unwrap();
    assert!(mol_wt.is_finite());
    assert!((mol_wt - 46.07).abs() < 0.1); // Peso molecular aproximado
    assert!(values.into_values().iter().all(|v| v.abs() <= 100_000.0));
}

#[test]
fn test_catalog_is_stable() {
    let a = RdkitDescriptors::new(toolkit()).unwrap();
    let b = RdkitDescriptors::new(toolkit()).unwrap();
    assert_eq!(a.catalog(), b.catalog());
}

#[test]
fn test_descriptor_table_with_invalid_row() {
    let desc = RdkitDescriptors::new(toolkit()).unwrap();
    let table = desc.calc_table(&["CCO", "C1CC", "c1ccccc1"]);
    assert_eq!(table.n_rows(), 3);
    assert_eq!(table.invalid_rows(), vec![1]);
}

#[test]
fn test_draw_png_signature() {
    let png = draw_smiles(toolkit().as_ref(), "c1ccccc1O", (200, 200)).unwrap();
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
}
