use std::sync::Arc;

use chemfeat_rust::{Cell, DescriptorBatch, FeatureConfig, FeatureError, Fingerprint, FingerprintBatch, FingerprintValue,
                    MockToolkit, MolecularDescriptors, ERROR_SENTINEL};

// Mezcla de entradas válidas, rechazadas por el parser y con fallo de cálculo.
const INPUTS: [&str; 6] = ["CCO", "not-a-smiles", "c1ccccc1O", "C1CC", "CCN", "CC(=O)O"];

fn toolkit() -> Arc<MockToolkit> {
    Arc::new(MockToolkit::new().failing_on("CCN"))
}

#[test]
fn test_fingerprint_table_row_count_and_order() {
    let fp = Fingerprint::new(toolkit());
    let table = fp.calc_table(&INPUTS);
    assert_eq!(table.n_rows(), INPUTS.len());
    for (row, input) in table.rows().iter().zip(INPUTS) {
        assert_eq!(row.input, input);
        assert_eq!(row.cells.len(), 512);
    }
    assert_eq!(table.invalid_rows(), vec![1, 3, 4]);
    for idx in table.invalid_rows() {
        assert!(table.rows()[idx].cells.iter().all(|c| *c == Cell::Int(ERROR_SENTINEL)));
    }
}

#[test]
fn test_fingerprint_list_matches_scalar_calls() {
    let fp = Fingerprint::new(toolkit()).parallel(true);
    let FingerprintBatch::List(rows) = fp.calc_batch(&INPUTS, false) else {
        panic!("se esperaba salida en lista");
    };
    assert_eq!(rows.len(), INPUTS.len());
    for (row, input) in rows.iter().zip(INPUTS) {
        match (row, fp.calc(input)) {
            (Ok(a), Ok(b)) => assert_eq!(a, &b),
            (Err(_), Err(_)) => {}
            _ => panic!("resultado distinto para {input}"),
        }
    }
    assert!(matches!(rows[4], Err(FeatureError::Computation { .. })));
}

#[test]
fn test_descriptor_table_row_count_and_order() {
    let desc = MolecularDescriptors::new(toolkit()).unwrap();
    let DescriptorBatch::Table(table) = desc.calc_batch(&INPUTS, true) else {
        panic!("se esperaba tabla");
    };
    assert_eq!(table.n_rows(), INPUTS.len());
    assert_eq!(table.columns(), desc.catalog().names());
    let matrix = table.to_matrix();
    assert_eq!(matrix[1], vec![-1.0; desc.catalog().len()]);
    assert_eq!(matrix[0], desc.calc("CCO", false).unwrap().into_values());
}

#[test]
fn test_descriptor_sanitization_through_batch() {
    let tk = MockToolkit::new().with_raw_descriptors("CCO", vec![f64::NEG_INFINITY, 1e6, -1e6, 12.5, f64::NAN]);
    let desc = MolecularDescriptors::new(Arc::new(tk)).unwrap();
    let table = desc.calc_table(&["CCO"]);
    assert_eq!(table.to_matrix(), vec![vec![0.0, 0.0, 0.0, 12.5, 0.0]]);
}

#[test]
fn test_config_driven_calculators() {
    let mut config = FeatureConfig::default();
    config.fingerprint.n_bits = 128;
    config.batch.parallel = true;
    let fp = Fingerprint::from_config(toolkit(), &config);
    let table = fp.calc_table(&INPUTS);
    assert_eq!(table.n_cols(), 128);
    assert_eq!(table.n_rows(), INPUTS.len());
    let desc = MolecularDescriptors::from_config(toolkit(), &config).unwrap();
    assert_eq!(desc.calc_table(&INPUTS).n_rows(), INPUTS.len());
}

#[test]
fn test_packed_fingerprint_matches_bits() {
    let bits = Fingerprint::new(toolkit()).calc("c1ccccc1O").unwrap();
    let packed = Fingerprint::new(toolkit()).str_mode(true).calc("c1ccccc1O").unwrap();
    let (FingerprintValue::Bits(bits), FingerprintValue::Packed(packed)) = (bits, packed) else {
        panic!("formatos inesperados");
    };
    let from_packed: Vec<u8> = packed.bytes().map(|b| b - b'0').collect();
    assert_eq!(bits, from_packed);
}

#[test]
fn test_empty_batch() {
    let empty: Vec<String> = vec![];
    let table = Fingerprint::new(toolkit()).calc_table(&empty);
    assert_eq!(table.n_rows(), 0);
    assert_eq!(table.n_cols(), 512);
}
