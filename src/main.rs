use std::sync::Arc;

use chemfeat_rust::{draw_smiles, FeatureConfig, Fingerprint, FingerprintBatch, RdkitDescriptors, RdkitToolkit};

fn main() {
    let config = FeatureConfig::from_env().expect("Configuración CHEMFEAT_* inválida");
    let toolkit = Arc::new(RdkitToolkit::init().expect("Error inicializando Python/RDKit"));

    let smiles = ["CCO", "c1ccccc1O", "not-a-smiles", "CC(=O)Oc1ccccc1C(=O)O"];

    // Huellas: una fila por SMILES, las inválidas con -1
    let fp = Fingerprint::from_config(toolkit.clone(), &config);
    if let FingerprintBatch::Table(table) = fp.calc_batch(&smiles, true) {
        println!("Huellas: {} filas x {} columnas", table.n_rows(), table.n_cols());
        for row in table.rows() {
            match &row.error {
                None => println!("  {} -> {} bits encendidos",
                                 row.input,
                                 row.cells.iter().filter(|c| c.as_f64() == 1.0).count()),
                Some(err) => println!("  {} -> {}", row.input, err),
            }
        }
    }

    // Descriptores del registro completo de RDKit
    let desc = RdkitDescriptors::from_config(toolkit.clone(), &config).expect("catálogo de descriptores");
    println!("Catálogo de descriptores: {} nombres", desc.catalog().len());
    match desc.calc("CCO", true) {
        Ok(values) => println!("MolWt(CCO) = {:?}", values.get("MolWt")),
        Err(err) => println!("CCO -> {err}"),
    }
    let table = desc.calc_table(&smiles);
    println!("Descriptores: {} filas, inválidas en {:?}", table.n_rows(), table.invalid_rows());

    let size = config.draw_size;
    match draw_smiles(toolkit.as_ref(), "c1ccccc1O", (size, size)) {
        Ok(png) => println!("Imagen de fenol: {} bytes PNG", png.len()),
        Err(err) => println!("No se pudo dibujar: {err}"),
    }
}
