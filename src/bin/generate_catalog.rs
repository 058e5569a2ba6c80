use std::path::Path;

use coursedeck::catalog::{fixtures, loader};

fn main() {
    let catalog = fixtures::catalog();

    for output_path in ["catalog.json", "catalog.csv"] {
        loader::save_file(&catalog, Path::new(output_path)).expect("Failed to write catalog");
        println!(
            "Wrote {} courses in {} categories to {output_path}",
            catalog.len(),
            catalog.categories().len()
        );
    }
}
