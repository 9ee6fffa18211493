use ircode_export::export_database;
use std::io::{self, BufWriter};

fn main() {
    let stdout = io::stdout();
    let out = BufWriter::new(stdout.lock());

    if let Err(e) = export_database(out) {
        eprintln!("\nERROR: Failed to export IR codes");
        eprintln!("  {}", e);
        std::process::exit(1);
    }
}
