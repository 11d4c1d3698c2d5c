//! Build script to embed the default corpus
//!
//! Reads every category file under `data/` and generates Rust source that
//! includes them as `(file name, contents)` pairs.

use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let data_dir = Path::new(&manifest_dir).join("data");

    generate_sources(
        &data_dir,
        &Path::new(&out_dir).join("corpus.rs"),
        "EMBEDDED_SOURCES",
        "Default category files compiled into the binary",
    );

    // Rebuild if the corpus changes
    println!("cargo:rerun-if-changed=data");
}

fn generate_sources(data_dir: &Path, output_path: &Path, const_name: &str, doc_comment: &str) {
    let mut files: Vec<PathBuf> = fs::read_dir(data_dir)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", data_dir.display()))
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "txt"))
        .collect();
    files.sort();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated corpus").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[(&str, &str)] = &[").unwrap();

    for path in &files {
        let name = path.file_name().unwrap().to_string_lossy();
        println!("cargo:rerun-if-changed={}", path.display());
        writeln!(output, "    ({name:?}, include_str!({:?})),", path.display().to_string()).unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of files in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {};", files.len()).unwrap();
}
