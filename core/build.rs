use std::env;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let path = Path::new(&out_dir).join("effect_keywords.rs");
    let mut file = BufWriter::new(fs::File::create(&path).unwrap());

    generate_keyword_set(&mut file, "HARMFUL_KEYWORDS", "data/harmful_keywords.txt");
    generate_keyword_set(
        &mut file,
        "BENEFICIAL_GROUND_KEYWORDS",
        "data/beneficial_ground.txt",
    );

    println!("cargo:rerun-if-changed=data/harmful_keywords.txt");
    println!("cargo:rerun-if-changed=data/beneficial_ground.txt");
}

/// One lowercase keyword per line; blank lines and `#` comments are skipped.
fn generate_keyword_set(file: &mut impl Write, name: &str, source: &str) {
    let text =
        fs::read_to_string(source).unwrap_or_else(|e| panic!("failed to read {source}: {e}"));

    let mut keywords: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .collect();
    keywords.sort_unstable();
    keywords.dedup();

    let mut builder = phf_codegen::Set::new();
    for keyword in &keywords {
        builder.entry(keyword.as_str());
    }

    writeln!(
        file,
        "pub static {}: phf::Set<&'static str> = {};",
        name,
        builder.build()
    )
    .unwrap();
}
