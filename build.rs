use std::env;
use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=fixtures/");

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("fixture_includes.rs");

    // Get the manifest directory (where Cargo.toml is)
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let fixtures_dir = Path::new(&manifest_dir).join("fixtures");

    let mut includes = String::new();
    let mut match_arms = String::new();
    let mut dir_names: Vec<String> = Vec::new();

    // Each top-level directory under fixtures/ is one fixture project
    if fixtures_dir.exists() {
        let mut kind_dirs: Vec<_> = fs::read_dir(&fixtures_dir)
            .unwrap()
            .filter_map(|entry| {
                let path = entry.ok()?.path();
                path.is_dir().then_some(path)
            })
            .collect();

        // Sort for consistent ordering
        kind_dirs.sort();

        for kind_dir in &kind_dirs {
            let dir_name = kind_dir
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap()
                .to_string();
            let const_name = dir_name.to_uppercase().replace('-', "_");

            let mut files = Vec::new();
            collect_files(kind_dir, kind_dir, &mut files);
            files.sort();

            includes.push_str(&format!(
                "pub const {}: &[FixtureFile] = &[\n",
                const_name
            ));
            for (rel_path, abs_path) in &files {
                includes.push_str(&format!(
                    "    FixtureFile {{ path: {:?}, content: include_str!({:?}) }},\n",
                    rel_path, abs_path
                ));
            }
            includes.push_str("];\n\n");

            match_arms.push_str(&format!("        {:?} => Some({}),\n", dir_name, const_name));
            dir_names.push(dir_name);
        }
    }

    let mut lookup = String::new();
    lookup.push_str("/// Embedded files for the named fixture directory.\n");
    lookup.push_str("pub fn fixture_manifest(dir_name: &str) -> Option<&'static [FixtureFile]> {\n");
    lookup.push_str("    match dir_name {\n");
    lookup.push_str(&match_arms);
    lookup.push_str("        _ => None,\n");
    lookup.push_str("    }\n");
    lookup.push_str("}\n\n");
    lookup.push_str("/// Fixture directory names discovered at build time, in sorted order.\n");
    lookup.push_str(&format!(
        "pub const FIXTURE_DIRS: &[&str] = &{:?};\n",
        dir_names
    ));

    // Write the generated code
    let generated_code = format!("{}{}", includes, lookup);
    fs::write(&dest_path, generated_code).unwrap();
}

/// Recursively collect (project-relative path, absolute include path) pairs.
fn collect_files(base: &Path, dir: &Path, files: &mut Vec<(String, String)>) {
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            collect_files(base, &path, files);
        } else {
            let rel_path = path
                .strip_prefix(base)
                .unwrap()
                .to_str()
                .unwrap()
                .replace('\\', "/");
            let abs_path = path
                .canonicalize()
                .unwrap()
                .to_str()
                .unwrap()
                .replace('\\', "/");
            files.push((rel_path, abs_path));
        }
    }
}
