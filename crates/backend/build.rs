use std::env;
use std::fs;
use std::path::Path;

/// Copies config.toml, the model artifact and the static assets next to the
/// built binary, where the backend looks for them at startup.
fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");
    println!("cargo:rerun-if-changed=model");
    println!("cargo:rerun-if-changed=assets");

    let out_dir = env::var("OUT_DIR").unwrap();
    let profile = env::var("PROFILE").unwrap(); // "debug" or "release"

    // OUT_DIR is typically: target/debug/build/backend-xxx/out
    let out_path = Path::new(&out_dir);
    let target_dir = out_path
        .ancestors()
        .find(|p| p.ends_with(&profile))
        .expect("Could not find target profile directory");

    let crate_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let workspace_root = crate_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("Could not find workspace root");

    let source_config = workspace_root.join("config.toml");
    if source_config.exists() {
        let dest_config = target_dir.join("config.toml");
        fs::copy(&source_config, &dest_config)
            .unwrap_or_else(|e| panic!("Failed to copy config.toml: {}", e));
    } else {
        println!(
            "cargo:warning=config.toml not found at {:?}, using default config",
            source_config
        );
    }

    for dir in ["model", "assets"] {
        copy_dir(&crate_dir.join(dir), &target_dir.join(dir));
    }
}

fn copy_dir(from: &Path, to: &Path) {
    if !from.is_dir() {
        println!("cargo:warning={:?} not found, skipping", from);
        return;
    }

    fs::create_dir_all(to).unwrap_or_else(|e| panic!("Failed to create {:?}: {}", to, e));
    for entry in fs::read_dir(from).expect("Failed to read directory") {
        let path = entry.expect("Failed to read entry").path();
        if path.is_file() {
            let dest = to.join(path.file_name().expect("file name"));
            fs::copy(&path, &dest)
                .unwrap_or_else(|e| panic!("Failed to copy {:?}: {}", path, e));
        }
    }
}
