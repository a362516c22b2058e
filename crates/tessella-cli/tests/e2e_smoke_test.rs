use std::{fs, path::PathBuf};

use tempfile::tempdir;

use tessella_cli::{Args, CellArg, TraversalArg, run};

/// Demos are at workspace root, relative to workspace not the crate
fn demos_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

/// Collects all sheet files from a directory, skipping configuration files
fn collect_sheet_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file()
                    && path.extension().and_then(|s| s.to_str()) == Some("toml")
                    && path.file_stem().and_then(|s| s.to_str()) != Some("config")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

#[test]
fn e2e_smoke_test_valid_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let valid_demos = collect_sheet_files(demos_dir());

    assert!(!valid_demos.is_empty(), "No valid demos found in demos/");

    let mut failed_demos = Vec::new();

    for demo_path in &valid_demos {
        let output_filename = format!("{}.svg", demo_path.file_stem().unwrap().to_string_lossy());
        let output_path = temp_dir.path().join(output_filename);

        let args = Args::new(
            demo_path.to_string_lossy(),
            output_path.to_string_lossy(),
        );

        match run(&args) {
            Ok(()) => {
                let svg = fs::read_to_string(&output_path).expect("Output file written");
                assert!(svg.contains("</svg>"), "{}", demo_path.display());
            }
            Err(e) => failed_demos.push((demo_path.clone(), e)),
        }
    }

    if !failed_demos.is_empty() {
        eprintln!("\nValid demos that failed:");
        for (path, err) in &failed_demos {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} valid demo(s) failed unexpectedly", failed_demos.len());
    }

    println!("✅ All {} valid demos passed", valid_demos.len());
}

#[test]
fn e2e_smoke_test_error_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_demos = collect_sheet_files(demos_dir().join("errors"));

    assert!(
        !error_demos.is_empty(),
        "No error demos found in demos/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for demo_path in &error_demos {
        let output_filename = format!(
            "error_{}.svg",
            demo_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        let args = Args::new(
            demo_path.to_string_lossy(),
            output_path.to_string_lossy(),
        );

        if run(&args).is_ok() {
            unexpectedly_succeeded.push(demo_path.clone());
        }
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError demos that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error demo(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }

    println!(
        "✅ All {} error demos failed as expected",
        error_demos.len()
    );
}

#[test]
fn e2e_demo_config_with_overrides() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("snake.svg");

    let mut args = Args::new(
        demos_dir().join("snake.toml").to_string_lossy(),
        output_path.to_string_lossy(),
    );
    args.config = Some(demos_dir().join("config.toml").to_string_lossy().to_string());
    args.traversal = Some(TraversalArg::RowMajor);
    args.cell = Some(CellArg::Rect);

    run(&args).expect("Demo config should render");

    let svg = fs::read_to_string(&output_path).expect("Output file written");
    // Phantom cells are drawn because the demo config enables them.
    assert!(svg.contains("stroke-dasharray"), "{svg}");
}

#[test]
fn e2e_missing_input_is_error() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let args = Args::new(
        temp_dir.path().join("absent.toml").to_string_lossy(),
        temp_dir.path().join("absent.svg").to_string_lossy(),
    );

    assert!(run(&args).is_err());
    assert!(!temp_dir.path().join("absent.svg").exists());
}
