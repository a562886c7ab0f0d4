//! Custom cargo commands for fuzzmark.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check (check + test + clippy)
//!   cargo xtask bench     - Run benchmarks
//!   cargo xtask fuzz [TARGET] [SECONDS]
//!                         - Run a fuzz target (needs cargo-fuzz and nightly)

use anyhow::{bail, Context, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Debug contracts that the engine must keep calling.
const CONTRACTS: &[&str] = &[
    "check_pattern_ordered",
    "check_spans_well_formed",
    "check_result_well_formed",
    "check_results_ranked",
];

const FUZZ_TARGETS: &[&str] = &["scan_invariants", "ranking_determinism", "json_haystacks"];

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let task = args.next();
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => {
            let target = args.next();
            let seconds = args.next();
            fuzz(target.as_deref(), seconds.as_deref())?
        }
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (contracts + tests + clippy + wasm build)
  test      Run all Rust tests
  check     Quick check (cargo check + test + clippy)
  bench     Run benchmarks
  fuzz      Run fuzz targets: fuzz [TARGET] [SECONDS] (default: all, 60s each)
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("fuzzmark Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Checking contract call sites...");
    check_contract_call_sites()?;
    println!("✓ Every contract is called from the engine\n");

    println!("[2/4] Running Rust tests...");
    run_cargo(&["test", "--quiet", "--all-features"])?;
    println!("✓ All Rust tests passed\n");

    println!("[3/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[4/4] Checking the wasm build...");
    run_cargo(&[
        "check",
        "--quiet",
        "--lib",
        "--no-default-features",
        "--features",
        "wasm",
        "--target",
        "wasm32-unknown-unknown",
    ])?;
    println!("✓ wasm build checks\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");
    println!("\nSafe to commit changes.");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

/// Run one fuzz target, or all of them, for a fixed time each.
fn fuzz(target: Option<&str>, seconds: Option<&str>) -> Result<()> {
    let seconds: u64 = match seconds {
        Some(s) => s
            .parse()
            .with_context(|| format!("invalid fuzz duration {:?}", s))?,
        None => 60,
    };

    let targets: Vec<&str> = match target {
        Some(name) if FUZZ_TARGETS.contains(&name) => vec![name],
        Some(name) => bail!(
            "unknown fuzz target {:?} (expected one of {})",
            name,
            FUZZ_TARGETS.join(", ")
        ),
        None => FUZZ_TARGETS.to_vec(),
    };

    let max_time = format!("-max_total_time={}", seconds);
    for name in targets {
        println!("Fuzzing {} for {}s...", name, seconds);
        run_cargo(&["+nightly", "fuzz", "run", name, "--", max_time.as_str()])?;
    }
    Ok(())
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

/// Collect every `.rs` file under `dir`.
fn rust_sources(dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir).with_context(|| format!("Failed to read {}", dir.display()))? {
        let path = entry?.path();
        if path.is_dir() {
            rust_sources(&path, out)?;
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            out.push(path);
        }
    }
    Ok(())
}

/// Each contract must be called somewhere outside the file defining it.
fn check_contract_call_sites() -> Result<()> {
    let src_dir = project_root()?.join("src");
    let mut files = Vec::new();
    rust_sources(&src_dir, &mut files)?;

    let mut sources = Vec::new();
    for path in files {
        if path.ends_with("verify/contracts.rs") {
            continue;
        }
        let text = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        sources.push(text);
    }

    let missing: Vec<&str> = CONTRACTS
        .iter()
        .copied()
        .filter(|name| {
            let call = format!("{}(", name);
            !sources.iter().any(|text| text.contains(&call))
        })
        .collect();

    if !missing.is_empty() {
        bail!(
            "Contracts no longer called: {}. Someone may have removed safety checks!",
            missing.join(", ")
        );
    }

    Ok(())
}
