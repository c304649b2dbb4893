//! Custom cargo commands for fuzzscan.
//!
//! Usage:
//!   cargo xtask verify              - Run full verification suite
//!   cargo xtask test                - Run all tests (both feature sets)
//!   cargo xtask check               - Quick check
//!   cargo xtask bench               - Run benchmarks
//!   cargo xtask fuzz [TARGET] [SECS] - Run a fuzz target for a while
//!   cargo xtask kani                - Run Kani proofs

use anyhow::{bail, Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Minimum number of `INVARIANT:` comments expected under `src/`.
const MIN_INVARIANT_MARKERS: usize = 5;

const FUZZ_TARGETS: &[&str] = &["matcher_agreement", "wide_patterns"];

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let task = args.next();
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => {
            let target = args.next().unwrap_or_else(|| FUZZ_TARGETS[0].to_string());
            let seconds = match args.next() {
                Some(s) => s.parse().with_context(|| format!("Invalid duration '{}'", s))?,
                None => 60,
            };
            fuzz(&target, seconds)?
        }
        Some("kani") => kani()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify              Run full verification suite (markers + tests + clippy + proofs)
  test                Run all Rust tests, with and without default features
  check               Quick check (cargo check + test + clippy)
  bench               Run benchmarks
  fuzz [TARGET] [S]   Run a fuzz target for S seconds (default: matcher_agreement, 60)
  kani                Run Kani model checking proofs
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("fuzzscan Verification Suite");
    println!("==========================================\n");

    // Step 1: Check invariant markers
    println!("[1/5] Checking invariant markers...");
    let markers = check_invariant_markers()?;
    println!("✓ {} invariant markers present\n", markers);

    // Step 2: Run tests
    println!("[2/5] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    // Step 3: Without rayon
    println!("[3/5] Running Rust tests without default features...");
    run_cargo(&["test", "--quiet", "--no-default-features"])?;
    println!("✓ Sequential build passed\n");

    // Step 4: Clippy
    println!("[4/5] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    // Step 5: Standalone proof crate (plain tests; `cargo xtask kani` runs the model checker)
    println!("[5/5] Testing kani-proofs crate...");
    run_cargo_in(&project_root()?.join("kani-proofs"), &["test", "--quiet"])?;
    println!("✓ Proof primitives pass\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])?;
    run_cargo(&["test", "--no-default-features"])
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
    run_cargo(&["bench", "--bench", "matcher_bench"])
}

/// Run one fuzz target under cargo-fuzz (needs nightly)
fn fuzz(target: &str, seconds: u64) -> Result<()> {
    if !FUZZ_TARGETS.contains(&target) {
        bail!(
            "Unknown fuzz target '{}', expected one of {:?}",
            target,
            FUZZ_TARGETS
        );
    }
    let max_time = format!("-max_total_time={}", seconds);
    run_cargo(&["+nightly", "fuzz", "run", target, "--", &max_time])
}

/// Run Kani proofs in the standalone crate
fn kani() -> Result<()> {
    run_cargo_in(&project_root()?.join("kani-proofs"), &["kani"])
}

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
    run_cargo_in(&project_root()?, args)
}

fn run_cargo_in(dir: &Path, args: &[&str]) -> Result<()> {
    let status = Command::new("cargo")
        .args(args)
        .current_dir(dir)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed in {}", args, dir.display());
    }

    Ok(())
}

fn check_invariant_markers() -> Result<usize> {
    let src_dir = project_root()?.join("src");
    let count = count_markers(&src_dir)?;

    if count < MIN_INVARIANT_MARKERS {
        bail!(
            "Expected at least {} INVARIANT markers, found {}. Someone may have removed safety comments!",
            MIN_INVARIANT_MARKERS,
            count
        );
    }

    Ok(count)
}

fn count_markers(dir: &Path) -> Result<usize> {
    let mut count = 0;
    for entry in std::fs::read_dir(dir).with_context(|| format!("Failed to read {}", dir.display()))? {
        let path = entry?.path();
        if path.is_dir() {
            count += count_markers(&path)?;
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            count += content.lines().filter(|line| line.contains("INVARIANT:")).count();
        }
    }
    Ok(count)
}
