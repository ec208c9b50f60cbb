use std::process::{Command, exit};

fn main() {
    let mut args = std::env::args().skip(1); // skip "xtask"
    let cmd = args.next().unwrap_or_else(|| "help".to_string());

    let result = match cmd.as_str() {
        "test-all" => test_all(),
        "check-conflict" => check_conflict(),
        _ => {
            eprintln!("Usage:");
            eprintln!("  cargo xtask test-all");
            eprintln!("  cargo xtask check-conflict");
            eprintln!("  cargo xtask help");
            exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        exit(1);
    }
}

/// Runs cargo test for the default (single precision) build, then for each explicit
/// precision feature.
fn test_all() -> Result<(), Box<dyn std::error::Error>> {
    // 1) default features: no precision flag, falls back to f32
    run_cmd(&["test", "--package", "cyclone", "--release"])?;

    // 2) each flag on its own
    let feature_sets = ["f64", "f32"];

    for feat in &feature_sets {
        println!("\n=== Testing features: {feat}\n");
        run_cmd(&["test", "--package", "cyclone", "--features", feat, "--release"])?;
    }
    Ok(())
}

/// Asserts that enabling both precisions is rejected with the conflict diagnostic.
fn check_conflict() -> Result<(), Box<dyn std::error::Error>> {
    println!("\n=== Checking features: f32,f64 (must fail)\n");
    let output = Command::new("cargo")
        .args(["check", "--package", "cyclone", "--features", "f32,f64"])
        .output()?;
    let stderr = String::from_utf8_lossy(&output.stderr);

    if output.status.success() {
        return Err("building with both `f32` and `f64` succeeded, expected an error".into());
    }
    if !is_conflict_diagnostic(&stderr) {
        eprintln!("{stderr}");
        return Err("build failed, but not with the f32/f64 conflict diagnostic".into());
    }
    println!("=== f32,f64 rejected as expected");
    Ok(())
}

/// Whether cargo's stderr carries the mutually-exclusive precision error.
fn is_conflict_diagnostic(stderr: &str) -> bool {
    stderr.lines().any(|line| {
        line.contains("error") && line.contains("'f32'") && line.contains("'f64'")
    })
}

/// Helper to run a cargo command line, printing to stdout/stderr.
fn run_cmd(args: &[&str]) -> Result<(), Box<dyn std::error::Error>> {
    let status = Command::new("cargo").args(args).spawn()?.wait()?;

    if !status.success() {
        // we convert the exit code or signal into an error
        return Err(format!("command `cargo {}` failed", args.join(" ")).into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_diagnostic_detected() {
        let stderr = "    Checking cyclone v0.1.0\n\
            error: Features 'f32' and 'f64' are mutually exclusive: enable 'f64' for double \
            precision, or 'f32' (or neither) for single precision\n\
              --> src/lib.rs:18:1\n";
        assert!(is_conflict_diagnostic(stderr));
    }

    #[test]
    fn test_unrelated_failure_not_mistaken_for_conflict() {
        assert!(!is_conflict_diagnostic("error: no such command: `check`\n"));
        assert!(!is_conflict_diagnostic("error[E0425]: cannot find value `x` in this scope\n"));
        assert!(!is_conflict_diagnostic(""));
    }
}
