use crate::cli::LintArgs;
use color_eyre::eyre::{eyre, Result};
use duct::cmd;
use std::fs;
use std::io::Write;

// ---------------------------------------------------------------------------
// Functional Core — pure types and logic, no I/O
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CheckId {
    Fmt,
    Check,
    Clippy,
    Test,
}

/// One cargo invocation of the pipeline.
struct Check {
    id: CheckId,
    /// Arguments passed to `cargo`.
    args: &'static [&'static str],
    /// Arguments used instead of `args` in `--fix` mode.
    fix_args: Option<&'static [&'static str]>,
}

enum CheckOutcome {
    Passed { output: String },
    Failed { output: String },
}

struct CheckResult {
    name: String,
    outcome: CheckOutcome,
}

/// Checks run in order; the pipeline stops at the first failure.
const CHECKS: &[Check] = &[
    Check {
        id: CheckId::Fmt,
        args: &["fmt", "--all", "--check"],
        fix_args: Some(&["fmt", "--all"]),
    },
    Check {
        id: CheckId::Check,
        args: &["check", "--workspace", "--all-targets"],
        fix_args: None,
    },
    Check {
        id: CheckId::Clippy,
        args: &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"],
        fix_args: Some(&[
            "clippy",
            "--workspace",
            "--all-targets",
            "--fix",
            "--allow-dirty",
            "--",
            "-D",
            "warnings",
        ]),
    },
    Check {
        id: CheckId::Test,
        args: &["test", "--workspace", "--all-targets"],
        fix_args: None,
    },
];

fn should_skip(id: CheckId, args: &LintArgs) -> bool {
    match id {
        CheckId::Fmt => args.no_fmt,
        CheckId::Check => args.no_check,
        CheckId::Clippy => args.no_clippy,
        CheckId::Test => args.no_test,
    }
}

/// Arguments to run for a check, honoring `--fix`.
fn effective_args(check: &Check, fix: bool) -> &'static [&'static str] {
    match (fix, check.fix_args) {
        (true, Some(fix_args)) => fix_args,
        _ => check.args,
    }
}

fn check_display_name(args: &[&str]) -> String {
    format!("cargo {}", args.join(" "))
}

fn format_log_entry(result: &CheckResult) -> String {
    let (status, output) = match &result.outcome {
        CheckOutcome::Passed { output } => ("passed", output),
        CheckOutcome::Failed { output } => ("FAILED", output),
    };
    format!("=== {} [{status}] ===\n{output}\n", result.name)
}

// ---------------------------------------------------------------------------
// Imperative Shell — I/O, side effects, orchestration
// ---------------------------------------------------------------------------

/// Run the lint pipeline, writing every check's output to `target/xtask-lint.log`.
pub fn run(args: &LintArgs) -> Result<()> {
    let log_path = resolve_log_path()?;
    let mut log_file = fs::File::create(&log_path)?;

    let mut failed_check: Option<String> = None;

    for check in CHECKS {
        if should_skip(check.id, args) {
            continue;
        }

        let result = run_check(effective_args(check, args.fix))?;
        write!(log_file, "{}", format_log_entry(&result))?;

        match &result.outcome {
            CheckOutcome::Passed { output } => {
                if args.verbose {
                    print!("{output}");
                }
            }
            CheckOutcome::Failed { output } => {
                print!("{output}");
                failed_check = Some(result.name.clone());
                break;
            }
        }
    }

    println!("log: {log_path}");

    match failed_check {
        Some(name) => Err(eyre!("lint failed at: {name}")),
        None => Ok(()),
    }
}

fn run_check(args: &[&str]) -> Result<CheckResult> {
    let output = cmd("cargo", args)
        .stderr_to_stdout()
        .stdout_capture()
        .unchecked()
        .run()?;

    let text = String::from_utf8_lossy(&output.stdout).into_owned();
    let outcome = if output.status.success() {
        CheckOutcome::Passed { output: text }
    } else {
        CheckOutcome::Failed { output: text }
    };

    Ok(CheckResult {
        name: check_display_name(args),
        outcome,
    })
}

fn resolve_log_path() -> Result<String> {
    let target_dir = std::env::current_dir()?.join("target");
    fs::create_dir_all(&target_dir)?;
    let log_path = target_dir.join("xtask-lint.log");
    Ok(log_path.to_string_lossy().into_owned())
}
