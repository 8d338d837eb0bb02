use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use std::process::{Command, Stdio};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "x")]
#[command(about = "Development automation for framewin")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lint, then run every test
    Ci {
        #[arg(long)]
        verbose: bool,
    },
    /// Check formatting and run clippy
    Lint {
        /// Apply formatting and clippy suggestions instead of checking
        #[arg(long)]
        fix: bool,
    },
    /// Run tests
    Test {
        /// Limit to one or more areas (repeatable)
        #[arg(long, value_enum)]
        only: Vec<Area>,
        /// Include tests marked #[ignore]
        #[arg(long)]
        ignored: bool,
    },
    /// Run the presentation benchmarks
    Bench {
        /// Benchmark group
        #[arg(long, value_enum)]
        group: Option<BenchGroup>,
    },
    /// Run the demo window
    Demo {
        /// Log filter passed through RUST_LOG
        #[arg(long, default_value = "info")]
        log: String,
        #[arg(long)]
        release: bool,
    },
}

/// Test areas and the filters that select them
#[derive(Clone, Copy, ValueEnum)]
enum Area {
    /// Pixel buffer, surface, hosts and screenshots
    Display,
    /// Key table and key code mapping
    Input,
    /// Frame pacing
    Timing,
    /// Session integration tests
    Session,
    /// Documentation examples
    Doc,
}

impl Area {
    fn cargo_args(self) -> &'static [&'static str] {
        match self {
            Area::Display => &["--lib", "display::"],
            Area::Input => &["--lib", "input::"],
            Area::Timing => &["--test", "pacing_tests"],
            Area::Session => &["--test", "session_tests"],
            Area::Doc => &["--doc"],
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum BenchGroup {
    Blit,
    Rgba,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Ci { verbose } => run_ci(verbose),
        Commands::Lint { fix } => run_lint(fix),
        Commands::Test { only, ignored } => run_tests(&only, ignored),
        Commands::Bench { group } => run_bench(group),
        Commands::Demo { log, release } => run_demo(&log, release),
    }
}

fn run_ci(verbose: bool) -> Result<()> {
    println!("{}", "=== framewin CI ===".bold().blue());
    let start = Instant::now();

    step("Lint", || run_lint(false), verbose)?;
    step("Tests", || run_tests(&[], false), verbose)?;
    step("Bench build", || cargo(&["bench", "--no-run"]), verbose)?;

    println!(
        "\n{} {}",
        "✓ CI passed in".green().bold(),
        format!("{:.2}s", start.elapsed().as_secs_f64()).bold()
    );
    Ok(())
}

fn run_lint(fix: bool) -> Result<()> {
    if fix {
        cargo(&["fmt", "--all"])?;
        cargo(&["clippy", "--all-targets", "--fix", "--allow-dirty"])
    } else {
        cargo(&["fmt", "--all", "--", "--check"])?;
        cargo(&["clippy", "--all-targets", "--", "-D", "warnings"])
    }
}

fn run_tests(only: &[Area], ignored: bool) -> Result<()> {
    let extra: &[&str] = if ignored { &["--", "--include-ignored"] } else { &[] };

    if only.is_empty() {
        return cargo(&test_args(&[], extra));
    }

    let mut failed = Vec::new();
    for &area in only {
        let name = area.to_possible_value().map(|v| v.get_name().to_string());
        let name = name.unwrap_or_default();
        println!("{} {} tests", "→".blue(), name.bold());

        if cargo(&test_args(area.cargo_args(), extra)).is_err() {
            println!("{} {} tests failed\n", "✗".red(), name);
            failed.push(name);
        }
    }

    if failed.is_empty() {
        Ok(())
    } else {
        anyhow::bail!("Failing areas: {}", failed.join(", "))
    }
}

fn test_args<'a>(filter: &[&'a str], extra: &[&'a str]) -> Vec<&'a str> {
    let mut args = vec!["test"];
    args.extend_from_slice(filter);
    args.extend_from_slice(extra);
    args
}

fn run_bench(group: Option<BenchGroup>) -> Result<()> {
    match group {
        Some(BenchGroup::Blit) => cargo(&["bench", "--bench", "blit_bench", "--", "blit"]),
        Some(BenchGroup::Rgba) => cargo(&["bench", "--bench", "blit_bench", "--", "rgba"]),
        None => cargo(&["bench"]),
    }
}

fn run_demo(log: &str, release: bool) -> Result<()> {
    println!(
        "{} Demo ({}), RUST_LOG={}",
        "→".blue(),
        if release {
            "release".green().bold()
        } else {
            "debug".yellow().bold()
        },
        log.cyan()
    );

    let mut cmd = Command::new("cargo");
    cmd.args(["run", "--bin", "framewin"]);
    if release {
        cmd.arg("--release");
    }
    cmd.env("RUST_LOG", log);

    let start = Instant::now();
    execute(&mut cmd)?;
    println!(
        "\n{} Demo ran for {}",
        "✓".green().bold(),
        format!("{:.2}s", start.elapsed().as_secs_f64()).bold()
    );
    Ok(())
}

fn step<F>(name: &str, task: F, verbose: bool) -> Result<()>
where
    F: FnOnce() -> Result<()>,
{
    println!("{} {}", "→".blue(), name.bold());
    let start = Instant::now();

    match task() {
        Ok(()) => {
            if verbose {
                let secs = start.elapsed().as_secs_f64();
                println!("{} {} ({:.2}s)", "✓".green().bold(), name, secs);
            }
            Ok(())
        }
        Err(e) => {
            println!("{} {}", "✗".red().bold(), name);
            Err(e)
        }
    }
}

fn cargo(args: &[&str]) -> Result<()> {
    execute(Command::new("cargo").args(args))
}

fn execute(cmd: &mut Command) -> Result<()> {
    let status = cmd
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()?;

    if !status.success() {
        anyhow::bail!("Command failed with exit code: {}", status);
    }
    Ok(())
}
