use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum, ValueHint};
use coo_arith::codec::{read_matrix, write_matrix};
use coo_arith::constants::{DEFAULT_OUTPUT_DIR, DEFAULT_OUTPUT_FILE};
use coo_arith::{
    dispatch_with, AccumulatorKind, EngineConfig, Operation, OutputConfig, SparseMatrix,
};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Add, subtract or multiply two sparse matrices stored as (row, col, value) text files"
)]
struct Cli {
    /// Left operand matrix file
    #[arg(value_hint = ValueHint::FilePath)]
    left: PathBuf,

    /// Right operand matrix file
    #[arg(value_hint = ValueHint::FilePath)]
    right: PathBuf,

    /// Operation to run: add, subtract, multiply (or 1, 2, 3). Prompts when omitted
    #[arg(long, short)]
    op: Option<String>,

    /// Save the result without asking
    #[arg(long, conflicts_with = "no_save")]
    save: bool,

    /// Do not save the result and do not ask
    #[arg(long)]
    no_save: bool,

    /// Directory the result file is written to
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR, value_hint = ValueHint::DirPath)]
    output_dir: PathBuf,

    /// Name of the result file
    #[arg(long, default_value = DEFAULT_OUTPUT_FILE)]
    output_name: String,

    /// Accumulation strategy used by multiplication
    #[arg(long, value_enum, default_value_t = AccumulatorArg::Sort)]
    accumulator: AccumulatorArg,
}

#[derive(Clone, Copy, ValueEnum)]
enum AccumulatorArg {
    /// Sort partial products, then merge duplicates
    Sort,
    /// Running sums in an ordered map
    Map,
}

impl From<AccumulatorArg> for AccumulatorKind {
    fn from(arg: AccumulatorArg) -> Self {
        match arg {
            AccumulatorArg::Sort => AccumulatorKind::SortThenReduce,
            AccumulatorArg::Map => AccumulatorKind::OrderedMap,
        }
    }
}

fn main() -> ExitCode {
    init_tracing();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout carries only the menu and the matrix text
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr);
    Registry::default().with(filter).with(fmt_layer).init();
}

fn run(cli: Cli) -> Result<ExitCode> {
    let a: SparseMatrix<f64> = read_matrix(&cli.left)
        .with_context(|| format!("failed to load {}", cli.left.display()))?;
    let b: SparseMatrix<f64> = read_matrix(&cli.right)
        .with_context(|| format!("failed to load {}", cli.right.display()))?;
    info!(
        left = ?a.shape(),
        left_nnz = a.nnz(),
        right = ?b.shape(),
        right_nnz = b.nnz(),
        "loaded operands"
    );

    let stdin = io::stdin();
    let mut input = stdin.lock();

    let choice = match cli.op {
        Some(op) => op,
        None => prompt_choice(&mut input)?,
    };
    let op: Operation = match choice.parse() {
        Ok(op) => op,
        Err(err) => {
            debug!("{err}");
            println!("Invalid choice!");
            return Ok(ExitCode::FAILURE);
        }
    };

    let config = EngineConfig::with_accumulator(cli.accumulator.into());
    let result = dispatch_with(op, &a, &b, &config).with_context(|| {
        format!(
            "cannot {op} {} and {}",
            cli.left.display(),
            cli.right.display()
        )
    })?;

    println!("\n{}", op.describe());
    println!("{result}");

    let save = if cli.save {
        true
    } else if cli.no_save {
        false
    } else {
        prompt_yes_no(
            &mut input,
            "\nDo you want to save the result to a file? (yes/no): ",
        )?
    };

    if save {
        let output = OutputConfig {
            dir: cli.output_dir,
            file_name: cli.output_name,
        };
        let path = output.path();
        write_matrix(&path, &result)
            .with_context(|| format!("failed to save result to {}", path.display()))?;
        println!("\nResult saved to {}", path.display());
    } else {
        println!("\nResult not saved.");
    }

    Ok(ExitCode::SUCCESS)
}

fn prompt_choice(input: &mut impl BufRead) -> Result<String> {
    println!("\nSelect an operation to perform:");
    for op in Operation::ALL {
        println!("{}. {}", op.menu_choice(), op.label());
    }
    prompt(input, "Enter your choice (1/2/3): ")
}

fn prompt_yes_no(input: &mut impl BufRead, question: &str) -> Result<bool> {
    Ok(prompt(input, question)?.eq_ignore_ascii_case("yes"))
}

fn prompt(input: &mut impl BufRead, message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;

    let mut line = String::new();
    input.read_line(&mut line).context("failed to read from stdin")?;
    Ok(line.trim().to_string())
}
