use bounded_int_calc::config::{parse_modulus, CalcConfig};
use bounded_int_calc::felt::Modulus;
use bounded_int_calc::interval::Interval;
use bounded_int_calc::ops::Op;
use bounded_int_calc::parser::parse_int;
use bounded_int_calc::range_ops::RangeError;
use bounded_int_calc::render::{generate, Generated};
use clap::{Args, Parser, Subcommand};
use num_bigint::BigInt;

const EXAMPLES: &str = "\
Examples:
    # Addition: [0, 12288] + [0, 12288]
    bounded-int-calc add 0 12288 0 12288

    # Subtraction: [0, 12288] - [0, 12288]
    bounded-int-calc sub 0 12288 0 12288

    # Multiplication: [0, 12288] * [0, 12288]
    bounded-int-calc mul 0 12288 0 12288

    # Division: [128, 255] / [3, 8]
    bounded-int-calc div 128 255 3 8

    # Custom impl name
    bounded-int-calc mul 0 12288 0 12288 --name Zq12289MulHelper";

/// Calculate BoundedInt helper trait implementations.
#[derive(Parser, Debug)]
#[command(version, after_help = EXAMPLES)]
struct Cli {
    #[command(subcommand)]
    command: Command,
    /// Warn about bounds outside this modulus instead of the felt252 prime.
    #[arg(long, global = true, value_parser = parse_modulus)]
    modulus: Option<Modulus>,
    /// Print the computed intervals to stderr.
    #[arg(long, short = 'v', global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Do not print range warnings.
    #[arg(long, short = 'q', global = true, action = clap::ArgAction::Count)]
    quiet: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Addition: [a_lo, a_hi] + [b_lo, b_hi]
    #[command(allow_negative_numbers = true)]
    Add(Operands),
    /// Subtraction: [a_lo, a_hi] - [b_lo, b_hi]
    #[command(allow_negative_numbers = true)]
    Sub(Operands),
    /// Multiplication: [a_lo, a_hi] * [b_lo, b_hi]
    #[command(allow_negative_numbers = true)]
    Mul(Operands),
    /// Division: [a_lo, a_hi] / [b_lo, b_hi]
    #[command(allow_negative_numbers = true, alias = "divrem")]
    Div(DivOperands),
}

#[derive(Args, Debug)]
struct Operands {
    /// Lower bound of first operand
    #[arg(value_parser = parse_int, allow_hyphen_values = true)]
    a_lo: BigInt,
    /// Upper bound of first operand
    #[arg(value_parser = parse_int, allow_hyphen_values = true)]
    a_hi: BigInt,
    /// Lower bound of second operand
    #[arg(value_parser = parse_int, allow_hyphen_values = true)]
    b_lo: BigInt,
    /// Upper bound of second operand
    #[arg(value_parser = parse_int, allow_hyphen_values = true)]
    b_hi: BigInt,
    /// Name for the impl
    #[arg(long)]
    name: Option<String>,
}

#[derive(Args, Debug)]
struct DivOperands {
    /// Lower bound of dividend
    #[arg(value_parser = parse_int, allow_hyphen_values = true)]
    a_lo: BigInt,
    /// Upper bound of dividend
    #[arg(value_parser = parse_int, allow_hyphen_values = true)]
    a_hi: BigInt,
    /// Lower bound of divisor (must be > 0)
    #[arg(value_parser = parse_int, allow_hyphen_values = true)]
    b_lo: BigInt,
    /// Upper bound of divisor
    #[arg(value_parser = parse_int, allow_hyphen_values = true)]
    b_hi: BigInt,
    /// Name for the impl
    #[arg(long)]
    name: Option<String>,
}

impl From<DivOperands> for Operands {
    fn from(d: DivOperands) -> Self {
        Operands { a_lo: d.a_lo, a_hi: d.a_hi, b_lo: d.b_lo, b_hi: d.b_hi, name: d.name }
    }
}

impl Command {
    fn into_parts(self) -> (Op, Operands) {
        match self {
            Command::Add(o) => (Op::Add, o),
            Command::Sub(o) => (Op::Sub, o),
            Command::Mul(o) => (Op::Mul, o),
            Command::Div(o) => (Op::DivRem, o.into()),
        }
    }
}

fn run(op: Op, operands: Operands, config: &CalcConfig) -> Result<Generated, RangeError> {
    let lhs = Interval::new(operands.a_lo, operands.a_hi)?;
    let rhs = Interval::new(operands.b_lo, operands.b_hi)?;
    let generated = generate(op, &lhs, &rhs, operands.name.as_deref(), &config.modulus)?;

    if config.should_log(2) {
        eprintln!("{lhs} {} {rhs} => {}", op.symbol(), generated.bounds);
    }
    Ok(generated)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = CalcConfig::from_env()?;
    config.adjust_verbosity(cli.verbose, cli.quiet);
    if let Some(modulus) = cli.modulus {
        config.modulus = modulus;
    }

    let (op, operands) = cli.command.into_parts();
    match run(op, operands, &config) {
        Ok(generated) => {
            if config.should_log(1) {
                for warning in &generated.warnings {
                    eprintln!("{warning}");
                }
            }
            println!("{}", generated.text);
            Ok(())
        }
        Err(err) => {
            eprintln!("ERROR: {err}");
            std::process::exit(1);
        }
    }
}
