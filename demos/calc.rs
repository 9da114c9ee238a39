//! Evaluate a single tnum operation from the command line.
//!
//! ```bash
//! cargo run --example tnum-calc -- mul 1x 100
//! cargo run --example tnum-calc -- add 0b1xx0 11 --members
//! cargo run --example tnum-calc -- lshift 1x1 2 --log-level trace
//! ```

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{bail, eyre};

use tnum_rs::arith::{add, mul, mul_opt, sub};
use tnum_rs::bitwise::{and, arshift, lshift, or, rshift, xor};
use tnum_rs::lattice::{intersect, join, overlaps};
use tnum_rs::tnum::Tnum;

#[derive(Debug, Copy, Clone, ValueEnum)]
enum Op {
    Add,
    Sub,
    Mul,
    MulOpt,
    And,
    Or,
    Xor,
    Join,
    Intersect,
    Lshift,
    Rshift,
    Arshift,
}

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Operation to evaluate.
    #[arg(value_enum)]
    op: Op,

    /// Left operand, MSB first: `0`, `1` or `x` per bit.
    #[arg(value_name = "TNUM")]
    lhs: Tnum,

    /// Right operand; for shifts, a constant shift amount.
    #[arg(value_name = "TNUM")]
    rhs: Tnum,

    /// Operand width for `arshift`.
    #[clap(long, value_name = "BITS", default_value = "64")]
    bitness: u32,

    /// List the members of the result (at most 64 are printed).
    #[clap(long)]
    members: bool,

    /// Log level.
    #[clap(long, value_name = "LEVEL", default_value = "info")]
    log_level: simplelog::LevelFilter,
}

fn shift_amount(t: Tnum) -> color_eyre::Result<u32> {
    if !t.is_const() {
        bail!("shift amount {} is not a constant", t);
    }
    u32::try_from(t.value()).map_err(|_| eyre!("shift amount {} out of range", t.value()))
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        args.log_level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    log::info!("{:?}({}, {})", args.op, args.lhs, args.rhs);

    let (a, b) = (args.lhs, args.rhs);
    let result = match args.op {
        Op::Add => add(a, b),
        Op::Sub => sub(a, b),
        Op::Mul => mul(a, b),
        Op::MulOpt => mul_opt(a, b),
        Op::And => and(a, b),
        Op::Or => or(a, b),
        Op::Xor => xor(a, b),
        Op::Join => join(a, b),
        Op::Intersect => {
            if !overlaps(a, b) {
                bail!("{} and {} have no common member", a, b);
            }
            intersect(a, b)
        }
        Op::Lshift | Op::Rshift | Op::Arshift => {
            let shift = shift_amount(b)?;
            let limit = if matches!(args.op, Op::Arshift) { args.bitness } else { u64::BITS };
            if shift >= limit {
                bail!("shift amount {} must be below {}", shift, limit);
            }
            match args.op {
                Op::Lshift => lshift(a, shift),
                Op::Rshift => rshift(a, shift),
                _ => {
                    if args.bitness != 32 && args.bitness != 64 {
                        bail!("bitness must be 32 or 64, got {}", args.bitness);
                    }
                    arshift(a, shift, args.bitness)
                }
            }
        }
    };

    println!("result = {:#}", result);
    println!("value  = {:#018x}", result.value());
    println!("mask   = {:#018x}", result.mask());
    println!("count  = {}", result.count());

    if args.members {
        for v in result.members().take(64) {
            println!("  {}", v);
        }
    }

    Ok(())
}
