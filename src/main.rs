//! `pll-calc`, command line front end for the PLL divider calculations.
//!
//! ```text
//! pll-calc rate  <FIN>  <M> <P> <S> <K> <KS> [--precision N]
//! pll-calc fin   <RATE> <M> <P> <S> <K> <KS> [--precision N]
//! pll-calc table [--precision N]
//! ```

use std::{env, process::ExitCode};

use env_logger::{Builder, Env};
use log::{info, LevelFilter};
use samsung_pll::{constants::*, Decimal, Dividers, Error, MathContext, RoundingMode};

const USAGE: &str = "usage:
  pll-calc rate  <FIN>  <M> <P> <S> <K> <KS> [--precision N]
  pll-calc fin   <RATE> <M> <P> <S> <K> <KS> [--precision N]
  pll-calc table [--precision N]";

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Usage(&'static str),

    #[error("invalid {name} '{value}'")]
    InvalidArgument { name: &'static str, value: String },

    #[error("{source} ({dividers})")]
    Calculation { dividers: Dividers, source: Error },

    #[error("invalid precision: {0}")]
    Precision(#[from] Error),
}

impl CliError {
    fn exit_code(&self) -> u8 {
        match self {
            CliError::Calculation { .. } => 1,
            _ => 2,
        }
    }
}

enum Command {
    Rate { fin: Decimal, dividers: Dividers },
    Fin { rate: Decimal, dividers: Dividers },
    Table,
}

fn main() -> ExitCode {
    Builder::from_env(Env::default().default_filter_or(LevelFilter::Warn.to_string())).init();

    match run(env::args().skip(1).collect()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("pll-calc: {}", e);
            if matches!(e, CliError::Usage(_) | CliError::InvalidArgument { .. }) {
                eprintln!("{}", USAGE);
            }
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(args: Vec<String>) -> Result<(), CliError> {
    let (args, ctx) = split_precision(args)?;
    info!("{:?}", ctx);

    match parse_command(&args)? {
        Command::Rate { fin, dividers } => {
            let rate = dividers
                .rate(&fin, &ctx)
                .map_err(|source| CliError::Calculation { dividers, source })?;
            println!("{}", rate);
        }
        Command::Fin { rate, dividers } => {
            let fin = dividers
                .fin(&rate, &ctx)
                .map_err(|source| CliError::Calculation { dividers, source })?;
            println!("{}", fin);
        }
        Command::Table => {
            println!("{:>12} {:>4} {:>2} {:>2} {:>6} {:>3} {:>16}", "fin", "m", "p", "s", "k", "ks", "rate");
            for entry in PLL_TABLE_26MHZ.iter() {
                let d = entry.dividers;
                let rate = entry
                    .rate_with(&ctx)
                    .map_err(|source| CliError::Calculation { dividers: d, source })?;
                println!(
                    "{:>12} {:>4} {:>2} {:>2} {:>6} {:>3} {:>16}",
                    entry.fin, d.m.0, d.p.0, d.s.0, d.k.0, d.ks.0, rate
                );
            }
        }
    }
    Ok(())
}

/// Pull `--precision N` out of the argument list
fn split_precision(args: Vec<String>) -> Result<(Vec<String>, MathContext), CliError> {
    let mut rest = Vec::with_capacity(args.len());
    let mut ctx = MathContext::default();

    let mut it = args.into_iter();
    while let Some(arg) = it.next() {
        if arg == "--precision" {
            let value = it.next().ok_or(CliError::Usage("--precision needs a value"))?;
            let digits: u32 = value
                .parse()
                .map_err(|_| CliError::InvalidArgument { name: "precision", value })?;
            ctx = MathContext::new(digits, RoundingMode::HalfEven)?;
        } else {
            rest.push(arg);
        }
    }
    Ok((rest, ctx))
}

fn parse_command(args: &[String]) -> Result<Command, CliError> {
    let (cmd, rest) = args.split_first().ok_or(CliError::Usage("missing command"))?;
    match cmd.as_str() {
        "rate" => {
            let (fin, dividers) = parse_frequency_and_dividers("FIN", rest)?;
            Ok(Command::Rate { fin, dividers })
        }
        "fin" => {
            let (rate, dividers) = parse_frequency_and_dividers("RATE", rest)?;
            Ok(Command::Fin { rate, dividers })
        }
        "table" if rest.is_empty() => Ok(Command::Table),
        "table" => Err(CliError::Usage("table takes no arguments")),
        _ => Err(CliError::Usage("unknown command")),
    }
}

fn parse_frequency_and_dividers(name: &'static str, args: &[String]) -> Result<(Decimal, Dividers), CliError> {
    let [freq, m, p, s, k, ks] = args else {
        return Err(CliError::Usage("expected a frequency and five dividers"));
    };

    let freq: Decimal = freq
        .parse()
        .map_err(|_| CliError::InvalidArgument { name, value: freq.clone() })?;

    let divider = |field: &'static str, value: &String| -> Result<u32, CliError> {
        value
            .parse()
            .map_err(|_| CliError::InvalidArgument { name: field, value: value.clone() })
    };

    let dividers = Dividers::new(
        divider("M", m)?,
        divider("P", p)?,
        divider("S", s)?,
        divider("K", k)?,
        divider("KS", ks)?,
    );
    Ok((freq, dividers))
}


#[cfg(test)]
mod tests {
    use super::*;

    fn args(s: &str) -> Vec<String> {
        s.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn test_parse_rate() {
        let (rest, ctx) = split_precision(args("rate 26000000 207 3 0 0 16")).unwrap();
        assert_eq!(ctx, MathContext::DECIMAL128);
        match parse_command(&rest).unwrap() {
            Command::Rate { fin, dividers } => {
                assert_eq!(fin, Decimal::from(26_000_000u64));
                assert_eq!(dividers, Dividers::new(207, 3, 0, 0, 16));
            }
            _ => panic!("expected rate command"),
        }
    }

    #[test]
    fn test_parse_precision_anywhere() {
        let (rest, ctx) = split_precision(args("fin --precision 16 48416.5 30 1 2 16213 0")).unwrap();
        assert_eq!(ctx, MathContext::DECIMAL64);
        assert!(matches!(parse_command(&rest).unwrap(), Command::Fin { .. }));

        assert!(matches!(split_precision(args("table --precision 0")), Err(CliError::Precision(Error::InvalidPrecision))));
        assert!(matches!(split_precision(args("table --precision")), Err(CliError::Usage(_))));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse_command(&args("")), Err(CliError::Usage(_))));
        assert!(matches!(parse_command(&args("rate 1 2 3")), Err(CliError::Usage(_))));
        assert!(matches!(parse_command(&args("bogus")), Err(CliError::Usage(_))));
        assert!(matches!(
            parse_command(&args("rate 26000000 -1 3 0 0 16")),
            Err(CliError::InvalidArgument { name: "M", .. })
        ));
        assert!(matches!(
            parse_command(&args("fin 26MHz 207 3 0 0 16")),
            Err(CliError::InvalidArgument { name: "RATE", .. })
        ));
    }

    #[test]
    fn test_zero_divisor_exit_code() {
        let err = run(args("rate 26000000 207 0 0 0 16")).unwrap_err();
        assert!(matches!(err, CliError::Calculation { source: Error::DivisionByZero, .. }));
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.to_string(), "division by zero (m=207 p=0 s=0 k=0 ks=16)");

        let err = run(args("table extra")).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_run_ok() {
        assert!(run(args("rate 26000000 207 3 0 0 16")).is_ok());
        assert!(run(args("fin 1794000000 207 3 0 0 0")).is_ok());
        assert!(run(args("table --precision 7")).is_ok());
    }
}
