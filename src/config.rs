use clap::{ArgAction, Parser};
use log::LevelFilter;

use crate::render::DEFAULT_RANGE;
use crate::tolerance::{Tolerance, DEFAULT_RELATIVE};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Add points on a real elliptic curve y^2 = x^3 + ax + b",
    long_about = None
)]
pub struct Args {
    /// Coefficient a (skips the curve prompt, requires -b)
    #[arg(short = 'a', requires = "b", allow_negative_numbers = true)]
    pub a: Option<f64>,

    /// Coefficient b (skips the curve prompt, requires -a)
    #[arg(short = 'b', requires = "a", allow_negative_numbers = true)]
    pub b: Option<f64>,

    /// Compare coordinates bit for bit instead of with a tolerance
    #[arg(long, conflicts_with = "epsilon")]
    pub exact: bool,

    /// Relative tolerance for coordinate and curve-equation comparisons
    #[arg(long, default_value_t = DEFAULT_RELATIVE, value_parser = positive)]
    pub epsilon: f64,

    /// Half-width of the plot window
    #[arg(long, default_value_t = DEFAULT_RANGE, value_parser = positive)]
    pub range: f64,

    /// Print results without plotting them
    #[arg(long)]
    pub no_plot: bool,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn tolerance(&self) -> Tolerance {
        if self.exact {
            Tolerance::Exact
        } else {
            Tolerance::relative(self.epsilon)
        }
    }

    pub fn preset(&self) -> Option<(f64, f64)> {
        self.a.zip(self.b)
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn positive(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(format!("expected a positive number, got {value}"))
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use log::LevelFilter;

    use super::Args;
    use crate::tolerance::Tolerance;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["ecc-app"]).unwrap();
        assert_eq!(args.preset(), None);
        assert_eq!(args.tolerance(), Tolerance::default());
        assert_eq!(args.range, 10.0);
        assert!(!args.no_plot);
        assert_eq!(args.log_level(), LevelFilter::Warn);
    }

    #[test]
    fn preset_needs_both_coefficients() {
        let args = Args::try_parse_from(["ecc-app", "-a", "-1", "-b", "0"]).unwrap();
        assert_eq!(args.preset(), Some((-1.0, 0.0)));
        assert!(Args::try_parse_from(["ecc-app", "-a", "1"]).is_err());
    }

    #[test]
    fn tolerance_flags() {
        let args = Args::try_parse_from(["ecc-app", "--exact"]).unwrap();
        assert_eq!(args.tolerance(), Tolerance::Exact);
        let args = Args::try_parse_from(["ecc-app", "--epsilon", "1e-6"]).unwrap();
        assert_eq!(args.tolerance(), Tolerance::relative(1e-6));
        assert!(Args::try_parse_from(["ecc-app", "--exact", "--epsilon", "1e-6"]).is_err());
        assert!(Args::try_parse_from(["ecc-app", "--epsilon", "0"]).is_err());
    }

    #[test]
    fn verbosity() {
        let args = Args::try_parse_from(["ecc-app", "-vv", "--no-plot", "--range", "4"]).unwrap();
        assert_eq!(args.log_level(), LevelFilter::Debug);
        assert!(args.no_plot);
        assert_eq!(args.range, 4.0);
    }
}
