use std::io::{BufRead, Write};

use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::curve::{validate_curve, validate_point, Curve};
use crate::error::SessionError;
use crate::point::Point;
use crate::render::Render;
use crate::tolerance::Tolerance;

pub type Result<T> = std::result::Result<T, SessionError>;

/// Console dialogue around the arithmetic: asks for a curve once, then for
/// pairs of points until the user is done.
pub struct Session<I, O> {
    input: I,
    output: O,
    tolerance: Tolerance,
    preset: Option<(f64, f64)>,
    rng: StdRng,
}

impl<I: BufRead, O: Write> Session<I, O> {
    pub fn new(input: I, output: O, tolerance: Tolerance) -> Self {
        Self {
            input,
            output,
            tolerance,
            preset: None,
            rng: StdRng::from_entropy(),
        }
    }

    /// Use these coefficients instead of prompting for them.
    pub fn with_preset(mut self, a: f64, b: f64) -> Self {
        self.preset = Some((a, b));
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn into_output(self) -> O {
        self.output
    }

    pub fn run(&mut self, renderer: &mut dyn Render) -> Result<()> {
        writeln!(self.output, "Welcome to the ECC App!")?;

        let curve = match self.preset {
            Some((a, b)) => validate_curve(a, b)?.with_tolerance(self.tolerance),
            None => self.read_curve()?,
        };

        loop {
            writeln!(self.output, "Using the elliptic curve: {curve}")?;
            let p = self.read_point(&curve, "first", "P")?;
            let q = self.read_point(&curve, "second", "Q")?;
            let r = p.add(&q, &curve);
            info!("{p} + {q} = {r}");
            writeln!(self.output, "The result of adding points P and Q is R = {r}")?;
            renderer.render(&curve, &p, &q, &r)?;

            if !self.confirm("Would you like to add another pair of points? (yes/no)")? {
                break;
            }
        }

        writeln!(self.output, "Thank you for using the ECC App!")?;
        Ok(())
    }

    /// Asks a yes/no question. An empty answer counts as yes.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool> {
        write!(self.output, "{prompt} ")?;
        self.output.flush()?;
        loop {
            let answer = self.read_line("a yes/no answer")?;
            match answer.trim().to_lowercase().as_str() {
                "yes" | "y" | "" => return Ok(true),
                "no" | "n" => return Ok(false),
                _ => writeln!(
                    self.output,
                    "Invalid input. Please answer with 'yes' or 'no'."
                )?,
            }
        }
    }

    pub fn read_curve(&mut self) -> Result<Curve> {
        writeln!(
            self.output,
            "Please enter the parameters for the elliptic curve y^2 = x^3 + ax + b:"
        )?;
        loop {
            let a = self.read_number("Enter the coefficient a: ")?;
            let b = self.read_number("Enter the coefficient b: ")?;

            let curve = match validate_curve(a, b) {
                Ok(curve) => curve.with_tolerance(self.tolerance),
                Err(err) => {
                    warn!("{err}");
                    writeln!(
                        self.output,
                        "The curve is singular (not valid). Please enter different coefficients."
                    )?;
                    continue;
                }
            };

            writeln!(self.output, "Using the elliptic curve: {curve}")?;
            if self.confirm("Is this correct? (yes/no)")? {
                return Ok(curve);
            }
        }
    }

    /// Reads one point as `x, y`, optionally wrapped in parentheses.
    pub fn read_point(&mut self, curve: &Curve, ordinal: &str, label: &str) -> Result<Point> {
        let example = curve.random_point(&mut self.rng);
        write!(
            self.output,
            "Please enter the {ordinal} point on the curve {label} as (x, y), e.g. {example}: "
        )?;
        loop {
            self.output.flush()?;
            let line = self.read_line("a point")?;
            let Some((x, y)) = parse_point(&line) else {
                write!(
                    self.output,
                    "Invalid input. Please enter two numeric values for the point (x, y): "
                )?;
                continue;
            };

            match validate_point(curve, x, y) {
                Ok(point) => {
                    writeln!(self.output, "{label} = {point}")?;
                    if self.confirm("Is this correct? (yes/no)")? {
                        return Ok(point);
                    }
                    write!(self.output, "Please enter {label} again as (x, y): ")?;
                }
                Err(err) => {
                    warn!("{err}");
                    write!(
                        self.output,
                        "The point does not lie on the curve. Please enter a valid point (x, y): "
                    )?;
                }
            }
        }
    }

    fn read_number(&mut self, prompt: &str) -> Result<f64> {
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;
            let line = self.read_line("a coefficient")?;
            match line.trim().parse() {
                Ok(value) => return Ok(value),
                Err(_) => writeln!(self.output, "Invalid input. Please enter a numeric value.")?,
            }
        }
    }

    fn read_line(&mut self, waiting_for: &'static str) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SessionError::InputClosed(waiting_for));
        }
        Ok(line)
    }
}

/// Parses `x, y` or `(x, y)`.
pub fn parse_point(line: &str) -> Option<(f64, f64)> {
    let inner = line.trim().trim_matches(|c| c == '(' || c == ')').trim();
    let (x, y) = inner.split_once(',')?;
    Some((x.trim().parse().ok()?, y.trim().parse().ok()?))
}
