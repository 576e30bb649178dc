use std::io::{self, Write};

use log::debug;

use crate::curve::Curve;
use crate::point::{Line, Point};

pub const DEFAULT_RANGE: f64 = 10.0;

const WIDTH: usize = 61;
const HEIGHT: usize = 31;
const SAMPLES: usize = 400;

/// Receives the outcome of one addition `p + q = r`.
pub trait Render {
    fn render(&mut self, curve: &Curve, p: &Point, q: &Point, r: &Point) -> io::Result<()>;
}

/// Discards every result, for runs without plotting.
pub struct NoPlot;

impl Render for NoPlot {
    fn render(&mut self, _: &Curve, _: &Point, _: &Point, _: &Point) -> io::Result<()> {
        Ok(())
    }
}

/// Character-grid plot of the curve, the line through `P` and `Q`, and the
/// three points, over the square window `[-range, range]`.
pub struct TextPlot<W> {
    out: W,
    range: f64,
}

impl<W: Write> TextPlot<W> {
    pub fn new(out: W, range: f64) -> Self {
        Self { out, range }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn cell(&self, x: f64, y: f64) -> Option<(usize, usize)> {
        if !(x.abs() <= self.range && y.abs() <= self.range) {
            return None;
        }
        let span = 2.0 * self.range;
        let col = ((x + self.range) / span * (WIDTH - 1) as f64).round() as usize;
        let row = ((self.range - y) / span * (HEIGHT - 1) as f64).round() as usize;
        Some((row.min(HEIGHT - 1), col.min(WIDTH - 1)))
    }

    fn column_x(&self, col: usize) -> f64 {
        -self.range + 2.0 * self.range * col as f64 / (WIDTH - 1) as f64
    }
}

impl<W: Write> Render for TextPlot<W> {
    fn render(&mut self, curve: &Curve, p: &Point, q: &Point, r: &Point) -> io::Result<()> {
        if r.is_infinity() {
            return writeln!(self.out, "Point at infinity: nothing to plot");
        }
        debug!("plotting {curve} over [-{0}, {0}]", self.range);

        let mut grid = vec![vec![' '; WIDTH]; HEIGHT];

        if let Some((row, _)) = self.cell(0.0, 0.0) {
            grid[row].iter_mut().for_each(|c| *c = '-');
        }
        if let Some((_, col)) = self.cell(0.0, 0.0) {
            for line in grid.iter_mut() {
                line[col] = if line[col] == '-' { '+' } else { '|' };
            }
        }

        if let (Some(line), Some((x1, y1))) = (Line::through(p, q, curve), p.coordinates()) {
            if let Some(m) = line.slope() {
                for col in 0..WIDTH {
                    let x = self.column_x(col);
                    if let Some((row, col)) = self.cell(x, m * (x - x1) + y1) {
                        grid[row][col] = '.';
                    }
                }
            }
        }

        for i in 0..SAMPLES {
            let x = -self.range + 2.0 * self.range * i as f64 / (SAMPLES - 1) as f64;
            let rhs = curve.rhs(x);
            if rhs < 0.0 {
                continue;
            }
            let y = rhs.sqrt();
            for y in [y, -y] {
                if let Some((row, col)) = self.cell(x, y) {
                    grid[row][col] = '*';
                }
            }
        }

        let mut outside = Vec::new();
        for (mark, point) in [('P', p), ('Q', q), ('R', r)] {
            let Some((x, y)) = point.coordinates() else {
                continue;
            };
            match self.cell(x, y) {
                Some((row, col)) => grid[row][col] = mark,
                None => outside.push(mark),
            }
        }

        for line in &grid {
            let line: String = line.iter().collect();
            writeln!(self.out, "{}", line.trim_end())?;
        }
        writeln!(self.out, "{curve}")?;
        writeln!(self.out, "P = {p}  Q = {q}  R = {r}")?;
        for mark in outside {
            writeln!(self.out, "{mark} lies outside the plot window")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Render, TextPlot, DEFAULT_RANGE, HEIGHT};
    use crate::curve::validate_curve;
    use crate::point::Point;

    fn plot(range: f64, p: Point, q: Point) -> String {
        let curve = validate_curve(0.0, 1.0).unwrap();
        let r = p.add(&q, &curve);
        let mut sink = TextPlot::new(Vec::new(), range);
        sink.render(&curve, &p, &q, &r).unwrap();
        String::from_utf8(sink.into_inner()).unwrap()
    }

    #[test]
    fn infinity_is_reported_not_drawn() {
        let out = plot(DEFAULT_RANGE, Point::new(0.0, 1.0), Point::new(0.0, -1.0));
        assert_eq!(out, "Point at infinity: nothing to plot\n");
    }

    #[test]
    fn marks_points_curve_and_line() {
        let out = plot(DEFAULT_RANGE, Point::new(2.0, 3.0), Point::new(0.0, 1.0));
        let rows: Vec<&str> = out.lines().take(HEIGHT).collect();
        assert_eq!(rows.len(), HEIGHT);
        for mark in ['P', 'Q', 'R', '*', '.', '+'] {
            assert!(rows.iter().any(|l| l.contains(mark)), "missing {mark}");
        }
        assert!(out.contains("y^2 = x^3 + 0x + 1\n"));
        assert!(out.contains("P = (2, 3)  Q = (0, 1)  R = (-1, 0)\n"));
        assert!(!out.contains("outside"));
    }

    #[test]
    fn points_outside_window_are_listed() {
        let out = plot(1.5, Point::new(2.0, 3.0), Point::new(0.0, 1.0));
        assert!(out.contains("P lies outside the plot window\n"));
        assert!(!out.contains("Q lies outside"));
        assert!(!out.contains("R lies outside"));
    }
}
