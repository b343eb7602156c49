//! Uniform grids of the independent variable.

use std::{fmt, ops::Deref, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Float, error::{Error, Result}};

/// Ratios within this distance of an integer are treated as that integer when
/// counting grid points, so that e.g. (2.3 - 1.0) / 0.1 yields 13 intervals.
pub(crate) const SNAP: Float = 1e-6;

/// Upper limit on the number of points of a grid or sweep.
pub const MAX_POINTS: usize = 1 << 24;

/// Whether the interval end `xf` is part of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridBound {
    /// x0, x0+h, ... up to and including xf (when xf lies on the lattice).
    ///
    /// An end within the snapping tolerance of the lattice counts as on it,
    /// and the last point is then clamped to xf.
    #[default]
    Inclusive,
    /// x0, x0+h, ... strictly below xf.
    Exclusive,
}

impl FromStr for GridBound {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "inclusive" => Ok(GridBound::Inclusive),
            "exclusive" => Ok(GridBound::Exclusive),
            _ => Err(Error::UnknownGridBound(s.to_string())),
        }
    }
}

impl fmt::Display for GridBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridBound::Inclusive => write!(f, "inclusive"),
            GridBound::Exclusive => write!(f, "exclusive"),
        }
    }
}

/// Number of lattice points `start + i*step` that fit in a span of length
/// `span >= 0`, honouring the bound policy.
///
/// Fails with [`Error::TooManyPoints`] above [`MAX_POINTS`].
pub(crate) fn point_count(span: Float, step: Float, bound: GridBound) -> Result<usize> {
    let ratio = span / step;
    if ratio.is_nan() || ratio >= MAX_POINTS as Float {
        return Err(Error::TooManyPoints { span, step });
    }
    let nearest = ratio.round();
    let on_lattice = (ratio - nearest).abs() < SNAP;
    let n = match (bound, on_lattice) {
        (GridBound::Inclusive, true) => (nearest as usize).checked_add(1),
        (GridBound::Exclusive, true) => Some(nearest as usize),
        (_, false) => (ratio.floor() as usize).checked_add(1),
    };
    n.filter(|&n| n <= MAX_POINTS)
        .ok_or(Error::TooManyPoints { span, step })
}

/// Strictly increasing sample points x0, x0+h, x0+2h, ...
///
/// Points are computed as `x0 + i*h` rather than by repeated addition, so two
/// grids built from the same parameters are bit-identical. No point exceeds xf.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Grid {
    points: Vec<Float>,
    #[serde(skip)]
    h: Float,
}

impl Grid {
    /// Build the grid for `[x0, xf]` with step `h`.
    ///
    /// Fails with a configuration error if `h <= 0`, `xf < x0`, any argument
    /// is not finite, the grid would exceed [`MAX_POINTS`], or the bound policy
    /// leaves no points.
    pub fn new(x0: Float, xf: Float, h: Float, bound: GridBound) -> Result<Self> {
        if !x0.is_finite() {
            return Err(Error::NonFiniteParameter("x0"));
        }
        if !xf.is_finite() {
            return Err(Error::NonFiniteParameter("xf"));
        }
        if !h.is_finite() || h <= 0.0 {
            return Err(Error::InvalidStepSize(h));
        }
        if xf < x0 {
            return Err(Error::InvalidInterval { x0, xf });
        }

        let n = point_count(xf - x0, h, bound)?;
        if n == 0 {
            return Err(Error::EmptyGrid);
        }

        let points: Vec<Float> = (0..n).map(|i| (x0 + i as Float * h).min(xf)).collect();
        log::debug!("built {bound} grid on [{x0}, {xf}] with h = {h}: {n} points");

        Ok(Self { points, h })
    }

    pub fn points(&self) -> &[Float] {
        &self.points
    }

    /// Step size the grid was built with.
    pub fn step(&self) -> Float {
        self.h
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false for a successfully constructed grid.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Float {
        self.points[0]
    }

    pub fn last(&self) -> Float {
        self.points[self.points.len() - 1]
    }
}

impl Deref for Grid {
    type Target = [Float];

    fn deref(&self) -> &Self::Target {
        &self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inclusive_grid_reaches_xf() {
        let g = Grid::new(1.0, 2.3, 0.1, GridBound::Inclusive).unwrap();
        assert_eq!(g.len(), 14);
        assert_eq!(g.first(), 1.0);
        assert!((g.last() - 2.3).abs() < 1e-12);
    }

    #[test]
    fn exclusive_grid_stops_before_xf() {
        let g = Grid::new(1.0, 2.3, 0.1, GridBound::Exclusive).unwrap();
        assert_eq!(g.len(), 13);
        assert!((g.last() - 2.2).abs() < 1e-12);
    }

    #[test]
    fn off_lattice_end_is_same_for_both_bounds() {
        let a = Grid::new(0.0, 1.05, 0.1, GridBound::Inclusive).unwrap();
        let b = Grid::new(0.0, 1.05, 0.1, GridBound::Exclusive).unwrap();
        assert_eq!(a.len(), 11);
        assert_eq!(a, b);
    }

    #[test]
    fn degenerate_interval() {
        let g = Grid::new(1.0, 1.0, 0.1, GridBound::Inclusive).unwrap();
        assert_eq!(g.points(), &[1.0]);
        assert_eq!(
            Grid::new(1.0, 1.0, 0.1, GridBound::Exclusive),
            Err(Error::EmptyGrid)
        );
    }

    #[test]
    fn rejects_bad_parameters() {
        assert_eq!(
            Grid::new(0.0, 1.0, 0.0, GridBound::Inclusive),
            Err(Error::InvalidStepSize(0.0))
        );
        assert_eq!(
            Grid::new(0.0, 1.0, -0.1, GridBound::Inclusive),
            Err(Error::InvalidStepSize(-0.1))
        );
        assert_eq!(
            Grid::new(2.0, 1.0, 0.1, GridBound::Inclusive),
            Err(Error::InvalidInterval { x0: 2.0, xf: 1.0 })
        );
        assert!(Grid::new(Float::NAN, 1.0, 0.1, GridBound::Inclusive).is_err());
    }

    #[test]
    fn strictly_increasing() {
        let g = Grid::new(1.0, 2.3, 0.013, GridBound::Inclusive).unwrap();
        assert!(g.windows(2).all(|w| w[1] > w[0]));
        assert!(g.last() <= 2.3);
    }

    #[test]
    fn snapped_end_is_clamped_to_xf() {
        let xf = 1.09999995;
        let g = Grid::new(1.0, xf, 0.1, GridBound::Inclusive).unwrap();
        assert_eq!(g.len(), 2);
        assert_eq!(g.last(), xf);
    }

    #[test]
    fn tiny_step_is_rejected() {
        for bound in [GridBound::Inclusive, GridBound::Exclusive] {
            assert!(matches!(
                Grid::new(1.0, 2.3, 1e-300, bound),
                Err(Error::TooManyPoints { .. })
            ));
        }
        assert!(point_count(1.0, 1.0 / MAX_POINTS as Float, GridBound::Inclusive).is_err());
        assert_eq!(point_count(1.0, 0.5, GridBound::Inclusive), Ok(3));
    }
}
