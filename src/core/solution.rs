//! A solution series produced by one integrator on one grid.

use std::ops::Deref;

use serde::Serialize;

use crate::{Float, methods::Method};

/// Values aligned index-for-index with the grid they were computed on.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Solution {
    /// The method that produced the series
    pub method: Method,
    /// y values, one per grid point
    pub y: Vec<Float>,
    /// The number of function evaluations (right-hand side or exact formula)
    pub nfev: usize,
}

impl Solution {
    pub fn new(method: Method, y: Vec<Float>, nfev: usize) -> Self {
        Self { method, y, nfev }
    }

    pub fn values(&self) -> &[Float] {
        &self.y
    }

    /// Pointwise absolute difference against another series on the same grid.
    pub fn abs_diff(&self, other: &[Float]) -> Vec<Float> {
        debug_assert_eq!(self.y.len(), other.len());
        self.y
            .iter()
            .zip(other)
            .map(|(a, b)| (a - b).abs())
            .collect()
    }
}

impl Deref for Solution {
    type Target = [Float];

    fn deref(&self) -> &Self::Target {
        &self.y
    }
}
