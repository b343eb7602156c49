//! Memoized solution series on the default grid.

use std::{collections::HashMap, sync::Arc};

use parking_lot::RwLock;
use serde::Serialize;

use crate::{
    Float,
    core::{grid::Grid, ode::Problem, solution::Solution},
    error::Result,
    methods::Method,
    settings::Parameters,
};

/// Identifies one cached series: the method and the bit pattern of its step.
pub type CacheKey = (Method, u64);

/// The four series on the default grid.
#[derive(Clone, Debug, Serialize)]
pub struct Values {
    pub exact: Arc<Solution>,
    pub euler: Arc<Solution>,
    pub improved_euler: Arc<Solution>,
    pub runge_kutta: Arc<Solution>,
}

impl Values {
    pub fn get(&self, method: Method) -> &Arc<Solution> {
        match method {
            Method::Exact => &self.exact,
            Method::Euler => &self.euler,
            Method::ImprovedEuler => &self.improved_euler,
            Method::RungeKutta4 => &self.runge_kutta,
        }
    }
}

/// Owns the default grid and memoizes each method's series on it.
///
/// Series are computed lazily on first request and handed out as shared
/// [`Arc`]s, so every consumer sees the same immutable data. Reconfiguring
/// replaces the grid and drops every cached series at once.
pub struct ValuesCache<P> {
    problem: P,
    params: Parameters,
    grid: Arc<Grid>,
    entries: RwLock<HashMap<CacheKey, Arc<Solution>>>,
}

impl<P: Problem> ValuesCache<P> {
    /// Validate `params` and build the default grid. Nothing is integrated yet.
    pub fn new(problem: P, params: Parameters) -> Result<Self> {
        params.validate()?;
        let grid = Arc::new(params.grid()?);
        Ok(Self {
            problem,
            params,
            grid,
            entries: RwLock::new(HashMap::new()),
        })
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }

    pub fn parameters(&self) -> &Parameters {
        &self.params
    }

    pub fn grid(&self) -> &Arc<Grid> {
        &self.grid
    }

    fn key(&self, method: Method) -> CacheKey {
        (method, u64::from(self.params.h.to_bits()))
    }

    pub fn is_cached(&self, method: Method) -> bool {
        self.entries.read().contains_key(&self.key(method))
    }

    /// The series of `method` on the default grid, computed on first access.
    pub fn get(&self, method: Method) -> Result<Arc<Solution>> {
        let key = self.key(method);
        if let Some(sol) = self.entries.read().get(&key) {
            log::debug!("cache hit for {method}");
            return Ok(Arc::clone(sol));
        }

        log::debug!("cache miss for {method}, integrating {} points", self.grid.len());
        let sol = Arc::new(method.solve(&self.problem, &self.grid, self.params.y0)?);

        // Another reader may have filled the slot meanwhile; keep the first one.
        let mut entries = self.entries.write();
        Ok(Arc::clone(entries.entry(key).or_insert(sol)))
    }

    /// All four series: exact, Euler, improved Euler and Runge-Kutta.
    pub fn values(&self) -> Result<Values> {
        Ok(Values {
            exact: self.get(Method::Exact)?,
            euler: self.get(Method::Euler)?,
            improved_euler: self.get(Method::ImprovedEuler)?,
            runge_kutta: self.get(Method::RungeKutta4)?,
        })
    }

    /// Replace the parameters, rebuild the grid and drop every cached series.
    ///
    /// On error the cache is left untouched.
    pub fn reconfigure(&mut self, params: Parameters) -> Result<()> {
        params.validate()?;
        self.grid = Arc::new(params.grid()?);
        self.params = params;
        self.clear();
        Ok(())
    }

    /// Drop every cached series.
    pub fn clear(&self) {
        self.entries.write().clear();
    }

    /// Number of cached series.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Default-grid step
    pub fn step(&self) -> Float {
        self.params.h
    }
}
