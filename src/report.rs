//! Entry point computing everything a renderer needs for one configuration.

use std::sync::Arc;

use serde::{Serialize, Serializer};

use crate::{
    Float,
    analysis::{ErrorAnalyzer, GlobalErrors},
    cache::{Values, ValuesCache},
    core::{
        grid::Grid,
        ode::{HomogeneousODE, Problem},
    },
    error::{Error, Result},
    methods::Method,
    settings::Parameters,
};

/// Error series of one approximate integrator.
///
/// Local and global results are kept separately so a failing sweep does not
/// hide the local errors, and vice versa.
#[derive(Debug, Clone, Serialize)]
pub struct MethodReport {
    pub method: Method,
    #[serde(serialize_with = "serialize_result")]
    pub local: Result<Vec<Float>>,
    #[serde(serialize_with = "serialize_result")]
    pub global: Result<GlobalErrors>,
}

impl MethodReport {
    pub fn is_ok(&self) -> bool {
        self.local.is_ok() && self.global.is_ok()
    }
}

/// Values on the default grid plus per-integrator error series.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub grid: Arc<Grid>,
    pub values: Values,
    /// Euler, improved Euler and Runge-Kutta, in that order.
    pub methods: Vec<MethodReport>,
}

impl Report {
    pub fn method(&self, method: Method) -> Option<&MethodReport> {
        self.methods.iter().find(|r| r.method == method)
    }
}

fn serialize_result<T, S>(value: &Result<T>, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    #[derive(Serialize)]
    enum Outcome<'a, T> {
        #[serde(rename = "ok")]
        Success(&'a T),
        #[serde(rename = "err")]
        Failure(String),
    }

    match value {
        Ok(v) => Outcome::Success(v),
        Err(e) => Outcome::Failure(e.to_string()),
    }
    .serialize(serializer)
}

/// Run the full analysis for `params` on the assignment problem.
pub fn run(params: &Parameters) -> Result<Report> {
    run_with(HomogeneousODE, params)
}

/// Run the full analysis for `params` on any problem.
///
/// Configuration errors and failures of the default-grid values abort the
/// run. Each integrator's error analysis is isolated: its failure is stored
/// in its [`MethodReport`] and the remaining integrators still run.
pub fn run_with<P: Problem>(problem: P, params: &Parameters) -> Result<Report> {
    let cache = ValuesCache::new(problem, params.clone())?;
    let values = cache.values()?;
    let analyzer = ErrorAnalyzer::new(&cache)?;

    let methods = Method::APPROXIMATE
        .iter()
        .map(|&method| {
            let report = MethodReport {
                method,
                local: analyzer.local_errors(method),
                global: analyzer.global_errors(method),
            };
            for err in [report.local.as_ref().err(), report.global.as_ref().err()]
                .into_iter()
                .flatten()
            {
                warn_failure(method, err);
            }
            report
        })
        .collect();

    Ok(Report {
        grid: Arc::clone(cache.grid()),
        values,
        methods,
    })
}

fn warn_failure(method: Method, err: &Error) {
    log::warn!("{}: {err}", method.label());
}
