use ivp_errors::prelude::*;

mod common;
use common::{assert_close, default_cache, default_params};

#[test]
fn local_errors_on_default_grid() {
    let cache = default_cache();
    let analyzer = ErrorAnalyzer::new(&cache).unwrap();
    let values = cache.values().unwrap();

    for method in Method::APPROXIMATE {
        let local = analyzer.local_errors(method).unwrap();
        assert_eq!(local.len(), cache.grid().len());
        assert!(local.iter().all(|&e| e >= 0.0));
        // y0 = 1 is the exact value at x0 = 1
        assert_close(local[0], 0.0, 1e-15);

        let sol = values.get(method);
        for i in 0..local.len() {
            assert_eq!(local[i], (sol[i] - values.exact[i]).abs());
        }
    }
}

#[test]
fn local_errors_reuse_cached_series() {
    let cache = default_cache();
    let analyzer = ErrorAnalyzer::new(&cache).unwrap();
    analyzer.local_errors(Method::Euler).unwrap();
    assert!(cache.is_cached(Method::Exact));
    assert!(cache.is_cached(Method::Euler));
    assert_eq!(cache.len(), 2);

    // Global sweeps build their own grids and leave the cache alone.
    analyzer.global_errors(Method::RungeKutta4).unwrap();
    assert_eq!(cache.len(), 2);
}

#[test]
fn global_errors_follow_the_sweep() {
    let cache = default_cache();
    let analyzer = ErrorAnalyzer::new(&cache).unwrap();
    assert_eq!(analyzer.reduction(), Reduction::Max);

    let global = analyzer.global_errors(Method::Euler).unwrap();
    assert_eq!(global.steps.len(), 5);
    assert_eq!(global.errors.len(), 5);
    assert_eq!(global.steps, analyzer.sweep().to_vec());
    assert!(global.errors.iter().all(|&e| e > 0.0));
    // Smaller steps, smaller errors
    assert!(global.errors.windows(2).all(|w| w[1] < w[0]));
}

#[test]
fn max_reduction_bounds_every_local_error() {
    let params = Parameters::builder().h(0.05).build();
    let cache = ValuesCache::new(HomogeneousODE, params).unwrap();
    let sweep = StepSweep::single(0.05).unwrap();
    let analyzer = ErrorAnalyzer::with_sweep(&cache, sweep, Reduction::Max);

    for method in Method::APPROXIMATE {
        let local = analyzer.local_errors(method).unwrap();
        let global = analyzer.global_errors(method).unwrap();
        assert_eq!(global.errors.len(), 1);
        assert!(local.iter().all(|&e| e <= global.errors[0]));
        assert!(local.contains(&global.errors[0]));
    }
}

#[test]
fn sum_reduction_is_the_elementwise_sum() {
    let params = Parameters::builder().h(0.05).build();
    let cache = ValuesCache::new(HomogeneousODE, params).unwrap();
    let sweep = StepSweep::single(0.05).unwrap();
    let analyzer = ErrorAnalyzer::with_sweep(&cache, sweep, Reduction::Sum);

    for method in Method::APPROXIMATE {
        let local = analyzer.local_errors(method).unwrap();
        let global = analyzer.global_errors(method).unwrap();
        let sum: f64 = local.iter().sum();
        assert_eq!(global.errors[0], sum);

        let max = Reduction::Max.reduce(&local);
        if local.iter().filter(|&&e| e > 0.0).count() > 1 {
            assert!(global.errors[0] > max);
        }
    }
}

#[test]
fn final_reduction_is_the_last_point() {
    let cache = default_cache();
    let sweep = StepSweep::single(0.1).unwrap();
    let analyzer = ErrorAnalyzer::with_sweep(&cache, sweep, Reduction::Final);

    let local = analyzer.local_errors(Method::ImprovedEuler).unwrap();
    let global = analyzer.global_errors(Method::ImprovedEuler).unwrap();
    assert_eq!(global.errors, vec![local[local.len() - 1]]);
}

#[test]
fn single_step_sweep_matches_default_run() {
    let cache = default_cache();
    let params = default_params();
    let sweep = StepSweep::linspace(params.h, params.h, 1).unwrap();
    let analyzer = ErrorAnalyzer::with_sweep(&cache, sweep, Reduction::Max);

    for method in Method::APPROXIMATE {
        let global = analyzer.global_errors(method).unwrap();
        let local = analyzer.local_errors(method).unwrap();
        assert_eq!(global.steps, vec![0.1]);
        assert_eq!(global.errors, vec![Reduction::Max.reduce(&local)]);
    }
}

#[test]
fn exclusive_bound_applies_to_every_grid() {
    let params = Parameters::builder().grid_bound(GridBound::Exclusive).build();
    let cache = ValuesCache::new(HomogeneousODE, params.clone()).unwrap();
    assert_eq!(cache.grid().len(), 13);
    assert!(cache.grid().last() < params.xf);

    let sweep = StepSweep::single(params.h).unwrap();
    let analyzer = ErrorAnalyzer::with_sweep(&cache, sweep, Reduction::Max);
    for method in Method::APPROXIMATE {
        let local = analyzer.local_errors(method).unwrap();
        assert_eq!(local.len(), 13);
        let global = analyzer.global_errors(method).unwrap();
        assert_eq!(global.errors, vec![Reduction::Max.reduce(&local)]);
    }

    // The last point is dropped, so the worst error cannot exceed the inclusive one.
    let inclusive = default_cache();
    let inclusive = ErrorAnalyzer::new(&inclusive).unwrap();
    let exclusive = ErrorAnalyzer::new(&cache).unwrap();
    for method in Method::APPROXIMATE {
        let a = exclusive.global_errors(method).unwrap();
        let b = inclusive.global_errors(method).unwrap();
        assert_eq!(a.steps, b.steps);
        assert!(a.errors.iter().zip(&b.errors).all(|(x, y)| x <= y));
    }
}

#[test]
fn max_reduction_propagates_nan() {
    assert!(Reduction::Max.reduce(&[0.1, f64::NAN, 0.2]).is_nan());
    assert!(Reduction::Max.reduce(&[f64::NAN, 0.3]).is_nan());
    assert!(Reduction::Sum.reduce(&[0.1, f64::NAN]).is_nan());
    assert_eq!(Reduction::Max.reduce(&[0.1, 0.3, 0.2]), 0.3);
}

#[test]
fn higher_order_methods_converge_faster() {
    let cache = default_cache();
    let sweep = StepSweep::arithmetic(0.02, 0.005, 0.005).unwrap();
    let analyzer = ErrorAnalyzer::with_sweep(&cache, sweep, Reduction::Max);

    let halving = StepSweep::linspace(0.02, 0.01, 2).unwrap();
    let halving = ErrorAnalyzer::with_sweep(&cache, halving, Reduction::Max);
    let ratio = |m: Method| {
        let g = halving.global_errors(m).unwrap();
        g.errors[0] / g.errors[1]
    };
    let (r1, r2, r4) = (
        ratio(Method::Euler),
        ratio(Method::ImprovedEuler),
        ratio(Method::RungeKutta4),
    );
    assert!(r4 > r2 && r2 > r1 && r1 > 1.0, "{r1} {r2} {r4}");

    for method in Method::APPROXIMATE {
        let p = analyzer.global_errors(method).unwrap().observed_order().unwrap();
        let expected = method.order().unwrap() as f64;
        assert!((p - expected).abs() < 0.35, "{method}: observed order {p}");
    }
}

#[test]
fn sweep_failure_names_the_step() {
    let params = Parameters::builder().y0(0.0).build();
    let cache = ValuesCache::new(HomogeneousODE, params).unwrap();
    let analyzer = ErrorAnalyzer::new(&cache).unwrap();

    let err = analyzer.global_errors(Method::Euler).unwrap_err();
    assert_eq!(
        err,
        Error::Sweep {
            step: 0.1,
            source: Box::new(Error::DivisionByZero { x: 1.0, y: 0.0 }),
        }
    );
    assert!(err.is_domain());
    assert!(!err.is_configuration());
}

#[test]
fn reduction_names() {
    assert_eq!("MAX".parse::<Reduction>().unwrap(), Reduction::Max);
    assert_eq!("sum".parse::<Reduction>().unwrap(), Reduction::Sum);
    assert_eq!("last".parse::<Reduction>().unwrap(), Reduction::Final);
    assert!(matches!("mean".parse::<Reduction>(), Err(Error::UnknownReduction(_))));
}

#[test]
fn observed_order_needs_two_points() {
    use ivp_errors::convergence::observed_order;

    assert_eq!(observed_order(&[0.1], &[0.01]), None);
    assert_eq!(observed_order(&[0.1, 0.05], &[0.0, 0.0]), None);
    assert_eq!(observed_order(&[0.1, 0.1], &[0.01, 0.02]), None);
    let p = observed_order(&[0.1, 0.05], &[0.01, 0.0025]).unwrap();
    assert!((p - 2.0).abs() < 1e-12);
}
