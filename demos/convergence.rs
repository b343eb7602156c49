//! # Example: Convergence of Euler, Improved Euler and Runge-Kutta 4
//!
//! Solve y' = x/y + y/x on [1, 2.3] with y(1) = 1 and compare each method
//! against the exact solution y = x * sqrt(2 ln x + 1).
//!
//! Run with `RUST_LOG=debug` to see cache and sweep activity.

use ivp_errors::prelude::*;

fn main() {
    env_logger::init();

    let params = Parameters::builder()
        .x0(1.0)
        .xf(2.3)
        .h(0.1)
        .y0(1.0)
        .err0(0.1)
        .errf(0.01)
        .n_err_steps(10)
        .build();

    let report = match run(&params) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Analysis failed: {e}");
            return;
        }
    };

    println!("{:>6} {:>12} {:>12} {:>12} {:>12}", "x", "exact", "euler", "heun", "rk4");
    let v = &report.values;
    for (i, x) in report.grid.iter().enumerate() {
        println!(
            "{:>6.2} {:>12.8} {:>12.8} {:>12.8} {:>12.8}",
            x, v.exact[i], v.euler[i], v.improved_euler[i], v.runge_kutta[i]
        );
    }

    for r in &report.methods {
        println!("\n{} ({} error)", r.method.label(), params.reduction);
        match &r.global {
            Ok(global) => {
                for (h, e) in global.iter() {
                    println!("  h = {h:<8.5} error = {e:.3e}");
                }
                if let Some(p) = global.observed_order() {
                    println!("  observed order: {p:.3}");
                }
            }
            Err(e) => println!("  failed: {e}"),
        }
    }
}
