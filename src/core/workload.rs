use std::hint::black_box;

/// Sums `sqrt(x)` for every `x` in `0..size`.
///
/// The result has no meaning; callers run this to keep a core busy. Inputs
/// and the running total pass through `black_box` so the loop survives
/// optimisation even when the caller discards the sum.
pub fn burn_cpu(size: u64) -> f64 {
    let mut sum = 0.0f64;
    for x in 0..size {
        sum = black_box(sum + (black_box(x) as f64).sqrt());
    }
    sum
}

/// True when `iteration` is a multiple of `every`. `every` must be non-zero.
pub fn is_report_iteration(iteration: u64, every: u64) -> bool {
    iteration % every == 0
}
