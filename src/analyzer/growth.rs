/// Compounds `principal` by `(1 + rate)` once per year.
///
/// Uses one multiplication per period rather than `powi`, so results match
/// step-by-step compounding. `years <= 0` returns `principal` unchanged,
/// negative values included. The loop is unbounded here; callers cap `years`.
pub fn project_growth(principal: f64, rate: f64, years: i64) -> f64 {
    let factor = 1.0 + rate;
    let mut value = principal;
    for _ in 0..years.max(0) {
        value *= factor;
    }
    value
}
