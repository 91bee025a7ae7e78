use stockpilot_suppliers::Supplier;

/// Score weights, fixed by design: quality pulls a supplier up, lead time and
/// cost pull it down.
const QUALITY_WEIGHT: f64 = 0.5;
const DELIVERY_WEIGHT: f64 = 0.3;
const COST_WEIGHT: f64 = 0.2;

/// Weighted performance score for one supplier.
///
/// `score = 0.5 * avg_quality - 0.3 * avg_delivery_time - 0.2 * avg_cost`.
///
/// An average with no observations contributes 0 to the score. That default
/// applies to scoring only; the supplier's own accessors still report `None`
/// so callers can tell "no data" from an observed zero.
pub fn score(supplier: &Supplier) -> f64 {
    let quality = supplier.average_quality().unwrap_or(0.0);
    let delivery = supplier.average_delivery_time().unwrap_or(0.0);
    let cost = supplier.average_cost().unwrap_or(0.0);

    QUALITY_WEIGHT * quality - DELIVERY_WEIGHT * delivery - COST_WEIGHT * cost
}

/// Rank suppliers by score, best first.
///
/// The sort is stable: suppliers with equal scores keep their input order,
/// which keeps rankings deterministic.
pub fn rank_suppliers(suppliers: &[Supplier]) -> Vec<&Supplier> {
    let mut scored: Vec<(f64, &Supplier)> = suppliers.iter().map(|s| (score(s), s)).collect();
    scored.sort_by(|(a, _), (b, _)| b.total_cmp(a));
    scored.into_iter().map(|(_, s)| s).collect()
}
