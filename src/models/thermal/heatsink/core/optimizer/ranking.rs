use std::cmp::Ordering;

use uom::si::{f64::Volume, volume::cubic_meter};

use crate::models::thermal::heatsink::core::{ParameterSet, ThermalResult};

/// A feasible design found by the optimizer.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizationCandidate {
    pub type_id: &'static str,
    pub parameters: ParameterSet,
    pub result: ThermalResult,
    pub material_volume: Volume,

    /// Total resistance, or the temperature rise when ranking under a load.
    pub key: f64,

    pub(super) order: usize,
    pub(super) quantized: Vec<(String, i64)>,
}

/// Orders by key, then re-orders near ties by volume, type and parameters.
///
/// Near ties are runs whose key lies within `tolerance` (relative) of the
/// run's first candidate, so the comparison used for sorting stays a total
/// order.
pub(super) fn rank(candidates: &mut [OptimizationCandidate], tolerance: f64) {
    candidates.sort_by(|a, b| a.key.total_cmp(&b.key).then_with(|| tie_break(a, b)));

    let mut start = 0;
    while start < candidates.len() {
        let leader = candidates[start].key;
        let span = candidates[start..]
            .iter()
            .take_while(|c| c.key - leader <= tolerance * leader.abs())
            .count();
        candidates[start..start + span].sort_by(tie_break);
        start += span.max(1);
    }
}

fn tie_break(a: &OptimizationCandidate, b: &OptimizationCandidate) -> Ordering {
    a.material_volume
        .get::<cubic_meter>()
        .total_cmp(&b.material_volume.get::<cubic_meter>())
        .then(a.order.cmp(&b.order))
        .then_with(|| a.quantized.cmp(&b.quantized))
}
