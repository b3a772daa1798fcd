//! Grid layout decided before any candidate is evaluated.

use log::debug;
use uom::si::{
    f64::Length,
    length::{meter, millimeter},
};

use crate::models::thermal::heatsink::core::{
    ManufacturingLimits, ParameterSet,
    registry::{ParameterRole, ParameterSpec, TypeDescriptor, TypeRegistry},
};

/// Keeps open lower bounds (gap, pitch) strictly above their limit, in meters.
const OPEN_BOUND_MARGIN: f64 = 1e-6;

/// One searched parameter, in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axis {
    pub name: &'static str,
    pub lower: f64,
    pub upper: f64,
    pub steps: usize,
}

impl Axis {
    /// Value of grid step `index`; a single step sits mid-range.
    #[must_use]
    pub fn value(&self, index: usize) -> f64 {
        if self.steps <= 1 {
            return 0.5 * (self.lower + self.upper);
        }
        let fraction = index as f64 / (self.steps - 1) as f64;
        self.lower + (self.upper - self.lower) * fraction
    }
}

/// Grid for one heatsink type.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeGrid {
    pub type_id: &'static str,

    /// Registration index, used as a tie-break.
    pub order: usize,

    pub axes: Vec<Axis>,
}

impl TypeGrid {
    /// Number of points in the grid.
    #[must_use]
    pub fn len(&self) -> usize {
        if self.axes.is_empty() {
            return 0;
        }
        self.axes.iter().map(|axis| axis.steps).product()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Parameter set at flat `index`, decoded in mixed radix over the axes.
    #[must_use]
    pub fn point(&self, index: usize) -> ParameterSet {
        let mut rest = index;
        self.axes.iter().fold(ParameterSet::new(), |set, axis| {
            let digit = rest % axis.steps;
            rest /= axis.steps;
            set.with(axis.name, Length::new::<meter>(axis.value(digit)))
        })
    }

    /// Iterates over every point in index order.
    pub fn points(&self) -> impl Iterator<Item = ParameterSet> + '_ {
        (0..self.len()).map(|index| self.point(index))
    }
}

/// Per-type grids sized so their total never exceeds the evaluation cap.
#[derive(Debug, Clone, PartialEq)]
pub struct GridPlan {
    pub grids: Vec<TypeGrid>,
    pub cap: usize,
}

impl GridPlan {
    /// Plans the search over every registered type.
    ///
    /// Ranges are the schema ranges narrowed by the CNC limits and the total
    /// height cap. Types left with an empty range get no share of the cap.
    #[must_use]
    pub fn build(
        registry: &TypeRegistry,
        max_height: Length,
        limits: &ManufacturingLimits,
        cap: usize,
    ) -> Self {
        let ranged: Vec<_> = registry
            .iter()
            .enumerate()
            .filter_map(|(order, descriptor)| {
                feasible_ranges(descriptor, max_height.get::<meter>(), limits)
                    .map(|ranges| (order, descriptor.id, ranges))
            })
            .collect();

        let shares = ranged.len().max(1);
        let grids = ranged
            .into_iter()
            .enumerate()
            .map(|(slot, (order, type_id, ranges))| {
                let budget = cap / shares + usize::from(slot < cap % shares);
                let steps = steps_within(budget, ranges.len());
                let axes: Vec<_> = ranges
                    .into_iter()
                    .map(|(name, lower, upper)| Axis {
                        name,
                        lower,
                        upper,
                        steps,
                    })
                    .collect();
                let grid = TypeGrid {
                    type_id,
                    order,
                    axes,
                };
                debug!(
                    "{type_id}: {steps} steps over {} parameters, {} of {budget} points",
                    grid.axes.len(),
                    grid.len()
                );
                grid
            })
            .collect();

        let plan = Self { grids, cap };
        assert!(plan.total_points() <= cap, "grid plan exceeds evaluation cap");
        plan
    }

    #[must_use]
    pub fn total_points(&self) -> usize {
        self.grids.iter().map(TypeGrid::len).sum()
    }
}

/// Largest `n` with `n^dims ≤ budget`.
fn steps_within(budget: usize, dims: usize) -> usize {
    let Ok(dims) = u32::try_from(dims) else {
        return usize::from(budget > 0);
    };
    if dims == 0 {
        return 0;
    }
    let mut n = (budget as f64).powf(1.0 / f64::from(dims)).floor() as usize;
    while n > 0 && n.checked_pow(dims).is_none_or(|points| points > budget) {
        n -= 1;
    }
    while (n + 1).checked_pow(dims).is_some_and(|points| points <= budget) {
        n += 1;
    }
    n
}

/// Search range `(name, lower, upper)` in meters for every schema entry, or
/// `None` if some range is empty.
fn feasible_ranges(
    descriptor: &TypeDescriptor,
    max_height: f64,
    limits: &ManufacturingLimits,
) -> Option<Vec<(&'static str, f64, f64)>> {
    let min_of = |role: ParameterRole| -> f64 {
        descriptor
            .schema
            .iter()
            .filter(|spec| spec.role == role)
            .map(|spec| lower_bound(spec, limits))
            .sum()
    };
    let min_base = min_of(ParameterRole::BaseThickness);
    let min_height = min_of(ParameterRole::Height);

    let ranges: Vec<_> = descriptor
        .schema
        .iter()
        .map(|spec| {
            let upper = spec.max_length().get::<meter>();
            let upper = match spec.role {
                ParameterRole::Height => upper.min(max_height - min_base),
                ParameterRole::BaseThickness => upper.min(max_height - min_height),
                ParameterRole::FeatureSize | ParameterRole::Spacing | ParameterRole::Pitch => {
                    upper
                }
            };
            (spec.name, lower_bound(spec, limits), upper)
        })
        .collect();

    if let Some((name, lower, upper)) = ranges.iter().find(|(_, lower, upper)| lower > upper) {
        debug!(
            "{}: no feasible `{name}` ({} > {} mm)",
            descriptor.id,
            Length::new::<meter>(*lower).get::<millimeter>(),
            Length::new::<meter>(*upper).get::<millimeter>()
        );
        return None;
    }
    Some(ranges)
}

fn lower_bound(spec: &ParameterSpec, limits: &ManufacturingLimits) -> f64 {
    let lower = spec.min_length().get::<meter>();
    let min_thickness = limits.min_thickness.get::<meter>();
    let min_gap = limits.min_gap.get::<meter>();
    match spec.role {
        ParameterRole::FeatureSize => lower.max(min_thickness),
        ParameterRole::Spacing => lower.max(min_gap + OPEN_BOUND_MARGIN),
        ParameterRole::Pitch => lower.max(min_thickness + min_gap + OPEN_BOUND_MARGIN),
        ParameterRole::Height | ParameterRole::BaseThickness => lower,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn plan(max_height_mm: f64, cap: usize) -> GridPlan {
        GridPlan::build(
            &TypeRegistry::standard(),
            Length::new::<millimeter>(max_height_mm),
            &ManufacturingLimits::default(),
            cap,
        )
    }

    #[test]
    fn steps_fit_budget() {
        assert_eq!(steps_within(5000, 4), 8);
        assert_eq!(steps_within(4096, 4), 8);
        assert_eq!(steps_within(4095, 4), 7);
        assert_eq!(steps_within(5000, 1), 5000);
        assert_eq!(steps_within(0, 3), 0);
        assert_eq!(steps_within(1, 6), 1);
    }

    #[test]
    fn splits_cap_across_types() {
        let plan = plan(40.0, 20_000);
        let lens: Vec<_> = plan.grids.iter().map(TypeGrid::len).collect();

        // 5000 points each: 5000^1, 8^4, 8^4, 4^6
        assert_eq!(lens, vec![5000, 4096, 4096, 4096]);
        assert!(plan.total_points() <= 20_000);
    }

    #[test]
    fn height_cap_narrows_ranges() {
        let plan = plan(12.0, 1000);
        let straight = plan.grids.iter().find(|g| g.type_id == "straight_fins").unwrap();
        let height = straight.axes.iter().find(|a| a.name == "fin_height").unwrap();
        let base = straight.axes.iter().find(|a| a.name == "base_thickness").unwrap();

        assert_relative_eq!(height.upper, 0.011, epsilon = 1e-12);
        assert_relative_eq!(base.upper, 0.011, epsilon = 1e-12);
    }

    #[test]
    fn types_without_room_get_no_share() {
        // Finned types need at least 2 mm (1 mm fin + 1 mm base).
        let plan = plan(1.5, 100);
        assert_eq!(
            plan.grids.iter().map(|g| g.type_id).collect::<Vec<_>>(),
            vec!["solid_plate"]
        );
        assert_eq!(plan.total_points(), 100);
    }

    #[test]
    fn points_decode_mixed_radix() {
        let grid = TypeGrid {
            type_id: "test",
            order: 0,
            axes: vec![
                Axis {
                    name: "a",
                    lower: 0.0,
                    upper: 1.0,
                    steps: 2,
                },
                Axis {
                    name: "b",
                    lower: 0.0,
                    upper: 2.0,
                    steps: 3,
                },
            ],
        };
        assert_eq!(grid.len(), 6);

        // index 5 = a digit 1, b digit 2
        let point = grid.point(5);
        assert_relative_eq!(point.meters("a").unwrap(), 1.0);
        assert_relative_eq!(point.meters("b").unwrap(), 2.0);
        assert_eq!(grid.points().count(), 6);
    }

    #[test]
    fn single_step_sits_mid_range() {
        let axis = Axis {
            name: "a",
            lower: 1.0,
            upper: 3.0,
            steps: 1,
        };
        assert_relative_eq!(axis.value(0), 2.0);
    }
}
