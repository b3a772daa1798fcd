//! Serializable records in display units.
//!
//! Lengths are reported in millimeters, temperatures in °C, rises in kelvin
//! and humidity in percent, matching what a caller typed in.

use std::collections::BTreeMap;

use serde::Serialize;
use uom::si::{
    area::square_meter, heat_transfer::watt_per_square_meter_kelvin, power::watt,
    temperature_interval::kelvin as delta_kelvin, thermodynamic_temperature::degree_celsius,
    volume::cubic_centimeter,
};

use super::{
    Environment, OptimizationCandidate, OptimizationOutcome, Outcome, SkippedPoint, SweepCurve,
    SweepVariable, ThermalResult,
};

/// Mode-specific part of an [`EvaluationReport`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum OutcomeReport {
    MaxPower { q_max_w: f64 },
    GivenLoad { delta_t_k: f64, surface_temp_c: f64 },
}

/// One evaluated design.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationReport {
    #[serde(flatten)]
    pub outcome: OutcomeReport,
    pub r_total_k_per_w: f64,
    pub h_w_per_m2k: f64,
    pub a_eff_m2: f64,
    pub fin_efficiency: f64,
    pub warnings: Vec<String>,
}

impl From<&ThermalResult> for EvaluationReport {
    fn from(result: &ThermalResult) -> Self {
        let outcome = match result.outcome {
            Outcome::MaxPower { q_max } => OutcomeReport::MaxPower {
                q_max_w: q_max.get::<watt>(),
            },
            Outcome::GivenLoad { rise, surface } => OutcomeReport::GivenLoad {
                delta_t_k: rise.get::<delta_kelvin>(),
                surface_temp_c: surface.get::<degree_celsius>(),
            },
        };
        Self {
            outcome,
            r_total_k_per_w: result.total.value,
            h_w_per_m2k: result.h.get::<watt_per_square_meter_kelvin>(),
            a_eff_m2: result.effective_area.get::<square_meter>(),
            fin_efficiency: result.efficiency.into_inner(),
            warnings: result.warnings.iter().map(ToString::to_string).collect(),
        }
    }
}

/// One ranked optimizer candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateReport {
    pub type_id: String,
    pub parameters_mm: BTreeMap<String, f64>,
    pub r_total_k_per_w: f64,

    /// Absent when candidates were ranked under a given load.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q_max_w: Option<f64>,

    /// Present only when candidates were ranked under a given load.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta_t_k: Option<f64>,

    pub material_volume_cm3: f64,
}

impl From<&OptimizationCandidate> for CandidateReport {
    fn from(candidate: &OptimizationCandidate) -> Self {
        Self {
            type_id: candidate.type_id.to_owned(),
            parameters_mm: candidate.parameters.to_millimeters(),
            r_total_k_per_w: candidate.result.total.value,
            q_max_w: candidate.result.q_max().map(|q| q.get::<watt>()),
            delta_t_k: candidate.result.rise().map(|rise| rise.get::<delta_kelvin>()),
            material_volume_cm3: candidate.material_volume.get::<cubic_centimeter>(),
        }
    }
}

/// Ranked candidates with the search counters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizationReport {
    pub candidates: Vec<CandidateReport>,
    pub visited: usize,
    pub evaluated: usize,
    pub skipped_infeasible: usize,
    pub failed_numeric: usize,
    pub duplicates: usize,
    pub cap: usize,
    pub cancelled: bool,
}

impl From<&OptimizationOutcome> for OptimizationReport {
    fn from(outcome: &OptimizationOutcome) -> Self {
        let counters = outcome.counters;
        Self {
            candidates: outcome.candidates.iter().map(CandidateReport::from).collect(),
            visited: counters.visited,
            evaluated: counters.evaluated,
            skipped_infeasible: counters.skipped_infeasible,
            failed_numeric: counters.failed_numeric,
            duplicates: counters.duplicates,
            cap: counters.cap,
            cancelled: outcome.cancelled,
        }
    }
}

/// A sweep as parallel columns, one row per evaluated point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepReport {
    /// Ambient temperature of each point, °C.
    pub ambient: Vec<f64>,

    /// Relative humidity of each point, %.
    pub humidity: Vec<f64>,

    pub q_max_w: Vec<f64>,

    pub skipped: Vec<SkippedReport>,
}

/// A swept value that could not be evaluated, with the reason.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedReport {
    pub value: f64,
    pub reason: String,
}

impl From<&SkippedPoint> for SkippedReport {
    fn from(point: &SkippedPoint) -> Self {
        Self {
            value: point.value,
            reason: point.reason.clone(),
        }
    }
}

impl SweepReport {
    /// Lays out `curve`, filling the fixed column from `environment`.
    #[must_use]
    pub fn new(variable: SweepVariable, environment: &Environment, curve: &SweepCurve) -> Self {
        let swept = curve.points.iter().map(|point| point.value);
        let (ambient, humidity) = match variable {
            SweepVariable::Ambient => (
                swept.collect(),
                vec![environment.humidity_percent(); curve.points.len()],
            ),
            SweepVariable::Humidity => (
                vec![environment.ambient.get::<degree_celsius>(); curve.points.len()],
                swept.collect(),
            ),
        };
        Self {
            ambient,
            humidity,
            q_max_w: curve.points.iter().map(|p| p.q_max.get::<watt>()).collect(),
            skipped: curve.skipped.iter().map(SkippedReport::from).collect(),
        }
    }
}
