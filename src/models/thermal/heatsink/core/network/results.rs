use uom::si::f64::{Area, HeatTransfer, Power, TemperatureInterval, ThermodynamicTemperature};

use crate::support::{
    constraint::{Constrained, UnitIntervalLowerOpen},
    units::ThermalResistance,
};

use super::Warning;

/// What the network is asked to compute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    /// Heat the part dissipates with its surface held `target` above ambient.
    MaxPower { target: TemperatureInterval },

    /// Surface temperature reached while dissipating `power`.
    GivenLoad { power: Power },
}

/// The answer for the requested [`Mode`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    MaxPower {
        q_max: Power,
    },
    GivenLoad {
        rise: TemperatureInterval,
        surface: ThermodynamicTemperature,
    },
}

/// Resistance breakdown and outcome of one evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct ThermalResult {
    /// Convection coefficient at the operating rise.
    pub h: HeatTransfer,

    /// Fin efficiency; exactly one without fins.
    pub efficiency: Constrained<f64, UnitIntervalLowerOpen>,

    /// `A_base_exposed + η·A_fin`.
    pub effective_area: Area,

    /// Conduction through the base.
    pub conduction: ThermalResistance,

    /// Convection from the effective area.
    pub convection: ThermalResistance,

    /// Series sum of conduction and convection.
    pub total: ThermalResistance,

    pub outcome: Outcome,

    pub warnings: Vec<Warning>,
}

impl ThermalResult {
    /// Maximum dissipated power, in [`Mode::MaxPower`].
    #[must_use]
    pub fn q_max(&self) -> Option<Power> {
        match self.outcome {
            Outcome::MaxPower { q_max } => Some(q_max),
            Outcome::GivenLoad { .. } => None,
        }
    }

    /// Surface temperature rise, in [`Mode::GivenLoad`].
    #[must_use]
    pub fn rise(&self) -> Option<TemperatureInterval> {
        match self.outcome {
            Outcome::GivenLoad { rise, .. } => Some(rise),
            Outcome::MaxPower { .. } => None,
        }
    }
}
