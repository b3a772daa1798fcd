use std::marker::PhantomData;

use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, N2, P1, P3, Z0},
};

/// Thermal resistance, K/W in SI.
///
/// The stored `value` is in K/W.
pub type ThermalResistance = Quantity<ISQ<N2, N1, P3, Z0, P1, Z0, Z0>, SI<f64>, f64>;

/// Builds a [`ThermalResistance`] from a value in K/W.
#[must_use]
pub fn kelvin_per_watt(value: f64) -> ThermalResistance {
    ThermalResistance {
        dimension: PhantomData,
        units: PhantomData,
        value,
    }
}
