use uom::si::{
    f64::{HeatTransfer, ThermalConductivity},
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
    thermal_conductivity::watt_per_meter_kelvin,
};

use crate::{
    models::thermal::heatsink::core::{FinArray, HeatsinkError},
    support::constraint::{Constrained, UnitIntervalLowerOpen},
};

/// Below this `m·Lc` the series `1 − (m·Lc)²/3` replaces `tanh(x)/x`.
const SMALL_ML: f64 = 1e-4;

/// Efficiency of a straight fin with a convecting tip, `tanh(m·Lc)/(m·Lc)`.
///
/// `m = sqrt(2h/(k·t))` uses the array's fin thickness or pin side and
/// `Lc = H + t/2` its corrected length. The result lies in `(0, 1]` and tends
/// to one as the fin gets shorter or thicker.
///
/// # Errors
///
/// Returns [`HeatsinkError::NumericDegenerate`] if the inputs give a
/// non-finite or zero efficiency.
pub fn fin_efficiency(
    h: HeatTransfer,
    k: ThermalConductivity,
    fins: &FinArray,
) -> Result<Constrained<f64, UnitIntervalLowerOpen>, HeatsinkError> {
    let h = h.get::<watt_per_square_meter_kelvin>();
    let k = k.get::<watt_per_meter_kelvin>();
    let t = fins.thickness.get::<meter>();

    let m = (2.0 * h / (k * t)).sqrt();
    let ml = m * fins.corrected_length().get::<meter>();

    let eta = if ml < SMALL_ML {
        1.0 - ml * ml / 3.0
    } else {
        ml.tanh() / ml
    };

    UnitIntervalLowerOpen::new(eta).map_err(|_| HeatsinkError::NumericDegenerate {
        field: "fin_efficiency",
        value: eta,
    })
}
