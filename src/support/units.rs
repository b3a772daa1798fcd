//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (lengths, areas,
//! temperatures, powers, conductivities). This module adds what the heatsink
//! models need but [`uom`] doesn't provide.
//!
//! ## Temperature differences
//!
//! The [`TemperatureDifference`] trait subtracts one absolute temperature from
//! another to get a temperature interval:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::{temperature_interval, thermodynamic_temperature::degree_celsius};
//! use heatsink_models::support::units::TemperatureDifference;
//!
//! let surface = ThermodynamicTemperature::new::<degree_celsius>(65.0);
//! let ambient = ThermodynamicTemperature::new::<degree_celsius>(25.0);
//! let rise = surface.minus(ambient);
//! assert!((rise.get::<temperature_interval::kelvin>() - 40.0).abs() < 1e-9);
//! ```
//!
//! ## Thermal resistance
//!
//! [`ThermalResistance`] (K/W) is the reciprocal of
//! [`uom::si::f64::ThermalConductance`] and is the currency of the
//! resistance network.

mod quantities;
mod temperature_difference;

pub use quantities::{ThermalResistance, kelvin_per_watt};
pub use temperature_difference::TemperatureDifference;
