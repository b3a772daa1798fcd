//! Supporting utilities used by the heatsink models.

pub mod constraint;
pub mod convection;
pub mod units;
