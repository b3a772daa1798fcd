//! Validated inputs shared by every heatsink evaluation.

mod environment;
mod footprint;
mod limits;
mod material;
mod parameters;

pub use environment::Environment;
pub use footprint::Footprint;
pub use limits::ManufacturingLimits;
pub use material::Material;
pub use parameters::ParameterSet;
