//! Built-in heatsink families.
//!
//! Each family module exposes a `DESCRIPTOR` for the [`TypeRegistry`]
//! together with its schema. Shared counting and CNC checks live in `layout`.
//!
//! [`TypeRegistry`]: super::TypeRegistry

mod layout;

pub mod crosscut;
pub mod pin_fin;
pub mod solid_plate;
pub mod straight_fins;
