//! Thermal systems models.
//!
//! This module contains models for passive thermal components, currently
//! natural-convection heatsinks.

pub mod heatsink;
