//! # Heatsink Models
//!
//! Natural-convection performance estimates and bounded design search for
//! CNC-milled heatsinks, built as models for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations and
//!   the public heatsink API (type registry, area model, resistance network,
//!   optimizer and sweeps).
//! - [`support`]: Supporting utilities used by models (numeric constraints,
//!   unit extensions, convection correlations).
//!
//! ## Scope
//!
//! All quantities are steady-state, lumped, 1D-resistance approximations.
//! Radiation, transient response and solid construction are out of scope;
//! callers exchange only numeric parameter sets and result records with this
//! crate.
//!
//! ## Features
//!
//! - `air-properties` (default): enables the moist-air Churchill–Chu
//!   convection correlation. Without it every evaluation uses the simplified
//!   fallback formula and carries a warning saying so.

pub mod models;
pub mod support;
