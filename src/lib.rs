//! Pmcurves -- sampled capillary pressure and relative permeability tables
//!
//! This crate holds the piecewise-linear tables used by two-phase porous media models:
//!
//! * capillary pressure `pcwn` versus wetting-phase saturation `Sw`
//! * wetting-phase relative permeability `krw` versus `Sw`
//! * non-wetting-phase relative permeability `krn` versus `Sw`
//!
//! The tables are normalized once by [material::SampledCurveSet::finalize] so that the
//! saturation samples are ascending. A read-only alias over non-owning storage may be
//! obtained with [material::make_view].

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

pub mod base;
pub mod material;
pub mod prelude;
