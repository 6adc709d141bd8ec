//! Implements the sampled (tabulated) two-phase material parameters

mod curve_set_view;
mod sampled_curve_set;
mod saturation_trapping;
pub use crate::material::curve_set_view::*;
pub use crate::material::sampled_curve_set::*;
pub use crate::material::saturation_trapping::*;
