//! Makes available common structures needed to work with sampled curves
//!
//! You may write `use pmcurves::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::base::{Curve, EnsureFinalized, ParamSampledCurves, DEFAULT_TEST_DIR};
pub use crate::base::{OwnedStorage, SampleStorage, SampleView, Scalar, ViewOf};
pub use crate::material::{make_view, SampledCurveSet, SaturationTrapping};
pub use crate::StrError;
