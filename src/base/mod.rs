//! Implements the base structures shared by the sampled curves

mod constants;
mod ensure_finalized;
mod enums;
mod parameters;
mod sample_storage;
pub use crate::base::constants::*;
pub use crate::base::ensure_finalized::*;
pub use crate::base::enums::*;
pub use crate::base::parameters::*;
pub use crate::base::sample_storage::*;
