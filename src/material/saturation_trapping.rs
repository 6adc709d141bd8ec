/// Defines the trapping and hysteresis queries of a two-phase material
///
/// Tabulated materials without hysteresis return zero trapped saturations and never
/// change their state on update.
pub trait SaturationTrapping {
    /// Numeric type of the saturations
    type Scalar;

    /// Returns the trapped non-wetting-phase saturation
    fn sn_trapped(&self, maximum_trapping: bool) -> Self::Scalar;

    /// Returns the stranded non-wetting-phase saturation given the gas saturation and relative permeability
    fn sn_stranded(&self, sg: Self::Scalar, krg: Self::Scalar) -> Self::Scalar;

    /// Returns the trapped wetting-phase saturation
    fn sw_trapped(&self) -> Self::Scalar;

    /// Updates the dynamic state given the saturations used to evaluate pc, krw, and krn
    ///
    /// Returns true if the state has changed.
    fn update(&mut self, pc_sw: Self::Scalar, krw_sw: Self::Scalar, krn_sw: Self::Scalar) -> bool;
}
