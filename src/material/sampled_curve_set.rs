use super::SaturationTrapping;
use crate::base::{Curve, EnsureFinalized, OwnedStorage, ParamSampledCurves, SampleStorage, SampleView, Scalar};
use crate::StrError;
use tracing::{debug, warn};

/// Holds the samples of the capillary pressure and relative permeability curves of a two-phase material
///
/// The three curves depend on the wetting-phase saturation `Sw`:
///
/// ```text
/// (sw_pcwn, pcwn) -- capillary pressure
/// (sw_krw,  krw)  -- relative permeability of the wetting phase
/// (sw_krn,  krn)  -- relative permeability of the non-wetting phase
/// ```
///
/// The samples are used by a piecewise-linear interpolation performed elsewhere; this structure
/// only stores them and makes sure (in [SampledCurveSet::finalize]) that curves given back-to-front
/// are reversed.
///
/// # Call order
///
/// 1. Allocate with [SampledCurveSet::new] (which also finalizes) or with
///    [SampledCurveSet::new_empty] followed by the setters
/// 2. Call [SampledCurveSet::finalize] (again after any setter)
/// 3. Access the samples; the accessors return an error if the object is not finalized
///
/// The storage `S` may be an owning container (e.g., `Vec<f64>`) or a non-owning view
/// (e.g., [SampleView]); only owning containers provide setters.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SampledCurveSet<S> {
    /// Finalized or not
    state: EnsureFinalized,

    /// Saturation samples of the capillary pressure curve
    sw_pcwn: S,

    /// Capillary pressure samples
    pcwn: S,

    /// Saturation samples of the wetting relative permeability curve
    sw_krw: S,

    /// Wetting relative permeability samples
    krw: S,

    /// Saturation samples of the non-wetting relative permeability curve
    sw_krn: S,

    /// Non-wetting relative permeability samples
    krn: S,
}

impl<S: SampleStorage> SampledCurveSet<S> {
    /// Allocates a new instance and finalizes it
    ///
    /// The samples are stored verbatim and then normalized by [SampledCurveSet::finalize].
    pub fn new(sw_pcwn: S, pcwn: S, sw_krw: S, krw: S, sw_krn: S, krn: S) -> Result<Self, StrError> {
        if sw_pcwn.len() != pcwn.len() || sw_krw.len() != krw.len() || sw_krn.len() != krn.len() {
            return Err("saturation and value samples must have the same length");
        }
        let mut params = SampledCurveSet {
            state: EnsureFinalized::new(),
            sw_pcwn,
            pcwn,
            sw_krw,
            krw,
            sw_krn,
            krn,
        };
        params.finalize()?;
        Ok(params)
    }

    /// Allocates an already finalized instance without touching the samples
    pub(crate) fn new_finalized(sw_pcwn: S, pcwn: S, sw_krw: S, krw: S, sw_krn: S, krn: S) -> Self {
        SampledCurveSet {
            state: EnsureFinalized::Finalized,
            sw_pcwn,
            pcwn,
            sw_krw,
            krw,
            sw_krn,
            krn,
        }
    }

    /// Reverts the order of curves given back-to-front and marks the object as finalized
    ///
    /// A curve is reversed if its first saturation is greater than its last saturation
    /// **and** its first saturation is greater than its last *value* sample (e.g., the last
    /// `krw`). The second test compares quantities of different kinds; it is nonetheless kept
    /// because existing tables rely on it.
    ///
    /// # Errors
    ///
    /// * if any curve has no samples
    /// * if a curve must be reversed but the storage is immutable (e.g., a view);
    ///   in this case the object remains unfinalized. Reorder the samples before making views.
    pub fn finalize(&mut self) -> Result<(), StrError> {
        if self.sw_pcwn.is_empty() || self.sw_krw.is_empty() || self.sw_krn.is_empty() {
            return Err("each curve must have at least one sample");
        }
        reverse_if_descending(Curve::CapillaryPressure, &mut self.sw_pcwn, &mut self.pcwn)?;
        reverse_if_descending(Curve::WettingRelPerm, &mut self.sw_krw, &mut self.krw)?;
        reverse_if_descending(Curve::NonWettingRelPerm, &mut self.sw_krn, &mut self.krn)?;
        self.state.finalize();
        Ok(())
    }

    /// Indicates whether the object has been finalized or not
    pub fn is_finalized(&self) -> bool {
        self.state.is_finalized()
    }

    /// Returns the wetting-phase saturation samples of the capillary pressure curve
    pub fn sw_pcwn_samples(&self) -> Result<&S, StrError> {
        self.state.check()?;
        Ok(&self.sw_pcwn)
    }

    /// Returns the samples of the capillary pressure curve
    pub fn pcwn_samples(&self) -> Result<&S, StrError> {
        self.state.check()?;
        Ok(&self.pcwn)
    }

    /// Returns the wetting-phase saturation samples of the wetting relative permeability curve
    pub fn sw_krw_samples(&self) -> Result<&S, StrError> {
        self.state.check()?;
        Ok(&self.sw_krw)
    }

    /// Returns the samples of the wetting-phase relative permeability curve
    pub fn krw_samples(&self) -> Result<&S, StrError> {
        self.state.check()?;
        Ok(&self.krw)
    }

    /// Returns the wetting-phase saturation samples of the non-wetting relative permeability curve
    pub fn sw_krn_samples(&self) -> Result<&S, StrError> {
        self.state.check()?;
        Ok(&self.sw_krn)
    }

    /// Returns the samples of the non-wetting-phase relative permeability curve
    pub fn krn_samples(&self) -> Result<&S, StrError> {
        self.state.check()?;
        Ok(&self.krn)
    }

    /// Returns the (saturation, value) samples of a curve
    pub fn samples(&self, curve: Curve) -> Result<(&S, &S), StrError> {
        self.state.check()?;
        match curve {
            Curve::CapillaryPressure => Ok((&self.sw_pcwn, &self.pcwn)),
            Curve::WettingRelPerm => Ok((&self.sw_krw, &self.krw)),
            Curve::NonWettingRelPerm => Ok((&self.sw_krn, &self.krn)),
        }
    }

    /// Returns a read-only view of this object
    ///
    /// See also the `make_view` function
    pub fn view(&self) -> Result<SampledCurveSet<SampleView<'_, S::Scalar>>, StrError> {
        super::make_view(self)
    }

    /// Serializes the dynamic state
    ///
    /// The object only holds static tables; thus, there is nothing to serialize.
    pub fn serialize_op<Ser>(&mut self, _serializer: &mut Ser) {}
}

impl<S: OwnedStorage> SampledCurveSet<S> {
    /// Allocates a new empty (unfinalized) instance to be filled in with the setters
    pub fn new_empty() -> Self {
        SampledCurveSet::default()
    }

    /// Sets the samples of the capillary pressure curve
    ///
    /// **Note:** [SampledCurveSet::finalize] must be called again before accessing the samples.
    pub fn set_pcwn_samples(&mut self, sw_values: &[S::Scalar], values: &[S::Scalar]) -> Result<(), StrError> {
        self.set_samples(Curve::CapillaryPressure, sw_values, values)
    }

    /// Sets the samples of the wetting-phase relative permeability curve
    ///
    /// **Note:** [SampledCurveSet::finalize] must be called again before accessing the samples.
    pub fn set_krw_samples(&mut self, sw_values: &[S::Scalar], values: &[S::Scalar]) -> Result<(), StrError> {
        self.set_samples(Curve::WettingRelPerm, sw_values, values)
    }

    /// Sets the samples of the non-wetting-phase relative permeability curve
    ///
    /// **Note:** [SampledCurveSet::finalize] must be called again before accessing the samples.
    pub fn set_krn_samples(&mut self, sw_values: &[S::Scalar], values: &[S::Scalar]) -> Result<(), StrError> {
        self.set_samples(Curve::NonWettingRelPerm, sw_values, values)
    }

    /// Replaces both the saturation and value samples of a curve
    ///
    /// Nothing is modified if the lengths differ. Otherwise, the object becomes unfinalized.
    pub fn set_samples(&mut self, curve: Curve, sw_values: &[S::Scalar], values: &[S::Scalar]) -> Result<(), StrError> {
        if sw_values.len() != values.len() {
            return Err("saturation and value samples must have the same length");
        }
        let (sw, val) = match curve {
            Curve::CapillaryPressure => (&mut self.sw_pcwn, &mut self.pcwn),
            Curve::WettingRelPerm => (&mut self.sw_krw, &mut self.krw),
            Curve::NonWettingRelPerm => (&mut self.sw_krn, &mut self.krn),
        };
        *sw = S::from_samples(sw_values);
        *val = S::from_samples(values);
        self.state.reset();
        Ok(())
    }
}

impl<S: OwnedStorage<Scalar = f64>> SampledCurveSet<S> {
    /// Allocates a new instance from parameters (e.g., read from a JSON file) and finalizes it
    pub fn from_param(param: &ParamSampledCurves) -> Result<Self, StrError> {
        SampledCurveSet::new(
            S::from_samples(&param.sw_pcwn),
            S::from_samples(&param.pcwn),
            S::from_samples(&param.sw_krw),
            S::from_samples(&param.krw),
            S::from_samples(&param.sw_krn),
            S::from_samples(&param.krn),
        )
    }
}

impl<S: SampleStorage<Scalar = f64>> SampledCurveSet<S> {
    /// Returns a copy of the (finalized) samples as parameters
    pub fn to_param(&self) -> Result<ParamSampledCurves, StrError> {
        Ok(ParamSampledCurves {
            sw_pcwn: self.sw_pcwn_samples()?.as_slice().to_vec(),
            pcwn: self.pcwn_samples()?.as_slice().to_vec(),
            sw_krw: self.sw_krw_samples()?.as_slice().to_vec(),
            krw: self.krw_samples()?.as_slice().to_vec(),
            sw_krn: self.sw_krn_samples()?.as_slice().to_vec(),
            krn: self.krn_samples()?.as_slice().to_vec(),
        })
    }
}

impl<S: SampleStorage> SaturationTrapping for SampledCurveSet<S> {
    type Scalar = S::Scalar;

    fn sn_trapped(&self, _maximum_trapping: bool) -> S::Scalar {
        <S::Scalar as Scalar>::ZERO
    }

    fn sn_stranded(&self, _sg: S::Scalar, _krg: S::Scalar) -> S::Scalar {
        <S::Scalar as Scalar>::ZERO
    }

    fn sw_trapped(&self) -> S::Scalar {
        <S::Scalar as Scalar>::ZERO
    }

    fn update(&mut self, _pc_sw: S::Scalar, _krw_sw: S::Scalar, _krn_sw: S::Scalar) -> bool {
        false
    }
}

/// Reverses a curve given back-to-front
///
/// Returns true if the samples have been reversed.
fn reverse_if_descending<S: SampleStorage>(curve: Curve, sw: &mut S, values: &mut S) -> Result<bool, StrError> {
    let (Some(sw_first), Some(sw_last), Some(value_last)) = (sw.front(), sw.back(), values.back()) else {
        return Err("each curve must have at least one sample");
    };
    // sw_first is also compared with the last value sample, not with sw_last
    let eligible = sw_first > sw_last && sw_first > value_last;
    if !eligible {
        return Ok(false);
    }
    match (S::MUTABLE, sw.as_mut_slice(), values.as_mut_slice()) {
        (true, Some(sw_mut), Some(values_mut)) => {
            sw_mut.reverse();
            values_mut.reverse();
            debug!(curve = curve.name(), npoint = sw_mut.len(), "reversed the order of the samples");
            Ok(true)
        }
        _ => {
            warn!(curve = curve.name(), "cannot reverse the samples of an immutable table");
            Err("saturation values in interpolation table provided in wrong order, but table is immutable")
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
