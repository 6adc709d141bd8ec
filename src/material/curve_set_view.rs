use super::SampledCurveSet;
use crate::base::{SampleStorage, ViewOf};
use crate::StrError;

/// Makes a read-only view of finalized parameters using another storage type
///
/// Each of the six sample sequences is aliased (not copied) via the view-construction
/// primitive of `V`. The samples are neither reordered nor checked again; the result is
/// finalized because the source is.
///
/// The element type of `V` must match the one of `C` (checked at compile time).
///
/// **Warning:** The view shares the memory of `params`. The borrow ties the lifetimes
/// together for host memory; if `C` wraps externally managed memory (e.g., an accelerator
/// buffer), the caller must keep that memory valid and unchanged while the view is in use.
///
/// # Errors
///
/// Returns an error if `params` has not been finalized.
pub fn make_view<'a, C, V>(params: &'a SampledCurveSet<C>) -> Result<SampledCurveSet<V>, StrError>
where
    C: SampleStorage,
    V: ViewOf<'a, C>,
{
    Ok(SampledCurveSet::new_finalized(
        V::view_of(params.sw_pcwn_samples()?),
        V::view_of(params.pcwn_samples()?),
        V::view_of(params.sw_krw_samples()?),
        V::view_of(params.krw_samples()?),
        V::view_of(params.sw_krn_samples()?),
        V::view_of(params.krn_samples()?),
    ))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::make_view;
    use crate::base::{Curve, ParamSampledCurves, SampleStorage, SampleView};
    use crate::material::{SampledCurveSet, SaturationTrapping};

    #[test]
    fn make_view_captures_errors() {
        let params = SampledCurveSet::<Vec<f64>>::new_empty();
        let res: Result<SampledCurveSet<SampleView<f64>>, _> = make_view(&params);
        assert_eq!(
            res.err(),
            Some("finalize must be called before accessing the samples")
        );
        assert_eq!(
            params.view().err(),
            Some("finalize must be called before accessing the samples")
        );
    }

    #[test]
    fn make_view_works() {
        let params = SampledCurveSet::<Vec<f64>>::from_param(&ParamSampledCurves::sample_reversed()).unwrap();
        let view: SampledCurveSet<SampleView<f64>> = make_view(&params).unwrap();
        assert!(view.is_finalized());
        for curve in Curve::all() {
            let (sw, val) = params.samples(curve).unwrap();
            let (sw_view, val_view) = view.samples(curve).unwrap();
            assert_eq!(sw_view.as_slice(), sw.as_slice());
            assert_eq!(val_view.as_slice(), val.as_slice());
            // aliased, not copied
            assert_eq!(sw_view.as_ptr(), sw.as_ptr());
            assert_eq!(val_view.as_ptr(), val.as_ptr());
        }
        assert_eq!(view.to_param().unwrap(), params.to_param().unwrap());
        assert_eq!(view.sn_trapped(true), 0.0);
    }

    #[test]
    fn make_view_does_not_reorder() {
        // accepted as is by finalize (first saturation not greater than the last value);
        // a view must keep the very same order
        let sw = vec![0.8, 0.5, 0.2];
        let val = vec![10.0, 20.0, 30.0];
        let params = SampledCurveSet::new(sw.clone(), val.clone(), sw.clone(), val.clone(), sw.clone(), val.clone()).unwrap();
        let view = params.view().unwrap();
        assert_eq!(view.sw_krn_samples().unwrap().as_slice(), &[0.8, 0.5, 0.2]);
        assert_eq!(view.krn_samples().unwrap().as_slice(), &[10.0, 20.0, 30.0]);
    }

    #[test]
    fn view_of_view_works() {
        let params = SampledCurveSet::<Vec<f32>>::new(
            vec![0.0, 1.0],
            vec![2.0, 0.0],
            vec![0.0, 1.0],
            vec![0.0, 1.0],
            vec![0.0, 1.0],
            vec![1.0, 0.0],
        )
        .unwrap();
        let view = params.view().unwrap();
        let again = view.view().unwrap();
        assert_eq!(again, view);
        assert_eq!(again.pcwn_samples().unwrap().as_ptr(), params.pcwn_samples().unwrap().as_ptr());
    }
}
