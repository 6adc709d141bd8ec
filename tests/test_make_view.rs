use pmcurves::prelude::*;

#[test]
fn test_make_view_for_another_memory_space() -> Result<(), StrError> {
    // owning table (e.g., allocated on the host)
    let params = SampledCurveSet::<Vec<f64>>::from_param(&ParamSampledCurves::sample_reversed())?;

    // non-owning view (e.g., to be used by a kernel)
    let view: SampledCurveSet<SampleView<f64>> = make_view(&params)?;
    assert_eq!(view.sw_pcwn_samples()?.as_slice(), params.sw_pcwn_samples()?.as_slice());
    assert_eq!(view.pcwn_samples()?.as_slice(), params.pcwn_samples()?.as_slice());
    assert_eq!(view.sw_krw_samples()?.as_slice(), params.sw_krw_samples()?.as_slice());
    assert_eq!(view.krw_samples()?.as_slice(), params.krw_samples()?.as_slice());
    assert_eq!(view.sw_krn_samples()?.as_slice(), params.sw_krn_samples()?.as_slice());
    assert_eq!(view.krn_samples()?.as_slice(), params.krn_samples()?.as_slice());
    Ok(())
}

#[test]
fn test_immutable_table_must_be_given_in_order() -> Result<(), StrError> {
    // samples kept elsewhere (e.g., a device buffer exposed as slices)
    let sw_pcwn = [0.2, 0.6, 1.0];
    let pcwn = [0.3, 0.1, 0.0];
    let sw_kr = [1.0, 0.6, 0.2];
    let krw = [1.0, 0.3, 0.0];
    let krn = [0.0, 0.4, 0.7];

    let res = SampledCurveSet::new(
        SampleView::new(&sw_pcwn),
        SampleView::new(&pcwn),
        SampleView::new(&sw_kr),
        SampleView::new(&krw),
        SampleView::new(&sw_kr),
        SampleView::new(&krn),
    );
    assert_eq!(
        res.err(),
        Some("saturation values in interpolation table provided in wrong order, but table is immutable")
    );

    // reorder upstream by using an owning table first, then make the view
    let params = SampledCurveSet::new(
        sw_pcwn.to_vec(),
        pcwn.to_vec(),
        sw_kr.to_vec(),
        krw.to_vec(),
        sw_kr.to_vec(),
        krn.to_vec(),
    )?;
    let view = params.view()?;
    assert_eq!(view.sw_krw_samples()?.as_slice(), &[0.2, 0.6, 1.0]);
    assert_eq!(view.krw_samples()?.as_slice(), &[0.0, 0.3, 1.0]);
    assert_eq!(view.sw_krn_samples()?.as_slice(), &[0.2, 0.6, 1.0]);
    assert_eq!(view.krn_samples()?.as_slice(), &[0.7, 0.4, 0.0]);
    Ok(())
}
