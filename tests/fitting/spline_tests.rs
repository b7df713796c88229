use estuary::fitting::errors::FitError;
use estuary::fitting::spline::{CubicSpline, SplineCfg, SEGMENT_EPS};
use estuary::Model;

type EstuaryResult = Result<(), FitError>;

const ATOL: f64 = 1e-9;
const RTOL: f64 = 0.0;

#[inline]
fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= ATOL + RTOL * b.abs()
}

fn fitted(x: &[f64], y: &[f64]) -> CubicSpline {
    let cfg = SplineCfg::new().set_x(x).unwrap().set_y(y).unwrap();
    let mut model = CubicSpline::new();
    model.fit(cfg).unwrap();
    model
}

#[test]
fn reference_value_between_knots() -> EstuaryResult {
    let x = [1.0, 2.0, 4.0, 7.0];
    let y = [2.0, 3.0, 1.0, 4.0];

    let model = fitted(&x, &y);
    assert!((model.eval(3.0)? - 2.173527).abs() < 1e-5);
    assert!((model.eval(3.0)? - 2.173527808069793).abs() < 1e-9);
    Ok(())
}

#[test]
fn reference_value_dense_knots() -> EstuaryResult {
    let x = [1.0, 1.5, 2.0, 2.5, 3.0];
    let y = [2.0, 3.0, 2.5, 4.0, 4.5];

    let model = fitted(&x, &y);
    assert!((model.eval(2.7)? - 4.41089).abs() < 1e-5);
    Ok(())
}

#[test]
fn exact_at_every_knot() -> EstuaryResult {
    let x = [1.0, 2.0, 4.0, 7.0];
    let y = [2.0, 3.0, 1.0, 4.0];

    let model = fitted(&x, &y);
    for (xk, yk) in x.iter().zip(y.iter()) {
        assert!(approx_eq(model.eval(*xk)?, *yk));
    }
    Ok(())
}

#[test]
fn continuous_across_segment_boundaries() {
    let x = [1.0, 2.0, 4.0, 7.0];
    let y = [2.0, 3.0, 1.0, 4.0];
    let model = fitted(&x, &y);
    let rows = model.coefficients();

    // each knot value reproduced by the polynomial of the segment to its
    // right (segment k + 1 evaluated at u = x[k] - x[k+1])
    for k in 0..x.len() - 1 {
        let row = rows[k + 1];
        let u = x[k] - x[k + 1];
        let from_right = row[0] + u * (row[1] + row[2] * u + row[3] * u * u);
        assert!(
            approx_eq(from_right, y[k]),
            "jump at knot {}: {} vs {}", x[k], from_right, y[k]
        );
    }
}

#[test]
fn coefficient_matrix_shape() -> EstuaryResult {
    let x = [1.0, 2.0, 4.0, 7.0];
    let y = [2.0, 3.0, 1.0, 4.0];
    let model = fitted(&x, &y);

    let rows = model.coefficients();
    assert_eq!(rows.len(), 4);
    // row 0 only anchors the first knot value
    assert_eq!(rows[0], [2.0, 0.0, 0.0, 0.0]);
    for (i, row) in rows.iter().enumerate() {
        assert!(approx_eq(row[0], y[i]));
    }
    Ok(())
}

#[test]
fn two_knots_degenerate_to_chord() -> EstuaryResult {
    let x = [0.0, 2.0];
    let y = [0.0, 4.0];
    let model = fitted(&x, &y);

    assert!(approx_eq(model.eval(0.0)?, 0.0));
    assert!(approx_eq(model.eval(1.0)?, 2.0));
    assert!(approx_eq(model.eval(2.0)?, 4.0));
    Ok(())
}

#[test]
fn out_of_range_beyond_tolerance() {
    let x = [1.0, 2.0, 4.0, 7.0];
    let y = [2.0, 3.0, 1.0, 4.0];
    let model = fitted(&x, &y);

    let err = model.eval(0.99).unwrap_err();
    assert!(matches!(err, FitError::OutOfRange { got, x_min, x_max }
        if got == 0.99 && x_min == 1.0 && x_max == 7.0));

    let err = model.eval(7.01).unwrap_err();
    assert!(matches!(err, FitError::OutOfRange { .. }));
}

#[test]
fn boundary_tolerance_admits_near_endpoints() -> EstuaryResult {
    let x = [1.0, 2.0, 4.0, 7.0];
    let y = [2.0, 3.0, 1.0, 4.0];
    let model = fitted(&x, &y);

    // within SEGMENT_EPS of the domain still evaluates
    let low = model.eval(1.0 - SEGMENT_EPS / 2.0)?;
    let high = model.eval(7.0 + SEGMENT_EPS / 2.0)?;
    assert!((low - 2.0).abs() < 1e-3);
    assert!((high - 4.0).abs() < 1e-3);
    Ok(())
}

#[test]
fn refit_is_idempotent() -> EstuaryResult {
    let x = [1.0, 2.0, 4.0, 7.0];
    let y = [2.0, 3.0, 1.0, 4.0];

    let mut model = CubicSpline::new();
    model.fit(SplineCfg::new().set_x(&x)?.set_y(&y)?)?;
    let first = model.coefficients().to_vec();

    model.fit(SplineCfg::new().set_x(&x)?.set_y(&y)?)?;
    assert_eq!(first, model.coefficients());
    Ok(())
}

#[test]
fn eval_before_fit_fails() {
    let model = CubicSpline::new();
    assert!(matches!(model.eval(1.0), Err(FitError::NotInitialized { .. })));
}

#[test]
fn failed_fit_clears_prior_state() {
    let x = [1.0, 2.0, 4.0, 7.0];
    let y = [2.0, 3.0, 1.0, 4.0];
    let mut model = fitted(&x, &y);

    let bad = SplineCfg::new().set_x(&x).unwrap();
    assert!(model.fit(bad).is_err());
    assert!(model.coefficients().is_empty());
    assert!(matches!(model.eval(2.0), Err(FitError::NotInitialized { .. })));
}

#[test]
fn fit_series_matches_plain_fit() -> EstuaryResult {
    let stamps = [0_i64, 86_400, 172_800, 259_200];
    let values = [2.0, 3.0, 1.0, 4.0];

    let mut series_model = CubicSpline::new();
    series_model.fit_series(&stamps, &values)?;

    let x = [0.0, 86_400.0, 172_800.0, 259_200.0];
    let plain_model = fitted(&x, &values);

    assert_eq!(series_model.coefficients(), plain_model.coefficients());
    assert!(approx_eq(series_model.eval(86_400.0)?, 3.0));
    Ok(())
}
