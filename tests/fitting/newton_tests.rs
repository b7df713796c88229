use estuary::fitting::errors::FitError;
use estuary::fitting::newton::{NewtonCfg, NewtonPolynomial};
use estuary::Model;

type EstuaryResult = Result<(), FitError>;

const ATOL: f64 = 1e-9;
const RTOL: f64 = 0.0;

#[inline]
fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= ATOL + RTOL * b.abs()
}

#[inline]
fn assert_vec_close(a: &[f64], b: &[f64]) {
    assert_eq!(a.len(), b.len());
    for (i, (ai, bi)) in a.iter().zip(b.iter()).enumerate() {
        assert!(
            approx_eq(*ai, *bi),
            "mismatch at index {}: left={}, right={}, ATOL={}, RTOL={}",
            i, ai, bi, ATOL, RTOL
        );
    }
}

fn fitted(x: &[f64], y: &[f64]) -> NewtonPolynomial {
    let cfg = NewtonCfg::new().set_x(x).unwrap().set_y(y).unwrap();
    let mut model = NewtonPolynomial::new();
    model.fit(cfg).unwrap();
    model
}

#[test]
fn reference_value_between_samples() -> EstuaryResult {
    let x = [1.0, 2.0, 4.0, 7.0];
    let y = [2.0, 3.0, 1.0, 4.0];

    let model = fitted(&x, &y);
    assert!((model.eval(3.0)? - 2.311111).abs() < 1e-6);
    Ok(())
}

#[test]
fn exact_at_every_sample() -> EstuaryResult {
    let x = [1.0, 2.0, 4.0, 7.0];
    let y = [2.0, 3.0, 1.0, 4.0];

    let model = fitted(&x, &y);
    for (xk, yk) in x.iter().zip(y.iter()) {
        assert!(approx_eq(model.eval(*xk)?, *yk));
    }
    Ok(())
}

#[test]
fn quartic_coefficients_and_extrapolation() -> EstuaryResult {
    let x = [1.0, 2.0, 3.0, 4.0, 5.0];
    let y = [0.0, 6.0, 28.0, 96.0, 252.0];
    let expected_coeff = [0.0, 6.0, 8.0, 5.0, 0.5];

    let model = fitted(&x, &y);
    assert_vec_close(model.coefficients(), &expected_coeff);

    // exact interpolant extrapolates with no domain check
    assert!(approx_eq(model.eval(6.0)?, 550.0));
    assert!(approx_eq(model.eval(7.0)?, 1056.0));
    assert!(approx_eq(model.eval(8.0)?, 1848.0));
    Ok(())
}

#[test]
fn report_metadata() -> EstuaryResult {
    let x = [1.0, 2.0, 4.0, 7.0];
    let y = [2.0, 3.0, 1.0, 4.0];
    let cfg = NewtonCfg::new().set_x(&x)?.set_y(&y)?;

    let mut model = NewtonPolynomial::new();
    let report = model.fit(cfg)?;
    assert_eq!(report.algorithm_name, "newton");
    assert_eq!(report.n_provided, 4);
    assert_eq!(report.n_coefficients, 4);
    Ok(())
}

#[test]
fn refit_is_idempotent() -> EstuaryResult {
    let x = [1.0, 2.0, 4.0, 7.0];
    let y = [2.0, 3.0, 1.0, 4.0];

    let mut model = NewtonPolynomial::new();
    model.fit(NewtonCfg::new().set_x(&x)?.set_y(&y)?)?;
    let first = model.coefficients().to_vec();

    model.fit(NewtonCfg::new().set_x(&x)?.set_y(&y)?)?;
    assert_eq!(first, model.coefficients());
    Ok(())
}

#[test]
fn refit_replaces_prior_samples() -> EstuaryResult {
    let mut model = NewtonPolynomial::new();

    let x1 = [1.0, 2.0, 3.0, 4.0, 5.0];
    let y1 = [0.0, 6.0, 28.0, 96.0, 252.0];
    model.fit(NewtonCfg::new().set_x(&x1)?.set_y(&y1)?)?;

    let x2 = [0.0, 1.0];
    let y2 = [5.0, 7.0];
    model.fit(NewtonCfg::new().set_x(&x2)?.set_y(&y2)?)?;

    assert_eq!(model.coefficients().len(), 2);
    assert!(approx_eq(model.eval(0.5)?, 6.0));
    Ok(())
}

#[test]
fn eval_before_fit_fails() {
    let model = NewtonPolynomial::new();
    let err = model.eval(1.0).unwrap_err();
    assert!(matches!(err, FitError::NotInitialized { .. }));
}

#[test]
fn failed_fit_clears_prior_state() {
    let x = [1.0, 2.0, 4.0, 7.0];
    let y = [2.0, 3.0, 1.0, 4.0];
    let mut model = fitted(&x, &y);

    // y never set: validate fails inside fit and the model must come out empty
    let bad = NewtonCfg::new().set_x(&x).unwrap();
    assert!(model.fit(bad).is_err());
    assert!(model.coefficients().is_empty());
    assert!(matches!(model.eval(2.0), Err(FitError::NotInitialized { .. })));
}

#[test]
fn fit_series_uses_raw_seconds() -> EstuaryResult {
    let stamps = [0_i64, 86_400, 172_800];
    let values = [1.0, 2.0, 5.0];

    let mut series_model = NewtonPolynomial::new();
    series_model.fit_series(&stamps, &values)?;

    let x = [0.0, 86_400.0, 172_800.0];
    let plain_model = fitted(&x, &values);

    assert_eq!(series_model.coefficients(), plain_model.coefficients());
    assert!(approx_eq(series_model.eval(86_400.0)?, 2.0));
    Ok(())
}

#[test]
fn unequal_length_error() {
    let x = [0.0, 1.0, 2.0];
    let y = [0.0, 1.0];
    let cfg = NewtonCfg::new().set_x(&x).unwrap();
    let err = cfg.set_y(&y).unwrap_err();
    assert!(matches!(err, FitError::UnequalLength { x_len: 3, y_len: 2 }));
}

#[test]
fn duplicate_x_error() {
    let x = [0.0, 1.0, 1.0, 2.0];
    let err = NewtonCfg::new().set_x(&x).unwrap_err();
    assert!(matches!(err, FitError::DuplicateX { .. }));
}

#[test]
fn non_increasing_x_error() {
    let x = [0.0, 2.0, 1.0];
    let err = NewtonCfg::new().set_x(&x).unwrap_err();
    assert!(matches!(err, FitError::NonIncreasingX));
}
