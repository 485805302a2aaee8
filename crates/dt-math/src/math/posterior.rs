//! Single-hypothesis Bayesian posterior updates for diagnostic tests.
//!
//! These helpers compute P(disease | test result) from a prior prevalence
//! and the test's operating characteristics. They are intended to be used
//! by dt-core inference so that validation and degenerate-denominator
//! handling is centralized.
//!
//! For a positive test:
//!
//! ```text
//! P(D|+) = P(D)·sens / (P(D)·sens + (1−P(D))·fpr)
//! ```
//!
//! For a negative test:
//!
//! ```text
//! P(D|−) = P(D)·(1−sens) / (P(D)·(1−sens) + (1−P(D))·(1−fpr))
//! ```

use thiserror::Error;

/// Errors from posterior computation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PosteriorError {
    /// An input probability lies outside the unit interval (or is NaN).
    #[error("{name} out of range: {value}")]
    OutOfRange { name: &'static str, value: f64 },

    /// The Bayes denominator evaluated to zero, so the posterior is undefined.
    #[error("posterior denominator is zero")]
    ZeroDenominator,
}

/// Validate that `value` is a probability in [0, 1].
///
/// NaN fails the check. `name` is carried into the error for reporting.
pub fn check_unit_interval(name: &'static str, value: f64) -> Result<(), PosteriorError> {
    if value.is_nan() || !(0.0..=1.0).contains(&value) {
        return Err(PosteriorError::OutOfRange { name, value });
    }
    Ok(())
}

/// Posterior P(disease | positive test).
pub fn posterior_positive(
    prior: f64,
    sensitivity: f64,
    false_positive: f64,
) -> Result<f64, PosteriorError> {
    check_unit_interval("prior", prior)?;
    check_unit_interval("sensitivity", sensitivity)?;
    check_unit_interval("false_positive", false_positive)?;

    let numerator = prior * sensitivity;
    let denominator = numerator + (1.0 - prior) * false_positive;
    if denominator == 0.0 {
        return Err(PosteriorError::ZeroDenominator);
    }
    Ok(numerator / denominator)
}

/// Posterior P(disease | negative test).
pub fn posterior_negative(
    prior: f64,
    sensitivity: f64,
    false_positive: f64,
) -> Result<f64, PosteriorError> {
    check_unit_interval("prior", prior)?;
    check_unit_interval("sensitivity", sensitivity)?;
    check_unit_interval("false_positive", false_positive)?;

    let specificity = 1.0 - false_positive;
    let numerator = prior * (1.0 - sensitivity);
    let denominator = numerator + (1.0 - prior) * specificity;
    if denominator == 0.0 {
        return Err(PosteriorError::ZeroDenominator);
    }
    Ok(numerator / denominator)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        if a.is_nan() || b.is_nan() {
            return false;
        }
        (a - b).abs() <= tol
    }

    #[test]
    fn rare_disease_positive_test() {
        // Classic base-rate example: 1% prevalence, 99% sensitive, 5% FPR.
        let p = posterior_positive(0.01, 0.99, 0.05).unwrap();
        assert!(approx_eq(p, 0.0099 / (0.0099 + 0.0495), 1e-12));
        assert!(approx_eq(p, 0.1667, 5e-5));
    }

    #[test]
    fn negative_test_lowers_probability() {
        let p = posterior_negative(0.5, 0.9, 0.1).unwrap();
        // 0.05 / (0.05 + 0.45)
        assert!(approx_eq(p, 0.1, 1e-12));
    }

    #[test]
    fn negative_result_never_raises_an_even_prior() {
        let p = posterior_negative(0.5, 0.9, 0.1).unwrap();
        assert!(p < 0.5, "negative result must not raise a 0.5 prior here");
    }

    #[test]
    fn zero_denominator_is_error_not_nan() {
        let err = posterior_positive(0.0, 0.9, 0.0).unwrap_err();
        assert_eq!(err, PosteriorError::ZeroDenominator);

        // Negative branch: prior=1, sensitivity=1 makes the numerator and
        // the (1-prior) term both zero.
        let err = posterior_negative(1.0, 1.0, 0.0).unwrap_err();
        assert_eq!(err, PosteriorError::ZeroDenominator);
    }

    #[test]
    fn out_of_range_inputs_rejected() {
        assert!(matches!(
            posterior_positive(-0.1, 0.9, 0.1),
            Err(PosteriorError::OutOfRange { name: "prior", .. })
        ));
        assert!(matches!(
            posterior_positive(0.5, 1.1, 0.1),
            Err(PosteriorError::OutOfRange {
                name: "sensitivity",
                ..
            })
        ));
        assert!(matches!(
            posterior_negative(0.5, 0.9, f64::NAN),
            Err(PosteriorError::OutOfRange {
                name: "false_positive",
                ..
            })
        ));
    }

    #[test]
    fn certain_prior_stays_certain() {
        let p = posterior_positive(1.0, 0.8, 0.2).unwrap();
        assert!(approx_eq(p, 1.0, 1e-12));

        let p = posterior_negative(0.0, 0.8, 0.2).unwrap();
        assert!(approx_eq(p, 0.0, 1e-12));
    }

    #[test]
    fn idempotent_for_identical_inputs() {
        let a = posterior_positive(0.3, 0.85, 0.07).unwrap();
        let b = posterior_positive(0.3, 0.85, 0.07).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn uninformative_test_leaves_prior_unchanged() {
        // sensitivity == false positive rate carries no information.
        let p = posterior_positive(0.3, 0.6, 0.6).unwrap();
        assert!(approx_eq(p, 0.3, 1e-12));
    }

    mod props {
        use super::super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn posteriors_stay_in_unit_interval(
                prior in 0.0f64..=1.0,
                sensitivity in 0.0f64..=1.0,
                false_positive in 0.0f64..=1.0,
            ) {
                if let Ok(p) = posterior_positive(prior, sensitivity, false_positive) {
                    prop_assert!((0.0..=1.0).contains(&p));
                }
                if let Ok(p) = posterior_negative(prior, sensitivity, false_positive) {
                    prop_assert!((0.0..=1.0).contains(&p));
                }
            }

            #[test]
            fn errors_only_on_zero_denominator(
                prior in 0.000001f64..=0.999999,
                sensitivity in 0.000001f64..=1.0,
                false_positive in 0.000001f64..=1.0,
            ) {
                // Interior priors with nonzero rates keep both denominators
                // positive on the positive branch.
                prop_assert!(posterior_positive(prior, sensitivity, false_positive).is_ok());
            }
        }
    }
}
