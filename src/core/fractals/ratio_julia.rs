use num_complex::Complex64;

use crate::core::actions::generate_escape_time::errors::UpdateRuleError;
use crate::core::actions::generate_escape_time::ports::update_rule::PointUpdateRule;
use crate::core::data::rule_params::RuleParams;

/// `(Re z / Im z)² + i·conj(z)`.
///
/// Undefined on the real axis: a value with `Im z = 0` fails with a domain
/// error instead of producing a NaN orbit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RatioJuliaRule;

impl PointUpdateRule for RatioJuliaRule {
    fn update(&self, z: Complex64, _: Complex64, _: &RuleParams) -> Result<Complex64, UpdateRuleError> {
        if z.im == 0.0 {
            return Err(UpdateRuleError::Domain(format!(
                "division by zero imaginary part at {z}"
            )));
        }

        let ratio = z.re / z.im;

        Ok(Complex64::new(ratio * ratio, 0.0) + Complex64::i() * z.conj())
    }

    fn display_name(&self) -> &str {
        "Ratio Julia"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_off_the_real_axis() {
        // (1/2)² + i·(1 - 2i) = 0.25 + 2 + i
        let result = RatioJuliaRule
            .update(Complex64::new(1.0, 2.0), Complex64::new(0.0, 0.0), &RuleParams::new())
            .unwrap();

        assert_eq!(result, Complex64::new(2.25, 1.0));
    }

    #[test]
    fn test_real_axis_is_a_domain_error() {
        let result = RatioJuliaRule.update(Complex64::new(0.5, 0.0), Complex64::new(0.5, 0.0), &RuleParams::new());

        assert!(matches!(result, Err(UpdateRuleError::Domain(_))));
    }
}
