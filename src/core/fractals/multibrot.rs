use num_complex::Complex64;

use crate::core::actions::generate_escape_time::errors::UpdateRuleError;
use crate::core::actions::generate_escape_time::ports::update_rule::PointUpdateRule;
use crate::core::data::rule_params::RuleParams;

/// `z^p + c`. Integral exponents use repeated multiplication, others the
/// principal branch of `powf`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MultibrotRule {
    exponent: f64,
}

impl MultibrotRule {
    #[must_use]
    pub fn new(exponent: f64) -> Self {
        Self { exponent }
    }

    #[must_use]
    pub fn exponent(&self) -> f64 {
        self.exponent
    }
}

/// `Some(n)` when `exponent` is a whole number that fits an `i32`.
pub(crate) fn integral_exponent(exponent: f64) -> Option<i32> {
    if exponent.fract() == 0.0 && exponent.abs() <= i32::MAX as f64 {
        Some(exponent as i32)
    } else {
        None
    }
}

impl PointUpdateRule for MultibrotRule {
    fn update(&self, z: Complex64, c: Complex64, _: &RuleParams) -> Result<Complex64, UpdateRuleError> {
        if self.exponent < 0.0 && z.norm_sqr() == 0.0 {
            return Err(UpdateRuleError::Domain(format!(
                "zero raised to negative exponent {}",
                self.exponent
            )));
        }

        let powered = match integral_exponent(self.exponent) {
            Some(n) => z.powi(n),
            None => z.powf(self.exponent),
        };

        Ok(powered + c)
    }

    fn display_name(&self) -> &str {
        "Multibrot"
    }
}
