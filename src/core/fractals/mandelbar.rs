use num_complex::Complex64;

use crate::core::actions::generate_escape_time::errors::UpdateRuleError;
use crate::core::actions::generate_escape_time::ports::update_rule::PointUpdateRule;
use crate::core::data::rule_params::RuleParams;
use crate::core::fractals::multibrot::integral_exponent;

/// `conj(z)^p + c`; the tricorn for `p = 2`. Whole exponents use repeated
/// multiplication, others the principal branch of `powf`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbarRule {
    exponent: f64,
}

impl MandelbarRule {
    #[must_use]
    pub fn new(exponent: f64) -> Self {
        Self { exponent }
    }

    #[must_use]
    pub fn exponent(&self) -> f64 {
        self.exponent
    }
}

impl Default for MandelbarRule {
    fn default() -> Self {
        Self::new(2.0)
    }
}

impl PointUpdateRule for MandelbarRule {
    fn update(&self, z: Complex64, c: Complex64, _: &RuleParams) -> Result<Complex64, UpdateRuleError> {
        if self.exponent < 0.0 && z.norm_sqr() == 0.0 {
            return Err(UpdateRuleError::Domain(format!(
                "zero raised to negative exponent {}",
                self.exponent
            )));
        }

        let conjugate = z.conj();
        let powered = match integral_exponent(self.exponent) {
            Some(n) => conjugate.powi(n),
            None => conjugate.powf(self.exponent),
        };

        Ok(powered + c)
    }

    fn display_name(&self) -> &str {
        "Mandelbar"
    }
}
