use num_complex::Complex64;

use crate::core::actions::generate_escape_time::errors::UpdateRuleError;
use crate::core::actions::generate_escape_time::ports::update_rule::PointUpdateRule;
use crate::core::data::rule_params::RuleParams;

/// `z² + c`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MandelbrotRule;

impl PointUpdateRule for MandelbrotRule {
    fn update(&self, z: Complex64, c: Complex64, _: &RuleParams) -> Result<Complex64, UpdateRuleError> {
        Ok(z * z + c)
    }

    fn display_name(&self) -> &str {
        "Mandelbrot"
    }
}
