use num_complex::Complex64;

use crate::core::actions::generate_escape_time::errors::UpdateRuleError;
use crate::core::actions::generate_escape_time::ports::update_rule::PointUpdateRule;
use crate::core::data::rule_params::RuleParams;

pub const DEFAULT_JULIA_CONSTANT: Complex64 = Complex64::new(-0.8, 0.156);

/// `z² + k` for a fixed constant `k`; the plane coordinate only seeds the orbit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JuliaRule {
    constant: Complex64,
}

impl JuliaRule {
    #[must_use]
    pub fn new(constant: Complex64) -> Self {
        Self { constant }
    }

    #[must_use]
    pub fn constant(&self) -> Complex64 {
        self.constant
    }
}

impl Default for JuliaRule {
    fn default() -> Self {
        Self::new(DEFAULT_JULIA_CONSTANT)
    }
}

impl PointUpdateRule for JuliaRule {
    fn update(&self, z: Complex64, _: Complex64, _: &RuleParams) -> Result<Complex64, UpdateRuleError> {
        Ok(z * z + self.constant)
    }

    fn display_name(&self) -> &str {
        "Julia"
    }
}
