use std::fmt;

use num_complex::Complex64;

use crate::core::actions::generate_escape_time::errors::UpdateRuleError;
use crate::core::actions::generate_escape_time::ports::update_rule::PointUpdateRule;
use crate::core::data::rule_params::RuleParams;

/// Adapts a caller-supplied closure into a [`PointUpdateRule`].
pub struct FnRule<F> {
    name: String,
    update: F,
}

impl<F> FnRule<F>
where
    F: Fn(Complex64, Complex64, &RuleParams) -> Result<Complex64, UpdateRuleError> + Send + Sync,
{
    pub fn new(name: impl Into<String>, update: F) -> Self {
        Self {
            name: name.into(),
            update,
        }
    }
}

impl<F> fmt::Debug for FnRule<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnRule").field("name", &self.name).finish_non_exhaustive()
    }
}

impl<F> PointUpdateRule for FnRule<F>
where
    F: Fn(Complex64, Complex64, &RuleParams) -> Result<Complex64, UpdateRuleError> + Send + Sync,
{
    fn update(&self, z: Complex64, c: Complex64, params: &RuleParams) -> Result<Complex64, UpdateRuleError> {
        (self.update)(z, c, params)
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}
