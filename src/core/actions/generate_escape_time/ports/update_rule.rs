use num_complex::Complex64;

use crate::core::actions::generate_escape_time::errors::UpdateRuleError;
use crate::core::data::rule_params::RuleParams;

/// One step of an escape-time recurrence.
///
/// `update` receives the current orbit value `z`, the cell's original plane
/// coordinate `c` and the caller's parameter bag. It must be a pure function
/// of those inputs: the engine calls it from several threads and in no
/// particular cell order.
pub trait PointUpdateRule: Send + Sync {
    fn update(&self, z: Complex64, c: Complex64, params: &RuleParams) -> Result<Complex64, UpdateRuleError>;

    fn display_name(&self) -> &str;
}

impl<R: PointUpdateRule + ?Sized> PointUpdateRule for Box<R> {
    fn update(&self, z: Complex64, c: Complex64, params: &RuleParams) -> Result<Complex64, UpdateRuleError> {
        (**self).update(z, c, params)
    }

    fn display_name(&self) -> &str {
        (**self).display_name()
    }
}

impl<R: PointUpdateRule + ?Sized> PointUpdateRule for &R {
    fn update(&self, z: Complex64, c: Complex64, params: &RuleParams) -> Result<Complex64, UpdateRuleError> {
        (**self).update(z, c, params)
    }

    fn display_name(&self) -> &str {
        (**self).display_name()
    }
}
