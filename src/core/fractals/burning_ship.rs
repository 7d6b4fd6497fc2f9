use num_complex::Complex64;

use crate::core::actions::generate_escape_time::errors::UpdateRuleError;
use crate::core::actions::generate_escape_time::ports::update_rule::PointUpdateRule;
use crate::core::data::rule_params::RuleParams;

/// `(|Re z| + i|Im z|)² + c`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BurningShipRule;

impl PointUpdateRule for BurningShipRule {
    fn update(&self, z: Complex64, c: Complex64, _: &RuleParams) -> Result<Complex64, UpdateRuleError> {
        let folded = Complex64::new(z.re.abs(), z.im.abs());

        Ok(folded * folded + c)
    }

    fn display_name(&self) -> &str {
        "Burning Ship"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_folds_into_first_quadrant() {
        let c = Complex64::new(0.0, 0.0);
        let params = RuleParams::new();

        let expected = BurningShipRule.update(Complex64::new(1.0, 2.0), c, &params).unwrap();

        for z in [
            Complex64::new(-1.0, 2.0),
            Complex64::new(1.0, -2.0),
            Complex64::new(-1.0, -2.0),
        ] {
            assert_eq!(BurningShipRule.update(z, c, &params).unwrap(), expected);
        }

        // (1 + 2i)² = -3 + 4i
        assert_eq!(expected, Complex64::new(-3.0, 4.0));
    }
}
