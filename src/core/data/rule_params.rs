use std::collections::BTreeMap;

use num_complex::Complex64;

use crate::core::actions::generate_escape_time::errors::UpdateRuleError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamValue {
    Integer(i64),
    Real(f64),
    Complex(Complex64),
}

impl ParamValue {
    #[must_use]
    pub fn as_real(self) -> Option<f64> {
        match self {
            Self::Integer(value) => Some(value as f64),
            Self::Real(value) => Some(value),
            Self::Complex(_) => None,
        }
    }

    #[must_use]
    pub fn as_integer(self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_complex(self) -> Complex64 {
        match self {
            Self::Integer(value) => Complex64::new(value as f64, 0.0),
            Self::Real(value) => Complex64::new(value, 0.0),
            Self::Complex(value) => value,
        }
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<Complex64> for ParamValue {
    fn from(value: Complex64) -> Self {
        Self::Complex(value)
    }
}

/// Extra arguments handed unchanged to every update-rule call.
///
/// Each render builds or clones its own bag; no instance is shared between
/// runs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RuleParams {
    positional: Vec<ParamValue>,
    named: BTreeMap<String, ParamValue>,
}

impl RuleParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_positional(mut self, value: impl Into<ParamValue>) -> Self {
        self.positional.push(value.into());
        self
    }

    #[must_use]
    pub fn with_named(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.set_named(name, value);
        self
    }

    pub fn set_named(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        self.named.insert(name.into(), value.into());
    }

    #[must_use]
    pub fn positional(&self, index: usize) -> Option<ParamValue> {
        self.positional.get(index).copied()
    }

    #[must_use]
    pub fn named(&self, name: &str) -> Option<ParamValue> {
        self.named.get(name).copied()
    }

    #[must_use]
    pub fn positional_len(&self) -> usize {
        self.positional.len()
    }

    pub fn real(&self, name: &str) -> Result<f64, UpdateRuleError> {
        let value = self
            .named(name)
            .ok_or_else(|| UpdateRuleError::MissingParameter(name.to_string()))?;

        value.as_real().ok_or_else(|| UpdateRuleError::ParameterType {
            name: name.to_string(),
            expected: "real",
        })
    }

    pub fn complex(&self, name: &str) -> Result<Complex64, UpdateRuleError> {
        self.named(name)
            .map(ParamValue::as_complex)
            .ok_or_else(|| UpdateRuleError::MissingParameter(name.to_string()))
    }
}
