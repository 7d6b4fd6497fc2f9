use thiserror::Error;

/// Failure raised by an update rule for a single point.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UpdateRuleError {
    #[error("domain error: {0}")]
    Domain(String),
    #[error("missing rule parameter `{0}`")]
    MissingParameter(String),
    #[error("rule parameter `{name}` must be {expected}")]
    ParameterType { name: String, expected: &'static str },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EscapeTimeError {
    #[error("plane must contain at least one sample")]
    InvalidResolution,
    #[error("maximum iterations must be greater than zero")]
    InvalidIterationBudget,
    #[error("update rule failed at row {row}, col {col} on iteration {iteration}: {source}")]
    UpdateRuleFailure {
        row: usize,
        col: usize,
        iteration: u32,
        #[source]
        source: UpdateRuleError,
    },
}
