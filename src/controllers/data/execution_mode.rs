use crate::core::actions::generate_escape_time::errors::EscapeTimeError;
use crate::core::actions::generate_escape_time::generate_escape_time::generate_escape_time;
use crate::core::actions::generate_escape_time::generate_escape_time_rayon::generate_escape_time_rayon;
use crate::core::actions::generate_escape_time::ports::update_rule::PointUpdateRule;
use crate::core::data::escape_time::EscapeTime;
use crate::core::data::plane::Plane;
use crate::core::data::rule_params::RuleParams;

/// How the engine pass over a plane is scheduled. Both modes give identical results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    Serial,
    #[default]
    Parallel,
}

impl ExecutionMode {
    pub const ALL: &'static [Self] = &[Self::Serial, Self::Parallel];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Serial => "serial",
            Self::Parallel => "parallel",
        }
    }

    pub fn generate<R: PointUpdateRule + ?Sized>(
        self,
        plane: &Plane,
        max_iterations: u32,
        rule: &R,
        params: &RuleParams,
    ) -> Result<EscapeTime, EscapeTimeError> {
        match self {
            Self::Serial => generate_escape_time(plane, max_iterations, rule, params),
            Self::Parallel => generate_escape_time_rayon(plane, max_iterations, rule, params),
        }
    }
}
