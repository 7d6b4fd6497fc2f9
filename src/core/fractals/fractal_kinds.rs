use num_complex::Complex64;

use crate::core::actions::generate_escape_time::ports::update_rule::PointUpdateRule;
use crate::core::fractals::burning_ship::BurningShipRule;
use crate::core::fractals::julia::{DEFAULT_JULIA_CONSTANT, JuliaRule};
use crate::core::fractals::mandelbar::MandelbarRule;
use crate::core::fractals::mandelbrot::MandelbrotRule;
use crate::core::fractals::multibrot::MultibrotRule;
use crate::core::fractals::ratio_julia::RatioJuliaRule;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FractalKinds {
    #[default]
    Mandelbrot,
    Julia,
    BurningShip,
    Multibrot,
    Mandelbar,
    RatioJulia,
}

/// Knobs the parameterised built-in rules read when they are built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleSettings {
    pub julia_constant: Complex64,
    pub exponent: f64,
}

impl Default for RuleSettings {
    fn default() -> Self {
        Self {
            julia_constant: DEFAULT_JULIA_CONSTANT,
            exponent: 2.0,
        }
    }
}

impl FractalKinds {
    pub const ALL: &'static [Self] = &[
        Self::Mandelbrot,
        Self::Julia,
        Self::BurningShip,
        Self::Multibrot,
        Self::Mandelbar,
        Self::RatioJulia,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia => "Julia",
            Self::BurningShip => "Burning Ship",
            Self::Multibrot => "Multibrot",
            Self::Mandelbar => "Mandelbar",
            Self::RatioJulia => "Ratio Julia",
        }
    }

    #[must_use]
    pub fn build_rule(self, settings: RuleSettings) -> Box<dyn PointUpdateRule> {
        match self {
            Self::Mandelbrot => Box::new(MandelbrotRule),
            Self::Julia => Box::new(JuliaRule::new(settings.julia_constant)),
            Self::BurningShip => Box::new(BurningShipRule),
            Self::Multibrot => Box::new(MultibrotRule::new(settings.exponent)),
            Self::Mandelbar => Box::new(MandelbarRule::new(settings.exponent)),
            Self::RatioJulia => Box::new(RatioJuliaRule),
        }
    }
}
