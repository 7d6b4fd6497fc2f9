use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use num_complex::Complex64;
use tracing_subscriber::EnvFilter;

use fractal_zoom::{
    Bounds, ExecutionMode, FractalKinds, FramePlane, LogProgress, NoRegionPolicy, Orientation,
    PpmFrameSink, ProgressBar, ProgressReporter, RuleParams, RuleSettings, ScoringStrategy,
    ZoomConfig, ZoomController,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FractalArg {
    Mandelbrot,
    Julia,
    BurningShip,
    Multibrot,
    Mandelbar,
    RatioJulia,
}

impl From<FractalArg> for FractalKinds {
    fn from(arg: FractalArg) -> Self {
        match arg {
            FractalArg::Mandelbrot => Self::Mandelbrot,
            FractalArg::Julia => Self::Julia,
            FractalArg::BurningShip => Self::BurningShip,
            FractalArg::Multibrot => Self::Multibrot,
            FractalArg::Mandelbar => Self::Mandelbar,
            FractalArg::RatioJulia => Self::RatioJulia,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StrategyArg {
    Entropy,
    Variance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PlaneArg {
    Iterations,
    Magnitudes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ProgressArg {
    Bar,
    Log,
}

/// Renders an auto-zooming fractal animation as a sequence of PPM frames.
#[derive(Debug, Parser)]
#[command(name = "fractal_zoom", version)]
struct Cli {
    #[arg(long, value_enum, default_value_t = FractalArg::Mandelbrot)]
    fractal: FractalArg,
    /// Exponent for the multibrot and mandelbar rules.
    #[arg(long, default_value_t = 2.0)]
    exponent: f64,
    #[arg(long, default_value_t = -0.8, allow_hyphen_values = true)]
    julia_re: f64,
    #[arg(long, default_value_t = 0.156, allow_hyphen_values = true)]
    julia_im: f64,
    #[arg(long, default_value_t = -2.0, allow_hyphen_values = true)]
    re_min: f64,
    #[arg(long, default_value_t = 1.0, allow_hyphen_values = true)]
    re_max: f64,
    #[arg(long, default_value_t = -1.5, allow_hyphen_values = true)]
    im_min: f64,
    #[arg(long, default_value_t = 1.5, allow_hyphen_values = true)]
    im_max: f64,
    #[arg(long, default_value_t = 300)]
    resolution: usize,
    #[arg(long, default_value_t = 60)]
    max_iterations: u32,
    #[arg(long, default_value_t = 10)]
    frames: usize,
    #[arg(long, default_value_t = 1.5)]
    zoom_factor: f64,
    #[arg(long, value_enum, default_value_t = StrategyArg::Entropy)]
    strategy: StrategyArg,
    /// Put the minimum imaginary bound on the first row.
    #[arg(long)]
    bottom_up: bool,
    /// Evaluate on the calling thread only.
    #[arg(long)]
    serial: bool,
    /// Keep the current bounds instead of failing when a frame is uniform.
    #[arg(long)]
    hold_bounds: bool,
    #[arg(long, value_enum, default_value_t = PlaneArg::Iterations)]
    plane: PlaneArg,
    #[arg(long, default_value = "output")]
    output: PathBuf,
    #[arg(long, default_value = "frame")]
    prefix: String,
    #[arg(long, value_enum, default_value_t = ProgressArg::Bar)]
    progress: ProgressArg,
}

impl Cli {
    fn zoom_config(&self) -> Result<ZoomConfig, Box<dyn std::error::Error>> {
        Ok(ZoomConfig {
            bounds: Bounds::new(self.re_min, self.re_max, self.im_min, self.im_max)?,
            resolution: self.resolution,
            max_iterations: self.max_iterations,
            frame_count: self.frames,
            zoom_factor: self.zoom_factor,
            strategy: match self.strategy {
                StrategyArg::Entropy => ScoringStrategy::Entropy,
                StrategyArg::Variance => ScoringStrategy::Variance,
            },
            orientation: if self.bottom_up {
                Orientation::BottomUp
            } else {
                Orientation::TopDown
            },
            execution_mode: if self.serial {
                ExecutionMode::Serial
            } else {
                ExecutionMode::Parallel
            },
            no_region_policy: if self.hold_bounds {
                NoRegionPolicy::HoldBounds
            } else {
                NoRegionPolicy::Fail
            },
        })
    }

    fn rule_settings(&self) -> RuleSettings {
        RuleSettings {
            julia_constant: Complex64::new(self.julia_re, self.julia_im),
            exponent: self.exponent,
        }
    }

    fn frame_plane(&self) -> FramePlane {
        match self.plane {
            PlaneArg::Iterations => FramePlane::Iterations,
            PlaneArg::Magnitudes => FramePlane::Magnitudes,
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.progress {
        ProgressArg::Bar => zoom(cli, ProgressBar::new(std::io::stderr(), "Zoom")),
        ProgressArg::Log => zoom(cli, LogProgress::new("zoom")),
    }
}

fn zoom<P: ProgressReporter>(cli: &Cli, progress: P) -> Result<(), Box<dyn std::error::Error>> {
    let config = cli.zoom_config()?;
    let kind = FractalKinds::from(cli.fractal);
    let rule = kind.build_rule(cli.rule_settings());
    let sink = PpmFrameSink::new(&cli.output, &cli.prefix, cli.frame_plane());
    let mut controller = ZoomController::new(sink, progress);

    let used = controller.run(&config, &*rule, &RuleParams::new())?;

    tracing::info!(
        fractal = kind.display_name(),
        frames = used.len(),
        output = %controller.sink().directory().display(),
        "frames written"
    );

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    run(&cli)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_zoom_config_defaults() {
        let cli = Cli::try_parse_from(["fractal_zoom"]).unwrap();

        assert_eq!(cli.zoom_config().unwrap(), ZoomConfig::default());
        assert_eq!(cli.rule_settings(), RuleSettings::default());
    }

    #[test]
    fn test_parses_negative_bounds_and_flags() {
        let cli = Cli::try_parse_from([
            "fractal_zoom",
            "--fractal",
            "burning-ship",
            "--re-min",
            "-1.8",
            "--re-max",
            "-1.7",
            "--im-min",
            "-0.1",
            "--im-max",
            "0.0",
            "--strategy",
            "variance",
            "--serial",
            "--hold-bounds",
            "--bottom-up",
        ])
        .unwrap();
        let config = cli.zoom_config().unwrap();

        assert_eq!(FractalKinds::from(cli.fractal), FractalKinds::BurningShip);
        assert_eq!(config.bounds, Bounds::new(-1.8, -1.7, -0.1, 0.0).unwrap());
        assert_eq!(config.strategy, ScoringStrategy::Variance);
        assert_eq!(config.execution_mode, ExecutionMode::Serial);
        assert_eq!(config.no_region_policy, NoRegionPolicy::HoldBounds);
        assert_eq!(config.orientation, Orientation::BottomUp);
    }

    #[test]
    fn test_inverted_bounds_are_rejected() {
        let cli = Cli::try_parse_from(["fractal_zoom", "--re-min", "1.0", "--re-max", "0.0"]).unwrap();

        assert!(cli.zoom_config().is_err());
    }

    #[test]
    fn test_run_writes_frames() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().to_str().unwrap();
        let cli = Cli::try_parse_from([
            "fractal_zoom",
            "--resolution",
            "32",
            "--max-iterations",
            "20",
            "--frames",
            "2",
            "--progress",
            "log",
            "--output",
            output,
        ])
        .unwrap();

        run(&cli).unwrap();

        assert!(dir.path().join("frame_0000.ppm").exists());
        assert!(dir.path().join("frame_0001.ppm").exists());
    }
}
