use clap::{Parser, ValueEnum};
use fractal_render::{
    Complex, ComplexRect, DEFAULT_JULIA_CONSTANT, FractalKind, ImageProperties,
    PpmFilePresenter, RenderOnceController, SchedulerConfig, Viewport,
};
use std::error::Error;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FractalArg {
    Mandelbrot,
    Julia,
    BurningShip,
}

/// Render one escape-time fractal frame to a PPM file.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Scheduler settings (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, default_value_t = 800)]
    width: u32,

    #[arg(long, default_value_t = 600)]
    height: u32,

    #[arg(long, default_value_t = 256)]
    iterations: u32,

    /// Plane units per pixel; fits the classic view when omitted
    #[arg(long)]
    scale: Option<f64>,

    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    x_shift: f64,

    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    y_shift: f64,

    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    colour_shift: f64,

    #[arg(long, value_enum, default_value_t = FractalArg::Mandelbrot)]
    fractal: FractalArg,

    #[arg(long, default_value_t = DEFAULT_JULIA_CONSTANT.real, allow_negative_numbers = true)]
    julia_real: f64,

    #[arg(long, default_value_t = DEFAULT_JULIA_CONSTANT.imag, allow_negative_numbers = true)]
    julia_imag: f64,

    #[arg(long, default_value = "output/fractal.ppm")]
    output: PathBuf,
}

impl Args {
    fn fractal(&self) -> FractalKind {
        match self.fractal {
            FractalArg::Mandelbrot => FractalKind::Mandelbrot,
            FractalArg::Julia => FractalKind::Julia {
                constant: Complex::new(self.julia_real, self.julia_imag),
            },
            FractalArg::BurningShip => FractalKind::BurningShip,
        }
    }

    fn properties(&self, viewport: Viewport) -> Result<ImageProperties, Box<dyn Error>> {
        let properties = match self.scale {
            Some(scale) => ImageProperties::new(
                self.iterations,
                scale,
                self.x_shift,
                self.y_shift,
                self.colour_shift,
            )?,
            None => {
                let region = ComplexRect::new(Complex::new(-2.5, -1.0), Complex::new(1.0, 1.0))?;

                ImageProperties::fit(viewport, region, self.iterations)?
                    .with_colour_shift(self.colour_shift)?
            }
        };

        Ok(properties)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => SchedulerConfig::load(path)?,
        None => SchedulerConfig::default(),
    };

    let viewport = Viewport::new(args.width, args.height)?;
    let properties = args.properties(viewport)?;

    let mut controller = RenderOnceController::new(PpmFilePresenter::new(), config);
    controller.generate(args.fractal(), properties, viewport)?;

    if let Some(parent) = args.output.parent() {
        std::fs::create_dir_all(parent)?;
    }
    controller.write(&args.output)?;

    log::info!("Wrote {}", args.output.display());

    Ok(())
}
