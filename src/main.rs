use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use huebox::models::{AppConfig, CONFIG_ENV};
use huebox::rendering::{self, OutputFormat};
use huebox::services::{parse_color, GradientService};
use huebox_color::calculate::wcag_contrast_ratio;
use huebox_color::ColorSpace;

#[derive(Parser)]
#[command(name = "huebox")]
#[command(about = "Huebox - sample color gradients and convert colors")]
struct Cli {
    /// Gradient config file (overrides HUEBOX_CONFIG)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Sample a configured gradient
    Gradient {
        /// Gradient name (defaults to default_gradient from the config)
        name: Option<String>,

        /// Number of evenly spaced samples
        #[arg(short, long)]
        steps: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Hex)]
        format: OutputFormat,
    },
    /// Convert a hex color into another color space
    Convert {
        /// Color as #rgb, #rgba, #rrggbb or #rrggbbaa
        color: String,

        /// Target color space (e.g. oklch, lab-d50, display-p3)
        #[arg(short, long, default_value = "oklch")]
        to: String,
    },
    /// WCAG 2 contrast ratio between two colors
    Contrast {
        foreground: String,
        background: String,
    },
    /// List configured gradients
    List,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "huebox=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let config_path = AppConfig::resolve_path(cli.config);
    let config = Arc::new(AppConfig::load_or_default(config_path.as_deref()));

    match cli.command {
        Some(Commands::Gradient {
            name,
            steps,
            format,
        }) => run_gradient_command(config, name.as_deref(), steps, format),
        Some(Commands::Convert { color, to }) => run_convert_command(&color, &to),
        Some(Commands::Contrast {
            foreground,
            background,
        }) => run_contrast_command(&foreground, &background),
        Some(Commands::List) => {
            run_list_command(&config);
            Ok(())
        }
        None => {
            run_status_command(&config, config_path.as_deref());
            Ok(())
        }
    }
}

fn run_gradient_command(
    config: Arc<AppConfig>,
    name: Option<&str>,
    steps: Option<usize>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let service = GradientService::new(config);
    let colors = service.sample(name, steps)?;
    println!("{}", rendering::render(&colors, format)?);
    Ok(())
}

fn run_convert_command(color: &str, to: &str) -> anyhow::Result<()> {
    let color = parse_color(color)?;
    let space: ColorSpace = to.parse()?;
    println!("{}", rendering::describe(&space.convert(&color)));
    Ok(())
}

fn run_contrast_command(foreground: &str, background: &str) -> anyhow::Result<()> {
    let fg = parse_color(foreground)?;
    let bg = parse_color(background)?;
    let ratio = wcag_contrast_ratio(&fg, &bg);
    let verdict = |target: f32| if ratio >= target { "pass" } else { "fail" };

    println!("Contrast ratio: {ratio:.2}:1");
    println!("  AA  normal text (4.5:1): {}", verdict(4.5));
    println!("  AA  large text  (3:1):   {}", verdict(3.0));
    println!("  AAA normal text (7:1):   {}", verdict(7.0));
    println!("  AAA large text  (4.5:1): {}", verdict(4.5));
    Ok(())
}

fn run_list_command(config: &AppConfig) {
    for (name, gradient) in &config.gradients {
        let marker = if config.default_gradient.as_deref() == Some(name.as_str()) {
            "*"
        } else {
            " "
        };
        println!(
            "{marker} {name:<16} {:<8} {:<26} {} stops",
            gradient.space,
            gradient.method,
            gradient.stops.len()
        );
    }
}

fn run_status_command(config: &AppConfig, config_path: Option<&std::path::Path>) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("Huebox v{VERSION} - color gradients and conversion\n");

    println!("Environment Variables:");
    println!(
        "  {CONFIG_ENV} = {}",
        std::env::var(CONFIG_ENV).as_deref().unwrap_or("(not set)")
    );

    println!("\nConfiguration:");
    match config_path {
        Some(path) => println!("  file             = {}", path.display()),
        None => println!("  file             = (built-in defaults)"),
    }
    println!(
        "  default gradient = {}",
        config.default_gradient.as_deref().unwrap_or("(none)")
    );
    println!("  default steps    = {}", config.default_steps);

    println!("\nGradients:");
    run_list_command(config);

    println!("\nInterpolation methods: linear, monotone-spline, monotone-spline-parabolic");

    println!("\nRun 'huebox --help' for usage.");
}
