//! gefaelle CLI - slope calculator
//!
//! Give any two of horizontal distance, vertical distance, angle and
//! slope percentage; prints the other two or plots the slope.

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use gefaelle_kernel::{
    solve_input, SlopeInput, SlopeQuantities, SolveError, SolveOutcome, Tolerance,
};
use gefaelle_present::{DxfDocument, Language, LinePresenter, SvgDocument, TablePresenter};
use std::path::{Path, PathBuf};

mod config;

use config::CliConfig;

#[derive(Parser)]
#[command(name = "gefaelle")]
#[command(about = "Slope calculator: distance, height, angle and percentage", long_about = None)]
struct Cli {
    /// Config file (default: ./gefaelle.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive the missing quantities and print them
    Solve {
        #[command(flatten)]
        input: InputArgs,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Label language (de, en)
        #[arg(long)]
        lang: Option<Language>,
        /// Decimal places
        #[arg(long)]
        precision: Option<usize>,
        /// Hide unit suffixes
        #[arg(long)]
        no_units: bool,
    },
    /// Solve, then plot the slope (format from extension: .svg, .dxf)
    Plot {
        /// Output file
        output: PathBuf,
        #[command(flatten)]
        input: InputArgs,
        /// Label language for errors and the caption (de, en)
        #[arg(long)]
        lang: Option<Language>,
    },
    /// Write the default configuration file
    InitConfig {
        /// Target path (default: ./gefaelle.toml)
        path: Option<PathBuf>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Horizontal distance in meters
    #[arg(long, allow_negative_numbers = true)]
    x: Option<f64>,
    /// Vertical distance in meters
    #[arg(long, allow_negative_numbers = true)]
    y: Option<f64>,
    /// Slope angle in degrees
    #[arg(long, allow_negative_numbers = true)]
    angle: Option<f64>,
    /// Slope in percent
    #[arg(long, allow_negative_numbers = true)]
    slope: Option<f64>,
    /// Treat a value of 0 as "not provided"
    #[arg(long)]
    zero_unset: bool,
}

impl InputArgs {
    fn to_input(&self) -> SlopeInput {
        let input = SlopeInput {
            x: self.x,
            y: self.y,
            angle_deg: self.angle,
            slope_pct: self.slope,
        };
        if self.zero_unset {
            SlopeInput::from_sentinel(
                input.x.unwrap_or(0.0),
                input.y.unwrap_or(0.0),
                input.angle_deg.unwrap_or(0.0),
                input.slope_pct.unwrap_or(0.0),
            )
        } else {
            input
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Aligned label/value lines
    Text,
    /// Table rows as JSON
    Json,
    /// Tagged solve outcome as JSON
    Outcome,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    let config_path = cli.config.clone().unwrap_or_else(CliConfig::default_path);

    match cli.command {
        Commands::Solve {
            input,
            format,
            lang,
            precision,
            no_units,
        } => {
            let config = CliConfig::load_from_file(&config_path);
            let presenter = TablePresenter {
                language: lang.unwrap_or(config.output.language),
                precision: precision.unwrap_or(config.output.precision),
                show_units: config.output.show_units && !no_units,
            };
            run_solve(&input.to_input(), format, &presenter)?;
        }
        Commands::Plot {
            output,
            input,
            lang,
        } => {
            let config = CliConfig::load_from_file(&config_path);
            let language = lang.unwrap_or(config.output.language);
            run_plot(&input.to_input(), &output, &config, language)?;
        }
        Commands::InitConfig { path, force } => {
            let path = path.unwrap_or(config_path);
            init_config(&path, force)?;
        }
    }

    Ok(())
}

fn solve_logged(input: &SlopeInput) -> Result<SlopeQuantities, SolveError> {
    let result = solve_input(input);
    if let Ok(q) = &result {
        let ignored = input.conflicts_with(q, &Tolerance::DEFAULT);
        if !ignored.is_empty() {
            let names: Vec<&str> = ignored.iter().map(|quantity| quantity.key()).collect();
            log::warn!(
                "more than two values given; ignored inconsistent {}",
                names.join(", ")
            );
        }
    }
    result
}

/// Solver errors are printed as a table row, not returned.
fn run_solve(
    input: &SlopeInput,
    format: OutputFormat,
    presenter: &TablePresenter,
) -> Result<()> {
    let result = solve_logged(input);
    match format {
        OutputFormat::Text => print!("{}", presenter.present(&result).render_text()),
        OutputFormat::Json => println!("{}", presenter.present(&result).to_json()?),
        OutputFormat::Outcome => {
            let outcome = SolveOutcome::from(result);
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
    }
    Ok(())
}

fn run_plot(
    input: &SlopeInput,
    output: &Path,
    config: &CliConfig,
    language: Language,
) -> Result<()> {
    let q = match solve_logged(input) {
        Ok(q) => q,
        Err(e) => anyhow::bail!("{}", language.error_message(&e)),
    };
    let caption = format!("{:.2}° / {:.2} %", q.angle_deg, q.slope_pct);

    let ext = output.extension().and_then(|e| e.to_str()).unwrap_or("");
    match ext.to_lowercase().as_str() {
        "svg" => {
            let frame = config.plot.frame();
            let segment = LinePresenter::new(frame).present(q.x, q.y)?;
            SvgDocument::new(frame, segment)
                .with_stroke_width(config.plot.stroke_width)
                .with_caption(caption)
                .export(output)?;
        }
        "dxf" => {
            let mut doc = DxfDocument::slope(&q)?;
            let text_height = q.x.abs().max(q.y.abs()) / 20.0;
            doc.add_text(q.x / 2.0, -2.0 * text_height, text_height, caption);
            doc.export(output)?;
        }
        _ => {
            anyhow::bail!("Unknown output format: {}", ext);
        }
    }

    println!("Plotted slope to {}", output.display());
    Ok(())
}

fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }
    CliConfig::default().save_to_file(path)?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("gefaelle").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_parse_solve_args() {
        let cli = parse(&["solve", "--x", "3", "--angle", "-12.5", "--lang", "en"]);
        match cli.command {
            Commands::Solve { input, lang, .. } => {
                let input = input.to_input();
                assert_eq!(input.x, Some(3.0));
                assert_eq!(input.angle_deg, Some(-12.5));
                assert_eq!(input.y, None);
                assert_eq!(lang, Some(Language::En));
            }
            _ => panic!("expected solve"),
        }
    }

    #[test]
    fn test_zero_unset_flag() {
        let cli = parse(&["solve", "--x", "0", "--y", "4", "--slope", "50", "--zero-unset"]);
        match cli.command {
            Commands::Solve { input, .. } => {
                let input = input.to_input();
                assert_eq!(input.x, None);
                assert_eq!(solve_input(&input).unwrap().x, 8.0);
            }
            _ => panic!("expected solve"),
        }
    }

    #[test]
    fn test_zero_is_known_by_default() {
        let cli = parse(&["solve", "--x", "0", "--y", "4"]);
        match cli.command {
            Commands::Solve { input, .. } => {
                let input = input.to_input();
                assert_eq!(input.x, Some(0.0));
                assert_eq!(solve_input(&input), Err(SolveError::DivisionByZero));
            }
            _ => panic!("expected solve"),
        }
    }

    #[test]
    fn test_plot_svg_and_dxf() {
        let input = SlopeInput::new().with_x(3.0).with_y(4.0);
        let config = CliConfig::default();
        for name in ["gefaelle_cli_plot.svg", "gefaelle_cli_plot.dxf"] {
            let path = std::env::temp_dir().join(name);
            run_plot(&input, &path, &config, Language::De).unwrap();
            let content = std::fs::read_to_string(&path).unwrap();
            assert!(content.contains("53.13°"));
            let _ = std::fs::remove_file(&path);
        }
    }

    #[test]
    fn test_plot_errors() {
        let config = CliConfig::default();
        let path = std::env::temp_dir().join("gefaelle_cli_plot.png");
        let input = SlopeInput::new().with_x(3.0).with_y(4.0);
        let err = run_plot(&input, &path, &config, Language::En).unwrap_err();
        assert!(err.to_string().contains("Unknown output format"));

        let path = std::env::temp_dir().join("gefaelle_cli_unsolved.svg");
        let err = run_plot(&SlopeInput::new(), &path, &config, Language::De).unwrap_err();
        assert_eq!(err.to_string(), "Bitte geben Sie mindestens zwei Werte ein.");
    }

    #[test]
    fn test_plot_rejects_unplottable_results() {
        let config = CliConfig::default();
        let degenerate = SlopeInput::new().with_angle_deg(45.0).with_slope_pct(0.0);
        let overflowed = SlopeInput::new().with_x(1e308).with_slope_pct(1000.0);
        for name in ["gefaelle_cli_bad.svg", "gefaelle_cli_bad.dxf"] {
            let path = std::env::temp_dir().join(name);
            let _ = std::fs::remove_file(&path);

            let err = run_plot(&degenerate, &path, &config, Language::En).unwrap_err();
            assert_eq!(err.to_string(), "cannot plot a zero-length segment");

            let err = run_plot(&overflowed, &path, &config, Language::En).unwrap_err();
            assert_eq!(err.to_string(), "non-finite coordinate: inf");

            assert!(!path.exists());
        }
    }

    #[test]
    fn test_init_config_refuses_overwrite() {
        let path = std::env::temp_dir().join("gefaelle_cli_init.toml");
        let _ = std::fs::remove_file(&path);
        init_config(&path, false).unwrap();
        assert!(init_config(&path, false).is_err());
        init_config(&path, true).unwrap();
        let _ = std::fs::remove_file(&path);
    }
}
