use clap::{Parser, Subcommand};
use lm_core::TempScale;
use lm_props::{PropertyError, PropertyModel, RangePolicy};
use lm_sweep::{
    ConfigError, EnvelopeBoundary, LengthMatchStudy, ModelKind, RangeSpec, RangeSummary,
    ScalingConfig, SweepError, SweepOutcome, SweepResultRow, load_yaml, run_sweep,
};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Sweep(#[from] SweepError),

    #[error(transparent)]
    Property(#[from] PropertyError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

type CliResult<T> = Result<T, CliError>;

#[derive(Parser)]
#[command(name = "lm-cli")]
#[command(about = "Liquid-metal MHD scaling: property tables, capability envelopes, length matching", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a property table over a temperature range
    Props {
        /// pb17li, structural-alloy or tabulated-pbli
        #[arg(long, default_value = "pb17li")]
        model: ModelKind,
        /// First temperature
        #[arg(long, default_value_t = 300.0)]
        from: f64,
        /// Last temperature
        #[arg(long, default_value_t = 550.0)]
        to: f64,
        /// Number of temperatures
        #[arg(long, default_value_t = 6)]
        count: usize,
        /// Temperatures are in Kelvin (default Celsius)
        #[arg(long)]
        kelvin: bool,
        /// Evaluate correlations outside their validity interval
        #[arg(long)]
        permissive: bool,
    },
    /// Sweep the configured ranges and report the capability envelope
    Envelope {
        /// Path to the configuration YAML file (defaults when omitted)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Write every sweep row to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Run the length-match study
    Match {
        /// Path to the configuration YAML file (defaults when omitted)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Validate a configuration file
    Check {
        /// Path to the configuration YAML file
        config_path: PathBuf,
    },
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Props {
            model,
            from,
            to,
            count,
            kelvin,
            permissive,
        } => {
            let scale = if kelvin {
                TempScale::Kelvin
            } else {
                TempScale::Celsius
            };
            let policy = if permissive {
                RangePolicy::Permissive
            } else {
                RangePolicy::Strict
            };
            cmd_props(model, policy, RangeSpec::linear(from, to, count), scale)
        }
        Commands::Envelope { config, csv } => cmd_envelope(config.as_deref(), csv.as_deref()),
        Commands::Match { config } => cmd_match(config.as_deref()),
        Commands::Check { config_path } => cmd_check(&config_path),
    }
}

fn load_config(path: Option<&Path>) -> CliResult<ScalingConfig> {
    match path {
        Some(path) => {
            info!(path = %path.display(), "Loading configuration");
            Ok(load_yaml(path)?)
        }
        None => Ok(ScalingConfig::default()),
    }
}

fn cmd_props(model: ModelKind, policy: RangePolicy, range: RangeSpec, scale: TempScale) -> CliResult<()> {
    let model = model.build(policy)?;
    let temperatures = range.values()?;
    let capabilities = model.capabilities();

    println!("{} ({})", model.name(), model.policy());
    print!("{:>10}", format!("T [{}]", scale.symbol()));
    for property in &capabilities {
        print!(" {:>24}", format!("{} [{}]", property.name(), model.unit(*property)));
    }
    println!();

    for v in temperatures {
        print!("{v:>10.2}");
        for (_, value) in model.property_table(scale.temperature(v)) {
            match value {
                Ok(x) => print!(" {x:>24.6e}"),
                Err(PropertyError::OutOfRange { .. }) => print!(" {:>24}", "out of range"),
                Err(_) => print!(" {:>24}", "n/a"),
            }
        }
        println!();
    }
    Ok(())
}

fn cmd_envelope(config_path: Option<&Path>, csv_path: Option<&Path>) -> CliResult<()> {
    let config = load_config(config_path)?;
    let model = config.build_model()?;
    let outcome = run_sweep(model.as_ref(), &config.sweep, config.gravity)?;

    for skipped in &outcome.skipped {
        println!("Skipped T = {} °C: {}", skipped.t_c, skipped.error);
    }
    for t_c in outcome.valid_temperatures() {
        println!("T = {t_c} °C: {} points", outcome.rows_at(t_c).len());
    }
    if let Some(first) = outcome.first_valid_temperature() {
        println!("First valid temperature: {first} °C");
    }

    let summary = RangeSummary::from_rows(&outcome.rows)?;
    println!();
    print!("{summary}");

    let hull = EnvelopeBoundary::from_rows(&outcome.rows)?;
    println!();
    println!("Envelope ({} vertices, Gr vs Ha²/Re):", hull.len());
    for [gr, ha2_over_re] in hull.vertices_linear() {
        println!("  {gr:>12.4e} {ha2_over_re:>12.4e}");
    }

    if let Some(path) = csv_path {
        write_csv(path, &outcome)?;
        println!("✓ Exported {} rows to {}", outcome.rows.len(), path.display());
    }
    Ok(())
}

fn write_csv(path: &Path, outcome: &SweepOutcome) -> CliResult<()> {
    let mut csv = SweepResultRow::HEADER.join(",");
    csv.push('\n');
    for row in &outcome.rows {
        let line: Vec<String> = row.values().iter().map(|v| v.to_string()).collect();
        csv.push_str(&line.join(","));
        csv.push('\n');
    }
    std::fs::write(path, csv)?;
    Ok(())
}

fn cmd_match(config_path: Option<&Path>) -> CliResult<()> {
    let config = load_config(config_path)?;
    let model = config.build_model()?;
    let study = LengthMatchStudy::run(
        model.as_ref(),
        &config.study_or_default(),
        config.targets,
        config.gravity,
    )?;
    print!("{study}");
    for (q, u) in study.matches() {
        println!("  match: q = {q:.4e} W/m², U = {u:.4e} m/s");
    }
    Ok(())
}

fn cmd_check(config_path: &Path) -> CliResult<()> {
    println!("Checking configuration: {}", config_path.display());
    let config = load_yaml(config_path)?;
    let model = config.build_model()?;
    println!("✓ Configuration is valid (model {}, {})", model.name(), config.range_policy);
    Ok(())
}
