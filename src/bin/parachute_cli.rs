use clap::{Args, Parser, Subcommand, ValueEnum};
use log::info;
use std::error::Error;
use std::io::Write;
use std::path::PathBuf;
use parachute_engine::{
    Deployment, RoundingPolicy, SafetyFactor, SizingConfig, SizingReport, SizingRequest,
    constants::DEFAULT_DROGUE_FRACTION,
};

#[derive(Parser)]
#[command(name = "parachute")]
#[command(version)]
#[command(about = "Round parachute canopy sizing for rocket recovery", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Size a single canopy
    Single {
        #[command(flatten)]
        common: CommonArgs,

        /// Drag coefficient
        #[arg(long, default_value = "1.2")]
        cd: f64,
    },

    /// Size a drogue + main pair
    Dual {
        #[command(flatten)]
        common: CommonArgs,

        /// Drag coefficient of the drogue
        #[arg(long, default_value = "1.2")]
        cd_drogue: f64,

        /// Drag coefficient of the main
        #[arg(long, default_value = "1.2")]
        cd_main: f64,

        /// Share of the total area given to the drogue (0.01-0.90)
        #[arg(short = 'f', long, default_value_t = DEFAULT_DROGUE_FRACTION)]
        drogue_fraction: f64,
    },

    /// Size the job described in a JSON configuration file
    File {
        /// Path to the configuration file
        path: PathBuf,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,
    },

    /// Display sizing formulas and defaults
    Info,
}

#[derive(Args)]
struct CommonArgs {
    /// Gravitational acceleration (m/s²)
    #[arg(short = 'g', long, default_value = "9.81")]
    gravity: f64,

    /// Dry mass after burnout (kg)
    #[arg(short = 'm', long, default_value = "10.0")]
    mass: f64,

    /// Air density (kg/m³)
    #[arg(short = 'r', long, default_value = "1.225")]
    rho: f64,

    /// Target descent rate (m/s)
    #[arg(short = 'v', long, default_value = "10.0")]
    velocity: f64,

    /// Safety factor applied to area (diameter gets its square root)
    #[arg(short = 's', long, default_value = "1.1")]
    safety: f64,

    /// Purchase rounding of the diameter in feet
    #[arg(long, default_value = "none")]
    rounding: RoundingPolicy,

    /// Write the job to a JSON configuration file as well
    #[arg(long)]
    save_config: Option<PathBuf>,

    /// Output format
    #[arg(short = 'o', long, default_value = "table")]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

/// Initialize the logger; RUST_LOG overrides the default level
fn init_logger() {
    env_logger::Builder::from_default_env()
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logger();
    let cli = Cli::parse();

    match cli.command {
        Commands::Single { common, cd } => {
            run_job(&common, Deployment::Single { cd })?;
        },

        Commands::Dual { common, cd_drogue, cd_main, drogue_fraction } => {
            run_job(&common, Deployment::Dual { cd_drogue, cd_main, drogue_fraction })?;
        },

        Commands::File { path, output } => {
            let config = SizingConfig::load_from_file(&path)?;
            let report = config.run()?;
            display_report(&report, output)?;
        },

        Commands::Info => {
            println!("╔════════════════════════════════════════════╗");
            println!("║        PARACHUTE SIZING ENGINE             ║");
            println!("╠════════════════════════════════════════════╣");
            println!("║ Area:      S = (2 g m) / (rho Cd V²)       ║");
            println!("║ Diameter:  D = sqrt(4 S / π)               ║");
            println!("╠════════════════════════════════════════════╣");
            println!("║ Dual deployment:                           ║");
            println!("║ • total sized with Cd_avg                  ║");
            println!("║ • area split by drogue fraction (0.20)     ║");
            println!("║ Safety factor:                             ║");
            println!("║ • area × k, diameter × sqrt(k)             ║");
            println!("║ Purchase size:                             ║");
            println!("║ • whole feet, or inches below 1 ft         ║");
            println!("╚════════════════════════════════════════════╝");
        }
    }

    Ok(())
}

fn run_job(common: &CommonArgs, deployment: Deployment) -> Result<(), Box<dyn Error>> {
    let request = SizingRequest {
        gravity: common.gravity,
        mass: common.mass,
        air_density: common.rho,
        descent_rate: common.velocity,
        deployment,
    };
    let safety = SafetyFactor::new(common.safety)?;

    if let Some(path) = &common.save_config {
        let config = SizingConfig {
            gravity: request.gravity,
            mass: request.mass,
            air_density: request.air_density,
            descent_rate: request.descent_rate,
            deployment,
            safety_factor: safety.value(),
            rounding: common.rounding,
        };
        config.save_to_file(path)?;
        info!("Saved sizing configuration to {:?}", path);
    }

    let report = SizingReport::generate(&request, safety, common.rounding)?;
    display_report(&report, common.output)
}

fn display_report(report: &SizingReport, format: OutputFormat) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        },

        OutputFormat::Csv => {
            println!("stage,area_m2,area_ft2,diameter_m,diameter_in,diameter_ft,area_ft2_sf,diameter_ft_sf,purchase");
            for row in &report.rows {
                println!("{},{:.3},{:.3},{:.3},{:.1},{:.2},{:.3},{:.2},{}",
                    row.stage, row.area_m2, row.area_ft2, row.diameter_m, row.diameter_in,
                    row.diameter_ft, row.area_ft2_with_safety, row.diameter_ft_with_safety,
                    row.purchase);
            }
        },

        OutputFormat::Table => {
            println!("╔════════════════════════════════════════╗");
            println!("║         PARACHUTE SIZING               ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Safety Factor:     {:>8.2}            ║", report.safety_factor);
            println!("║ Rounding:          {:>8}            ║", report.rounding.to_string());
            println!("╚════════════════════════════════════════╝");
            println!();
            println!("┌────────┬──────────┬──────────┬──────────┬──────────┬──────────────────────┐");
            println!("│ Stage  │ Area(m²) │ Area(ft²)│  D (m)   │  D (in)  │ D (ft) purchase      │");
            println!("├────────┼──────────┼──────────┼──────────┼──────────┼──────────────────────┤");
            for row in &report.rows {
                println!("│ {:<6} │ {:>8.3} │ {:>8.3} │ {:>8.3} │ {:>8.1} │ {:<20} │",
                    row.stage.to_string(), row.area_m2, row.area_ft2, row.diameter_m,
                    row.diameter_in, row.purchase.to_string());
            }
            println!("└────────┴──────────┴──────────┴──────────┴──────────┴──────────────────────┘");

            if let Some(advisory) = &report.advisory {
                println!();
                println!("{}", advisory);
            }
        },
    }

    Ok(())
}
