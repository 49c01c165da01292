use clap::Parser;
use fretdrill::config::RawConfig;
use fretdrill::drill::run_cycle;
use fretdrill::render::legend;
use fretdrill::{new_drill, DrillConfig, DrillError, DrillMode, Pacer, RenderOptions};
use env_logger::Env;
use log::info;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

/// Guitar note, fretboard and chord-shape drill
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Tempo in beats per minute (default 40)
    tempo: Option<f64>,

    /// What to drill
    #[arg(short, long, value_enum)]
    mode: Option<DrillMode>,

    /// YAML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Disable ANSI colors
    #[arg(long)]
    no_color: bool,

    /// Beats counted between announcements
    #[arg(short, long)]
    beats: Option<u32>,

    /// String mode picks among the lowest N strings
    #[arg(long)]
    strings: Option<usize>,

    /// Seed for a repeatable session
    #[arg(long)]
    seed: Option<u64>,
}

impl Cli {
    fn overrides(&self) -> RawConfig {
        RawConfig {
            tempo: self.tempo,
            mode: self.mode,
            color: self.no_color.then_some(false),
            beats_per_note: self.beats,
            string_pool: self.strings,
            seed: self.seed,
        }
    }
}

fn load_config(cli: &Cli) -> Result<DrillConfig, DrillError> {
    let mut config = match &cli.config {
        Some(path) => DrillConfig::load(path)?,
        None => DrillConfig::default(),
    };
    config.apply(cli.overrides())?;
    Ok(config)
}

fn run(config: DrillConfig) -> Result<(), DrillError> {
    let pacer = Pacer::new(config.tempo, config.beats_per_note)?;
    let options = RenderOptions {
        color: config.color,
    };
    let mut drill = new_drill(&config);

    let mut out = io::stdout().lock();
    let mut diagnostics = io::stderr().lock();
    writeln!(out, "bpm = {}", config.tempo)?;
    if drill.mode() == DrillMode::Chord {
        writeln!(out, "{}", legend(options))?;
    }
    info!(
        "drilling {:?} at {} bpm, one cycle every {:?}",
        drill.mode(),
        config.tempo,
        pacer.cycle()
    );

    loop {
        run_cycle(&mut drill, &pacer, options, &mut out, &mut diagnostics)?;
    }
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run(config) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
