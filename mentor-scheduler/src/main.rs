use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use mentor_scheduler::display::{write_report, ScheduleReport};
use mentor_scheduler::schedule::policy::{MAX_PER_SLOT, MAX_SAME_MAJOR, MIN_PER_SLOT};
use mentor_scheduler::seed::generate_roster;
use mentor_scheduler::{generate_schedule_with_policy, load_roster, SchedulePolicy};

#[derive(Parser)]
#[command(name = "mentor-scheduler")]
#[command(about = "Assigns volunteer mentors to weekly time slots", long_about = None)]
struct Cli {
    /// Log debug output (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the weekly schedule from a roster file
    Generate {
        /// Roster file (.json, otherwise CSV)
        #[arg(long)]
        roster: PathBuf,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Write the report here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
        #[arg(long, default_value_t = MIN_PER_SLOT)]
        min_per_slot: usize,
        #[arg(long, default_value_t = MAX_PER_SLOT)]
        max_per_slot: usize,
        #[arg(long, default_value_t = MAX_SAME_MAJOR)]
        max_same_major: usize,
    },
    /// Write a synthetic roster as JSON
    Seed {
        #[arg(long, default_value_t = 50)]
        count: usize,
        #[arg(long, default_value_t = 10)]
        team_leads: usize,
        #[arg(long, default_value_t = 1)]
        seed: u64,
        #[arg(long, default_value = "roster.json")]
        out: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "mentor_scheduler=debug" } else { "mentor_scheduler=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Commands::Generate {
            roster,
            format,
            out,
            min_per_slot,
            max_per_slot,
            max_same_major,
        } => {
            let mentors = load_roster(&roster)
                .with_context(|| format!("failed to load roster from {}", roster.display()))?;

            let policy = SchedulePolicy {
                min_per_slot,
                max_per_slot,
                max_same_major,
                ..SchedulePolicy::default()
            };
            let outcome = generate_schedule_with_policy(&mentors, &policy);

            let mut writer: Box<dyn Write> = match &out {
                Some(path) => Box::new(BufWriter::new(
                    File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
                )),
                None => Box::new(io::stdout().lock()),
            };

            match format {
                Format::Text => write_report(&mut writer, &outcome, &policy)?,
                Format::Json => {
                    let report = ScheduleReport::new(&outcome, &policy, chrono::Utc::now());
                    serde_json::to_writer_pretty(&mut writer, &report)?;
                    writeln!(writer)?;
                }
            }
            writer.flush()?;

            if let Some(path) = out {
                eprintln!("Schedule saved to {}", path.display());
            }
        }
        Commands::Seed {
            count,
            team_leads,
            seed,
            out,
        } => {
            let mentors = generate_roster(count, team_leads, seed);
            let file = File::create(&out).with_context(|| format!("failed to create {}", out.display()))?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, &mentors)?;
            writer.flush()?;
            println!("Wrote {} mentors to {}.", mentors.len(), out.display());
        }
    }

    Ok(())
}
