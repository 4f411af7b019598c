// ABOUTME: fitplan CLI - command-line front end for the weekly workout scheduling engine
// ABOUTME: Assesses capacity, builds schedules, runs the day allocator, and lists templates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitplan contributors
//!
//! Usage:
//! ```bash
//! # Capacity assessment for a profile
//! fitplan-cli assess --age 25 --height-cm 175 --weight-kg 70 --goal muscle_gain
//!
//! # Reproducible weekly plan as text
//! fitplan-cli schedule --profile profile.json --seed 42 --format text
//!
//! # Place counted day types onto six days
//! fitplan-cli allocate --count strength=3 --count hiit=2 --days 6
//!
//! # Show the canonical templates
//! fitplan-cli templates --goal fat_loss
//! ```

mod output;

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use fitplan::catalog::ExerciseCatalog;
use fitplan::config::PlannerConfig;
use fitplan::errors::{AppError, ErrorResponse};
use fitplan::intelligence::{plan_days, CapacityProfiler, DayAllocator, WorkoutScheduler};
use fitplan::logging::LoggingConfig;
use fitplan::models::{DayType, ExperienceLevel, Goal, UserProfile};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "fitplan-cli",
    about = "Weekly workout scheduling engine",
    long_about = "Turns a physical profile, goal, experience level, conditions and injuries into a day-by-day exercise plan."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format (JSON mode also reports engine errors as JSON on stdout)
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Show the capacity assessment for a profile
    Assess {
        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Build a weekly schedule
    Schedule {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Random seed for reproducible exercise selection
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Run the day allocator on counted day types
    Allocate {
        /// Day type count as TYPE=N (repeatable)
        #[arg(long = "count", value_parser = parse_count, required = true)]
        counts: Vec<(DayType, usize)>,

        /// Number of days to fill
        #[arg(long, default_value = "7")]
        days: usize,
    },

    /// List canonical weekly templates
    Templates {
        /// Only this goal
        #[arg(long)]
        goal: Option<Goal>,

        /// Only this experience level
        #[arg(long)]
        experience: Option<ExperienceLevel>,
    },
}

#[derive(Args)]
struct ProfileArgs {
    /// Read the profile from a JSON file instead of flags
    #[arg(long, conflicts_with_all = ["age", "height_cm", "weight_kg", "goal"])]
    profile: Option<PathBuf>,

    /// Age in years
    #[arg(long)]
    age: Option<u32>,

    /// Height in centimetres
    #[arg(long)]
    height_cm: Option<f64>,

    /// Weight in kilograms
    #[arg(long)]
    weight_kg: Option<f64>,

    /// Training experience
    #[arg(long, default_value = "beginner")]
    experience: ExperienceLevel,

    /// Primary goal
    #[arg(long)]
    goal: Option<Goal>,

    /// Medical condition tags (comma-separated)
    #[arg(long, value_delimiter = ',')]
    conditions: Vec<String>,

    /// Injury tags (comma-separated)
    #[arg(long, value_delimiter = ',')]
    injuries: Vec<String>,

    /// Days the plan must cover
    #[arg(long, default_value = "6")]
    days: u8,
}

impl ProfileArgs {
    fn into_profile(self) -> Result<UserProfile> {
        if let Some(path) = self.profile {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("failed to read profile {}", path.display()))?;
            let profile: UserProfile = serde_json::from_str(&contents)
                .with_context(|| format!("failed to parse profile {}", path.display()))?;
            return Ok(profile);
        }

        let (Some(age), Some(height_cm), Some(weight_kg), Some(goal)) =
            (self.age, self.height_cm, self.weight_kg, self.goal)
        else {
            bail!("either --profile or all of --age, --height-cm, --weight-kg and --goal are required");
        };

        Ok(
            UserProfile::new(age, height_cm, weight_kg, self.experience, goal, self.days)
                .with_medical_conditions(self.conditions)
                .with_injuries(self.injuries),
        )
    }
}

fn parse_count(raw: &str) -> Result<(DayType, usize)> {
    let (day_type, count) = raw
        .split_once('=')
        .ok_or_else(|| anyhow!("expected TYPE=N, got '{raw}'"))?;
    let day_type: DayType = day_type.parse()?;
    let count = count
        .trim()
        .parse()
        .with_context(|| format!("invalid count in '{raw}'"))?;
    Ok((day_type, count))
}

fn main() -> Result<ExitCode> {
    let Cli {
        command,
        format,
        verbose,
    } = Cli::parse();

    LoggingConfig::from_env().verbose(verbose).init()?;

    match run(command, format) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => match (format, err.downcast::<AppError>()) {
            (OutputFormat::Json, Ok(app_error)) => {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&ErrorResponse::from(app_error))?
                );
                Ok(ExitCode::FAILURE)
            }
            (_, Ok(app_error)) => Err(app_error.into()),
            (_, Err(other)) => Err(other),
        },
    }
}

fn run(command: Command, format: OutputFormat) -> Result<()> {
    let config = PlannerConfig::load().map_err(AppError::from)?;
    let catalog = ExerciseCatalog::load()?;
    debug!("Catalog {} with {} entries", catalog.version(), catalog.len());

    match command {
        Command::Assess { profile } => {
            let profile = profile.into_profile()?;
            let assessment = CapacityProfiler::new(&config).assess(&profile)?;
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&assessment)?),
                OutputFormat::Text => print!("{}", output::render_assessment(&assessment)),
            }
        }
        Command::Schedule { profile, seed } => {
            let profile = profile.into_profile()?;
            let scheduler = WorkoutScheduler::new(&config, &catalog);
            let schedule = match seed {
                Some(seed) => scheduler.schedule_seeded(&profile, seed)?,
                None => scheduler.schedule(&profile, &mut rand::thread_rng())?,
            };
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&schedule)?),
                OutputFormat::Text => print!("{}", output::render_schedule(&schedule)),
            }
        }
        Command::Allocate { counts, days } => {
            let labels = plan_days(config.week_start, days);
            let allocation = DayAllocator::new(config.constraints).allocate(&counts, &labels);
            match format {
                OutputFormat::Json => {
                    let json = output::allocation_json(&allocation);
                    println!("{}", serde_json::to_string_pretty(&json)?);
                }
                OutputFormat::Text => print!("{}", output::render_allocation(&allocation)),
            }
        }
        Command::Templates { goal, experience } => {
            let listing = output::template_listing(&config, goal, experience);
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&listing)?),
                OutputFormat::Text => print!("{}", output::render_templates(&listing)),
            }
        }
    }

    Ok(())
}
