use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use fitplan_ai::{PlanOrigin, generate_plan};
use fitplan_core::{Gender, Goal, ProgressEntry, UserProfile, calories};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

mod config;
mod logging;
mod render;
mod setup;
mod state;

use state::{SavedPlan, Store};

#[derive(Parser, Debug)]
#[command(
    name = "fitplan",
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("FITPLAN_BUILD_SHA"), ")"),
    about = "Weekly fitness and nutrition plans"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive onboarding: capture your profile and generate a first plan
    Setup {
        #[command(flatten)]
        gen_opts: GenerateOpts,
    },

    /// Generate a plan from the saved profile (or a profile JSON file)
    Plan {
        /// Profile JSON to use instead of the saved one
        #[arg(long)]
        profile: Option<PathBuf>,

        #[command(flatten)]
        gen_opts: GenerateOpts,
    },

    /// Print the saved plan
    Show {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Estimate a daily calorie target
    Calories {
        #[arg(long, value_parser = setup::positive_finite)]
        weight: f64,
        #[arg(long, value_parser = setup::positive_finite)]
        height: f64,
        #[arg(long)]
        age: u32,
        #[arg(long, value_parser = setup::parse_choice::<Gender>)]
        gender: Gender,
        #[arg(long, value_parser = setup::parse_choice::<Goal>)]
        goal: Goal,
    },

    /// Record today's weight and whether the workout was done
    Log {
        #[arg(long, value_parser = setup::positive_finite)]
        weight: f64,
        #[arg(long)]
        completed: bool,
        /// Defaults to today (local time)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Show the progress log
    Progress,

    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(clap::Args, Debug, Clone)]
struct GenerateOpts {
    /// Seed for the rule engine; same seed and profile give the same plan
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the AI call and use the rule engine directly
    #[arg(long)]
    offline: bool,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write config.toml and editable copies of the food catalog and workout templates
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let store = Store::open()?;
    let cfg = config::load_config(&store)?;
    logging::init(&cfg.logging.level)?;

    match cli.command {
        Command::Setup { gen_opts } => {
            let profile = setup::run_setup()?;
            generate_and_save(&store, &cfg, profile, &gen_opts).await?;
        }

        Command::Plan { profile, gen_opts } => {
            let profile = match profile {
                Some(path) => state::read_profile_file(&path)?,
                None => match store.read_plan()? {
                    Some(saved) => saved.profile,
                    None => bail!("No profile found. Run: fitplan setup (or pass --profile <file.json>)"),
                },
            };
            generate_and_save(&store, &cfg, profile, &gen_opts).await?;
        }

        Command::Show { json } => {
            let Some(saved) = store.read_plan()? else {
                bail!("No saved plan at {}. Run: fitplan setup", store.plan_path().display());
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&saved.plan)?);
            } else {
                println!("Source: {} ({})\n", saved.source, saved.updated_at_utc);
                print!("{}", render::render_plan(&saved.plan));
            }
        }

        Command::Calories {
            weight,
            height,
            age,
            gender,
            goal,
        } => {
            let bmr = calories::bmr(weight, height, age, gender);
            let tdee = calories::tdee(weight, height, age, gender);
            let target = calories::estimate(weight, height, age, gender, goal);
            println!("BMR:    {:.0} kcal", bmr.round());
            println!("TDEE:   {:.0} kcal", tdee.round());
            println!("Target: {:.0} kcal ({goal})", target.round());
        }

        Command::Log {
            weight,
            completed,
            date,
        } => {
            let date = date.unwrap_or_else(|| chrono::Local::now().date_naive());
            let log = store.log_progress(ProgressEntry {
                date,
                weight,
                completed,
            })?;
            tracing::info!(%date, weight, completed, "progress logged");
            println!("Logged {date}: {weight:.1} kg ({} entries)", log.entries().len());
        }

        Command::Progress => {
            let log = store.read_progress()?;
            print!("{}", render::render_progress(&log));
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => {
                for p in config::init_config(&store)? {
                    println!("Wrote {}", p.display());
                }
            }
        },
    }

    Ok(())
}

async fn generate_and_save(
    store: &Store,
    cfg: &config::Config,
    profile: UserProfile,
    opts: &GenerateOpts,
) -> Result<()> {
    let engine = cfg.rule_engine()?;
    let mut rng = match opts.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let (plan, source) = if opts.offline {
        tracing::info!("offline mode; using rule engine");
        (engine.generate(&profile, &mut rng), "rule-engine")
    } else {
        let client = cfg.ai_client();
        let generated = generate_plan(client.as_ref(), &engine, &profile, &mut rng).await;
        match generated.origin {
            PlanOrigin::Ai => (generated.plan, "ai"),
            PlanOrigin::Fallback(reason) => {
                tracing::info!(%reason, "using rule-engine plan");
                (generated.plan, "rule-engine")
            }
        }
    };

    store
        .write_plan(&SavedPlan {
            profile,
            plan: plan.clone(),
            source: source.to_string(),
            updated_at_utc: chrono::Utc::now().to_rfc3339(),
        })
        .with_context(|| format!("save plan to {}", store.plan_path().display()))?;

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        print!("{}", render::render_plan(&plan));
        println!("\nSaved to {}", store.plan_path().display());
    }
    Ok(())
}
