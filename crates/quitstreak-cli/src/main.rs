use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "quitstreak", version, about = "Quitstreak CLI")]
struct Cli {
    /// Override the current calendar day (YYYY-MM-DD) for deterministic runs
    #[arg(long, global = true)]
    today: Option<NaiveDate>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Habit tracking
    Habit {
        #[command(subcommand)]
        action: commands::habit::HabitAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let now: DateTime<Utc> = match cli.today {
        Some(day) => day.and_time(NaiveTime::MIN).and_utc(),
        None => Utc::now(),
    };
    let result = match cli.command {
        Commands::Habit { action } => commands::habit::run(action, now),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
