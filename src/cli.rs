use clap::{Parser, Subcommand, ValueEnum};

/// MealMacroAudit — compute daily macro targets, reconcile meal plans
/// against reference nutrition data, and score their accuracy.
#[derive(Parser, Debug)]
#[command(name = "meal_macro_audit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the day plan JSON file.
    #[arg(short, long, default_value = "day_plan.json")]
    pub file: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DayKind {
    Training,
    Rest,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute daily calorie and macro targets.
    Targets {
        /// Body weight in pounds (prompted when omitted).
        #[arg(long)]
        weight: Option<f64>,

        /// Day type (prompted when omitted).
        #[arg(long, value_enum)]
        day: Option<DayKind>,

        /// Date in YYYY-MM-DD (defaults to today).
        #[arg(long)]
        date: Option<String>,
    },

    /// Audit a day plan: reconcile ingredients, re-sum, and score accuracy.
    Audit {
        /// Use only the local reference table, no HTTP lookups.
        #[arg(long)]
        offline: bool,

        /// Accuracy tolerance in percent, applied to all macros.
        #[arg(long)]
        tolerance: Option<f64>,

        /// Path to a CSV reference table (defaults to the built-in one).
        #[arg(long)]
        table: Option<String>,
    },

    /// Look up reference nutrition for a single food.
    Lookup {
        /// Food name to search for.
        name: String,

        /// Amount of the food.
        #[arg(long, default_value_t = 100.0)]
        amount: f64,

        /// Unit for the amount (g, oz, lb, cup, tbsp, tsp).
        #[arg(long, default_value = "g")]
        unit: String,

        /// Use only the local reference table, no HTTP lookups.
        #[arg(long)]
        offline: bool,

        /// Path to a CSV reference table (defaults to the built-in one).
        #[arg(long)]
        table: Option<String>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Audit {
            offline: false,
            tolerance: None,
            table: None,
        }
    }
}
