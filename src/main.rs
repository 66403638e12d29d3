use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use grow::error::Result;
use grow::model::{Category, Filter, Priority, Quadrant};
use grow::output::Format;
use grow::store::rpg::{DayCounters, Stat};
use grow::store::settings::Theme;

#[derive(Parser)]
#[command(
    name = "grow",
    version,
    about = "Personal growth dashboard: five task methods, a daily RPG stat log, and a radar-chart wallpaper"
)]
struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "json")]
    format: Format,
    /// Shorthand for --format pretty
    #[arg(long, global = true, hide = true)]
    pretty: bool,
    /// Directory holding the dashboard documents
    #[arg(long, global = true, default_value = ".")]
    data_dir: PathBuf,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Eat the Frog: one most-important task plus secondary tasks
    Frog {
        #[command(subcommand)]
        action: FrogAction,
    },
    /// Eisenhower matrix: do / schedule / delegate / delete quadrants
    Matrix {
        #[command(subcommand)]
        action: MatrixAction,
    },
    /// Prioritized todo list with view filters
    Todo {
        #[command(subcommand)]
        action: TodoAction,
    },
    /// 3/3/3: three outcomes, three deep work blocks, three maintenance tasks
    Triple {
        #[command(subcommand)]
        action: TripleAction,
    },
    /// Ivy Lee: the six most important tasks for tomorrow, plus notes
    Ivy {
        #[command(subcommand)]
        action: IvyAction,
    },
    /// Completion statistics across all methods
    Dashboard,
    /// Daily RPG stat log and the radar wallpaper pipeline
    Rpg {
        #[command(subcommand)]
        action: RpgAction,
    },
    /// Light/dark theme for the rendered chart
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
    /// Clear every method back to the default board
    Reset,
}

#[derive(Subcommand)]
enum FrogAction {
    /// Set today's frog (your most important task)
    Set {
        title: String,
        /// Mark it already done
        #[arg(long)]
        done: bool,
    },
    /// Append a secondary task
    Add { title: String },
    /// Mark a secondary task done (or not done with --off)
    Toggle {
        index: usize,
        #[arg(long)]
        off: bool,
    },
    /// Delete a secondary task
    Delete { index: usize },
    /// Show the Eat the Frog board
    Show,
}

#[derive(Subcommand)]
enum MatrixAction {
    /// Add a task to a quadrant
    Add {
        title: String,
        #[arg(long, value_enum, default_value = "do")]
        quadrant: Quadrant,
    },
    /// Mark a quadrant task done (or not done with --off)
    Toggle {
        quadrant: Quadrant,
        index: usize,
        #[arg(long)]
        off: bool,
    },
    /// Move a task to another quadrant
    Move {
        quadrant: Quadrant,
        index: usize,
        to: Quadrant,
    },
    /// Show all four quadrants
    Show,
}

#[derive(Subcommand)]
enum TodoAction {
    /// Add a task
    Add {
        title: String,
        #[arg(long, value_enum, default_value = "medium")]
        priority: Priority,
    },
    /// Mark a task done (or not done with --off)
    Toggle {
        index: usize,
        #[arg(long)]
        off: bool,
    },
    /// Delete a task
    Delete { index: usize },
    /// Remove all completed tasks
    Clear,
    /// Select the view filter
    Filter {
        #[arg(value_enum)]
        filter: Filter,
    },
    /// Show the list under the current filter
    Show,
}

#[derive(Subcommand)]
enum TripleAction {
    /// Fill one of the three slots in a category
    Set {
        #[arg(value_enum)]
        category: Category,
        /// Slot index, 0..3
        slot: usize,
        title: String,
        #[arg(long)]
        done: bool,
    },
    /// Show all three categories
    Show,
}

#[derive(Subcommand)]
enum IvyAction {
    /// Fill one of the six task slots
    Set {
        /// Slot index, 0..6
        slot: usize,
        title: String,
        #[arg(long)]
        done: bool,
    },
    /// Replace the daily notes
    Notes { text: String },
    /// Show the six slots and notes
    Show,
}

#[derive(Subcommand)]
enum RpgAction {
    /// Log today's stats, then render and publish the radar wallpaper
    Log {
        /// Strength Training
        #[arg(long, default_value_t = 0)]
        atk: u8,
        /// Bodybuilding & Health
        #[arg(long, default_value_t = 0)]
        def: u8,
        /// People Skills
        #[arg(long, default_value_t = 0)]
        cha: u8,
        /// Books & Learning
        #[arg(long, default_value_t = 0)]
        int: u8,
        /// Reflection & Life Experience
        #[arg(long, default_value_t = 0)]
        wis: u8,
        /// Random Opportunities
        #[arg(long, default_value_t = 0)]
        luk: u8,
        /// Energy, Stamina
        #[arg(long, default_value_t = 0)]
        sta: u8,
        /// Fame and Popularity
        #[arg(long, default_value_t = 0)]
        fam: u8,
        /// Finance & Resources
        #[arg(long, default_value_t = 0)]
        gold: u8,
        /// Log a specific date instead of today
        #[arg(long, hide = true)]
        date: Option<NaiveDate>,
        /// Render the chart but leave the desktop alone
        #[arg(long)]
        no_desktop: bool,
    },
    /// Show the most recently logged day
    Show,
}

#[derive(Subcommand)]
enum ThemeAction {
    /// Set the theme
    Set {
        #[arg(value_enum)]
        theme: Theme,
    },
    /// Flip between dark and light
    Toggle,
    /// Show the current theme
    Show,
}

fn run(cli: Cli, format: Format) -> Result<()> {
    let root = cli.data_dir;
    match cli.command {
        Commands::Frog { action } => match action {
            FrogAction::Set { title, done } => {
                grow::commands::frog::set(&root, &title, done, format)
            }
            FrogAction::Add { title } => grow::commands::frog::add(&root, &title, format),
            FrogAction::Toggle { index, off } => {
                grow::commands::frog::toggle(&root, index, !off, format)
            }
            FrogAction::Delete { index } => grow::commands::frog::delete(&root, index, format),
            FrogAction::Show => grow::commands::frog::show(&root, format),
        },
        Commands::Matrix { action } => match action {
            MatrixAction::Add { title, quadrant } => {
                grow::commands::matrix::add(&root, quadrant, &title, format)
            }
            MatrixAction::Toggle {
                quadrant,
                index,
                off,
            } => grow::commands::matrix::toggle(&root, quadrant, index, !off, format),
            MatrixAction::Move {
                quadrant,
                index,
                to,
            } => grow::commands::matrix::move_task(&root, quadrant, index, to, format),
            MatrixAction::Show => grow::commands::matrix::show(&root, format),
        },
        Commands::Todo { action } => match action {
            TodoAction::Add { title, priority } => {
                grow::commands::todo::add(&root, &title, priority, format)
            }
            TodoAction::Toggle { index, off } => {
                grow::commands::todo::toggle(&root, index, !off, format)
            }
            TodoAction::Delete { index } => grow::commands::todo::delete(&root, index, format),
            TodoAction::Clear => grow::commands::todo::clear(&root, format),
            TodoAction::Filter { filter } => {
                grow::commands::todo::set_filter(&root, filter, format)
            }
            TodoAction::Show => grow::commands::todo::show(&root, format),
        },
        Commands::Triple { action } => match action {
            TripleAction::Set {
                category,
                slot,
                title,
                done,
            } => grow::commands::triple::set(&root, category, slot, &title, done, format),
            TripleAction::Show => grow::commands::triple::show(&root, format),
        },
        Commands::Ivy { action } => match action {
            IvyAction::Set { slot, title, done } => {
                grow::commands::ivy::set(&root, slot, &title, done, format)
            }
            IvyAction::Notes { text } => grow::commands::ivy::notes(&root, &text, format),
            IvyAction::Show => grow::commands::ivy::show(&root, format),
        },
        Commands::Dashboard => grow::commands::dashboard::run(&root, format),
        Commands::Rpg { action } => match action {
            RpgAction::Log {
                atk,
                def,
                cha,
                int,
                wis,
                luk,
                sta,
                fam,
                gold,
                date,
                no_desktop,
            } => {
                let counters: DayCounters = [
                    (Stat::Atk, atk),
                    (Stat::Def, def),
                    (Stat::Cha, cha),
                    (Stat::Int, int),
                    (Stat::Wis, wis),
                    (Stat::Luk, luk),
                    (Stat::Sta, sta),
                    (Stat::Fam, fam),
                    (Stat::Gold, gold),
                ]
                .into_iter()
                .collect();
                grow::commands::rpg::log(&root, counters, date, no_desktop, format)
            }
            RpgAction::Show => grow::commands::rpg::show(&root, format),
        },
        Commands::Theme { action } => match action {
            ThemeAction::Set { theme } => grow::commands::theme::set(&root, theme, format),
            ThemeAction::Toggle => grow::commands::theme::toggle(&root, format),
            ThemeAction::Show => grow::commands::theme::show(&root, format),
        },
        Commands::Reset => grow::commands::reset::run(&root, format),
    }
}

fn main() {
    let cli = Cli::parse();
    let format = if cli.pretty {
        Format::Pretty
    } else {
        cli.format
    };

    let _logger = grow::logging::init(grow::logging::default_level())
        .map_err(|err| eprintln!("warning: logging unavailable: {err}"))
        .ok();

    if let Err(e) = run(cli, format) {
        match format {
            Format::Json => {
                eprintln!(
                    "{}",
                    serde_json::json!({
                        "error": e.code(),
                        "message": e.to_string()
                    })
                );
            }
            _ => eprintln!("error: {e}"),
        }
        std::process::exit(1);
    }
}
