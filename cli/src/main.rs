mod table;
mod tui;

use anyhow::Result;
use clap::Parser;
use dispatchtrack_core::{parse_month, FilePlanRepository, PlanStore, StatusConfig};

#[derive(Parser)]
#[command(name = "dispatchtrack")]
#[command(about = "Track monthly dispatch performance against plan", long_about = None)]
struct Cli {
    /// Fraction of the prorated plan below which an employee shows Behind
    #[arg(long, global = true, default_value_t = 1.0)]
    tolerance: f64,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// List all tracked months
    Months,
    /// Add the month after the latest one, carrying the roster forward
    AddMonth,
    /// Copy the roster and plans from one month into another
    Bootstrap {
        /// Source month (YYYY-MM or 'current')
        from: String,
        /// Target month (YYYY-MM or 'current')
        to: String,
    },
    /// Manage a month's roster
    #[command(subcommand)]
    Employee(EmployeeCommands),
    /// Set an employee's monthly plan
    Plan {
        name: String,
        value: f64,
        #[arg(long, default_value = "current")]
        month: String,
    },
    /// Record an employee's actual value for a week
    Record {
        name: String,
        /// Week number within the month (1-based)
        week: u32,
        value: f64,
        #[arg(long, default_value = "current")]
        month: String,
    },
    /// Record an employee's current-profit figure for a week
    Profit {
        name: String,
        /// Week number within the month (1-based)
        week: u32,
        value: f64,
        #[arg(long, default_value = "current")]
        month: String,
    },
    /// Show a month's week tables and plan summary
    Show {
        #[arg(default_value = "current")]
        month: String,
    },
    /// Open the month dashboard
    Tui,
}

#[derive(clap::Subcommand)]
enum EmployeeCommands {
    /// Add an employee to a month's roster
    Add {
        name: String,
        #[arg(long, default_value_t = 0.0)]
        plan: f64,
        #[arg(long, default_value = "current")]
        month: String,
    },
    /// Remove an employee from one month only
    Remove {
        name: String,
        #[arg(long, default_value = "current")]
        month: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let repo = FilePlanRepository::new(None)?;
    let store = PlanStore::with_config(repo, StatusConfig { tolerance: cli.tolerance });

    // The dashboard always keeps at least the running month around.
    store.ensure_current_month()?;

    match cli.command {
        Some(Commands::Months) => {
            for id in store.list_months()? {
                println!("{}", id);
            }
        }
        Some(Commands::AddMonth) => {
            let id = store.add_next_month()?;
            println!("Added month {}", id);
        }
        Some(Commands::Bootstrap { from, to }) => {
            let source = parse_month(&from)?;
            let target = parse_month(&to)?;
            store.bootstrap_month(source, target.year, target.month)?;
            println!("Bootstrapped {} from {}", target, source);
        }
        Some(Commands::Employee(EmployeeCommands::Add { name, plan, month })) => {
            let id = parse_month(&month)?;
            store.add_employee(id, &name, plan)?;
            println!("Added {} to {} (plan {:.2})", name, id, plan);
        }
        Some(Commands::Employee(EmployeeCommands::Remove { name, month })) => {
            let id = parse_month(&month)?;
            store.remove_employee(id, &name)?;
            println!("Removed {} from {}", name, id);
        }
        Some(Commands::Plan { name, value, month }) => {
            let id = parse_month(&month)?;
            store.set_plan(id, &name, value)?;
            println!("Plan for {} in {}: {:.2}", name, id, value);
        }
        Some(Commands::Record { name, week, value, month }) => {
            let id = parse_month(&month)?;
            store.record_actual(id, &name, week, value)?;
            let total = store.monthly_total(id, &name)?;
            println!(
                "Recorded {:.2} for {} in week {} of {} (month total {:.2})",
                value, name, week, id, total
            );
        }
        Some(Commands::Profit { name, week, value, month }) => {
            let id = parse_month(&month)?;
            store.record_profit(id, &name, week, value)?;
            println!("Recorded profit {:.2} for {} in week {} of {}", value, name, week, id);
        }
        Some(Commands::Show { month }) => {
            let id = parse_month(&month)?;
            let overview = store.month_overview(id)?;
            table::render_month(&overview);
        }
        Some(Commands::Tui) | None => {
            tui::run(store)?;
        }
    }
    Ok(())
}
