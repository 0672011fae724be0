//! Retirement Planner CLI
//!
//! Command-line interface for running projections, checking goals, and
//! inspecting the saved planning record

use std::fs::File;
use std::io::Write;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use retirement_planner::profile::{current_year, Profile};
use retirement_planner::projection::{
    retirement_goal, ContributionPlan, ProjectionConfig, ProjectionEngine,
};
use retirement_planner::storage::{load_form, JsonFileStore};
use retirement_planner::{education, DashboardSummary};

#[derive(Parser)]
#[command(name = "retirement_planner", version, about = "Retirement planning calculator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Project future value of a one-time payment plus monthly contributions
    Project {
        /// One-time payment invested today (PLN)
        #[arg(long, default_value_t = 20_000.0)]
        one_time: f64,

        /// Monthly contribution (PLN)
        #[arg(long, default_value_t = 1_000.0)]
        monthly: f64,

        /// Investment horizon in years
        #[arg(long, default_value_t = 30)]
        years: u32,

        /// Assumed annual return rate (fraction)
        #[arg(long, default_value_t = 0.07)]
        rate: f64,

        /// Assumed safe withdrawal rate (fraction)
        #[arg(long, default_value_t = 0.04)]
        withdrawal_rate: f64,

        /// Write the year-by-year series to a CSV file
        #[arg(long)]
        output: Option<String>,
    },

    /// Compute the monthly retirement goal from gross salary
    Goal {
        /// Gross monthly salary (PLN)
        #[arg(long)]
        salary: f64,

        /// Goal as a percentage of salary (0-100)
        #[arg(long, default_value_t = 70.0)]
        percentage: f64,
    },

    /// Show the dashboard summary for the saved planning record
    Dashboard {
        /// Path to the JSON store holding the saved form
        #[arg(long, default_value = "planner_store.json")]
        store: String,
    },

    /// List educational articles, optionally filtered by category
    Articles {
        /// Category filter
        #[arg(long)]
        category: Option<String>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Project {
            one_time,
            monthly,
            years,
            rate,
            withdrawal_rate,
            output,
        } => run_projection(one_time, monthly, years, rate, withdrawal_rate, output),
        Command::Goal { salary, percentage } => {
            println!(
                "Monthly retirement goal: {:.2} zł ({}% of {:.2} zł)",
                retirement_goal(salary, percentage),
                percentage,
                salary
            );
            Ok(())
        }
        Command::Dashboard { store } => run_dashboard(&store),
        Command::Articles { category } => {
            run_articles(category.as_deref());
            Ok(())
        }
    }
}

fn run_projection(
    one_time: f64,
    monthly: f64,
    years: u32,
    rate: f64,
    withdrawal_rate: f64,
    output: Option<String>,
) -> Result<()> {
    let plan = ContributionPlan {
        one_time_payment: one_time,
        monthly_payment: monthly,
        horizon_years: years,
    };
    let config = ProjectionConfig {
        annual_return_rate: rate,
        withdrawal_rate,
    };

    let engine = ProjectionEngine::new(config);
    let result = engine.project(&plan);

    println!("Projection ({} years at {:.1}% annual return):", years, rate * 100.0);
    println!("{:>5} {:>16} {:>16}", "Year", "Total Value", "Monthly Income");
    println!("{}", "-".repeat(40));
    for point in &result.points {
        println!(
            "{:>5} {:>16.2} {:>16.2}",
            point.year_index, point.total_value, point.monthly_income
        );
    }

    let summary = result.summary(&plan);
    println!("\nSummary:");
    println!("  Total Contributed: {:.2} zł", summary.total_contributed);
    println!("  Final Value:       {:.2} zł", summary.final_value);
    println!("  Growth:            {:.2} zł", summary.total_growth);
    println!("  Monthly Income:    {:.2} zł", summary.final_monthly_income);

    if let Some(path) = output {
        let mut file = File::create(&path)
            .with_context(|| format!("unable to create CSV file {}", path))?;
        writeln!(file, "Year,TotalValue,MonthlyIncome")?;
        for point in &result.points {
            writeln!(
                file,
                "{},{:.2},{:.2}",
                point.year_index, point.total_value, point.monthly_income
            )?;
        }
        println!("\nFull series written to: {}", path);
    }

    Ok(())
}

fn run_dashboard(store_path: &str) -> Result<()> {
    let store = JsonFileStore::new(store_path);
    let form = load_form(&store)
        .with_context(|| format!("failed to read store {}", store_path))?;

    let Some(form) = form else {
        bail!("no saved planning record in {}; complete the intake wizard first", store_path);
    };

    let (Some(age), Some(gender), Some(gross_salary)) = (form.age, form.gender, form.gross_salary)
    else {
        bail!("saved planning record is incomplete");
    };

    let year = current_year();
    let profile = Profile {
        profile_id: 0,
        age,
        gender,
        gross_salary,
        work_start_year: form.work_start_year.unwrap_or(year - (age as i32 - 25)),
        retirement_year: form
            .retirement_year
            .unwrap_or(year + gender.statutory_retirement_age() as i32 - age as i32),
        retirement_goal_percentage: form.retirement_goal_percentage,
        zus_account: form.zus_account,
        zus_subaccount: form.zus_subaccount,
    };

    let summary = DashboardSummary::for_profile(&profile);
    println!("Dashboard");
    println!("  Projected retirement: {:.0} zł/month", summary.projected_retirement);
    println!("  Retirement goal:      {:.0} zł/month", summary.retirement_goal);
    println!("  Progress:             {}%", summary.progress_percent);
    if profile.total_zus_savings() > 0.0 {
        println!("  ZUS savings:          {:.2} zł", profile.total_zus_savings());
    }

    Ok(())
}

fn run_articles(category: Option<&str>) {
    let articles = match category {
        Some(category) => education::articles_in_category(category),
        None => education::catalog(),
    };

    if articles.is_empty() {
        println!("No articles found.");
        return;
    }

    for article in articles {
        let marker = if article.featured { "*" } else { " " };
        println!("{} [{}] {}", marker, article.id, article.title);
        println!("      {}", article.description);
        println!("      Categories: {}", article.categories.join(", "));
    }
}
