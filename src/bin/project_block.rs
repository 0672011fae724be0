//! Project an entire block of saved profiles from a profiles CSV
//!
//! Outputs per-profile goal coverage for comparison across the block

use rayon::prelude::*;
use retirement_planner::profile::{current_year, load_profiles, Profile};
use retirement_planner::projection::{ContributionPlan, ProjectionConfig, ProjectionEngine};
use std::fs::File;
use std::io::Write;
use std::time::Instant;

/// Salary fraction assumed contributed monthly when no plan is on file
const DEFAULT_CONTRIBUTION_RATE: f64 = 0.10;

/// Horizon fallback for profiles whose retirement year is not in the future
const DEFAULT_HORIZON_YEARS: u32 = 30;

/// Per-profile coverage result
#[derive(Debug, Clone)]
struct CoverageRow {
    profile_id: u32,
    age: u8,
    horizon_years: u32,
    final_value: f64,
    monthly_income: f64,
    monthly_goal: f64,
    coverage: f64,
}

fn project_profile(profile: &Profile, config: ProjectionConfig, year: i32) -> CoverageRow {
    let horizon_years = profile
        .investment_horizon(year)
        .unwrap_or(DEFAULT_HORIZON_YEARS);

    let plan = ContributionPlan {
        one_time_payment: profile.total_zus_savings(),
        monthly_payment: profile.gross_salary * DEFAULT_CONTRIBUTION_RATE,
        horizon_years,
    };

    let engine = ProjectionEngine::new(config);
    let result = engine.project(&plan);
    let last = result.final_point().expect("series is never empty");

    let monthly_goal = profile.monthly_goal();
    let coverage = if monthly_goal > 0.0 {
        last.monthly_income / monthly_goal
    } else {
        0.0
    };

    CoverageRow {
        profile_id: profile.profile_id,
        age: profile.age,
        horizon_years,
        final_value: last.total_value,
        monthly_income: last.monthly_income,
        monthly_goal,
        coverage,
    }
}

fn main() {
    env_logger::init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "profiles.csv".to_string());

    let start = Instant::now();
    println!("Loading profiles from {}...", path);

    let profiles = load_profiles(&path).expect("Failed to load profiles");
    println!("Loaded {} profiles in {:?}", profiles.len(), start.elapsed());

    let config = ProjectionConfig::default();
    let year = current_year();

    println!("Running projections...");
    let proj_start = Instant::now();

    let mut rows: Vec<CoverageRow> = profiles
        .par_iter()
        .map(|profile| project_profile(profile, config, year))
        .collect();
    rows.sort_by_key(|row| row.profile_id);

    println!("Projections complete in {:?}", proj_start.elapsed());

    // Write output
    let output_path = "block_coverage_output.csv";
    let mut file = File::create(output_path).expect("Failed to create output file");

    writeln!(file, "ProfileID,Age,HorizonYears,FinalValue,MonthlyIncome,MonthlyGoal,Coverage")
        .unwrap();
    for row in &rows {
        writeln!(
            file,
            "{},{},{},{:.2},{:.2},{:.2},{:.4}",
            row.profile_id,
            row.age,
            row.horizon_years,
            row.final_value,
            row.monthly_income,
            row.monthly_goal,
            row.coverage,
        )
        .unwrap();
    }

    println!("Output written to {}", output_path);

    // Print summary stats
    let covered = rows.iter().filter(|row| row.coverage >= 1.0).count();
    let avg_coverage = if rows.is_empty() {
        0.0
    } else {
        rows.iter().map(|row| row.coverage).sum::<f64>() / rows.len() as f64
    };

    println!("\nBlock Summary:");
    println!("  Profiles:         {}", rows.len());
    println!("  Meeting goal:     {}", covered);
    println!("  Average coverage: {:.1}%", avg_coverage * 100.0);

    println!("\nTotal time: {:?}", start.elapsed());
}
