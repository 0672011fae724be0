//! Load saved profiles from a profiles CSV export

use super::{Gender, Profile};
use csv::Reader;
use std::error::Error;
use std::path::Path;

/// Raw CSV row matching the profiles export columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "ProfileID")]
    profile_id: u32,
    #[serde(rename = "Age")]
    age: u8,
    #[serde(rename = "Gender")]
    gender: String,
    #[serde(rename = "GrossSalary")]
    gross_salary: f64,
    #[serde(rename = "WorkStartYear")]
    work_start_year: i32,
    #[serde(rename = "RetirementYear")]
    retirement_year: i32,
    #[serde(rename = "GoalPercentage")]
    goal_percentage: f64,
    #[serde(rename = "ZusAccount")]
    zus_account: Option<f64>,
    #[serde(rename = "ZusSubaccount")]
    zus_subaccount: Option<f64>,
}

impl CsvRow {
    fn to_profile(self) -> Result<Profile, Box<dyn Error>> {
        let gender = match self.gender.as_str() {
            "Male" => Gender::Male,
            "Female" => Gender::Female,
            other => return Err(format!("Unknown Gender: {}", other).into()),
        };

        Ok(Profile {
            profile_id: self.profile_id,
            age: self.age,
            gender,
            gross_salary: self.gross_salary,
            work_start_year: self.work_start_year,
            retirement_year: self.retirement_year,
            retirement_goal_percentage: self.goal_percentage,
            zus_account: self.zus_account,
            zus_subaccount: self.zus_subaccount,
        })
    }
}

/// Load all profiles from a CSV file
pub fn load_profiles<P: AsRef<Path>>(path: P) -> Result<Vec<Profile>, Box<dyn Error>> {
    let mut reader = Reader::from_path(path)?;
    let mut profiles = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        profiles.push(row.to_profile()?);
    }

    log::info!("loaded {} profiles", profiles.len());
    Ok(profiles)
}

/// Load profiles from any reader (e.g., string buffer, network stream)
pub fn load_profiles_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<Vec<Profile>, Box<dyn Error>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut profiles = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        profiles.push(row.to_profile()?);
    }

    Ok(profiles)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
ProfileID,Age,Gender,GrossSalary,WorkStartYear,RetirementYear,GoalPercentage,ZusAccount,ZusSubaccount
1,45,Male,5000,2005,2046,70,50000,20000
2,38,Female,7200,2010,2048,80,,
";

    #[test]
    fn test_load_profiles_from_reader() {
        let profiles = load_profiles_from_reader(SAMPLE.as_bytes()).expect("parse failed");
        assert_eq!(profiles.len(), 2);

        let p1 = &profiles[0];
        assert_eq!(p1.profile_id, 1);
        assert_eq!(p1.gender, Gender::Male);
        assert_eq!(p1.zus_account, Some(50_000.0));

        let p2 = &profiles[1];
        assert_eq!(p2.gender, Gender::Female);
        assert_eq!(p2.retirement_goal_percentage, 80.0);
        assert_eq!(p2.zus_account, None);
        assert_eq!(p2.zus_subaccount, None);
    }

    #[test]
    fn test_unknown_gender_is_an_error() {
        let bad = "\
ProfileID,Age,Gender,GrossSalary,WorkStartYear,RetirementYear,GoalPercentage,ZusAccount,ZusSubaccount
1,45,Other,5000,2005,2046,70,,
";
        assert!(load_profiles_from_reader(bad.as_bytes()).is_err());
    }
}
