use anyhow::{Result, anyhow, bail};
use fitplan_core::{Budget, DietType, FitnessLevel, Gender, Goal, Location, Region, UserProfile};
use serde::de::DeserializeOwned;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Parse a user-typed enum value. Accepts the serialized form (`fat-loss`) as
/// well as the display label (`Fat loss`).
pub fn parse_choice<T: DeserializeOwned>(input: &str) -> Result<T> {
    let key = input
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    serde_json::from_value(serde_json::Value::String(key))
        .map_err(|_| anyhow!("unrecognized value: {}", input.trim()))
}

/// Parse a body measurement (kg, cm). Must be finite and greater than zero;
/// `inf` and `NaN` parse as `f64` but cannot be stored as JSON numbers.
pub fn positive_finite(input: &str) -> Result<f64> {
    let n: f64 = input
        .trim()
        .parse()
        .map_err(|_| anyhow!("not a number: {}", input.trim()))?;
    if !n.is_finite() || n <= 0.0 {
        bail!("must be a positive number: {}", input.trim());
    }
    Ok(n)
}

struct Prompter<'a, R, W> {
    input: &'a mut R,
    out: &'a mut W,
}

impl<R: BufRead, W: Write> Prompter<'_, R, W> {
    fn line(&mut self, label: &str) -> Result<String> {
        write!(self.out, "{}: ", label)?;
        self.out.flush().ok();
        let mut s = String::new();
        if self.input.read_line(&mut s)? == 0 {
            bail!("input closed during setup");
        }
        Ok(s.trim().to_string())
    }

    fn required(&mut self, label: &str) -> Result<String> {
        loop {
            let s = self.line(label)?;
            if !s.is_empty() {
                return Ok(s);
            }
            writeln!(self.out, "  required")?;
        }
    }

    fn positive<N>(&mut self, label: &str) -> Result<N>
    where
        N: FromStr + PartialOrd + Default,
    {
        loop {
            match self.line(label)?.parse::<N>() {
                Ok(n) if n > N::default() => return Ok(n),
                _ => writeln!(self.out, "  enter a positive number")?,
            }
        }
    }

    fn measurement(&mut self, label: &str) -> Result<f64> {
        loop {
            match positive_finite(&self.line(label)?) {
                Ok(n) => return Ok(n),
                Err(_) => writeln!(self.out, "  enter a positive number")?,
            }
        }
    }

    fn choice<T: DeserializeOwned>(&mut self, label: &str, options: &str, default: T) -> Result<T> {
        loop {
            let s = self.line(&format!("{label} [{options}]"))?;
            if s.is_empty() {
                return Ok(default);
            }
            match parse_choice(&s) {
                Ok(v) => return Ok(v),
                Err(e) => writeln!(self.out, "  {e}")?,
            }
        }
    }
}

/// Four-step onboarding: personal details, goals, lifestyle, diet.
pub fn collect_profile<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<UserProfile> {
    let mut p = Prompter { input, out };

    writeln!(p.out, "Step 1 of 4: Personal details")?;
    let name = p.required("Full name")?;
    let age: u32 = p.positive("Age")?;
    let gender = p.choice("Gender", "male/female/other", Gender::Male)?;
    let height = p.measurement("Height (cm)")?;
    let weight = p.measurement("Weight (kg)")?;

    writeln!(p.out, "\nStep 2 of 4: Fitness goals")?;
    let fitness_level = p.choice(
        "Fitness level",
        "beginner/intermediate/advanced",
        FitnessLevel::Beginner,
    )?;
    let goal = p.choice(
        "Goal",
        "fat-loss/muscle-gain/maintenance/general-fitness/endurance",
        Goal::GeneralFitness,
    )?;

    writeln!(p.out, "\nStep 3 of 4: Lifestyle")?;
    let location = p.choice("Training location", "home/hostel/gym", Location::Home)?;
    let budget = p.choice("Food budget", "low/medium/high", Budget::Medium)?;

    writeln!(p.out, "\nStep 4 of 4: Diet")?;
    let diet_type = p.choice(
        "Diet type",
        "vegetarian/non-vegetarian/vegan/eggetarian",
        DietType::Vegetarian,
    )?;
    let region = p.choice(
        "Region",
        "north-indian/south-indian/regional-other",
        Region::NorthIndian,
    )?;
    let allergies = p.line("Allergies (optional)")?;

    Ok(UserProfile {
        name,
        age,
        gender,
        height,
        weight,
        fitness_level,
        goal,
        location,
        budget,
        diet_type,
        region,
        allergies: (!allergies.is_empty()).then_some(allergies),
    })
}

pub fn run_setup() -> Result<UserProfile> {
    println!("FitPlan setup\n");
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    collect_profile(&mut input, &mut out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_choice_accepts_labels() {
        assert_eq!(parse_choice::<Goal>("Fat loss").unwrap(), Goal::FatLoss);
        assert_eq!(parse_choice::<Goal>("muscle-gain").unwrap(), Goal::MuscleGain);
        assert_eq!(parse_choice::<DietType>("Non-Vegetarian").unwrap(), DietType::NonVegetarian);
        assert_eq!(parse_choice::<Region>(" South Indian ").unwrap(), Region::SouthIndian);
        assert!(parse_choice::<Location>("office").is_err());
    }

    #[test]
    fn test_collect_profile_with_retries_and_defaults() {
        let answers = "\nAnu\n-3\n20\nFemale\n160\n50.5\nintermediate\nx\nfat loss\n\n\n\nSouth Indian\npeanut\n";
        let mut input = Cursor::new(answers.as_bytes());
        let mut out = Vec::new();
        let p = collect_profile(&mut input, &mut out).unwrap();

        assert_eq!(p.name, "Anu");
        assert_eq!(p.age, 20);
        assert_eq!(p.gender, Gender::Female);
        assert_eq!(p.height, 160.0);
        assert_eq!(p.weight, 50.5);
        assert_eq!(p.fitness_level, FitnessLevel::Intermediate);
        assert_eq!(p.goal, Goal::FatLoss);
        assert_eq!(p.location, Location::Home);
        assert_eq!(p.budget, Budget::Medium);
        assert_eq!(p.diet_type, DietType::Vegetarian);
        assert_eq!(p.region, Region::SouthIndian);
        assert_eq!(p.allergies.as_deref(), Some("peanut"));

        let transcript = String::from_utf8(out).unwrap();
        assert!(transcript.contains("Step 4 of 4"));
        assert!(transcript.contains("unrecognized value: x"));
    }

    #[test]
    fn test_positive_finite() {
        assert_eq!(positive_finite(" 72.5 ").unwrap(), 72.5);
        for bad in ["inf", "-inf", "NaN", "infinity", "0", "-4", "abc", ""] {
            assert!(positive_finite(bad).is_err(), "{bad} accepted");
        }
    }

    #[test]
    fn test_collect_profile_reprompts_on_non_finite_measurements() {
        let answers = "Anu\n20\nfemale\ninf\n160\nNaN\n50\n\n\n\n\n\n\n\n";
        let mut input = Cursor::new(answers.as_bytes());
        let mut out = Vec::new();
        let p = collect_profile(&mut input, &mut out).unwrap();
        assert_eq!(p.height, 160.0);
        assert_eq!(p.weight, 50.0);

        let transcript = String::from_utf8(out).unwrap();
        assert_eq!(transcript.matches("enter a positive number").count(), 2);

        let json = serde_json::to_string(&p).unwrap();
        let back: UserProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn test_collect_profile_fails_on_eof() {
        let mut input = Cursor::new("Anu\n".as_bytes());
        let mut out = Vec::new();
        assert!(collect_profile(&mut input, &mut out).is_err());
    }
}
