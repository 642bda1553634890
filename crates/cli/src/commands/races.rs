//! List races or show one race applied to a set of ability scores.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use race_core::{AbilityType, PcgRng, Race, StatBlock, StatModifierTable};

use crate::book::Sourcebook;
use crate::commands::OutputFormat;
use crate::config::CliConfig;

/// List races
#[derive(Parser)]
pub struct Races {
    /// Show a single race (case-insensitive)
    #[arg(value_name = "NAME")]
    name: Option<String>,

    /// Ability scores in STR,DEX,CON,INT,WIS,CHA order, adjusted by the race
    #[arg(short, long, value_name = "SCORES", requires = "name")]
    scores: Option<String>,

    /// Roll height, weight and age with this seed
    #[arg(long, value_name = "SEED", requires = "name")]
    physique: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

impl Races {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let book = Sourcebook::open(config)?;

        let Some(name) = &self.name else {
            return match self.format {
                OutputFormat::Json => print_json(&book.races),
                OutputFormat::Summary => {
                    for race in &book.races {
                        println!("{}", summary_line(race));
                    }
                    Ok(())
                }
            };
        };

        let race = book.race(name)?;
        if let OutputFormat::Json = self.format {
            return print_json(race);
        }

        print_race(race);

        if let Some(scores) = &self.scores {
            let mut block = parse_scores(scores)?;
            race.apply_to(&mut block);
            println!();
            println!("{}", style("Adjusted scores").bold());
            for stat in block.iter() {
                println!(
                    "  {:<4} {:>3} ({:+})",
                    stat.kind().abbreviation(),
                    stat.final_value(),
                    stat.final_bonus()?
                );
            }
        }

        if let Some(seed) = self.physique {
            let rolled = race.roll_physique(&PcgRng, seed);
            println!();
            println!(
                "{} height {} in, weight {} lb, age {}",
                style("Rolled").bold(),
                rolled.height,
                rolled.weight,
                rolled.age
            );
        }

        Ok(())
    }
}

fn summary_line(race: &Race) -> String {
    let adjustments: Vec<String> = race
        .ability_adjustments()
        .iter()
        .filter(|(_, adjustment)| **adjustment != 0)
        .map(|(ability, adjustment)| format!("{} {:+}", ability.abbreviation(), adjustment))
        .collect();

    format!(
        "{:<12} {:<8} {}",
        style(race.name()).cyan(),
        race.size,
        adjustments.join(", ")
    )
}

fn print_race(race: &Race) {
    println!("{}", style(race.name()).bold().cyan());
    if !race.description.is_empty() {
        println!("{}", race.description);
    }
    println!("  size      {}", race.size);
    println!("  height    {} in", race.height);
    println!("  weight    {} lb", race.weight);
    println!("  lifespan  {} years", race.lifespan);

    let speeds: Vec<String> = race
        .mobility
        .iter()
        .filter(|(_, feet)| *feet > 0)
        .map(|(kind, feet)| format!("{kind} {feet} ft"))
        .collect();
    println!("  speed     {}", speeds.join(", "));

    let notable: Vec<String> = race
        .vulnerabilities
        .iter()
        .filter(|(_, percent)| *percent != 100)
        .map(|(kind, percent)| format!("{kind} {percent}%"))
        .collect();
    if !notable.is_empty() {
        println!("  damage    {}", notable.join(", "));
    }
}

/// Parse six comma-separated scores; each must have a modifier.
fn parse_scores(input: &str) -> Result<StatBlock> {
    let scores: Vec<i32> = input
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<i32>()
                .with_context(|| format!("Invalid score: '{}'", part.trim()))
        })
        .collect::<Result<_>>()?;

    if scores.len() != AbilityType::ALL.len() {
        anyhow::bail!(
            "Expected {} scores, got {}",
            AbilityType::ALL.len(),
            scores.len()
        );
    }
    for score in &scores {
        StatModifierTable::modifier(*score)?;
    }

    Ok(StatBlock::with_scores(AbilityType::ALL.into_iter().zip(scores)))
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
