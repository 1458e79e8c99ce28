//! Follow-up appointment planner CLI
//!
//! A command-line front end for the appointment date resolver.

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::json;
use std::process;

use rdv_planner::preference::{parse, PreferenceConstraint};
use rdv_planner::schedule::{suggest, SuggestionRequest};

/// rdv-planner - Compute J+7/J+14/J+21/J+30 follow-up appointments
#[derive(Parser)]
#[command(name = "rdv-planner")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    # Schedule with weekend avoidance only
    rdv-planner suggest --start-date 2024-01-01 --name \"Marie Dupont\"

    # Honor a day/time preference
    rdv-planner suggest --start-date 2024-01-01 --name \"Marie Dupont\" \\
        --preferences \"only on mardi matin, vendredi toute la journée\"

    # Emit the boundary JSON shape
    rdv-planner suggest --start-date 2024-01-01 --name \"Marie Dupont\" --json

    # Inspect how a preference phrase is understood
    rdv-planner preferences \"not on vendredi\"")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the four follow-up appointments for a patient
    Suggest {
        /// Start date (J0, device fitting date) in yyyy-MM-dd format
        #[arg(long)]
        start_date: String,

        /// Patient name (display only)
        #[arg(long)]
        name: String,

        /// Free-text day/time preference, e.g. "only on mardi matin"
        #[arg(long)]
        preferences: Option<String>,

        /// Print the JSON result shape instead of a human-readable table
        #[arg(long)]
        json: bool,
    },

    /// Show how a free-text preference phrase is parsed
    Preferences {
        /// Preference text to parse
        text: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Suggest {
            start_date,
            name,
            preferences,
            json,
        } => cmd_suggest(start_date, name, preferences, json),
        Commands::Preferences { text } => cmd_preferences(text),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Compute and print the follow-up schedule
///
/// In JSON mode the outcome is always printed as the boundary result shape
/// (`success` true/false) and the command exits cleanly; validation errors
/// only become a process failure in human-readable mode.
fn cmd_suggest(
    start_date: String,
    name: String,
    preferences: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    let request = SuggestionRequest {
        patient_name: name,
        start_date,
        patient_preferences: preferences,
    };

    if json {
        let value = match suggest(&request) {
            Ok(suggestion) => json!({
                "success": true,
                "appointments": suggestion.appointments,
                "patientName": suggestion.patient_name,
                "startDate": suggestion.start_date,
            }),
            Err(e) => json!({
                "success": false,
                "message": e.to_string(),
            }),
        };
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let suggestion = suggest(&request).context("failed to compute the follow-up schedule")?;

    println!("Calendrier pour {}", suggestion.patient_name);
    println!("Départ des appareils le {}", suggestion.start_date);
    println!();
    for appointment in &suggestion.appointments {
        println!("  {}  {}", appointment.date, appointment.description);
    }

    Ok(())
}

/// Show the structured constraint a preference phrase parses to
fn cmd_preferences(text: String) -> anyhow::Result<()> {
    match parse(&text) {
        PreferenceConstraint::None => {
            println!("No recognized preference: weekends avoided by default");
        }
        PreferenceConstraint::AllowList(slots) => {
            println!("Allow-list ({} slot(s)):", slots.len());
            for (day, slot) in slots {
                println!("  {day} - {}", slot.label());
            }
        }
        PreferenceConstraint::DenyList(days) => {
            println!("Deny-list (weekends always excluded):");
            for day in days {
                println!("  {day}");
            }
        }
    }
    Ok(())
}
