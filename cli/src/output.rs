//! Terminal formatting for roll results and errors.

use engine::{Character, Degree, RollOutcome};
use owo_colors::OwoColorize;

pub fn fail(err: &anyhow::Error) {
    eprintln!("{}", format!("!! {err:#}").red());
}

pub fn dc_header(target: i32) {
    println!("{}", format!("DC {target}").cyan());
}

fn icon(degree: Degree) -> &'static str {
    match degree {
        Degree::CriticalFailure => "💥",
        Degree::Failure => "❌",
        Degree::Success => "✅",
        Degree::CriticalSuccess => "🌟",
    }
}

/// One line per character: degree icon (when a target was set), identity, the
/// natural die (emphasized on 1 and 20), and the total.
pub fn roll_line(character: &Character, modifier: i32, outcome: &RollOutcome) {
    let mut line = String::new();
    if let Some(degree) = outcome.degree {
        line.push_str(icon(degree));
        line.push(' ');
    }
    line.push_str(&format!("{} ({})\t", character.name, character.player));
    let die = if outcome.natural_one() {
        format!("<{}>", outcome.die).red().to_string()
    } else if outcome.natural_twenty() {
        format!("<{}>", outcome.die).yellow().to_string()
    } else {
        format!("<{}>", outcome.die)
    };
    line.push_str(&die);
    line.push_str(&format!(" + {} = {}", modifier, outcome.total));
    println!("{line}");
}
