use anyhow::Result;
use clap::Args;
use engine::{resolve, Character, Dice, Roster, Selector, Statistic};

use crate::output;

#[derive(Args)]
pub struct RollCmd {
    /// Statistic to roll: perception, stealth, reflex, fortitude, will,
    /// identify, arcana, nature, occultism, religion or flat
    #[arg(value_name = "STATISTIC")]
    statistic: Statistic,

    #[command(flatten)]
    who: WhoArgs,

    /// Target DC to match or beat
    #[arg(long, short = 't', allow_negative_numbers = true)]
    target: Option<i32>,
}

/// Who rolls; exactly one of the three must be given.
#[derive(Args)]
#[group(required = true, multiple = false)]
struct WhoArgs {
    /// Name of the character to roll for
    #[arg(long, short = 'n')]
    name: Option<String>,
    /// Player whose character rolls
    #[arg(long, short = 'p')]
    player: Option<String>,
    /// Roll for all characters
    #[arg(long, short = 'a')]
    all: bool,
}

pub fn run(cmd: RollCmd, roster: &Roster) -> Result<()> {
    let characters: Vec<&Character> = if cmd.who.all {
        roster.characters().iter().collect()
    } else {
        let selector = match (&cmd.who.name, &cmd.who.player) {
            (Some(name), _) => Selector::Name(name.clone()),
            (_, Some(player)) => Selector::Player(player.clone()),
            (None, None) => unreachable!("roll group requires --name, --player or --all"),
        };
        vec![roster.find(&selector)?]
    };

    if let Some(target) = cmd.target {
        output::dc_header(target);
    }

    for character in characters {
        // one independently seeded roll per character
        let mut dice = Dice::from_entropy();
        let modifier = character.statistic(cmd.statistic);
        let outcome = resolve(&mut dice, modifier, cmd.target);
        output::roll_line(character, modifier, &outcome);
    }

    Ok(())
}
