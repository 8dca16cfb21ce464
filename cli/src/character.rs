use std::path::Path;

use anyhow::Result;
use clap::{Args, Subcommand};
use engine::{
    store, AbilityModifiers, Character, CharacterUpdate, IdentifySkills, Proficiencies,
    Proficiency, Roster, Saves, Selector,
};

#[derive(Subcommand)]
pub enum CharacterCmd {
    /// Add a new character to the game
    Add(AddArgs),
    /// Remove a character from the game
    Remove(SelectorArgs),
    /// Edit a character
    Edit(EditArgs),
    /// List characters
    List,
}

/// Picks the character to operate on; exactly one of the two must be given.
#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct SelectorArgs {
    /// Name of the character
    #[arg(long, short = 'n')]
    name: Option<String>,
    /// Name of the player to whom the character belongs
    #[arg(long, short = 'p')]
    player: Option<String>,
}

impl SelectorArgs {
    pub fn selector(&self) -> Selector {
        match (&self.name, &self.player) {
            (Some(name), _) => Selector::Name(name.clone()),
            (_, Some(player)) => Selector::Player(player.clone()),
            // clap's required group guarantees one of the two
            (None, None) => unreachable!("selector group requires --name or --player"),
        }
    }
}

#[derive(Args)]
pub struct AddArgs {
    /// Name of the character to add
    #[arg(long, short = 'n')]
    name: String,
    /// Name of the player to whom the character belongs
    #[arg(long, short = 'p')]
    player: String,

    /// Character level
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    level: i32,

    /// Strength modifier
    #[arg(long, allow_negative_numbers = true)]
    strength: i32,
    /// Dexterity modifier
    #[arg(long, allow_negative_numbers = true)]
    dexterity: i32,
    /// Constitution modifier
    #[arg(long, allow_negative_numbers = true)]
    constitution: i32,
    /// Intellect modifier
    #[arg(long = "intelligence", allow_negative_numbers = true)]
    intellect: i32,
    /// Wisdom modifier
    #[arg(long, allow_negative_numbers = true)]
    wisdom: i32,
    /// Charisma modifier
    #[arg(long, allow_negative_numbers = true)]
    charisma: i32,

    /// Perception proficiency (U, T, E, M or L)
    #[arg(long, default_value = "U")]
    perception: Proficiency,
    /// Stealth proficiency
    #[arg(long, default_value = "U")]
    stealth: Proficiency,
    /// Reflex save proficiency
    #[arg(long, default_value = "U")]
    reflex: Proficiency,
    /// Fortitude save proficiency
    #[arg(long, default_value = "U")]
    fortitude: Proficiency,
    /// Will save proficiency
    #[arg(long, default_value = "U")]
    will: Proficiency,
    /// Arcana proficiency
    #[arg(long, default_value = "U")]
    arcana: Proficiency,
    /// Nature proficiency
    #[arg(long, default_value = "U")]
    nature: Proficiency,
    /// Occultism proficiency
    #[arg(long, default_value = "U")]
    occultism: Proficiency,
    /// Religion proficiency
    #[arg(long, default_value = "U")]
    religion: Proficiency,

    /// Reduction to stealth from armor
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    armor_penalty: i32,
}

impl AddArgs {
    fn into_character(self) -> Character {
        Character {
            name: self.name,
            player: self.player,
            level: self.level,
            modifiers: AbilityModifiers {
                strength: self.strength,
                dexterity: self.dexterity,
                constitution: self.constitution,
                intellect: self.intellect,
                wisdom: self.wisdom,
                charisma: self.charisma,
            },
            proficiencies: Proficiencies {
                perception: self.perception,
                stealth: self.stealth,
                saves: Saves {
                    reflex: self.reflex,
                    fortitude: self.fortitude,
                    will: self.will,
                },
                identify_skills: IdentifySkills {
                    arcana: self.arcana,
                    nature: self.nature,
                    occultism: self.occultism,
                    religion: self.religion,
                },
            },
            armor_penalty: self.armor_penalty,
        }
    }
}

#[derive(Args)]
pub struct EditArgs {
    #[command(flatten)]
    selector: SelectorArgs,

    /// Name to change to
    #[arg(long)]
    new_name: Option<String>,
    /// Player name to change to
    #[arg(long)]
    new_player: Option<String>,

    /// Character level
    #[arg(long, allow_negative_numbers = true)]
    level: Option<i32>,

    /// Strength modifier
    #[arg(long, allow_negative_numbers = true)]
    strength: Option<i32>,
    /// Dexterity modifier
    #[arg(long, allow_negative_numbers = true)]
    dexterity: Option<i32>,
    /// Constitution modifier
    #[arg(long, allow_negative_numbers = true)]
    constitution: Option<i32>,
    /// Intellect modifier
    #[arg(long = "intelligence", allow_negative_numbers = true)]
    intellect: Option<i32>,
    /// Wisdom modifier
    #[arg(long, allow_negative_numbers = true)]
    wisdom: Option<i32>,
    /// Charisma modifier
    #[arg(long, allow_negative_numbers = true)]
    charisma: Option<i32>,

    /// Perception proficiency (U, T, E, M or L)
    #[arg(long)]
    perception: Option<Proficiency>,
    /// Stealth proficiency
    #[arg(long)]
    stealth: Option<Proficiency>,
    /// Reflex save proficiency
    #[arg(long)]
    reflex: Option<Proficiency>,
    /// Fortitude save proficiency
    #[arg(long)]
    fortitude: Option<Proficiency>,
    /// Will save proficiency
    #[arg(long)]
    will: Option<Proficiency>,
    /// Arcana proficiency
    #[arg(long)]
    arcana: Option<Proficiency>,
    /// Nature proficiency
    #[arg(long)]
    nature: Option<Proficiency>,
    /// Occultism proficiency
    #[arg(long)]
    occultism: Option<Proficiency>,
    /// Religion proficiency
    #[arg(long)]
    religion: Option<Proficiency>,

    /// Reduction to stealth from armor
    #[arg(long, allow_negative_numbers = true)]
    armor_penalty: Option<i32>,
}

impl EditArgs {
    fn update(&self) -> CharacterUpdate {
        CharacterUpdate {
            name: self.new_name.clone(),
            player: self.new_player.clone(),
            level: self.level,
            strength: self.strength,
            dexterity: self.dexterity,
            constitution: self.constitution,
            intellect: self.intellect,
            wisdom: self.wisdom,
            charisma: self.charisma,
            perception: self.perception,
            stealth: self.stealth,
            reflex: self.reflex,
            fortitude: self.fortitude,
            will: self.will,
            arcana: self.arcana,
            nature: self.nature,
            occultism: self.occultism,
            religion: self.religion,
            armor_penalty: self.armor_penalty,
        }
    }
}

pub fn run(cmd: CharacterCmd, roster: &mut Roster, path: &Path) -> Result<()> {
    match cmd {
        CharacterCmd::Add(args) => {
            let character = args.into_character();
            let (name, player) = (character.name.clone(), character.player.clone());
            roster.add(character)?;
            store::save(path, roster)?;
            eprintln!("created character '{name}' ({player})");
        }
        CharacterCmd::Remove(args) => {
            roster.remove(&args.selector())?;
            store::save(path, roster)?;
            eprintln!("removed character");
        }
        CharacterCmd::Edit(args) => {
            let edited = roster.edit(&args.selector.selector(), args.update())?;
            let (name, player) = (edited.name.clone(), edited.player.clone());
            store::save(path, roster)?;
            eprintln!("edited character '{name}' ({player})");
        }
        CharacterCmd::List => {
            for character in roster.characters() {
                println!("{} ({})", character.name, character.player);
            }
        }
    }
    Ok(())
}
