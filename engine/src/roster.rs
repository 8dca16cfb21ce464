use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::character::{Character, Proficiency};
use crate::error::Error;

/// Picks one character out of the roster. Both lookups are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Name(String),
    Player(String),
}

impl Selector {
    fn matches(&self, character: &Character) -> bool {
        match self {
            Selector::Name(name) => fold_eq(&character.name, name),
            Selector::Player(player) => fold_eq(&character.player, player),
        }
    }
}

fn fold_eq(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Per-field updates for an edit. `None` leaves the existing value untouched,
/// so a supplied zero or Untrained is distinguishable from "not provided".
#[derive(Debug, Clone, Default)]
pub struct CharacterUpdate {
    pub name: Option<String>,
    pub player: Option<String>,
    pub level: Option<i32>,
    pub strength: Option<i32>,
    pub dexterity: Option<i32>,
    pub constitution: Option<i32>,
    pub intellect: Option<i32>,
    pub wisdom: Option<i32>,
    pub charisma: Option<i32>,
    pub perception: Option<Proficiency>,
    pub stealth: Option<Proficiency>,
    pub reflex: Option<Proficiency>,
    pub fortitude: Option<Proficiency>,
    pub will: Option<Proficiency>,
    pub arcana: Option<Proficiency>,
    pub nature: Option<Proficiency>,
    pub occultism: Option<Proficiency>,
    pub religion: Option<Proficiency>,
    pub armor_penalty: Option<i32>,
}

impl CharacterUpdate {
    fn apply(self, character: &mut Character) {
        if let Some(name) = self.name {
            character.name = name;
        }
        if let Some(player) = self.player {
            character.player = player;
        }
        if let Some(level) = self.level {
            character.level = level;
        }
        if let Some(strength) = self.strength {
            character.modifiers.strength = strength;
        }
        if let Some(dexterity) = self.dexterity {
            character.modifiers.dexterity = dexterity;
        }
        if let Some(constitution) = self.constitution {
            character.modifiers.constitution = constitution;
        }
        if let Some(intellect) = self.intellect {
            character.modifiers.intellect = intellect;
        }
        if let Some(wisdom) = self.wisdom {
            character.modifiers.wisdom = wisdom;
        }
        if let Some(charisma) = self.charisma {
            character.modifiers.charisma = charisma;
        }
        if let Some(perception) = self.perception {
            character.proficiencies.perception = perception;
        }
        if let Some(stealth) = self.stealth {
            character.proficiencies.stealth = stealth;
        }
        if let Some(reflex) = self.reflex {
            character.proficiencies.saves.reflex = reflex;
        }
        if let Some(fortitude) = self.fortitude {
            character.proficiencies.saves.fortitude = fortitude;
        }
        if let Some(will) = self.will {
            character.proficiencies.saves.will = will;
        }
        if let Some(arcana) = self.arcana {
            character.proficiencies.identify_skills.arcana = arcana;
        }
        if let Some(nature) = self.nature {
            character.proficiencies.identify_skills.nature = nature;
        }
        if let Some(occultism) = self.occultism {
            character.proficiencies.identify_skills.occultism = occultism;
        }
        if let Some(religion) = self.religion {
            character.proficiencies.identify_skills.religion = religion;
        }
        if let Some(armor_penalty) = self.armor_penalty {
            character.armor_penalty = armor_penalty;
        }
    }
}

/// The full collection of character records. Owns every record; mutation order
/// is unspecified between operations since records are re-sorted by name when
/// the roster is persisted.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    #[serde(rename = "players", default)]
    characters: Vec<Character>,
}

impl Roster {
    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    /// Rejects the add when either identity field is already taken.
    pub fn add(&mut self, character: Character) -> Result<(), Error> {
        if self.position(&Selector::Name(character.name.clone())).is_ok() {
            return Err(Error::DuplicateName(character.name));
        }
        if self
            .position(&Selector::Player(character.player.clone()))
            .is_ok()
        {
            return Err(Error::DuplicatePlayer(character.player));
        }
        debug!(name = %character.name, player = %character.player, "adding character");
        self.characters.push(character);
        Ok(())
    }

    /// Removes exactly one matching record. Remaining order is unspecified
    /// until the next save.
    pub fn remove(&mut self, selector: &Selector) -> Result<Character, Error> {
        let idx = self.position(selector)?;
        let character = self.characters.swap_remove(idx);
        debug!(name = %character.name, "removed character");
        Ok(character)
    }

    pub fn find(&self, selector: &Selector) -> Result<&Character, Error> {
        let idx = self.position(selector)?;
        Ok(&self.characters[idx])
    }

    /// Overwrites only the fields the update carries; returns the record as it
    /// stands after the edit.
    pub fn edit(
        &mut self,
        selector: &Selector,
        update: CharacterUpdate,
    ) -> Result<&Character, Error> {
        let idx = self.position(selector)?;
        update.apply(&mut self.characters[idx]);
        Ok(&self.characters[idx])
    }

    pub(crate) fn sort_by_name(&mut self) {
        self.characters.sort_by(|a, b| a.name.cmp(&b.name));
    }

    fn position(&self, selector: &Selector) -> Result<usize, Error> {
        self.characters
            .iter()
            .position(|c| selector.matches(c))
            .ok_or(Error::NotFound)
    }
}
