use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Trained expertise tier. Determines the level-scaling bonus applied to a
/// derived statistic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Proficiency {
    Untrained,
    Trained,
    Expert,
    Master,
    Legendary,
}

impl Proficiency {
    pub fn offset(self) -> i32 {
        match self {
            Proficiency::Untrained => 0,
            Proficiency::Trained => 2,
            Proficiency::Expert => 4,
            Proficiency::Master => 6,
            Proficiency::Legendary => 8,
        }
    }

    /// Untrained contributes nothing regardless of level; every other rank
    /// contributes `level + offset`.
    pub fn bonus(self, level: i32) -> i32 {
        if self == Proficiency::Untrained {
            return 0;
        }
        level + self.offset()
    }
}

impl FromStr for Proficiency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "u" | "untrained" => Ok(Proficiency::Untrained),
            "t" | "trained" => Ok(Proficiency::Trained),
            "e" | "expert" => Ok(Proficiency::Expert),
            "m" | "master" => Ok(Proficiency::Master),
            "l" | "legendary" => Ok(Proficiency::Legendary),
            _ => Err(Error::InvalidProficiency(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AbilityModifiers {
    pub strength: i32,
    pub dexterity: i32,
    pub constitution: i32,
    pub intellect: i32,
    pub wisdom: i32,
    pub charisma: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Saves {
    pub reflex: Proficiency,
    pub fortitude: Proficiency,
    pub will: Proficiency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifySkills {
    pub arcana: Proficiency,
    pub nature: Proficiency,
    pub occultism: Proficiency,
    pub religion: Proficiency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proficiencies {
    pub perception: Proficiency,
    pub stealth: Proficiency,
    pub saves: Saves,
    #[serde(rename = "identify")]
    pub identify_skills: IdentifySkills,
}

impl Default for Saves {
    fn default() -> Self {
        Self {
            reflex: Proficiency::Untrained,
            fortitude: Proficiency::Untrained,
            will: Proficiency::Untrained,
        }
    }
}

impl Default for IdentifySkills {
    fn default() -> Self {
        Self {
            arcana: Proficiency::Untrained,
            nature: Proficiency::Untrained,
            occultism: Proficiency::Untrained,
            religion: Proficiency::Untrained,
        }
    }
}

impl Default for Proficiencies {
    fn default() -> Self {
        Self {
            perception: Proficiency::Untrained,
            stealth: Proficiency::Untrained,
            saves: Saves::default(),
            identify_skills: IdentifySkills::default(),
        }
    }
}

/// A persisted character record. Derived statistics are always computable;
/// there is no partial state once a character exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub player: String,
    pub level: i32,
    pub modifiers: AbilityModifiers,
    pub proficiencies: Proficiencies,
    pub armor_penalty: i32,
}

fn derived(ability_mod: i32, rank: Proficiency, level: i32) -> i32 {
    ability_mod + rank.bonus(level)
}

impl Character {
    pub fn perception(&self) -> i32 {
        derived(self.modifiers.wisdom, self.proficiencies.perception, self.level)
    }

    /// Armor penalty applies to stealth only.
    pub fn stealth(&self) -> i32 {
        derived(self.modifiers.dexterity, self.proficiencies.stealth, self.level)
            - self.armor_penalty
    }

    pub fn reflex_save(&self) -> i32 {
        derived(
            self.modifiers.dexterity,
            self.proficiencies.saves.reflex,
            self.level,
        )
    }

    pub fn fortitude_save(&self) -> i32 {
        derived(
            self.modifiers.constitution,
            self.proficiencies.saves.fortitude,
            self.level,
        )
    }

    pub fn will_save(&self) -> i32 {
        derived(self.modifiers.wisdom, self.proficiencies.saves.will, self.level)
    }

    pub fn arcana(&self) -> i32 {
        derived(
            self.modifiers.intellect,
            self.proficiencies.identify_skills.arcana,
            self.level,
        )
    }

    pub fn nature(&self) -> i32 {
        derived(
            self.modifiers.wisdom,
            self.proficiencies.identify_skills.nature,
            self.level,
        )
    }

    pub fn occultism(&self) -> i32 {
        derived(
            self.modifiers.intellect,
            self.proficiencies.identify_skills.occultism,
            self.level,
        )
    }

    pub fn religion(&self) -> i32 {
        derived(
            self.modifiers.wisdom,
            self.proficiencies.identify_skills.religion,
            self.level,
        )
    }

    /// Best of the four knowledge skills.
    pub fn identify(&self) -> i32 {
        self.arcana()
            .max(self.nature())
            .max(self.occultism())
            .max(self.religion())
    }

    pub fn statistic(&self, statistic: Statistic) -> i32 {
        match statistic {
            Statistic::Perception => self.perception(),
            Statistic::Stealth => self.stealth(),
            Statistic::Reflex => self.reflex_save(),
            Statistic::Fortitude => self.fortitude_save(),
            Statistic::Will => self.will_save(),
            Statistic::Identify => self.identify(),
            Statistic::Arcana => self.arcana(),
            Statistic::Nature => self.nature(),
            Statistic::Occultism => self.occultism(),
            Statistic::Religion => self.religion(),
            Statistic::Flat => 0,
        }
    }
}

/// A rollable skill, save, or flat check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statistic {
    Perception,
    Stealth,
    Reflex,
    Fortitude,
    Will,
    Identify,
    Arcana,
    Nature,
    Occultism,
    Religion,
    Flat,
}

impl FromStr for Statistic {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "perception" => Ok(Statistic::Perception),
            "stealth" => Ok(Statistic::Stealth),
            "reflex" => Ok(Statistic::Reflex),
            "fortitude" => Ok(Statistic::Fortitude),
            "will" => Ok(Statistic::Will),
            "identify" => Ok(Statistic::Identify),
            "arcana" => Ok(Statistic::Arcana),
            "nature" => Ok(Statistic::Nature),
            "occultism" => Ok(Statistic::Occultism),
            "religion" => Ok(Statistic::Religion),
            "flat" => Ok(Statistic::Flat),
            _ => Err(Error::InvalidStatistic(s.to_string())),
        }
    }
}
