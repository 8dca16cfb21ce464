use engine::{
    AbilityModifiers, Character, IdentifySkills, Proficiencies, Proficiency, Saves, Statistic,
};
use proptest::prelude::*;

fn sample_scout() -> Character {
    // L5 scout: sharp-eyed, sneaky, knows her herbs
    Character {
        name: "Vela".into(),
        player: "Sam".into(),
        level: 5,
        modifiers: AbilityModifiers {
            strength: 0,
            dexterity: 4,
            constitution: 1,
            intellect: 2,
            wisdom: 3,
            charisma: -1,
        },
        proficiencies: Proficiencies {
            perception: Proficiency::Expert,
            stealth: Proficiency::Trained,
            saves: Saves {
                reflex: Proficiency::Expert,
                fortitude: Proficiency::Trained,
                will: Proficiency::Untrained,
            },
            identify_skills: IdentifySkills {
                arcana: Proficiency::Untrained,
                nature: Proficiency::Master,
                occultism: Proficiency::Untrained,
                religion: Proficiency::Trained,
            },
        },
        armor_penalty: 2,
    }
}

#[test]
fn untrained_ignores_level() {
    let c = sample_scout();
    // will save is untrained: wisdom mod only, no matter the level
    assert_eq!(c.will_save(), 3);
    let mut high = c.clone();
    high.level = 20;
    assert_eq!(high.will_save(), 3);
}

#[test]
fn trained_and_above_add_level_plus_offset() {
    let c = sample_scout();
    assert_eq!(c.perception(), 3 + 5 + 4); // wis + level + expert
    assert_eq!(c.reflex_save(), 4 + 5 + 4);
    assert_eq!(c.fortitude_save(), 1 + 5 + 2);
    assert_eq!(c.nature(), 3 + 5 + 6); // wis + level + master
    assert_eq!(c.religion(), 3 + 5 + 2);
}

#[test]
fn stealth_subtracts_armor_penalty() {
    let mut c = sample_scout();
    let unencumbered = 4 + 5 + 2; // dex + level + trained
    assert_eq!(c.stealth(), unencumbered - 2);
    c.armor_penalty = 0;
    assert_eq!(c.stealth(), unencumbered);
}

#[test]
fn identify_is_best_knowledge_skill() {
    let c = sample_scout();
    assert_eq!(
        c.identify(),
        c.arcana().max(c.nature()).max(c.occultism()).max(c.religion())
    );
    assert_eq!(c.identify(), c.nature()); // master nature wins here
}

#[test]
fn statistic_dispatch_matches_named_accessors() {
    let c = sample_scout();
    assert_eq!(c.statistic(Statistic::Perception), c.perception());
    assert_eq!(c.statistic(Statistic::Stealth), c.stealth());
    assert_eq!(c.statistic(Statistic::Reflex), c.reflex_save());
    assert_eq!(c.statistic(Statistic::Fortitude), c.fortitude_save());
    assert_eq!(c.statistic(Statistic::Will), c.will_save());
    assert_eq!(c.statistic(Statistic::Identify), c.identify());
    assert_eq!(c.statistic(Statistic::Arcana), c.arcana());
    assert_eq!(c.statistic(Statistic::Nature), c.nature());
    assert_eq!(c.statistic(Statistic::Occultism), c.occultism());
    assert_eq!(c.statistic(Statistic::Religion), c.religion());
}

#[test]
fn flat_ignores_the_character_entirely() {
    let c = sample_scout();
    assert_eq!(c.statistic(Statistic::Flat), 0);
}

#[test]
fn proficiency_parses_letters_and_words() {
    assert_eq!("U".parse::<Proficiency>().unwrap(), Proficiency::Untrained);
    assert_eq!("t".parse::<Proficiency>().unwrap(), Proficiency::Trained);
    assert_eq!("expert".parse::<Proficiency>().unwrap(), Proficiency::Expert);
    assert_eq!("Master".parse::<Proficiency>().unwrap(), Proficiency::Master);
    assert_eq!("L".parse::<Proficiency>().unwrap(), Proficiency::Legendary);
    assert!("grandmaster".parse::<Proficiency>().is_err());
}

#[test]
fn statistic_parses_all_eleven_names() {
    for name in [
        "perception",
        "stealth",
        "reflex",
        "fortitude",
        "will",
        "identify",
        "arcana",
        "nature",
        "occultism",
        "religion",
        "flat",
    ] {
        assert!(name.parse::<Statistic>().is_ok(), "{name} should parse");
    }
    assert!("athletics".parse::<Statistic>().is_err());
}

fn any_trained_rank() -> impl Strategy<Value = Proficiency> {
    prop_oneof![
        Just(Proficiency::Trained),
        Just(Proficiency::Expert),
        Just(Proficiency::Master),
        Just(Proficiency::Legendary),
    ]
}

proptest! {
    #[test]
    fn trained_bonus_is_level_plus_offset(level in 1i32..=20, rank in any_trained_rank()) {
        prop_assert_eq!(rank.bonus(level), level + rank.offset());
    }

    #[test]
    fn untrained_bonus_is_always_zero(level in -5i32..=25) {
        prop_assert_eq!(Proficiency::Untrained.bonus(level), 0);
    }

    #[test]
    fn derived_perception_follows_the_formula(
        wisdom in -10i32..=10,
        level in 1i32..=20,
        rank in any_trained_rank(),
    ) {
        let mut c = sample_scout();
        c.modifiers.wisdom = wisdom;
        c.level = level;
        c.proficiencies.perception = rank;
        prop_assert_eq!(c.perception(), wisdom + level + rank.offset());
    }
}
