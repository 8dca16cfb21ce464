use engine::{resolve, Degree, Dice};

fn scripted(face: u8) -> Dice {
    Dice::from_scripted(vec![face])
}

#[test]
fn ten_or_more_under_target_is_critical_failure() {
    let out = resolve(&mut scripted(5), 0, Some(15));
    assert_eq!(out.total, 5);
    assert_eq!(out.degree, Some(Degree::CriticalFailure));
}

#[test]
fn under_target_is_failure() {
    let out = resolve(&mut scripted(10), 0, Some(15));
    assert_eq!(out.degree, Some(Degree::Failure));
}

#[test]
fn meeting_target_exactly_is_success() {
    let out = resolve(&mut scripted(10), 5, Some(15));
    assert_eq!(out.total, 15);
    assert_eq!(out.degree, Some(Degree::Success));
}

#[test]
fn ten_or_more_over_target_is_critical_success() {
    let out = resolve(&mut scripted(15), 10, Some(15));
    assert_eq!(out.total, 25);
    assert_eq!(out.degree, Some(Degree::CriticalSuccess));
}

#[test]
fn natural_one_downgrades_a_success_to_failure() {
    // total 16 would classify as Success against DC 15
    let out = resolve(&mut scripted(1), 15, Some(15));
    assert!(out.natural_one());
    assert_eq!(out.degree, Some(Degree::Failure));
}

#[test]
fn natural_twenty_upgrades_a_failure_to_success() {
    // total 10 would classify as Failure against DC 15
    let out = resolve(&mut scripted(20), -10, Some(15));
    assert!(out.natural_twenty());
    assert_eq!(out.degree, Some(Degree::Success));
}

#[test]
fn natural_one_clamps_at_critical_failure() {
    let out = resolve(&mut scripted(1), 0, Some(20));
    assert_eq!(out.degree, Some(Degree::CriticalFailure));
}

#[test]
fn natural_twenty_clamps_at_critical_success() {
    let out = resolve(&mut scripted(20), 10, Some(15));
    assert_eq!(out.degree, Some(Degree::CriticalSuccess));
}

#[test]
fn no_target_produces_no_degree() {
    let out = resolve(&mut scripted(20), 3, None);
    assert_eq!(out.die, 20);
    assert_eq!(out.total, 23);
    assert_eq!(out.degree, None);
    // natural flags still fire for display emphasis
    assert!(out.natural_twenty());
}

#[test]
fn degrees_order_worst_to_best() {
    assert!(Degree::CriticalFailure < Degree::Failure);
    assert!(Degree::Failure < Degree::Success);
    assert!(Degree::Success < Degree::CriticalSuccess);
}

#[test]
fn die_stays_within_one_to_twenty() {
    let mut dice = Dice::from_seed(7);
    for _ in 0..500 {
        let face = dice.d20();
        assert!((1..=20).contains(&face));
    }
}

#[test]
fn scripted_faces_run_out_into_the_rng() {
    let mut dice = Dice::from_scripted(vec![3, 17]);
    assert_eq!(dice.d20(), 3);
    assert_eq!(dice.d20(), 17);
    assert!((1..=20).contains(&dice.d20()));
}

#[test]
fn different_seeds_roll_different_sequences() {
    let mut a = Dice::from_seed(1);
    let mut b = Dice::from_seed(2);
    let seq_a: Vec<u8> = (0..20).map(|_| a.d20()).collect();
    let seq_b: Vec<u8> = (0..20).map(|_| b.d20()).collect();
    assert_ne!(seq_a, seq_b);
}
