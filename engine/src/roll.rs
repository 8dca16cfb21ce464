use crate::Dice;

/// Four-level outcome classification, ordered worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Degree {
    CriticalFailure,
    Failure,
    Success,
    CriticalSuccess,
}

impl Degree {
    /// One step toward failure, clamped at CriticalFailure.
    fn downgrade(self) -> Self {
        match self {
            Degree::CriticalFailure | Degree::Failure => Degree::CriticalFailure,
            Degree::Success => Degree::Failure,
            Degree::CriticalSuccess => Degree::Success,
        }
    }

    /// One step toward success, clamped at CriticalSuccess.
    fn upgrade(self) -> Self {
        match self {
            Degree::CriticalFailure => Degree::Failure,
            Degree::Failure => Degree::Success,
            Degree::Success | Degree::CriticalSuccess => Degree::CriticalSuccess,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollOutcome {
    /// Natural die value, before the modifier.
    pub die: u8,
    pub total: i32,
    /// Absent when no target was supplied.
    pub degree: Option<Degree>,
}

impl RollOutcome {
    pub fn natural_one(&self) -> bool {
        self.die == 1
    }

    pub fn natural_twenty(&self) -> bool {
        self.die == 20
    }
}

fn classify(total: i32, target: i32) -> Degree {
    if total <= target - 10 {
        Degree::CriticalFailure
    } else if total < target {
        Degree::Failure
    } else if total >= target + 10 {
        Degree::CriticalSuccess
    } else {
        Degree::Success
    }
}

/// Roll one d20, add the modifier, and classify against the target if one was
/// given. A natural 1 shifts the classified degree one step down and a natural
/// 20 one step up, after the boundary classification.
pub fn resolve(dice: &mut Dice, modifier: i32, target: Option<i32>) -> RollOutcome {
    let die = dice.d20();
    let total = i32::from(die) + modifier;
    let degree = target.map(|target| {
        let base = classify(total, target);
        match die {
            1 => base.downgrade(),
            20 => base.upgrade(),
            _ => base,
        }
    });
    RollOutcome { die, total, degree }
}
