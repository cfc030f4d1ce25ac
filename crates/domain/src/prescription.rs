use std::{fmt, slice::Iter};

use derive_more::Display;

use crate::{Category, Property, Slot, SlotRole};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Goal {
    Muscle,
    FatLoss,
    Endurance,
    Strength,
}

impl Goal {
    #[must_use]
    pub fn base_sets(self) -> u32 {
        match self {
            Goal::Strength => 5,
            Goal::Muscle => 4,
            Goal::FatLoss | Goal::Endurance => 3,
        }
    }

    #[must_use]
    pub fn rep_range(self) -> RepRange {
        match self {
            Goal::Strength => RepRange { min: 3, max: 5 },
            Goal::Muscle => RepRange { min: 8, max: 12 },
            Goal::Endurance => RepRange { min: 15, max: 20 },
            Goal::FatLoss => RepRange { min: 10, max: 15 },
        }
    }

    /// Whether full body and lower days get a cardio block appended.
    #[must_use]
    pub fn includes_cardio(self) -> bool {
        matches!(self, Goal::FatLoss | Goal::Endurance)
    }
}

impl Property for Goal {
    fn iter() -> Iter<'static, Goal> {
        static GOAL: [Goal; 4] = [Goal::Muscle, Goal::FatLoss, Goal::Endurance, Goal::Strength];
        GOAL.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Goal::Muscle => "Muscle",
            Goal::FatLoss => "Fat Loss",
            Goal::Endurance => "Endurance",
            Goal::Strength => "Strength",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    /// Multiplier shown next to the plan. Purely cosmetic, generated
    /// volume is goal-driven.
    #[must_use]
    pub fn intensity_factor(self) -> f32 {
        match self {
            Level::Beginner => 1.0,
            Level::Intermediate => 1.2,
            Level::Advanced => 1.4,
        }
    }
}

impl Property for Level {
    fn iter() -> Iter<'static, Level> {
        static LEVEL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];
        LEVEL.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }
}

/// Inclusive range rendered the way the plan labels it ("8-12").
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[display("{min}-{max}")]
pub struct RepRange {
    pub min: u32,
    pub max: u32,
}

/// Work assigned to one exercise of a day plan.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Dose {
    /// Straight sets of a target rep range.
    Sets { sets: u32, reps: RepRange },
    /// A single timed block, minutes instead of sets and reps.
    Duration { minutes: RepRange },
}

impl Dose {
    #[must_use]
    pub fn num_sets(self) -> u32 {
        match self {
            Dose::Sets { sets, .. } => sets,
            Dose::Duration { .. } => 0,
        }
    }
}

impl fmt::Display for Dose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dose::Sets { sets, reps } => write!(f, "{sets} x {reps}"),
            Dose::Duration { minutes } => write!(f, "{minutes} min"),
        }
    }
}

pub(crate) const CARDIO_BLOCK: Dose = Dose::Duration {
    minutes: RepRange { min: 15, max: 20 },
};

/// Sets and reps for a slot under the given goal.
#[must_use]
pub fn prescribe(goal: Goal, slot: Slot) -> Dose {
    match slot.role {
        SlotRole::Primary => Dose::Sets {
            sets: goal.base_sets(),
            reps: goal.rep_range(),
        },
        SlotRole::Secondary => Dose::Sets {
            sets: (goal.base_sets() - 1).max(1),
            reps: goal.rep_range(),
        },
        SlotRole::Accessory => Dose::Sets {
            sets: 3,
            reps: accessory_reps(slot.category),
        },
    }
}

fn accessory_reps(category: Category) -> RepRange {
    match category {
        Category::Core => RepRange { min: 12, max: 15 },
        _ => RepRange { min: 10, max: 15 },
    }
}
