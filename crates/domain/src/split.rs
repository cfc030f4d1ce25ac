use std::slice::Iter;

use chrono::Weekday;

use crate::{Category, Property};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DayCount {
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
}

impl DayCount {
    #[must_use]
    pub fn days(self) -> u8 {
        self as u8
    }

    /// The split template paired with this training frequency.
    #[must_use]
    pub fn template(self) -> &'static SplitTemplate {
        match self {
            DayCount::Three => &THREE_DAYS,
            DayCount::Four => &FOUR_DAYS,
            DayCount::Five => &FIVE_DAYS,
            DayCount::Six => &SIX_DAYS,
        }
    }
}

impl Property for DayCount {
    fn iter() -> Iter<'static, DayCount> {
        static DAY_COUNT: [DayCount; 4] = [
            DayCount::Three,
            DayCount::Four,
            DayCount::Five,
            DayCount::Six,
        ];
        DAY_COUNT.iter()
    }

    fn name(self) -> &'static str {
        match self {
            DayCount::Three => "3 Days",
            DayCount::Four => "4 Days",
            DayCount::Five => "5 Days",
            DayCount::Six => "6 Days",
        }
    }
}

impl TryFrom<u8> for DayCount {
    type Error = DayCountError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            x if x == DayCount::Three as u8 => Ok(DayCount::Three),
            x if x == DayCount::Four as u8 => Ok(DayCount::Four),
            x if x == DayCount::Five as u8 => Ok(DayCount::Five),
            x if x == DayCount::Six as u8 => Ok(DayCount::Six),
            _ => Err(DayCountError::Unsupported(value)),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DayCountError {
    #[error("Training frequency must be 3 to 6 days per week ({0} requested)")]
    Unsupported(u8),
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DayArchetype {
    FullBody,
    Upper,
    Lower,
    Push,
    Pull,
    Legs,
}

impl DayArchetype {
    /// The ordered exercise slots a day with this focus is built from.
    #[must_use]
    pub fn slots(self) -> &'static [Slot] {
        match self {
            DayArchetype::FullBody => FULL_BODY_SLOTS,
            DayArchetype::Upper => UPPER_SLOTS,
            DayArchetype::Lower => LOWER_SLOTS,
            DayArchetype::Push => PUSH_SLOTS,
            DayArchetype::Pull => PULL_SLOTS,
            DayArchetype::Legs => LEGS_SLOTS,
        }
    }
}

impl Property for DayArchetype {
    fn iter() -> Iter<'static, DayArchetype> {
        static DAY_ARCHETYPE: [DayArchetype; 6] = [
            DayArchetype::FullBody,
            DayArchetype::Upper,
            DayArchetype::Lower,
            DayArchetype::Push,
            DayArchetype::Pull,
            DayArchetype::Legs,
        ];
        DAY_ARCHETYPE.iter()
    }

    fn name(self) -> &'static str {
        match self {
            DayArchetype::FullBody => "Full Body",
            DayArchetype::Upper => "Upper Body",
            DayArchetype::Lower => "Lower Body",
            DayArchetype::Push => "Push",
            DayArchetype::Pull => "Pull",
            DayArchetype::Legs => "Legs",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SlotRole {
    Primary,
    Secondary,
    Accessory,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Slot {
    pub category: Category,
    pub role: SlotRole,
}

/// Week-long sequence of day archetypes with the weekday labels the
/// generated days are presented under.
pub struct SplitTemplate {
    pub archetypes: &'static [DayArchetype],
    pub weekdays: &'static [Weekday],
}

static THREE_DAYS: SplitTemplate = SplitTemplate {
    archetypes: &[
        DayArchetype::FullBody,
        DayArchetype::FullBody,
        DayArchetype::FullBody,
    ],
    weekdays: &[Weekday::Mon, Weekday::Wed, Weekday::Fri],
};

static FOUR_DAYS: SplitTemplate = SplitTemplate {
    archetypes: &[
        DayArchetype::Upper,
        DayArchetype::Lower,
        DayArchetype::Upper,
        DayArchetype::Lower,
    ],
    weekdays: &[Weekday::Mon, Weekday::Tue, Weekday::Thu, Weekday::Fri],
};

static FIVE_DAYS: SplitTemplate = SplitTemplate {
    archetypes: &[
        DayArchetype::Push,
        DayArchetype::Pull,
        DayArchetype::Legs,
        DayArchetype::Upper,
        DayArchetype::Lower,
    ],
    weekdays: &[
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Fri,
        Weekday::Sat,
    ],
};

static SIX_DAYS: SplitTemplate = SplitTemplate {
    archetypes: &[
        DayArchetype::Push,
        DayArchetype::Pull,
        DayArchetype::Legs,
        DayArchetype::Push,
        DayArchetype::Pull,
        DayArchetype::Legs,
    ],
    weekdays: &[
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
    ],
};

const FULL_BODY_SLOTS: &[Slot] = &[
    Slot { category: Category::LegCompound, role: SlotRole::Primary },
    Slot { category: Category::ChestCompound, role: SlotRole::Secondary },
    Slot { category: Category::BackCompound, role: SlotRole::Secondary },
    Slot { category: Category::Core, role: SlotRole::Accessory },
];

const UPPER_SLOTS: &[Slot] = &[
    Slot { category: Category::ChestCompound, role: SlotRole::Primary },
    Slot { category: Category::BackCompound, role: SlotRole::Secondary },
    Slot { category: Category::ShoulderCompound, role: SlotRole::Secondary },
    Slot { category: Category::ArmIsolation, role: SlotRole::Accessory },
];

const LOWER_SLOTS: &[Slot] = &[
    Slot { category: Category::LegCompound, role: SlotRole::Primary },
    Slot { category: Category::LegCompound, role: SlotRole::Secondary },
    Slot { category: Category::LegIsolation, role: SlotRole::Accessory },
    Slot { category: Category::Core, role: SlotRole::Accessory },
];

const PUSH_SLOTS: &[Slot] = &[
    Slot { category: Category::ChestCompound, role: SlotRole::Primary },
    Slot { category: Category::ChestCompound, role: SlotRole::Secondary },
    Slot { category: Category::ShoulderCompound, role: SlotRole::Secondary },
    Slot { category: Category::ArmIsolation, role: SlotRole::Accessory },
];

const PULL_SLOTS: &[Slot] = &[
    Slot { category: Category::BackCompound, role: SlotRole::Primary },
    Slot { category: Category::BackCompound, role: SlotRole::Secondary },
    Slot { category: Category::ArmIsolation, role: SlotRole::Accessory },
    Slot { category: Category::Core, role: SlotRole::Accessory },
];

const LEGS_SLOTS: &[Slot] = &[
    Slot { category: Category::LegCompound, role: SlotRole::Primary },
    Slot { category: Category::LegCompound, role: SlotRole::Secondary },
    Slot { category: Category::LegIsolation, role: SlotRole::Accessory },
    Slot { category: Category::LegIsolation, role: SlotRole::Accessory },
];
