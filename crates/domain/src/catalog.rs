use std::collections::BTreeMap;

use crate::{Category, Equipment, Exercise, Movement};

/// Exercise dataset the plan generator draws from, grouped by category.
pub struct Catalog {
    exercises: BTreeMap<Category, Vec<Exercise>>,
}

impl Catalog {
    #[must_use]
    pub fn new(exercises: BTreeMap<Category, Vec<Exercise>>) -> Self {
        Self { exercises }
    }

    /// The dataset shipped with the product.
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    #[must_use]
    pub fn exercises_of(&self, category: Category) -> &[Exercise] {
        self.exercises.get(&category).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn compatible(&self, category: Category, equipment: Equipment) -> Vec<&Exercise> {
        self.exercises_of(category)
            .iter()
            .filter(|e| e.supports(equipment))
            .collect()
    }
}

static STANDARD: std::sync::LazyLock<Catalog> = std::sync::LazyLock::new(|| {
    Catalog::new(
        [
            (Category::ChestCompound, CHEST_COMPOUND),
            (Category::BackCompound, BACK_COMPOUND),
            (Category::ShoulderCompound, SHOULDER_COMPOUND),
            (Category::LegCompound, LEG_COMPOUND),
            (Category::ArmIsolation, ARM_ISOLATION),
            (Category::LegIsolation, LEG_ISOLATION),
            (Category::Core, CORE),
            (Category::Cardio, CARDIO),
        ]
        .into_iter()
        .map(|(category, exercises)| (category, exercises.to_vec()))
        .collect(),
    )
});

const CHEST_COMPOUND: &[Exercise] = &[
    Exercise {
        name: "Barbell Bench Press",
        movement: Movement::Compound,
        equipment: &[Equipment::Gym],
    },
    Exercise {
        name: "Decline Push-Up",
        movement: Movement::Compound,
        equipment: &[Equipment::Gym, Equipment::Home, Equipment::Bodyweight],
    },
    Exercise {
        name: "Dumbbell Bench Press",
        movement: Movement::Compound,
        equipment: &[Equipment::Gym, Equipment::Home],
    },
    Exercise {
        name: "Incline Dumbbell Press",
        movement: Movement::Compound,
        equipment: &[Equipment::Gym, Equipment::Home],
    },
    Exercise {
        name: "Machine Chest Press",
        movement: Movement::Compound,
        equipment: &[Equipment::Gym],
    },
    Exercise {
        name: "Push-Up",
        movement: Movement::Compound,
        equipment: &[Equipment::Gym, Equipment::Home, Equipment::Bodyweight],
    },
];

const BACK_COMPOUND: &[Exercise] = &[
    Exercise {
        name: "Barbell Row",
        movement: Movement::Compound,
        equipment: &[Equipment::Gym],
    },
    Exercise {
        name: "Chin-Up",
        movement: Movement::Compound,
        equipment: &[Equipment::Gym, Equipment::Home, Equipment::Bodyweight],
    },
    Exercise {
        name: "Dumbbell Row",
        movement: Movement::Compound,
        equipment: &[Equipment::Gym, Equipment::Home],
    },
    Exercise {
        name: "Inverted Row",
        movement: Movement::Compound,
        equipment: &[Equipment::Gym, Equipment::Home, Equipment::Bodyweight],
    },
    Exercise {
        name: "Lat Pulldown",
        movement: Movement::Compound,
        equipment: &[Equipment::Gym],
    },
    Exercise {
        name: "Seated Cable Row",
        movement: Movement::Compound,
        equipment: &[Equipment::Gym],
    },
];

const SHOULDER_COMPOUND: &[Exercise] = &[
    Exercise {
        name: "Arnold Press",
        movement: Movement::Compound,
        equipment: &[Equipment::Gym, Equipment::Home],
    },
    Exercise {
        name: "Barbell Overhead Press",
        movement: Movement::Compound,
        equipment: &[Equipment::Gym],
    },
    Exercise {
        name: "Dumbbell Shoulder Press",
        movement: Movement::Compound,
        equipment: &[Equipment::Gym, Equipment::Home],
    },
    Exercise {
        name: "Machine Shoulder Press",
        movement: Movement::Compound,
        equipment: &[Equipment::Gym],
    },
    Exercise {
        name: "Pike Push-Up",
        movement: Movement::Compound,
        equipment: &[Equipment::Gym, Equipment::Home, Equipment::Bodyweight],
    },
];

const LEG_COMPOUND: &[Exercise] = &[
    Exercise {
        name: "Barbell Back Squat",
        movement: Movement::Compound,
        equipment: &[Equipment::Gym],
    },
    Exercise {
        name: "Bodyweight Squat",
        movement: Movement::Compound,
        equipment: &[Equipment::Gym, Equipment::Home, Equipment::Bodyweight],
    },
    Exercise {
        name: "Bulgarian Split Squat",
        movement: Movement::Compound,
        equipment: &[Equipment::Gym, Equipment::Home, Equipment::Bodyweight],
    },
    Exercise {
        name: "Dumbbell Lunge",
        movement: Movement::Compound,
        equipment: &[Equipment::Gym, Equipment::Home],
    },
    Exercise {
        name: "Goblet Squat",
        movement: Movement::Compound,
        equipment: &[Equipment::Gym, Equipment::Home],
    },
    Exercise {
        name: "Leg Press",
        movement: Movement::Compound,
        equipment: &[Equipment::Gym],
    },
    Exercise {
        name: "Romanian Deadlift",
        movement: Movement::Compound,
        equipment: &[Equipment::Gym],
    },
    Exercise {
        name: "Walking Lunge",
        movement: Movement::Compound,
        equipment: &[Equipment::Gym, Equipment::Home, Equipment::Bodyweight],
    },
];

const ARM_ISOLATION: &[Exercise] = &[
    Exercise {
        name: "Barbell Curl",
        movement: Movement::Isolation,
        equipment: &[Equipment::Gym],
    },
    Exercise {
        name: "Bench Dip",
        movement: Movement::Isolation,
        equipment: &[Equipment::Gym, Equipment::Home, Equipment::Bodyweight],
    },
    Exercise {
        name: "Cable Triceps Pushdown",
        movement: Movement::Isolation,
        equipment: &[Equipment::Gym],
    },
    Exercise {
        name: "Diamond Push-Up",
        movement: Movement::Isolation,
        equipment: &[Equipment::Gym, Equipment::Home, Equipment::Bodyweight],
    },
    Exercise {
        name: "Dumbbell Biceps Curl",
        movement: Movement::Isolation,
        equipment: &[Equipment::Gym, Equipment::Home],
    },
    Exercise {
        name: "Overhead Triceps Extension",
        movement: Movement::Isolation,
        equipment: &[Equipment::Gym, Equipment::Home],
    },
];

const LEG_ISOLATION: &[Exercise] = &[
    Exercise {
        name: "Glute Bridge",
        movement: Movement::Isolation,
        equipment: &[Equipment::Gym, Equipment::Home, Equipment::Bodyweight],
    },
    Exercise {
        name: "Leg Curl",
        movement: Movement::Isolation,
        equipment: &[Equipment::Gym],
    },
    Exercise {
        name: "Leg Extension",
        movement: Movement::Isolation,
        equipment: &[Equipment::Gym],
    },
    Exercise {
        name: "Standing Calf Raise",
        movement: Movement::Isolation,
        equipment: &[Equipment::Gym, Equipment::Home, Equipment::Bodyweight],
    },
    Exercise {
        name: "Wall Sit",
        movement: Movement::Isolation,
        equipment: &[Equipment::Gym, Equipment::Home, Equipment::Bodyweight],
    },
];

const CORE: &[Exercise] = &[
    Exercise {
        name: "Bicycle Crunch",
        movement: Movement::Isolation,
        equipment: &[Equipment::Gym, Equipment::Home, Equipment::Bodyweight],
    },
    Exercise {
        name: "Crunch",
        movement: Movement::Isolation,
        equipment: &[Equipment::Gym, Equipment::Home, Equipment::Bodyweight],
    },
    Exercise {
        name: "Hanging Leg Raise",
        movement: Movement::Isolation,
        equipment: &[Equipment::Gym],
    },
    Exercise {
        name: "Plank",
        movement: Movement::Isolation,
        equipment: &[Equipment::Gym, Equipment::Home, Equipment::Bodyweight],
    },
    Exercise {
        name: "Russian Twist",
        movement: Movement::Isolation,
        equipment: &[Equipment::Gym, Equipment::Home, Equipment::Bodyweight],
    },
];

const CARDIO: &[Exercise] = &[
    Exercise {
        name: "Burpees",
        movement: Movement::Cardio,
        equipment: &[Equipment::Gym, Equipment::Home, Equipment::Bodyweight],
    },
    Exercise {
        name: "High Knees",
        movement: Movement::Cardio,
        equipment: &[Equipment::Gym, Equipment::Home, Equipment::Bodyweight],
    },
    Exercise {
        name: "Jump Rope",
        movement: Movement::Cardio,
        equipment: &[Equipment::Gym, Equipment::Home],
    },
    Exercise {
        name: "Jumping Jacks",
        movement: Movement::Cardio,
        equipment: &[Equipment::Gym, Equipment::Home, Equipment::Bodyweight],
    },
    Exercise {
        name: "Mountain Climbers",
        movement: Movement::Cardio,
        equipment: &[Equipment::Gym, Equipment::Home, Equipment::Bodyweight],
    },
    Exercise {
        name: "Rowing Machine",
        movement: Movement::Cardio,
        equipment: &[Equipment::Gym],
    },
    Exercise {
        name: "Stationary Bike",
        movement: Movement::Cardio,
        equipment: &[Equipment::Gym],
    },
    Exercise {
        name: "Treadmill Run",
        movement: Movement::Cardio,
        equipment: &[Equipment::Gym],
    },
];
