use std::slice::Iter;

pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub name: &'static str,
    pub movement: Movement,
    pub equipment: &'static [Equipment],
}

impl Exercise {
    #[must_use]
    pub fn supports(&self, equipment: Equipment) -> bool {
        self.equipment.contains(&equipment)
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Movement {
    Compound,
    Isolation,
    Cardio,
}

impl Property for Movement {
    fn iter() -> Iter<'static, Movement> {
        static MOVEMENT: [Movement; 3] = [Movement::Compound, Movement::Isolation, Movement::Cardio];
        MOVEMENT.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Movement::Compound => "Compound",
            Movement::Isolation => "Isolation",
            Movement::Cardio => "Cardio",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Equipment {
    Gym,
    Home,
    Bodyweight,
}

impl Property for Equipment {
    fn iter() -> Iter<'static, Equipment> {
        static EQUIPMENT: [Equipment; 3] =
            [Equipment::Gym, Equipment::Home, Equipment::Bodyweight];
        EQUIPMENT.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Equipment::Gym => "Full Gym",
            Equipment::Home => "Home Setup",
            Equipment::Bodyweight => "Bodyweight Only",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Category {
    ChestCompound,
    BackCompound,
    ShoulderCompound,
    LegCompound,
    ArmIsolation,
    LegIsolation,
    Core,
    Cardio,
}

impl Property for Category {
    fn iter() -> Iter<'static, Category> {
        static CATEGORY: [Category; 8] = [
            Category::ChestCompound,
            Category::BackCompound,
            Category::ShoulderCompound,
            Category::LegCompound,
            Category::ArmIsolation,
            Category::LegIsolation,
            Category::Core,
            Category::Cardio,
        ];
        CATEGORY.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Category::ChestCompound => "Chest",
            Category::BackCompound => "Back",
            Category::ShoulderCompound => "Shoulders",
            Category::LegCompound => "Legs",
            Category::ArmIsolation => "Arms",
            Category::LegIsolation => "Leg Isolation",
            Category::Core => "Core",
            Category::Cardio => "Cardio",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    const BENCH_PRESS: Exercise = Exercise {
        name: "Barbell Bench Press",
        movement: Movement::Compound,
        equipment: &[Equipment::Gym],
    };
    const PUSH_UP: Exercise = Exercise {
        name: "Push-Up",
        movement: Movement::Compound,
        equipment: &[Equipment::Gym, Equipment::Home, Equipment::Bodyweight],
    };

    #[rstest]
    #[case::gym_exercise_in_gym(&BENCH_PRESS, Equipment::Gym, true)]
    #[case::gym_exercise_at_home(&BENCH_PRESS, Equipment::Home, false)]
    #[case::gym_exercise_without_equipment(&BENCH_PRESS, Equipment::Bodyweight, false)]
    #[case::bodyweight_exercise_in_gym(&PUSH_UP, Equipment::Gym, true)]
    #[case::bodyweight_exercise_without_equipment(&PUSH_UP, Equipment::Bodyweight, true)]
    fn test_exercise_supports(
        #[case] exercise: &Exercise,
        #[case] equipment: Equipment,
        #[case] expected: bool,
    ) {
        assert_eq!(exercise.supports(equipment), expected);
    }

    #[test]
    fn test_movement_names() {
        assert_eq!(
            Movement::iter().map(|m| m.name()).collect::<Vec<_>>(),
            ["Compound", "Isolation", "Cardio"]
        );
    }

    #[test]
    fn test_equipment_names() {
        assert_eq!(
            Equipment::iter().map(|e| e.name()).collect::<Vec<_>>(),
            ["Full Gym", "Home Setup", "Bodyweight Only"]
        );
    }

    #[test]
    fn test_category_names() {
        let names = Category::iter().map(|c| c.name()).collect::<Vec<_>>();
        assert_eq!(names.len(), 8);
        assert_eq!(
            names.iter().collect::<HashSet<_>>().len(),
            names.len(),
            "category names must be unique"
        );
    }
}
