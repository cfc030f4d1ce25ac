use chrono::{Duration, Weekday};

use crate::{DayArchetype, Dose, Exercise};

/// One exercise of a day plan together with its assigned work.
#[derive(Debug, Clone, PartialEq)]
pub struct ExercisePrescription {
    pub exercise: Exercise,
    pub dose: Dose,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayPlan {
    pub weekday: Weekday,
    pub focus: DayArchetype,
    pub exercises: Vec<ExercisePrescription>,
}

impl DayPlan {
    /// Estimated gross duration including warm-up.
    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::minutes(8 * i64::try_from(self.exercises.len()).unwrap_or(0) + 10)
    }

    #[must_use]
    pub fn num_sets(&self) -> u32 {
        self.exercises.iter().map(|e| e.dose.num_sets()).sum()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Plan {
    pub days: Vec<DayPlan>,
}

impl Plan {
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.days.iter().map(DayPlan::duration).sum()
    }

    #[must_use]
    pub fn num_sets(&self) -> u32 {
        self.days.iter().map(DayPlan::num_sets).sum()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{Equipment, Movement, RepRange};

    use super::*;

    const SQUAT: Exercise = Exercise {
        name: "Barbell Back Squat",
        movement: Movement::Compound,
        equipment: &[Equipment::Gym],
    };

    const PLANK: Exercise = Exercise {
        name: "Plank",
        movement: Movement::Isolation,
        equipment: &[Equipment::Gym, Equipment::Home, Equipment::Bodyweight],
    };

    const BIKE: Exercise = Exercise {
        name: "Stationary Bike",
        movement: Movement::Cardio,
        equipment: &[Equipment::Gym],
    };

    static LOWER_DAY: std::sync::LazyLock<DayPlan> = std::sync::LazyLock::new(|| DayPlan {
        weekday: Weekday::Mon,
        focus: DayArchetype::Lower,
        exercises: vec![
            ExercisePrescription {
                exercise: SQUAT,
                dose: Dose::Sets {
                    sets: 5,
                    reps: RepRange { min: 3, max: 5 },
                },
            },
            ExercisePrescription {
                exercise: SQUAT,
                dose: Dose::Sets {
                    sets: 4,
                    reps: RepRange { min: 3, max: 5 },
                },
            },
            ExercisePrescription {
                exercise: PLANK,
                dose: Dose::Sets {
                    sets: 3,
                    reps: RepRange { min: 12, max: 15 },
                },
            },
            ExercisePrescription {
                exercise: BIKE,
                dose: Dose::Duration {
                    minutes: RepRange { min: 15, max: 20 },
                },
            },
        ],
    });

    #[test]
    fn test_day_plan_duration() {
        assert_eq!(LOWER_DAY.duration(), Duration::minutes(42));
        let rest = DayPlan {
            weekday: Weekday::Sun,
            focus: DayArchetype::FullBody,
            exercises: vec![],
        };
        assert_eq!(rest.duration(), Duration::minutes(10));
    }

    #[test]
    fn test_day_plan_num_sets() {
        assert_eq!(LOWER_DAY.num_sets(), 12);
    }

    #[test]
    fn test_plan_totals() {
        let plan = Plan {
            days: vec![LOWER_DAY.clone(), LOWER_DAY.clone()],
        };
        assert_eq!(plan.duration(), Duration::minutes(84));
        assert_eq!(plan.num_sets(), 24);
    }
}
