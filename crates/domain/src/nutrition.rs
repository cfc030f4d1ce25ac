use std::slice::Iter;

use crate::{Goal, Property, Sex};

const KCAL_PER_GRAM_PROTEIN: f32 = 4.;
const KCAL_PER_GRAM_CARBS: f32 = 4.;
const KCAL_PER_GRAM_FAT: f32 = 9.;

const WATER_ML_PER_KG: f32 = 35.;
const WATER_ML_PER_KG_TRAINING_HOUR: f32 = 12.;

/// Basal metabolic rate in kcal per day (Mifflin-St Jeor).
#[must_use]
pub fn basal_metabolic_rate(sex: Sex, weight_kg: f32, height_cm: f32, age_years: u8) -> f32 {
    let base = 10. * weight_kg + 6.25 * height_cm - 5. * f32::from(age_years);
    match sex {
        Sex::FEMALE => base - 161.,
        Sex::MALE => base + 5.,
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    #[must_use]
    pub fn factor(self) -> f32 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }
}

impl Property for ActivityLevel {
    fn iter() -> Iter<'static, ActivityLevel> {
        static ACTIVITY_LEVEL: [ActivityLevel; 5] = [
            ActivityLevel::Sedentary,
            ActivityLevel::Light,
            ActivityLevel::Moderate,
            ActivityLevel::Active,
            ActivityLevel::VeryActive,
        ];
        ACTIVITY_LEVEL.iter()
    }

    fn name(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::Light => "Lightly Active",
            ActivityLevel::Moderate => "Moderately Active",
            ActivityLevel::Active => "Active",
            ActivityLevel::VeryActive => "Very Active",
        }
    }
}

/// Maintenance calories: basal rate scaled by habitual activity.
#[must_use]
pub fn total_daily_energy_expenditure(basal_rate: f32, activity: ActivityLevel) -> f32 {
    basal_rate * activity.factor()
}

/// Daily calorie target: maintenance adjusted for the training goal.
#[must_use]
pub fn calorie_target(expenditure: f32, goal: Goal) -> f32 {
    expenditure
        + match goal {
            Goal::Muscle => 300.,
            Goal::FatLoss => -500.,
            Goal::Endurance => 0.,
            Goal::Strength => 150.,
        }
}

/// Daily macronutrient targets in grams.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MacroSplit {
    pub protein_g: f32,
    pub carbs_g: f32,
    pub fat_g: f32,
}

/// Split a calorie target into grams of protein, carbs and fat per goal.
#[must_use]
pub fn macro_split(calories: f32, goal: Goal) -> MacroSplit {
    let (protein, carbs, fat) = match goal {
        Goal::Muscle => (0.30, 0.45, 0.25),
        Goal::FatLoss => (0.40, 0.30, 0.30),
        Goal::Endurance => (0.25, 0.55, 0.20),
        Goal::Strength => (0.30, 0.40, 0.30),
    };
    MacroSplit {
        protein_g: calories * protein / KCAL_PER_GRAM_PROTEIN,
        carbs_g: calories * carbs / KCAL_PER_GRAM_CARBS,
        fat_g: calories * fat / KCAL_PER_GRAM_FAT,
    }
}

/// Recommended daily water intake in liters.
#[must_use]
pub fn daily_water_intake(weight_kg: f32, training_hours: f32) -> f32 {
    (WATER_ML_PER_KG * weight_kg + WATER_ML_PER_KG_TRAINING_HOUR * weight_kg * training_hours)
        / 1000.
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::male(Sex::MALE, 80., 180., 30, 1780.)]
    #[case::female(Sex::FEMALE, 60., 165., 25, 1345.25)]
    #[case::male_older(Sex::MALE, 70., 175., 40, 1598.75)]
    fn test_basal_metabolic_rate(
        #[case] sex: Sex,
        #[case] weight_kg: f32,
        #[case] height_cm: f32,
        #[case] age_years: u8,
        #[case] expected: f32,
    ) {
        assert_approx_eq!(
            basal_metabolic_rate(sex, weight_kg, height_cm, age_years),
            expected,
            0.001
        );
    }

    #[rstest]
    #[case::sedentary(ActivityLevel::Sedentary, 1.2)]
    #[case::light(ActivityLevel::Light, 1.375)]
    #[case::moderate(ActivityLevel::Moderate, 1.55)]
    #[case::active(ActivityLevel::Active, 1.725)]
    #[case::very_active(ActivityLevel::VeryActive, 1.9)]
    fn test_activity_factor(#[case] activity: ActivityLevel, #[case] factor: f32) {
        assert_eq!(activity.factor(), factor);
    }

    #[test]
    fn test_total_daily_energy_expenditure() {
        assert_approx_eq!(
            total_daily_energy_expenditure(1780., ActivityLevel::Moderate),
            2759.,
            0.1
        );
    }

    #[rstest]
    #[case::muscle(Goal::Muscle, 2800.)]
    #[case::fat_loss(Goal::FatLoss, 2000.)]
    #[case::endurance(Goal::Endurance, 2500.)]
    #[case::strength(Goal::Strength, 2650.)]
    fn test_calorie_target(#[case] goal: Goal, #[case] expected: f32) {
        assert_approx_eq!(calorie_target(2500., goal), expected, 0.001);
    }

    #[rstest]
    #[case::muscle(Goal::Muscle, 150., 225., 55.556)]
    #[case::fat_loss(Goal::FatLoss, 200., 150., 66.667)]
    #[case::endurance(Goal::Endurance, 125., 275., 44.444)]
    #[case::strength(Goal::Strength, 150., 200., 66.667)]
    fn test_macro_split(
        #[case] goal: Goal,
        #[case] protein_g: f32,
        #[case] carbs_g: f32,
        #[case] fat_g: f32,
    ) {
        let split = macro_split(2000., goal);
        assert_approx_eq!(split.protein_g, protein_g, 0.001);
        assert_approx_eq!(split.carbs_g, carbs_g, 0.001);
        assert_approx_eq!(split.fat_g, fat_g, 0.001);
    }

    #[test]
    fn test_macro_split_covers_calorie_target() {
        for &goal in Goal::iter() {
            let split = macro_split(2350., goal);
            assert_approx_eq!(
                4. * split.protein_g + 4. * split.carbs_g + 9. * split.fat_g,
                2350.,
                0.01
            );
        }
    }

    #[rstest]
    #[case::rest_day(70., 0., 2.45)]
    #[case::one_hour(70., 1., 3.29)]
    #[case::ninety_minutes(80., 1.5, 4.24)]
    fn test_daily_water_intake(
        #[case] weight_kg: f32,
        #[case] training_hours: f32,
        #[case] liters: f32,
    ) {
        assert_approx_eq!(daily_water_intake(weight_kg, training_hours), liters, 0.001);
    }

    #[test]
    fn test_activity_level_names() {
        assert_eq!(
            ActivityLevel::iter().map(|a| a.name()).collect::<Vec<_>>(),
            [
                "Sedentary",
                "Lightly Active",
                "Moderately Active",
                "Active",
                "Very Active"
            ]
        );
    }
}
