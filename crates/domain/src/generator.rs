use std::iter::zip;

use chrono::Weekday;
use log::{debug, error};
use rand::Rng;

use crate::{
    Catalog, Category, DayArchetype, DayCount, DayPlan, Equipment, Exercise,
    ExercisePrescription, Goal, Level, Plan, Property, prescribe, prescription::CARDIO_BLOCK,
};

/// Inputs of one plan generation call.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct PlanRequest {
    pub goal: Goal,
    pub level: Level,
    pub equipment: Equipment,
    pub days: DayCount,
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum PlanError {
    #[error("No {} exercise available for {}", .category.name(), .equipment.name())]
    CatalogGap {
        category: Category,
        equipment: Equipment,
    },
}

/// Uniformly random choice among the exercises of a category that are
/// compatible with the available equipment.
pub fn select_exercise(
    catalog: &Catalog,
    category: Category,
    equipment: Equipment,
    rng: &mut impl Rng,
) -> Result<Exercise, PlanError> {
    let compatible = catalog.compatible(category, equipment);
    if compatible.is_empty() {
        return Err(PlanError::CatalogGap {
            category,
            equipment,
        });
    }
    Ok(compatible[rng.gen_range(0..compatible.len())].clone())
}

/// Assemble a week of day plans from the split template of the requested
/// training frequency. Slots are drawn independently, so an exercise may
/// appear more than once within a day.
pub fn generate_plan(
    catalog: &Catalog,
    request: PlanRequest,
    rng: &mut impl Rng,
) -> Result<Plan, PlanError> {
    debug!(
        "generating plan: {}, {}, {}, {}",
        request.goal.name(),
        request.level.name(),
        request.equipment.name(),
        request.days.name()
    );

    let template = request.days.template();
    let mut days = Vec::with_capacity(template.archetypes.len());

    for (&archetype, &weekday) in zip(template.archetypes, template.weekdays) {
        match plan_day(catalog, request, archetype, weekday, rng) {
            Ok(day) => days.push(day),
            Err(err) => {
                error!("failed to generate plan: {err}");
                return Err(err);
            }
        }
    }

    Ok(Plan { days })
}

fn plan_day(
    catalog: &Catalog,
    request: PlanRequest,
    archetype: DayArchetype,
    weekday: Weekday,
    rng: &mut impl Rng,
) -> Result<DayPlan, PlanError> {
    let slots = archetype.slots();
    let mut exercises = Vec::with_capacity(slots.len() + 1);

    for slot in slots {
        exercises.push(ExercisePrescription {
            exercise: select_exercise(catalog, slot.category, request.equipment, rng)?,
            dose: prescribe(request.goal, *slot),
        });
    }

    if request.goal.includes_cardio()
        && matches!(archetype, DayArchetype::FullBody | DayArchetype::Lower)
    {
        exercises.push(ExercisePrescription {
            exercise: select_exercise(catalog, Category::Cardio, request.equipment, rng)?,
            dose: CARDIO_BLOCK,
        });
    }

    Ok(DayPlan {
        weekday,
        focus: archetype,
        exercises,
    })
}
