#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod body;
pub mod catalog;
pub mod exercise;
pub mod generator;
pub mod heart_rate;
pub mod nutrition;
pub mod plan;
pub mod prescription;
pub mod split;

pub use body::{BmiClass, BodyMeasurements, BodyMeasurementsError, Sex};
pub use catalog::Catalog;
pub use exercise::{Category, Equipment, Exercise, Movement, Property};
pub use generator::{PlanError, PlanRequest, generate_plan, select_exercise};
pub use heart_rate::{BpmRange, Zone, max_heart_rate};
pub use nutrition::{
    ActivityLevel, MacroSplit, basal_metabolic_rate, calorie_target, daily_water_intake,
    macro_split, total_daily_energy_expenditure,
};
pub use plan::{DayPlan, ExercisePrescription, Plan};
pub use prescription::{Dose, Goal, Level, RepRange, prescribe};
pub use split::{DayArchetype, DayCount, DayCountError, Slot, SlotRole, SplitTemplate};
