use std::slice::Iter;

use crate::Property;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Sex {
    FEMALE,
    MALE,
}

impl Property for Sex {
    fn iter() -> Iter<'static, Sex> {
        static SEX: [Sex; 2] = [Sex::FEMALE, Sex::MALE];
        SEX.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Sex::FEMALE => "Female",
            Sex::MALE => "Male",
        }
    }
}

/// Height, weight and tape measurements in centimeters and kilograms,
/// validated on construction. The hip circumference is only needed for the
/// female body fat formula.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyMeasurements {
    height_cm: f32,
    weight_kg: f32,
    neck_cm: f32,
    waist_cm: f32,
    hip_cm: Option<f32>,
}

impl BodyMeasurements {
    pub fn new(
        height_cm: f32,
        weight_kg: f32,
        neck_cm: f32,
        waist_cm: f32,
        hip_cm: Option<f32>,
    ) -> Result<Self, BodyMeasurementsError> {
        Ok(Self {
            height_cm: check("Height", height_cm)?,
            weight_kg: check("Weight", weight_kg)?,
            neck_cm: check("Neck circumference", neck_cm)?,
            waist_cm: check("Waist circumference", waist_cm)?,
            hip_cm: hip_cm
                .map(|value| check("Hip circumference", value))
                .transpose()?,
        })
    }

    /// Body mass index.
    #[must_use]
    pub fn bmi(&self) -> f32 {
        let height_m = self.height_cm / 100.;
        self.weight_kg / (height_m * height_m)
    }

    #[must_use]
    pub fn bmi_class(&self) -> BmiClass {
        BmiClass::of(self.bmi())
    }

    /// Body fat percentage by the US Navy circumference method. `None` if
    /// the hip circumference needed for the female formula is missing.
    #[must_use]
    pub fn body_fat(&self, sex: Sex) -> Option<f32> {
        match sex {
            Sex::FEMALE => Some(Self::navy(
                self.waist_cm + self.hip_cm? - self.neck_cm,
                self.height_cm,
                1.295_79,
                0.350_04,
                0.221,
            )),
            Sex::MALE => Some(Self::navy(
                self.waist_cm - self.neck_cm,
                self.height_cm,
                1.0324,
                0.190_77,
                0.154_56,
            )),
        }
    }

    fn navy(circumference: f32, height: f32, k0: f32, k1: f32, k2: f32) -> f32 {
        495. / (k0 - k1 * circumference.log10() + k2 * height.log10()) - 450.
    }
}

fn check(name: &'static str, value: f32) -> Result<f32, BodyMeasurementsError> {
    if value.is_finite() && value > 0. {
        Ok(value)
    } else {
        Err(BodyMeasurementsError::OutOfRange(name, value))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum BodyMeasurementsError {
    #[error("{0} must be a finite positive number ({1} given)")]
    OutOfRange(&'static str, f32),
}

/// WHO body mass index bands.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BmiClass {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiClass {
    #[must_use]
    pub fn of(bmi: f32) -> Self {
        if bmi < 18.5 {
            BmiClass::Underweight
        } else if bmi < 25. {
            BmiClass::Normal
        } else if bmi < 30. {
            BmiClass::Overweight
        } else {
            BmiClass::Obese
        }
    }
}

impl Property for BmiClass {
    fn iter() -> Iter<'static, BmiClass> {
        static BMI_CLASS: [BmiClass; 4] = [
            BmiClass::Underweight,
            BmiClass::Normal,
            BmiClass::Overweight,
            BmiClass::Obese,
        ];
        BMI_CLASS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            BmiClass::Underweight => "Underweight",
            BmiClass::Normal => "Normal Weight",
            BmiClass::Overweight => "Overweight",
            BmiClass::Obese => "Obese",
        }
    }
}
