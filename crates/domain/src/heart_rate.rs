use std::slice::Iter;

use derive_more::Display;

use crate::Property;

/// Age-predicted maximum heart rate in bpm.
#[must_use]
pub fn max_heart_rate(age_years: u8) -> u16 {
    220u16.saturating_sub(u16::from(age_years))
}

/// Karvonen training zones over the heart-rate reserve.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Zone {
    Recovery,
    Aerobic,
    Tempo,
    Threshold,
    Maximal,
}

impl Zone {
    /// Inclusive bpm band of this zone for the given maximum and resting
    /// heart rates.
    #[must_use]
    pub fn bpm_range(self, max_heart_rate: u16, resting_heart_rate: u16) -> BpmRange {
        let resting = f32::from(resting_heart_rate);
        let reserve = f32::from(max_heart_rate.saturating_sub(resting_heart_rate));
        let (low, high) = self.reserve_fractions();
        BpmRange {
            low: to_bpm(resting + low * reserve),
            high: to_bpm(resting + high * reserve),
        }
    }

    fn reserve_fractions(self) -> (f32, f32) {
        match self {
            Zone::Recovery => (0.5, 0.6),
            Zone::Aerobic => (0.6, 0.7),
            Zone::Tempo => (0.7, 0.8),
            Zone::Threshold => (0.8, 0.9),
            Zone::Maximal => (0.9, 1.0),
        }
    }
}

impl Property for Zone {
    fn iter() -> Iter<'static, Zone> {
        static ZONE: [Zone; 5] = [
            Zone::Recovery,
            Zone::Aerobic,
            Zone::Tempo,
            Zone::Threshold,
            Zone::Maximal,
        ];
        ZONE.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Zone::Recovery => "Recovery",
            Zone::Aerobic => "Aerobic",
            Zone::Tempo => "Tempo",
            Zone::Threshold => "Threshold",
            Zone::Maximal => "Maximal",
        }
    }
}

/// Inclusive bpm band.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[display("{low}-{high} bpm")]
pub struct BpmRange {
    pub low: u16,
    pub high: u16,
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_bpm(value: f32) -> u16 {
    value.round() as u16
}
