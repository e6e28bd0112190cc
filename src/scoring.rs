//! Travel condition scoring
//!
//! Pure deterministic mapping from current conditions to a 0-100 score and a
//! verdict string. The score starts at 100 and loses points proportional to
//! how far each reading sits from its ideal value; the verdict combines one
//! tier label per reading.

use crate::models::CurrentConditions;

const IDEAL_TEMPERATURE_C: f64 = 25.0;
const IDEAL_WIND_SPEED: f64 = 0.0;
const IDEAL_RAINFALL_MM: f64 = 0.0;

const TEMPERATURE_PENALTY_PER_DEGREE: f64 = 2.0;
const WIND_PENALTY_PER_UNIT: f64 = 0.5;
const RAIN_PENALTY_PER_MM: f64 = 4.0;

/// Result of scoring one set of conditions
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResult {
    /// Travel-friendliness score, 0 to 100
    pub score: u8,
    /// Combined tier labels, e.g. "Perfect & Calm Winds & Dry Conditions"
    pub verdict: String,
}

/// Score current conditions for travel
#[must_use]
pub fn score_conditions(conditions: &CurrentConditions) -> ScoreResult {
    let mut score = 100.0;
    score -=
        (conditions.temperature_c - IDEAL_TEMPERATURE_C).abs() * TEMPERATURE_PENALTY_PER_DEGREE;
    score -= (conditions.wind_speed - IDEAL_WIND_SPEED).abs() * WIND_PENALTY_PER_UNIT;
    score -= (conditions.rainfall - IDEAL_RAINFALL_MM).abs() * RAIN_PENALTY_PER_MM;

    let verdict = format!(
        "{} & {} & {}",
        temperature_tier(conditions.temperature_c),
        wind_tier(conditions.wind_speed),
        rain_tier(conditions.rainfall)
    );

    ScoreResult {
        // Deductions only subtract, so the floor clamp is the only one needed
        score: score.max(0.0).round() as u8,
        verdict,
    }
}

fn temperature_tier(temperature_c: f64) -> &'static str {
    if temperature_c < -5.0 {
        "Dangerously Cold"
    } else if temperature_c < 0.0 {
        "Freezing"
    } else if temperature_c < 5.0 {
        "Very Cold"
    } else if temperature_c < 10.0 {
        "Cold"
    } else if temperature_c < 16.0 {
        "Chilly"
    } else if temperature_c < 26.0 {
        "Perfect"
    } else if temperature_c < 30.0 {
        "Warm"
    } else if temperature_c < 35.0 {
        "Hot"
    } else if temperature_c < 40.0 {
        "Very Hot"
    } else {
        "Dangerously Hot"
    }
}

fn wind_tier(wind_speed: f64) -> &'static str {
    if wind_speed < 5.0 {
        "Calm Winds"
    } else if wind_speed < 12.0 {
        "Light Breeze"
    } else if wind_speed < 20.0 {
        "Breezy"
    } else if wind_speed < 30.0 {
        "Windy"
    } else if wind_speed < 50.0 {
        "Strong Winds"
    } else if wind_speed < 75.0 {
        "Gale Force"
    } else {
        "Violent Storm"
    }
}

fn rain_tier(rainfall_mm: f64) -> &'static str {
    if rainfall_mm == 0.0 {
        "Dry Conditions"
    } else if rainfall_mm < 0.5 {
        "Drizzling"
    } else if rainfall_mm < 2.5 {
        "Light Rain"
    } else if rainfall_mm < 7.6 {
        "Moderate Rain"
    } else if rainfall_mm < 10.0 {
        "Heavy Rain"
    } else if rainfall_mm < 50.0 {
        "Potential Floods"
    } else {
        "Torrential/Flash Flooding"
    }
}
