use crate::core::{ConsumptionReading, Metric};
use serde::Serialize;
use std::fmt;

const EXCELLENT_MESSAGE: &str =
    "Excellent! Your consumption is very low. Keep it up to maintain your sustainable footprint.";
const GOOD_MESSAGE: &str =
    "Good job! A few small adjustments would bring your household to the top tier.";
const NEEDS_IMPROVEMENT_MESSAGE: &str =
    "Your consumption is high. Acting on the items below will make a real difference.";
pub const NO_DATA_MESSAGE: &str =
    "Add your consumption data to receive personalized recommendations.";

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum Category {
    Excellent,
    Good,
    NeedsImprovement,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Excellent => write!(f, "Excellent"),
            Self::Good => write!(f, "Good"),
            Self::NeedsImprovement => write!(f, "Needs Improvement"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct SubScores {
    pub water: u8,
    pub energy: u8,
    pub gas: u8,
}

impl SubScores {
    pub fn get(&self, metric: Metric) -> u8 {
        match metric {
            Metric::Water => self.water,
            Metric::Energy => self.energy,
            Metric::Gas => self.gas,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScoreResult {
    pub total_score: u8,
    pub category: Category,
    pub sub_scores: SubScores,
    pub message: String,
    pub action_items: Vec<String>,
}

/// Outcome of scoring a reading. `NoData` stands in for a reading where
/// nothing has been entered yet.
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluation {
    NoData,
    Scored(ScoreResult),
}

impl Evaluation {
    pub fn message(&self) -> &str {
        match self {
            Self::NoData => NO_DATA_MESSAGE,
            Self::Scored(result) => &result.message,
        }
    }

    pub fn total_score(&self) -> Option<u8> {
        match self {
            Self::NoData => None,
            Self::Scored(result) => Some(result.total_score),
        }
    }
}

pub fn score(reading: ConsumptionReading) -> Evaluation {
    if reading.is_empty() {
        return Evaluation::NoData;
    }

    Evaluation::Scored(rate(reading))
}

/// Three-tier evaluation without the empty-reading check.
pub fn rate(reading: ConsumptionReading) -> ScoreResult {
    let sub_scores = SubScores {
        water: sub_score(Metric::Water, reading.water),
        energy: sub_score(Metric::Energy, reading.energy),
        gas: sub_score(Metric::Gas, reading.gas),
    };
    let total_score = total_score(&[sub_scores.water, sub_scores.energy, sub_scores.gas]);
    let category = category_for_score(total_score);

    let (message, action_items) = match category {
        Category::Excellent => (
            EXCELLENT_MESSAGE,
            vec![
                "Maintain your current consumption habits".to_string(),
                "Share your sustainable practices with family and friends".to_string(),
            ],
        ),
        Category::Good => {
            let mut items = overage_items(reading);
            if items.is_empty() {
                items.push("Keep monitoring your consumption daily".to_string());
            }
            (GOOD_MESSAGE, items)
        }
        Category::NeedsImprovement => {
            let mut items = overage_items(reading);
            if items.is_empty() {
                items.push("Take shorter showers".to_string());
                items.push("Check pipes and taps for leaks".to_string());
            }
            (NEEDS_IMPROVEMENT_MESSAGE, items)
        }
    };

    ScoreResult {
        total_score,
        category,
        sub_scores,
        message: message.to_string(),
        action_items,
    }
}

/// Step function per metric. Anything that fails every `<=` comparison,
/// NaN included, lands in the lowest tier.
pub fn sub_score(metric: Metric, value: f64) -> u8 {
    let [best, better, fair] = metric.step_thresholds();
    if value <= best {
        100
    } else if value <= better {
        75
    } else if value <= fair {
        50
    } else {
        25
    }
}

pub fn total_score(sub_scores: &[u8]) -> u8 {
    if sub_scores.is_empty() {
        return 0;
    }

    let sum: u32 = sub_scores.iter().map(|score| u32::from(*score)).sum();
    (f64::from(sum) / sub_scores.len() as f64).round() as u8
}

pub fn category_for_score(score: u8) -> Category {
    match score {
        85..=u8::MAX => Category::Excellent,
        60..=84 => Category::Good,
        _ => Category::NeedsImprovement,
    }
}

fn overage_items(reading: ConsumptionReading) -> Vec<String> {
    Metric::ALL
        .iter()
        .filter(|metric| reading.get(**metric) > metric.advice_threshold())
        .map(|metric| metric.advice().to_string())
        .collect()
}
