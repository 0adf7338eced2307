pub mod report;
pub mod sanitize;
pub mod score;
pub mod session;

use crate::config::Config;
use crate::core::report::FinalReport;
use serde::Serialize;
use std::fmt;

pub const SAVINGS_TIPS: [&str; 3] = [
    "Showers of up to 5 minutes save as much as 80 L of water a day",
    "Unplug idle appliances to avoid phantom power draw",
    "Cook with a pressure cooker to cut gas use",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Water,
    Energy,
    Gas,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Water, Metric::Energy, Metric::Gas];

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "water" | "w" => Some(Self::Water),
            "energy" | "e" => Some(Self::Energy),
            "gas" | "g" => Some(Self::Gas),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Water => "water",
            Self::Energy => "energy",
            Self::Gas => "gas",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Self::Water => "L",
            Self::Energy => "kWh",
            Self::Gas => "m³",
        }
    }

    /// Upper bounds of the 100, 75 and 50 tiers, inclusive.
    pub fn step_thresholds(self) -> [f64; 3] {
        match self {
            Self::Water => [150.0, 200.0, 300.0],
            Self::Energy => [10.0, 15.0, 20.0],
            Self::Gas => [2.0, 3.0, 4.0],
        }
    }

    /// Daily usage above this value earns a metric-specific action item.
    pub fn advice_threshold(self) -> f64 {
        self.step_thresholds()[1]
    }

    pub fn advice(self) -> &'static str {
        match self {
            Self::Water => {
                "Shorten showers and fix dripping taps to bring water use under 200 L/day"
            }
            Self::Energy => {
                "Unplug idle devices and switch to LED lighting to bring energy use under 15 kWh/day"
            }
            Self::Gas => "Cook with lids on and use a pressure cooker to bring gas use under 3 m³/day",
        }
    }

    // Presentation anchors only, scoring never reads these.
    pub fn typical_range(self) -> (f64, f64) {
        match self {
            Self::Water => (100.0, 200.0),
            Self::Energy => (8.0, 15.0),
            Self::Gas => (1.0, 3.0),
        }
    }

    pub fn target(self) -> f64 {
        match self {
            Self::Water => 150.0,
            Self::Energy => 10.0,
            Self::Gas => 2.0,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Water => write!(f, "Water"),
            Self::Energy => write!(f, "Energy"),
            Self::Gas => write!(f, "Gas"),
        }
    }
}

/// Daily usage in liters, kWh and m³.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ConsumptionReading {
    pub water: f64,
    pub energy: f64,
    pub gas: f64,
}

impl ConsumptionReading {
    pub fn from_raw(water: &str, energy: &str, gas: &str) -> Self {
        Self {
            water: sanitize::parse_amount(water),
            energy: sanitize::parse_amount(energy),
            gas: sanitize::parse_amount(gas),
        }
    }

    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Water => self.water,
            Metric::Energy => self.energy,
            Metric::Gas => self.gas,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.water == 0.0 && self.energy == 0.0 && self.gas == 0.0
    }
}

#[derive(Debug, Clone, Default)]
pub struct RawInputs {
    pub water: Option<String>,
    pub energy: Option<String>,
    pub gas: Option<String>,
}

impl RawInputs {
    pub fn reading(&self) -> ConsumptionReading {
        ConsumptionReading::from_raw(
            self.water.as_deref().unwrap_or(""),
            self.energy.as_deref().unwrap_or(""),
            self.gas.as_deref().unwrap_or(""),
        )
    }
}

pub fn evaluate_reading(reading: ConsumptionReading, cfg: &Config) -> FinalReport {
    log::debug!(
        "scoring reading water={} energy={} gas={}",
        reading.water,
        reading.energy,
        reading.gas
    );

    build_report(reading, score::score(reading), cfg)
}

pub fn build_report(
    reading: ConsumptionReading,
    evaluation: score::Evaluation,
    cfg: &Config,
) -> FinalReport {
    let exit = report::evaluate_exit(&evaluation, cfg);

    FinalReport {
        reading,
        evaluation,
        config: report::ConfigSummary {
            min_score: cfg.general.min_score,
        },
        exit,
    }
}
