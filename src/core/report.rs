use crate::config::Config;
use crate::core::score::{Category, Evaluation, ScoreResult, SubScores};
use crate::core::{ConsumptionReading, Metric, SAVINGS_TIPS};
use colored::Colorize;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Success,
    Info,
    Warning,
    Neutral,
}

impl Tone {
    fn paint(self, text: &str) -> String {
        match self {
            Self::Success => text.green().bold().to_string(),
            Self::Info => text.blue().bold().to_string(),
            Self::Warning => text.yellow().bold().to_string(),
            Self::Neutral => text.dimmed().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct DisplayMeta {
    pub tone: Tone,
    pub badge: &'static str,
    pub icon: &'static str,
}

pub fn display_for(evaluation: &Evaluation) -> DisplayMeta {
    match evaluation {
        Evaluation::NoData => DisplayMeta {
            tone: Tone::Neutral,
            badge: "Awaiting data",
            icon: "🌿",
        },
        Evaluation::Scored(result) => category_display(result.category),
    }
}

pub fn category_display(category: Category) -> DisplayMeta {
    match category {
        Category::Excellent => DisplayMeta {
            tone: Tone::Success,
            badge: "Sustainable consumption",
            icon: "↓",
        },
        Category::Good => DisplayMeta {
            tone: Tone::Info,
            badge: "On track",
            icon: "−",
        },
        Category::NeedsImprovement => DisplayMeta {
            tone: Tone::Warning,
            badge: "Attention needed",
            icon: "↑",
        },
    }
}

#[derive(Debug, Clone, Default)]
pub struct ExitStatus {
    pub failure: Option<String>,
}

impl ExitStatus {
    pub fn is_ok(&self) -> bool {
        self.failure.is_none()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfigSummary {
    pub min_score: u8,
}

#[derive(Debug, Clone)]
pub struct FinalReport {
    pub reading: ConsumptionReading,
    pub evaluation: Evaluation,
    pub config: ConfigSummary,
    pub exit: ExitStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct JsonReport {
    pub reading: ConsumptionReading,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_score: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_scores: Option<SubScores>,
    pub message: String,
    pub action_items: Vec<String>,
    pub display: DisplayMeta,
    pub config: ConfigSummary,
    pub ok: bool,
}

impl From<&FinalReport> for JsonReport {
    fn from(report: &FinalReport) -> Self {
        let display = display_for(&report.evaluation);
        let (status, result): (&'static str, Option<&ScoreResult>) = match &report.evaluation {
            Evaluation::NoData => ("no_data", None),
            Evaluation::Scored(result) => ("scored", Some(result)),
        };

        Self {
            reading: report.reading,
            status,
            total_score: result.map(|result| result.total_score),
            category: result.map(|result| result.category),
            sub_scores: result.map(|result| result.sub_scores),
            message: report.evaluation.message().to_string(),
            action_items: result
                .map(|result| result.action_items.clone())
                .unwrap_or_default(),
            display,
            config: report.config.clone(),
            ok: report.exit.is_ok(),
        }
    }
}

pub fn evaluate_exit(evaluation: &Evaluation, cfg: &Config) -> ExitStatus {
    let failure = evaluation
        .total_score()
        .filter(|score| *score < cfg.general.min_score)
        .map(|score| {
            format!(
                "score {} is below min_score {}",
                score, cfg.general.min_score
            )
        });

    ExitStatus { failure }
}

pub fn print_human(report: &FinalReport, cfg: &Config) {
    let display = display_for(&report.evaluation);

    match &report.evaluation {
        Evaluation::NoData => {
            println!("{} {}", display.icon, display.tone.paint(display.badge));
            println!("{}", report.evaluation.message());
        }
        Evaluation::Scored(result) => {
            println!(
                "Sustainability Score: {}/100 ({})",
                result.total_score, result.category
            );
            println!("{} {}", display.icon, display.tone.paint(display.badge));
            println!("{}", result.message);

            println!();
            println!("{} ({})", "ACTIONS".bold(), result.action_items.len());
            for item in &result.action_items {
                println!("-> {}", item);
            }
        }
    }

    if cfg.display.show_summary {
        println!();
        println!("{}", "TODAY".bold());
        for line in summary_lines(report) {
            println!("{}", line);
        }
    }

    if cfg.display.show_tips {
        println!();
        print_tips();
    }

    if let Some(failure) = &report.exit.failure {
        println!();
        println!("exit: FAILED ({})", failure);
    }
}

pub fn print_tips() {
    println!("{}", "SAVING TIPS".bold());
    for tip in SAVINGS_TIPS {
        println!("* {}", tip);
    }
}

fn summary_lines(report: &FinalReport) -> Vec<String> {
    let sub_scores = match &report.evaluation {
        Evaluation::Scored(result) => Some(result.sub_scores),
        Evaluation::NoData => None,
    };

    Metric::ALL
        .iter()
        .map(|metric| {
            let (low, high) = metric.typical_range();
            let score = sub_scores
                .map(|scores| format!(" [{}]", scores.get(*metric)))
                .unwrap_or_default();
            format!(
                "{:<7} {} {}{} (typical {}-{} {}/day, target {})",
                format!("{}:", metric),
                report.reading.get(*metric),
                metric.unit(),
                score,
                low,
                high,
                metric.unit(),
                metric.target()
            )
        })
        .collect()
}
