//! Data types for the six-step analysis.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::analysis::prompts::{
    FEASIBILITY_TEMPLATE, FEATURES_TEMPLATE, MARKET_TEMPLATE, MVP_TEMPLATE, RISK_TEMPLATE,
    TIMELINE_TEMPLATE,
};

/// One analysis dimension. Variants are declared in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Feasibility,
    Market,
    Risk,
    Features,
    Mvp,
    Timeline,
}

impl Step {
    /// Every step, in the order a run executes them
    pub const ALL: [Step; 6] = [
        Step::Feasibility,
        Step::Market,
        Step::Risk,
        Step::Features,
        Step::Mvp,
        Step::Timeline,
    ];

    /// 1-based position in the run
    pub fn number(self) -> usize {
        match self {
            Step::Feasibility => 1,
            Step::Market => 2,
            Step::Risk => 3,
            Step::Features => 4,
            Step::Mvp => 5,
            Step::Timeline => 6,
        }
    }

    pub fn template(self) -> &'static str {
        match self {
            Step::Feasibility => FEASIBILITY_TEMPLATE,
            Step::Market => MARKET_TEMPLATE,
            Step::Risk => RISK_TEMPLATE,
            Step::Features => FEATURES_TEMPLATE,
            Step::Mvp => MVP_TEMPLATE,
            Step::Timeline => TIMELINE_TEMPLATE,
        }
    }

    /// Section title shown by the interactive front end
    pub fn title(self) -> &'static str {
        match self {
            Step::Feasibility => "FEASIBILITY ANALYSIS",
            Step::Market => "MARKET ANALYSIS",
            Step::Risk => "RISK IDENTIFICATION",
            Step::Features => "IDEA IMPROVEMENT & MVP FEATURE DEFINITION",
            Step::Mvp => "MVP ROADMAP (PHASED DEVELOPMENT)",
            Step::Timeline => "EXECUTION TIMELINE (12 WEEKS)",
        }
    }

    /// Shorter title used by the scripted front end
    pub fn short_title(self) -> &'static str {
        match self {
            Step::Feasibility => "FEASIBILITY ANALYSIS",
            Step::Market => "MARKET ANALYSIS",
            Step::Risk => "RISK IDENTIFICATION",
            Step::Features => "IDEA IMPROVEMENT & MVP FEATURES",
            Step::Mvp => "MVP ROADMAP",
            Step::Timeline => "EXECUTION TIMELINE",
        }
    }

    /// Line in the intro menu
    pub fn menu_label(self) -> &'static str {
        match self {
            Step::Feasibility => "Feasibility Analysis",
            Step::Market => "Market Analysis",
            Step::Risk => "Risk Identification",
            Step::Features => "Idea Improvement & MVP Design",
            Step::Mvp => "MVP Roadmap (Phases)",
            Step::Timeline => "Execution Timeline (12 weeks)",
        }
    }

    /// Used in "Error in <label>: ..." messages
    pub fn error_label(self) -> &'static str {
        match self {
            Step::Feasibility => "feasibility analysis",
            Step::Market => "market analysis",
            Step::Risk => "risk analysis",
            Step::Features => "feature generation",
            Step::Mvp => "MVP planning",
            Step::Timeline => "timeline generation",
        }
    }

    /// Field name inside a saved report's `analysis` object
    pub fn report_key(self) -> &'static str {
        match self {
            Step::Feasibility => "feasibility",
            Step::Market => "market",
            Step::Risk => "risks",
            Step::Features => "features",
            Step::Mvp => "mvp",
            Step::Timeline => "timeline",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.report_key())
    }
}

/// The six raw model responses of one complete run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResults {
    pub feasibility: String,
    pub market: String,
    pub risks: String,
    pub features: String,
    pub mvp: String,
    pub timeline: String,
}

impl AnalysisResults {
    pub fn get(&self, step: Step) -> &str {
        match step {
            Step::Feasibility => &self.feasibility,
            Step::Market => &self.market,
            Step::Risk => &self.risks,
            Step::Features => &self.features,
            Step::Mvp => &self.mvp,
            Step::Timeline => &self.timeline,
        }
    }

    pub fn set(&mut self, step: Step, text: String) {
        let slot = match step {
            Step::Feasibility => &mut self.feasibility,
            Step::Market => &mut self.market,
            Step::Risk => &mut self.risks,
            Step::Features => &mut self.features,
            Step::Mvp => &mut self.mvp,
            Step::Timeline => &mut self.timeline,
        };
        *slot = text;
    }
}
