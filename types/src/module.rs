//! Curriculum module identifiers and classification.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable external key of a curriculum module.
///
/// The curriculum is fixed configuration data, so the slug is a closed enum:
/// an unknown module cannot flow past the parse boundary, and progress rows
/// referencing one deserialize to an error instead of a dangling key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModuleSlug {
    UnitMargin,
    Cac,
    Ltv,
    LtvCacRatio,
    Churn,
    PaybackPeriod,
    Arpu,
    Cohorts,
    KFactor,
    MrrGrowth,
    BurnRate,
    Freemium,
    B2bSalesCycle,
    UnitEconomicsCanvas,
    FinalCase,
}

const ALL_SLUGS: &[&str] = &[
    "unit-margin",
    "cac",
    "ltv",
    "ltv-cac-ratio",
    "churn",
    "payback-period",
    "arpu",
    "cohorts",
    "k-factor",
    "mrr-growth",
    "burn-rate",
    "freemium",
    "b2b-sales-cycle",
    "unit-economics-canvas",
    "final-case",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown module slug '{raw}'; expected one of: {expected:?}")]
pub struct SlugParseError {
    raw: String,
    expected: &'static [&'static str],
}

impl SlugParseError {
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub const fn expected(&self) -> &'static [&'static str] {
        self.expected
    }
}

impl ModuleSlug {
    /// Every module in catalogue order.
    #[must_use]
    pub const fn all() -> &'static [ModuleSlug] {
        &[
            ModuleSlug::UnitMargin,
            ModuleSlug::Cac,
            ModuleSlug::Ltv,
            ModuleSlug::LtvCacRatio,
            ModuleSlug::Churn,
            ModuleSlug::PaybackPeriod,
            ModuleSlug::Arpu,
            ModuleSlug::Cohorts,
            ModuleSlug::KFactor,
            ModuleSlug::MrrGrowth,
            ModuleSlug::BurnRate,
            ModuleSlug::Freemium,
            ModuleSlug::B2bSalesCycle,
            ModuleSlug::UnitEconomicsCanvas,
            ModuleSlug::FinalCase,
        ]
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ModuleSlug::UnitMargin => "unit-margin",
            ModuleSlug::Cac => "cac",
            ModuleSlug::Ltv => "ltv",
            ModuleSlug::LtvCacRatio => "ltv-cac-ratio",
            ModuleSlug::Churn => "churn",
            ModuleSlug::PaybackPeriod => "payback-period",
            ModuleSlug::Arpu => "arpu",
            ModuleSlug::Cohorts => "cohorts",
            ModuleSlug::KFactor => "k-factor",
            ModuleSlug::MrrGrowth => "mrr-growth",
            ModuleSlug::BurnRate => "burn-rate",
            ModuleSlug::Freemium => "freemium",
            ModuleSlug::B2bSalesCycle => "b2b-sales-cycle",
            ModuleSlug::UnitEconomicsCanvas => "unit-economics-canvas",
            ModuleSlug::FinalCase => "final-case",
        }
    }

    /// 1-based catalogue number, as shown in the course UI.
    #[must_use]
    pub const fn id(self) -> u32 {
        match self {
            ModuleSlug::UnitMargin => 1,
            ModuleSlug::Cac => 2,
            ModuleSlug::Ltv => 3,
            ModuleSlug::LtvCacRatio => 4,
            ModuleSlug::Churn => 5,
            ModuleSlug::PaybackPeriod => 6,
            ModuleSlug::Arpu => 7,
            ModuleSlug::Cohorts => 8,
            ModuleSlug::KFactor => 9,
            ModuleSlug::MrrGrowth => 10,
            ModuleSlug::BurnRate => 11,
            ModuleSlug::Freemium => 12,
            ModuleSlug::B2bSalesCycle => 13,
            ModuleSlug::UnitEconomicsCanvas => 14,
            ModuleSlug::FinalCase => 15,
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            ModuleSlug::UnitMargin => "Unit and Margin",
            ModuleSlug::Cac => "CAC: Cost of Entry",
            ModuleSlug::Ltv => "LTV: Lifetime Value",
            ModuleSlug::LtvCacRatio => "Ratio: The Golden Rule",
            ModuleSlug::Churn => "Churn: The Growth Killer",
            ModuleSlug::PaybackPeriod => "Payback: Recovery Time",
            ModuleSlug::Arpu => "ARPU: Average Check",
            ModuleSlug::Cohorts => "Cohorts: Deep Analysis",
            ModuleSlug::KFactor => "Virality: K-Factor",
            ModuleSlug::MrrGrowth => "MRR: The SaaS Engine",
            ModuleSlug::BurnRate => "Burn Rate: Cash on Fire",
            ModuleSlug::Freemium => "Freemium Monetization",
            ModuleSlug::B2bSalesCycle => "B2B: The Deal Cycle",
            ModuleSlug::UnitEconomicsCanvas => "The Economics Canvas",
            ModuleSlug::FinalCase => "Exam: The Final Case",
        }
    }

    #[must_use]
    pub const fn category(self) -> Category {
        match self {
            ModuleSlug::UnitMargin
            | ModuleSlug::LtvCacRatio
            | ModuleSlug::PaybackPeriod
            | ModuleSlug::BurnRate
            | ModuleSlug::B2bSalesCycle
            | ModuleSlug::UnitEconomicsCanvas
            | ModuleSlug::FinalCase => Category::Strategy,
            ModuleSlug::Cac => Category::Acquisition,
            ModuleSlug::Ltv | ModuleSlug::Arpu | ModuleSlug::MrrGrowth | ModuleSlug::Freemium => {
                Category::Revenue
            }
            ModuleSlug::Churn | ModuleSlug::Cohorts => Category::Retention,
            ModuleSlug::KFactor => Category::Referral,
        }
    }

    #[must_use]
    pub const fn level(self) -> Level {
        match self {
            ModuleSlug::UnitMargin | ModuleSlug::Cac | ModuleSlug::Arpu => Level::Base,
            ModuleSlug::Ltv
            | ModuleSlug::LtvCacRatio
            | ModuleSlug::Churn
            | ModuleSlug::PaybackPeriod => Level::Medium,
            ModuleSlug::Cohorts
            | ModuleSlug::KFactor
            | ModuleSlug::MrrGrowth
            | ModuleSlug::BurnRate
            | ModuleSlug::Freemium
            | ModuleSlug::B2bSalesCycle
            | ModuleSlug::UnitEconomicsCanvas
            | ModuleSlug::FinalCase => Level::Advanced,
        }
    }

    pub fn parse(raw: &str) -> Result<Self, SlugParseError> {
        let trimmed = raw.trim();
        Self::all()
            .iter()
            .copied()
            .find(|slug| slug.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| SlugParseError {
                raw: trimmed.to_string(),
                expected: ALL_SLUGS,
            })
    }
}

impl fmt::Display for ModuleSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Curriculum track a module belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Strategy,
    Acquisition,
    Revenue,
    Retention,
    Referral,
}

impl Category {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Strategy => "strategy",
            Category::Acquisition => "acquisition",
            Category::Revenue => "revenue",
            Category::Retention => "retention",
            Category::Referral => "referral",
        }
    }

    /// Badge text shown next to a module card.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Category::Strategy => "STRATEGY",
            Category::Acquisition => "ACQUISITION",
            Category::Revenue => "REVENUE",
            Category::Retention => "RETENTION",
            Category::Referral => "REFERRAL",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Difficulty tier of a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Level {
    Base = 1,
    Medium = 2,
    Advanced = 3,
}

impl Level {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Level::Base => "BASE",
            Level::Medium => "MEDIUM",
            Level::Advanced => "ADVANCED",
        }
    }

    /// Learner rank associated with the tier.
    #[must_use]
    pub const fn rank(self) -> &'static str {
        match self {
            Level::Base => "NOVICE",
            Level::Medium => "MANAGER",
            Level::Advanced => "STRATEGIST",
        }
    }
}
