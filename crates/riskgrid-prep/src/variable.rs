//! Survey variables, alternate-spelling key resolution, and the fixed
//! comparison pairs
//!
//! The two source tables never agree on column spelling across exports
//! (`stress_level`, `"Stress level"`, `StressLevel`, …), so every logical
//! variable carries an ordered candidate list and resolution picks the
//! first spelling present in a dataset's schema sample. A variable whose
//! spellings are all absent degrades to an entirely-null column; resolution
//! is diagnosable via [`KeyResolution`] but never an error.

use derive_more::Display;

use crate::table::Row;

/// Whether high values of a variable are assumed harmful or beneficial to
/// the modeled wellbeing outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// High values harm the outcome (stress, long work weeks).
    Risk,
    /// High values support the outcome (sleep, support, satisfaction).
    Protective,
}

/// A logical survey variable: stable id, alternate column spellings, and
/// risk/protective classification.
pub trait SurveyVariable: Copy {
    /// Stable logical column id (also the first resolution candidate).
    fn id(self) -> &'static str;

    /// Ordered candidate spellings, the logical id first.
    fn candidate_keys(self) -> &'static [&'static str];

    /// Risk/protective classification for the directional scoring model.
    fn direction(self) -> Direction;
}

/// Variables sourced from the lifestyle (social) dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SocialVariable {
    #[display("Social support")]
    SocialSupport,
    #[display("Stress level")]
    StressLevel,
    #[display("Sleep hours")]
    SleepHours,
}

impl SocialVariable {
    /// All social variables, in declaration order.
    pub const ALL: [Self; 3] = [Self::SocialSupport, Self::StressLevel, Self::SleepHours];
}

impl SurveyVariable for SocialVariable {
    fn id(self) -> &'static str {
        match self {
            Self::SocialSupport => "social_support",
            Self::StressLevel => "stress_level",
            Self::SleepHours => "sleep_hours",
        }
    }

    fn candidate_keys(self) -> &'static [&'static str] {
        match self {
            Self::SocialSupport => &["social_support", "Social support", "support", "SocialSupport"],
            Self::StressLevel => &["stress_level", "Stress level", "stress", "StressLevel"],
            Self::SleepHours => &["sleep_hours", "Sleep hours", "sleep", "SleepHours"],
        }
    }

    fn direction(self) -> Direction {
        match self {
            Self::StressLevel => Direction::Risk,
            Self::SocialSupport | Self::SleepHours => Direction::Protective,
        }
    }
}

/// Variables sourced from the workplace dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum WorkVariable {
    #[display("Work-life balance")]
    WorkLifeBalance,
    #[display("Work hours/week")]
    WorkHoursWeek,
    #[display("Job satisfaction")]
    JobSatisfaction,
    #[display("Career growth")]
    CareerGrowth,
}

impl WorkVariable {
    /// All workplace variables, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::WorkLifeBalance,
        Self::WorkHoursWeek,
        Self::JobSatisfaction,
        Self::CareerGrowth,
    ];
}

impl SurveyVariable for WorkVariable {
    fn id(self) -> &'static str {
        match self {
            Self::WorkLifeBalance => "work_life_balance",
            Self::WorkHoursWeek => "work_hours_week",
            Self::JobSatisfaction => "job_satisfaction",
            Self::CareerGrowth => "career_growth",
        }
    }

    fn candidate_keys(self) -> &'static [&'static str] {
        match self {
            Self::WorkLifeBalance => &["work_life_balance", "worklifebalance", "WorkLifeBalanceScore"],
            Self::WorkHoursWeek => &[
                "work_hours_week",
                "work_hours",
                "work_hours_per_week",
                "hours_worked_per_week",
            ],
            Self::JobSatisfaction => &["job_satisfaction", "JobSatisfaction", "job_satisfaction_score"],
            Self::CareerGrowth => &["career_growth", "CareerGrowth", "career_growth_score"],
        }
    }

    fn direction(self) -> Direction {
        match self {
            Self::WorkHoursWeek => Direction::Risk,
            Self::WorkLifeBalance | Self::JobSatisfaction | Self::CareerGrowth => {
                Direction::Protective
            }
        }
    }
}

/// One row-variable × column-variable comparison.
#[derive(Debug, Clone, Copy)]
pub struct VariablePair {
    /// Row axis, resolved against the lifestyle dataset.
    pub social: SocialVariable,
    /// Column axis, resolved against the workplace dataset.
    pub work: WorkVariable,
    /// Human-readable heatmap title.
    pub title: &'static str,
}

/// The complete, fixed set of comparisons the pipeline produces, in output
/// order.
pub const FIXED_PAIRS: [VariablePair; 4] = [
    VariablePair {
        social: SocialVariable::SocialSupport,
        work: WorkVariable::WorkLifeBalance,
        title: "Social support × Work-life balance",
    },
    VariablePair {
        social: SocialVariable::StressLevel,
        work: WorkVariable::WorkHoursWeek,
        title: "Stress level × Work hours/week",
    },
    VariablePair {
        social: SocialVariable::StressLevel,
        work: WorkVariable::JobSatisfaction,
        title: "Stress level × Job satisfaction",
    },
    VariablePair {
        social: SocialVariable::SleepHours,
        work: WorkVariable::CareerGrowth,
        title: "Sleep hours × Career growth",
    },
];

/// Outcome of resolving a logical variable against a dataset schema.
///
/// `Missing` is not an error: it records that every candidate spelling was
/// absent and the column will read as entirely null. [`Self::column`] is the
/// silent-degradation accessor callers use to keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResolution {
    /// A candidate spelling was found in the schema sample.
    Present(&'static str),
    /// No candidate matched; carries the logical id as the fallback column.
    Missing(&'static str),
}

impl KeyResolution {
    /// The column name to read, found or fallback.
    #[must_use]
    pub fn column(self) -> &'static str {
        match self {
            Self::Present(key) | Self::Missing(key) => key,
        }
    }

    /// Returns `true` if a candidate spelling was actually present.
    #[must_use]
    pub fn is_present(self) -> bool {
        matches!(self, Self::Present(_))
    }
}

/// Resolves a variable's actual column name against a schema sample row.
pub fn resolve_key<V>(schema: &Row, variable: V) -> KeyResolution
where
    V: SurveyVariable,
{
    variable
        .candidate_keys()
        .iter()
        .copied()
        .find(|key| schema.contains_column(key))
        .map_or(KeyResolution::Missing(variable.id()), KeyResolution::Present)
}

/// Accepted spellings of the grouping column, in resolution order.
pub const COUNTRY_KEYS: [&str; 2] = ["country", "Country"];

/// Resolves the grouping column against a schema sample row, if present.
pub fn resolve_country_key(schema: &Row) -> Option<&'static str> {
    COUNTRY_KEYS
        .iter()
        .copied()
        .find(|key| schema.contains_column(key))
}
