//! Column names of the combined student lifestyle dataset and the category
//! accessors the dashboards share.

use super::Row;

pub const STUDENT_ID: &str = "Student_ID";
pub const STUDY_HOURS: &str = "Study_Hours_Per_Day";
pub const SLEEP_HOURS: &str = "Sleep_Hours_Per_Day";
pub const SOCIAL_HOURS: &str = "Social_Hours_Per_Day";
pub const ACTIVITY_HOURS: &str = "Physical_Activity_Hours_Per_Day";
pub const GPA: &str = "GPA";
pub const STRESS_LEVEL: &str = "Stress_Level";
pub const GENERATION: &str = "Generation";

const STRESS_FALLBACKS: [&str; 2] = [STRESS_LEVEL, "Stress"];
const GENERATION_FALLBACKS: [&str; 2] = [GENERATION, "Generation_Group"];

pub const DEFAULT_STRESS_LEVEL: &str = "Moderate";
pub const DEFAULT_GENERATION: &str = "Gen Z";

/// Time-use columns paired with the metric key used in legends.
pub const LIFESTYLE_METRIC_COLUMNS: [(&str, &str); 4] = [
    ("Study", STUDY_HOURS),
    ("Sleep", SLEEP_HOURS),
    ("Social", SOCIAL_HOURS),
    ("Activity", ACTIVITY_HOURS),
];

#[must_use]
pub fn stress_level(row: &Row) -> &str {
    row.first_text(&STRESS_FALLBACKS)
        .unwrap_or(DEFAULT_STRESS_LEVEL)
}

#[must_use]
pub fn generation(row: &Row) -> &str {
    row.first_text(&GENERATION_FALLBACKS)
        .unwrap_or(DEFAULT_GENERATION)
}

/// Column backing a lifestyle metric key such as `"Sleep"`.
#[must_use]
pub fn metric_column(metric: &str) -> Option<&'static str> {
    LIFESTYLE_METRIC_COLUMNS
        .iter()
        .find(|(key, _)| *key == metric)
        .map(|(_, column)| *column)
}
