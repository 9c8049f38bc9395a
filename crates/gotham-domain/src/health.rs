//! Health snapshots - disease statistics, indicators, trials, nutrition

/// Global disease statistics
#[derive(Debug, Clone, PartialEq)]
pub struct DiseaseSnapshot {
    /// Total recorded cases
    pub cases: u64,
    /// Cases reported today
    pub today_cases: u64,
    /// Total deaths
    pub deaths: u64,
    /// Total recoveries
    pub recovered: u64,
    /// Currently active cases
    pub active: u64,
    /// Countries reporting
    pub affected_countries: u32,
    /// Provider update time (Unix epoch milliseconds)
    pub updated_ms: u64,
}

impl DiseaseSnapshot {
    /// Share of cases that recovered, in percent
    pub fn recovery_rate(&self) -> f64 {
        if self.cases == 0 {
            return 0.0;
        }
        self.recovered as f64 / self.cases as f64 * 100.0
    }
}

/// One value of a health indicator for a country and year
#[derive(Debug, Clone, PartialEq)]
pub struct HealthIndicator {
    /// Indicator code, e.g. "WHOSIS_000001"
    pub code: String,
    /// Country code
    pub country: String,
    /// Year of the observation
    pub year: i32,
    /// Observed value
    pub value: f64,
}

/// A clinical trial as listed in search results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialSummary {
    /// Registry id, e.g. "NCT01234567"
    pub nct_id: String,
    /// Short title
    pub title: String,
    /// Overall recruitment status
    pub status: String,
    /// Conditions studied
    pub conditions: Vec<String>,
}

/// Full detail of one clinical trial
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TrialDetail {
    /// Registry id
    pub nct_id: String,
    /// Short title
    pub brief_title: String,
    /// Official title
    pub official_title: Option<String>,
    /// Responsible organization
    pub organization: Option<String>,
    /// Overall status
    pub status: String,
    /// Start date as reported
    pub start_date: Option<String>,
    /// Completion date as reported
    pub completion_date: Option<String>,
    /// Study type
    pub study_type: Option<String>,
    /// Phases
    pub phases: Vec<String>,
    /// Enrollment count
    pub enrollment: Option<u64>,
    /// Primary purpose
    pub primary_purpose: Option<String>,
    /// Conditions studied
    pub conditions: Vec<String>,
    /// Brief summary
    pub summary: Option<String>,
    /// Lead sponsor
    pub lead_sponsor: Option<String>,
    /// Collaborators
    pub collaborators: Vec<String>,
}

/// A food product with nutrition per 100g
#[derive(Debug, Clone, PartialEq)]
pub struct FoodItem {
    /// Product name
    pub name: String,
    /// Brand, if listed
    pub brand: Option<String>,
    /// Energy in kcal
    pub energy_kcal: Option<f64>,
    /// Protein in grams
    pub protein_g: Option<f64>,
    /// Carbohydrates in grams
    pub carbs_g: Option<f64>,
    /// Fat in grams
    pub fat_g: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recovery_rate() {
        let snapshot = DiseaseSnapshot {
            cases: 200,
            today_cases: 0,
            deaths: 10,
            recovered: 150,
            active: 40,
            affected_countries: 3,
            updated_ms: 0,
        };
        assert!((snapshot.recovery_rate() - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_recovery_rate_without_cases() {
        let snapshot = DiseaseSnapshot {
            cases: 0,
            today_cases: 0,
            deaths: 0,
            recovered: 0,
            active: 0,
            affected_countries: 0,
            updated_ms: 0,
        };
        assert_eq!(snapshot.recovery_rate(), 0.0);
    }
}
