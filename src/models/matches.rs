use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::enums::verdict::Verdict;
use crate::models::country::CountryInfo;

#[derive(Debug, Clone, Deserialize)]
pub struct ValidateRequest {
    pub matches: IndexMap<String, CountryInfo>,
    pub correct_matches: IndexMap<String, CountryInfo>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldFeedback {
    pub gdp: Verdict,
    pub flag: Verdict,
    pub top_export: Verdict,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryFeedback {
    pub score: u32,
    pub feedback: FieldFeedback,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidateResponse {
    pub total_score: u32,
    pub max_score: u32,
    pub feedback: IndexMap<String, CountryFeedback>,
}
