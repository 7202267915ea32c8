use indexmap::IndexMap;
use thiserror::Error;

use crate::enums::verdict::Verdict;
use crate::models::country::CountryInfo;
use crate::models::matches::{CountryFeedback, FieldFeedback, ValidateResponse};

pub const POINTS_PER_COUNTRY: u32 = 3;

#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("no answer for submitted country {0:?}")]
    UnknownCountry(String),
}

/// Scores each submitted triple field by field against the answer key.
///
/// Submitted countries are not checked against any round; the key is taken
/// as sent by the client.
pub fn score_matches(
    matches: &IndexMap<String, CountryInfo>,
    correct_matches: &IndexMap<String, CountryInfo>,
) -> Result<ValidateResponse, ScoreError> {
    let mut total_score = 0;
    let mut feedback = IndexMap::with_capacity(matches.len());

    for (country, claimed) in matches {
        let correct = correct_matches
            .get(country)
            .ok_or_else(|| ScoreError::UnknownCountry(country.clone()))?;

        let fields = FieldFeedback {
            gdp: Verdict::of(claimed.gdp == correct.gdp),
            flag: Verdict::of(claimed.flag == correct.flag),
            top_export: Verdict::of(claimed.top_export == correct.top_export),
        };
        let score = fields.gdp.points() + fields.flag.points() + fields.top_export.points();

        total_score += score;
        feedback.insert(
            country.clone(),
            CountryFeedback {
                score,
                feedback: fields,
            },
        );
    }

    Ok(ValidateResponse {
        total_score,
        max_score: POINTS_PER_COUNTRY * matches.len() as u32,
        feedback,
    })
}
