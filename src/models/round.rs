use indexmap::IndexMap;
use serde::Serialize;

use crate::models::country::{CountryInfo, Gdp};

/// One round of the matching game.
///
/// The four columns have the same length but are shuffled independently, so
/// their positions do not line up. `correct_matches` is the answer key.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GameRound {
    pub countries: Vec<String>,
    pub gdps: Vec<Gdp>,
    pub flags: Vec<String>,
    pub exports: Vec<String>,
    pub correct_matches: IndexMap<String, CountryInfo>,
}
