use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

use crate::enums::difficulty::Difficulty;
use crate::models::country::CountryData;
use crate::models::round::GameRound;

pub const DEFAULT_ROUND_SIZE: usize = 5;

/// Keeps the countries eligible for `difficulty`. Tiers with a threshold
/// drop every country whose GDP is not a number.
pub fn filter_by_difficulty(data: &CountryData, difficulty: Difficulty) -> CountryData {
    let Some(threshold) = difficulty.gdp_threshold() else {
        return data.clone();
    };

    data.iter()
        .filter(|(_, info)| info.gdp.amount().is_some_and(|gdp| gdp > threshold))
        .map(|(country, info)| (country.clone(), info.clone()))
        .collect()
}

/// Draws up to `count` eligible countries and lays their attributes out in
/// four columns, each shuffled on its own.
pub fn generate_round<R>(
    data: &CountryData,
    difficulty: Difficulty,
    count: usize,
    rng: &mut R,
) -> GameRound
where
    R: Rng + ?Sized,
{
    let eligible = filter_by_difficulty(data, difficulty);
    if eligible.is_empty() {
        return GameRound::default();
    }

    let names: Vec<&String> = eligible.keys().collect();
    let mut countries: Vec<String> = names
        .choose_multiple(rng, count.min(names.len()))
        .map(|name| (*name).clone())
        .collect();

    let mut gdps = Vec::with_capacity(countries.len());
    let mut flags = Vec::with_capacity(countries.len());
    let mut exports = Vec::with_capacity(countries.len());
    for country in &countries {
        let info = &eligible[country];
        gdps.push(info.gdp.clone());
        flags.push(info.flag.clone());
        exports.push(info.top_export.clone());
    }

    // Independent shuffles; the player has to rebuild the rows.
    countries.shuffle(rng);
    gdps.shuffle(rng);
    flags.shuffle(rng);
    exports.shuffle(rng);

    let correct_matches = countries
        .iter()
        .map(|country| (country.clone(), eligible[country].clone()))
        .collect();

    GameRound {
        countries,
        gdps,
        flags,
        exports,
        correct_matches,
    }
}
