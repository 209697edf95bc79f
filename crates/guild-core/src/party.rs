//! Quest parties
//!
//! Random party selection and the quest success roll. All randomness comes
//! from the caller's [`GuildRng`].

use crate::attributes::Attribute;
use crate::hero::HeroRecord;
use crate::rng::GuildRng;
use crate::roster::Roster;

/// Lowest success chance a quest attempt can have (percent)
pub const MIN_SUCCESS_CHANCE: u32 = 5;
/// Highest success chance a quest attempt can have (percent)
pub const MAX_SUCCESS_CHANCE: u32 = 95;

/// Pick up to `size` distinct heroes at random
///
/// The party is returned in roster order. A size larger than the roster
/// yields the whole roster.
pub fn select_party<'a>(roster: &'a Roster, size: usize, rng: &mut GuildRng) -> Vec<&'a HeroRecord> {
    let mut indices: Vec<usize> = (0..roster.len()).collect();
    rng.shuffle(&mut indices);
    indices.truncate(size);
    indices.sort_unstable();

    let heroes: Vec<&HeroRecord> = roster.iter().collect();
    let party: Vec<&HeroRecord> = indices.into_iter().map(|i| heroes[i]).collect();
    log::debug!(
        "Selected party of {} from {} heroes (seed {})",
        party.len(),
        roster.len(),
        rng.seed()
    );
    party
}

/// Combined score of the party in one attribute
///
/// Summed as `i64`; scores have no upper bound.
pub fn party_power(party: &[&HeroRecord], attr: Attribute) -> i64 {
    party.iter().map(|h| i64::from(h.stat(attr))).sum()
}

/// Percent chance that the party succeeds against `difficulty`
///
/// `50 + power - difficulty`, held within 5..=95 so no quest is certain.
pub fn success_chance(party: &[&HeroRecord], attr: Attribute, difficulty: i32) -> u32 {
    let raw = 50 + party_power(party, attr) - i64::from(difficulty);
    raw.clamp(MIN_SUCCESS_CHANCE as i64, MAX_SUCCESS_CHANCE as i64) as u32
}

/// Roll a quest attempt
pub fn attempt(party: &[&HeroRecord], attr: Attribute, difficulty: i32, rng: &mut GuildRng) -> bool {
    let chance = success_chance(party, attr, difficulty);
    let success = rng.percent(chance);
    log::debug!(
        "Quest attempt on {} ({}% chance): {}",
        attr,
        chance,
        if success { "success" } else { "failure" }
    );
    success
}
