//! Rosters used to make synthetic records look plausible

use rand::Rng;

const PLACES: &[&str] = &[
    "Ohio", "Nevada", "Oregon", "Texas", "Vermont", "Utah", "Maine", "Kansas", "Georgia",
    "Montana", "Idaho", "Alaska",
];

const MASCOTS: &[&str] = &[
    "wolves", "hawks", "stallions", "comets", "rangers", "giants", "foxes", "ravens", "bulls",
    "pilots", "otters", "vipers",
];

pub(crate) const SPORTS: &[&str] = &["Football", "Basketball", "Cricket", "Rugby", "Tennis"];

pub(crate) const STADIUMS: &[&str] = &[
    "Stadium A",
    "Stadium B",
    "Stadium C",
    "Riverside Park",
    "Harbour Arena",
];

fn pick<'a, R: Rng>(rng: &mut R, items: &[&'a str]) -> &'a str {
    items[rng.random_range(0..items.len())]
}

/// A team-style name such as "Ohio wolves"
pub(crate) fn team_name<R: Rng>(rng: &mut R) -> String {
    format!("{} {}", pick(rng, PLACES), pick(rng, MASCOTS))
}

pub(crate) fn sport<R: Rng>(rng: &mut R) -> String {
    pick(rng, SPORTS).to_string()
}

pub(crate) fn stadium<R: Rng>(rng: &mut R) -> String {
    pick(rng, STADIUMS).to_string()
}
