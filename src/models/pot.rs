//! Seeding pots for the knockout draw.

use crate::models::team::TeamId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Pot label. Pot D holds the two best-ranked qualifiers, pot G the two weakest.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
pub enum PotId {
    D,
    E,
    F,
    G,
}

impl PotId {
    pub const ALL: [PotId; 4] = [PotId::D, PotId::E, PotId::F, PotId::G];
}

impl fmt::Display for PotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PotId::D => "D",
            PotId::E => "E",
            PotId::F => "F",
            PotId::G => "G",
        };
        f.write_str(label)
    }
}

/// Teams per pot.
pub const POT_SIZE: usize = 2;

/// Pots keyed by label. Built fresh for every tournament run.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Pots(pub BTreeMap<PotId, Vec<TeamId>>);

impl Pots {
    /// Teams in a pot, empty if the pot was never filled.
    pub fn get(&self, pot: PotId) -> &[TeamId] {
        self.0.get(&pot).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn insert(&mut self, pot: PotId, teams: Vec<TeamId>) {
        self.0.insert(pot, teams);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PotId, &Vec<TeamId>)> {
        self.0.iter()
    }
}
