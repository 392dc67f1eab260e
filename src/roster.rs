use enum_map::Enum;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

use crate::player::Player;


pub const ROSTER_PREFIX: &str = "Players: ";


// Which of the two displayed lists a roster update addresses. Message intent
// is explicit in the payload rather than implied by connection identity.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Enum, EnumIter, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RosterKind {
    Joined,
    Left,
}


// The current list of players to display. Replaced wholesale on each update.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    pub fn new() -> Self { Roster::default() }

    pub fn players(&self) -> &[Player] { &self.players }

    // Full replacement: the server always sends the complete list, so there
    // is no incremental diff to apply.
    pub fn replace(&mut self, players: Vec<Player>) { self.players = players; }

    // Display string, e.g. "Players: a, b". An empty roster renders the bare
    // prefix with no trailing separator.
    pub fn render(&self) -> String {
        format!(
            "{}{}",
            ROSTER_PREFIX,
            self.players.iter().map(|p| p.username.as_str()).join(", ")
        )
    }
}
