use serde::{Deserialize, Serialize};


// A player as delivered by the server. No uniqueness invariant: duplicates
// and ordering are whatever the server sends.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Player {
    pub username: String,
}
