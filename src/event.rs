use serde::{Deserialize, Serialize};

use crate::player::Player;
use crate::roster::RosterKind;


// Server-to-client events. One JSON-encoded event per text frame.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum ServerEvent {
    // Full replacement of the addressed roster.
    RosterUpdated {
        kind: RosterKind,
        players: Vec<Player>,
    },
    Pong,
}


#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum ClientErrorReport {
    RustPanic { panic_info: String, backtrace: String },
    RustError { message: String },
    UnknownError { message: String },
}

// Client-to-server events. The page never acknowledges roster updates; the
// only outbound traffic is keepalives and error reports.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum ClientEvent {
    Ping,
    ReportError(ClientErrorReport),
}
