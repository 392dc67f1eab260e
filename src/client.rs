use std::sync::mpsc;

use enum_map::{EnumMap, enum_map};
use log::debug;

use crate::event::{ClientErrorReport, ClientEvent, ServerEvent};
use crate::roster::{Roster, RosterKind};


// Tells the embedder which part of the page needs a re-render after an event
// was applied.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NotableEvent {
    None,
    RosterUpdated(RosterKind),
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum EventError {
    CannotApplyEvent(String),
}


// Client-side state. Holds one roster per kind; DOM and socket wiring live
// in the adapter crate.
pub struct ClientState {
    rosters: EnumMap<RosterKind, Roster>,
    events_tx: mpsc::Sender<ClientEvent>,
}

impl ClientState {
    pub fn new(events_tx: mpsc::Sender<ClientEvent>) -> Self {
        ClientState {
            rosters: enum_map! { _ => Roster::new() },
            events_tx,
        }
    }

    pub fn roster(&self, kind: RosterKind) -> &Roster { &self.rosters[kind] }

    pub fn send_ping(&mut self) { self.events_tx.send(ClientEvent::Ping).unwrap(); }

    pub fn report_error(&mut self, report: ClientErrorReport) {
        self.events_tx.send(ClientEvent::ReportError(report)).unwrap();
    }

    pub fn process_server_event(&mut self, event: ServerEvent) -> Result<NotableEvent, EventError> {
        use ServerEvent::*;
        match event {
            RosterUpdated { kind, players } => {
                debug!("Roster {:?} updated: {} player(s)", kind, players.len());
                self.rosters[kind].replace(players);
                Ok(NotableEvent::RosterUpdated(kind))
            }
            Pong => Ok(NotableEvent::None),
        }
    }
}
