use std::sync::mpsc;

use gridlobby::client::{ClientState, NotableEvent};
use gridlobby::event::{ClientErrorReport, ClientEvent, ServerEvent};
use gridlobby::roster::RosterKind;
use gridlobby::test_util::sample_players;
use pretty_assertions::assert_eq;


fn new_client() -> (ClientState, mpsc::Receiver<ClientEvent>) {
    let (events_tx, events_rx) = mpsc::channel();
    (ClientState::new(events_tx), events_rx)
}

#[test]
fn roster_update_addresses_only_the_named_roster() {
    let (mut client, _rx) = new_client();
    let notable = client
        .process_server_event(ServerEvent::RosterUpdated {
            kind: RosterKind::Joined,
            players: sample_players(&["a"]),
        })
        .unwrap();
    assert_eq!(notable, NotableEvent::RosterUpdated(RosterKind::Joined));
    assert_eq!(client.roster(RosterKind::Joined).render(), "Players: a");
    assert_eq!(client.roster(RosterKind::Left).render(), "Players: ");
}

#[test]
fn roster_update_replaces_previous_content() {
    let (mut client, _rx) = new_client();
    for players in [sample_players(&["x"]), sample_players(&["y", "z"])] {
        client
            .process_server_event(ServerEvent::RosterUpdated { kind: RosterKind::Left, players })
            .unwrap();
    }
    assert_eq!(client.roster(RosterKind::Left).render(), "Players: y, z");
}

#[test]
fn pong_changes_nothing() {
    let (mut client, _rx) = new_client();
    let notable = client.process_server_event(ServerEvent::Pong).unwrap();
    assert_eq!(notable, NotableEvent::None);
    assert_eq!(client.roster(RosterKind::Joined).render(), "Players: ");
}

#[test]
fn ping_goes_out_through_the_event_channel() {
    let (mut client, rx) = new_client();
    client.send_ping();
    assert!(matches!(rx.try_recv(), Ok(ClientEvent::Ping)));
    assert!(rx.try_recv().is_err());
}

#[test]
fn error_reports_go_out_through_the_event_channel() {
    let (mut client, rx) = new_client();
    client.report_error(ClientErrorReport::UnknownError {
        message: "socket dropped".to_owned(),
    });
    match rx.try_recv() {
        Ok(ClientEvent::ReportError(ClientErrorReport::UnknownError { message })) => {
            assert_eq!(message, "socket dropped");
        }
        other => panic!("expected an error report, got {:?}", other),
    }
    assert!(rx.try_recv().is_err());
}

#[test]
fn parses_roster_frame_from_wire() {
    let frame =
        r#"{"RosterUpdated":{"kind":"joined","players":[{"username":"a"},{"username":"b"}]}}"#;
    let event: ServerEvent = serde_json::from_str(frame).unwrap();
    let (mut client, _rx) = new_client();
    client.process_server_event(event).unwrap();
    assert_eq!(client.roster(RosterKind::Joined).render(), "Players: a, b");
}

#[test]
fn malformed_frames_do_not_parse() {
    // The adapter drops these frames without touching the displayed roster.
    assert!(serde_json::from_str::<ServerEvent>("not json").is_err());
    assert!(serde_json::from_str::<ServerEvent>(r#"{"RosterUpdated":{"kind":"joined"}}"#).is_err());
    assert!(
        serde_json::from_str::<ServerEvent>(
            r#"{"RosterUpdated":{"kind":"banned","players":[]}}"#
        )
        .is_err()
    );
}
