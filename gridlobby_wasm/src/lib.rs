use std::cell::RefCell;
use std::sync::mpsc;

use gridlobby::client::{ClientState, NotableEvent};
use gridlobby::event::{ClientErrorReport, ClientEvent, ServerEvent};
use gridlobby::grid::GridModel;
use gridlobby::roster::RosterKind;
use strum::IntoEnumIterator;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

pub mod web_document;
pub mod web_element_ext;
pub mod web_error_handling;

use crate::web_document::web_document;
use crate::web_element_ext::WebElementExt;
use crate::web_error_handling::JsResult;


pub const DEFAULT_SERVER_URL: &str = "ws://localhost:8080";

const GRID_BODY_SELECTOR: &str = ".game-board tbody";


struct WebClient {
    state: ClientState,
    outgoing_rx: mpsc::Receiver<ClientEvent>,
}

// Mutable singleton: the client is single-threaded and callbacks need shared
// access to the state.
thread_local! {
    static CLIENT: RefCell<Option<WebClient>> = const { RefCell::new(None) };
}

fn with_client<T>(f: impl FnOnce(&mut WebClient) -> JsResult<T>) -> JsResult<T> {
    CLIENT.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let client = borrow.as_mut().ok_or_else(|| rust_error!("Client is not initialized"))?;
        f(client)
    })
}

fn console_log_error(err: &JsValue) { web_sys::console::error_1(err); }

fn report_if_error(result: JsResult<()>) {
    if let Err(err) = result {
        console_log_error(&err);
    }
}


// Page-ready entry point. Verifies all DOM anchors up front (better a clear
// diagnostic now than a lookup error from inside a message callback), renders
// the board and initializes both roster lines.
#[wasm_bindgen]
pub fn init_page() -> JsResult<()> {
    let document = web_document();
    let grid_body = document.query_selector_existing(GRID_BODY_SELECTOR)?;
    for kind in RosterKind::iter() {
        document.get_existing_element_by_id(roster_node_id(kind))?;
    }
    render_grid(&grid_body)?;
    let (outgoing_tx, outgoing_rx) = mpsc::channel();
    let state = ClientState::new(outgoing_tx);
    for kind in RosterKind::iter() {
        update_roster(&state, kind)?;
    }
    CLIENT.with(|cell| *cell.borrow_mut() = Some(WebClient { state, outgoing_rx }));
    Ok(())
}

// Opens the single server connection. Roster updates for both lists arrive
// here, multiplexed by the `kind` field of the payload.
#[wasm_bindgen]
pub fn connect(server_url: Option<String>) -> JsResult<()> {
    let url = server_url.unwrap_or_else(|| DEFAULT_SERVER_URL.to_owned());
    let socket = web_sys::WebSocket::new(&url)?;

    {
        let outgoing_socket = socket.clone();
        let onopen = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
            report_if_error(with_client(|client| {
                client.state.send_ping();
                Ok(())
            }));
            report_if_error(drain_outgoing(&outgoing_socket));
        });
        socket.set_onopen(Some(onopen.as_ref().unchecked_ref()));
        onopen.forget();
    }
    {
        let outgoing_socket = socket.clone();
        let onmessage = Closure::<dyn FnMut(web_sys::MessageEvent)>::new(
            move |event: web_sys::MessageEvent| {
                if let Some(frame) = event.data().as_string() {
                    on_server_frame(&frame);
                }
                report_if_error(drain_outgoing(&outgoing_socket));
            },
        );
        socket.set_onmessage(Some(onmessage.as_ref().unchecked_ref()));
        onmessage.forget();
    }
    {
        let onerror =
            Closure::<dyn FnMut(web_sys::ErrorEvent)>::new(move |event: web_sys::ErrorEvent| {
                let message = format!("WebSocket error: {}", event.message());
                console_log_error(&rust_error!("{}", message));
                // Queue a report for the server; it goes out with the next
                // drain once the connection is usable again.
                report_if_error(with_client(|client| {
                    client.state.report_error(ClientErrorReport::UnknownError { message });
                    Ok(())
                }));
            });
        socket.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        onerror.forget();
    }
    Ok(())
}

fn on_server_frame(frame: &str) {
    // Malformed frames are logged and dropped: the displayed rosters must not
    // be corrupted and the connection stays open.
    let event: ServerEvent = match serde_json::from_str(frame) {
        Ok(event) => event,
        Err(err) => {
            console_log_error(&rust_error!("Ignoring malformed server frame: {}", err));
            return;
        }
    };
    report_if_error(with_client(|client| {
        match client.state.process_server_event(event) {
            Ok(NotableEvent::RosterUpdated(kind)) => update_roster(&client.state, kind),
            Ok(NotableEvent::None) => Ok(()),
            Err(err) => {
                let message = format!("Cannot apply server event: {:?}", err);
                client.state.report_error(ClientErrorReport::RustError { message: message.clone() });
                Err(rust_error!("{}", message))
            }
        }
    }));
}

fn drain_outgoing(socket: &web_sys::WebSocket) -> JsResult<()> {
    with_client(|client| {
        while let Ok(event) = client.outgoing_rx.try_recv() {
            let frame = serde_json::to_string(&event)
                .map_err(|err| rust_error!("Cannot serialize client event: {}", err))?;
            socket.send_with_str(&frame)?;
        }
        Ok(())
    })
}

fn render_grid(grid_body: &web_sys::Element) -> JsResult<()> {
    grid_body.remove_all_children();
    let grid = GridModel::new();
    for row in grid.rows() {
        let tr = grid_body.append_new_element("tr")?;
        for cell in row {
            tr.append_new_element("td")?
                .with_id(&cell.dom_id())
                .with_classes([cell.shade().class_name()])?;
        }
    }
    Ok(())
}

fn update_roster(state: &ClientState, kind: RosterKind) -> JsResult<()> {
    web_document()
        .get_existing_element_by_id(roster_node_id(kind))?
        .with_text_content(&state.roster(kind).render());
    Ok(())
}

fn roster_node_id(kind: RosterKind) -> &'static str {
    match kind {
        RosterKind::Joined => "players-joined",
        RosterKind::Left => "players-left",
    }
}
