use super::*;

use std::future;

use axum::{
    extract::Path,
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use client_core::ClientSettings;
use crossbeam_channel::bounded;
use shared::domain::{Contact, ContactRow, Toast};
use tokio::net::TcpListener;

use crate::backend_bridge::runtime::launch;

const BASE_PATH: &str = "/api/PhoneBookConroller";

fn stored_contact() -> Contact {
    Contact {
        id: ContactId(1),
        contact: "555-0101".into(),
        name: "Anil".into(),
        address: "1 Market Road".into(),
        city: "Ahmedabad".into(),
    }
}

async fn stalled_get_all() -> Json<Vec<Contact>> {
    future::pending::<()>().await;
    Json(Vec::new())
}

async fn get_by_contact(Path(contact): Path<String>) -> Result<Json<Contact>, StatusCode> {
    let stored = stored_contact();
    if stored.contact == contact {
        Ok(Json(stored))
    } else {
        Err(StatusCode::NOT_FOUND)
    }
}

async fn delete_contact(Path(_id): Path<i64>) -> StatusCode {
    StatusCode::NO_CONTENT
}

/// Serves a phone book whose full listing never answers.
async fn spawn_stalling_server() -> String {
    let app = Router::new()
        .route(&format!("{BASE_PATH}/GetAll"), get(stalled_get_all))
        .route(&format!("{BASE_PATH}/GetByContact/:contact"), get(get_by_contact))
        .route(&format!("{BASE_PATH}/DeleteContact/:id"), delete(delete_contact));
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    format!("http://{addr}{BASE_PATH}")
}

fn launch_app(api_url: String) -> PhoneBookApp {
    let (cmd_tx, cmd_rx) = bounded(256);
    let (ui_tx, ui_rx) = bounded(2048);
    launch(
        ClientSettings {
            api_url,
            accept_invalid_certs: false,
        },
        cmd_rx,
        ui_tx,
    );
    PhoneBookApp::new(cmd_tx, ui_rx)
}

async fn wait_until(app: &mut PhoneBookApp, done: impl Fn(&TableState) -> bool) {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        app.process_ui_events();
        if done(&app.state) {
            return;
        }
        assert!(Instant::now() < deadline, "timed out; state: {:?}", app.state);
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn form_and_dialog_respond_while_initial_load_stalls() {
    let mut app = launch_app(spawn_stalling_server().await);

    app.toggle_form_mode(FormMode::Update);
    assert!(app.state.update_form_visible());
    assert!(!app.state.add_form_visible());

    app.request_delete(ContactId(1));
    assert!(app.state.confirmation_open);
    app.answer_confirmation(false);
    assert!(!app.state.confirmation_open);
    assert_eq!(app.session.pending_delete(), None);
}

#[tokio::test(flavor = "multi_thread")]
async fn search_completes_while_initial_load_stalls() {
    let mut app = launch_app(spawn_stalling_server().await);

    app.dispatch(BackendCommand::Search {
        query: "555-0101".into(),
    });
    wait_until(&mut app, |state| !state.rows.is_empty()).await;

    assert_eq!(app.state.rows, vec![ContactRow::new(stored_contact())]);
}

#[tokio::test(flavor = "multi_thread")]
async fn confirmed_delete_reaches_server_while_initial_load_stalls() {
    let mut app = launch_app(spawn_stalling_server().await);

    app.request_delete(ContactId(1));
    app.answer_confirmation(true);
    assert!(!app.state.confirmation_open);
    assert_eq!(app.session.pending_delete(), None);

    let deleted = Toast::success("Contact deleted!");
    wait_until(&mut app, |state| {
        state.toasts.iter().any(|active| active.toast == deleted)
    })
    .await;
}

#[test]
fn yes_without_pending_delete_sends_nothing() {
    let (cmd_tx, cmd_rx) = bounded(4);
    let (_ui_tx, ui_rx) = bounded(4);
    let mut app = PhoneBookApp::new(cmd_tx, ui_rx);
    assert_eq!(cmd_rx.try_recv().expect("initial load"), BackendCommand::LoadAll);

    app.answer_confirmation(true);
    assert!(cmd_rx.try_recv().is_err());
}
