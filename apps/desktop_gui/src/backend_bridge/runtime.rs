//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use anyhow::Context;
use client_core::{
    workflow, ActionOutcome, ClientSettings, ContactView, PhoneBookApi, PhoneBookClient,
};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::{commands::BackendCommand, view::ChannelView};
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

pub fn launch(settings: ClientSettings, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let _ = ui_tx.try_send(UiEvent::Info("Backend worker starting...".to_string()));
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::new(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        let _guard = runtime.enter();
        let client = match PhoneBookClient::new(&settings)
            .with_context(|| format!("cannot use api url '{}'", settings.api_url))
        {
            Ok(client) => Arc::new(client),
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::new(
                    UiErrorContext::BackendStartup,
                    format!("{err:#}"),
                )));
                tracing::error!("failed to configure api client: {err:#}");
                return;
            }
        };
        let _ = ui_tx.try_send(UiEvent::Info(format!(
            "Using phone-book api at {}",
            client.base_url()
        )));

        // One task per command so requests overlap.
        let view = ChannelView::new(ui_tx);
        while let Ok(cmd) = cmd_rx.recv() {
            let api = Arc::clone(&client);
            let mut view = view.clone();
            runtime.spawn(async move { run_command(api.as_ref(), &mut view, cmd).await });
        }
        tracing::info!("ui command channel closed; backend worker exiting");
    });
}

pub async fn run_command<A, V>(api: &A, view: &mut V, cmd: BackendCommand) -> ActionOutcome
where
    A: PhoneBookApi + ?Sized,
    V: ContactView + ?Sized,
{
    tracing::debug!(command = cmd.name(), "handling ui command");
    match cmd {
        BackendCommand::LoadAll => workflow::load_all(api, view).await,
        BackendCommand::Search { query } => workflow::search_by_contact(api, view, &query).await,
        BackendCommand::AddContact(fields) => workflow::add_contact(api, view, fields).await,
        BackendCommand::UpdateContact(fields) => workflow::update_contact(api, view, fields).await,
        BackendCommand::DeleteContact { id } => workflow::delete_contact(api, view, id).await,
    }
}

#[cfg(test)]
#[path = "../tests/runtime_tests.rs"]
mod tests;
