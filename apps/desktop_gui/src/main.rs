mod backend_bridge;
mod controller;
mod ui;

use clap::Parser;
use client_core::load_settings;
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use backend_bridge::commands::BackendCommand;
use controller::events::UiEvent;
use ui::PhoneBookApp;

#[derive(Parser, Debug)]
#[command(name = "phonebook-gui", about = "Desktop phone-book contact manager")]
struct Args {
    /// Base URL of the phone-book API; overrides phonebook.toml and environment.
    #[arg(long)]
    api_url: Option<String>,
    /// Accept a self-signed certificate (development servers).
    #[arg(long)]
    accept_invalid_certs: bool,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();

    let mut settings = load_settings();
    if let Some(api_url) = args.api_url {
        settings.api_url = api_url;
    }
    settings.accept_invalid_certs |= args.accept_invalid_certs;
    tracing::info!(api_url = %settings.api_url, "starting phone-book gui");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    backend_bridge::runtime::launch(settings, cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Phone Book")
            .with_inner_size([1100.0, 680.0])
            .with_min_inner_size([760.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Phone Book",
        options,
        Box::new(|_cc| Ok(Box::new(PhoneBookApp::new(cmd_tx, ui_rx)))),
    )
}
