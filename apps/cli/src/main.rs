use std::{
    io::{self, BufRead, Write},
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use client_core::{
    load_settings, ActionOutcome, ContactTableController, PhoneBookClient, UpdateFields,
};
use shared::{domain::ContactId, protocol::NewContact};
use tracing_subscriber::EnvFilter;

mod view;

use view::TerminalView;

#[derive(Parser, Debug)]
#[command(name = "phonebook", about = "List, search and edit phone-book contacts")]
struct Cli {
    /// Base URL of the phone-book API; overrides phonebook.toml and environment.
    #[arg(long)]
    api_url: Option<String>,
    /// Accept a self-signed certificate (development servers).
    #[arg(long)]
    accept_invalid_certs: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show every contact ordered by id.
    List,
    /// Look up a contact by phone number; an empty query lists everything.
    Search {
        #[arg(default_value = "")]
        query: String,
    },
    Add {
        #[arg(long)]
        contact: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        address: String,
        #[arg(long)]
        city: String,
    },
    Update {
        #[arg(long)]
        id: String,
        #[arg(long)]
        contact: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        address: String,
        #[arg(long)]
        city: String,
    },
    Delete {
        id: i64,
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
    let cli = Cli::parse();

    let mut settings = load_settings();
    if let Some(api_url) = cli.api_url {
        settings.api_url = api_url;
    }
    settings.accept_invalid_certs |= cli.accept_invalid_certs;

    let client = PhoneBookClient::new(&settings).context("failed to configure api client")?;
    let view = TerminalView::new(io::stdout(), io::stderr());
    let mut controller = ContactTableController::new(client, view);

    let outcome = match cli.command {
        Command::List => controller.load_all().await,
        Command::Search { query } => controller.search_by_contact(&query).await,
        Command::Add {
            contact,
            name,
            address,
            city,
        } => {
            controller
                .add_contact(NewContact {
                    contact,
                    name,
                    address,
                    city,
                })
                .await
        }
        Command::Update {
            id,
            contact,
            name,
            address,
            city,
        } => {
            controller
                .update_contact(UpdateFields {
                    id,
                    contact,
                    name,
                    address,
                    city,
                })
                .await
        }
        Command::Delete { id, yes } => {
            controller.request_delete(ContactId(id));
            let confirmed = yes
                || (controller.view().confirmation_open() && prompt_confirmation(id)?);
            if confirmed {
                controller.confirm_delete().await
            } else {
                controller.cancel_delete();
                println!("Delete cancelled.");
                ActionOutcome::Skipped
            }
        }
    };

    Ok(if outcome.is_failure() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn prompt_confirmation(id: i64) -> Result<bool> {
    print!("Delete contact {id}? [y/N] ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_explicit_yes_confirms() {
        assert!(is_yes("y\n"));
        assert!(is_yes(" YES "));
        assert!(!is_yes("\n"));
        assert!(!is_yes("no"));
    }

    #[test]
    fn search_query_defaults_to_empty() {
        let cli = Cli::try_parse_from(["phonebook", "search"]).expect("parse");
        assert!(matches!(cli.command, Command::Search { query } if query.is_empty()));
    }

    #[test]
    fn update_takes_raw_id_text() {
        let cli = Cli::try_parse_from([
            "phonebook",
            "--api-url",
            "http://127.0.0.1:5000/api",
            "update",
            "--id",
            "abc",
            "--contact",
            "555",
            "--name",
            "n",
            "--address",
            "a",
            "--city",
            "c",
        ])
        .expect("parse");
        assert_eq!(cli.api_url.as_deref(), Some("http://127.0.0.1:5000/api"));
        assert!(matches!(cli.command, Command::Update { id, .. } if id == "abc"));
    }
}
