//! pl - PeerLearn CLI
//!
//! Command-line client for the PeerLearn service. Prints every result as
//! JSON, compact by default and indented with `--pretty`.
//!
//! # Examples
//!
//! ```bash
//! # Create an account (logs in immediately)
//! pl register --email ada@example.org --password lovelace --first-name Ada --last-name Lovelace
//!
//! # Inspect the current session
//! pl whoami --pretty
//!
//! # Update the profile, browse the directory, connect
//! pl profile update --bio "Compilers and horses" --can-teach compilers
//! pl users list
//! pl connect 00000000-0000-0000-0000-000000000000
//! ```

use pl_cli::{
    Cli, CliClientResult, Client, Commands, ProfileCommands, SessionManager, SessionStore,
    UserCommands,
};

use std::process::ExitCode;

use clap::Parser;
use serde_json::{Value, json};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let store = match SessionStore::new() {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let client = Client::new(&cli.server);
    let mut session = SessionManager::new(client, store);

    match run_command(cli.command, &mut session).await {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(text) => {
                    println!("{}", text);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run_command(command: Commands, session: &mut SessionManager) -> CliClientResult<Value> {
    match command {
        Commands::Register {
            email,
            password,
            first_name,
            last_name,
        } => {
            session
                .register(&email, &password, &first_name, &last_name)
                .await
        }
        Commands::Login { email, password } => session.login(&email, &password).await,
        Commands::Logout => {
            session.logout()?;

            Ok(json!({ "state": session.state().as_str() }))
        }
        Commands::Whoami => {
            session.rehydrate().await?;
            let snapshot = session.snapshot();

            Ok(json!({
                "state": snapshot.state.as_str(),
                "user": snapshot.user,
            }))
        }
        Commands::Profile { action } => match action {
            ProfileCommands::Update {
                first_name,
                last_name,
                bio,
                can_teach,
                want_to_learn,
            } => {
                session.rehydrate().await?;
                session
                    .update_profile(
                        first_name.as_deref(),
                        last_name.as_deref(),
                        bio.as_deref(),
                        can_teach.as_deref(),
                        want_to_learn.as_deref(),
                    )
                    .await
            }
        },
        Commands::Users { action } => match action {
            UserCommands::List => session.client().list_users().await,
            UserCommands::Get { id } => session.client().get_user(&id).await,
        },
        Commands::Connect { target_id } => {
            session.rehydrate().await?;
            session.connect(&target_id).await
        }
    }
}
