//! Terminal front end for the todo list.
//!
//! Reads one command per line from stdin, sends it to the store and renders
//! the new snapshot.

use anyhow::Context;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use todolist::command::{Command, HELP};
use todolist::config::Config;
use todolist::view::TodoListView;
use todolist::{TodoEnvironment, TodoState, TodoStore, new_store};
use todolist_core::environment::SystemClock;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn render(store: &TodoStore, title: &str) {
    let state = store.snapshot();
    println!("{}", TodoListView::new(&state, title));
}

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_new(&config.log_filter)
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    todolist_runtime::metrics::register_metrics();
    tracing::info!(title = %config.title, filter = %config.initial_filter, "starting todolist");

    let env = TodoEnvironment::new(Arc::new(SystemClock));
    let store = new_store(
        TodoState::with_filter(config.initial_filter),
        env,
        config.store_config(),
    );

    render(&store, &config.title);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;

        match line.parse::<Command>() {
            Ok(Command::Dispatch(action)) => {
                if let Err(error) = store.send(action) {
                    tracing::error!(%error, "dispatch failed");
                }
                render(&store, &config.title);
            },
            Ok(Command::Show) => render(&store, &config.title),
            Ok(Command::Dump) => {
                let state = store.snapshot();
                println!("{}", serde_json::to_string_pretty(&*state)?);
            },
            Ok(Command::Help) => println!("{HELP}"),
            Ok(Command::Quit) => break,
            Err(error) => eprintln!("{error}"),
        }

        io::stdout().flush()?;
    }

    tracing::info!("bye");
    Ok(())
}
