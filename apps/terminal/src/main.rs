mod commands;
mod config;
mod main_lib;
mod render;

use chrono::Local;
use tokio::io::{AsyncBufReadExt, BufReader};

use commands::Command;
use config::Config;
use main_lib::{action_for, build_environment, init_tracing};
use tickerwatch_core::{AppAction, Store};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing(&config.log_format);

    let env = build_environment(&config);
    let (store, handle) = Store::new(env);
    let store_task = tokio::spawn(store.run());

    let mut updates = handle.subscribe();
    let renderer = tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let state = updates.borrow_and_update().clone();
            println!("{}", render::render(&state, Local::now().date_naive()));
        }
    });

    handle.send(AppAction::DidFinishLaunching)?;
    println!("{}", render::render(&handle.state(), Local::now().date_naive()));
    println!("Type `help` for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match commands::parse(&line) {
            Ok(command) => command,
            Err(commands::CommandError::Empty) => continue,
            Err(e) => {
                eprintln!("{}", e);
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => println!("{}", commands::HELP),
            command => match action_for(command, &handle.state()) {
                Ok(action) => handle.send(action)?,
                Err(e) => eprintln!("{}", e),
            },
        }
    }

    drop(handle);
    store_task.await?;
    renderer.await?;
    tracing::info!("Bye");
    Ok(())
}
