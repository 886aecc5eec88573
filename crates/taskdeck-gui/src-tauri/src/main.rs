mod commands;
mod state;

use anyhow::Context;
use tracing::{error, info, warn};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info,taskdeck_gui_tauri=debug,taskdeck_core=debug"))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_line_number(true))
        .try_init();
}

fn main() {
    init_tracing();

    info!("starting Taskdeck backend");

    let state = match state::AppState::new().context("failed to initialize app state") {
        Ok(state) => state,
        Err(err) => {
            error!(error = %err, "initialization failed");
            std::process::exit(1);
        }
    };

    tauri::Builder::default()
        .setup(|app| {
            install_signal_handlers(app.handle().clone());
            Ok(())
        })
        .manage(state)
        .invoke_handler(tauri::generate_handler![
            commands::tasks_list,
            commands::tasks_list_by_status,
            commands::tasks_list_by_priority,
            commands::task_create,
            commands::task_update,
            commands::task_delete,
            commands::task_toggle,
            commands::ui_log,
        ])
        .run(tauri::generate_context!())
        .expect("error while running Taskdeck backend");
}

fn install_signal_handlers(app_handle: tauri::AppHandle) {
    tauri::async_runtime::spawn(async move {
        wait_for_shutdown_signal().await;
        warn!("received shutdown signal; exiting application");
        app_handle.exit(0);
    });
}

#[cfg(unix)]
async fn wait_for_shutdown_signal() {
    use tokio::signal::unix::{SignalKind, signal};

    let sigint = signal(SignalKind::interrupt());
    let sigterm = signal(SignalKind::terminate());

    match (sigint, sigterm) {
        (Ok(mut sigint), Ok(mut sigterm)) => {
            tokio::select! {
                _ = sigint.recv() => {}
                _ = sigterm.recv() => {}
            }
        }
        (sigint, sigterm) => {
            if let Err(error) = sigint.and(sigterm) {
                error!(%error, "failed to register signal handlers; falling back to ctrl_c");
            }
            let _ = tokio::signal::ctrl_c().await;
        }
    }
}

#[cfg(not(unix))]
async fn wait_for_shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        error!(%error, "failed waiting for ctrl_c signal");
    }
}
