// Module declarations in dependency order
pub mod utils;
pub mod core;
pub mod processing;
pub mod host;
pub mod commands;
pub mod presence;
mod shell;

// Public exports for external consumers
pub use crate::core::{AppState, DimensionInput, Dimensions, PipelineConfig, RawResizeInput, ResizeOutcome, ResizeRequest};
pub use crate::processing::{FolderOpener, ImageCodec, ImageRsCodec, JobIntake, NotificationSink, ResizeExecutor};
pub use crate::utils::{CodecError, ResizeError, ResizeResult, ValidationError};

use tauri::Manager;
use tracing::{debug, info};
use crate::core::MAIN_WINDOW;

/// Builds and runs the desktop application.
pub fn run() {
    let app = tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .plugin(tauri_plugin_opener::init())
        .invoke_handler(tauri::generate_handler![commands::resize_image])
        .setup(|app| {
            let config = PipelineConfig::from_home()?;
            app.manage(AppState::new(app.handle().clone(), config));
            debug!("✓ AppState initialized");

            commands::listen_for_resize_events(app);
            debug!("✓ Listening for {} events", commands::RESIZE_EVENT);

            shell::install_menu(app)?;
            shell::configure_main_window(app, MAIN_WINDOW)?;

            presence::start(app);
            debug!("✓ Presence relay started");

            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application");

    info!("Starting application event loop...");
    app.run(|_app_handle, event| match event {
        #[cfg(target_os = "macos")]
        tauri::RunEvent::Reopen {
            has_visible_windows: false,
            ..
        } => {
            if let Err(e) = shell::restore_main_window(_app_handle, MAIN_WINDOW) {
                tracing::warn!("Failed to restore main window: {}", e);
            }
        }
        tauri::RunEvent::Exit => info!("Application exiting"),
        _ => {}
    });
}
