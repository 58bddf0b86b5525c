//! Window and menu plumbing around the resize pipeline.

use tauri::menu::{AboutMetadata, Menu, PredefinedMenuItem, Submenu};
use tauri::App;

/// File menu plus an About entry (app menu on macOS, Help elsewhere).
pub fn install_menu(app: &App) -> tauri::Result<()> {
    let handle = app.handle();
    let about = PredefinedMenuItem::about(handle, Some("About"), Some(AboutMetadata::default()))?;
    let file = Submenu::with_items(
        handle,
        "File",
        true,
        &[
            &PredefinedMenuItem::close_window(handle, None)?,
            &PredefinedMenuItem::quit(handle, None)?,
        ],
    )?;

    #[cfg(target_os = "macos")]
    let menu = {
        let app_menu = Submenu::with_items(handle, &app.package_info().name, true, &[&about])?;
        Menu::with_items(handle, &[&app_menu, &file])?
    };

    #[cfg(not(target_os = "macos"))]
    let menu = {
        let help = Submenu::with_items(handle, "Help", true, &[&about])?;
        Menu::with_items(handle, &[&file, &help])?
    };

    app.set_menu(menu)?;
    Ok(())
}

/// Debug builds get a wider window with devtools open.
#[cfg_attr(not(debug_assertions), allow(unused_variables))]
pub fn configure_main_window(app: &App, label: &str) -> tauri::Result<()> {
    #[cfg(debug_assertions)]
    {
        use tauri::Manager;

        if let Some(window) = app.get_webview_window(label) {
            window.set_size(tauri::LogicalSize::new(1000.0, 600.0))?;
            window.open_devtools();
        }
    }
    Ok(())
}

/// Brings the main window back after the dock icon is clicked with none visible.
///
/// Closing the last window leaves the app running on macOS, so the window is
/// rebuilt from its `tauri.conf.json` entry when it no longer exists.
#[cfg(target_os = "macos")]
pub fn restore_main_window(handle: &tauri::AppHandle, label: &str) -> tauri::Result<()> {
    use tauri::{Manager, WebviewWindowBuilder};

    if let Some(window) = handle.get_webview_window(label) {
        window.show()?;
        return window.set_focus();
    }

    let config = handle
        .config()
        .app
        .windows
        .iter()
        .find(|window| window.label == label)
        .cloned()
        .unwrap_or_default();
    WebviewWindowBuilder::from_config(handle, &config)?.build()?;
    Ok(())
}
