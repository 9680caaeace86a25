use tauri::{
    menu::{
        IsMenuItem, Menu, MenuBuilder, MenuItem, PredefinedMenuItem, Submenu, SubmenuBuilder,
    },
    AppHandle, Manager, Wry,
};

use crate::{
    app_menu_handler, menu_actions,
    recent_menu::{RecentMenuEntry, NO_RECENT_FILES_LABEL},
    AppMenuState,
};

fn menu_item(
    app_handle: &AppHandle,
    id: impl AsRef<str>,
    text: &str,
    accelerator: Option<&str>,
) -> tauri::Result<MenuItem<Wry>> {
    MenuItem::with_id(app_handle, id.as_ref(), text, true, accelerator)
}

/// Installs the application menu and routes its events. The "Open Recent"
/// submenu starts empty and is filled by the document shell on startup.
pub fn setup_app_menu(app_handle: &AppHandle) -> Result<(), String> {
    let recent_submenu = Submenu::with_id(
        app_handle,
        menu_actions::MENU_OPEN_RECENT,
        "Open Recent",
        true,
    )
    .map_err(|error| format!("Failed to create recent files submenu: {error}"))?;

    let menu = build_app_menu(app_handle, &recent_submenu)
        .map_err(|error| format!("Failed to build application menu: {error}"))?;

    if !app_handle.manage(AppMenuState { recent_submenu }) {
        log::warn!("application menu state already exists, skipping manage");
    }

    app_handle
        .set_menu(menu)
        .map_err(|error| format!("Failed to install application menu: {error}"))?;
    app_handle.on_menu_event(|app, event| {
        app_menu_handler::handle_app_menu_event(app, event.id().as_ref())
    });
    Ok(())
}

fn build_app_menu(
    app_handle: &AppHandle,
    recent_submenu: &Submenu<Wry>,
) -> tauri::Result<Menu<Wry>> {
    let mut menu = MenuBuilder::new(app_handle);

    #[cfg(target_os = "macos")]
    {
        let app_submenu = SubmenuBuilder::new(app_handle, crate::APP_NAME)
            .item(&menu_item(
                app_handle,
                menu_actions::MENU_ABOUT,
                "About dia",
                None,
            )?)
            .separator()
            .item(&menu_item(
                app_handle,
                menu_actions::MENU_SETTINGS,
                "Settings...",
                Some("CmdOrCtrl+,"),
            )?)
            .separator()
            .item(&menu_item(
                app_handle,
                menu_actions::MENU_HIDE,
                "Hide dia",
                Some("CmdOrCtrl+H"),
            )?)
            .separator()
            .item(&menu_item(
                app_handle,
                menu_actions::MENU_QUIT,
                "Quit dia",
                Some("CmdOrCtrl+Q"),
            )?)
            .build()?;
        menu = menu.item(&app_submenu);
    }

    let mut file_submenu = SubmenuBuilder::new(app_handle, "File")
        .item(&menu_item(
            app_handle,
            menu_actions::MENU_FILE_NEW,
            "New",
            Some("CmdOrCtrl+N"),
        )?)
        .item(&menu_item(
            app_handle,
            menu_actions::MENU_FILE_OPEN,
            "Open...",
            Some("CmdOrCtrl+O"),
        )?)
        .item(recent_submenu)
        .separator()
        .item(&menu_item(
            app_handle,
            menu_actions::MENU_FILE_SAVE,
            "Save",
            Some("CmdOrCtrl+S"),
        )?)
        .item(&menu_item(
            app_handle,
            menu_actions::MENU_FILE_SAVE_AS,
            "Save As...",
            Some("CmdOrCtrl+Shift+S"),
        )?);
    if cfg!(not(target_os = "macos")) {
        file_submenu = file_submenu.separator().item(&menu_item(
            app_handle,
            menu_actions::MENU_QUIT,
            "Quit",
            Some("CmdOrCtrl+Q"),
        )?);
    }
    menu = menu.item(&file_submenu.build()?);

    let mut edit_submenu = SubmenuBuilder::new(app_handle, "Edit");
    if cfg!(not(target_os = "macos")) {
        edit_submenu = edit_submenu
            .item(&menu_item(
                app_handle,
                menu_actions::MENU_SETTINGS,
                "Settings...",
                Some("CmdOrCtrl+,"),
            )?)
            .separator();
    }
    let edit_submenu = edit_submenu
        .item(&PredefinedMenuItem::undo(app_handle, None)?)
        .item(&PredefinedMenuItem::redo(app_handle, None)?)
        .separator()
        .item(&PredefinedMenuItem::cut(app_handle, None)?)
        .item(&PredefinedMenuItem::copy(app_handle, None)?)
        .item(&PredefinedMenuItem::paste(app_handle, None)?)
        .item(&PredefinedMenuItem::select_all(app_handle, None)?)
        .build()?;
    menu = menu.item(&edit_submenu);

    let theme_items = menu_actions::THEMES
        .iter()
        .map(|(theme, label)| {
            menu_item(app_handle, menu_actions::theme_menu_id(theme), label, None)
        })
        .collect::<tauri::Result<Vec<_>>>()?;
    let theme_refs: Vec<&dyn IsMenuItem<Wry>> = theme_items
        .iter()
        .map(|item| item as &dyn IsMenuItem<Wry>)
        .collect();
    let theme_submenu = SubmenuBuilder::new(app_handle, "Theme")
        .items(&theme_refs)
        .build()?;
    let view_submenu = SubmenuBuilder::new(app_handle, "View")
        .item(&theme_submenu)
        .build()?;
    menu = menu.item(&view_submenu);

    if cfg!(not(target_os = "macos")) {
        let help_submenu = SubmenuBuilder::new(app_handle, "Help")
            .item(&menu_item(
                app_handle,
                menu_actions::MENU_ABOUT,
                "About dia",
                None,
            )?)
            .build()?;
        menu = menu.item(&help_submenu);
    }

    menu.build()
}

/// Replaces the contents of "Open Recent" with `entries`.
pub fn rebuild_recent_submenu(
    app_handle: &AppHandle,
    entries: &[RecentMenuEntry],
) -> Result<(), String> {
    let Some(menu_state) = app_handle.try_state::<AppMenuState>() else {
        return Ok(());
    };
    let submenu = &menu_state.recent_submenu;

    while submenu
        .remove_at(0)
        .map_err(|error| format!("Failed to clear recent files submenu: {error}"))?
        .is_some()
    {}

    for entry in entries {
        append_recent_entry(app_handle, submenu, entry)
            .map_err(|error| format!("Failed to append recent files entry: {error}"))?;
    }
    Ok(())
}

fn append_recent_entry(
    app_handle: &AppHandle,
    submenu: &Submenu<Wry>,
    entry: &RecentMenuEntry,
) -> tauri::Result<()> {
    match entry {
        RecentMenuEntry::OpenRecent { label, path } => submenu.append(&menu_item(
            app_handle,
            menu_actions::recent_file_menu_id(path),
            label,
            None,
        )?),
        RecentMenuEntry::NoRecentFiles => submenu.append(&MenuItem::with_id(
            app_handle,
            menu_actions::MENU_NO_RECENT_FILES,
            NO_RECENT_FILES_LABEL,
            false,
            None::<&str>,
        )?),
        RecentMenuEntry::Separator => submenu.append(&PredefinedMenuItem::separator(app_handle)?),
        RecentMenuEntry::ClearRecent => submenu.append(&menu_item(
            app_handle,
            menu_actions::MENU_CLEAR_RECENT,
            entry.label().unwrap_or_default(),
            None,
        )?),
    }
}
