use std::sync::Arc;

use anyhow::Context;
use dioxus::prelude::*;
use tracing::{debug, error, info, warn};

use crate::config::AppConfig;
use crate::domain::entities::edit::{CellKey, EditSession};
use crate::domain::entities::grid::EditableGrid;
use crate::domain::entities::sheet::{RowKey, SheetSnapshot};
use crate::infra::import::AutoWorkbookSource;
use crate::platform::blocking::run_blocking;
use crate::platform::picker::pick_spreadsheet;
use crate::ui::state::app_state::AppState;
use crate::ui::styles::{
    banner_style, cell_error_style, cell_input_style, cell_value_style, root_container_style,
    table_cell_style, table_container_style, table_header_cell_style, table_style, toolbar_style,
};
use crate::usecase::services::edit_service::{CommitOutcome, EditService};
use crate::usecase::services::import_service::ImportService;

pub(crate) fn import_upload(
    service: &ImportService,
    file_name: &str,
    bytes: &[u8],
) -> anyhow::Result<SheetSnapshot> {
    service
        .import_bytes(file_name, bytes)
        .with_context(|| format!("failed to open {file_name}"))
}

pub(crate) fn loaded_status(snapshot: &SheetSnapshot) -> String {
    format!(
        "Loaded {} rows x {} columns from \"{}\"",
        snapshot.rows.len(),
        snapshot.columns.len(),
        snapshot.sheet_name
    )
}

pub(crate) fn sheet_banner(file_name: &str, grid: &EditableGrid) -> String {
    match grid.sheet() {
        Some(sheet) => format!(
            "{file_name} · sheet \"{}\" (workbook sheets: {})",
            sheet.sheet_name,
            sheet.sheet_names.join(", ")
        ),
        None => file_name.to_string(),
    }
}

#[component]
pub fn App() -> Element {
    let config = use_hook(AppConfig::default);
    let AppState {
        mut grid,
        mut session,
        mut upload_gate,
        mut file_name,
        mut busy,
        mut status,
    } = AppState::new();

    let import_service = Arc::new(ImportService::new(
        Arc::new(AutoWorkbookSource),
        config.max_upload_bytes,
    ));
    let edit_service = Arc::new(EditService::new(config.field_rules()));
    let extensions = config.accepted_extensions.clone();

    let open_file = move |_: MouseEvent| {
        let import_service = import_service.clone();
        let extensions = extensions.clone();
        spawn(async move {
            let Some(selected) = pick_spreadsheet(&extensions).await else {
                debug!("file selection cancelled");
                return;
            };
            let ticket = upload_gate.write().begin();
            let name = selected.name.clone();
            info!(file = %name, "reading upload");
            busy.set(true);
            status.set(format!("Reading {name}"));

            let bytes = selected.read_bytes().await;
            if !upload_gate.peek().is_current(ticket) {
                // The newer upload still in flight clears `busy` when it finishes.
                warn!(file = %name, "discarding upload superseded by a newer selection");
                return;
            }

            match run_blocking(|| import_upload(&import_service, &name, &bytes)) {
                Ok(snapshot) => {
                    info!(
                        file = %name,
                        sheet = %snapshot.sheet_name,
                        rows = snapshot.rows.len(),
                        columns = snapshot.columns.len(),
                        "sheet loaded"
                    );
                    status.set(loaded_status(&snapshot));
                    session.set(None);
                    grid.write().load(snapshot);
                    file_name.set(Some(name));
                }
                Err(err) => {
                    error!(file = %name, "{err:#}");
                    status.set(format!("{err:#}"));
                }
            }
            if upload_gate.peek().is_current(ticket) {
                busy.set(false);
            }
        });
    };

    let add_row = move |_: MouseEvent| {
        let appended = grid.write().append_blank_row();
        match appended {
            Some(key) => {
                debug!(%key, "appended blank row");
                status.set(format!("Added row {key}"));
            }
            None => debug!("add row ignored: no sheet loaded"),
        }
    };

    let commit_edit = move |_: ()| {
        let Some(current) = session() else {
            return;
        };
        let outcome = edit_service.finish(&mut grid.write(), current);
        match &outcome {
            CommitOutcome::Saved { cell } => {
                debug!(key = %cell.row_key, column = %cell.column, "cell committed");
            }
            CommitOutcome::Rejected(open) => {
                warn!(
                    row = %open.cell.row_key,
                    column = %open.cell.column,
                    "save failed: {}",
                    open.error.as_deref().unwrap_or_default()
                );
            }
            CommitOutcome::Dropped { cell, error } => {
                error!(row = %cell.row_key, column = %cell.column, "edit dropped: {error}");
                status.set(format!("Edit dropped: {error}"));
            }
        }
        session.set(outcome.next_session().cloned());
    };

    let is_loaded = grid.read().is_loaded();
    let banner = file_name().map(|name| sheet_banner(&name, &grid.read()));

    rsx! {
        div { style: root_container_style(),
            div { style: toolbar_style(),
                button { r#type: "button", disabled: busy(), onclick: open_file, "Open spreadsheet" }
                button { r#type: "button", onclick: add_row, "Add row" }
                span { "{status}" }
            }
            if let Some(banner) = banner {
                div { style: banner_style(), "{banner}" }
            }
            if is_loaded {
                SheetTable { grid, session, on_commit: commit_edit }
            } else {
                p { "Choose a spreadsheet to start editing." }
            }
        }
    }
}

#[component]
fn SheetTable(
    grid: Signal<EditableGrid>,
    session: Signal<Option<EditSession>>,
    on_commit: EventHandler<()>,
) -> Element {
    let (columns, rows) = {
        let grid = grid.read();
        (grid.columns().to_vec(), grid.rows().to_vec())
    };

    rsx! {
        div { style: table_container_style(),
            table { style: table_style(),
                thead {
                    tr {
                        for column in columns.iter() {
                            th { key: "{column.name}", style: table_header_cell_style(), "{column.name}" }
                        }
                    }
                }
                tbody {
                    for row in rows.iter() {
                        tr { key: "{row.key}",
                            for column in columns.iter() {
                                EditableCell {
                                    key: "{column.name}",
                                    row_key: row.key,
                                    column: column.name.clone(),
                                    value: row.value(&column.name).to_string(),
                                    editable: column.editable,
                                    session,
                                    on_commit,
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn EditableCell(
    row_key: RowKey,
    column: String,
    value: String,
    editable: bool,
    mut session: Signal<Option<EditSession>>,
    on_commit: EventHandler<()>,
) -> Element {
    let cell = CellKey::new(row_key, column);
    let editing = match &*session.read() {
        Some(open) if open.is_for(&cell) => Some((open.buffer.clone(), open.error.clone())),
        _ => None,
    };

    match editing {
        Some((buffer, rejection)) => {
            let rejected = rejection.is_some();
            rsx! {
                td { style: table_cell_style(),
                    input {
                        style: cell_input_style(rejected),
                        value: "{buffer}",
                        onmounted: move |event| async move {
                            if let Err(err) = event.data().set_focus(true).await {
                                debug!(%row_key, "could not focus cell editor: {err:?}");
                            }
                        },
                        oninput: move |event| {
                            if let Some(open) = session.write().as_mut() {
                                open.set_buffer(event.value());
                            }
                        },
                        onkeydown: move |event| {
                            if event.key() == Key::Enter {
                                on_commit.call(());
                            } else if event.key() == Key::Escape {
                                session.set(None);
                            }
                        },
                        onblur: move |_| on_commit.call(()),
                    }
                    if let Some(message) = rejection.as_ref() {
                        div { style: cell_error_style(), "{message}" }
                    }
                }
            }
        }
        None => {
            let label = value.clone();
            rsx! {
                td { style: table_cell_style(),
                    div {
                        style: cell_value_style(),
                        onclick: move |_| {
                            if editable {
                                session.set(Some(EditSession::begin(cell.clone(), value.clone())));
                            }
                        },
                        "{label}"
                    }
                }
            }
        }
    }
}
