use dioxus::prelude::{use_signal, Signal};

use crate::domain::entities::edit::EditSession;
use crate::domain::entities::grid::EditableGrid;
use crate::domain::entities::upload::UploadGate;

pub const READY_STATUS: &str = "Ready";

pub struct AppState {
    pub grid: Signal<EditableGrid>,
    pub session: Signal<Option<EditSession>>,
    pub upload_gate: Signal<UploadGate>,
    pub file_name: Signal<Option<String>>,
    pub busy: Signal<bool>,
    pub status: Signal<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            grid: use_signal(EditableGrid::default),
            session: use_signal(|| None::<EditSession>),
            upload_gate: use_signal(UploadGate::default),
            file_name: use_signal(|| None::<String>),
            busy: use_signal(|| false),
            status: use_signal(|| READY_STATUS.to_string()),
        }
    }
}
