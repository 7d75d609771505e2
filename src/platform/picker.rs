use rfd::{AsyncFileDialog, FileHandle};

/// A file chosen in the picker whose bytes have not been read yet.
pub struct SelectedFile {
    pub name: String,
    handle: FileHandle,
}

impl SelectedFile {
    pub async fn read_bytes(self) -> Vec<u8> {
        self.handle.read().await
    }
}

/// Opens the platform file picker. `None` when the user cancels.
pub async fn pick_spreadsheet(extensions: &[String]) -> Option<SelectedFile> {
    let handle = AsyncFileDialog::new()
        .add_filter("Spreadsheet", extensions)
        .add_filter("All files", &["*"])
        .pick_file()
        .await?;
    Some(SelectedFile {
        name: handle.file_name(),
        handle,
    })
}
