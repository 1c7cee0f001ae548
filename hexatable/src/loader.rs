use crate::app::{TABLE_ID, ViewSession, ViewerApp};
use hexatablelib::{DEFAULT_MEDIA_TYPE, HexTable};
use std::path::PathBuf;

impl ViewerApp {
    /// Read a file from disk and open it as the current session, replacing
    /// any previous one. Failures keep the previous session and surface
    /// through the error popup.
    pub(crate) fn load_file(&mut self, path: &PathBuf) {
        let data = match std::fs::read(path) {
            Ok(data) => data,
            Err(err) => {
                self.error.borrow_mut().replace(err.to_string());
                return;
            }
        };

        // A zero-row table is indistinguishable from a failed load on screen,
        // so refuse empty files with a message instead
        if data.is_empty() {
            self.error
                .borrow_mut()
                .replace(format!("File is empty: {}", path.display()));
            return;
        }

        let name = path.file_name().map_or_else(
            || "Untitled".to_string(),
            |n| n.to_string_lossy().into_owned(),
        );

        self.session = Some(ViewSession::open(name, HexTable::from_raw(TABLE_ID, &data)));
    }

    /// Decode a pasted base64 payload and open it as the current session.
    /// On decode failure the previous session stays and the error is shown.
    pub(crate) fn load_base64(&mut self, text: &str, media_type: &str) {
        let media_type = if media_type.is_empty() {
            DEFAULT_MEDIA_TYPE
        } else {
            media_type
        };

        match HexTable::from_base64(TABLE_ID, text) {
            Ok(table) => {
                self.session = Some(ViewSession::open(
                    "pasted payload",
                    table.with_media_type(media_type),
                ));
            }
            Err(err) => {
                self.error.borrow_mut().replace(err.to_string());
            }
        }
    }

    /// Close the open session, if any.
    pub(crate) fn close_session(&mut self) {
        self.session = None;
    }
}
