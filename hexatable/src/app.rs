use crate::events::EventState;
use crate::ui_popup::Popup;
use hexatablelib::HexTable;
use std::cell::RefCell;
use std::rc::Rc;

/// Container identity of the single hex view. Row ids and scroll state are
/// keyed by it.
pub const TABLE_ID: &str = "hexatable";

pub mod colors {
    use eframe::egui::Color32;

    pub const LIGHT_BLUE: Color32 = Color32::from_rgba_premultiplied(33, 81, 109, 20);
    pub const GRAY_160: Color32 = Color32::from_gray(160);
    pub const GRAY_210: Color32 = Color32::from_gray(210);
    pub const SHADOW: Color32 = Color32::from_black_alpha(150);
}

pub struct ViewSession {
    /// Name of the session (filename or pasted-payload label)
    pub name: String,
    /// Rendered table model returned by `hexatablelib`
    pub table: HexTable,
    /// Payload offset of the byte pair under the cursor
    pub hovered: Option<usize>,
}

pub struct ViewerApp {
    /// Currently open session, if any. Opening a payload replaces it.
    pub session: Option<ViewSession>,
    /// Pop up handler
    pub popup: Popup,

    // -- Shared UI states
    /// Per-frame state of user inputs
    pub events: Rc<RefCell<EventState>>,
    /// Errors during file reading or payload decoding
    pub error: Rc<RefCell<Option<String>>>,
}

impl Default for ViewerApp {
    fn default() -> Self {
        Self {
            session: None,
            popup: Popup::default(),
            events: Rc::new(RefCell::new(EventState::default())),
            error: Rc::new(RefCell::new(None)),
        }
    }
}

impl ViewSession {
    pub(crate) fn open(name: impl Into<String>, table: HexTable) -> Self {
        Self {
            name: name.into(),
            table,
            hovered: None,
        }
    }
}
