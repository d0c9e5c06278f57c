// Data Models
pub mod file_entry;
pub mod pane_state;

pub use file_entry::{FileEntry, FileType};
pub use pane_state::{PaneState, PaneStatus};
