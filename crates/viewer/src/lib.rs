pub mod config;
pub mod dock;
pub mod index;
pub mod lines;
pub mod page;
pub mod plaintext;
pub mod position;

pub use config::PageConfig;
pub use dock::dock_preset;
pub use index::{IndexError, LineHandle, LineIndex, TableLines};
pub use page::{DeferredAction, PANEL_SETTLE_MS, PageState, REWRAP_SETTLE_MS};

// The measurement seam hosts implement; re-exported so embedding a viewer
// needs only this crate.
pub use layout::{Axis, Metrics};
