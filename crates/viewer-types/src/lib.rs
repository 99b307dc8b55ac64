pub mod types;

pub use types::{Counter, FALLBACK_TITLE, Gallery, ImageRef, ViewerState};
