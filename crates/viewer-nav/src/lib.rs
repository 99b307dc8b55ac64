//! Gallery navigation and the lightbox state machine.

pub mod keys;
pub mod lightbox;
pub mod nav;

pub use keys::LightboxKey;
pub use lightbox::{GalleryViewer, ViewerEvent, ViewerInput};
pub use nav::NavState;
