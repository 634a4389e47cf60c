pub mod image_grid;
pub mod panel;
pub mod preview;
pub mod tab_panel;

pub use panel::GalleryPanel;
