//! Dataset acquisition, image loading, and test-set enumeration

pub mod download;
pub mod image_loader;
pub mod test_set;

pub use download::{download_dataset, verify_layout, LayoutSummary};
pub use image_loader::{load_image, ImageInput};
pub use test_set::{class_name, labeled_samples, CLASS_NAMES};
