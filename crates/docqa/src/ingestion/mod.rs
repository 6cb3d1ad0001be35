//! Document intake helpers: content-type resolution and upload naming

pub mod content_type;
mod naming;

pub use content_type::{is_supported, resolve, DocumentKind, OCTET_STREAM};
pub use naming::{timestamped_name, UploadItem};
