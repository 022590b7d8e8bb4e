//! Output formats for rendered trees

pub mod json;
pub mod markup;
pub mod registry;
pub mod treeviz;

pub use json::JsonFormatter;
pub use markup::MarkupFormatter;
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use treeviz::TreevizFormatter;
