pub mod conversion;
pub mod definition;
pub mod editor;

pub use conversion::*;
pub use definition::*;
pub use editor::*;
