pub mod conversion;
pub mod definition;
pub mod kind;
pub mod payload;

pub use conversion::*;
pub use definition::*;
pub use kind::*;
pub use payload::*;
