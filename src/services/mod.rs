pub mod extractor;
pub mod fetch;
pub mod session;

pub use extractor::*;
pub use fetch::*;
pub use session::*;
