mod category;
mod types;

pub use category::Category;
pub use types::*;
