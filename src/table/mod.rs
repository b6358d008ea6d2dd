mod decode;
mod types;

pub use decode::decode;
pub use types::{ResultTable, Row};
