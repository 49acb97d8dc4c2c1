mod error;
mod vector;

pub use error::*;
pub use vector::*;
