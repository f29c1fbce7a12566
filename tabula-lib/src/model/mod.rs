//! Record and field value types

mod record;
mod value;

pub use record::*;
pub use value::*;
