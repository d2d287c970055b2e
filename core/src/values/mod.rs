pub mod slot;
pub mod value;

pub use slot::Slot;
pub use value::Value;
