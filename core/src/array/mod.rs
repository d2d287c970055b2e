pub mod args;
pub mod array_lib;

pub use args::Arg;
pub use array_lib::ArrayLib;

#[cfg(test)]
mod args_test;
