mod constructors;
mod crop;
mod fmt;
mod parse;
mod queries;
#[cfg(test)]
mod tests;

pub use constructors::*;
