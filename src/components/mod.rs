pub mod common;
pub mod emitter;
#[cfg(feature = "std")]
pub mod file;
pub mod parser;

#[cfg(test)]
mod tests;
