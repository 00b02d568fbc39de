//! CLI argument types with environment-variable fallbacks.
mod cli;
mod parsers;

#[cfg(test)]
mod tests;

pub use cli::{CrawlerArgs, GeneratorArgs};
