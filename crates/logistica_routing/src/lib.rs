pub mod center;
mod constants;
pub mod error;
pub mod export;
pub mod graph;
pub mod matrix;
pub mod parsers;
pub mod routing;
pub mod shared;
mod stopwatch;
mod utils;
pub mod weather;

pub use constants::UNREACHABLE;

#[cfg(test)]
pub(crate) mod test_graph_utils;
