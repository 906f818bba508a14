pub mod clustering;
pub mod components;
pub mod generator;
pub mod graph;
pub mod paths;

pub use generator::erdos_renyi;
pub use graph::{GraphError, SimpleGraph};
