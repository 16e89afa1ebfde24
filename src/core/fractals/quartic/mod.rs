pub mod algorithm;

pub use algorithm::{QuarticAlgorithm, evaluate};
