pub mod fractal_algorithm;

pub use fractal_algorithm::FractalAlgorithm;
