pub mod quartic;
