pub mod algo;
pub mod data;
pub mod evaluator;
pub mod solvers;
pub mod structs;

pub use fxhash::FxHashMap;
