pub mod bitset;
pub mod executor;
pub mod propagation;
