pub mod counter;
pub mod particle;
pub mod reveal;
