pub mod activation;
pub mod pointer;

pub use activation::{activate, wire_sources};
pub use pointer::{wire_input_handlers, InputWiring};
