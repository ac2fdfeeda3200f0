pub mod ast;
pub mod codegen;
pub mod errors;
pub mod orchestrator;
pub mod resolver;
