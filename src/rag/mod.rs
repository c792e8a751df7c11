mod assembler;

pub use assembler::{ContextAssembler, ContextAssemblerConfig};
