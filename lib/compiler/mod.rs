mod code;
mod compiler;
mod vm;

pub use code::{Instruction, Instructions, Opcode};
pub use compiler::{is_number_literal, Compiler};
pub use vm::VirtualMachine;
