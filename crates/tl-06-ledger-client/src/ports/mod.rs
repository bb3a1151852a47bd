//! Ports Layer

pub mod outbound;

pub use outbound::{AccountReader, InstructionSubmitter, Signature};
