//! # Domain Layer
//!
//! Operation tags, argument layouts and limits. No derivation or I/O.

pub mod args;
pub mod errors;
pub mod limits;
pub mod operation;
pub mod request;

pub use args::{
    ApproveWorkArgs, CreateWorkItemArgs, InitializeArgs, RegisterActorArgs, RejectWorkArgs,
    SelectWinnerArgs, SubmitApplicationArgs, SubmitWorkArgs, UpdateActorArgs,
};
pub use errors::BuildError;
pub use operation::Operation;
pub use request::InstructionRequest;
