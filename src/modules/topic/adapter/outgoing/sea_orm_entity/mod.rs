pub mod answers;
pub mod topics;
