pub mod auth;
pub mod author;
pub mod course;
pub mod topic;
