pub mod mutation_policy;

pub use mutation_policy::{authorize_mutation, MutationDecision};
