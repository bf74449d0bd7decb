use crate::author::application::domain::entities::{Author, AuthorId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationDecision {
    Allowed,
    DeniedNotOwner,
    DeniedOrphanAuthor,
}

/// Decides whether `actor` may edit or remove a topic written by `topic_author`.
///
/// A topic whose author is unknown can't be mutated by anyone, staff included.
/// Otherwise moderators and administrators may act on any topic and everyone
/// else only on their own.
pub fn authorize_mutation(actor: &Author, topic_author: Option<AuthorId>) -> MutationDecision {
    let Some(owner) = topic_author else {
        return MutationDecision::DeniedOrphanAuthor;
    };

    if actor.profile.is_staff() || actor.id == owner {
        MutationDecision::Allowed
    } else {
        MutationDecision::DeniedNotOwner
    }
}
