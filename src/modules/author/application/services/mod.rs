mod author_resolver;

pub use author_resolver::{AuthorResolver, ResolveAuthorError};
