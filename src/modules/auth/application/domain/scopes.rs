/// OAuth2 scope a route requires from the caller's token.
pub trait RequiredScope: Send + Sync + 'static {
    const SCOPE: &'static str;
}

#[derive(Debug, Clone, Copy)]
pub struct TopicEditScope;

impl RequiredScope for TopicEditScope {
    const SCOPE: &'static str = "topic:edit";
}

#[derive(Debug, Clone, Copy)]
pub struct TopicDeleteScope;

impl RequiredScope for TopicDeleteScope {
    const SCOPE: &'static str = "topic:delete";
}
