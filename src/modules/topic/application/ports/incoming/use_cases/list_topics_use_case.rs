use async_trait::async_trait;

use crate::topic::application::ports::outgoing::{
    Page, PageRequest, SortOrder, SortParseError, TopicView, MAX_PAGE_SIZE, MAX_ROW_OFFSET,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListTopicsCommandError {
    #[error("O parâmetro page deve ser um número inteiro não negativo: {0}")]
    InvalidPage(String),

    #[error("O parâmetro size deve ser um número inteiro positivo: {0}")]
    InvalidSize(String),

    #[error(transparent)]
    InvalidSort(#[from] SortParseError),
}

/// Paging and ordering requested by a listing call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListTopicsCommand {
    page_request: PageRequest,
}

impl ListTopicsCommand {
    /// Builds the command from raw query pairs.
    ///
    /// `sort` may repeat; unrelated parameters are ignored. Sizes above
    /// [`MAX_PAGE_SIZE`] are clamped. A page whose row offset does not fit
    /// a signed 64-bit integer is rejected.
    pub fn from_query_pairs(pairs: &[(String, String)]) -> Result<Self, ListTopicsCommandError> {
        let mut page_request = PageRequest::default();
        let mut raw_page: Option<&String> = None;

        for (key, value) in pairs {
            match key.as_str() {
                "page" => {
                    page_request.page = value
                        .trim()
                        .parse::<u64>()
                        .map_err(|_| ListTopicsCommandError::InvalidPage(value.clone()))?;
                    raw_page = Some(value);
                }
                "size" => {
                    let size = value
                        .trim()
                        .parse::<u64>()
                        .ok()
                        .filter(|s| *s > 0)
                        .ok_or_else(|| ListTopicsCommandError::InvalidSize(value.clone()))?;
                    page_request.size = size.min(MAX_PAGE_SIZE);
                }
                "sort" => page_request.sort.push(value.parse::<SortOrder>()?),
                _ => {}
            }
        }

        let offset_fits = page_request
            .page
            .checked_mul(page_request.size)
            .is_some_and(|offset| offset <= MAX_ROW_OFFSET);
        if !offset_fits {
            let raw = raw_page.cloned().unwrap_or_default();
            return Err(ListTopicsCommandError::InvalidPage(raw));
        }

        Ok(Self { page_request })
    }

    pub fn page_request(&self) -> &PageRequest {
        &self.page_request
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListTopicsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListTopicsUseCase: Send + Sync {
    async fn execute(&self, command: ListTopicsCommand)
        -> Result<Page<TopicView>, ListTopicsError>;
}
