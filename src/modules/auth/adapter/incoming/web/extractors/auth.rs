use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    marker::PhantomData,
    sync::Arc,
};

use crate::auth::application::domain::scopes::{RequiredScope, TopicDeleteScope, TopicEditScope};
use crate::auth::application::ports::outgoing::{TokenError, TokenVerifier};
use crate::author::application::domain::entities::AuthorId;
use crate::shared::api::ProblemResponse;

const MISSING_TOKEN: &str = "Token de acesso ausente";
const INVALID_TOKEN: &str = "Token de acesso inválido ou expirado";

/// Caller identified by a valid bearer token.
#[derive(Debug, Clone)]
pub struct AuthenticatedCaller {
    pub author_id: AuthorId,
    pub scopes: Vec<String>,
}

impl AuthenticatedCaller {
    pub fn has_scope(&self, scope: &str) -> bool {
        self.scopes.iter().any(|s| s == scope)
    }
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AuthenticatedCaller {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

fn authenticate(req: &HttpRequest) -> Result<AuthenticatedCaller, ActixError> {
    let verifier = req
        .app_data::<web::Data<Arc<dyn TokenVerifier + Send + Sync>>>()
        .ok_or_else(|| {
            tracing::error!("Token verifier is not registered as app data");
            create_api_error(ProblemResponse::internal_error(req.path()))
        })?;

    let token = extract_token_from_header(req).ok_or_else(|| {
        create_api_error(ProblemResponse::unauthorized(req.path(), MISSING_TOKEN))
    })?;

    let claims = verifier.verify_access_token(&token).map_err(|e| {
        match e {
            TokenError::InvalidSignature => {
                tracing::warn!(path = %req.path(), "Rejected token with invalid signature")
            }
            _ => tracing::debug!(path = %req.path(), error = %e, "Rejected access token"),
        }
        create_api_error(ProblemResponse::unauthorized(req.path(), INVALID_TOKEN))
    })?;

    Ok(AuthenticatedCaller {
        author_id: claims.author_id,
        scopes: claims.scopes,
    })
}

/// Authenticated caller whose token also grants `S::SCOPE`.
#[derive(Debug, Clone)]
pub struct ScopedCaller<S: RequiredScope> {
    pub caller: AuthenticatedCaller,
    _scope: PhantomData<S>,
}

impl<S: RequiredScope> ScopedCaller<S> {
    pub fn author_id(&self) -> AuthorId {
        self.caller.author_id
    }
}

impl<S: RequiredScope> FromRequest for ScopedCaller<S> {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let caller = match authenticate(req) {
            Ok(caller) => caller,
            Err(e) => return ready(Err(e)),
        };

        if !caller.has_scope(S::SCOPE) {
            tracing::warn!(
                author_id = %caller.author_id,
                scope = S::SCOPE,
                "Caller lacks required scope"
            );
            let detail = format!("O token não possui o escopo necessário: {}", S::SCOPE);
            return ready(Err(create_api_error(ProblemResponse::forbidden(
                req.path(),
                &detail,
            ))));
        }

        ready(Ok(ScopedCaller {
            caller,
            _scope: PhantomData,
        }))
    }
}

pub type TopicEditor = ScopedCaller<TopicEditScope>;
pub type TopicRemover = ScopedCaller<TopicDeleteScope>;

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
