use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};
use contracts::domain::a001_user::aggregate::UserId;
use contracts::system::auth::TokenClaims;

/// Extractor for the user behind the request's token
/// Usage in handlers: `async fn handler(user: CurrentUser) -> Response`
pub struct CurrentUser(pub TokenClaims);

impl CurrentUser {
    pub fn id(&self) -> UserId {
        UserId(self.0.user_id().unwrap_or_default())
    }
}

#[cfg(test)]
impl CurrentUser {
    pub fn for_tests(id: UserId) -> Self {
        CurrentUser(TokenClaims {
            sub: id.0.to_string(),
            name: "tester".to_string(),
            exp: 0,
            iat: 0,
        })
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Claims are set by `require_auth`
        parts
            .extensions
            .get::<TokenClaims>()
            .filter(|claims| claims.user_id().is_some())
            .cloned()
            .map(CurrentUser)
            .ok_or(StatusCode::UNAUTHORIZED)
    }
}
