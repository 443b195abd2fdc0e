use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{bearer_token, AuthGuard, ServiceKey},
        session::AuthSession,
    },
    model::principal::Principal,
};
use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::SecretString;
use test_utils::{builder::TestBuilder, factory};


const TEST_KEY: &str = "test-service-key-0123456789";

fn service_key() -> ServiceKey {
    ServiceKey::new(SecretString::new(TEST_KEY.to_string()))
}

fn headers_with_authorization(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
    headers
}
