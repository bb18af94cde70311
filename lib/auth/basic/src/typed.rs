//  TYPED.rs
//    by Lut99
//
//  Created:
//    14 Aug 2026, 11:20:09
//  Last edited:
//    28 Aug 2026, 16:20:12
//  Auto updated?
//    Yes
//
//  Description:
//!   Provides the strongly-typed [`TypedCredentials`] contract, for
//!   callers that bring their own identity type.
//

use std::future::Future;

use http::{HeaderMap, StatusCode, Uri};
use specifications::AuthOutcome;
use tracing::{debug, span, Level};

use crate::extract::{self, challenge, Credentials};


/***** LIBRARY *****/
/// The capability contract for strongly-typed Basic authentication.
///
/// Implementers bring their own identity type and a static verification function; the
/// full [`authenticate()`](TypedCredentials::authenticate()) operation then comes for
/// free, as do the `"User"` realm and the `"HTTPBasic"` provider label.
///
/// Unlike [`BasicStrategy`](crate::BasicStrategy), no shared cache is consulted:
/// verification is expected to be cheap, or cached inside
/// [`verify()`](TypedCredentials::verify()) by the implementer.
pub trait TypedCredentials: Send + Sized {
    /// Returns the identifier of this authenticated principal.
    fn id(&self) -> &str;

    /// Returns the name of the scheme that produced this principal.
    #[inline]
    fn provider(&self) -> &'static str { "HTTPBasic" }

    /// Returns the display name of the protection space, sent in challenge headers.
    #[inline]
    fn realm() -> &'static str { "User" }

    /// Maps a credential pair to the matching principal, if any.
    ///
    /// A [`None`] result means the credentials were rejected, not that something went
    /// wrong; internal errors must be mapped to [`None`] before they reach the caller.
    ///
    /// # Arguments
    /// - `userid`: The userid half of the extracted pair.
    /// - `password`: The password half of the extracted pair.
    ///
    /// # Returns
    /// An instance of the implementing type, or [`None`] to reject.
    fn verify(userid: String, password: String) -> impl Send + Future<Output = Option<Self>>;

    /// Authenticates the given request.
    ///
    /// # Arguments
    /// - `uri`: The parsed URL of the request, which may embed credentials as userinfo.
    /// - `headers`: The headers of the HTTP request to authenticate.
    ///
    /// # Returns
    /// An [`AuthOutcome`] carrying exactly one of the three terminal signals, with
    /// [`verify()`](TypedCredentials::verify()) deciding between success and a 401
    /// failure.
    fn authenticate(uri: &Uri, headers: &HeaderMap) -> impl Send + Future<Output = AuthOutcome<Self>> {
        async move {
            let _span = span!(Level::INFO, "TypedCredentials::authenticate");

            // Get the credential pair out of the request
            let Credentials { userid, password } = match extract::credentials(uri, headers) {
                Ok(creds) => creds,
                Err(err) if err.defers() => {
                    debug!("Deferring request to the next strategy ({err})");
                    return AuthOutcome::pass(StatusCode::UNAUTHORIZED, challenge(Self::realm()));
                },
                Err(err) => {
                    debug!("Rejecting malformed Basic credentials ({err})");
                    return AuthOutcome::failure(StatusCode::BAD_REQUEST, HeaderMap::new());
                },
            };

            // No cache in this variant; straight to the verifier
            match Self::verify(userid, password).await {
                Some(this) => AuthOutcome::Success(this),
                None => AuthOutcome::failure(StatusCode::UNAUTHORIZED, challenge(Self::realm())),
            }
        }
    }
}





/***** TESTS *****/
#[cfg(test)]
mod tests {
    use base64ct::Encoding as _;
    use http::header::{AUTHORIZATION, WWW_AUTHENTICATE};
    use http::HeaderValue;

    use super::*;

    /// An identity type that accepts exactly Mary/qwerasdf and overrides the realm.
    struct MaryUser {
        id: String,
    }
    impl TypedCredentials for MaryUser {
        fn id(&self) -> &str { &self.id }

        fn realm() -> &'static str { "test" }

        fn verify(userid: String, password: String) -> impl Send + Future<Output = Option<Self>> {
            async move { if userid == "Mary" && password == "qwerasdf" { Some(Self { id: userid }) } else { None } }
        }
    }

    /// An identity type that keeps all the defaults and accepts nobody.
    struct NobodyUser;
    impl TypedCredentials for NobodyUser {
        fn id(&self) -> &str { "nobody" }

        fn verify(_userid: String, _password: String) -> impl Send + Future<Output = Option<Self>> { async move { None } }
    }

    /// Builds a header map carrying `Authorization: Basic <base64(userid:password)>`.
    fn basic_headers(userid: &str, password: &str) -> HeaderMap {
        let payload: String = base64ct::Base64::encode_string(format!("{userid}:{password}").as_bytes());
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(&format!("Basic {payload}")).unwrap());
        headers
    }

    /// A request URL without userinfo.
    fn plain_uri() -> Uri { Uri::from_static("http://localhost:8080/protected") }


    #[tokio::test]
    async fn succeeds_on_valid_credentials() {
        let outcome = MaryUser::authenticate(&plain_uri(), &basic_headers("Mary", "qwerasdf")).await;
        let user: MaryUser = outcome.into_identity().unwrap();
        assert_eq!(user.id(), "Mary");
        assert_eq!(user.provider(), "HTTPBasic");
    }

    #[tokio::test]
    async fn verification_is_idempotent() {
        // Same pair twice, no cache in between; both attempts consult the verifier
        let first = MaryUser::authenticate(&plain_uri(), &basic_headers("Mary", "qwerasdf")).await.into_identity().unwrap();
        let second = MaryUser::authenticate(&plain_uri(), &basic_headers("Mary", "qwerasdf")).await.into_identity().unwrap();
        assert_eq!(first.id(), second.id());
    }

    #[tokio::test]
    async fn fails_on_rejected_credentials() {
        let outcome = MaryUser::authenticate(&plain_uri(), &basic_headers("Mary", "wrong")).await;
        assert!(outcome.is_failure());
        assert_eq!(outcome.status(), Some(StatusCode::UNAUTHORIZED));
        assert_eq!(outcome.headers().unwrap().get(WWW_AUTHENTICATE).unwrap(), "Basic realm=\"test\"");
    }

    #[tokio::test]
    async fn passes_without_credentials() {
        let outcome = MaryUser::authenticate(&plain_uri(), &HeaderMap::new()).await;
        assert!(outcome.is_pass());
        assert_eq!(outcome.status(), Some(StatusCode::UNAUTHORIZED));
        assert_eq!(outcome.headers().unwrap().get(WWW_AUTHENTICATE).unwrap(), "Basic realm=\"test\"");
    }

    #[tokio::test]
    async fn fails_on_missing_separator() {
        let payload: String = base64ct::Base64::encode_string(b"nocolonhere");
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(&format!("Basic {payload}")).unwrap());

        let outcome = MaryUser::authenticate(&plain_uri(), &headers).await;
        assert!(outcome.is_failure());
        assert_eq!(outcome.status(), Some(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn default_realm_is_user() {
        let outcome = NobodyUser::authenticate(&plain_uri(), &HeaderMap::new()).await;
        assert!(outcome.is_pass());
        assert_eq!(outcome.headers().unwrap().get(WWW_AUTHENTICATE).unwrap(), "Basic realm=\"User\"");
    }
}
