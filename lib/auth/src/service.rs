//! The auth flows: login, current user, logout.

use std::sync::Arc;

use ordocliens_admin_session::SessionStore;
use ordocliens_admin_upstream::{Credentials, IdentityApi, UpstreamError};
use tracing::{debug, info, instrument};

use crate::error::AccessError;
use crate::outcome::{LOGIN_PAGE, LoginOutcome, LogoutOutcome, PROTECTED_AREA};
use crate::user::User;

/// Orchestrates the session store and the identity API.
///
/// Holds no per-request state; every call is a short request/response
/// chain given a cookie header and, for login, the submitted
/// credentials. Shared across handlers behind an `Arc`.
#[derive(Clone)]
pub struct AuthService {
    api: Arc<dyn IdentityApi>,
    sessions: SessionStore,
}

impl AuthService {
    /// Creates the service from its two collaborators.
    #[must_use]
    pub fn new(api: Arc<dyn IdentityApi>, sessions: SessionStore) -> Self {
        Self { api, sessions }
    }

    /// Exchanges credentials for a committed session.
    ///
    /// Malformed credentials fail before any network call. An upstream
    /// refusal is surfaced as form errors and leaves no session
    /// behind. On success the token is stored in a fresh session and
    /// the commit's cookie accompanies a redirect to the protected
    /// area.
    #[instrument(skip_all)]
    pub async fn login(&self, credentials: &Credentials) -> LoginOutcome {
        if let Err(field_errors) = credentials.validate() {
            debug!("login rejected locally: malformed credentials");
            return LoginOutcome::Invalid(field_errors);
        }

        let payload = match self.api.authenticate(credentials).await {
            Ok(payload) => payload,
            Err(error) => {
                info!(status = error.status(), "login rejected by identity API");
                return LoginOutcome::Rejected {
                    form_errors: vec![format!("{}. Status: {}", error.message(), error.status())],
                    status: error.status(),
                };
            }
        };

        let mut session = self.sessions.create();
        session.set_auth_token(&payload.auth_token);
        // Last session operation before the response is formed.
        let set_cookie = self.sessions.commit(&session);

        let user = User::from(payload.user);
        info!(user_id = %user.id(), "login succeeded");

        LoginOutcome::Authenticated {
            user,
            set_cookie,
            redirect_to: PROTECTED_AREA,
        }
    }

    /// Recovers and authorizes the current user from a request's
    /// cookie header.
    ///
    /// The user record is fetched fresh from the identity API on every
    /// call; nothing is cached. A token the upstream rejects with 401
    /// counts as not authenticated, not as a server error.
    ///
    /// # Errors
    ///
    /// - `Unauthenticated`: no usable token in the session
    /// - `Forbidden`: the user's role does not pass the superadmin gate
    /// - `Upstream`: the identity API could not be consulted
    #[instrument(skip_all)]
    pub async fn current_user(&self, cookie_header: Option<&str>) -> Result<User, AccessError> {
        let session = self.sessions.load(cookie_header);
        let token = session
            .auth_token()
            .map_err(|_| AccessError::Unauthenticated)?;

        let record = self.api.current_user(token).await.map_err(|error| {
            match error {
                // The token no longer authenticates anybody.
                UpstreamError::Api { status: 401, .. } => AccessError::Unauthenticated,
                other => AccessError::Upstream(other),
            }
        })?;

        if !record.role.is_superadmin() {
            debug!("current user failed the superadmin gate");
            return Err(AccessError::Forbidden);
        }

        Ok(User::from(record))
    }

    /// Tears down the session.
    ///
    /// Idempotent: logging out an anonymous session still succeeds and
    /// still redirects to the login page with an invalidating cookie.
    #[instrument(skip_all)]
    pub fn logout(&self, cookie_header: Option<&str>) -> LogoutOutcome {
        let session = self.sessions.load(cookie_header);
        let set_cookie = self.sessions.destroy(session);
        debug!("session destroyed");

        LogoutOutcome {
            set_cookie,
            redirect_to: LOGIN_PAGE,
        }
    }

    /// Returns true if the session carries a token.
    ///
    /// A local presence check only; the token is not verified against
    /// the identity API. Use [`AuthService::current_user`] before
    /// trusting it.
    #[must_use]
    pub fn is_authenticated(&self, cookie_header: Option<&str>) -> bool {
        self.sessions.load(cookie_header).auth_token().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use ordocliens_admin_core::{Role, UserId};
    use ordocliens_admin_session::SessionConfig;
    use ordocliens_admin_upstream::{AuthPayload, UserRecord};
    use std::sync::Mutex;

    /// Scripted stand-in for the identity API, recording every call.
    #[derive(Default)]
    struct FakeIdentityApi {
        authenticate_result: Option<Result<AuthPayload, UpstreamError>>,
        current_user_result: Option<Result<UserRecord, UpstreamError>>,
        calls: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl IdentityApi for FakeIdentityApi {
        async fn authenticate(
            &self,
            credentials: &Credentials,
        ) -> Result<AuthPayload, UpstreamError> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("authenticate {}", credentials.email));
            self.authenticate_result
                .clone()
                .expect("unexpected authenticate call")
        }

        async fn current_user(&self, auth_token: &str) -> Result<UserRecord, UpstreamError> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("current_user {auth_token}"));
            self.current_user_result
                .clone()
                .expect("unexpected current_user call")
        }
    }

    fn user_record(role: Role) -> UserRecord {
        let role = format!("\"{}\"", role.as_str());
        serde_json::from_str(&format!(
            r#"{{
                "id": 1,
                "email": "micke_eri@hotmail.com",
                "first_name": "Micke",
                "last_name": "Eriksson",
                "role": {role}
            }}"#
        ))
        .expect("valid record")
    }

    fn store() -> SessionStore {
        SessionStore::new(SessionConfig::new(vec!["test secret".to_string()]).expect("config"))
    }

    fn service(api: FakeIdentityApi) -> (AuthService, Arc<FakeIdentityApi>) {
        let api = Arc::new(api);
        (AuthService::new(api.clone(), store()), api)
    }

    fn credentials(email: &str, password: &str) -> Credentials {
        Credentials {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    /// Turns a `Set-Cookie` value into the matching `Cookie` header.
    fn as_cookie_header(set_cookie: &str) -> String {
        set_cookie.split(';').next().expect("pair").to_string()
    }

    #[tokio::test]
    async fn login_with_empty_fields_makes_no_network_call() {
        let (service, api) = service(FakeIdentityApi::default());

        let outcome = service.login(&credentials("", "")).await;
        let LoginOutcome::Invalid(errors) = outcome else {
            panic!("expected Invalid, got {outcome:?}");
        };
        assert!(errors.email.is_some());
        assert!(errors.password.is_some());
        assert!(api.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn successful_login_commits_the_token_and_redirects() {
        let (service, _api) = service(FakeIdentityApi {
            authenticate_result: Some(Ok(AuthPayload {
                auth_token: "tok123".to_string(),
                user: user_record(Role::Superadmin),
            })),
            ..FakeIdentityApi::default()
        });

        let outcome = service
            .login(&credentials("micke_eri@hotmail.com", "password"))
            .await;
        let LoginOutcome::Authenticated {
            user,
            set_cookie,
            redirect_to,
        } = outcome
        else {
            panic!("expected Authenticated, got {outcome:?}");
        };

        assert_eq!(user.id(), UserId::new(1));
        assert_eq!(user.first_name(), "Micke");
        assert_eq!(redirect_to, "/dashboard");

        // The committed cookie round-trips into the stored token.
        let loaded = store().load(Some(&as_cookie_header(&set_cookie)));
        assert_eq!(loaded.auth_token(), Ok("tok123"));
    }

    #[tokio::test]
    async fn rejected_login_carries_the_upstream_status_and_message() {
        let (service, _api) = service(FakeIdentityApi {
            authenticate_result: Some(Err(UpstreamError::Api {
                status: 401,
                message: "Invalid credentials".to_string(),
            })),
            ..FakeIdentityApi::default()
        });

        let outcome = service
            .login(&credentials("micke_eri@hotmail.com", "password"))
            .await;
        let LoginOutcome::Rejected {
            form_errors,
            status,
        } = outcome
        else {
            panic!("expected Rejected, got {outcome:?}");
        };

        assert_eq!(form_errors, vec!["Invalid credentials. Status: 401"]);
        assert_eq!(status, 401);
    }

    #[tokio::test]
    async fn transport_failure_surfaces_through_the_same_funnel() {
        let (service, _api) = service(FakeIdentityApi {
            authenticate_result: Some(Err(UpstreamError::Transport {
                status: 504,
                details: "timed out".to_string(),
            })),
            ..FakeIdentityApi::default()
        });

        let outcome = service.login(&credentials("a@b.se", "pw")).await;
        let LoginOutcome::Rejected { status, .. } = outcome else {
            panic!("expected Rejected, got {outcome:?}");
        };
        assert_eq!(status, 504);
    }

    #[tokio::test]
    async fn current_user_without_cookie_is_unauthenticated() {
        let (service, api) = service(FakeIdentityApi::default());

        let result = service.current_user(None).await;
        assert_eq!(result.unwrap_err(), AccessError::Unauthenticated);
        assert!(api.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn current_user_with_empty_token_is_unauthenticated() {
        let store = store();
        let mut session = store.create();
        session.set_auth_token("");
        let header = as_cookie_header(&store.commit(&session));

        let (service, api) = service(FakeIdentityApi::default());
        let result = service.current_user(Some(&header)).await;
        assert_eq!(result.unwrap_err(), AccessError::Unauthenticated);
        assert!(api.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn current_user_passes_the_stored_token_upstream() {
        let store = store();
        let mut session = store.create();
        session.set_auth_token("tok123");
        let header = as_cookie_header(&store.commit(&session));

        let (service, api) = service(FakeIdentityApi {
            current_user_result: Some(Ok(user_record(Role::Superadmin))),
            ..FakeIdentityApi::default()
        });

        let user = service.current_user(Some(&header)).await.expect("user");
        assert_eq!(user.email(), "micke_eri@hotmail.com");
        assert_eq!(
            api.calls.lock().unwrap().as_slice(),
            &["current_user tok123".to_string()]
        );
    }

    #[tokio::test]
    async fn non_superadmin_role_is_forbidden() {
        let store = store();
        let mut session = store.create();
        session.set_auth_token("tok123");
        let header = as_cookie_header(&store.commit(&session));

        let (service, _api) = service(FakeIdentityApi {
            current_user_result: Some(Ok(user_record(Role::Admin))),
            ..FakeIdentityApi::default()
        });

        let result = service.current_user(Some(&header)).await;
        // Forbidden, not Unauthenticated, and nothing about the user.
        assert_eq!(result.unwrap_err(), AccessError::Forbidden);
    }

    #[tokio::test]
    async fn upstream_401_counts_as_unauthenticated() {
        let store = store();
        let mut session = store.create();
        session.set_auth_token("stale-token");
        let header = as_cookie_header(&store.commit(&session));

        let (service, _api) = service(FakeIdentityApi {
            current_user_result: Some(Err(UpstreamError::Api {
                status: 401,
                message: "Token revoked".to_string(),
            })),
            ..FakeIdentityApi::default()
        });

        let result = service.current_user(Some(&header)).await;
        assert_eq!(result.unwrap_err(), AccessError::Unauthenticated);
    }

    #[tokio::test]
    async fn other_upstream_failures_stay_upstream_errors() {
        let store = store();
        let mut session = store.create();
        session.set_auth_token("tok123");
        let header = as_cookie_header(&store.commit(&session));

        let (service, _api) = service(FakeIdentityApi {
            current_user_result: Some(Err(UpstreamError::MalformedResponse {
                details: "missing field `user`".to_string(),
            })),
            ..FakeIdentityApi::default()
        });

        let result = service.current_user(Some(&header)).await;
        match result.unwrap_err() {
            AccessError::Upstream(error) => assert_eq!(error.status(), 500),
            other => panic!("expected Upstream, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn logout_invalidates_and_redirects() {
        let store = store();
        let mut session = store.create();
        session.set_auth_token("tok123");
        let header = as_cookie_header(&store.commit(&session));

        let (service, _api) = service(FakeIdentityApi::default());
        let outcome = service.logout(Some(&header));

        assert_eq!(outcome.redirect_to, "/login");
        assert!(outcome.set_cookie.contains("Max-Age=0"));
    }

    #[tokio::test]
    async fn logout_of_anonymous_session_still_succeeds() {
        let (service, _api) = service(FakeIdentityApi::default());

        let outcome = service.logout(None);
        assert_eq!(outcome.redirect_to, "/login");
        assert!(outcome.set_cookie.contains("Max-Age=0"));
    }

    #[tokio::test]
    async fn is_authenticated_checks_token_presence_only() {
        let (service, api) = service(FakeIdentityApi::default());
        assert!(!service.is_authenticated(None));

        let store = store();
        let mut session = store.create();
        session.set_auth_token("tok123");
        let header = as_cookie_header(&store.commit(&session));

        assert!(service.is_authenticated(Some(&header)));
        assert!(api.calls.lock().unwrap().is_empty());
    }
}
