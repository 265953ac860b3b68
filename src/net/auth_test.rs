use super::*;
use crate::state::session::Role;

fn login_response() -> LoginResponse {
    LoginResponse {
        access_token: "jwt-1".to_owned(),
        user: UserProfile { id: 1, username: "admin".to_owned(), email: None, role: Role::Admin },
    }
}

#[test]
fn successful_login_maps_to_authenticated() {
    let outcome = login_outcome(Ok(login_response()));
    let LoginOutcome::Authenticated { user, token } = outcome else {
        panic!("expected authenticated outcome");
    };
    assert_eq!(user.username, "admin");
    assert_eq!(token, "jwt-1");
}

#[test]
fn unauthorized_login_maps_to_invalid_credentials() {
    let outcome = login_outcome(Err(ApiError::Status { status: 401, message: "Invalid credentials".to_owned() }));
    assert_eq!(outcome, LoginOutcome::Rejected(INVALID_CREDENTIALS.to_owned()));
}

#[test]
fn transport_failure_maps_to_rejected_not_panic() {
    let outcome = login_outcome(Err(ApiError::Network("offline".to_owned())));
    assert!(matches!(outcome, LoginOutcome::Rejected(_)));
}

#[test]
fn register_failure_prefers_server_message() {
    let err = ApiError::Status { status: 400, message: "User already exists".to_owned() };
    assert_eq!(register_failure_message(&err), "User already exists");
}

#[test]
fn register_failure_falls_back_without_server_message() {
    assert_eq!(register_failure_message(&ApiError::Network("offline".to_owned())), REGISTRATION_FAILED);
    let empty = ApiError::Status { status: 500, message: String::new() };
    assert_eq!(register_failure_message(&empty), REGISTRATION_FAILED);
}

#[cfg(not(feature = "csr"))]
#[test]
fn http_authenticator_rejects_outside_browser() {
    let auth = HttpAuthenticator::new(&ClientConfig::default());
    let creds = Credentials { username: "a".to_owned(), password: "b".to_owned() };
    let outcome = futures::executor::block_on(auth.login(&creds));
    assert_eq!(outcome, LoginOutcome::Rejected(INVALID_CREDENTIALS.to_owned()));
}
