use axum::http::StatusCode;
use zambool::middleware::auth::AuthUser;
use zambool::middleware::role::{check_any_role, check_role, parse_role_from_string};
use zambool_models::{Claims, UserRole};

fn create_test_auth_user(role: &str) -> AuthUser {
    let claims = Claims {
        sub: "00000000-0000-0000-0000-000000000000".to_string(),
        username: "test.user".to_string(),
        name: "Test User".to_string(),
        role: role.to_string(),
        exp: 9999999999,
        iat: 1234567890,
    };
    AuthUser(claims)
}

#[test]
fn test_check_role_exact_match() {
    let auth_user = create_test_auth_user("admin");
    assert!(check_role(&auth_user, UserRole::Admin).is_ok());

    let auth_user = create_test_auth_user("instructor");
    assert!(check_role(&auth_user, UserRole::Instructor).is_ok());

    let auth_user = create_test_auth_user("student");
    assert!(check_role(&auth_user, UserRole::Student).is_ok());
}

#[test]
fn test_check_role_no_match() {
    let auth_user = create_test_auth_user("student");
    assert!(check_role(&auth_user, UserRole::Admin).is_err());

    let auth_user = create_test_auth_user("instructor");
    assert!(check_role(&auth_user, UserRole::Student).is_err());

    let auth_user = create_test_auth_user("admin");
    assert!(check_role(&auth_user, UserRole::Student).is_err());
}

#[test]
fn test_check_role_error_is_forbidden_with_required_role() {
    let auth_user = create_test_auth_user("student");
    let err = check_role(&auth_user, UserRole::Admin).unwrap_err();

    assert_eq!(err.status, StatusCode::FORBIDDEN);
    assert_eq!(err.client_message(), "Access denied. Required role: admin");
}

#[test]
fn test_check_any_role_instructor_routes_admit_admins() {
    let allowed = [UserRole::Instructor, UserRole::Admin];

    assert!(check_any_role(&create_test_auth_user("instructor"), &allowed).is_ok());
    assert!(check_any_role(&create_test_auth_user("admin"), &allowed).is_ok());

    let err = check_any_role(&create_test_auth_user("student"), &allowed).unwrap_err();
    assert_eq!(
        err.client_message(),
        "Access denied. Required role: instructor or admin"
    );
}

#[test]
fn test_check_any_role_empty_list_denies_everyone() {
    let auth_user = create_test_auth_user("admin");
    assert!(check_any_role(&auth_user, &[]).is_err());
}

#[test]
fn test_unknown_role_claim_is_forbidden() {
    let auth_user = create_test_auth_user("system_admin");
    let err = check_role(&auth_user, UserRole::Admin).unwrap_err();

    assert_eq!(err.status, StatusCode::FORBIDDEN);
    assert_eq!(err.client_message(), "Invalid role: system_admin");
}

#[test]
fn test_parse_role_from_string() {
    assert_eq!(parse_role_from_string("student").unwrap(), UserRole::Student);
    assert_eq!(
        parse_role_from_string("instructor").unwrap(),
        UserRole::Instructor
    );
    assert_eq!(parse_role_from_string("admin").unwrap(), UserRole::Admin);
}

#[test]
fn test_parse_role_is_case_sensitive() {
    assert!(parse_role_from_string("Admin").is_err());
    assert!(parse_role_from_string("").is_err());
}
