use super::*;
use crate::net::test_helpers::session;
use crate::routing::table::resolve;

fn requires(auth: bool, role: Option<&str>) -> RouteRequirements {
    RouteRequirements { requires_auth: auth, required_role: role.map(str::to_owned) }
}

fn snapshot_with(session: Option<Session>) -> SessionSnapshot {
    SessionSnapshot { session, ..SessionSnapshot::default() }
}

// =============================================================
// Decision table
// =============================================================

#[test]
fn open_route_allows_regardless_of_session() {
    let user = session(1, "user");
    for route in [requires(false, None), requires(false, Some("admin"))] {
        assert_eq!(check(&route, None), GuardDecision::Allow);
        assert_eq!(check(&route, Some(&user)), GuardDecision::Allow);
    }
}

#[test]
fn auth_route_without_session_redirects_to_login() {
    assert_eq!(check(&requires(true, None), None), GuardDecision::RedirectToLogin);
    assert_eq!(check(&requires(true, Some("admin")), None), GuardDecision::RedirectToLogin);
}

#[test]
fn auth_route_wrong_role_redirects_to_unauthorized() {
    let user = session(1, "user");
    assert_eq!(check(&requires(true, Some("admin")), Some(&user)), GuardDecision::RedirectToUnauthorized);
}

#[test]
fn role_comparison_is_case_sensitive() {
    let admin = session(1, "Admin");
    assert_eq!(check(&requires(true, Some("admin")), Some(&admin)), GuardDecision::RedirectToUnauthorized);
    assert_eq!(check(&requires(true, Some("Admin")), Some(&admin)), GuardDecision::Allow);
}

#[test]
fn auth_route_without_declared_role_allows_any_role() {
    for role in ["user", "admin", ""] {
        let s = session(1, role);
        assert_eq!(check(&requires(true, None), Some(&s)), GuardDecision::Allow);
    }
}

#[test]
fn redirect_paths() {
    assert_eq!(GuardDecision::Allow.redirect_path(), None);
    assert_eq!(GuardDecision::RedirectToLogin.redirect_path(), Some("/login"));
    assert_eq!(GuardDecision::RedirectToUnauthorized.redirect_path(), Some("/unauthorized"));
}

// =============================================================
// Against the declared route table
// =============================================================

#[test]
fn add_product_without_session_goes_to_login() {
    let decision = check_intent(&resolve("/add-product"), &snapshot_with(None));
    assert_eq!(decision, GuardDecision::RedirectToLogin);
    assert_eq!(decision.redirect_path(), Some(crate::routing::table::LOGIN_PATH));
}

#[test]
fn admin_dashboard_is_reachable_by_user_role_as_declared() {
    // The admin routes declare no requiredRole, so a "user" session is allowed.
    let decision = check_intent(&resolve("/admin/123/dashboard"), &snapshot_with(Some(session(1, "user"))));
    assert_eq!(decision, GuardDecision::Allow);
}

#[test]
fn admin_dashboard_with_declared_role_denies_user() {
    let mut intent = resolve("/admin/123/dashboard");
    intent.requirements = requires(true, Some("admin"));
    let decision = check_intent(&intent, &snapshot_with(Some(session(1, "user"))));
    assert_eq!(decision, GuardDecision::RedirectToUnauthorized);
}

#[test]
fn login_and_unauthorized_pages_are_always_reachable() {
    for path in ["/login", "/unauthorized", "/no-such-page"] {
        assert_eq!(check_intent(&resolve(path), &snapshot_with(None)), GuardDecision::Allow, "{path}");
    }
}
