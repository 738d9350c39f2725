use super::*;

#[test]
fn resolve_root_is_home() {
    let intent = resolve("/");
    assert_eq!(intent.name, HOME_ROUTE);
    assert_eq!(intent.path, "/");
    assert!(!intent.requirements.requires_auth);

    assert_eq!(resolve("").name, HOME_ROUTE);
}

#[test]
fn resolve_add_product_requires_auth() {
    let intent = resolve("/add-product");
    assert_eq!(intent.name, "addProduct");
    assert_eq!(intent.requirements, RouteRequirements { requires_auth: true, required_role: None });
}

#[test]
fn resolve_extracts_params() {
    let intent = resolve("/chat/42");
    assert_eq!(intent.name, "chat");
    assert_eq!(intent.param("other_user_id"), Some("42"));
    assert_eq!(intent.param("id"), None);

    let intent = resolve("/reset-password/abc-def");
    assert_eq!(intent.name, "resetPassword");
    assert_eq!(intent.param("token"), Some("abc-def"));
}

#[test]
fn resolve_ignores_query_fragment_and_trailing_slash() {
    let intent = resolve("/product/9/?ref=home#reviews");
    assert_eq!(intent.name, "productDetail");
    assert_eq!(intent.param("id"), Some("9"));
    assert_eq!(intent.path, "/product/9/");
}

#[test]
fn resolve_unknown_path_is_not_found() {
    let intent = resolve("/product/9/extra");
    assert_eq!(intent.name, NOT_FOUND_ROUTE);
    assert!(!intent.requirements.requires_auth);
    assert!(intent.params.is_empty());
}

#[test]
fn admin_routes_declare_no_role() {
    for name in ["adminDashboard", "adminUsers", "adminProfile", "adminComplaints"] {
        let route = find(name).unwrap();
        assert!(!route.requires_auth, "{name}");
        assert_eq!(route.required_role, None, "{name}");
    }
    assert_eq!(resolve("/admin/123/dashboard").name, "adminDashboard");
}

#[test]
fn auth_routes_match_declarations() {
    let auth: Vec<&str> = ROUTES.iter().filter(|r| r.requires_auth).map(|r| r.name).collect();
    assert_eq!(
        auth,
        vec![
            "addProduct",
            "editProduct",
            "confirmAuctionSale",
            "myBids",
            "notifications",
            "savedSearches",
            "priceAlerts",
            "chats",
            "chat",
        ]
    );
}

#[test]
fn route_names_are_unique() {
    let mut names: Vec<&str> = ROUTES.iter().map(|r| r.name).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), ROUTES.len());
}

#[test]
fn path_of_redirect_targets() {
    assert_eq!(path_of(LOGIN_ROUTE), Some(LOGIN_PATH));
    assert_eq!(path_of(UNAUTHORIZED_ROUTE), Some(UNAUTHORIZED_PATH));
    assert_eq!(path_of("editProduct"), None);
    assert_eq!(path_of("nope"), None);
}
