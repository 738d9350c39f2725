//! Declared application routes and path resolution.
//!
//! DESIGN
//! ======
//! Each route carries optional `requires_auth` / `required_role` metadata.
//! Absence means "no restriction" and "any role" respectively. The `/user/*`
//! and `/admin/*` routes declare neither; that is the table as shipped, and
//! the guard enforces whatever is declared here.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

pub const LOGIN_ROUTE: &str = "login";
pub const UNAUTHORIZED_ROUTE: &str = "Unauthorized";
pub const NOT_FOUND_ROUTE: &str = "NotFound";
pub const HOME_ROUTE: &str = "home";

pub const LOGIN_PATH: &str = "/login";
pub const UNAUTHORIZED_PATH: &str = "/unauthorized";

/// Per-route access requirements evaluated by the guard.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteRequirements {
    pub requires_auth: bool,
    pub required_role: Option<String>,
}

/// A static route declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDef {
    pub name: &'static str,
    /// Pattern with `:param` segments.
    pub path: &'static str,
    pub requires_auth: bool,
    pub required_role: Option<&'static str>,
}

impl RouteDef {
    const fn open(name: &'static str, path: &'static str) -> Self {
        Self { name, path, requires_auth: false, required_role: None }
    }

    const fn auth(name: &'static str, path: &'static str) -> Self {
        Self { name, path, requires_auth: true, required_role: None }
    }

    #[must_use]
    pub fn requirements(&self) -> RouteRequirements {
        RouteRequirements {
            requires_auth: self.requires_auth,
            required_role: self.required_role.map(str::to_owned),
        }
    }
}

/// Resolved navigation target, evaluated once per navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteIntent {
    pub name: &'static str,
    pub path: String,
    pub requirements: RouteRequirements,
    pub params: Vec<(&'static str, String)>,
}

impl RouteIntent {
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}

pub static ROUTES: &[RouteDef] = &[
    RouteDef::open(UNAUTHORIZED_ROUTE, UNAUTHORIZED_PATH),
    RouteDef::open(HOME_ROUTE, "/"),
    RouteDef::open("products", "/products"),
    RouteDef::auth("addProduct", "/add-product"),
    RouteDef::auth("editProduct", "/edit-product/:id"),
    RouteDef::auth("confirmAuctionSale", "/confirm-auction-sale/:id"),
    RouteDef::auth("myBids", "/my-bids"),
    RouteDef::auth("notifications", "/notifications"),
    RouteDef::auth("savedSearches", "/saved-searches"),
    RouteDef::auth("priceAlerts", "/price-alerts"),
    RouteDef::open("productDetail", "/product/:id"),
    RouteDef::open("auctionDetail", "/auction/:id"),
    RouteDef::open("about", "/about"),
    RouteDef::open(LOGIN_ROUTE, LOGIN_PATH),
    RouteDef::open("signup", "/signup"),
    RouteDef::open("phoneVerification", "/phone-verification"),
    RouteDef::open("emailVerification", "/verify-email/:token"),
    RouteDef::open("forgotPassword", "/forgot-password"),
    RouteDef::open("resetPassword", "/reset-password/:token"),
    RouteDef::auth("chats", "/chats"),
    RouteDef::auth("chat", "/chat/:other_user_id"),
    // Role: user
    RouteDef::open("userDashboard", "/user/:userId/dashboard"),
    RouteDef::open("userProfile", "/user/:userId/profile"),
    RouteDef::open("myListings", "/user/:userId/listings"),
    RouteDef::open("cart", "/user/:userId/cart"),
    RouteDef::open("purchases", "/user/:userId/purchases"),
    // Role: admin
    RouteDef::open("adminDashboard", "/admin/:userId/dashboard"),
    RouteDef::open("adminUsers", "/admin/:userId/users"),
    RouteDef::open("adminProfile", "/admin/:userId/profile"),
    RouteDef::open("adminComplaints", "/admin/:userId/complaints"),
];

/// Catch-all for paths no declared route matches.
pub const NOT_FOUND: RouteDef = RouteDef::open(NOT_FOUND_ROUTE, "/*");

/// Look up a declared route by name.
#[must_use]
pub fn find(name: &str) -> Option<&'static RouteDef> {
    ROUTES.iter().find(|r| r.name == name)
}

/// Static path of a named route. `None` for unknown or parameterized routes.
#[must_use]
pub fn path_of(name: &str) -> Option<&'static str> {
    find(name).map(|r| r.path).filter(|p| !p.contains(':'))
}

/// Resolve a location (path, optionally with query/fragment) to a route.
#[must_use]
pub fn resolve(location: &str) -> RouteIntent {
    let path = location.split(['?', '#']).next().unwrap_or_default();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    for route in ROUTES {
        if let Some(params) = match_segments(route.path, &segments) {
            return intent(route, path, params);
        }
    }
    intent(&NOT_FOUND, path, Vec::new())
}

fn intent(route: &RouteDef, path: &str, params: Vec<(&'static str, String)>) -> RouteIntent {
    RouteIntent {
        name: route.name,
        path: if path.is_empty() { "/".to_owned() } else { path.to_owned() },
        requirements: route.requirements(),
        params,
    }
}

fn match_segments(pattern: &'static str, segments: &[&str]) -> Option<Vec<(&'static str, String)>> {
    let pattern_segments: Vec<&'static str> = pattern.split('/').filter(|s| !s.is_empty()).collect();
    if pattern_segments.len() != segments.len() {
        return None;
    }

    let mut params = Vec::new();
    for (expected, actual) in pattern_segments.iter().copied().zip(segments) {
        if let Some(key) = expected.strip_prefix(':') {
            params.push((key, (*actual).to_owned()));
        } else if expected != *actual {
            return None;
        }
    }
    Some(params)
}
