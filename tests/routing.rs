//! Integration tests for the ordered route table.

use playfab_proxy::proxy::routing::{
    endpoint_path, match_in, match_route, Action, Endpoint, RouteRule, TokenSource, DEFAULT_ACTION,
    ROUTES,
};

#[test]
fn table_precedence_is_fixed() {
    let order: Vec<(&str, &str)> = ROUTES.iter().map(|r| (r.method, r.path)).collect();
    assert_eq!(
        order,
        vec![
            ("POST", "/CloudScript/ExecuteEntityCloudScript"),
            ("POST", "/CloudScript/ExecuteFunction"),
            ("GET", "/Client/LoginWithCustomID"),
            ("POST", "/Client/GetCatalogItems"),
            ("POST", "/Client/GetUserInventory"),
            ("GET", "/"),
        ]
    );
}

#[test]
fn every_rule_reachable() {
    for rule in ROUTES {
        assert_eq!(
            match_route(rule.method, rule.path),
            &rule.action,
            "{} {} is shadowed",
            rule.method,
            rule.path
        );
    }
}

#[test]
fn default_forwards_request_path_with_any_ticket() {
    assert_eq!(
        DEFAULT_ACTION,
        Action::Forward {
            endpoint: Endpoint::RequestPath,
            token: TokenSource::HeaderThenBody,
        }
    );
}

#[test]
fn unknown_endpoints_use_default() {
    for (method, path) in [
        ("POST", "/Client/GetTitleData"),
        ("DELETE", "/Client/GetCatalogItems"),
        ("PATCH", "/Foo/Bar"),
        ("OPTIONS", "/"),
        ("POST", "/CloudScript"),
    ] {
        assert_eq!(match_route(method, path), &DEFAULT_ACTION, "{method} {path}");
    }
}

#[test]
fn default_endpoint_path_normalization() {
    assert_eq!(endpoint_path("/Foo/Bar"), "Foo/Bar");
    assert_eq!(endpoint_path("/Client/GetTitleData"), "Client/GetTitleData");
}

#[test]
fn empty_table_matches_nothing() {
    let routes: &[RouteRule] = &[];
    assert!(match_in(routes, "GET", "/").is_none());
}
