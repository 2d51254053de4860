//! Ordered, first-match-wins route table for inbound requests.
//!
//! [`ROUTES`] lists the endpoints the proxy treats specially, in
//! precedence order. [`match_route`] walks the table and returns the
//! first rule's [`Action`], falling back to [`DEFAULT_ACTION`] (forward
//! the request path upstream) when nothing matches.
//!
//! Paths compare case-insensitively and tolerate one trailing slash;
//! a `GET` rule also answers `HEAD`.

/// Where the upstream endpoint path comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// A fixed PlayFab endpoint, e.g. `Client/LoginWithCustomID`.
    Fixed(&'static str),
    /// The inbound request path with its leading `/` removed.
    RequestPath,
}

/// Which inputs may supply the session ticket relayed as `X-Authorization`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    None,
    Header,
    HeaderThenBody,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Forward {
        endpoint: Endpoint,
        token: TokenSource,
    },
    CatalogItems,
    UserInventory,
    Banner,
}

#[derive(Debug)]
pub struct RouteRule {
    pub method: &'static str,
    pub path: &'static str,
    pub action: Action,
}

pub static ROUTES: &[RouteRule] = &[
    RouteRule {
        method: "POST",
        path: "/CloudScript/ExecuteEntityCloudScript",
        action: Action::Forward {
            endpoint: Endpoint::Fixed("CloudScript/ExecuteEntityCloudScript"),
            token: TokenSource::Header,
        },
    },
    RouteRule {
        method: "POST",
        path: "/CloudScript/ExecuteFunction",
        action: Action::Forward {
            endpoint: Endpoint::Fixed("CloudScript/ExecuteFunction"),
            token: TokenSource::Header,
        },
    },
    RouteRule {
        method: "GET",
        path: "/Client/LoginWithCustomID",
        action: Action::Forward {
            endpoint: Endpoint::Fixed("Client/LoginWithCustomID"),
            token: TokenSource::None,
        },
    },
    RouteRule {
        method: "POST",
        path: "/Client/GetCatalogItems",
        action: Action::CatalogItems,
    },
    RouteRule {
        method: "POST",
        path: "/Client/GetUserInventory",
        action: Action::UserInventory,
    },
    RouteRule {
        method: "GET",
        path: "/",
        action: Action::Banner,
    },
];

pub static DEFAULT_ACTION: Action = Action::Forward {
    endpoint: Endpoint::RequestPath,
    token: TokenSource::HeaderThenBody,
};

#[must_use]
pub fn match_route(method: &str, path: &str) -> &'static Action {
    match_in(ROUTES, method, path).unwrap_or(&DEFAULT_ACTION)
}

/// First rule in `routes` matching `method` and `path`, if any.
#[must_use]
pub fn match_in<'a>(routes: &'a [RouteRule], method: &str, path: &str) -> Option<&'a Action> {
    routes
        .iter()
        .find(|rule| method_matches(rule.method, method) && path_matches(rule.path, path))
        .map(|rule| &rule.action)
}

/// Upstream endpoint for a forwarded request: strips a single leading `/`.
#[must_use]
pub fn endpoint_path(request_path: &str) -> &str {
    request_path.strip_prefix('/').unwrap_or(request_path)
}

fn method_matches(rule: &str, method: &str) -> bool {
    rule.eq_ignore_ascii_case(method)
        || (rule.eq_ignore_ascii_case("GET") && method.eq_ignore_ascii_case("HEAD"))
}

fn path_matches(rule: &str, path: &str) -> bool {
    let path = if path.len() > 1 {
        path.strip_suffix('/').unwrap_or(path)
    } else {
        path
    };
    rule.eq_ignore_ascii_case(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match() {
        assert_eq!(
            *match_route("POST", "/Client/GetCatalogItems"),
            Action::CatalogItems
        );
    }

    #[test]
    fn root_serves_banner() {
        assert_eq!(*match_route("GET", "/"), Action::Banner);
    }

    #[test]
    fn wrong_method_falls_through_to_default() {
        assert_eq!(*match_route("GET", "/Client/GetCatalogItems"), DEFAULT_ACTION);
        assert_eq!(*match_route("POST", "/"), DEFAULT_ACTION);
    }

    #[test]
    fn path_match_ignores_case() {
        assert_eq!(
            *match_route("post", "/client/getuserinventory"),
            Action::UserInventory
        );
    }

    #[test]
    fn trailing_slash_tolerated_once() {
        assert_eq!(
            *match_route("POST", "/Client/GetCatalogItems/"),
            Action::CatalogItems
        );
        assert_eq!(
            *match_route("POST", "/Client/GetCatalogItems//"),
            DEFAULT_ACTION
        );
    }

    #[test]
    fn get_rule_answers_head() {
        assert_eq!(*match_route("HEAD", "/"), Action::Banner);
    }

    #[test]
    fn login_forwards_without_token() {
        assert_eq!(
            *match_route("GET", "/Client/LoginWithCustomID"),
            Action::Forward {
                endpoint: Endpoint::Fixed("Client/LoginWithCustomID"),
                token: TokenSource::None,
            }
        );
    }

    #[test]
    fn cloudscript_uses_header_token_only() {
        for path in [
            "/CloudScript/ExecuteFunction",
            "/CloudScript/ExecuteEntityCloudScript",
        ] {
            let Action::Forward { endpoint, token } = *match_route("POST", path) else {
                panic!("{path} should forward");
            };
            assert_eq!(token, TokenSource::Header);
            assert_eq!(endpoint, Endpoint::Fixed(endpoint_path(path)));
        }
    }

    #[test]
    fn first_match_wins() {
        let routes = [
            RouteRule {
                method: "POST",
                path: "/dup",
                action: Action::CatalogItems,
            },
            RouteRule {
                method: "POST",
                path: "/dup",
                action: Action::UserInventory,
            },
        ];
        assert_eq!(match_in(&routes, "POST", "/dup"), Some(&Action::CatalogItems));
    }

    #[test]
    fn endpoint_strips_single_leading_slash() {
        assert_eq!(endpoint_path("/Foo/Bar"), "Foo/Bar");
        assert_eq!(endpoint_path("//Foo"), "/Foo");
        assert_eq!(endpoint_path("Foo"), "Foo");
    }
}
