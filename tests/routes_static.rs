use segment_router_rs::{HttpMethod, MatchOutcome, Router, RouterOptions};

#[test]
fn router_when_static_route_registered_then_returns_match() {
    let router = Router::new(None);
    router
        .add(HttpMethod::Get, "/hello", "hello")
        .expect("static route should register");
    router.seal();

    let (handler, params) = router
        .find(HttpMethod::Get, "/hello")
        .expect("router should be sealed")
        .into_matched()
        .expect("static route should match");

    assert_eq!(handler, "hello");
    assert!(params.is_empty());
}

#[test]
fn router_when_case_sensitive_default_then_rejects_different_case() {
    let router = Router::new(None);
    router
        .add(HttpMethod::Get, "/Case/Sensitive", "case")
        .expect("route should register");
    router.seal();

    let outcome = router
        .find(HttpMethod::Get, "/case/sensitive")
        .expect("router should be sealed");
    assert_eq!(outcome, MatchOutcome::NotFound);
}

#[test]
fn router_when_case_insensitive_enabled_then_matches_different_case() {
    let router = Router::new(Some(
        RouterOptions::builder()
            .case_sensitive(false)
            .build()
            .expect("options should build"),
    ));
    router
        .add(HttpMethod::Get, "/Users/Profile", "profile")
        .expect("route should register");
    router.seal();

    let outcome = router
        .find(HttpMethod::Get, "/users/PROFILE")
        .expect("router should be sealed");
    assert_eq!(outcome.handler(), Some(&"profile"));
}

#[test]
fn router_when_trailing_slashes_present_then_ignored() {
    let router = Router::new(None);
    router
        .add(HttpMethod::Get, "/posts/view/", "view")
        .expect("route should register");
    router.seal();

    for path in ["/posts/view", "/posts/view/", "/posts/view///"] {
        let outcome = router
            .find(HttpMethod::Get, path)
            .expect("router should be sealed");
        assert_eq!(outcome.handler(), Some(&"view"), "path {path}");
    }
}

#[test]
fn router_when_prefix_only_matches_then_returns_not_found() {
    let router = Router::new(None);
    router
        .add(HttpMethod::Get, "/posts/view", "view")
        .expect("route should register");
    router.seal();

    for path in ["/posts", "/posts/view/extra", "/posts/viewer"] {
        let outcome = router
            .find(HttpMethod::Get, path)
            .expect("router should be sealed");
        assert_eq!(outcome, MatchOutcome::NotFound, "path {path}");
    }
}

#[test]
fn router_when_same_path_registered_for_many_methods_then_each_resolves() {
    let router = Router::new(None);
    for method in HttpMethod::ALL {
        router
            .add(method, "/resource", method.as_str())
            .expect("route should register");
    }
    router.seal();

    for method in HttpMethod::ALL {
        let outcome = router
            .find(method, "/resource")
            .expect("router should be sealed");
        assert_eq!(outcome.handler(), Some(&method.as_str()));
    }

    let readonly = router
        .get_readonly()
        .expect("readonly snapshot should be available");
    assert_eq!(readonly.tree().node_count(), 2);
}
