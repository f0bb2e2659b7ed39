use giftmart::router::{NavParams, Router, View};

fn category_params() -> NavParams {
    NavParams::from([
        ("category".to_string(), "gaming".to_string()),
        ("categoryName".to_string(), "Gaming".to_string()),
    ])
}

#[test]
fn navigate_reaches_every_view() {
    for view in View::ALL {
        let mut router = Router::from_path("/");
        router.navigate(view, None);
        assert_eq!(router.current(), view);
        assert_eq!(router.current().path(), view.path());
    }
}

#[test]
fn view_path_mapping_round_trips() {
    for view in View::ALL {
        let path = view.path();
        let derived = View::from_path_or_home(path);
        assert_eq!(derived.path(), path);
    }
}

#[test]
fn unrecognized_path_derives_home() {
    for path in ["/definitely-not-a-page", "/explore/", "explore", ""] {
        assert_eq!(View::from_path_or_home(path), View::Home);
    }
}

#[test]
fn params_survive_until_next_navigation() {
    let mut router = Router::from_path("/");
    router.navigate(View::Category, Some(category_params()));
    assert_eq!(router.param("category"), Some("gaming"));
    assert_eq!(router.param("categoryName"), Some("Gaming"));

    router.navigate(View::Explore, None);
    assert_eq!(router.params(), None);
}

#[test]
fn back_drops_params_and_restores_prior_view() {
    let mut router = Router::from_path("/");
    router.navigate(View::Explore, None);
    router.navigate(View::Category, Some(category_params()));
    assert_eq!(router.current(), View::Category);
    assert_eq!(router.param("category"), Some("gaming"));

    assert!(router.go_back());
    assert_eq!(router.current(), View::Explore);
    assert_eq!(router.params(), None);
    assert_eq!(router.state().previous, Some(View::Category));
}

#[test]
fn forward_after_back_also_drops_params() {
    let mut router = Router::from_path("/");
    router.navigate(View::GiftCardDetail, Some(category_params()));
    assert!(router.go_back());
    assert!(router.go_forward());
    assert_eq!(router.current(), View::GiftCardDetail);
    // Forward traversal re-derives from the path; params cannot come back.
    assert_eq!(router.params(), None);
}

#[test]
fn back_at_start_of_history_is_a_no_op() {
    let mut router = Router::from_path("/explore");
    assert!(!router.go_back());
    assert_eq!(router.current(), View::Explore);
    assert_eq!(router.state().previous, None);
}

#[test]
fn navigate_discards_forward_history() {
    let mut router = Router::from_path("/");
    router.navigate(View::Explore, None);
    router.navigate(View::Blog, None);
    assert!(router.go_back());
    router.navigate(View::Faq, None);
    // The /blog entry was discarded by the new navigation.
    assert!(!router.go_forward());
    assert_eq!(router.current(), View::Faq);
}

#[test]
fn previous_view_tracks_each_transition() {
    let mut router = Router::from_path("/");
    assert_eq!(router.state().previous, None);

    router.navigate(View::Explore, None);
    assert_eq!(router.state().previous, Some(View::Home));

    router.navigate(View::SignIn, None);
    assert_eq!(router.state().previous, Some(View::Explore));

    assert!(router.go_back());
    assert_eq!(router.state().previous, Some(View::SignIn));
}
