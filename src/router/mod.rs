//! Client-side view router.
//!
//! A closed set of named views is bound bidirectionally to URL-style paths.
//! The forward mapping (view → path) is total; the reverse mapping is
//! partial and falls back to [`View::Home`] for unknown paths, because an
//! arbitrary startup or history path must still render something.
//!
//! Navigation params travel in-memory only. History traversal re-derives
//! the target view from the stored path, which cannot reconstruct params,
//! so back/forward always clears them. That asymmetry is deliberate and
//! kept from the storefront's observed behavior.

use std::collections::HashMap;

/// A named UI screen drawn from a fixed closed set.
///
/// Adding a variant without wiring its path and render arm is a compile
/// error, not a silent blank screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Home,
    Explore,
    Category,
    SearchResults,
    GiftCardDetail,
    Checkout,
    Auth,
    SignIn,
    SignUp,
    Dashboard,
    Profile,
    Orders,
    Wallet,
    Favorites,
    Settings,
    Blog,
    BlogPost,
    Partners,
    About,
    Support,
    Faq,
}

impl View {
    pub const ALL: [View; 21] = [
        View::Home,
        View::Explore,
        View::Category,
        View::SearchResults,
        View::GiftCardDetail,
        View::Checkout,
        View::Auth,
        View::SignIn,
        View::SignUp,
        View::Dashboard,
        View::Profile,
        View::Orders,
        View::Wallet,
        View::Favorites,
        View::Settings,
        View::Blog,
        View::BlogPost,
        View::Partners,
        View::About,
        View::Support,
        View::Faq,
    ];

    /// The path bound to this view. Total: every view has exactly one path.
    pub fn path(self) -> &'static str {
        match self {
            View::Home => "/",
            View::Explore => "/explore",
            View::Category => "/category",
            View::SearchResults => "/search-results",
            View::GiftCardDetail => "/gift-card-detail",
            View::Checkout => "/checkout",
            View::Auth => "/auth",
            View::SignIn => "/signin",
            View::SignUp => "/signup",
            View::Dashboard => "/dashboard",
            View::Profile => "/profile",
            View::Orders => "/orders",
            View::Wallet => "/wallet",
            View::Favorites => "/favorites",
            View::Settings => "/settings",
            View::Blog => "/blog",
            View::BlogPost => "/blog-post",
            View::Partners => "/partners",
            View::About => "/about",
            View::Support => "/support",
            View::Faq => "/faq",
        }
    }

    /// Reverse mapping. Partial: `None` for paths outside the closed set.
    pub fn try_from_path(path: &str) -> Option<View> {
        Self::ALL.into_iter().find(|view| view.path() == path)
    }

    /// Reverse mapping with the deliberate home fallback.
    pub fn from_path_or_home(path: &str) -> View {
        Self::try_from_path(path).unwrap_or(View::Home)
    }

    /// Human-readable title for headers and logs.
    pub fn title(self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Explore => "Explore",
            View::Category => "Category",
            View::SearchResults => "Search Results",
            View::GiftCardDetail => "Gift Card",
            View::Checkout => "Checkout",
            View::Auth => "Welcome",
            View::SignIn => "Sign In",
            View::SignUp => "Sign Up",
            View::Dashboard => "Dashboard",
            View::Profile => "Profile",
            View::Orders => "Orders",
            View::Wallet => "Wallet",
            View::Favorites => "Favorites",
            View::Settings => "Settings",
            View::Blog => "Blog",
            View::BlogPost => "Blog Post",
            View::Partners => "Partners",
            View::About => "About",
            View::Support => "Support",
            View::Faq => "FAQ",
        }
    }
}

/// Opaque navigation params: a string key/value bag handed to the target
/// view. Never serialized into the path.
pub type NavParams = HashMap<String, String>;

/// The router's observable state: exactly one view is current at any time.
#[derive(Debug, Clone, PartialEq)]
pub struct RouterState {
    pub current: View,
    pub params: Option<NavParams>,
    pub previous: Option<View>,
}

/// Process-wide router instance, owned by the application shell.
///
/// The browser history is modeled in-process: `navigate` pushes an entry,
/// `go_back`/`go_forward` traverse stored paths the way popstate would.
#[derive(Debug)]
pub struct Router {
    state: RouterState,
    /// Paths behind the current entry, oldest first.
    back: Vec<&'static str>,
    /// Paths ahead of the current entry, nearest last.
    forward: Vec<&'static str>,
}

impl Router {
    /// Initializes the router from a startup path.
    pub fn from_path(path: &str) -> Self {
        Self {
            state: RouterState {
                current: View::from_path_or_home(path),
                params: None,
                previous: None,
            },
            back: Vec::new(),
            forward: Vec::new(),
        }
    }

    pub fn state(&self) -> &RouterState {
        &self.state
    }

    pub fn current(&self) -> View {
        self.state.current
    }

    pub fn params(&self) -> Option<&NavParams> {
        self.state.params.as_ref()
    }

    /// Convenience lookup of a single param value.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.state
            .params
            .as_ref()
            .and_then(|params| params.get(key))
            .map(String::as_str)
    }

    /// Pushes a history entry for `view` and makes it current.
    ///
    /// Params are carried as-is; the previous view is remembered. Any
    /// forward history is discarded, as a browser would on pushState.
    pub fn navigate(&mut self, view: View, params: Option<NavParams>) {
        tracing::debug!(prev = self.state.current.title(), next = view.title(), "navigate");
        self.back.push(self.state.current.path());
        self.forward.clear();
        self.state = RouterState {
            current: view,
            params,
            previous: Some(self.state.current),
        };
    }

    /// Steps back one history entry. Returns false at the start of history,
    /// in which case the state is untouched and the shell decides what
    /// leaving the app means.
    pub fn go_back(&mut self) -> bool {
        let Some(path) = self.back.pop() else {
            return false;
        };
        self.forward.push(self.state.current.path());
        self.apply_history_path(path);
        true
    }

    /// Steps forward one history entry, the inverse of [`Router::go_back`].
    pub fn go_forward(&mut self) -> bool {
        let Some(path) = self.forward.pop() else {
            return false;
        };
        self.back.push(self.state.current.path());
        self.apply_history_path(path);
        true
    }

    /// History traversal: the view is re-derived from the stored path and
    /// params are always dropped (the path cannot reconstruct them).
    fn apply_history_path(&mut self, path: &str) {
        self.state = RouterState {
            current: View::from_path_or_home(path),
            params: None,
            previous: Some(self.state.current),
        };
    }
}
