use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::runtime::Handle;

use crate::api::{ApiClient, GiftCard, ItemsQuery};
use crate::config::Config;
use crate::router::{NavParams, Router, View};
use crate::store::Store;
use crate::ui::events::{ApiEvent, AppEvent};
use crate::ui::mvi::Reducer;
use crate::ui::signin::{
    AuthCall, AuthChoice, LoginMethod, SignInIntent, SignInReducer, SignInState, SignInStep,
};
use crate::ui::signup::{
    SignUpCall, SignUpField, SignUpIntent, SignUpReducer, SignUpState, SignUpStep,
};

/// Simulated latency for auth calls; stands in for the real endpoints the
/// storefront never had.
const AUTH_CALL_DELAY: Duration = Duration::from_secs(1);

/// Which pane owns keystrokes on the explore view.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExploreFocus {
    Search,
    List,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    router: Router,
    store: Store,
    signin: SignInState,
    signup: SignUpState,
    /// Focused text field on the sign-up details/password steps.
    signup_focus: SignUpField,
    search_input: String,
    explore_focus: ExploreFocus,
    /// Cursor into the visible card list of the current view.
    selection: usize,
    api: Arc<ApiClient>,
    runtime: Handle,
    events_tx: Sender<AppEvent>,
    demo_user_id: u64,
    /// Drives the once-per-second OTP countdown off the faster UI tick.
    last_countdown: Instant,
}

impl App {
    pub fn new(
        config: &Config,
        startup_path: &str,
        api: Arc<ApiClient>,
        runtime: Handle,
        events_tx: Sender<AppEvent>,
    ) -> Self {
        let mut app = Self {
            should_quit: false,
            router: Router::from_path(startup_path),
            store: Store::new(),
            signin: SignInState::default(),
            signup: SignUpState::default(),
            signup_focus: SignUpField::FullName,
            search_input: String::new(),
            explore_focus: ExploreFocus::Search,
            selection: 0,
            api,
            runtime,
            events_tx,
            demo_user_id: config.ui.demo_user_id,
            last_countdown: Instant::now(),
        };
        app.on_view_entered();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn signin(&self) -> &SignInState {
        &self.signin
    }

    pub fn signup(&self) -> &SignUpState {
        &self.signup
    }

    pub fn signup_focus(&self) -> SignUpField {
        self.signup_focus
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn explore_focus(&self) -> ExploreFocus {
        self.explore_focus
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    /// The card list the current view renders and the cursor moves over.
    pub fn visible_items(&self) -> Vec<&GiftCard> {
        match self.router.current() {
            View::Home => self.store.trending.data().iter().collect(),
            View::Explore | View::SearchResults => self.store.all_items.data().iter().collect(),
            View::Category => {
                let wanted = self.router.param("category");
                self.store
                    .all_items
                    .data()
                    .iter()
                    .filter(|card| match (wanted, card.category.as_deref()) {
                        (Some(slug), Some(category)) => category.eq_ignore_ascii_case(slug),
                        (Some(_), None) => false,
                        (None, _) => true,
                    })
                    .collect()
            }
            _ => Vec::new(),
        }
    }

    // ------------------------------------------------------------------
    // Event entry points
    // ------------------------------------------------------------------

    pub fn on_tick(&mut self) {
        if self.last_countdown.elapsed() >= Duration::from_secs(1) {
            self.last_countdown = Instant::now();
            match self.router.current() {
                View::SignIn if self.signin.step == SignInStep::Otp => {
                    self.dispatch_signin(SignInIntent::TimerTick);
                }
                View::SignUp if self.signup.step == SignUpStep::Otp => {
                    self.dispatch_signup(SignUpIntent::TimerTick);
                }
                _ => {}
            }
        }
    }

    /// Applies a fetch completion to its slice. Stale generations are
    /// rejected inside the collection and simply ignored here.
    pub fn apply_api(&mut self, event: ApiEvent) {
        match event {
            ApiEvent::Categories { generation, result } => {
                self.store.categories.resolve(generation, result);
            }
            ApiEvent::Trending { generation, result } => {
                self.store.trending.resolve(generation, result);
            }
            ApiEvent::AllItems { generation, result } => {
                self.store.all_items.resolve(generation, result);
            }
            ApiEvent::Reviews { generation, result } => {
                self.store.reviews.resolve(generation, result);
            }
            ApiEvent::User { generation, result } => {
                self.store.user.resolve(generation, result);
            }
        }
        let max = self.visible_items().len().saturating_sub(1);
        self.selection = self.selection.min(max);
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.request_quit();
            return;
        }

        match self.router.current() {
            View::SignIn => self.on_signin_key(key),
            View::SignUp => self.on_signup_key(key),
            View::Explore => self.on_explore_key(key),
            view => self.on_browse_key(view, key),
        }
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    pub fn navigate(&mut self, view: View, params: Option<NavParams>) {
        self.router.navigate(view, params);
        self.selection = 0;
        self.on_view_entered();
    }

    /// Browser-style back. At the start of history, leaving the app is the
    /// only direction left.
    pub fn go_back(&mut self) {
        if self.router.go_back() {
            self.selection = 0;
            self.on_view_entered();
        } else {
            self.request_quit();
        }
    }

    pub fn go_forward(&mut self) {
        if self.router.go_forward() {
            self.selection = 0;
            self.on_view_entered();
        }
    }

    /// Per-view side effects of arriving: kick off first-time fetches and
    /// reset wizard state (a wizard mounts fresh every time).
    fn on_view_entered(&mut self) {
        match self.router.current() {
            View::Home => {
                if !self.store.categories.has_started() {
                    self.fetch_categories();
                }
                if !self.store.trending.has_started() {
                    self.fetch_trending();
                }
                if !self.store.reviews.has_started() {
                    self.fetch_reviews();
                }
            }
            View::Explore | View::Category => {
                if !self.store.all_items.has_started() {
                    self.fetch_all_items(String::new());
                }
            }
            View::SearchResults => {
                let search = self.router.param("search").unwrap_or_default().to_string();
                self.fetch_all_items(search);
            }
            View::Dashboard | View::Profile => {
                if !self.store.user.has_started() {
                    self.fetch_user();
                }
            }
            View::SignIn => {
                self.signin = SignInState::default();
            }
            View::SignUp => {
                self.signup = SignUpState::default();
                self.signup_focus = SignUpField::FullName;
            }
            _ => {}
        }
    }

    /// Re-issues the current view's fetches unconditionally.
    fn refresh(&mut self) {
        match self.router.current() {
            View::Home => {
                self.fetch_categories();
                self.fetch_trending();
                self.fetch_reviews();
            }
            View::Explore | View::Category => self.fetch_all_items(self.search_input.clone()),
            View::SearchResults => {
                let search = self.router.param("search").unwrap_or_default().to_string();
                self.fetch_all_items(search);
            }
            View::Dashboard | View::Profile => self.fetch_user(),
            _ => {}
        }
    }

    // ------------------------------------------------------------------
    // Key handling per view family
    // ------------------------------------------------------------------

    fn on_browse_key(&mut self, view: View, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Left => self.go_back(),
            KeyCode::Right => self.go_forward(),
            KeyCode::Char('q') => self.request_quit(),
            KeyCode::Char('h') => self.navigate(View::Home, None),
            KeyCode::Char('e') => self.navigate(View::Explore, None),
            KeyCode::Char('a') => self.navigate(View::Auth, None),
            KeyCode::Char('d') => self.navigate(View::Dashboard, None),
            KeyCode::Char('r') => self.refresh(),
            KeyCode::Char('i') if view == View::Auth => self.navigate(View::SignIn, None),
            KeyCode::Char('u') if view == View::Auth => self.navigate(View::SignUp, None),
            KeyCode::Up => self.selection = self.selection.saturating_sub(1),
            KeyCode::Down => {
                let max = self.visible_items().len().saturating_sub(1);
                self.selection = (self.selection + 1).min(max);
            }
            KeyCode::Enter => self.open_selected(view),
            KeyCode::Char(c @ '1'..='9') if view == View::Home => {
                let index = (c as usize) - ('1' as usize);
                let params = self.store.categories.data().get(index).map(|category| {
                    let slug = category
                        .slug
                        .clone()
                        .unwrap_or_else(|| category.name.to_lowercase());
                    NavParams::from([
                        ("category".to_string(), slug),
                        ("categoryName".to_string(), category.name.clone()),
                    ])
                });
                if let Some(params) = params {
                    self.navigate(View::Category, Some(params));
                }
            }
            _ => {}
        }
    }

    fn open_selected(&mut self, view: View) {
        match view {
            View::Home | View::Category | View::SearchResults => {
                let params = self
                    .visible_items()
                    .get(self.selection)
                    .map(|card| detail_params(card));
                if let Some(params) = params {
                    self.navigate(View::GiftCardDetail, Some(params));
                }
            }
            View::GiftCardDetail => {
                // Buy: hand the same card over to checkout.
                if let Some(params) = self.router.params().cloned() {
                    self.navigate(View::Checkout, Some(params));
                }
            }
            _ => {}
        }
    }

    fn on_explore_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.go_back(),
            KeyCode::Tab => {
                self.explore_focus = match self.explore_focus {
                    ExploreFocus::Search => ExploreFocus::List,
                    ExploreFocus::List => ExploreFocus::Search,
                };
            }
            _ => match self.explore_focus {
                ExploreFocus::Search => match key.code {
                    KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                        self.search_input.push(c);
                    }
                    KeyCode::Backspace => {
                        self.search_input.pop();
                    }
                    KeyCode::Enter => {
                        let params = NavParams::from([(
                            "search".to_string(),
                            self.search_input.clone(),
                        )]);
                        self.navigate(View::SearchResults, Some(params));
                    }
                    _ => {}
                },
                ExploreFocus::List => match key.code {
                    KeyCode::Up => self.selection = self.selection.saturating_sub(1),
                    KeyCode::Down => {
                        let max = self.visible_items().len().saturating_sub(1);
                        self.selection = (self.selection + 1).min(max);
                    }
                    KeyCode::Enter => {
                        let params = self
                            .visible_items()
                            .get(self.selection)
                            .map(|card| detail_params(card));
                        if let Some(params) = params {
                            self.navigate(View::GiftCardDetail, Some(params));
                        }
                    }
                    _ => {}
                },
            },
        }
    }

    fn on_signin_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc {
            // Method is terminal backwards: leaving means leaving the page.
            if self.signin.step == SignInStep::Method {
                self.go_back();
            } else {
                self.dispatch_signin(SignInIntent::Back);
            }
            return;
        }

        let intent = match (self.signin.step, key.code) {
            (SignInStep::Method, KeyCode::Tab) => {
                Some(SignInIntent::SelectMethod(match self.signin.method {
                    LoginMethod::Email => LoginMethod::Mobile,
                    LoginMethod::Mobile => LoginMethod::Email,
                }))
            }
            (SignInStep::Method, KeyCode::Char(c)) => Some(SignInIntent::IdentifierChar(c)),
            (SignInStep::Method, KeyCode::Backspace) => Some(SignInIntent::IdentifierBackspace),
            (SignInStep::Method, KeyCode::Enter) => Some(SignInIntent::SubmitMethod),

            (SignInStep::AuthChoice, KeyCode::Tab) => {
                Some(SignInIntent::SelectAuth(match self.signin.auth_choice {
                    AuthChoice::Password => AuthChoice::Otp,
                    AuthChoice::Otp => AuthChoice::Password,
                }))
            }
            (SignInStep::AuthChoice, KeyCode::Enter) => Some(SignInIntent::SubmitAuthChoice),

            (SignInStep::Password, KeyCode::Tab) => Some(SignInIntent::ToggleRememberMe),
            (SignInStep::Password, KeyCode::Char(c)) => Some(SignInIntent::PasswordChar(c)),
            (SignInStep::Password, KeyCode::Backspace) => Some(SignInIntent::PasswordBackspace),
            (SignInStep::Password, KeyCode::Enter) => Some(SignInIntent::SubmitPassword),

            (SignInStep::Otp, KeyCode::Tab) => Some(SignInIntent::ResendCode),
            (SignInStep::Otp, KeyCode::Char(c)) => Some(SignInIntent::OtpChar(c)),
            (SignInStep::Otp, KeyCode::Backspace) => Some(SignInIntent::OtpBackspace),
            (SignInStep::Otp, KeyCode::Enter) => Some(SignInIntent::SubmitOtp),

            _ => None,
        };

        if let Some(intent) = intent {
            self.dispatch_signin(intent);
        }
    }

    fn on_signup_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc {
            if self.signup.step == SignUpStep::Method {
                self.go_back();
            } else {
                self.dispatch_signup(SignUpIntent::Back);
            }
            return;
        }

        let intent = match (self.signup.step, key.code) {
            (SignUpStep::Method, KeyCode::Tab) => {
                Some(SignUpIntent::SelectMethod(match self.signup.method {
                    LoginMethod::Email => LoginMethod::Mobile,
                    LoginMethod::Mobile => LoginMethod::Email,
                }))
            }
            (SignUpStep::Method, KeyCode::Enter) => Some(SignUpIntent::SubmitMethod),

            (SignUpStep::Details, KeyCode::Tab) => {
                self.signup_focus = match self.signup_focus {
                    SignUpField::FullName => SignUpField::Identifier,
                    SignUpField::Identifier => SignUpField::DateOfBirth,
                    SignUpField::DateOfBirth => SignUpField::FullName,
                    // Password-step fields; reset if focus is stale.
                    _ => SignUpField::FullName,
                };
                None
            }
            (SignUpStep::Details, KeyCode::Char('t'))
                if key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                Some(SignUpIntent::ToggleTerms)
            }
            (SignUpStep::Details, KeyCode::Char(c)) => {
                Some(SignUpIntent::FieldChar(self.signup_focus, c))
            }
            (SignUpStep::Details, KeyCode::Backspace) => {
                Some(SignUpIntent::FieldBackspace(self.signup_focus))
            }
            (SignUpStep::Details, KeyCode::Enter) => Some(SignUpIntent::SubmitDetails),

            (SignUpStep::Otp, KeyCode::Tab) => Some(SignUpIntent::ResendCode),
            (SignUpStep::Otp, KeyCode::Char(c)) => Some(SignUpIntent::OtpChar(c)),
            (SignUpStep::Otp, KeyCode::Backspace) => Some(SignUpIntent::OtpBackspace),
            (SignUpStep::Otp, KeyCode::Enter) => Some(SignUpIntent::SubmitOtp),

            (SignUpStep::Password, KeyCode::Tab) => {
                self.signup_focus = match self.signup_focus {
                    SignUpField::ConfirmPassword => SignUpField::Password,
                    _ => SignUpField::ConfirmPassword,
                };
                None
            }
            (SignUpStep::Password, KeyCode::Char(c)) => {
                let field = match self.signup_focus {
                    SignUpField::ConfirmPassword => SignUpField::ConfirmPassword,
                    _ => SignUpField::Password,
                };
                Some(SignUpIntent::FieldChar(field, c))
            }
            (SignUpStep::Password, KeyCode::Backspace) => {
                let field = match self.signup_focus {
                    SignUpField::ConfirmPassword => SignUpField::ConfirmPassword,
                    _ => SignUpField::Password,
                };
                Some(SignUpIntent::FieldBackspace(field))
            }
            (SignUpStep::Password, KeyCode::Enter) => Some(SignUpIntent::SubmitPassword),

            (SignUpStep::Complete, KeyCode::Enter) => {
                self.navigate(View::Dashboard, None);
                None
            }

            _ => None,
        };

        if let Some(intent) = intent {
            self.dispatch_signup(intent);
        }

        // Entering the password step moves focus to its first field.
        if self.signup.step == SignUpStep::Password
            && !matches!(
                self.signup_focus,
                SignUpField::Password | SignUpField::ConfirmPassword
            )
        {
            self.signup_focus = SignUpField::Password;
        }
    }

    // ------------------------------------------------------------------
    // Wizard dispatch and async auth calls
    // ------------------------------------------------------------------

    pub fn dispatch_signin(&mut self, intent: SignInIntent) {
        let was_complete = self.signin.step == SignInStep::Complete;
        dispatch_mvi!(self, signin, SignInReducer, intent);

        if let Some(call) = self.signin.take_pending() {
            self.spawn_signin_call(call);
        }

        // Completion navigation fires exactly once: the wizard is reset the
        // moment it reports success.
        if !was_complete && self.signin.step == SignInStep::Complete {
            self.signin = SignInState::default();
            self.navigate(View::Dashboard, None);
        }
    }

    pub fn dispatch_signup(&mut self, intent: SignUpIntent) {
        dispatch_mvi!(self, signup, SignUpReducer, intent);
        if let Some(call) = self.signup.take_pending() {
            self.spawn_signup_call(call);
        }
    }

    fn spawn_signin_call(&self, call: AuthCall) {
        let tx = self.events_tx.clone();
        self.runtime.spawn(async move {
            tokio::time::sleep(AUTH_CALL_DELAY).await;
            let intent = match call {
                AuthCall::SendCode => SignInIntent::CodeSent,
                AuthCall::VerifyPassword | AuthCall::VerifyOtp => SignInIntent::AuthSucceeded,
            };
            let _ = tx.send(AppEvent::SignIn(intent));
        });
    }

    fn spawn_signup_call(&self, call: SignUpCall) {
        let tx = self.events_tx.clone();
        self.runtime.spawn(async move {
            tokio::time::sleep(AUTH_CALL_DELAY).await;
            let intent = match call {
                SignUpCall::SendCode => SignUpIntent::CodeSent,
                SignUpCall::VerifyOtp => SignUpIntent::CodeVerified,
                SignUpCall::CreateAccount => SignUpIntent::AccountCreated,
            };
            let _ = tx.send(AppEvent::SignUp(intent));
        });
    }

    // ------------------------------------------------------------------
    // Fetches
    // ------------------------------------------------------------------

    fn fetch_categories(&mut self) {
        let generation = self.store.categories.begin();
        let api = Arc::clone(&self.api);
        let tx = self.events_tx.clone();
        self.runtime.spawn(async move {
            let result = api.categories().await.map_err(|e| e.to_string());
            let _ = tx.send(AppEvent::Api(ApiEvent::Categories { generation, result }));
        });
    }

    fn fetch_trending(&mut self) {
        let generation = self.store.trending.begin();
        let api = Arc::clone(&self.api);
        let tx = self.events_tx.clone();
        self.runtime.spawn(async move {
            let result = api.trending_items().await.map_err(|e| e.to_string());
            let _ = tx.send(AppEvent::Api(ApiEvent::Trending { generation, result }));
        });
    }

    fn fetch_all_items(&mut self, search: String) {
        let generation = self.store.all_items.begin();
        let api = Arc::clone(&self.api);
        let tx = self.events_tx.clone();
        self.runtime.spawn(async move {
            let query = ItemsQuery::with_search(search);
            let result = api.items(&query).await.map_err(|e| e.to_string());
            let _ = tx.send(AppEvent::Api(ApiEvent::AllItems { generation, result }));
        });
    }

    fn fetch_reviews(&mut self) {
        let generation = self.store.reviews.begin();
        let api = Arc::clone(&self.api);
        let tx = self.events_tx.clone();
        self.runtime.spawn(async move {
            let result = api.good_reviews().await.map_err(|e| e.to_string());
            let _ = tx.send(AppEvent::Api(ApiEvent::Reviews { generation, result }));
        });
    }

    fn fetch_user(&mut self) {
        let generation = self.store.user.begin();
        let api = Arc::clone(&self.api);
        let tx = self.events_tx.clone();
        let user_id = self.demo_user_id;
        self.runtime.spawn(async move {
            let result = api.user(user_id).await.map_err(|e| e.to_string());
            let _ = tx.send(AppEvent::Api(ApiEvent::User { generation, result }));
        });
    }
}

fn detail_params(card: &GiftCard) -> NavParams {
    let mut params = NavParams::from([
        ("id".to_string(), card.id.clone()),
        ("name".to_string(), card.name.clone()),
    ]);
    if let Some(price) = card.price {
        params.insert("price".to_string(), price.to_string());
    }
    params
}
