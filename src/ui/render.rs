//! Frame rendering.
//!
//! One arm per view: the `match` below is exhaustive over [`View`], so a
//! new view without a render arm fails to compile instead of rendering a
//! blank screen.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use crate::api::GiftCard;
use crate::router::View;
use crate::store::{RemoteCollection, RemoteRecord};
use crate::ui::app::{App, ExploreFocus};
use crate::ui::otp::OtpEntry;
use crate::ui::signin::{AuthChoice, LoginMethod, SignInStep};
use crate::ui::signup::{SignUpField, SignUpStep};
use crate::ui::theme;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

    draw_header(frame, app, chunks[0]);
    draw_body(frame, app, chunks[1]);
    draw_footer(frame, app, chunks[2]);
}

fn draw_header(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let view = app.router().current();
    let mut spans = vec![
        Span::styled("giftmart", Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD)),
        Span::raw("  "),
        Span::raw(view.title()),
        Span::styled(format!("  {}", view.path()), Style::default().fg(theme::DIM)),
    ];
    if let Some(previous) = app.router().state().previous {
        spans.push(Span::styled(
            format!("  (from {})", previous.title()),
            Style::default().fg(theme::DIM),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL)),
        area,
    );
}

fn draw_footer(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let hints = match app.router().current() {
        View::SignIn | View::SignUp => "Enter continue · Tab switch/toggle · Esc back",
        View::Explore => "Tab search/list · Enter search/open · Esc back",
        View::Home => "↑↓ select · Enter open · 1-9 category · e explore · a account · q quit",
        _ => "←→ back/forward · h home · e explore · a account · r refresh · q quit",
    };
    frame.render_widget(
        Paragraph::new(hints).style(Style::default().fg(theme::DIM)).block(Block::default().borders(Borders::ALL)),
        area,
    );
}

fn draw_body(frame: &mut Frame<'_>, app: &App, area: Rect) {
    match app.router().current() {
        View::Home => draw_home(frame, app, area),
        View::Explore => draw_explore(frame, app, area),
        View::Category => draw_card_list(
            frame,
            app,
            area,
            &format!(
                "Category: {}",
                app.router().param("categoryName").unwrap_or("All")
            ),
        ),
        View::SearchResults => draw_card_list(
            frame,
            app,
            area,
            &format!("Results for '{}'", app.router().param("search").unwrap_or("")),
        ),
        View::GiftCardDetail => draw_detail(frame, app, area),
        View::Checkout => draw_checkout(frame, app, area),
        View::Auth => draw_static(
            frame,
            area,
            "Welcome",
            &["Press 'i' to sign in.", "Press 'u' to create an account."],
        ),
        View::SignIn => draw_signin(frame, app, area),
        View::SignUp => draw_signup(frame, app, area),
        View::Dashboard => draw_dashboard(frame, app, area),
        View::Profile => draw_dashboard(frame, app, area),
        View::Orders => draw_static(frame, area, "Orders", &["No orders yet."]),
        View::Wallet => draw_static(frame, area, "Wallet", &["Balance: —"]),
        View::Favorites => draw_static(frame, area, "Favorites", &["Nothing saved yet."]),
        View::Settings => draw_static(frame, area, "Settings", &["Nothing to configure here."]),
        View::Blog => draw_static(frame, area, "Blog", &["Latest posts live on the web app."]),
        View::BlogPost => draw_static(frame, area, "Blog Post", &["Post content unavailable."]),
        View::Partners => draw_static(frame, area, "Partners", &["Brand partnerships overview."]),
        View::About => draw_static(frame, area, "About", &["A marketplace for digital gift cards."]),
        View::Support => draw_static(frame, area, "Support", &["Email support@giftmart.example"]),
        View::Faq => draw_static(frame, area, "FAQ", &["How fast is delivery? Instant."]),
    }
}

// ----------------------------------------------------------------------
// Shared pieces
// ----------------------------------------------------------------------

/// One status line for a collection: spinner text, inert error, or count.
fn status_line<T>(collection: &RemoteCollection<T>, what: &str) -> Line<'static> {
    if collection.is_loading() {
        Line::from(Span::styled(
            format!("Loading {}...", what),
            Style::default().fg(theme::DIM),
        ))
    } else if let Some(error) = collection.error() {
        Line::from(Span::styled(
            format!("Could not load {}: {}", what, error),
            Style::default().fg(theme::ERROR),
        ))
    } else {
        Line::from(Span::styled(
            format!("{} {}", collection.data().len(), what),
            Style::default().fg(theme::DIM),
        ))
    }
}

fn card_label(card: &GiftCard) -> String {
    match card.price {
        Some(price) => format!("{}  ₹{:.2}", card.name, price),
        None => card.name.clone(),
    }
}

fn selectable_list(frame: &mut Frame<'_>, area: Rect, title: &str, rows: Vec<String>, selected: usize) {
    let items: Vec<ListItem<'_>> = rows.into_iter().map(ListItem::new).collect();
    let mut state = ListState::default();
    if !items.is_empty() {
        state.select(Some(selected.min(items.len() - 1)));
    }
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title.to_string()))
        .highlight_style(Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_static(frame: &mut Frame<'_>, area: Rect, title: &str, lines: &[&str]) {
    let text: Vec<Line<'_>> = lines.iter().map(|l| Line::from(*l)).collect();
    frame.render_widget(
        Paragraph::new(text)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title(title.to_string())),
        area,
    );
}

// ----------------------------------------------------------------------
// Catalog views
// ----------------------------------------------------------------------

fn draw_home(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),
            Constraint::Length(4),
            Constraint::Length(5),
        ])
        .split(area);

    let store = app.store();
    let rows: Vec<String> = app.visible_items().iter().map(|c| card_label(c)).collect();
    if rows.is_empty() {
        frame.render_widget(
            Paragraph::new(vec![status_line(&store.trending, "trending cards")])
                .block(Block::default().borders(Borders::ALL).title("Trending Gift Cards")),
            chunks[0],
        );
    } else {
        selectable_list(frame, chunks[0], "Trending Gift Cards", rows, app.selection());
    }

    let mut category_lines = vec![status_line(&store.categories, "categories")];
    let names: Vec<String> = store
        .categories
        .data()
        .iter()
        .take(9)
        .enumerate()
        .map(|(i, c)| format!("[{}] {}", i + 1, c.name))
        .collect();
    if !names.is_empty() {
        category_lines.push(Line::from(names.join("  ")));
    }
    frame.render_widget(
        Paragraph::new(category_lines)
            .block(Block::default().borders(Borders::ALL).title("Categories")),
        chunks[1],
    );

    let mut review_lines = vec![status_line(&store.reviews, "reviews")];
    for review in store.reviews.data().iter().take(3) {
        let stars = "★".repeat(usize::from(review.rating.unwrap_or(0)));
        review_lines.push(Line::from(format!(
            "{} {} — {}",
            stars,
            review.name.as_deref().unwrap_or("Anonymous"),
            review.text.as_deref().unwrap_or(""),
        )));
    }
    frame.render_widget(
        Paragraph::new(review_lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Loved by customers")),
        chunks[2],
    );
}

fn draw_explore(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let search_style = if app.explore_focus() == ExploreFocus::Search {
        Style::default().fg(theme::ACCENT)
    } else {
        Style::default()
    };
    frame.render_widget(
        Paragraph::new(format!("{}_", app.search_input()))
            .style(search_style)
            .block(Block::default().borders(Borders::ALL).title("Search")),
        chunks[0],
    );

    draw_card_list(frame, app, chunks[1], "All Gift Cards");
}

fn draw_card_list(frame: &mut Frame<'_>, app: &App, area: Rect, title: &str) {
    let collection = &app.store().all_items;
    if collection.is_loading() || collection.error().is_some() {
        let lines = vec![status_line(collection, "gift cards")];
        frame.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title.to_string())),
            area,
        );
        return;
    }
    let rows: Vec<String> = app.visible_items().iter().map(|c| card_label(c)).collect();
    if rows.is_empty() {
        draw_static(frame, area, title, &["No gift cards found."]);
        return;
    }
    selectable_list(frame, area, title, rows, app.selection());
}

// ----------------------------------------------------------------------
// Detail, checkout, dashboard
// ----------------------------------------------------------------------

fn draw_detail(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let Some(name) = app.router().param("name") else {
        // Deep-linked or post-history entry: params are gone by design.
        draw_static(
            frame,
            area,
            "Gift card not found",
            &["This card is no longer available.", "Press Esc to go back or 'h' for home."],
        );
        return;
    };
    let mut lines = vec![Line::from(Span::styled(
        name.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    if let Some(price) = app.router().param("price") {
        lines.push(Line::from(format!("Price: ₹{}", price)));
    }
    if let Some(id) = app.router().param("id") {
        lines.push(Line::from(Span::styled(
            format!("Ref: {}", id),
            Style::default().fg(theme::DIM),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from("Press Enter to buy now."));
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Gift Card")),
        area,
    );
}

fn draw_checkout(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let Some(name) = app.router().param("name") else {
        draw_static(
            frame,
            area,
            "Checkout session missing",
            &["There is nothing to check out.", "Press 'h' to return home."],
        );
        return;
    };
    let price = app.router().param("price").unwrap_or("—");
    let lines = vec![
        Line::from(format!("Item: {}", name)),
        Line::from(format!("Total: ₹{}", price)),
        Line::from(""),
        Line::from("Payment is completed in the web app."),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Checkout")),
        area,
    );
}

fn draw_dashboard(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let user: &RemoteRecord<crate::api::User> = &app.store().user;
    let lines: Vec<Line<'_>> = if user.is_loading() {
        vec![Line::from(Span::styled("Loading account...", Style::default().fg(theme::DIM)))]
    } else if let Some(error) = user.error() {
        vec![Line::from(Span::styled(
            format!("Could not load account: {}", error),
            Style::default().fg(theme::ERROR),
        ))]
    } else if let Some(user) = user.data() {
        vec![
            Line::from(Span::styled(user.name.clone(), Style::default().add_modifier(Modifier::BOLD))),
            Line::from(user.email.clone()),
            Line::from(user.phone.clone().unwrap_or_default()),
        ]
    } else {
        vec![Line::from("Sign in to see your account.")]
    };
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Account")),
        area,
    );
}

// ----------------------------------------------------------------------
// Auth wizards
// ----------------------------------------------------------------------

fn wizard_frame(
    frame: &mut Frame<'_>,
    area: Rect,
    title: &str,
    step_label: String,
    mut lines: Vec<Line<'static>>,
    loading: bool,
    error: Option<&str>,
) {
    let mut text = vec![
        Line::from(Span::styled(step_label, Style::default().fg(theme::DIM))),
        Line::from(""),
    ];
    text.append(&mut lines);
    if loading {
        text.push(Line::from(""));
        text.push(Line::from(Span::styled("Please wait...", Style::default().fg(theme::DIM))));
    }
    if let Some(error) = error {
        text.push(Line::from(""));
        text.push(Line::from(Span::styled(error.to_string(), Style::default().fg(theme::ERROR))));
    }
    frame.render_widget(
        Paragraph::new(text)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title(title.to_string())),
        area,
    );
}

fn choice_line(label: &str, selected: bool) -> Line<'static> {
    let marker = if selected { "(•)" } else { "( )" };
    let style = if selected {
        Style::default().fg(theme::ACCENT)
    } else {
        Style::default()
    };
    Line::from(Span::styled(format!("{} {}", marker, label), style))
}

fn otp_line(otp: &OtpEntry) -> Line<'static> {
    let rendered: Vec<String> = otp
        .slots()
        .iter()
        .enumerate()
        .map(|(i, slot)| {
            let c = slot.unwrap_or('_');
            if i == otp.cursor() {
                format!("[{}]", c)
            } else {
                format!(" {} ", c)
            }
        })
        .collect();
    Line::from(rendered.join(""))
}

fn countdown_line(timer: u16, can_resend: bool) -> Line<'static> {
    if can_resend {
        Line::from(Span::styled(
            "Didn't get it? Press Tab to resend.",
            Style::default().fg(theme::OK),
        ))
    } else {
        Line::from(Span::styled(
            format!("Resend available in {}s", timer),
            Style::default().fg(theme::DIM),
        ))
    }
}

fn draw_signin(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let state = app.signin();
    let (step_label, lines) = match state.step {
        SignInStep::Method => (
            "Step 1 of 4 — How would you like to sign in?".to_string(),
            vec![
                choice_line("Email Address", state.method == LoginMethod::Email),
                choice_line("Mobile Number", state.method == LoginMethod::Mobile),
                Line::from(""),
                Line::from(format!("{}: {}_", state.method.label(), state.identifier)),
            ],
        ),
        SignInStep::AuthChoice => (
            "Step 2 of 4 — Choose verification".to_string(),
            vec![
                choice_line("Password", state.auth_choice == AuthChoice::Password),
                choice_line("One-time code", state.auth_choice == AuthChoice::Otp),
            ],
        ),
        SignInStep::Password => (
            "Step 3 of 4 — Enter your password".to_string(),
            vec![
                Line::from(format!("Password: {}_", "*".repeat(state.password.len()))),
                Line::from(format!(
                    "[{}] Remember me (Tab to toggle)",
                    if state.remember_me { "x" } else { " " }
                )),
            ],
        ),
        SignInStep::Otp => (
            "Step 3 of 4 — Enter the 6-digit code".to_string(),
            vec![otp_line(&state.otp), countdown_line(state.otp_timer, state.can_resend)],
        ),
        SignInStep::Complete => (
            "Done".to_string(),
            vec![Line::from(Span::styled("Signed in!", Style::default().fg(theme::OK)))],
        ),
    };
    wizard_frame(frame, area, "Sign In", step_label, lines, state.loading, state.error.as_deref());
}

fn signup_field_line(label: &str, value: &str, focused: bool, masked: bool) -> Line<'static> {
    let shown = if masked {
        "*".repeat(value.len())
    } else {
        value.to_string()
    };
    let style = if focused {
        Style::default().fg(theme::ACCENT)
    } else {
        Style::default()
    };
    Line::from(Span::styled(format!("{}: {}_", label, shown), style))
}

fn draw_signup(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let state = app.signup();
    let focus = app.signup_focus();
    let (step_label, lines) = match state.step {
        SignUpStep::Method => (
            "Step 1 of 5 — How should we reach you?".to_string(),
            vec![
                choice_line("Email Address", state.method == LoginMethod::Email),
                choice_line("Mobile Number", state.method == LoginMethod::Mobile),
            ],
        ),
        SignUpStep::Details => (
            "Step 2 of 5 — Tell us about yourself".to_string(),
            vec![
                signup_field_line("Full name", &state.full_name, focus == SignUpField::FullName, false),
                signup_field_line(
                    state.method.label(),
                    &state.identifier,
                    focus == SignUpField::Identifier,
                    false,
                ),
                signup_field_line(
                    "Date of birth",
                    &state.date_of_birth,
                    focus == SignUpField::DateOfBirth,
                    false,
                ),
                Line::from(format!(
                    "[{}] I agree to the terms (Ctrl-T to toggle)",
                    if state.agree_terms { "x" } else { " " }
                )),
            ],
        ),
        SignUpStep::Otp => (
            "Step 3 of 5 — Enter the 6-digit code".to_string(),
            vec![otp_line(&state.otp), countdown_line(state.otp_timer, state.can_resend)],
        ),
        SignUpStep::Password => (
            "Step 4 of 5 — Create a password".to_string(),
            vec![
                signup_field_line("Password", &state.password, focus == SignUpField::Password, true),
                signup_field_line(
                    "Confirm password",
                    &state.confirm_password,
                    focus == SignUpField::ConfirmPassword,
                    true,
                ),
            ],
        ),
        SignUpStep::Complete => (
            "Step 5 of 5 — All set".to_string(),
            vec![
                Line::from(Span::styled("Account created!", Style::default().fg(theme::OK))),
                Line::from("Press Enter to go to your dashboard."),
            ],
        ),
    };
    wizard_frame(frame, area, "Sign Up", step_label, lines, state.loading, state.error.as_deref());
}
