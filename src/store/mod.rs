//! View-model store for server-fetched collections.
//!
//! One slice per remote resource, each an explicit fetch-cycle container
//! owned by the application shell and passed by reference to whatever
//! renders it. No ambient singletons: the store is created at startup and
//! lives exactly as long as the shell.

mod collection;

pub use collection::{RemoteCollection, RemoteRecord};

use crate::api::{Category, GiftCard, Review, User};

/// All remote state the storefront renders from.
#[derive(Debug, Default)]
pub struct Store {
    /// Category listing for the home page and navigation.
    pub categories: RemoteCollection<Category>,
    /// Curated trending cards for the home page.
    pub trending: RemoteCollection<GiftCard>,
    /// Full searchable card list for explore/category/search views.
    /// Independent of `trending`: each has its own fetch cycle.
    pub all_items: RemoteCollection<GiftCard>,
    /// Highly-rated reviews shown on the home page.
    pub reviews: RemoteCollection<Review>,
    /// The signed-in user's record for the dashboard.
    pub user: RemoteRecord<User>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }
}
