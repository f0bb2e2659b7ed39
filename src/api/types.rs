//! Response schemas for the marketplace endpoints.
//!
//! The upstream wraps each list in a differently-named envelope field
//! (`category`, `items`, `reviews`); envelopes stay private to the client
//! and only the inner payload types are exposed.

use serde::Deserialize;

/// A storefront category (gaming, shopping, travel, ...).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Category {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// A purchasable gift card.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GiftCard {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub discount: Option<f64>,
    #[serde(default)]
    pub image: Option<String>,
}

/// A customer review shown on the storefront.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Review {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default, alias = "author")]
    pub name: Option<String>,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default, alias = "comment")]
    pub text: Option<String>,
}

/// A user record from the demo user service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CategoryEnvelope {
    pub category: Vec<Category>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ItemsEnvelope {
    pub items: Vec<GiftCard>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReviewsEnvelope {
    pub reviews: Vec<Review>,
}

/// Shape of an upstream error body; only the message is of interest.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_envelope_parses() {
        let body = r#"{"category":[{"_id":"c1","name":"Gaming","slug":"gaming"}]}"#;
        let envelope: CategoryEnvelope = serde_json::from_str(body).expect("parse envelope");
        assert_eq!(envelope.category.len(), 1);
        assert_eq!(envelope.category[0].id, "c1");
        assert_eq!(envelope.category[0].slug.as_deref(), Some("gaming"));
        assert_eq!(envelope.category[0].image, None);
    }

    #[test]
    fn items_envelope_tolerates_missing_optionals() {
        let body = r#"{"items":[{"id":"g1","name":"Steam 50"},{"_id":"g2","name":"PSN 20","price":19.5,"discount":3.0}]}"#;
        let envelope: ItemsEnvelope = serde_json::from_str(body).expect("parse envelope");
        assert_eq!(envelope.items.len(), 2);
        assert_eq!(envelope.items[0].price, None);
        assert_eq!(envelope.items[1].id, "g2");
        assert_eq!(envelope.items[1].price, Some(19.5));
    }

    #[test]
    fn reviews_envelope_accepts_aliases() {
        let body = r#"{"reviews":[{"_id":"r1","author":"Priya","rating":5,"comment":"Instant delivery"}]}"#;
        let envelope: ReviewsEnvelope = serde_json::from_str(body).expect("parse envelope");
        assert_eq!(envelope.reviews[0].name.as_deref(), Some("Priya"));
        assert_eq!(envelope.reviews[0].rating, Some(5));
        assert_eq!(envelope.reviews[0].text.as_deref(), Some("Instant delivery"));
    }

    #[test]
    fn user_parses_bare_object() {
        let body = r#"{"id":1,"name":"Leanne Graham","email":"leanne@example.com","phone":"1-770-736-8031"}"#;
        let user: User = serde_json::from_str(body).expect("parse user");
        assert_eq!(user.id, 1);
        assert_eq!(user.phone.as_deref(), Some("1-770-736-8031"));
    }

    #[test]
    fn missing_envelope_field_is_an_error() {
        let body = r#"{"categories":[]}"#;
        assert!(serde_json::from_str::<CategoryEnvelope>(body).is_err());
    }
}
