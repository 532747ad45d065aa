//! Shared fixtures for the homepage core integration tests.

#![allow(dead_code)]

use premier_markets_sdk::models::{MarketAsset, Testimonial, TestimonialIcon};
use premier_markets_sdk::Homepage;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Default homepage with a seeded series provider so chart assertions are
/// reproducible.
pub fn sample_homepage() -> Homepage {
    init_logging();
    Homepage::builder().series_seed(7).build().unwrap()
}

/// Minimal three-asset catalog: one crypto, two commodities.
pub fn tiny_assets() -> Vec<MarketAsset> {
    vec![
        asset("btc", "cryptocurrencies"),
        asset("gold", "commodities"),
        asset("oil", "commodities"),
    ]
}

pub fn asset(id: &str, category: &str) -> MarketAsset {
    MarketAsset {
        id: id.to_string(),
        name: id.to_uppercase(),
        symbol: id.to_uppercase(),
        logo: "·".to_string(),
        price: "100.00".to_string(),
        buy_price: "100.10".to_string(),
        sell_price: "99.90".to_string(),
        change: "+1.00".to_string(),
        change_percent: "+1.00%".to_string(),
        is_positive: true,
        category: category.to_string(),
        buyers: 50.0,
        sellers: 50.0,
        low: "95.00".to_string(),
        high: "105.00".to_string(),
    }
}

pub fn testimonial(id: &str, review: &str) -> Testimonial {
    Testimonial {
        id: id.to_string(),
        review: review.to_string(),
        name: format!("Author {id}"),
        initials: "AA".to_string(),
        icon: TestimonialIcon::Email,
    }
}

/// `n` testimonials with short bodies and ids `"1"`..`"{n}"`.
pub fn testimonials(n: usize) -> Vec<Testimonial> {
    (1..=n)
        .map(|i| testimonial(&i.to_string(), "Great broker, no complaints."))
        .collect()
}
