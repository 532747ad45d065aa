//! Built-in sample catalogs.
//!
//! Hand-entered placeholder data for the homepage widgets. In production
//! these collections come from an API; the shapes stay the same.

use crate::models::{MarketAsset, MarketCategory, Testimonial, TestimonialIcon};

pub fn market_categories() -> Vec<MarketCategory> {
    vec![
        category("most-traded", "Most Traded"),
        category("commodities", "Commodities"),
        category("indices", "Indices"),
        category("cryptocurrencies", "Cryptocurrencies"),
        category("shares", "Shares"),
        category("etfs", "ETFs"),
    ]
}

pub fn timeframes() -> Vec<String> {
    ["1d", "1h", "4h", "1m", "5m", "15m", "30m", "1w"]
        .into_iter()
        .map(String::from)
        .collect()
}

pub fn market_assets() -> Vec<MarketAsset> {
    vec![
        MarketAsset {
            id: "btc".into(),
            name: "BTC Bitcoin".into(),
            symbol: "BTC".into(),
            logo: "₿".into(),
            price: "52,400.00".into(),
            buy_price: "52,450.00".into(),
            sell_price: "52,350.00".into(),
            change: "+1,250.00".into(),
            change_percent: "+3,25%".into(),
            is_positive: true,
            category: "cryptocurrencies".into(),
            buyers: 66.93,
            sellers: 33.07,
            low: "51,200.00".into(),
            high: "52,800.00".into(),
        },
        MarketAsset {
            id: "eth".into(),
            name: "ETH Ethereum".into(),
            symbol: "ETH".into(),
            logo: "Ξ".into(),
            price: "3,250.00".into(),
            buy_price: "3,255.00".into(),
            sell_price: "3,245.00".into(),
            change: "+85.50".into(),
            change_percent: "+2.70%".into(),
            is_positive: true,
            category: "cryptocurrencies".into(),
            buyers: 58.20,
            sellers: 41.80,
            low: "3,180.00".into(),
            high: "3,280.00".into(),
        },
        MarketAsset {
            id: "gold".into(),
            name: "Gold".into(),
            symbol: "XAU/USD".into(),
            logo: "🥇".into(),
            price: "3773.31".into(),
            buy_price: "3773.61".into(),
            sell_price: "3773.01".into(),
            change: "+15.50".into(),
            change_percent: "+0.41%".into(),
            is_positive: true,
            category: "commodities".into(),
            buyers: 66.93,
            sellers: 33.07,
            low: "3686.38".into(),
            high: "3788.96".into(),
        },
        MarketAsset {
            id: "oil".into(),
            name: "Crude Oil".into(),
            symbol: "WTI/USD".into(),
            logo: "🛢".into(),
            price: "78.45".into(),
            buy_price: "78.50".into(),
            sell_price: "78.40".into(),
            change: "-0.85".into(),
            change_percent: "-1.07%".into(),
            is_positive: false,
            category: "commodities".into(),
            buyers: 45.30,
            sellers: 54.70,
            low: "77.20".into(),
            high: "79.80".into(),
        },
        MarketAsset {
            id: "sp500".into(),
            name: "S&P 500".into(),
            symbol: "SPX".into(),
            logo: "📈".into(),
            price: "4,850.25".into(),
            buy_price: "4,852.00".into(),
            sell_price: "4,848.50".into(),
            change: "+25.50".into(),
            change_percent: "+0.53%".into(),
            is_positive: true,
            category: "indices".into(),
            buyers: 72.15,
            sellers: 27.85,
            low: "4,820.00".into(),
            high: "4,865.00".into(),
        },
        MarketAsset {
            id: "nasdaq".into(),
            name: "NASDAQ".into(),
            symbol: "NDX".into(),
            logo: "💹".into(),
            price: "15,420.75".into(),
            buy_price: "15,425.00".into(),
            sell_price: "15,416.50".into(),
            change: "+120.25".into(),
            change_percent: "+0.79%".into(),
            is_positive: true,
            category: "indices".into(),
            buyers: 68.40,
            sellers: 31.60,
            low: "15,300.00".into(),
            high: "15,450.00".into(),
        },
        MarketAsset {
            id: "apple".into(),
            name: "Apple Inc.".into(),
            symbol: "AAPL".into(),
            logo: "🍎".into(),
            price: "185.50".into(),
            buy_price: "185.75".into(),
            sell_price: "185.25".into(),
            change: "+2.30".into(),
            change_percent: "+1.26%".into(),
            is_positive: true,
            category: "shares".into(),
            buyers: 65.80,
            sellers: 34.20,
            low: "183.20".into(),
            high: "186.00".into(),
        },
        MarketAsset {
            id: "tesla".into(),
            name: "Tesla Inc.".into(),
            symbol: "TSLA".into(),
            logo: "⚡".into(),
            price: "245.80".into(),
            buy_price: "246.00".into(),
            sell_price: "245.60".into(),
            change: "-3.20".into(),
            change_percent: "-1.29%".into(),
            is_positive: false,
            category: "shares".into(),
            buyers: 42.50,
            sellers: 57.50,
            low: "243.00".into(),
            high: "249.00".into(),
        },
    ]
}

pub fn testimonials() -> Vec<Testimonial> {
    vec![
        testimonial(
            "1",
            "I'm new in trading and I really like that Premier let me start small. I can trade crypto and few other assets easy. Withdrawls are quick too. Help Center is simple to use and I learned a lot from there.",
            "Adam Keller",
            "AK",
            TestimonialIcon::Headphone,
        ),
        testimonial(
            "2",
            "Premier works well for me. KYC was fast and support people (Thx milos!!) helped me right away when I had a question. I was able to deposit and start trading in same day. Withdrawal came to my bank after 2 days. All smooth.",
            "Lucas Vermeer",
            "LV",
            TestimonialIcon::Headphone,
        ),
        testimonial(
            "3",
            "Been using Premier for about 3 months now. Card deposits go through right away and show in balance within a minute. I withdraw my profit each month and it's always in my bank by end of day. Very happy.",
            "David Lorens",
            "DL",
            TestimonialIcon::Email,
        ),
        testimonial(
            "4",
            "My experince with PM is perfect so far. Payouts come same day few hours max. Works good with both crypto and credit card. You can take money out many times per day and no hidden fees. Spreads are ok too",
            "Marco Lazzari",
            "ML",
            TestimonialIcon::Earth,
        ),
        testimonial(
            "5",
            "I think Premier's trading cost are low compare to others. Spreads are good on most pairs, deposit is free, for withdraw they have a small fee but it's fine. Thanks guys",
            "Petar Ilic",
            "PL",
            TestimonialIcon::Email,
        ),
        testimonial(
            "6",
            "Premier is a serious broker. Web platform looks nice and runs good. Support reply quick and helpful. Sometimes small slippage in busy time but nothing crazy. Commisions are low so I stay here.",
            "Mark \"Clips\" Renard",
            "MR",
            TestimonialIcon::Email,
        ),
        testimonial(
            "7",
            "Good service. Never had a single problem with withdraw. Usually takes under 24 hours. You get update when it's submitted and when it's done. Got many assets to trade and the spreads are not bad. And mT5 Thank you!",
            "TradeAce92",
            "TA",
            TestimonialIcon::Headphone,
        ),
        testimonial(
            "8",
            "Multiple withdraws made, all success. Used both bank and international transfer. Also few friends joined from my referral and no issue for them. Been here long time, still all fine.",
            "Shivani Kaur",
            "SK",
            TestimonialIcon::Earth,
        ),
        testimonial(
            "9",
            "Deposit and withdraws are fast. One time my payout came before my bank even show the deduction lol. Trade speed is good and data feed fast too. Feels like pro level broker.",
            "Mateusz Durek",
            "MD",
            TestimonialIcon::Email,
        ),
    ]
}

fn category(id: &str, label: &str) -> MarketCategory {
    MarketCategory {
        id: id.into(),
        label: label.into(),
    }
}

fn testimonial(
    id: &str,
    review: &str,
    name: &str,
    initials: &str,
    icon: TestimonialIcon,
) -> Testimonial {
    Testimonial {
        id: id.into(),
        review: review.into(),
        name: name.into(),
        initials: initials.into(),
        icon,
    }
}
