//! Deterministic demo data.
//!
//! The storefront has no backend; these fixtures are the "already
//! validated" product collection the views render. Image URLs point at a
//! placeholder service, like any storefront demo.

use crate::catalog::{Category, Product, ProductColor, Review};
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use crate::purchase::Wallet;

fn usd(cents: i64) -> Money {
    Money::new(cents, Currency::USD)
}

fn sar(cents: i64) -> Money {
    Money::new(cents, Currency::SAR)
}

fn image(seed: u32) -> String {
    format!("https://picsum.photos/600/600?random={}", seed)
}

/// The full searchable catalog.
pub fn demo_catalog() -> Vec<Product> {
    vec![
        Product::new("prod-1", "Premium Cotton T-Shirt", "Men", usd(2999))
            .with_original_price(usd(3999))
            .with_rating(4.8, 324)
            .with_new_flag()
            .with_description(
                "Experience ultimate comfort with our premium cotton t-shirt. Made from \
                 100% organic cotton, this versatile piece features a classic fit that \
                 works for any occasion.",
            )
            .with_images(vec![
                "https://picsum.photos/800/800?random=30".to_string(),
                "https://picsum.photos/800/800?random=31".to_string(),
                "https://picsum.photos/800/800?random=32".to_string(),
                "https://picsum.photos/800/800?random=33".to_string(),
            ])
            .with_colors(vec![
                ProductColor::new("Black", "#000000", 0),
                ProductColor::new("White", "#FFFFFF", 1),
                ProductColor::new("Navy", "#1E40AF", 2),
                ProductColor::new("Gray", "#6B7280", 3),
            ])
            .with_sizes(&["XS", "S", "M", "L", "XL", "XXL"])
            .with_features(&[
                "100% Organic Cotton",
                "Pre-shrunk for perfect fit",
                "Reinforced seams",
                "Machine washable",
                "Eco-friendly dyeing process",
            ]),
        Product::new("prod-2", "Designer Denim Jacket", "Women", usd(8999))
            .with_original_price(usd(12000))
            .with_rating(4.6, 98)
            .with_images(vec![image(11)])
            .with_colors(vec![
                ProductColor::new("Indigo", "#1E40AF", 0),
                ProductColor::new("Black", "#000000", 0),
            ])
            .with_sizes(&["S", "M", "L", "XL"]),
        Product::new("prod-3", "Luxury Silk Scarf", "Accessories", usd(4599))
            .with_new_flag()
            .with_rating(4.2, 51)
            .with_images(vec![image(12)]),
        Product::new("prod-4", "Sport Running Shoes", "Footwear", usd(7999))
            .with_original_price(usd(9999))
            .with_rating(4.5, 211)
            .with_images(vec![image(13)])
            .with_sizes(&["40", "41", "42", "43", "44"]),
        Product::new("prod-5", "Elegant Evening Dress", "Women", usd(15999))
            .with_rating(4.9, 67)
            .with_images(vec![image(14)])
            .with_sizes(&["XS", "S", "M", "L"]),
        Product::new("prod-6", "Casual Polo Shirt", "Men", usd(2499))
            .with_original_price(usd(3499))
            .with_rating(4.1, 140)
            .with_images(vec![image(15)])
            .with_sizes(&["S", "M", "L", "XL", "XXL"]),
        Product::new("prod-7", "Designer Handbag", "Accessories", usd(19999))
            .with_new_flag()
            .with_rating(4.7, 89)
            .with_images(vec![image(16)]),
        Product::new("prod-8", "Winter Wool Coat", "Outerwear", usd(24999))
            .with_original_price(usd(29999))
            .with_rating(4.4, 45)
            .with_images(vec![image(17)])
            .with_sizes(&["M", "L", "XL"]),
        Product::new("prod-9", "Classic Wristwatch", "Accessories", usd(8999))
            .with_rating(4.3, 178)
            .with_images(vec![image(18)]),
        Product::new("prod-10", "Summer Sundress", "Women", usd(4999))
            .with_original_price(usd(6999))
            .with_rating(3.9, 62)
            .with_images(vec![image(19)])
            .with_sizes(&["XS", "S", "M", "L"]),
        Product::new("prod-11", "Summer Tank Top", "Men", usd(1999))
            .with_rating(3.7, 25)
            .with_images(vec![image(42)])
            .with_sizes(&["S", "M", "L"]),
        Product::new("prod-12", "Long Sleeve Tee", "Men", usd(3499))
            .with_images(vec![image(43)])
            .with_sizes(&["S", "M", "L", "XL"]),
        Product::new("prod-13", "Leather Ankle Boots", "Footwear", usd(12999))
            .with_rating(4.0, 73)
            .with_images(vec![image(44)])
            .with_sizes(&["38", "39", "40", "41"]),
        Product::new("prod-14", "Quilted Puffer Vest", "Outerwear", usd(6499))
            .out_of_stock()
            .with_rating(4.2, 31)
            .with_images(vec![image(45)])
            .with_sizes(&["M", "L"]),
    ]
}

/// The twelve hero-carousel products, priced in riyal.
pub fn hero_products() -> Vec<Product> {
    let items: [(&str, &str, i64); 12] = [
        ("Elegant Summer Dress", "Women", 29900),
        ("Casual Blouse", "Women", 14900),
        ("Denim Jeans", "Men", 19900),
        ("Winter Jacket", "Outerwear", 39900),
        ("Short Skirt", "Women", 12900),
        ("Formal Shirt", "Men", 17900),
        ("Evening Gown", "Women", 59900),
        ("Men's Suit", "Men", 89900),
        ("Athletic Sneakers", "Footwear", 24900),
        ("Handbag", "Accessories", 34900),
        ("Elegant Watch", "Accessories", 49900),
        ("Sunglasses", "Accessories", 19900),
    ];

    items
        .iter()
        .enumerate()
        .map(|(i, (name, category, cents))| {
            Product::new(
                ProductId::new(format!("hero-{}", i + 1)),
                *name,
                *category,
                sar(*cents),
            )
            .with_images(vec![format!(
                "https://picsum.photos/400/500?random={}",
                i + 1
            )])
        })
        .collect()
}

/// The category directory, with counts taken from the demo catalog.
pub fn demo_categories() -> Vec<Category> {
    let catalog = demo_catalog();
    vec![
        Category::new("men", "Men", "A wide range of modern menswear"),
        Category::new("women", "Women", "The latest trends in women's fashion"),
        Category::new(
            "accessories",
            "Accessories",
            "Elegant accessories to complete your look",
        ),
        Category::new(
            "footwear",
            "Footwear",
            "Comfortable, stylish shoes for every occasion",
        ),
        Category::new(
            "outerwear",
            "Outerwear",
            "Jackets and coats for every season",
        ),
    ]
    .into_iter()
    .map(|c| c.with_count_from(&catalog))
    .collect()
}

/// Seed reviews for a product's detail page.
pub fn demo_reviews(product_id: &ProductId) -> Vec<Review> {
    [
        (
            "Ahmed M.",
            "Wonderful product, excellent fabric and the size fits perfectly. Recommended!",
        ),
        (
            "Sara A.",
            "High quality cloth and an elegant cut. Arrived right on time.",
        ),
        (
            "Mahmoud A.",
            "Great buying experience, the product matches the photos exactly.",
        ),
    ]
    .iter()
    .map(|(user, comment)| {
        Review::new(product_id.clone(), *user, *comment).expect("seed comments are not blank")
    })
    .collect()
}

/// The demo buyer's wallet.
pub fn demo_wallet() -> Wallet {
    Wallet::new(usd(125000))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_are_unique() {
        let catalog = demo_catalog();
        let ids: HashSet<&str> = catalog.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_sale_prices_never_exceed_original() {
        for p in demo_catalog() {
            if let Some(op) = p.original_price {
                assert!(op.amount_cents >= p.price.amount_cents, "{}", p.name);
            }
        }
    }

    #[test]
    fn test_ratings_stay_in_range() {
        for p in demo_catalog() {
            if let Some(r) = p.rating {
                assert!((0.0..=5.0).contains(&r), "{}", p.name);
            }
        }
    }

    #[test]
    fn test_hero_has_twelve_items() {
        assert_eq!(hero_products().len(), 12);
    }

    #[test]
    fn test_every_category_is_populated() {
        for c in demo_categories() {
            assert!(c.product_count > 0, "{}", c.name);
        }
    }

    #[test]
    fn test_category_counts_cover_catalog() {
        let total: u32 = demo_categories().iter().map(|c| c.product_count).sum();
        assert_eq!(total as usize, demo_catalog().len());
    }
}
