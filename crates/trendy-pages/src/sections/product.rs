//! Product detail page.

use crate::markup::{html_escape, render_stars};
use crate::sections::frame::render_page;
use trendy_commerce::prelude::*;
use trendy_ui::ProductPageState;

/// Render the detail page from the view state.
pub fn render_product_detail(state: &ProductPageState) -> String {
    let product = state.product();

    let content = format!(
        r#"<section class="product-detail" data-section="product">
    <a href="/products">&larr; Back to Products</a>
    <div class="detail-layout">
        <div>{gallery}</div>
        <div>{info}</div>
    </div>
    {reviews}
</section>
{dialog}"#,
        gallery = render_gallery(state),
        info = render_info(state),
        reviews = render_reviews(state.reviews()),
        dialog = render_dialog(state),
    );

    render_page(&product.name, "", &content)
}

fn render_gallery(state: &ProductPageState) -> String {
    let product = state.product();
    let main = product
        .images
        .get(state.selected_image())
        .map(|url| format!(r#"<img src="{}" alt="{}">"#, url, html_escape(&product.name)))
        .unwrap_or_default();

    let discount = product
        .discount_percentage()
        .map(|p| format!(r#"<span class="badge sale">-{}%</span>"#, p))
        .unwrap_or_default();

    let wishlist = if state.is_wishlisted() { "♥" } else { "♡" };

    let thumbs: String = product
        .images
        .iter()
        .enumerate()
        .map(|(i, url)| {
            let class = if i == state.selected_image() {
                " class=\"selected\""
            } else {
                ""
            };
            format!(
                r#"<button{} data-image="{}"><img src="{}" alt=""></button>"#,
                class, i, url
            )
        })
        .collect();

    format!(
        r#"<div class="gallery-main">{main}{discount}<button class="wishlist-toggle" aria-label="Wishlist">{wishlist}</button></div>
<div class="gallery-thumbs">{thumbs}</div>"#,
        main = main,
        discount = discount,
        wishlist = wishlist,
        thumbs = thumbs,
    )
}

fn render_info(state: &ProductPageState) -> String {
    let product = state.product();

    let rating = match product.rating {
        Some(r) => format!(
            r#"<div class="product-rating">{} <span class="rating-value">{:.1} ({} reviews)</span></div>"#,
            render_stars(r),
            r,
            product.review_count
        ),
        None => String::new(),
    };

    let original = product
        .original_price
        .filter(|_| product.is_on_sale())
        .map(|op| format!(r#"<span class="original-price">{}</span>"#, op))
        .unwrap_or_default();

    let swatches: String = product
        .colors
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let selected = if i == state.selected_color() { " selected" } else { "" };
            format!(
                r#"<button class="swatch{}" style="background:{}" title="{}" data-color="{}"></button>"#,
                selected,
                c.hex,
                html_escape(&c.name),
                i
            )
        })
        .collect();

    let sizes: String = product
        .sizes
        .iter()
        .map(|size| {
            let selected = if state.selected_size() == Some(size.as_str()) {
                " selected"
            } else {
                ""
            };
            format!(
                r#"<button class="size-option{}" data-size="{}">{}</button>"#,
                selected, size, size
            )
        })
        .collect();

    let features: String = product
        .features
        .iter()
        .map(|f| format!("<li>{}</li>", html_escape(f)))
        .collect();
    let features = if features.is_empty() {
        String::new()
    } else {
        format!(r#"<ul class="feature-list">{}</ul>"#, features)
    };

    let quote_total = product.price.multiply(state.quantity());
    let buy_label = if product.in_stock {
        format!("Buy Now - {}", quote_total)
    } else {
        "Out of Stock".to_string()
    };
    let disabled = if product.in_stock { "" } else { " disabled" };

    format!(
        r#"<span class="product-category">{category}</span>
<h1>{name}</h1>
{rating}
<div class="product-price">{price}{original}</div>
<p>{description}</p>
<h3>Color</h3>
<div class="color-swatches">{swatches}</div>
<h3>Size</h3>
<div class="size-options">{sizes}</div>
<h3>Quantity</h3>
<div class="qty-stepper">
    <button aria-label="Decrease">−</button>
    <span>{quantity}</span>
    <button aria-label="Increase">+</button>
</div>
<button class="buy-button"{disabled}>{buy_label}</button>
{features}"#,
        category = html_escape(&product.category),
        name = html_escape(&product.name),
        rating = rating,
        price = product.price,
        original = original,
        description = html_escape(product.description.as_deref().unwrap_or("")),
        swatches = swatches,
        sizes = sizes,
        quantity = state.quantity(),
        disabled = disabled,
        buy_label = buy_label,
        features = features,
    )
}

fn render_reviews(reviews: &[Review]) -> String {
    let items: String = reviews
        .iter()
        .map(|r| {
            format!(
                r#"<div class="review"><span class="author">{}</span><p>{}</p></div>"#,
                html_escape(&r.user_name),
                html_escape(&r.comment)
            )
        })
        .collect();

    let list = if reviews.is_empty() {
        "<p>No reviews yet. Be the first to comment!</p>".to_string()
    } else {
        items
    };

    format!(
        r#"<section class="reviews" data-section="reviews">
    <h2>Reviews ({})</h2>
    <form class="review-form">
        <textarea name="comment" placeholder="Write your review here..."></textarea>
        <button type="submit">Post review</button>
    </form>
    {}
</section>"#,
        reviews.len(),
        list
    )
}

fn render_dialog(state: &ProductPageState) -> String {
    if !state.is_dialog_open() {
        return String::new();
    }

    // A size is guaranteed here; the dialog only opens through
    // begin_purchase.
    let quote = match state.quote() {
        Ok(quote) => quote,
        Err(_) => return String::new(),
    };

    let plan_option = |plan: PaymentPlan, amount: Money| {
        let checked = if state.payment_plan() == plan {
            " checked"
        } else {
            ""
        };
        format!(
            r#"<label class="payment-option"><input type="radio" name="payment" value="{}"{}> {}: {}</label>"#,
            plan.as_str(),
            checked,
            plan.display_name(),
            amount
        )
    };

    format!(
        r#"<div class="dialog-backdrop" data-section="purchase-dialog">
    <div class="dialog">
        <h2>Confirm Purchase</h2>
        <div class="dialog-summary">
            <h4>{name}</h4>
            <p>Size: {size} | Qty: {quantity}</p>
            <p><strong>Total: {total}</strong></p>
        </div>
        <h4>Payment Options</h4>
        {full_option}
        {deposit_option}
        <p class="amount-due">Amount to pay: <strong>{due}</strong></p>
        <div class="dialog-actions">
            <button class="cancel">Cancel</button>
            <button class="buy-button confirm">Confirm Purchase</button>
        </div>
    </div>
</div>"#,
        name = html_escape(&quote.product_name),
        size = state.selected_size().unwrap_or("-"),
        quantity = quote.quantity,
        total = quote.total,
        full_option = plan_option(PaymentPlan::Full, quote.total),
        deposit_option = plan_option(PaymentPlan::Deposit, quote.total.percentage(50.0)),
        due = quote.amount_due,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use trendy_commerce::demo;

    fn state() -> ProductPageState {
        let product = demo::demo_catalog().into_iter().next().unwrap();
        let reviews = demo::demo_reviews(&product.id);
        ProductPageState::new(product, reviews)
    }

    #[test]
    fn test_detail_page_shows_core_facts() {
        let html = render_product_detail(&state());
        assert!(html.contains("Premium Cotton T-Shirt"));
        assert!(html.contains("$29.99"));
        assert!(html.contains("original-price"));
        assert!(html.contains("Reviews (3)"));
    }

    #[test]
    fn test_dialog_hidden_until_opened() {
        let mut s = state();
        assert!(!render_product_detail(&s).contains("purchase-dialog"));

        s.select_size("M").unwrap();
        s.begin_purchase().unwrap();
        let html = render_product_detail(&s);
        assert!(html.contains("purchase-dialog"));
        assert!(html.contains("Pay 50% Now"));
    }

    #[test]
    fn test_selected_size_is_marked() {
        let mut s = state();
        s.select_size("L").unwrap();
        let html = render_product_detail(&s);
        assert!(html.contains(r#"class="size-option selected" data-size="L""#));
    }

    #[test]
    fn test_color_selection_switches_gallery() {
        let mut s = state();
        s.select_color(1).unwrap();
        let html = render_product_detail(&s);
        // Second gallery image becomes the selected thumb.
        assert!(html.contains(r#"<button class="selected" data-image="1">"#));
    }
}
