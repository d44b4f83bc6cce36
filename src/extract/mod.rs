//! Price extraction from the rendered page
//!
//! Positional contract with the page layout: the first
//! `.live__price__container` holds the gold price, the second holds silver.
//! The page gives no textual commodity labels we could trust, so we do not
//! try to infer identity from text. If the page ever reorders its containers
//! the two commodities swap silently. Known coupling, accepted as-is.

use crate::alert::Commodity;
use crate::render::RenderedPage;
use scraper::{ElementRef, Html, Selector};
use thiserror::Error;

/// Marker for the blocks that each hold one live quotation
pub const PRICE_CONTAINER_SELECTOR: &str = ".live__price__container";

/// Marker for the price text nested inside a container
pub const PRICE_SELECTOR: &str = ".price";

/// Gold and silver display strings, exactly as shown on the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricePair {
    pub gold: String,
    pub silver: String,
}

/// Faults from parsing the rendered DOM
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("expected at least 2 live price containers, found {found}")]
    InsufficientContainers { found: usize },

    #[error("no price element inside the {commodity} container")]
    MissingPriceElement { commodity: Commodity },
}

/// Pull both quotations out of a rendered page
pub fn extract(page: &RenderedPage) -> Result<PricePair, ExtractError> {
    let container_sel = Selector::parse(PRICE_CONTAINER_SELECTOR).expect("static selector");
    let price_sel = Selector::parse(PRICE_SELECTOR).expect("static selector");

    let document = Html::parse_document(page.html());
    let containers: Vec<ElementRef> = document.select(&container_sel).collect();

    if containers.len() < 2 {
        return Err(ExtractError::InsufficientContainers {
            found: containers.len(),
        });
    }

    let gold = price_text(&containers[0], &price_sel).ok_or(ExtractError::MissingPriceElement {
        commodity: Commodity::Gold,
    })?;
    let silver = price_text(&containers[1], &price_sel).ok_or(ExtractError::MissingPriceElement {
        commodity: Commodity::Silver,
    })?;

    Ok(PricePair { gold, silver })
}

fn price_text(container: &ElementRef, price_sel: &Selector) -> Option<String> {
    let element = container.select(price_sel).next()?;
    Some(element.text().collect::<String>().trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(html: &str) -> RenderedPage {
        RenderedPage::new(html.to_string())
    }

    #[test]
    fn test_extracts_both_prices_in_order() {
        let html = r#"
            <html><body>
                <div class="live__price__container">
                    <span class="label">Gold</span>
                    <span class="price"> ₹9,150.00 </span>
                </div>
                <div class="live__price__container">
                    <span class="label">Silver</span>
                    <span class="price">₹112.50</span>
                </div>
            </body></html>
        "#;

        let pair = extract(&page(html)).unwrap();
        assert_eq!(pair.gold, "₹9,150.00");
        assert_eq!(pair.silver, "₹112.50");
    }

    #[test]
    fn test_price_text_is_trimmed() {
        let html = r#"
            <div class="live__price__container"><span class="price">
                100
            </span></div>
            <div class="live__price__container"><span class="price">200</span></div>
        "#;

        let pair = extract(&page(html)).unwrap();
        assert_eq!(pair.gold, "100");
    }

    #[test]
    fn test_one_container_is_insufficient() {
        let html = r#"
            <div class="live__price__container"><span class="price">100</span></div>
        "#;

        let err = extract(&page(html)).unwrap_err();
        match err {
            ExtractError::InsufficientContainers { found } => assert_eq!(found, 1),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_page_reports_zero_containers() {
        let err = extract(&page("<html><body></body></html>")).unwrap_err();
        match err {
            ExtractError::InsufficientContainers { found } => assert_eq!(found, 0),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_price_element_names_the_commodity() {
        let html = r#"
            <div class="live__price__container"><span class="price">100</span></div>
            <div class="live__price__container"><span class="label">Silver</span></div>
        "#;

        let err = extract(&page(html)).unwrap_err();
        match err {
            ExtractError::MissingPriceElement { commodity } => {
                assert_eq!(commodity, Commodity::Silver)
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_extra_containers_are_ignored() {
        let html = r#"
            <div class="live__price__container"><span class="price">1</span></div>
            <div class="live__price__container"><span class="price">2</span></div>
            <div class="live__price__container"><span class="price">3</span></div>
        "#;

        let pair = extract(&page(html)).unwrap();
        assert_eq!(pair.gold, "1");
        assert_eq!(pair.silver, "2");
    }
}
