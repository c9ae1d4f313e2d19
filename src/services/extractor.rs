use scraper::{Html, Selector};

use crate::domain::ExtractionResult;

/// Tag shapes and class-attribute tokens that mark elements carrying one
/// listing field. Matching is substring containment over the raw class
/// attribute, so a signal token buried in a longer class list still counts.
struct FieldSignals {
    tags: &'static [&'static str],
    class_tokens: &'static [&'static str],
}

const NAME_SIGNALS: FieldSignals = FieldSignals {
    tags: &["span", "h2", "a", "div"],
    class_tokens: &["a-text-normal", "s-line-clamp"],
};

const PRICE_SIGNALS: FieldSignals = FieldSignals {
    tags: &["span", "div"],
    class_tokens: &["a-price-whole"],
};

const RATING_SIGNALS: FieldSignals = FieldSignals {
    tags: &["span", "div", "p"],
    class_tokens: &["a-icon-alt"],
};

/// Scan a parsed listing page for product names, prices and ratings.
///
/// Pure and deterministic; never fails. A page with no signal matches yields
/// three empty sequences. The sequences are independently sized — no attempt
/// is made to line them up per product.
pub fn extract_listing(document: &Html) -> ExtractionResult {
    ExtractionResult {
        names: collect_field(document, &NAME_SIGNALS),
        prices: collect_field(document, &PRICE_SIGNALS),
        ratings: collect_field(document, &RATING_SIGNALS),
    }
}

fn collect_field(document: &Html, signals: &FieldSignals) -> Vec<String> {
    let selector = Selector::parse(&signals.tags.join(", ")).unwrap();

    document
        .select(&selector)
        .filter(|element| {
            element.value().attr("class").is_some_and(|classes| {
                signals
                    .class_tokens
                    .iter()
                    .any(|token| classes.contains(token))
            })
        })
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use scraper::Html;

    use super::extract_listing;

    #[test]
    fn collects_names_and_drops_empty_text() {
        let document = Html::parse_document(
            r#"<div>
                <span class="a-text-normal">Widget A</span>
                <span class="a-text-normal">Widget B</span>
                <span class="a-text-normal"></span>
            </div>"#,
        );
        let result = extract_listing(&document);

        assert_eq!(result.names, vec!["Widget A", "Widget B"]);
    }

    #[test]
    fn collects_price_from_whole_price_span() {
        let document =
            Html::parse_document(r#"<span class="a-price-whole">19</span>"#);
        let result = extract_listing(&document);

        assert_eq!(result.prices, vec!["19"]);
        assert!(result.names.is_empty());
        assert!(result.ratings.is_empty());
    }

    #[test]
    fn page_without_signals_yields_three_empty_sequences() {
        let document = Html::parse_document(
            r#"<div class="nav-bar"><span class="logo">Shop</span></div>"#,
        );
        let result = extract_listing(&document);

        assert!(result.is_empty());
        assert_eq!(result.names.len(), 0);
        assert_eq!(result.prices.len(), 0);
        assert_eq!(result.ratings.len(), 0);
    }

    #[test]
    fn signal_token_matches_as_substring_of_longer_class_list() {
        let document = Html::parse_document(
            r#"<a class="a-size-base a-text-normal s-underline">Widget C</a>
               <div class="s-line-clamp-2 s-color-base">Widget D</div>"#,
        );
        let result = extract_listing(&document);

        assert_eq!(result.names, vec!["Widget C", "Widget D"]);
    }

    #[test]
    fn candidate_tag_set_differs_per_field() {
        // p is a rating shape but not a name or price shape.
        let document = Html::parse_document(
            r#"<p class="a-icon-alt">4.5 out of 5 stars</p>
               <p class="a-text-normal">Not a name</p>
               <p class="a-price-whole">99</p>"#,
        );
        let result = extract_listing(&document);

        assert_eq!(result.ratings, vec!["4.5 out of 5 stars"]);
        assert!(result.names.is_empty());
        assert!(result.prices.is_empty());
    }

    #[test]
    fn text_is_trimmed() {
        let document = Html::parse_document(
            "<span class=\"a-text-normal\">\n   Widget E \t</span>",
        );
        let result = extract_listing(&document);

        assert_eq!(result.names, vec!["Widget E"]);
    }

    #[test]
    fn sequences_are_independently_sized() {
        let document = Html::parse_document(
            r#"<span class="a-text-normal">Widget F</span>
               <span class="a-text-normal">Widget G</span>
               <span class="a-price-whole">42</span>"#,
        );
        let result = extract_listing(&document);

        assert_eq!(result.names.len(), 2);
        assert_eq!(result.prices.len(), 1);
        assert_eq!(result.ratings.len(), 0);
    }

    #[test]
    fn extraction_is_deterministic() {
        let page = r#"<div class="s-main-slot">
            <h2 class="a-text-normal">Widget H</h2>
            <span class="a-price-whole">7</span>
            <span class="a-icon-alt">3.9 out of 5 stars</span>
        </div>"#;

        let first = extract_listing(&Html::parse_document(page));
        let second = extract_listing(&Html::parse_document(page));

        assert_eq!(first, second);
    }
}
