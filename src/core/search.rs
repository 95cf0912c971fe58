use scraper::Html;

use crate::core::elements::{content_root, select_all, BSX_CARD};
use crate::domain::model::{BsxTitleData, RawKumaSearch};
use crate::domain::ports::{FromElement, FromHtml};
use crate::utils::error::Result;

// Search results and the /manga/ listing share one layout: bsx cards under
// the content root.

impl FromHtml for RawKumaSearch {
    fn from_html(html: &Html) -> Result<Self> {
        let content = content_root(html)?;
        let cards = select_all(content, BSX_CARD)?;

        Ok(Self {
            result: BsxTitleData::from_elements(&cards),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_page_parses_and_skips_malformed_cards() {
        let html = Html::parse_document(
            r#"<html><body><div id="content"><div class="listupd">
                <div class="bsx"><a href="https://example/manga/solo-hero/" title="Solo Hero">
                    <img src="//example/covers/solo-hero.jpg">
                    <div class="numscore">8.7</div>
                </a></div>
                <div class="bsx"><a href="https://example/manga/broken/" title="Broken"></a></div>
                <div class="bsx"><a href="https://example/manga/other-hero/" title="Other Hero">
                    <img src="//example/covers/other-hero.jpg">
                    <div class="numscore">7.5</div>
                </a></div>
            </div></div></body></html>"#,
        );

        let search = RawKumaSearch::from_html(&html).unwrap();

        // The card with no cover or score drops out; order of the rest holds.
        assert_eq!(search.result.len(), 2);
        assert_eq!(search.result[0].title, "Solo Hero");
        assert_eq!(search.result[1].title, "Other Hero");
    }

    #[test]
    fn test_empty_result_page_parses_to_empty_vec() {
        let html = Html::parse_document(r#"<html><body><div id="content"></div></body></html>"#);

        let search = RawKumaSearch::from_html(&html).unwrap();

        assert!(search.result.is_empty());
    }
}
