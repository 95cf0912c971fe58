use std::collections::HashMap;

use scraper::Html;

use crate::core::elements::{
    attr, document_all, document_first, own_text, select_all, BSX_CARD, UTAO_CARD,
};
use crate::domain::model::{BsxTitleData, RawKumaHomeData, UtaoTitleData};
use crate::domain::ports::{FromElement, FromHtml};
use crate::utils::error::Result;

// Home page: a "popular today" block, labeled recommendation shelves behind
// nav tabs, and the latest-update feed.

pub(crate) const HOTHOME_BLOCK: &str = "div.bixbox.hothome";
const SHELF_NAV_LINKS: &str = "div.series-gen ul.nav-tabs a";

/// Resolves the recommendation shelves: every nav-tab link names a shelf, and
/// its `#fragment` href points at the container holding that shelf's cards.
fn shelves(html: &Html) -> Result<HashMap<String, Vec<BsxTitleData>>> {
    let mut shelves = HashMap::new();

    for link in document_all(html, SHELF_NAV_LINKS)? {
        let label = own_text(link, SHELF_NAV_LINKS)?;
        let target = attr(link, "href", SHELF_NAV_LINKS)?;
        let container = document_first(html, &target)?;
        let cards = select_all(container, BSX_CARD)?;
        shelves.insert(label, BsxTitleData::from_elements(&cards));
    }

    Ok(shelves)
}

impl FromHtml for RawKumaHomeData {
    fn from_html(html: &Html) -> Result<Self> {
        let hothome = document_first(html, HOTHOME_BLOCK)?;
        let popular_cards = select_all(hothome, BSX_CARD)?;
        let latest_cards = document_all(html, UTAO_CARD)?;

        Ok(Self {
            popular_title: BsxTitleData::from_elements(&popular_cards),
            recommandation: shelves(html)?,
            latest_update: UtaoTitleData::from_elements(&latest_cards),
        })
    }
}
