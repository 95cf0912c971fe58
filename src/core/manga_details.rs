use chrono::DateTime;
use scraper::{ElementRef, Html};

use crate::core::elements::{
    attr, content_root, image_url, own_text, select_all, select_first, select_first_opt, BSX_CARD,
    CHAPTER_ROW, GENRE_TAG,
};
use crate::domain::model::{BixboxData, BsxTitleData, Chapter, ChapterList, MgenTag, RawKumaMangaDetailData};
use crate::domain::ports::{FromElement, FromHtml};
use crate::utils::error::Result;

// Title detail page: the bixbox block carries schema.org microdata, the
// chapter list sits in its own container, related titles reuse bsx cards.

pub(crate) const BIXBOX_BLOCK: &str = "div.bixbox.animefull";
pub(crate) const CHAPTER_LIST: &str = "div#chapterlist";

const NAME: &str = r#"h1[itemprop="name"]"#;
const COVER: &str = r#"img[itemprop="image"]"#;
const WORST_RATING: &str = r#"meta[itemprop="worstRating"]"#;
const BEST_RATING: &str = r#"meta[itemprop="bestRating"]"#;
const RATING_COUNT: &str = r#"meta[itemprop="ratingCount"]"#;
const RATING_VALUE: &str = r#"div[itemprop="ratingValue"]"#;
const DESCRIPTION: &str = r#"div[itemprop="description"]"#;
const AUTHOR: &str = r#"span[itemprop="author"] i[itemprop="name"]"#;
const DATE_PUBLISHED: &str = r#"time[itemprop="datePublished"]"#;
const DATE_MODIFIED: &str = r#"time[itemprop="dateModified"]"#;

fn meta_content(element: ElementRef<'_>, selector_str: &str) -> Result<String> {
    attr(select_first(element, selector_str)?, "content", selector_str)
}

fn datetime_attr(
    element: ElementRef<'_>,
    selector_str: &str,
) -> Result<chrono::DateTime<chrono::FixedOffset>> {
    let raw = attr(select_first(element, selector_str)?, "datetime", selector_str)?;
    Ok(DateTime::parse_from_rfc3339(&raw)?)
}

impl FromElement for BixboxData {
    fn from_element(element: ElementRef<'_>) -> Result<Self> {
        let cover = select_first(element, COVER)?;
        let description = select_first_opt(element, DESCRIPTION)?
            .map(|node| node.text().collect::<String>().trim().to_string())
            .unwrap_or_default();

        Ok(Self {
            name: own_text(select_first(element, NAME)?, NAME)?,
            image: image_url(&attr(cover, "src", COVER)?)?,
            worst_rating: meta_content(element, WORST_RATING)?.trim().parse::<u16>()?,
            best_rating: meta_content(element, BEST_RATING)?.trim().parse::<u16>()?,
            rating_count: meta_content(element, RATING_COUNT)?.trim().parse::<u32>()?,
            rating_value: meta_content(element, RATING_VALUE)?.trim().parse::<f32>()?,
            description,
            author: own_text(select_first(element, AUTHOR)?, AUTHOR)?,
            date_published: datetime_attr(element, DATE_PUBLISHED)?,
            date_modified: datetime_attr(element, DATE_MODIFIED)?,
            title: attr(cover, "title", COVER)?,
            genres: MgenTag::from_elements(&select_all(element, GENRE_TAG)?),
        })
    }
}

impl FromElement for ChapterList {
    fn from_element(element: ElementRef<'_>) -> Result<Self> {
        let rows = select_all(element, CHAPTER_ROW)?;
        Ok(Self {
            chapters: Chapter::from_elements(&rows),
        })
    }
}

impl FromHtml for RawKumaMangaDetailData {
    fn from_html(html: &Html) -> Result<Self> {
        let content = content_root(html)?;

        Ok(Self {
            data: BixboxData::from_element(select_first(content, BIXBOX_BLOCK)?)?,
            chapterlist: ChapterList::from_element(select_first(content, CHAPTER_LIST)?)?,
            related_series: BsxTitleData::from_elements(&select_all(content, BSX_CARD)?),
        })
    }
}
