use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::domain::model::{
    BsxTitleData, Chapter, MgenTag, ReaderAreaImage, UtaoTitleChapter, UtaoTitleData,
};
use crate::domain::ports::FromElement;
use crate::utils::error::{Result, ScrapeError};

// Element-level parsers for the card and row shapes shared by several pages,
// plus the selector helpers every parser goes through.

pub(crate) const CONTENT_ROOT: &str = "div#content";
pub(crate) const BSX_CARD: &str = "div.bsx";
pub(crate) const UTAO_CARD: &str = "div.utao";
pub(crate) const GENRE_TAG: &str = r#".mgen a[rel="tag"]"#;
pub(crate) const CHAPTER_ROW: &str = "li[data-num]";

pub(crate) fn selector(selector_str: &str) -> Result<Selector> {
    Selector::parse(selector_str).map_err(|_| ScrapeError::Selector {
        selector: selector_str.to_string(),
    })
}

pub(crate) fn select_first<'a>(
    element: ElementRef<'a>,
    selector_str: &str,
) -> Result<ElementRef<'a>> {
    let selector = selector(selector_str)?;
    element
        .select(&selector)
        .next()
        .ok_or_else(|| ScrapeError::element_not_found(selector_str))
}

pub(crate) fn select_first_opt<'a>(
    element: ElementRef<'a>,
    selector_str: &str,
) -> Result<Option<ElementRef<'a>>> {
    let selector = selector(selector_str)?;
    Ok(element.select(&selector).next())
}

pub(crate) fn select_all<'a>(
    element: ElementRef<'a>,
    selector_str: &str,
) -> Result<Vec<ElementRef<'a>>> {
    let selector = selector(selector_str)?;
    Ok(element.select(&selector).collect())
}

pub(crate) fn document_first<'a>(html: &'a Html, selector_str: &str) -> Result<ElementRef<'a>> {
    let selector = selector(selector_str)?;
    html.select(&selector)
        .next()
        .ok_or_else(|| ScrapeError::element_not_found(selector_str))
}

pub(crate) fn document_all<'a>(html: &'a Html, selector_str: &str) -> Result<Vec<ElementRef<'a>>> {
    let selector = selector(selector_str)?;
    Ok(html.select(&selector).collect())
}

pub(crate) fn content_root(html: &Html) -> Result<ElementRef<'_>> {
    document_first(html, CONTENT_ROOT)
}

pub(crate) fn attr(element: ElementRef<'_>, name: &str, context: &str) -> Result<String> {
    element
        .value()
        .attr(name)
        .map(|value| value.to_string())
        .ok_or_else(|| ScrapeError::attribute_not_found(name, context))
}

pub(crate) fn own_text(element: ElementRef<'_>, context: &str) -> Result<String> {
    element
        .text()
        .next()
        .map(|text| text.to_string())
        .ok_or_else(|| ScrapeError::TextContent {
            selector: context.to_string(),
        })
}

pub(crate) fn text_or_empty(element: ElementRef<'_>) -> String {
    element.text().next().unwrap_or_default().to_string()
}

pub(crate) fn parse_url(raw: &str) -> Result<Url> {
    Ok(raw.parse::<Url>()?)
}

// Cover and page sources come through protocol-relative more often than not.
pub(crate) fn image_url(src: &str) -> Result<Url> {
    if let Some(rest) = src.strip_prefix("//") {
        return Ok(format!("https://{}", rest).parse::<Url>()?);
    }
    parse_url(src)
}

impl FromElement for BsxTitleData {
    fn from_element(element: ElementRef<'_>) -> Result<Self> {
        let link = select_first(element, "a")?;
        let cover = select_first(element, "img")?;
        let score = select_first(element, "div.numscore")?;

        Ok(Self {
            title: attr(link, "title", "a")?,
            url: parse_url(&attr(link, "href", "a")?)?,
            image: image_url(&attr(cover, "src", "img")?)?,
            rating: own_text(score, "div.numscore")?.trim().parse::<f64>()?,
        })
    }
}

impl FromElement for UtaoTitleChapter {
    fn from_element(element: ElementRef<'_>) -> Result<Self> {
        let link = select_first(element, "a")?;

        Ok(Self {
            url: parse_url(&attr(link, "href", "a")?)?,
            text: own_text(link, "a")?,
        })
    }
}

impl FromElement for UtaoTitleData {
    fn from_element(element: ElementRef<'_>) -> Result<Self> {
        let imgu = select_first(element, "div.imgu")?;
        let cover = select_first(imgu, "img")?;
        let series = select_first(imgu, "a.series")?;
        let chapter_rows = select_all(element, "ul.Manga li")?;

        Ok(Self {
            title: attr(series, "title", "a.series")?,
            url: parse_url(&attr(series, "href", "a.series")?)?,
            image: image_url(&attr(cover, "src", "img")?)?,
            chapters: UtaoTitleChapter::from_elements(&chapter_rows),
        })
    }
}

impl FromElement for MgenTag {
    fn from_element(element: ElementRef<'_>) -> Result<Self> {
        Ok(Self {
            url: parse_url(&attr(element, "href", "a")?)?,
            name: own_text(element, GENRE_TAG)?,
        })
    }
}

impl FromElement for Chapter {
    fn from_element(element: ElementRef<'_>) -> Result<Self> {
        let num = attr(element, "data-num", CHAPTER_ROW)?.trim().parse::<f32>()?;
        let link = select_first(element, "div.eph-num a")?;
        let download = select_first(element, "a.dload")?;

        // Label and date nodes exist on every row, but either may be blank.
        let chapter_num = text_or_empty(select_first(link, ".chapternum")?);
        let chapter_date = text_or_empty(select_first(link, ".chapterdate")?);

        Ok(Self {
            url: parse_url(&attr(link, "href", "div.eph-num a")?)?,
            chapter_num,
            chapter_date,
            num,
            download_link: parse_url(&attr(download, "href", "a.dload")?)?,
        })
    }
}

impl FromElement for ReaderAreaImage {
    fn from_element(element: ElementRef<'_>) -> Result<Self> {
        let width = match element.value().attr("width") {
            Some(value) => value.trim().parse::<f32>()?,
            None => 0.0,
        };
        let height = match element.value().attr("height") {
            Some(value) => value.trim().parse::<f32>()?,
            None => 0.0,
        };

        Ok(Self {
            url: image_url(&attr(element, "src", "img")?)?,
            width,
            height,
            decoding: element.value().attr("decoding").unwrap_or_default().to_string(),
            alt: element.value().attr("alt").unwrap_or_default().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragment_first<'a>(html: &'a Html, selector_str: &str) -> ElementRef<'a> {
        document_first(html, selector_str).unwrap()
    }

    #[test]
    fn test_bsx_card_parses() {
        let html = Html::parse_fragment(
            r#"<div class="bsx">
                <a href="https://example/manga/solo-hero/" title="Solo Hero">
                    <img src="//example/covers/solo-hero.jpg">
                    <div class="numscore">8.70</div>
                </a>
            </div>"#,
        );

        let card = BsxTitleData::from_element(fragment_first(&html, "div.bsx")).unwrap();

        assert_eq!(card.title, "Solo Hero");
        assert_eq!(card.url.as_str(), "https://example/manga/solo-hero/");
        assert_eq!(card.image.as_str(), "https://example/covers/solo-hero.jpg");
        assert_eq!(card.rating, 8.7);
    }

    #[test]
    fn test_bsx_card_without_score_is_an_error() {
        let html = Html::parse_fragment(
            r#"<div class="bsx"><a href="https://example/x/" title="X"><img src="https://example/x.jpg"></a></div>"#,
        );

        let result = BsxTitleData::from_element(fragment_first(&html, "div.bsx"));

        assert!(matches!(
            result,
            Err(ScrapeError::ElementNotFound { selector }) if selector == "div.numscore"
        ));
    }

    #[test]
    fn test_utao_card_parses_with_chapter_order() {
        let html = Html::parse_fragment(
            r#"<div class="utao">
                <div class="imgu">
                    <a class="series" href="https://example/manga/solo-hero/" title="Solo Hero">
                        <img src="https://example/covers/solo-hero.jpg">
                    </a>
                </div>
                <ul class="Manga">
                    <li><a href="https://example/solo-hero-chapter-12/">Chapter 12</a></li>
                    <li><a href="https://example/solo-hero-chapter-11/">Chapter 11</a></li>
                </ul>
            </div>"#,
        );

        let card = UtaoTitleData::from_element(fragment_first(&html, "div.utao")).unwrap();

        assert_eq!(card.title, "Solo Hero");
        assert_eq!(card.chapters.len(), 2);
        assert_eq!(card.chapters[0].text, "Chapter 12");
        assert_eq!(card.chapters[1].text, "Chapter 11");
    }

    #[test]
    fn test_chapter_row_parses() {
        let html = Html::parse_fragment(
            r#"<li data-num="12.5">
                <div class="eph-num">
                    <a href="https://example/solo-hero-chapter-12-5/">
                        <span class="chapternum">Chapter 12.5</span>
                        <span class="chapterdate">July 3, 2022</span>
                    </a>
                </div>
                <a class="dload" href="https://example/download/12-5"></a>
            </li>"#,
        );

        let chapter = Chapter::from_element(fragment_first(&html, "li[data-num]")).unwrap();

        assert_eq!(chapter.num, 12.5);
        assert_eq!(chapter.chapter_num, "Chapter 12.5");
        assert_eq!(chapter.chapter_date, "July 3, 2022");
        assert_eq!(chapter.download_link.as_str(), "https://example/download/12-5");
    }

    #[test]
    fn test_reader_image_defaults_missing_attributes() {
        let html = Html::parse_fragment(r#"<img src="//example/pages/01.jpg">"#);

        let image = ReaderAreaImage::from_element(fragment_first(&html, "img")).unwrap();

        assert_eq!(image.url.as_str(), "https://example/pages/01.jpg");
        assert_eq!(image.width, 0.0);
        assert_eq!(image.height, 0.0);
        assert_eq!(image.decoding, "");
        assert_eq!(image.alt, "");
    }

    #[test]
    fn test_genre_tag_parses() {
        let html = Html::parse_fragment(
            r#"<div class="mgen"><a rel="tag" href="https://example/genres/action/">Action</a></div>"#,
        );

        let tag = MgenTag::from_element(fragment_first(&html, GENRE_TAG)).unwrap();

        assert_eq!(tag.name, "Action");
        assert_eq!(tag.url.as_str(), "https://example/genres/action/");
    }
}
