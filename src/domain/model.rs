use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use url::Url;

// Transfer shapes exchanged with callers. Field names mirror the site's wire
// contract verbatim, including `recommandation` and `chapterlist`.

/// Title card used in search results, related lists and home shelves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BsxTitleData {
    pub title: String,
    pub url: Url,
    pub image: Url,
    pub rating: f64,
}

/// One chapter link on a "latest update" card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UtaoTitleChapter {
    pub url: Url,
    pub text: String,
}

/// "Latest update" card: a title with its most recent chapters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UtaoTitleData {
    pub title: String,
    pub url: Url,
    pub image: Url,
    pub chapters: Vec<UtaoTitleChapter>,
}

/// Genre tag on a title detail block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MgenTag {
    pub url: Url,
    pub name: String,
}

/// Title-level metadata scraped from the detail block's microdata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BixboxData {
    pub name: String,
    pub image: Url,
    pub worst_rating: u16,
    pub best_rating: u16,
    pub rating_count: u32,
    pub rating_value: f32,
    pub description: String,
    pub author: String,
    pub date_published: DateTime<FixedOffset>,
    pub date_modified: DateTime<FixedOffset>,
    pub title: String,
    pub genres: Vec<MgenTag>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    pub url: Url,
    pub chapter_num: String,
    pub chapter_date: String,
    pub num: f32,
    pub download_link: Url,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChapterList {
    pub chapters: Vec<Chapter>,
}

/// One page image of a chapter, with intrinsic dimensions when the site
/// declares them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReaderAreaImage {
    pub url: Url,
    pub width: f32,
    pub height: f32,
    pub decoding: String,
    pub alt: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReaderArea {
    pub images: Vec<ReaderAreaImage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawKumaMangaDetailData {
    pub data: BixboxData,
    pub chapterlist: ChapterList,
    pub related_series: Vec<BsxTitleData>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawKumaChapterData {
    pub reader_area: ReaderArea,
    pub related_mangas: Vec<BsxTitleData>,
}

/// Home page aggregate. `recommandation` maps an arbitrary shelf label to the
/// titles listed under it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawKumaHomeData {
    pub popular_title: Vec<BsxTitleData>,
    pub recommandation: HashMap<String, Vec<BsxTitleData>>,
    pub latest_update: Vec<UtaoTitleData>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawKumaSearch {
    pub result: Vec<BsxTitleData>,
}

/// One image source of the reader bootstrap script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImagesSources {
    pub source: String,
    pub images: Vec<Url>,
}

/// Arguments passed to the site's `ts_reader` bootstrap, embedded as JSON in a
/// script tag on chapter pages. Used as the image source when the noscript
/// block is missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TsReaderArgs {
    pub post_id: usize,
    #[serde(
        default,
        alias = "prevUrl",
        deserialize_with = "deserialize_optional_url"
    )]
    pub prev_url: Option<Url>,
    #[serde(
        default,
        alias = "nextUrl",
        deserialize_with = "deserialize_optional_url"
    )]
    pub next_url: Option<Url>,
    pub sources: Vec<ImagesSources>,
}

// The bootstrap encodes "no neighbor chapter" as an empty string.
fn deserialize_optional_url<'de, D>(deserializer: D) -> Result<Option<Url>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if raw.is_empty() {
        return Ok(None);
    }
    Url::parse(&raw).map(Some).map_err(serde::de::Error::custom)
}
