use scraper::{ElementRef, Html};
use serde::de::DeserializeOwned;

use crate::core::elements::{content_root, document_all, select_all, select_first, select_first_opt, BSX_CARD};
use crate::domain::model::{
    BsxTitleData, RawKumaChapterData, ReaderArea, ReaderAreaImage, TsReaderArgs,
};
use crate::domain::ports::{FromElement, FromHtml};
use crate::utils::error::Result;

// Chapter page: the reader area lists the page images twice, once as markup
// inside a noscript block and once as JSON fed to the ts_reader bootstrap.
// The noscript block is authoritative (it carries dimensions); the bootstrap
// is the fallback.

pub(crate) const READER_AREA: &str = "#readerarea";
const READER_BOOTSTRAP: &str = "div.readingnav.rnavbot + script";

fn noscript_images(noscript: ElementRef<'_>) -> Result<Vec<ReaderAreaImage>> {
    // The block reaches us entity-escaped; unescape and reparse as a fragment.
    let markup = htmlize::unescape(noscript.inner_html());
    let fragment = Html::parse_fragment(&markup);
    let images = document_all(&fragment, "img")?;
    Ok(ReaderAreaImage::from_elements(&images))
}

fn bootstrap_images(content: ElementRef<'_>) -> Result<Vec<ReaderAreaImage>> {
    let script = select_first(content, READER_BOOTSTRAP)?;
    let args: TsReaderArgs = extract_braced_json(&script.inner_html())?;

    Ok(args
        .sources
        .into_iter()
        .next()
        .map(|source| source.images)
        .unwrap_or_default()
        .into_iter()
        .map(|url| ReaderAreaImage {
            url,
            width: 0.0,
            height: 0.0,
            decoding: String::new(),
            alt: String::new(),
        })
        .collect())
}

/// Pulls the first balanced `{…}` object out of a script body. The bootstrap
/// arguments carry no braces inside string values, so a plain depth count is
/// enough.
fn extract_braced_json<T: DeserializeOwned>(input: &str) -> Result<T> {
    let mut object = String::new();
    let mut depth = 0u32;
    let mut started = false;

    for c in input.chars() {
        match c {
            '{' => {
                depth += 1;
                started = true;
            }
            '}' if started => depth = depth.saturating_sub(1),
            _ => {}
        }
        if started {
            object.push(c);
        }
        if started && depth == 0 {
            break;
        }
    }

    Ok(serde_json::from_str(&object)?)
}

impl FromHtml for RawKumaChapterData {
    fn from_html(html: &Html) -> Result<Self> {
        let content = content_root(html)?;
        let area = select_first(content, READER_AREA)?;

        let images = match select_first_opt(area, "noscript")? {
            Some(noscript) => noscript_images(noscript)?,
            None => {
                tracing::debug!("No noscript reader block, falling back to ts_reader bootstrap");
                bootstrap_images(content)?
            }
        };
        if images.is_empty() {
            tracing::warn!("Reader area parsed to zero images");
        }

        Ok(Self {
            reader_area: ReaderArea { images },
            related_mangas: BsxTitleData::from_elements(&select_all(content, BSX_CARD)?),
        })
    }
}
