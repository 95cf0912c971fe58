pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use crate::core::client::RawKumaClient;
pub use domain::filter::{Genre, HomeParameters, MangaListParameter, Order, Status, Type};
pub use domain::model::{
    BixboxData, BsxTitleData, Chapter, ChapterList, MgenTag, RawKumaChapterData, RawKumaHomeData,
    RawKumaMangaDetailData, RawKumaSearch, ReaderArea, ReaderAreaImage, UtaoTitleChapter,
    UtaoTitleData,
};
pub use domain::ports::{ClientOptions, FromElement, FromHtml, ToQueryPairs};
pub use utils::error::{Result, ScrapeError};
