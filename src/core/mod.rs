pub mod chapter;
pub mod client;
pub mod elements;
pub mod home;
pub mod manga_details;
pub mod search;

pub use crate::domain::filter::{HomeParameters, MangaListParameter};
pub use crate::domain::ports::{ClientOptions, FromElement, FromHtml, ToQueryPairs};
pub use crate::utils::error::Result;
pub use client::RawKumaClient;
