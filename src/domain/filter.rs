use serde::{Deserialize, Serialize};

use crate::domain::ports::ToQueryPairs;

// Listing filters. Each enum is a closed set; `as_str` yields the token the
// site's query string expects, with the catch-all variant mapping to "".

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[default]
    All,
    Ongoing,
    Completed,
    Hiatus,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::All => "",
            Status::Ongoing => "ongoing",
            Status::Completed => "completed",
            Status::Hiatus => "hiatus",
        }
    }
}

impl AsRef<str> for Status {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<&str> for Status {
    fn from(value: &str) -> Self {
        match value {
            "ongoing" => Self::Ongoing,
            "completed" => Self::Completed,
            "hiatus" => Self::Hiatus,
            _ => Self::All,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Type {
    #[default]
    All,
    Manga,
    Manhwa,
    Manhua,
    Comic,
    Novel,
}

impl Type {
    pub fn as_str(&self) -> &'static str {
        match self {
            Type::All => "",
            Type::Manga => "manga",
            Type::Manhwa => "manhwa",
            Type::Manhua => "manhua",
            Type::Comic => "comic",
            Type::Novel => "novel",
        }
    }
}

impl AsRef<str> for Type {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<&str> for Type {
    fn from(value: &str) -> Self {
        match value {
            "manga" => Type::Manga,
            "manhwa" => Type::Manhwa,
            "manhua" => Type::Manhua,
            "comic" => Type::Comic,
            "novel" => Type::Novel,
            _ => Type::All,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Order {
    #[default]
    Default,
    AZ,
    ZA,
    Update,
    Added,
    Popular,
}

impl Order {
    pub fn as_str(&self) -> &'static str {
        match self {
            Order::Default => "",
            Order::AZ => "title",
            Order::ZA => "titlereverse",
            Order::Update => "update",
            Order::Added => "latest",
            Order::Popular => "popular",
        }
    }
}

impl AsRef<str> for Order {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<&str> for Order {
    fn from(value: &str) -> Self {
        match value {
            "title" => Order::AZ,
            "titlereverse" => Order::ZA,
            "update" => Order::Update,
            "latest" => Order::Added,
            "popular" => Order::Popular,
            _ => Order::Default,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Genre {
    #[default]
    All,
    Action,
    Adult,
    Adventure,
    #[serde(rename = "Alternative_World")]
    AlternativeWorld,
    Comedy,
    Drama,
    Ecchi,
    Elves,
    English,
    Fantasy,
    Food,
    Game,
    #[serde(rename = "Gender_Bender")]
    GenderBender,
    Harem,
    Historical,
    Horror,
    Isekai,
    Josei,
    Lolicon,
    Magic,
    #[serde(rename = "Martial_Arts")]
    MartialArts,
    Mature,
    Mecha,
    Medical,
    Mystery,
    #[serde(rename = "N_A")]
    NA,
    Oneshot,
    Psychological,
    Romance,
    #[serde(rename = "School_Life")]
    SchoolLife,
    #[serde(rename = "Sci_Fi")]
    SciFi,
    Seinen,
    Shotacon,
    Shoujo,
    #[serde(rename = "Shoujo_Ai")]
    ShoujoAi,
    Shounen,
    #[serde(rename = "Shounen_Ai")]
    ShounenAi,
    #[serde(rename = "Slice_Of_Life")]
    SliceOfLife,
    Smut,
    Sports,
    Supernatural,
    Tragedy,
    Updating,
    War,
    Yaoi,
    Yuri,
}

impl Genre {
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::All => "",
            Genre::Action => "action",
            Genre::Adult => "adult",
            Genre::Adventure => "adventure",
            Genre::AlternativeWorld => "alternative-world",
            Genre::Comedy => "comedy",
            Genre::Drama => "drama",
            Genre::Ecchi => "ecchi",
            Genre::Elves => "elves",
            Genre::English => "english",
            Genre::Fantasy => "fantasy",
            Genre::Food => "food",
            Genre::Game => "game",
            // The site's filter really uses this truncated token.
            Genre::GenderBender => "gender-bende",
            Genre::Harem => "harem",
            Genre::Historical => "historical",
            Genre::Horror => "horror",
            Genre::Isekai => "isekai",
            Genre::Josei => "josei",
            Genre::Lolicon => "lolicon",
            Genre::Magic => "magic",
            Genre::MartialArts => "martial-arts",
            Genre::Mature => "mature",
            Genre::Mecha => "mecha",
            Genre::Medical => "medical",
            Genre::Mystery => "mystery",
            Genre::NA => "n-a",
            Genre::Oneshot => "oneshot",
            Genre::Psychological => "psychological",
            Genre::Romance => "romance",
            Genre::SchoolLife => "school-life",
            Genre::SciFi => "sci-fi",
            Genre::Seinen => "seinen",
            Genre::Shotacon => "shotacon",
            Genre::Shoujo => "shoujo",
            Genre::ShoujoAi => "shoujo-ai",
            Genre::Shounen => "shounen",
            Genre::ShounenAi => "shounen-ai",
            Genre::SliceOfLife => "slice-of-life",
            Genre::Smut => "smut",
            Genre::Sports => "sports",
            Genre::Supernatural => "supernatural",
            Genre::Tragedy => "tragedy",
            Genre::Updating => "updating",
            Genre::War => "war",
            Genre::Yaoi => "yaoi",
            Genre::Yuri => "yuri",
        }
    }
}

impl AsRef<str> for Genre {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<&str> for Genre {
    fn from(value: &str) -> Self {
        match value {
            "action" => Self::Action,
            "adult" => Self::Adult,
            "adventure" => Self::Adventure,
            "alternative-world" => Self::AlternativeWorld,
            "comedy" => Self::Comedy,
            "drama" => Self::Drama,
            "ecchi" => Self::Ecchi,
            "elves" => Self::Elves,
            "english" => Self::English,
            "fantasy" => Self::Fantasy,
            "food" => Self::Food,
            "game" => Self::Game,
            "gender-bende" => Self::GenderBender,
            "harem" => Self::Harem,
            "historical" => Self::Historical,
            "horror" => Self::Horror,
            "isekai" => Self::Isekai,
            "josei" => Self::Josei,
            "lolicon" => Self::Lolicon,
            "magic" => Self::Magic,
            "martial-arts" => Self::MartialArts,
            "mature" => Self::Mature,
            "mecha" => Self::Mecha,
            "medical" => Self::Medical,
            "mystery" => Self::Mystery,
            "n-a" => Self::NA,
            "oneshot" => Self::Oneshot,
            "psychological" => Self::Psychological,
            "romance" => Self::Romance,
            "school-life" => Self::SchoolLife,
            "sci-fi" => Self::SciFi,
            "seinen" => Self::Seinen,
            "shotacon" => Self::Shotacon,
            "shoujo" => Self::Shoujo,
            "shoujo-ai" => Self::ShoujoAi,
            "shounen" => Self::Shounen,
            "shounen-ai" => Self::ShounenAi,
            "slice-of-life" => Self::SliceOfLife,
            "smut" => Self::Smut,
            "sports" => Self::Sports,
            "supernatural" => Self::Supernatural,
            "tragedy" => Self::Tragedy,
            "updating" => Self::Updating,
            "war" => Self::War,
            "yaoi" => Self::Yaoi,
            "yuri" => Self::Yuri,
            _ => Self::All,
        }
    }
}

/// Filters for the `/manga/` listing endpoint.
///
/// An empty `genre` list means "no genre filter"; `vec![Genre::All]` sends one
/// explicit empty `genre[]` pair. The site treats them the same, callers may
/// not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MangaListParameter {
    pub page: u32,
    pub status: Status,
    pub genre: Vec<Genre>,
    pub order: Order,
    #[serde(rename = "type")]
    pub type_: Type,
}

impl Default for MangaListParameter {
    fn default() -> Self {
        Self {
            page: 1,
            status: Status::default(),
            genre: Vec::new(),
            order: Order::default(),
            type_: Type::default(),
        }
    }
}

impl ToQueryPairs for MangaListParameter {
    fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("page".to_string(), self.page.to_string()),
            ("status".to_string(), self.status.as_str().to_string()),
        ];
        for genre in &self.genre {
            pairs.push(("genre[]".to_string(), genre.as_str().to_string()));
        }
        pairs.push(("order".to_string(), self.order.as_str().to_string()));
        pairs.push(("type".to_string(), self.type_.as_str().to_string()));
        pairs
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeParameters {
    pub page: u32,
}

impl Default for HomeParameters {
    fn default() -> Self {
        Self { page: 1 }
    }
}

impl ToQueryPairs for HomeParameters {
    fn to_query_pairs(&self) -> Vec<(String, String)> {
        vec![("page".to_string(), self.page.to_string())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_round_trip() {
        for status in [Status::All, Status::Ongoing, Status::Completed, Status::Hiatus] {
            assert_eq!(Status::from(status.as_str()), status);
        }
        for order in [
            Order::Default,
            Order::AZ,
            Order::ZA,
            Order::Update,
            Order::Added,
            Order::Popular,
        ] {
            assert_eq!(Order::from(order.as_str()), order);
        }
        assert_eq!(Genre::from("sci-fi"), Genre::SciFi);
        assert_eq!(Genre::from("gender-bende"), Genre::GenderBender);
    }

    #[test]
    fn test_unknown_tokens_fall_back_to_all() {
        assert_eq!(Status::from("cancelled"), Status::All);
        assert_eq!(Type::from("webtoon"), Type::All);
        assert_eq!(Order::from("rating"), Order::Default);
        assert_eq!(Genre::from("unknown-genre"), Genre::All);
    }

    #[test]
    fn test_genre_serde_names_keep_underscores() {
        assert_eq!(
            serde_json::to_string(&Genre::AlternativeWorld).unwrap(),
            "\"Alternative_World\""
        );
        assert_eq!(serde_json::to_string(&Genre::NA).unwrap(), "\"N_A\"");
        assert_eq!(
            serde_json::from_str::<Genre>("\"Slice_Of_Life\"").unwrap(),
            Genre::SliceOfLife
        );
        assert!(serde_json::from_str::<Genre>("\"Slice Of Life\"").is_err());
    }

    #[test]
    fn test_manga_list_parameter_defaults() {
        let pairs = MangaListParameter::default().to_query_pairs();

        assert_eq!(
            pairs,
            vec![
                ("page".to_string(), "1".to_string()),
                ("status".to_string(), "".to_string()),
                ("order".to_string(), "".to_string()),
                ("type".to_string(), "".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_genres_differ_from_explicit_all() {
        let none = MangaListParameter::default();
        let all = MangaListParameter {
            genre: vec![Genre::All],
            ..MangaListParameter::default()
        };

        let none_pairs = none.to_query_pairs();
        let all_pairs = all.to_query_pairs();

        assert!(!none_pairs.iter().any(|(k, _)| k == "genre[]"));
        assert!(all_pairs.contains(&("genre[]".to_string(), "".to_string())));
    }

    #[test]
    fn test_manga_list_parameter_serde_renames_type() {
        let params = MangaListParameter {
            type_: Type::Manhwa,
            ..MangaListParameter::default()
        };

        let value = serde_json::to_value(&params).unwrap();

        assert_eq!(value["type"], "Manhwa");
    }

    #[test]
    fn test_genre_filter_pairs() {
        let params = MangaListParameter {
            genre: vec![Genre::Action, Genre::SciFi],
            status: Status::Ongoing,
            order: Order::Popular,
            ..MangaListParameter::default()
        };

        let pairs = params.to_query_pairs();

        assert!(pairs.contains(&("genre[]".to_string(), "action".to_string())));
        assert!(pairs.contains(&("genre[]".to_string(), "sci-fi".to_string())));
        assert!(pairs.contains(&("status".to_string(), "ongoing".to_string())));
        assert!(pairs.contains(&("order".to_string(), "popular".to_string())));
    }
}
