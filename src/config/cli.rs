use clap::{Parser, Subcommand};

use crate::config::{
    DEFAULT_BASE_URL, DEFAULT_RETRY_ATTEMPTS, DEFAULT_RETRY_DELAY_SECONDS,
    DEFAULT_TIMEOUT_SECONDS, DEFAULT_USER_AGENT,
};
use crate::domain::ports::ClientOptions;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};

#[derive(Debug, Clone, Parser)]
#[command(name = "rawkuma")]
#[command(about = "Scrape RawKuma pages into typed JSON payloads")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
    pub timeout_seconds: u64,

    #[arg(long, default_value_t = DEFAULT_RETRY_ATTEMPTS)]
    pub retry_attempts: u32,

    #[arg(long, default_value_t = DEFAULT_RETRY_DELAY_SECONDS)]
    pub retry_delay_seconds: u64,

    #[arg(long, help = "Load client settings from a TOML config file")]
    pub config: Option<String>,

    #[arg(long, help = "Write the JSON payload to a file instead of stdout")]
    pub output: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Fetch the home page aggregation
    Home {
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Search titles by query
    Search {
        query: String,

        #[arg(long)]
        page: Option<u16>,
    },
    /// Browse the manga listing with filters
    Manga {
        #[arg(long, default_value_t = 1)]
        page: u32,

        #[arg(long, default_value = "", help = "Status token, e.g. ongoing")]
        status: String,

        #[arg(long = "type", default_value = "", help = "Type token, e.g. manhwa")]
        type_: String,

        #[arg(long, default_value = "", help = "Order token, e.g. popular")]
        order: String,

        #[arg(long, value_delimiter = ',', help = "Genre tokens, e.g. action,sci-fi")]
        genre: Vec<String>,
    },
    /// Fetch a title's detail page by slug
    Detail { slug: String },
    /// Fetch a chapter's reader page by slug
    Chapter { slug: String },
}

impl ClientOptions for CliConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    fn retry_attempts(&self) -> u32 {
        self.retry_attempts
    }

    fn retry_delay_seconds(&self) -> u64 {
        self.retry_delay_seconds
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("base_url", &self.base_url)?;
        validation::validate_non_empty_string("user_agent", &self.user_agent)?;
        validation::validate_positive_number("timeout_seconds", self.timeout_seconds, 1)?;
        validation::validate_range("retry_attempts", self.retry_attempts, 0, 10)?;
        validation::validate_range("retry_delay_seconds", self.retry_delay_seconds, 0, 300)?;
        Ok(())
    }
}
