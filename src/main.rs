use clap::Parser;
use rawkuma_scraper::config::cli::Command;
use rawkuma_scraper::utils::{logger, validation::Validate};
use rawkuma_scraper::{
    CliConfig, Genre, HomeParameters, MangaListParameter, Order, RawKumaClient, Status,
    TomlConfig, Type,
};

async fn run(client: &RawKumaClient, command: &Command) -> rawkuma_scraper::Result<serde_json::Value> {
    let payload = match command {
        Command::Home { page } => {
            serde_json::to_value(client.home(HomeParameters { page: *page }).await?)?
        }
        Command::Search { query, page } => {
            serde_json::to_value(client.search(query, *page).await?)?
        }
        Command::Manga {
            page,
            status,
            type_,
            order,
            genre,
        } => {
            let params = MangaListParameter {
                page: *page,
                status: Status::from(status.as_str()),
                genre: genre.iter().map(|token| Genre::from(token.as_str())).collect(),
                order: Order::from(order.as_str()),
                type_: Type::from(type_.as_str()),
            };
            serde_json::to_value(client.manga_list(Some(params)).await?)?
        }
        Command::Detail { slug } => serde_json::to_value(client.manga_details(slug).await?)?,
        Command::Chapter { slug } => serde_json::to_value(client.chapter(slug).await?)?,
    };
    Ok(payload)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting rawkuma CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    // 命令列參數優先,TOML 配置作為客戶端設定的來源
    let (client, output, pretty) = match &config.config {
        Some(path) => {
            let file_config = TomlConfig::from_file(path)?;
            if let Err(e) = file_config.validate() {
                tracing::error!("❌ Configuration validation failed: {}", e);
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
            let file_output = file_config.output.clone();
            let output = config
                .output
                .clone()
                .or_else(|| file_output.as_ref().and_then(|section| section.path.clone()));
            let pretty = file_output
                .and_then(|section| section.pretty)
                .unwrap_or(true);
            (RawKumaClient::new(&file_config)?, output, pretty)
        }
        None => (RawKumaClient::new(&config)?, config.output.clone(), true),
    };

    match run(&client, &config.command).await {
        Ok(payload) => {
            let body = if pretty {
                serde_json::to_string_pretty(&payload)?
            } else {
                serde_json::to_string(&payload)?
            };
            match &output {
                Some(path) => {
                    std::fs::write(path, body)?;
                    tracing::info!("✅ Payload written to {}", path);
                    println!("✅ Payload written to {}", path);
                }
                None => println!("{}", body),
            }
        }
        Err(e) => {
            tracing::error!("❌ Scrape failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
