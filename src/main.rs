use randomuser_client::config::Config;
use randomuser_client::user_client::{RandomUserClient, UserQuery, DEFAULT_PAGE, DEFAULT_RESULTS};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Parses the optional `[page] [results] [seed]` arguments.
fn parse_query(args: &[String]) -> anyhow::Result<UserQuery> {
    let page = match args.first() {
        Some(raw) => raw
            .parse()
            .map_err(|_| anyhow::anyhow!("page must be an integer, got '{}'", raw))?,
        None => DEFAULT_PAGE,
    };
    let results = match args.get(1) {
        Some(raw) => raw
            .parse()
            .map_err(|_| anyhow::anyhow!("results must be an integer, got '{}'", raw))?,
        None => DEFAULT_RESULTS,
    };

    let query = UserQuery::new(page, results);
    Ok(match args.get(2) {
        Some(seed) => query.with_seed(seed.clone()),
        None => query,
    })
}

/// Fetches one page of random users and prints one line per user.
///
/// Usage: `randomuser-client [page] [results] [seed]`
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "randomuser_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    tracing::info!("Configuration loaded successfully");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let query = parse_query(&args)?;

    let client = RandomUserClient::from_config(&config)?;
    let response = client.fetch(&query).await?;

    for user in &response.results {
        println!("{} <{}> {}", user.name.full_name(), user.email, user.nat);
    }
    println!(
        "\npage {} | {} results | seed {} | version {}",
        response.info.page, response.info.results, response.info.seed, response.info.version
    );

    Ok(())
}
