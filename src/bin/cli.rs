use clap::{Parser, Subcommand};
use player_search_engine::{
    catalog_stats, extract_search_terms, filter_by_keyword, load_catalog, normalize,
    sort_candidates, text, Candidate, SearchConfig, SearchEngine, SortOrder,
};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "player-search")]
#[command(about = "Bilingual player search CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Search config (YAML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank players against a query
    Search {
        /// Search query (Arabic, English or mixed)
        query: String,

        /// Player catalog (JSON array)
        #[arg(long)]
        catalog: PathBuf,

        /// Maximum results
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show the terms extracted from a query
    Terms {
        query: String,
    },

    /// Show the normalized forms of a text
    Normalize {
        text: String,
    },

    /// List players having a keyword
    Filter {
        keyword: String,

        #[arg(long)]
        catalog: PathBuf,

        /// name-asc, name-desc, date-asc or date-desc
        #[arg(short, long, default_value = "date-desc")]
        sort: SortOrder,
    },

    /// Catalog statistics
    Stats {
        #[arg(long)]
        catalog: PathBuf,
    },
}

fn print_player(rank: usize, player: &Candidate) {
    let team = if player.team_name.is_empty() {
        "N/A"
    } else {
        player.team_name.as_str()
    };
    println!("   {}. {} [{}] team: {}", rank, player.display_name(), player.id, team);
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "player_search_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => SearchConfig::from_yaml_file(path)?,
        None => SearchConfig::default(),
    };

    match cli.command {
        Commands::Search { query, catalog, limit } => {
            if limit.is_some() {
                config.max_results = limit;
            }
            let engine = SearchEngine::new(config)?;
            let players = load_catalog(&catalog)?;

            println!("🔍 Searching for: {}", query);
            let response = engine.search(&query, &players);

            println!("   Terms: {:?}", response.terms);
            println!("   Latency: {:.2}ms", response.latency_ms);

            if response.has_matches() {
                println!("\n✅ {} match(es):", response.results.len());
                for (i, hit) in response.results.iter().enumerate() {
                    print_player(i + 1, &hit.candidate);
                    println!("      score: {}", hit.score);
                }
            } else {
                println!("\n❌ No players matched");
            }
        }

        Commands::Terms { query } => {
            for term in extract_search_terms(&query) {
                println!("{}", term);
            }
        }

        Commands::Normalize { text: input } => {
            println!("arabic:       {}", text::normalize_arabic(&input));
            println!("latin:        {}", text::normalize_latin(&input));
            println!("latin strict: {}", text::normalize_latin_strict(&input));
            println!("canonical:    {}", normalize(&input));
        }

        Commands::Filter { keyword, catalog, sort } => {
            let players = load_catalog(&catalog)?;
            let matched = sort_candidates(&filter_by_keyword(&players, &keyword), sort);

            println!("📋 {} player(s) with keyword '{}':", matched.len(), keyword);
            for (i, player) in matched.iter().enumerate() {
                print_player(i + 1, player);
            }
        }

        Commands::Stats { catalog } => {
            let players = load_catalog(&catalog)?;
            let stats = catalog_stats(&players, chrono::Utc::now());

            println!("📊 Catalog Statistics:");
            println!("   Total players: {}", stats.total_players);
            println!("   Distinct keywords: {}", stats.total_keywords);
            println!("   Added in the last 7 days: {}", stats.recently_added);
        }
    }

    Ok(())
}
