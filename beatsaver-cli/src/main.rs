use std::time::Duration;

use anyhow::{Context, Result};
use beatsaver_api::types::{SearchQuery, SortOrder};
use beatsaver_api::{BASE_URL, BeatSaverClient, ClientConfig};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "beatsaver", version, about = "BeatSaver map catalog CLI")]
struct Cli {
    /// API base URL
    #[arg(long, global = true, env = "BEATSAVER_API_URL", default_value = BASE_URL)]
    base_url: String,
    /// Request timeout in seconds (transport default if omitted)
    #[arg(long, global = true, value_name = "SECS")]
    timeout: Option<u64>,
    /// Log requests to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show a map by id
    Map { id: String },
    /// Show several maps by id
    Maps {
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Show the map containing a version hash
    Hash { hash: String },
    /// List maps by uploader
    Uploader {
        id: String,
        #[arg(short, long, default_value = "0")]
        page: u32,
    },
    /// List maps by uploader, including collaborations
    Collaborations { id: String },
    /// List the latest maps
    Latest,
    /// List deleted maps
    Deleted {
        /// Only maps deleted before this date (ISO-8601)
        #[arg(long)]
        before: Option<String>,
    },
    /// List maps by play count
    Plays {
        #[arg(short, long, default_value = "0")]
        page: u32,
    },
    /// Show a user by id
    User { id: String },
    /// Show several users by id
    Users {
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Show a user by name
    UserName { name: String },
    /// Verify a user token
    Verify { token: String },
    /// Search maps
    Search(SearchArgs),
    /// Playlist commands
    #[command(subcommand)]
    Playlists(PlaylistCommand),
}

#[derive(Subcommand)]
enum PlaylistCommand {
    /// List the latest playlists
    Latest,
    /// Search playlists
    Search {
        query: Option<String>,
        #[arg(short, long, default_value = "0")]
        page: u32,
        /// Use the v1 search route
        #[arg(long)]
        v1: bool,
    },
    /// List playlists owned by a user
    User {
        id: String,
        #[arg(short, long, default_value = "0")]
        page: u32,
    },
    /// Show a playlist and one page of its maps
    Detail {
        id: String,
        #[arg(short, long, default_value = "0")]
        page: u32,
    },
}

#[derive(Args)]
struct SearchArgs {
    /// Free-text query
    query: Option<String>,
    #[arg(short, long, default_value = "0")]
    page: u32,
    #[arg(long, default_value = "latest")]
    sort_order: SortArg,
    #[arg(long)]
    automapper: Option<bool>,
    #[arg(long)]
    chroma: Option<bool>,
    #[arg(long)]
    cinema: Option<bool>,
    #[arg(long)]
    curated: Option<bool>,
    #[arg(long)]
    environments: Option<String>,
    #[arg(long)]
    followed: Option<bool>,
    /// Uploaded on or after (ISO-8601)
    #[arg(long)]
    from: Option<String>,
    #[arg(long)]
    full_spread: Option<bool>,
    #[arg(long)]
    leaderboard: Option<String>,
    #[arg(long, value_parser = finite)]
    max_bpm: Option<f64>,
    /// Seconds
    #[arg(long)]
    max_duration: Option<u32>,
    #[arg(long, value_parser = finite)]
    max_nps: Option<f64>,
    #[arg(long, value_parser = finite)]
    max_rating: Option<f64>,
    #[arg(long)]
    me: Option<bool>,
    #[arg(long, value_parser = finite)]
    min_bpm: Option<f64>,
    /// Seconds
    #[arg(long)]
    min_duration: Option<u32>,
    #[arg(long, value_parser = finite)]
    min_nps: Option<f64>,
    #[arg(long, value_parser = finite)]
    min_rating: Option<f64>,
    #[arg(long)]
    noodle: Option<bool>,
    #[arg(long)]
    tags: Option<String>,
    /// Uploaded on or before (ISO-8601)
    #[arg(long)]
    to: Option<String>,
    #[arg(long)]
    verified: Option<bool>,
}

#[derive(Clone, ValueEnum)]
enum SortArg {
    Latest,
    Relevance,
    Rating,
    Curated,
    Random,
}

impl From<SortArg> for SortOrder {
    fn from(s: SortArg) -> Self {
        match s {
            SortArg::Latest => Self::Latest,
            SortArg::Relevance => Self::Relevance,
            SortArg::Rating => Self::Rating,
            SortArg::Curated => Self::Curated,
            SortArg::Random => Self::Random,
        }
    }
}

impl From<SearchArgs> for SearchQuery {
    fn from(a: SearchArgs) -> Self {
        Self {
            page: a.page,
            q: a.query,
            automapper: a.automapper,
            chroma: a.chroma,
            cinema: a.cinema,
            curated: a.curated,
            environments: a.environments,
            followed: a.followed,
            from_date: a.from,
            full_spread: a.full_spread,
            leaderboard: a.leaderboard,
            max_bpm: a.max_bpm,
            max_duration: a.max_duration,
            max_nps: a.max_nps,
            max_rating: a.max_rating,
            me: a.me,
            min_bpm: a.min_bpm,
            min_duration: a.min_duration,
            min_nps: a.min_nps,
            min_rating: a.min_rating,
            noodle: a.noodle,
            sort_order: a.sort_order.into(),
            tags: a.tags,
            to_date: a.to,
            verified: a.verified,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let config = ClientConfig {
        base_url: cli.base_url,
        timeout: cli.timeout.map(Duration::from_secs),
        user_agent: Some(concat!("beatsaver-cli/", env!("CARGO_PKG_VERSION")).to_owned()),
    };
    let client = BeatSaverClient::with_config(&config).context("failed to build HTTP client")?;

    print(run(&client, cli.command))
}

fn finite(s: &str) -> std::result::Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("`{s}` is not a finite number"))
    }
}

fn init_logger(verbose: bool) {
    let default = if verbose { "beatsaver_api=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print(result: beatsaver_api::Result<Value>) -> Result<()> {
    match result {
        Ok(payload) => {
            println!("{}", serde_json::to_string_pretty(&payload)?);
            Ok(())
        }
        Err(e) => {
            let kind = e.kind();
            Err(anyhow::Error::new(e).context(format!("request failed ({kind})")))
        }
    }
}

// ── maps / users / search ──

fn run(client: &BeatSaverClient, cmd: Command) -> beatsaver_api::Result<Value> {
    let maps = client.maps();
    match cmd {
        Command::Map { id } => maps.map_by_id(&id),
        Command::Maps { ids } => maps.maps_by_ids(ids.as_slice()),
        Command::Hash { hash } => maps.map_by_hash(&hash),
        Command::Uploader { id, page } => maps.maps_by_uploader(&id, page),
        Command::Collaborations { id } => maps.maps_with_collaborations(&id),
        Command::Latest => maps.latest_maps(),
        Command::Deleted { before } => maps.deleted_maps(before.as_deref()),
        Command::Plays { page } => maps.maps_by_play_count(page),
        Command::User { id } => maps.user_by_id(&id),
        Command::Users { ids } => maps.users_by_ids(ids.as_slice()),
        Command::UserName { name } => maps.user_by_name(&name),
        Command::Verify { token } => maps.verify_user_token(&token),
        Command::Search(args) => client.search().search_maps(&args.into()),
        Command::Playlists(cmd) => cmd_playlists(client, cmd),
    }
}

// ── playlists ──

fn cmd_playlists(client: &BeatSaverClient, cmd: PlaylistCommand) -> beatsaver_api::Result<Value> {
    let playlists = client.playlists();
    match cmd {
        PlaylistCommand::Latest => playlists.latest_playlists(),
        PlaylistCommand::Search { query, page, v1 } => {
            if v1 {
                playlists.search_playlists_v1(page, query.as_deref())
            } else {
                playlists.search_playlists(page, query.as_deref())
            }
        }
        PlaylistCommand::User { id, page } => playlists.playlists_by_user(&id, page),
        PlaylistCommand::Detail { id, page } => playlists.playlist_detail(&id, page),
    }
}
