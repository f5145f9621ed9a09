use std::time::Duration;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};
use indicatif::{ProgressBar, ProgressStyle};

use agent_toolbox::{
    config, error,
    tools::{catalog, fitness},
    types::UserIdentity,
    utils,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Search the music catalog
    Search(SearchOptions),

    /// List an artist's top tracks
    TopTracks(TopTracksOptions),

    /// List an album's tracks with durations
    Tracklist(TracklistOptions),

    /// List an artist's releases, newest first
    Discography(DiscographyOptions),

    /// Calculate daily calorie and macro targets
    Macros(MacrosOptions),

    /// Suggest a weekly workout structure
    Workout(WorkoutOptions),

    /// Show detailed routines for specific body parts
    Routine(RoutineOptions),

    /// Fetch the fitness-center schedule page
    Gym,

    /// Format the supplied user identity fields
    Whoami(WhoamiOptions),

    /// Show the current date and time
    Now,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    /// Search term(s); several terms run as a batch with one result each
    pub terms: Vec<String>,

    /// Result kind: track, artist, album or playlist
    #[clap(long, default_value = "track", value_parser = utils::parse_search_kind)]
    pub kind: utils::SearchKind,

    /// Search by genre instead of free text
    #[clap(long)]
    pub genre: Option<String>,

    /// Restrict a --genre search to one artist
    #[clap(long)]
    pub artist: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct TopTracksOptions {
    /// Artist name to resolve
    pub artist: String,
}

#[derive(Parser, Debug, Clone)]
pub struct TracklistOptions {
    /// Album name to resolve
    pub album: String,
}

#[derive(Parser, Debug, Clone)]
pub struct DiscographyOptions {
    /// Artist name to resolve
    pub artist: String,

    /// Maximum number of releases to list
    #[clap(long, default_value_t = catalog::DISCOGRAPHY_DEFAULT_LIMIT)]
    pub limit: usize,
}

#[derive(Parser, Debug, Clone)]
pub struct MacrosOptions {
    /// Body weight, e.g. "70" or "70kg"
    #[clap(long)]
    pub weight: Option<String>,

    /// Height, e.g. "173", "173cm" or "1.73"
    #[clap(long)]
    pub height: Option<String>,

    /// Age in years
    #[clap(long)]
    pub age: Option<String>,

    /// Gender: M / F
    #[clap(long, default_value = "M")]
    pub gender: String,

    /// Activity level: sedentary, light, moderate, active
    #[clap(long, default_value = "light")]
    pub activity: String,

    /// Goal: cut, bulk, recomp
    #[clap(long, default_value = "recomp")]
    pub goal: String,

    /// Fill missing fields from defaults instead of asking
    #[clap(long)]
    pub force_estimate: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct WorkoutOptions {
    /// Training goal, e.g. build_muscle, lose_fat, general
    #[clap(long, default_value = "general")]
    pub goal: String,

    /// Training days per week (3-6)
    #[clap(long, default_value_t = 3)]
    pub days: u32,
}

#[derive(Parser, Debug, Clone)]
pub struct RoutineOptions {
    /// Body parts to train, e.g. "chest and back"
    pub parts: String,
}

#[derive(Parser, Debug, Clone)]
pub struct WhoamiOptions {
    #[clap(long)]
    pub name: Option<String>,

    #[clap(long)]
    pub id: Option<String>,

    #[clap(long)]
    pub email: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Search(opt) => {
            let pb = spinner("Searching catalog...");
            let reply = if let Some(genre) = &opt.genre {
                match &opt.artist {
                    Some(artist) => catalog::search_artist_genre(artist, genre).await,
                    None => catalog::search_genre(genre).await,
                }
            } else if opt.terms.len() > 1 {
                catalog::search_many(&opt.terms, opt.kind).await
            } else if let Some(term) = opt.terms.first() {
                catalog::search(term, opt.kind).await
            } else {
                pb.finish_and_clear();
                error!("Provide a search term or --genre.");
            };
            pb.finish_and_clear();
            println!("{}", reply);
        }
        Command::TopTracks(opt) => {
            let pb = spinner("Fetching top tracks...");
            let reply = catalog::top_tracks(&opt.artist).await;
            pb.finish_and_clear();
            println!("{}", reply);
        }
        Command::Tracklist(opt) => {
            let pb = spinner("Fetching album tracklist...");
            let reply = catalog::album_tracklist(&opt.album).await;
            pb.finish_and_clear();
            println!("{}", reply);
        }
        Command::Discography(opt) => {
            let pb = spinner("Fetching discography...");
            let reply = catalog::discography(&opt.artist, opt.limit).await;
            pb.finish_and_clear();
            println!("{}", reply);
        }
        Command::Macros(opt) => {
            let reply = fitness::calculate_daily_macros(
                opt.weight.as_deref(),
                opt.height.as_deref(),
                opt.age.as_deref(),
                &opt.gender,
                &opt.activity,
                &opt.goal,
                opt.force_estimate,
            );
            println!("{}", reply);
        }
        Command::Workout(opt) => {
            println!("{}", fitness::weekly_workout_schedule(&opt.goal, opt.days));
        }
        Command::Routine(opt) => {
            println!("{}", fitness::body_part_routine(&opt.parts));
        }
        Command::Gym => {
            let pb = spinner("Fetching gym schedule page...");
            let reply = fitness::gym_schedule().await;
            pb.finish_and_clear();
            println!("{}", reply);
        }
        Command::Whoami(opt) => {
            let user = UserIdentity {
                name: opt.name,
                id: opt.id,
                email: opt.email,
            };
            println!("{}", fitness::user_identity(&user));
        }
        Command::Now => {
            println!("{}", fitness::current_time());
        }
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
