//! Agent Toolbox Library
//!
//! This library implements two independent families of tools meant to be
//! invoked by an LLM agent host: a fitness advisor (macro calculation,
//! workout splits, gym schedule scraping) and a Spotify catalog client
//! (search, top tracks, album tracklists, discographies).
//!
//! # Modules
//!
//! - `config` - Configuration management and environment variables
//! - `error` - The tool error taxonomy
//! - `fitness` - Fitness domain logic (calculator, routines, gym scrape)
//! - `management` - Token lifecycle management
//! - `spotify` - Spotify Web API client implementation
//! - `tools` - Host-facing tool operations (string in, string out)
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! Every operation in [`tools`] returns a single `String` and never fails:
//! the caller is a language-model host that cannot catch errors, so all
//! failure signaling is in-band text.
//!
//! # Example
//!
//! ```
//! use agent_toolbox::{config, tools};
//!
//! #[tokio::main]
//! async fn main() {
//!     config::load_env().await.ok();
//!     let reply = tools::catalog::search("daft punk", Default::default()).await;
//!     println!("{reply}");
//! }
//! ```

pub mod config;
pub mod error;
pub mod fitness;
pub mod management;
pub mod spotify;
pub mod tools;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern throughout the application
/// using a boxed dynamic error trait object. This allows for flexible
/// error handling while maintaining Send + Sync bounds for async contexts.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
///
/// # Example
///
/// ```
/// info!("Resolving artist id...");
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
///
/// # Example
///
/// ```
/// success!("Configuration loaded");
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// This macro terminates the process with exit code 1 and is reserved for
/// unrecoverable startup failures in the binary. Tool operations never use
/// it; they report failures in their returned string instead.
///
/// # Example
///
/// ```
/// error!("Cannot load environment: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
///
/// # Example
///
/// ```
/// warning!("No .env file found, relying on process environment");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
