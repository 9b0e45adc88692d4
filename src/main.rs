//! snapfeed - Browse, search and favorite photos from an Unsplash-like API

// Lints {{{

#![deny(
    nonstandard_style,
    rust_2018_idioms,
    future_incompatible,
    rustdoc::all,
    rustdoc::missing_crate_level_docs,
    missing_docs,
    unreachable_pub,
    unsafe_code,
    unused,
    unused_import_braces,
    unused_lifetimes,
    variant_size_differences,
    warnings,
    clippy::all,
    clippy::pedantic,
    clippy::clone_on_ref_ptr,
    clippy::exit,
    clippy::filetype_is_file,
    clippy::float_cmp_const,
    clippy::lossy_float_literal,
    clippy::mem_forget,
    clippy::panic,
    clippy::pattern_type_mismatch,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unneeded_field_pattern,
    clippy::verbose_file_reads,
    clippy::dbg_macro,
    clippy::let_underscore_must_use,
    clippy::todo,
    clippy::unwrap_used,
    clippy::use_debug
)]

// }}}

use clap::{Parser, Subcommand};
use eyre::{Result, WrapErr};
use snapfeed::{
    logging, termio, App, Client, Config, Photo, PhotoApi, PhotoDetail,
    PhotoId, PAGE_SIZE,
};
use std::time::Duration;
use url::Url;

fn main() -> Result<()> {
    let opts = Opts::parse();
    logging::init(opts.log_level.as_deref());

    let config = opts.config().context("invalid configuration")?;
    let mut app = App::new(Client::new(config));

    match opts.command {
        Command::Feed {
            pages,
            toggle,
            details,
        } => browse_feed(&mut app, pages, toggle.as_ref(), details),
        Command::Search { query, details } => {
            search(&mut app, &query, details);
        },
        Command::Favorites { toggle, details } => {
            browse_favorites(&mut app, toggle.as_ref(), details);
        },
    }

    Ok(())
}

/// Loads `pages` pages of the random feed, the way a scrolling list would.
fn browse_feed<A>(
    app: &mut App<A>,
    pages: usize,
    toggle: Option<&PhotoId>,
    details: bool,
) where
    A: PhotoApi + 'static,
{
    app.load_feed();
    settle(app);

    let wanted = wanted_photos(pages);
    while app.feed().loaded_count() < wanted {
        let loaded = app.feed().loaded_count();
        // Every loaded cell comes into view, prefetching the next ones.
        app.scroll_feed(0..loaded);
        settle(app);

        if app.feed().loaded_count() == loaded {
            termio::print_warn(&format!("feed stopped after {loaded} photos"));
            break;
        }
    }

    if let Some(id) = toggle {
        let index = position(app.feed().current_display_list(), id);
        match index.and_then(|index| app.toggle_feed_like(index)) {
            Some(liked) => report_toggle(id, liked),
            None => termio::print_warn(&format!("{id} is not in the feed")),
        }
        settle(app);
    }

    print_photos(app.feed().current_display_list(), details);
}

/// Returns the number of photos in `pages` full pages.
fn wanted_photos(pages: usize) -> usize {
    pages.saturating_mul(PAGE_SIZE)
}

/// Runs a search and prints its results.
fn search<A>(app: &mut App<A>, query: &str, details: bool)
where
    A: PhotoApi + 'static,
{
    app.search(query);
    settle(app);

    print_photos(app.feed().current_display_list(), details);
}

/// Lists the liked photos.
fn browse_favorites<A>(
    app: &mut App<A>,
    toggle: Option<&PhotoId>,
    details: bool,
) where
    A: PhotoApi + 'static,
{
    app.show_favorites();
    settle(app);

    if let Some(id) = toggle {
        let index = position(app.favorites().photos(), id);
        match index.and_then(|index| app.toggle_favorite_like(index)) {
            Some(liked) => report_toggle(id, liked),
            None => termio::print_warn(&format!("{id} is not a favorite")),
        }
        settle(app);
    }

    print_photos(app.favorites().photos(), details);
    app.hide_favorites();
}

/// Waits for the requests in flight, then shows the alerts they raised.
fn settle<A>(app: &mut App<A>)
where
    A: PhotoApi + 'static,
{
    app.run_until_idle();
    for alert in app.take_alerts() {
        termio::print_alert(&alert);
    }
}

/// Returns the index of the photo `id` in `photos`.
fn position(photos: &[Photo], id: &PhotoId) -> Option<usize> {
    photos.iter().position(|photo| photo.id() == id)
}

/// Reports a like toggle.
fn report_toggle(id: &PhotoId, liked: bool) {
    if liked {
        termio::print_ok(&format!("{id} added to favorites"));
    } else {
        termio::print_ok(&format!("{id} removed from favorites"));
    }
}

/// Prints a photo list, one line per photo (or one block with `details`).
fn print_photos(photos: &[Photo], details: bool) {
    if photos.is_empty() {
        termio::print_warn("no photos");
        return;
    }

    for photo in photos {
        let liked = if photo.is_liked() { "*" } else { " " };
        println!(
            "{liked} {:<12} {:<24} {}",
            photo.id(),
            photo.author().name(),
            photo.description().unwrap_or_default()
        );
        if details {
            println!("{}\n", PhotoDetail::new(photo));
        }
    }
}

/// CLI options.
#[derive(Parser)]
#[clap(author, version, about)]
struct Opts {
    /// Root URL of the photo API [default: the Unsplash API].
    #[clap(long, env = "SNAPFEED_BASE_URL")]
    base_url: Option<Url>,

    /// Access token of the photo API.
    #[clap(long, env = "SNAPFEED_ACCESS_TOKEN", hide_env_values = true)]
    token: String,

    /// User whose likes are the favorites [default: user1a].
    #[clap(short, long, env = "SNAPFEED_USER")]
    user: Option<String>,

    /// Timeout of HTTP requests, in seconds [default: 30].
    #[clap(long, env = "SNAPFEED_TIMEOUT")]
    timeout: Option<u64>,

    /// Log filter (e.g. `debug`, `snapfeed=trace`), overrides `RUST_LOG`.
    #[clap(long)]
    log_level: Option<String>,

    #[clap(subcommand)]
    command: Command,
}

impl Opts {
    /// Builds the client configuration.
    fn config(&self) -> Result<Config> {
        let mut config = match self.base_url {
            Some(ref url) => Config::with_base_url(url.clone(), &self.token)?,
            None => Config::new(&self.token)?,
        };
        if let Some(ref user) = self.user {
            config = config.username(user)?;
        }
        if let Some(timeout) = self.timeout {
            config = config.timeout(Duration::from_secs(timeout));
        }

        Ok(config)
    }
}

/// What to browse.
#[derive(Subcommand)]
enum Command {
    /// List the random feed.
    Feed {
        /// Number of pages to load.
        #[clap(short, long, default_value_t = 1)]
        pages: usize,

        /// Like (or unlike) the photo with this ID.
        #[clap(short, long)]
        toggle: Option<PhotoId>,

        /// Show every detail of the photos.
        #[clap(short, long)]
        details: bool,
    },
    /// Search photos.
    Search {
        /// Free-text query.
        query: String,

        /// Show every detail of the photos.
        #[clap(short, long)]
        details: bool,
    },
    /// List the liked photos.
    Favorites {
        /// Unlike (or like again) the photo with this ID.
        #[clap(short, long)]
        toggle: Option<PhotoId>,

        /// Show every detail of the photos.
        #[clap(short, long)]
        details: bool,
    },
}
