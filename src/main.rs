//! multiview - Entry Point

use clap::Parser;
use multiview::codec::{restore_session, shareable_url_for};
use multiview::config::ResolvedConfig;
use multiview::embed::{chat_available, chat_url, player_url};
use multiview::layout::{geometry_for, Cell, GridSpec};
use multiview::model::{AppError, Entry, EntryDraft, LayoutMode};
use multiview::parser::parse_video_url;
use multiview::state::{SessionStore, WelcomeTracker};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, warn};

/// multiview - arrange YouTube and Twitch streams side by side
#[derive(Parser, Debug)]
#[command(name = "multiview")]
#[command(version)]
#[command(about = "Build a multi-stream viewing session and print its layout and shareable link")]
pub struct Args {
    /// YouTube or Twitch URLs to add, in order
    pub urls: Vec<String>,

    /// Layout mode
    #[arg(long, value_parser = ["grid", "focus", "horizontal", "vertical"])]
    pub layout: Option<String>,

    /// Treat YouTube URLs as archived videos instead of live broadcasts
    #[arg(long)]
    pub archive: bool,

    /// Restore a session from a shareable link before adding URLs
    #[arg(long, value_name = "URL")]
    pub from_link: Option<String>,

    /// Page URL the shareable link is built on
    #[arg(long, value_name = "URL")]
    pub page_url: Option<String>,

    /// Swap two entries by 1-based display position (repeatable)
    #[arg(
        long,
        num_args = 2,
        value_names = ["A", "B"],
        action = clap::ArgAction::Append,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub swap: Vec<u32>,

    /// Print a JSON report instead of text
    #[arg(long)]
    pub json: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// One entry as printed, in display order.
#[derive(Debug, Serialize)]
struct EntryReport<'a> {
    position: usize,
    #[serde(flatten)]
    entry: &'a Entry,
    cell: Cell,
    player_url: String,
    chat_url: Option<String>,
}

/// Everything a renderer needs for the current session.
#[derive(Debug, Serialize)]
struct SessionReport<'a> {
    layout: LayoutMode,
    geometry: GridSpec,
    css: String,
    entries: Vec<EntryReport<'a>>,
    share_link: String,
}

fn build_report<'a>(
    store: &'a SessionStore,
    config: &ResolvedConfig,
) -> Result<SessionReport<'a>, AppError> {
    let ordered = store.ordered_entries();
    let geometry = geometry_for(store.layout_mode(), ordered.len());

    let entries = ordered
        .into_iter()
        .enumerate()
        .map(|(index, entry)| EntryReport {
            position: index + 1,
            entry,
            cell: geometry.cell_for(index),
            player_url: player_url(entry, &config.embed_parent),
            chat_url: chat_available(entry)
                .then(|| chat_url(entry.source(), &config.embed_parent)),
        })
        .collect();

    Ok(SessionReport {
        layout: store.layout_mode(),
        css: geometry.to_css(),
        geometry,
        entries,
        share_link: shareable_url_for(&config.page_url, store)?,
    })
}

fn render_text(report: &SessionReport<'_>, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "layout: {} ({})", report.layout, report.geometry)?;
    writeln!(out, "{}", report.css)?;
    if report.entries.is_empty() {
        writeln!(out, "(no entries)")?;
    }
    for item in &report.entries {
        let entry = item.entry;
        let kind = match entry.twitch_kind() {
            Some(kind) => format!("{:?}", kind).to_lowercase(),
            None if entry.is_live() => "live".to_string(),
            None => "archive".to_string(),
        };
        writeln!(
            out,
            "{}. {} {} [{}] column {} row {}",
            item.position,
            entry.platform(),
            entry.source_id(),
            kind,
            item.cell.column,
            item.cell.grid_row_css()
        )?;
        writeln!(out, "   player: {}", item.player_url)?;
        if let Some(chat) = &item.chat_url {
            writeln!(out, "   chat:   {}", chat)?;
        }
    }
    writeln!(out, "share: {}", report.share_link)
}

/// Add each URL in order; unparseable ones are reported and skipped.
fn add_urls(store: &mut SessionStore, urls: &[String], live_hint: bool) -> usize {
    let mut added = 0;
    for url in urls {
        match parse_video_url(url) {
            Some(parsed) => {
                store.add_entry(EntryDraft::from_parsed(parsed, live_hint));
                added += 1;
            }
            None => {
                warn!(url, "Skipping unrecognized video URL");
                eprintln!("multiview: not a YouTube or Twitch URL: {url}");
            }
        }
    }
    added
}

/// Swap entries by 1-based display position; out-of-range pairs are skipped.
fn apply_swaps(store: &mut SessionStore, swaps: &[u32]) {
    for pair in swaps.chunks_exact(2) {
        let ids: Vec<_> = store
            .ordered_entries()
            .into_iter()
            .map(|entry| entry.id().clone())
            .collect();
        let lookup = |position: u32| ids.get((position as usize).saturating_sub(1));

        match (lookup(pair[0]), lookup(pair[1])) {
            (Some(a), Some(b)) => {
                store.reorder(a, b);
            }
            _ => {
                warn!(a = pair[0], b = pair[1], len = ids.len(), "Swap position out of range");
                eprintln!(
                    "multiview: cannot swap {} and {}: session has {} entries",
                    pair[0],
                    pair[1],
                    ids.len()
                );
            }
        }
    }
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = multiview::config::load_config_with_precedence(args.config.clone())?;
        let merged = multiview::config::merge_config(config_file);
        let with_env = multiview::config::apply_env_overrides(merged);

        let layout_override = args.layout.as_deref().map(LayoutMode::parse_lenient);
        let live_override = if args.archive { Some(false) } else { None };

        multiview::config::apply_cli_overrides(
            with_env,
            layout_override,
            args.page_url.clone(),
            live_override,
        )
    };

    multiview::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let mut store = SessionStore::with_layout_mode(config.layout);
    let mut welcome = WelcomeTracker::new();

    if let Some(link) = &args.from_link {
        restore_session(&mut store, link);
    }

    if add_urls(&mut store, &args.urls, config.default_live) > 0 && store.welcome_visible() {
        store.start_session();
    }
    welcome.sync(&mut store);

    apply_swaps(&mut store, &args.swap);

    let report = build_report(&store, &config)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &report)?;
        writeln!(out)?;
    } else {
        render_text(&report, &mut out)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_help_does_not_error() {
        let result = Args::try_parse_from(["multiview", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["multiview", "--version"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["multiview"]);
        assert!(args.urls.is_empty());
        assert_eq!(args.layout, None);
        assert!(!args.archive);
        assert_eq!(args.from_link, None);
        assert_eq!(args.page_url, None);
        assert!(args.swap.is_empty());
        assert!(!args.json);
        assert_eq!(args.config, None);
    }

    #[test]
    fn test_urls_are_positional_in_order() {
        let args = Args::parse_from([
            "multiview",
            "https://youtu.be/abc",
            "https://twitch.tv/streamer",
        ]);
        assert_eq!(
            args.urls,
            vec!["https://youtu.be/abc", "https://twitch.tv/streamer"]
        );
    }

    #[test]
    fn test_layout_accepts_known_modes() {
        for mode in ["grid", "focus", "horizontal", "vertical"] {
            let args = Args::parse_from(["multiview", "--layout", mode]);
            assert_eq!(args.layout.as_deref(), Some(mode));
        }
    }

    #[test]
    fn test_layout_rejects_unknown_mode() {
        let result = Args::try_parse_from(["multiview", "--layout", "mosaic"]);
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().kind(),
            clap::error::ErrorKind::InvalidValue
        );
    }

    #[test]
    fn test_swap_takes_pairs_and_repeats() {
        let args = Args::parse_from(["multiview", "--swap", "1", "2", "--swap", "3", "1"]);
        assert_eq!(args.swap, vec![1, 2, 3, 1]);
    }

    #[test]
    fn test_swap_rejects_zero_position() {
        let result = Args::try_parse_from(["multiview", "--swap", "0", "1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_swap_requires_two_values() {
        let result = Args::try_parse_from(["multiview", "--swap", "1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_flags_and_paths() {
        let args = Args::parse_from([
            "multiview",
            "--archive",
            "--json",
            "--from-link",
            "http://localhost:3000/?v=yt:a:L",
            "--page-url",
            "https://share.example/",
            "--config",
            "/tmp/multiview.toml",
        ]);
        assert!(args.archive);
        assert!(args.json);
        assert_eq!(
            args.from_link.as_deref(),
            Some("http://localhost:3000/?v=yt:a:L")
        );
        assert_eq!(args.page_url.as_deref(), Some("https://share.example/"));
        assert_eq!(args.config, Some(PathBuf::from("/tmp/multiview.toml")));
    }

    fn test_config() -> ResolvedConfig {
        ResolvedConfig {
            page_url: "http://localhost:3000/".to_string(),
            embed_parent: "localhost".to_string(),
            ..ResolvedConfig::default()
        }
    }

    #[test]
    fn add_urls_skips_unrecognized() {
        let mut store = SessionStore::new();
        let urls = vec![
            "https://www.youtube.com/watch?v=abc123".to_string(),
            "https://vimeo.com/12345".to_string(),
            "https://www.twitch.tv/videos/42".to_string(),
        ];
        assert_eq!(add_urls(&mut store, &urls, true), 2);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn apply_swaps_by_position_and_ignores_out_of_range() {
        let mut store = SessionStore::new();
        let urls = vec![
            "https://youtu.be/a".to_string(),
            "https://youtu.be/b".to_string(),
        ];
        add_urls(&mut store, &urls, true);

        apply_swaps(&mut store, &[1, 2, 1, 9]);

        let order: Vec<_> = store
            .ordered_entries()
            .iter()
            .map(|e| e.source_id().as_str().to_string())
            .collect();
        assert_eq!(order, vec!["b", "a"]);
    }

    #[test]
    fn report_lists_entries_in_display_order_with_links() {
        let mut store = SessionStore::with_layout_mode(LayoutMode::Focus);
        let urls = vec![
            "https://www.youtube.com/live/abc123".to_string(),
            "https://www.twitch.tv/videos/42".to_string(),
        ];
        add_urls(&mut store, &urls, true);

        let config = test_config();
        let report = build_report(&store, &config).unwrap();

        assert_eq!(report.entries.len(), 2);
        assert_eq!(report.entries[0].position, 1);
        assert!(report.entries[0].chat_url.is_some());
        assert_eq!(report.entries[1].chat_url, None, "VODs have no chat");
        assert_eq!(report.entries[0].cell.row_span, 1);
        assert_eq!(
            report.share_link,
            "http://localhost:3000/?v=yt%3Aabc123%3AL%2Ctw%3A42%3Av"
        );
    }

    #[test]
    fn json_report_flattens_entry_fields() {
        let mut store = SessionStore::new();
        add_urls(&mut store, &["https://twitch.tv/streamer".to_string()], true);

        let config = test_config();
        let report = build_report(&store, &config).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["layout"], "grid");
        assert_eq!(json["entries"][0]["platform"], "twitch");
        assert_eq!(json["entries"][0]["id"], store.entries()[0].id().as_str());
        assert_eq!(json["entries"][0]["source_id"], "streamer");
        assert_eq!(json["entries"][0]["sub_kind"], "channel");
        assert_eq!(json["entries"][0]["position"], 1);
        assert_eq!(json["entries"][0]["muted"], false);
    }

    #[test]
    fn text_report_for_empty_session() {
        let store = SessionStore::new();
        let config = test_config();
        let report = build_report(&store, &config).unwrap();

        let mut out = Vec::new();
        render_text(&report, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("(no entries)"));
        assert!(text.ends_with("share: http://localhost:3000/\n"));
    }

    #[test]
    fn bad_page_url_is_an_error() {
        let store = SessionStore::new();
        let config = ResolvedConfig {
            page_url: "not a url".to_string(),
            ..test_config()
        };
        assert!(matches!(
            build_report(&store, &config),
            Err(AppError::ShareLink(_))
        ));
    }
}
