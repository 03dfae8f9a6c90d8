//! Tactics board command-line entry point.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tacticboard_core::storage::{BoardStore, FileStorage, StorageError};
use tacticboard_core::{BackgroundImage, BoardConfig, BoardDocument, BoardEvent, Canvas, ConfigError, EventOutcome};
use tacticboard_render::{DisplayListRenderer, RenderContext, Renderer, RendererError};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    ReadScript { path: PathBuf, source: std::io::Error },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Render(#[from] RendererError),
}

#[derive(Parser, Debug)]
#[command(name = "tacticboard", about = "Replay and inspect tactics boards")]
struct Cli {
    /// Board configuration file (JSON).
    #[arg(long, global = true, env = "TACTICBOARD_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run an event script through the editor and print the resulting board.
    Replay {
        script: PathBuf,
        /// Width of the hosting container, in pixels.
        #[arg(long, default_value_t = 1000.0)]
        container_width: f64,
        /// Reference image drawn behind the pitch.
        #[arg(long)]
        background: Option<String>,
        /// Save the final board into this directory.
        #[arg(long)]
        save_dir: Option<PathBuf>,
        /// Board name used when saving.
        #[arg(long)]
        name: Option<String>,
    },
    /// Print a saved board.
    Show { dir: PathBuf, id: String },
    /// List saved boards (defaults to the per-user board directory).
    List { dir: Option<PathBuf> },
}

/// Options for a single replay run.
#[derive(Debug, Default)]
struct ReplayOptions {
    container_width: f64,
    background: Option<String>,
    name: Option<String>,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = match &cli.config {
        Some(path) => BoardConfig::load(path)?,
        None => BoardConfig::default(),
    };

    match cli.command {
        Command::Replay {
            script,
            container_width,
            background,
            save_dir,
            name,
        } => {
            let store = save_dir.map(FileStorage::new).transpose()?;
            let options = ReplayOptions {
                container_width,
                background,
                name,
            };
            let canvas = replay(&script, config, &options, store.as_ref().map(|s| s as &dyn BoardStore))?;
            if let Some(store) = store {
                println!("saved {} to {}", canvas.document.id, store.dir().display());
            }
            Ok(())
        }
        Command::Show { dir, id } => show(&FileStorage::new(dir)?, &id, config),
        Command::List { dir } => {
            let store = match dir {
                Some(dir) => FileStorage::new(dir)?,
                None => FileStorage::default_location()?,
            };
            list(&store)
        }
    }
}

fn load_script(path: &Path) -> Result<Vec<BoardEvent>, CliError> {
    let json = fs::read_to_string(path).map_err(|source| CliError::ReadScript {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&json)?)
}

fn replay(
    script: &Path,
    config: BoardConfig,
    options: &ReplayOptions,
    store: Option<&dyn BoardStore>,
) -> Result<Canvas, CliError> {
    let events = load_script(script)?;
    log::info!("Replaying {} event(s) from {}", events.len(), script.display());

    let mut canvas = Canvas::with_document(BoardDocument::with_config(config));
    if let Some(name) = &options.name {
        canvas.document.name = name.clone();
    }
    canvas.set_background(options.background.clone().map(BackgroundImage::new));
    canvas.resize(options.container_width);

    let outcomes = canvas.handle_events(&events);
    let ignored = outcomes.iter().filter(|o| **o == EventOutcome::Ignored).count();

    let mut renderer = DisplayListRenderer::new();
    renderer.build_scene(&RenderContext::new(&canvas))?;

    println!("{}", canvas.document.to_json()?);
    println!(
        "history: {} snapshot(s), cursor {}, {} object(s), {} event(s) ignored, {} draw command(s)",
        canvas.document.len(),
        canvas.document.cursor(),
        canvas.scene().len(),
        ignored,
        renderer.items().len()
    );

    if let Some(store) = store {
        store.save(&canvas.document.to_saved())?;
    }
    Ok(canvas)
}

fn show(store: &dyn BoardStore, id: &str, config: BoardConfig) -> Result<(), CliError> {
    let document = BoardDocument::from_saved(store.load(id)?, config);

    println!("{} ({})", document.name, document.id);
    if let Some(extent) = document.scene().bounds() {
        println!(
            "  extent ({:.1}, {:.1}) to ({:.1}, {:.1})",
            extent.x0, extent.y0, extent.x1, extent.y1
        );
    }
    for object in document.scene() {
        let p = object.position();
        println!("  {} {} at ({:.1}, {:.1})", object.id(), object.kind_name(), p.x, p.y);
    }
    Ok(())
}

fn list(store: &dyn BoardStore) -> Result<(), CliError> {
    for summary in store.list()? {
        println!("{}  {} ({} objects)", summary.id, summary.name, summary.objects);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tacticboard_core::storage::MemoryStorage;

    const SCRIPT: &str = r#"[
        {"event": "select_tool", "tool": "ball"},
        {"event": "click", "position": {"x": 100.0, "y": 100.0}},
        {"event": "click", "position": {"x": 200.0, "y": 100.0}},
        {"event": "undo"}
    ]"#;

    fn write_script(dir: &Path, json: &str) -> PathBuf {
        let script = dir.join("script.json");
        fs::write(&script, json).unwrap();
        script
    }

    fn options(name: &str) -> ReplayOptions {
        ReplayOptions {
            container_width: 1000.0,
            name: Some(name.to_string()),
            ..ReplayOptions::default()
        }
    }

    #[test]
    fn test_cli_parses_replay() {
        let cli = Cli::parse_from(["tacticboard", "replay", "s.json", "--container-width", "600"]);
        match cli.command {
            Command::Replay { container_width, .. } => assert!((container_width - 600.0).abs() < f64::EPSILON),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_replay_saves_board() {
        let dir = tempfile::tempdir().unwrap();
        let script = write_script(dir.path(), SCRIPT);
        let store = MemoryStorage::new();

        let canvas = replay(&script, BoardConfig::default(), &options("Drill"), Some(&store)).unwrap();

        let boards = store.list().unwrap();
        assert_eq!(boards.len(), 1);
        assert_eq!(boards[0].id, canvas.document.id);
        assert_eq!(boards[0].name, "Drill");
        assert_eq!(boards[0].objects, 1);
        assert!(show(&store, &boards[0].id, BoardConfig::default()).is_ok());
    }

    #[test]
    fn test_replay_into_directory() {
        let dir = tempfile::tempdir().unwrap();
        let script = write_script(dir.path(), SCRIPT);
        let store = FileStorage::new(dir.path().join("boards")).unwrap();

        let canvas = replay(&script, BoardConfig::default(), &options("Drill"), Some(&store)).unwrap();
        let saved = store.load(&canvas.document.id).unwrap();
        assert_eq!(&saved.scene, canvas.scene());
    }

    #[test]
    fn test_replay_with_empty_background_fails() {
        let dir = tempfile::tempdir().unwrap();
        let script = write_script(dir.path(), SCRIPT);
        let options = ReplayOptions {
            container_width: 1000.0,
            background: Some(String::new()),
            ..ReplayOptions::default()
        };
        let result = replay(&script, BoardConfig::default(), &options, None);
        assert!(matches!(result, Err(CliError::Render(_))));
    }

    #[test]
    fn test_show_unknown_board() {
        let store = MemoryStorage::new();
        let result = show(&store, "missing", BoardConfig::default());
        assert!(matches!(result, Err(CliError::Storage(StorageError::NotFound(_)))));
    }

    #[test]
    fn test_missing_script() {
        let err = load_script(Path::new("/nonexistent/script.json")).unwrap_err();
        assert!(matches!(err, CliError::ReadScript { .. }));
    }

    #[test]
    fn test_bad_script() {
        let dir = tempfile::tempdir().unwrap();
        let script = write_script(dir.path(), r#"[{"event": "teleport"}]"#);
        assert!(matches!(load_script(&script), Err(CliError::Json(_))));
    }
}
