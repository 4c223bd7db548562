//! Neo entrypoint.
use anyhow::{Context, Result};
use clap::Parser;
use core_actions::handle_key;
use core_actions::io_ops::open_file;
use core_config::load_from;
use core_events::Event;
use core_input::{CrosstermEventSource, EventSource};
use core_render::timing;
use core_state::{EditSession, ScreenSize};
use core_terminal::{StdoutTerminal, TerminalBackend};
use core_text::LineBuffer;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Once;
use std::time::Duration;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;

/// Poll interval; an idle tick redraws so expired messages disappear.
const TICK: Duration = Duration::from_secs(1);
const LOG_FILE: &str = "neo.log";
const HELP_MESSAGE: &str = "HELP: Ctrl-S = save | Ctrl-Q = quit | Ctrl-F = find";

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "neo", version, about = "Neo text editor")]
struct Args {
    /// File to open. A path that does not exist yet opens an empty buffer
    /// bound to that name.
    pub path: Option<PathBuf>,
    /// Configuration file (overrides discovery of `neo.toml`).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
}

fn configure_logging() -> Option<WorkerGuard> {
    let log_dir = Path::new(".");
    let log_path = log_dir.join(LOG_FILE);
    if log_path.exists() {
        let _ = std::fs::remove_file(&log_path);
    }
    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
    let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(nb_writer)
        .with_ansi(false)
        .try_init()
        .ok()
        .map(|_| guard)
}

fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let default_panic = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            tracing::error!(target: "runtime.panic", ?info, "panic");
            default_panic(info);
        }));
    });
}

/// Buffer for the startup path: empty when there is none or it does not exist.
fn load_buffer(path: Option<&Path>, tab_stop: usize) -> Result<LineBuffer> {
    let Some(path) = path else {
        return Ok(LineBuffer::new(tab_stop));
    };
    match open_file(path, tab_stop) {
        Ok(buffer) => Ok(buffer),
        Err(e) if e.is_not_found() => {
            info!(target: "runtime.startup", path = %path.display(), "new_file");
            Ok(LineBuffer::new(tab_stop))
        }
        Err(e) => Err(e.into()),
    }
}

/// Build the session for `args` on a terminal of `cols` x `rows` cells.
fn bootstrap(args: &Args, cols: u16, rows: u16) -> Result<EditSession> {
    let resolved = load_from(args.config.clone())?.resolve();
    let buffer = load_buffer(args.path.as_deref(), resolved.tab_stop)?;
    let mut session = EditSession::new(buffer, ScreenSize::from_terminal(cols, rows))
        .with_message_timeout(resolved.message_timeout);
    if let Some(path) = &args.path {
        session.set_file_name(path);
    }
    session.set_message(HELP_MESSAGE);
    info!(
        target: "runtime.startup",
        rows = session.buffer().len(),
        tab_stop = resolved.tab_stop,
        language = session.buffer().syntax().map(|d| d.name),
        config_override = args.config.is_some(),
        "bootstrap_complete"
    );
    Ok(session)
}

/// Single-threaded editor loop: draw, wait for one event, apply it.
struct EditorRuntime<S: EventSource> {
    session: EditSession,
    source: S,
}

impl<S: EventSource> EditorRuntime<S> {
    fn new(session: EditSession, source: S) -> Self {
        Self { session, source }
    }

    fn run<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let mut needs_render = true;
        loop {
            if needs_render {
                core_render::render(&mut self.session, out).context("draw frame")?;
            }
            needs_render = match self.source.next_event(TICK)? {
                Event::Key(key) => {
                    let result = handle_key(&key, &mut self.session)?;
                    if result.quit {
                        info!(
                            target: "runtime",
                            frames = timing::frames_total(),
                            last_frame_ns = timing::last_frame_ns(),
                            last_frame_bytes = timing::last_frame_bytes(),
                            "shutdown"
                        );
                        return Ok(());
                    }
                    result.dirty
                }
                Event::Resize { cols, rows } => {
                    self.session.resize(cols, rows);
                    true
                }
                Event::Tick => true,
            };
        }
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    let _log_guard = configure_logging();
    install_panic_hook();
    info!(target: "runtime", "startup");

    let mut terminal = StdoutTerminal::new();
    let (cols, rows) = terminal.size()?;
    let session = bootstrap(&args, cols, rows)?;
    terminal.set_title("neo")?;

    let screen = terminal.into_raw_screen()?;
    let mut runtime = EditorRuntime::new(session, CrosstermEventSource::new());
    let mut stdout = std::io::stdout();
    runtime.run(&mut stdout)?;
    screen.release()
}

fn main() {
    if let Err(err) = run() {
        eprintln!("neo: {err:#}");
        std::process::exit(1);
    }
}
