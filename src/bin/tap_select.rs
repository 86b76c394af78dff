//! Terminal front end for the selection surface.
//!
//! Reads one command per line from stdin and repaints the surface whenever
//! its state changed. Notices are printed as `! <message>`.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use tap_select::{
    Point, SelectionSurface, ShuffleKind, SurfaceConfig, SurfaceView, TapOutcome, Theme,
};

const HELP: &str = "\
commands:
  tap X Y      tap the surface at (X, Y)
  play         pick players among the markers
  reset        clear markers and selection
  menu         open or close the player-count sheet
  players N    set the player count
  show         repaint the surface
  help         this text
  quit         leave";

#[derive(Parser, Debug)]
#[command(name = "tap-select", about = "Tap to place markers, then pick who plays")]
struct Args {
    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,
    /// RNG seed for reproducible draws
    #[arg(long)]
    seed: Option<u64>,
    /// Starting player count
    #[arg(long)]
    players: Option<u8>,
    /// Largest selectable player count (5 or 6)
    #[arg(long)]
    max_players: Option<u8>,
    /// Use the coin-flip insertion shuffle
    #[arg(long)]
    legacy_shuffle: bool,
    /// Label markers with an icon instead of their number
    #[arg(long)]
    icons: bool,
    /// Width of the painted frame in characters
    #[arg(long, default_value_t = 40)]
    cols: usize,
    /// Height of the painted frame in lines
    #[arg(long, default_value_t = 12)]
    rows: usize,
}

impl Args {
    fn surface_config(&self) -> Result<SurfaceConfig> {
        let mut config = match &self.config {
            Some(path) => SurfaceConfig::load(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => SurfaceConfig::default(),
        };

        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(max) = self.max_players {
            config = config.with_max_players(max);
        }
        if let Some(players) = self.players {
            config = config.with_initial_players(players);
        }
        if self.legacy_shuffle {
            config = config.with_shuffle(ShuffleKind::CoinFlip);
        }
        if self.icons {
            config = config.with_theme(Theme::Icon);
        }
        Ok(config)
    }
}

#[derive(Debug, PartialEq)]
enum Command {
    Tap(Point),
    Play,
    Reset,
    Menu,
    Players(u8),
    Show,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(None);
    };

    let command = match head {
        "tap" => {
            let x = parse_number(words.next(), "X")?;
            let y = parse_number(words.next(), "Y")?;
            Command::Tap(Point::new(x, y))
        }
        "play" => Command::Play,
        "reset" => Command::Reset,
        "menu" => Command::Menu,
        "players" => {
            let n = words
                .next()
                .ok_or("usage: players N")?
                .parse::<u8>()
                .map_err(|_| "players expects a whole number".to_string())?;
            Command::Players(n)
        }
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(format!("unknown command `{}` (try `help`)", other)),
    };
    Ok(Some(command))
}

fn parse_number(word: Option<&str>, name: &str) -> Result<f32, String> {
    word.ok_or(format!("usage: tap X Y (missing {})", name))?
        .parse()
        .map_err(|_| format!("{} must be a number", name))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut surface = SelectionSurface::new(args.surface_config()?)?;

    let mut out = io::stdout().lock();
    writeln!(out, "{}", HELP)?;
    run(&mut surface, io::stdin().lock(), &mut out, args.cols, args.rows)
}

/// Drive `surface` from line commands on `input`, painting to `out` at
/// start and whenever the revision moves.
fn run<R: BufRead, W: Write>(
    surface: &mut SelectionSurface,
    input: R,
    out: &mut W,
    cols: usize,
    rows: usize,
) -> Result<()> {
    write!(out, "{}", SurfaceView::of(surface).paint(cols, rows))?;
    out.flush()?;
    let mut painted = Some(surface.revision());

    for line in input.lines() {
        let line = line?;
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                writeln!(out, "? {}", message)?;
                continue;
            }
        };
        debug!(?command, "command");

        let notice = match command {
            Command::Tap(point) => match surface.tap(point) {
                TapOutcome::Rejected(err) => Some(err.to_string()),
                _ => None,
            },
            Command::Play => surface.play().err().map(|e| e.to_string()),
            Command::Reset => {
                surface.reset();
                None
            }
            Command::Menu => {
                surface.toggle_sheet();
                None
            }
            Command::Players(n) => surface.set_player_count(n).err().map(|e| e.to_string()),
            Command::Show => {
                painted = None;
                None
            }
            Command::Help => {
                writeln!(out, "{}", HELP)?;
                None
            }
            Command::Quit => break,
        };

        if let Some(message) = notice {
            writeln!(out, "! {}", message)?;
        }
        if painted != Some(surface.revision()) {
            write!(out, "{}", SurfaceView::of(surface).paint(cols, rows))?;
            painted = Some(surface.revision());
        }
        out.flush()?;
    }

    Ok(())
}
