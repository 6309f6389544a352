//! chess-cli - pseudo-legal move listing and PGN game sampling.

use anyhow::{bail, Context};
use chess_cli::config::CliConfig;
use chess_cli::output::{render_json, render_text};
use chess_cli::pgn::write_pgn;
use chess_cli::sample::sample_games;
use chess_cli::walk::find_game_files;
use chess_core::{Board, CandidateMove, Coord, Side, STARTPOS_FEN};
use chess_movegen::{moves_at, side_moves};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "chess-cli")]
#[command(about = "Pseudo-legal move generation and PGN sampling tools")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, default_value = CliConfig::DEFAULT_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List pseudo-legal moves on a position
    Moves {
        /// Position in FEN (full or placement only)
        #[arg(long, default_value = STARTPOS_FEN)]
        fen: String,
        /// Only list moves of the piece on this square (e.g. "e2")
        #[arg(long)]
        square: Option<String>,
        /// Side whose moves are listed when no square is given
        #[arg(long, default_value = "white")]
        side: Side,
        /// Print JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
    /// Randomly sample games from a directory of PGN files
    Sample {
        /// Directory searched recursively for game files
        #[arg(long)]
        dir: Option<PathBuf>,
        /// Maximum number of games to keep
        #[arg(short = 'n', long)]
        count: Option<usize>,
        /// Seed for reproducible samples
        #[arg(long)]
        seed: Option<u64>,
        /// Write the sampled games to this PGN file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = CliConfig::load(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;

    match cli.command {
        Commands::Moves {
            fen,
            square,
            side,
            json,
        } => {
            let board = Board::from_fen(&fen).context("parsing --fen")?;
            let moves = list_moves(&board, square.as_deref(), side)?;
            tracing::debug!(count = moves.len(), "generated moves");

            let rendered = if json {
                render_json(&moves)?
            } else {
                render_text(&moves)
            };
            print!("{}", rendered);
        }
        Commands::Sample {
            dir,
            count,
            seed,
            output,
        } => {
            let settings = config.sampler;
            let dir = dir.unwrap_or(settings.pgn_dir);
            let count = count.unwrap_or(settings.sample_size);
            let mut rng = match seed.or(settings.seed) {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };

            let files = find_game_files(&dir, &settings.extension)
                .with_context(|| format!("searching {}", dir.display()))?;
            tracing::info!("Found {} game files under {}", files.len(), dir.display());

            let sample = sample_games(&files, count, &mut rng);
            tracing::info!(
                "Sampled {} of {} games from {} files ({} skipped)",
                sample.games.len(),
                sample.games_seen,
                sample.files_read,
                sample.files_skipped.len()
            );

            match output {
                Some(path) => {
                    let file = std::fs::File::create(&path)
                        .with_context(|| format!("creating {}", path.display()))?;
                    let mut writer = std::io::BufWriter::new(file);
                    write_pgn(&mut writer, &sample.games)?;
                    writer.flush()?;
                    tracing::info!("Wrote {}", path.display());
                }
                None => println!("{}", sample.games.len()),
            }
        }
    }

    Ok(())
}

fn list_moves(board: &Board, square: Option<&str>, side: Side) -> anyhow::Result<Vec<CandidateMove>> {
    let Some(square) = square else {
        return Ok(side_moves(board, side));
    };
    let Some(coord) = Coord::from_algebraic(square) else {
        bail!("invalid square '{}'", square);
    };
    match moves_at(board, coord) {
        Some(moves) => Ok(moves.as_slice().to_vec()),
        None => bail!("no piece on {}", square),
    }
}
