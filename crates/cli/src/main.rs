use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use meowhash_corelib as core;
use meowhash_corelib::config::{self, HashConfig};
use meowhash_corelib::{Digest, HashWidth, Hasher};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "meowsum", version, about = "Meowhash checksum CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct HashOpts {
    /// Lane width in bits: 128, 256 or 512
    #[arg(short, long)]
    width: Option<HashWidth>,
    /// Seed, decimal or 0x-prefixed hex
    #[arg(short, long, value_parser = config::parse_seed)]
    seed: Option<u64>,
    /// TOML file providing `width` and `seed` defaults
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Hash files (or stdin)
    Hash {
        #[command(flatten)]
        opts: HashOpts,
        /// Emit one JSON object per input
        #[arg(long)]
        json: bool,
        /// Inputs; none or `-` reads stdin
        files: Vec<PathBuf>,
    },
    /// Verify `<hex>  <path>` lines produced by `hash`
    Check {
        #[command(flatten)]
        opts: HashOpts,
        /// Checksum list to verify
        sums: PathBuf,
    },
    /// List supported widths
    Widths {
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct Record<'a> {
    input: &'a str,
    width: HashWidth,
    seed: u64,
    digest: Digest,
}

fn resolve(opts: &HashOpts) -> Result<HashConfig> {
    let base = match &opts.config {
        Some(path) => config::load_config(path)?,
        None => config::load_config_or_default(),
    };
    Ok(base.with_overrides(opts.width, opts.seed))
}

fn hash_reader(cfg: &HashConfig, mut reader: impl Read) -> Result<Digest> {
    let mut hasher = Hasher::with_seed(cfg.width, cfg.seed);
    io::copy(&mut reader, &mut hasher)?;
    Ok(hasher.finish()?)
}

fn hash_path(cfg: &HashConfig, path: &Path) -> Result<Digest> {
    if path == Path::new("-") {
        return hash_reader(cfg, io::stdin().lock());
    }
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    hash_reader(cfg, BufReader::new(file)).with_context(|| format!("hashing {}", path.display()))
}

fn run_hash(cfg: &HashConfig, json: bool, files: &[PathBuf]) -> Result<()> {
    let stdin = [PathBuf::from("-")];
    let inputs = if files.is_empty() { &stdin[..] } else { files };
    for path in inputs {
        let digest = hash_path(cfg, path)?;
        let name = path.to_string_lossy();
        if json {
            let record = Record {
                input: &name,
                width: cfg.width,
                seed: cfg.seed,
                digest,
            };
            println!("{}", serde_json::to_string(&record)?);
        } else {
            println!("{digest}  {name}");
        }
    }
    Ok(())
}

fn parse_sum_line(line: &str) -> Option<(&str, &str)> {
    let (hex, path) = line.split_once(char::is_whitespace)?;
    let path = path.trim_start_matches([' ', '*']);
    if hex.is_empty() || path.is_empty() {
        return None;
    }
    Some((hex, path))
}

fn run_check(cfg: &HashConfig, sums: &Path) -> Result<u32> {
    let listing =
        fs::read_to_string(sums).with_context(|| format!("reading {}", sums.display()))?;
    let mut failures = 0u32;
    for (lineno, line) in listing.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let (expected, path) = parse_sum_line(line)
            .ok_or_else(|| anyhow!("{}:{}: malformed checksum line", sums.display(), lineno + 1))?;
        let digest = match hash_path(cfg, Path::new(path)) {
            Ok(digest) => digest,
            Err(e) => {
                log::warn!("{e:#}");
                println!("{path}: FAILED open or read");
                failures += 1;
                continue;
            }
        };
        if digest.to_hex().eq_ignore_ascii_case(expected) {
            println!("{path}: OK");
        } else {
            log::debug!("{path}: expected {expected}, computed {digest}");
            println!("{path}: FAILED");
            failures += 1;
        }
    }
    Ok(failures)
}

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Hash { opts, json, files }) => {
            let cfg = resolve(&opts)?;
            run_hash(&cfg, json, &files)?;
        }
        Some(Commands::Check { opts, sums }) => {
            let cfg = resolve(&opts)?;
            let failures = run_check(&cfg, &sums)?;
            if failures > 0 {
                eprintln!("meowsum: WARNING: {failures} computed checksum(s) did NOT match");
                return Ok(ExitCode::from(1));
            }
        }
        Some(Commands::Widths { json }) => {
            let widths = core::list_widths();
            if json {
                println!("{}", serde_json::to_string_pretty(widths)?);
            } else {
                for w in widths {
                    println!(
                        "{}  lanes={} digest={}B block={}B",
                        w.bits, w.lanes, w.digest_size, w.block_size
                    );
                }
            }
        }
        None => {
            println!("meowsum {} ready", core::version());
            println!("Try: `meowsum hash FILE` or `meowsum widths`");
        }
    }
    Ok(ExitCode::SUCCESS)
}
