//! Duelist CLI
//!
//! Duel options against each other until one is left, and keep a history
//! of past decisions.

use anyhow::{bail, Context, Result};
use duelist::{
    advice_or_fallback, history_report, journey_report, suggest_or_default, ArenaConfig,
    DecisionStore, DuelRunner, DuelSession, FallbackAdvisor, FixedSuggester, JsonFileStore,
    RandomJudge, RunnerConfig, DEFAULT_CONFIG_FILE,
};
use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Duelist - settle a dilemma one duel at a time");
    println!();
    println!("Usage:");
    println!("  duelist duel <title> <option>...          Duel options interactively");
    println!("  duelist simulate <option>... [--seed N]   Let a random judge decide");
    println!("  duelist resume <id>                       Continue a paused duel");
    println!("  duelist history [--search <text>]         List saved decisions");
    println!("  duelist show <id>                         Show a decision's journey");
    println!("  duelist reflect <id> <text>...            Attach a reflection");
    println!("  duelist pin <id>                          Pin or unpin a decision");
    println!();
    println!("Options (before the command):");
    println!("  --config <path>   Config file (default: {})", DEFAULT_CONFIG_FILE);
    println!("  --verbose, -v     Debug logging");
    println!();
    println!("During a duel:");
    println!("  1 / 2        keep the left / right option");
    println!("  r <option>   revive an eliminated option");
    println!("  g            show the graveyard");
    println!("  a            ask for advice on the current pair");
    println!("  q            pause the duel (resume it later)");
    println!();
    println!("Examples:");
    println!("  duelist duel \"Where to travel\" Kyoto Lisbon Oslo");
    println!("  duelist simulate Tea Coffee Juice --seed 7");
    println!("  duelist history --search travel");
}

/// Flags given before the command
struct GlobalArgs {
    config_path: PathBuf,
    verbose: bool,
    rest: Vec<String>,
}

/// Everything from the first non-flag argument on belongs to the command,
/// so option labels like `-v` reach it untouched.
fn parse_global(args: &[String]) -> Result<GlobalArgs> {
    let mut config_path = PathBuf::from(DEFAULT_CONFIG_FILE);
    let mut verbose = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                let Some(path) = args.get(i + 1) else {
                    bail!("--config requires a path");
                };
                config_path = PathBuf::from(path);
                i += 1;
            }
            "--verbose" | "-v" => verbose = true,
            _ => break,
        }
        i += 1;
    }

    Ok(GlobalArgs {
        config_path,
        verbose,
        rest: args[i..].to_vec(),
    })
}

fn init_logging(config: &ArenaConfig, verbose: bool) {
    let level = if verbose { "debug" } else { config.log_level.as_str() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .init();
}

fn prompt(text: &str) -> Result<()> {
    print!("{}", text);
    io::stdout().flush().context("failed to flush stdout")
}

/// How an interactive duel ended
enum DuelOutcome {
    Settled,
    Paused,
}

fn play(session: &mut DuelSession) -> Result<DuelOutcome> {
    println!("=== Duel: {} ===", session.title());
    println!("Duels to go: {}", session.remaining_duels());
    println!();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while let Some((left, right)) = session.pair() {
        let (left, right) = (left.clone(), right.clone());
        println!("[1] {}   vs   [2] {}", left, right);
        prompt("> ")?;

        let Some(line) = lines.next() else {
            println!();
            return Ok(DuelOutcome::Paused);
        };
        let line = line.context("failed to read from stdin")?;
        let line = line.trim();

        let result = match line {
            "1" => session.pick(left.as_str()),
            "2" => session.pick(right.as_str()),
            "g" => {
                if session.graveyard().is_empty() {
                    println!("The graveyard is empty.");
                } else {
                    for fallen in session.graveyard() {
                        println!("  - {}", fallen);
                    }
                }
                Ok(())
            }
            "a" => {
                let advice = advice_or_fallback(&FallbackAdvisor, &left, &right, session.title());
                println!("{}", advice.critique);
                println!("-> {}", advice.recommendation);
                Ok(())
            }
            "q" => return Ok(DuelOutcome::Paused),
            _ => match line.strip_prefix("r ") {
                Some(label) => session.revive(label.trim()),
                None => {
                    eprintln!("Unknown command: {}", line);
                    Ok(())
                }
            },
        };

        if let Err(e) = result {
            eprintln!("Error: {}", e);
        }
    }

    Ok(DuelOutcome::Settled)
}

/// Save the session whether it finished or not, so a paused duel can be
/// resumed.
fn save_session(session: &DuelSession, outcome: DuelOutcome, config: &ArenaConfig) -> Result<()> {
    let decision = session.snapshot();
    let mut store = JsonFileStore::new(&config.store_path);
    store.save(decision.clone())?;

    match outcome {
        DuelOutcome::Settled => {
            println!();
            print!("{}", journey_report(&decision));
            println!("Saved as {}", decision.id());
        }
        DuelOutcome::Paused => {
            println!(
                "Duel paused with {} duels to go.",
                session.remaining_duels()
            );
            println!("Resume with: duelist resume {}", decision.id());
        }
    }
    Ok(())
}

fn run_duel(args: &[String], config: &ArenaConfig) -> Result<()> {
    if args.is_empty() {
        eprintln!("Error: duel requires a title");
        print_usage();
        return Ok(());
    }

    let title = &args[0];
    let suggester = FixedSuggester::new(args[1..].iter().cloned());
    let options = suggest_or_default(&suggester, title, &config.default_options);
    let mut session = DuelSession::start(config.engine(), title, "", options)?;

    let outcome = play(&mut session)?;
    save_session(&session, outcome, config)
}

fn resume_duel(args: &[String], config: &ArenaConfig) -> Result<()> {
    let Some(id) = args.first() else {
        bail!("resume requires a decision id");
    };
    let store = JsonFileStore::new(&config.store_path);
    let stored = store
        .get(id)?
        .with_context(|| format!("no decision with id {}", id))?;
    if !stored.is_pending() {
        bail!("decision {} is already settled; see `duelist show {}`", id, id);
    }

    let mut session = DuelSession::resume(config.engine(), &stored)
        .with_context(|| format!("failed to resume {}", id))?;
    let outcome = play(&mut session)?;
    save_session(&session, outcome, config)
}

fn run_simulate(args: &[String], config: &ArenaConfig) -> Result<()> {
    let mut seed: Option<u64> = None;
    let mut labels = Vec::new();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" | "-s" => {
                if i + 1 < args.len() {
                    let value = &args[i + 1];
                    seed = Some(value.parse().with_context(|| format!("invalid seed: {}", value))?);
                    i += 1;
                }
            }
            other => labels.push(other.to_string()),
        }
        i += 1;
    }

    let suggester = FixedSuggester::new(labels);
    let options = suggest_or_default(&suggester, "simulation", &config.default_options);
    let mut session = DuelSession::start(config.engine(), "Simulation", "", options)?;

    let mut judge = match seed {
        Some(seed) => RandomJudge::seeded(seed),
        None => RandomJudge::new(),
    };

    let runner = DuelRunner::new(RunnerConfig { verbose: true });
    let saved = runner.run(&mut session, &mut judge)?;

    println!();
    print!("{}", journey_report(&saved));
    Ok(())
}

fn show_history(args: &[String], config: &ArenaConfig) -> Result<()> {
    let mut query: Option<&str> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--search" | "-s" => {
                let Some(value) = args.get(i + 1) else {
                    bail!("--search requires some text");
                };
                query = Some(value.as_str());
                i += 1;
            }
            other => bail!("unexpected argument for history: {}", other),
        }
        i += 1;
    }

    let store = JsonFileStore::new(&config.store_path);
    let decisions = match query {
        Some(query) => store.search(query, config.history_limit)?,
        None => store.list(config.history_limit)?,
    };
    if decisions.is_empty() {
        match query {
            Some(query) => println!("No decisions match \"{}\".", query),
            None => println!("No decisions yet. Run a duel first!"),
        }
        return Ok(());
    }
    print!("{}", history_report(&decisions));
    Ok(())
}

fn show_decision(args: &[String], config: &ArenaConfig) -> Result<()> {
    let Some(id) = args.first() else {
        bail!("show requires a decision id");
    };
    let store = JsonFileStore::new(&config.store_path);
    let decision = store
        .get(id)?
        .with_context(|| format!("no decision with id {}", id))?;
    print!("{}", journey_report(&decision));
    Ok(())
}

fn reflect(args: &[String], config: &ArenaConfig) -> Result<()> {
    if args.len() < 2 {
        bail!("reflect requires a decision id and some text");
    }
    let mut store = JsonFileStore::new(&config.store_path);
    let mut decision = store
        .get(&args[0])?
        .with_context(|| format!("no decision with id {}", args[0]))?;
    decision.set_reflection(&args[1..].join(" "));
    store.update(decision)?;
    println!("Reflection saved.");
    Ok(())
}

fn toggle_pin(args: &[String], config: &ArenaConfig) -> Result<()> {
    let Some(id) = args.first() else {
        bail!("pin requires a decision id");
    };
    let mut store = JsonFileStore::new(&config.store_path);
    let mut decision = store
        .get(id)?
        .with_context(|| format!("no decision with id {}", id))?;
    decision.toggle_pin();
    let pinned = decision.pinned;
    store.update(decision)?;
    println!("{} {}", if pinned { "Pinned" } else { "Unpinned" }, id);
    Ok(())
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let global = parse_global(&args)?;

    let config = ArenaConfig::load(&global.config_path)
        .with_context(|| format!("failed to load {}", global.config_path.display()))?;
    init_logging(&config, global.verbose);

    let Some(command) = global.rest.first() else {
        print_usage();
        return Ok(());
    };
    let rest = &global.rest[1..];

    match command.as_str() {
        "duel" => run_duel(rest, &config),
        "simulate" | "sim" => run_simulate(rest, &config),
        "resume" => resume_duel(rest, &config),
        "history" => show_history(rest, &config),
        "show" => show_decision(rest, &config),
        "reflect" => reflect(rest, &config),
        "pin" => toggle_pin(rest, &config),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            Ok(())
        }
    }
}
