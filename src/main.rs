use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};

use pangram::letters::ALPHABET_LEN;
use pangram::{
    normalize, search, AnagramIndex, CandidateOrder, Cancel, Combination, FanOut, Report,
    SearchConfig, SearchMode, WordList,
};

/// Find letter-disjoint word combinations covering at least THRESHOLD letters.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Minimum number of distinct letters a combination must cover
    threshold: u32,

    /// Word list, one lowercase word per line
    dict: PathBuf,

    /// Worker threads for the parallel search (0 = available parallelism)
    #[arg(short, long, default_value_t = 0)]
    jobs: usize,

    /// Run the single-threaded search
    #[arg(long)]
    sequential: bool,

    /// Try words containing q or z first
    #[arg(long)]
    rare_first: bool,

    /// Only report combinations whose first word has a q and whose first
    /// two words have a z. Faster, but misses everything else
    #[arg(long)]
    forced_rare: bool,

    /// Stop after this many combinations
    #[arg(short = 'n', long)]
    limit: Option<usize>,

    /// Print every word tuple on its own line instead of grouping anagrams
    #[arg(long)]
    expand: bool,
}

fn main() -> ExitCode {
    let debug_enabled = std::env::var("PANGRAM_DEBUG").is_ok();
    pangram::log::init_logger(debug_enabled);

    if let Err(e) = try_main(Cli::parse()) {
        eprintln!("Error: {e:#}");
        eprintln!("{}", Cli::command().render_usage());
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn try_main(cli: Cli) -> Result<()> {
    log::info!("Loading word list...");
    let word_list = WordList::load_from_path(&cli.dict)
        .with_context(|| format!("invalid word list {}", cli.dict.display()))?;

    log::info!("Building anagrams list...");
    let singles = normalize(word_list.words.iter());
    let index = AnagramIndex::build(&singles);
    let order = if cli.rare_first {
        CandidateOrder::RareFirst
    } else {
        CandidateOrder::FirstSeen
    };
    let candidates = index.candidates(order);
    log::info!("- {} list length", word_list.len());
    log::info!("- {} with unique letters", singles.len());
    log::info!("- {} anagrams", index.len());

    let mode = if cli.forced_rare {
        log::warn!("forced q/z mode: combinations not starting with q then z words are skipped");
        SearchMode::FORCED_QZ
    } else {
        SearchMode::Exhaustive
    };
    let config = SearchConfig::new(cli.threshold).with_mode(mode);
    if config.threshold > ALPHABET_LEN {
        log::warn!("threshold {} exceeds the alphabet; nothing can match", config.threshold);
    }

    let report = Report::new(&index);
    let cancel = Cancel::new();
    let mut printed = 0usize;
    let sink = |combination: Combination| {
        if cli.limit.is_some_and(|n| printed >= n) {
            cancel.cancel();
            return;
        }
        if cli.expand {
            for line in report.expanded_lines(&combination) {
                println!("{line}");
            }
        } else {
            println!("{}", report.line(&combination));
        }
        printed += 1;
        if cli.limit.is_some_and(|n| printed >= n) {
            cancel.cancel();
        }
    };

    log::info!("Finding pangrams...");
    let t_search = Instant::now();
    let stats = if cli.sequential {
        search(&candidates, &config, &cancel, sink)
    } else {
        let fan_out = FanOut::new(cli.jobs)?;
        log::debug!("searching on {} threads", fan_out.threads());
        fan_out.run(&candidates, &config, &cancel, sink)?
    };

    log::info!(
        "{} combinations printed; {} nodes, {} leaves visited in {:.3}s",
        printed,
        stats.nodes,
        stats.leaves,
        t_search.elapsed().as_secs_f64()
    );
    if cancel.is_cancelled() {
        log::info!("stopped early after reaching the limit");
    }
    Ok(())
}
