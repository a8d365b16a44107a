use anyhow::Result;
use clap::Parser;
use indicatif::ProgressBar;
use std::num::NonZeroU64;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

mod permute;
mod probe;
mod report;
mod run;
mod table;

use permute::Permutations;
use probe::PingProber;
use table::SubstitutionTable;

#[derive(Parser)]
#[command(name = "pingsquat")]
#[command(about = "Permutes a hostname through a character substitution table and pings each variant")]
struct Cli {
    /// Hostname to generate permutations for
    #[arg(short = 'u', long)]
    url: String,

    /// Number of permutations to test before asking to continue
    #[arg(short = 'N')]
    n: NonZeroU64,

    /// File to save found hosts to
    #[arg(short = 'o', long = "output_file")]
    output_file: Option<String>,

    /// File containing the character substitution rules
    #[arg(short = 'i', long = "file_path", default_value = "chars.txt")]
    file_path: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let table = SubstitutionTable::load(&cli.file_path)?;
    let permutations = Permutations::new(&cli.url, &table);
    let output_file = cli
        .output_file
        .unwrap_or_else(|| default_output_file(&cli.url));

    // Ctrl-C flips the flag; the run loop notices between candidates and
    // falls through to reporting with everything gathered so far.
    let cancel = Arc::new(AtomicBool::new(false));
    let watcher_flag = Arc::clone(&cancel);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            eprintln!("Process interrupted by user");
            watcher_flag.store(true, Ordering::SeqCst);
        }
    });

    let progress = match permutations.total() {
        Some(total) => ProgressBar::new(total),
        None => ProgressBar::new_spinner(),
    };

    let found = run::run(
        permutations,
        &PingProber,
        cli.n,
        ask_to_continue,
        &cancel,
        &progress,
    )
    .await;
    progress.finish_and_clear();

    println!("Number of hosts found: {}", found.len());
    report::write_hosts(&output_file, &found)?;

    Ok(())
}

fn default_output_file(hostname: &str) -> String {
    format!("{}_tested.txt", hostname)
}

/// Checkpoint prompt. Anything but an affirmative answer stops the run, and
/// so does Ctrl-C while the prompt is waiting: the stdin read is raced against
/// the interrupt signal, with interruption counting as "no". The read runs on
/// a plain thread rather than the blocking pool so that, when it loses the
/// race, the abandoned reader cannot hold up runtime shutdown.
async fn ask_to_continue(tested: u64) -> bool {
    println!(
        "{} permutations tested. Do you want to continue? (yes/no)",
        tested
    );
    let (tx, rx) = tokio::sync::oneshot::channel();
    std::thread::spawn(move || {
        let mut answer = String::new();
        let read = std::io::stdin().read_line(&mut answer);
        let _ = tx.send(read.map(|_| answer));
    });
    tokio::select! {
        answer = rx => matches!(answer, Ok(Ok(line)) if is_affirmative(&line)),
        _ = tokio::signal::ctrl_c() => false,
    }
}

fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("yes")
}
