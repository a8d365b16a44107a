use crate::probe::Prober;
use indicatif::ProgressBar;
use std::future::Future;
use std::num::NonZeroU64;
use std::sync::atomic::{AtomicBool, Ordering};

/// Drives the candidate stream through the prober, collecting the hosts that
/// answer.
///
/// Control flow is cooperative in exactly two places: after every `interval`
/// candidates the `confirm` future is awaited and asked whether to keep going,
/// and the `cancel` flag is polled between candidates. The confirm callback is
/// async so the caller can race the operator's answer against an interrupt.
/// Both stop paths return whatever was gathered so far; the unconsumed tail of
/// the iterator is never generated. The callback and flag live here instead of
/// signal handling so the loop runs under test without a terminal.
pub async fn run<I, P, F, Fut>(
    candidates: I,
    prober: &P,
    interval: NonZeroU64,
    mut confirm: F,
    cancel: &AtomicBool,
    progress: &ProgressBar,
) -> Vec<String>
where
    I: IntoIterator<Item = String>,
    P: Prober + ?Sized,
    F: FnMut(u64) -> Fut,
    Fut: Future<Output = bool>,
{
    let mut found = Vec::new();
    let mut tested = 0u64;

    for candidate in candidates {
        if cancel.load(Ordering::SeqCst) {
            break;
        }

        if prober.is_reachable(&candidate).await {
            found.push(candidate);
        }
        tested += 1;
        progress.inc(1);

        if tested % interval.get() == 0 {
            if cancel.load(Ordering::SeqCst) {
                break;
            }
            if !confirm(tested).await {
                break;
            }
        }
    }

    found
}
