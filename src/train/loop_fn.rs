use std::sync::atomic::Ordering;
use std::time::Instant;

use crate::error::EngineError;
use crate::network::network::Network;
use crate::train::progress::ProgressSink;
use crate::train::train_config::TrainConfig;
use crate::train::window_stats::WindowStats;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `network` towards its current target, one window at a time.
///
/// For every window: forward pass, then while `|error| > config.tolerance`
/// run a backward pass followed by another forward pass. A status line
/// `"Training Result <j> : <output>"` goes to `sink` after every forward pass.
/// The cursor moves to the next window once the current one has converged.
///
/// The caller sets the target and resets the cursor before calling.
///
/// # Termination
/// With `config.max_iterations == None` a window whose target is out of reach
/// keeps this call spinning forever. With a cap, the call fails with
/// `ConvergenceTimeout` for the first window that exhausts it; windows already
/// trained keep their updates.
///
/// A NaN output (from a NaN in the window, for instance) fails the window with
/// `NonFiniteOutput` rather than counting as converged.
pub fn train_loop<S: ProgressSink + ?Sized>(
    network: &mut Network,
    config: &TrainConfig,
    sink: &mut S,
) -> Result<Vec<WindowStats>, EngineError> {
    let total_start = Instant::now();
    let windows = network.window_count();
    let mut stats = Vec::with_capacity(windows);

    for j in 0..windows {
        stats.push(train_window(network, j, config, sink)?);
        network.advance_cursor();
    }

    tracing::info!(
        windows,
        iterations = stats.iter().map(|s| s.iterations).sum::<usize>(),
        elapsed_ms = total_start.elapsed().as_millis() as u64,
        "training finished"
    );

    Ok(stats)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

fn train_window<S: ProgressSink + ?Sized>(
    network: &mut Network,
    window: usize,
    config: &TrainConfig,
    sink: &mut S,
) -> Result<WindowStats, EngineError> {
    let t_start = Instant::now();
    let start = network.cursor();

    let fresh_inputs = network.feed_forward();
    report(sink, window, network.output());

    let mut iterations = 0;
    let mut error = network.calc_error();

    loop {
        if !error.is_finite() {
            tracing::warn!(window, iterations, "output is not a finite number");
            return Err(EngineError::NonFiniteOutput { window, output: network.output() });
        }
        if error.abs() <= config.tolerance {
            break;
        }
        if let Some(max) = config.max_iterations {
            if iterations >= max {
                tracing::warn!(window, iterations, error, "window did not converge");
                return Err(EngineError::ConvergenceTimeout { window, iterations, error });
            }
        }
        if let Some(ref flag) = config.stop_flag {
            if flag.load(Ordering::Relaxed) {
                return Err(EngineError::Stopped { window });
            }
        }

        network.feed_backwards();
        network.feed_forward();
        iterations += 1;
        report(sink, window, network.output());

        error = network.calc_error();
        tracing::trace!(window, iterations, error, "backward pass");
    }

    tracing::debug!(window, start, iterations, error, "window converged");

    Ok(WindowStats {
        window,
        start,
        fresh_inputs,
        iterations,
        output: network.output(),
        error,
        elapsed_ms: t_start.elapsed().as_millis() as u64,
    })
}

fn report<S: ProgressSink + ?Sized>(sink: &mut S, window: usize, output: f64) {
    sink.display(&format!("Training Result {window} : {output}"));
}
