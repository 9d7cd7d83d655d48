use std::sync::Arc;
use std::time::Duration;

use super::*;
use crate::error::{AppError, AppResult};
use crate::http::test_support::{ScriptedClient, Step, close_to, run_paused_test};
use crate::shutdown::shutdown_channel;

fn config(hammers: usize, throws: usize) -> RunConfig {
    RunConfig {
        url: "http://localhost/".to_owned(),
        hammers,
        throws,
        verbose: false,
        request_timeout: Duration::from_secs(30),
        connect_timeout: Duration::from_secs(10),
    }
}

#[test]
fn every_throw_of_every_hammer_is_recorded() -> AppResult<()> {
    run_paused_test(async {
        let client = Arc::new(ScriptedClient::new(vec![Step::Ok(Duration::from_millis(20))]));
        let (shutdown_tx, _) = shutdown_channel();

        let outcome = dispatch(&config(3, 5), Arc::clone(&client), &shutdown_tx).await;

        if outcome.recorded_throws() != 15 || client.calls() != 15 {
            return Err(AppError::validation(format!(
                "Expected 15 throws, recorded {}",
                outcome.recorded_throws()
            )));
        }
        if outcome.successes.len() != 3 || !outcome.failures.is_empty() {
            return Err(AppError::validation("Expected three successful hammers"));
        }
        for result in &outcome.successes {
            if result.throws().len() != 5 {
                return Err(AppError::validation("Each hammer should throw five times"));
            }
        }
        Ok(())
    })
}

#[test]
fn hammers_run_concurrently() -> AppResult<()> {
    run_paused_test(async {
        let client = Arc::new(ScriptedClient::new(vec![Step::Ok(Duration::from_secs(1))]));
        let (shutdown_tx, _) = shutdown_channel();

        let start = tokio::time::Instant::now();
        let outcome = dispatch(&config(4, 2), Arc::clone(&client), &shutdown_tx).await;
        let elapsed = start.elapsed();

        if client.peak_running() != 4 || outcome.peak_in_flight != 4 {
            return Err(AppError::validation(format!(
                "Expected four throws in flight, saw {} (gauge {})",
                client.peak_running(),
                outcome.peak_in_flight
            )));
        }
        // Serial execution would take eight seconds.
        if !close_to(elapsed, Duration::from_secs(2)) {
            return Err(AppError::validation(format!(
                "Unexpected wall time: {:?}",
                elapsed
            )));
        }
        Ok(())
    })
}

#[test]
fn failing_hammers_do_not_stop_the_rest() -> AppResult<()> {
    run_paused_test(async {
        // Hammers issue their single throw in spawn order.
        let client = Arc::new(ScriptedClient::new(vec![
            Step::Ok(Duration::from_millis(10)),
            Step::Refused(Duration::from_millis(10)),
        ]));
        let (shutdown_tx, _) = shutdown_channel();

        let outcome = dispatch(&config(4, 1), Arc::clone(&client), &shutdown_tx).await;

        if outcome.successes.len() != 2 || outcome.failures.len() != 2 {
            return Err(AppError::validation(format!(
                "Expected 2/2 split, got {}/{}",
                outcome.successes.len(),
                outcome.failures.len()
            )));
        }
        if outcome.hammer_count() != 4 || outcome.recorded_throws() != 4 {
            return Err(AppError::validation("Every hammer should be accounted for"));
        }
        if outcome.failed_hammer_ids() != vec![1, 3] {
            return Err(AppError::validation(format!(
                "Unexpected failed ids: {:?}",
                outcome.failed_hammer_ids()
            )));
        }
        if outcome.interrupted() {
            return Err(AppError::validation("Failures are not interruptions"));
        }
        Ok(())
    })
}

#[test]
fn all_hammers_can_fail() -> AppResult<()> {
    run_paused_test(async {
        let client = Arc::new(ScriptedClient::new(vec![Step::Status(
            Duration::from_millis(10),
            500,
        )]));
        let (shutdown_tx, _) = shutdown_channel();

        let outcome = dispatch(&config(3, 2), client, &shutdown_tx).await;

        if !outcome.successes.is_empty() || outcome.failures.len() != 3 {
            return Err(AppError::validation("Expected every hammer to fail"));
        }
        if outcome.recorded_throws() != 6 {
            return Err(AppError::validation("Failed throws should still be recorded"));
        }
        Ok(())
    })
}

#[test]
fn shutdown_interrupts_every_hammer() -> AppResult<()> {
    run_paused_test(async {
        let client = Arc::new(ScriptedClient::new(vec![Step::Ok(Duration::from_secs(1))]));
        let (shutdown_tx, _) = shutdown_channel();

        let trigger = shutdown_tx.clone();
        let signal = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(2_500)).await;
            drop(trigger.send(()));
        });

        let outcome = dispatch(&config(3, 10), client, &shutdown_tx).await;
        drop(signal.await);

        if !outcome.interrupted() || outcome.failures.len() != 3 {
            return Err(AppError::validation("Expected every hammer to be interrupted"));
        }
        // Two throws finish before the signal; the third is cut short.
        if outcome.recorded_throws() != 6 {
            return Err(AppError::validation(format!(
                "Unexpected recorded throws: {}",
                outcome.recorded_throws()
            )));
        }
        Ok(())
    })
}

#[test]
fn results_are_sorted_by_hammer_id() -> AppResult<()> {
    run_paused_test(async {
        // Later hammers get shorter throws and finish first.
        let client = Arc::new(ScriptedClient::new(vec![
            Step::Ok(Duration::from_millis(400)),
            Step::Ok(Duration::from_millis(300)),
            Step::Ok(Duration::from_millis(200)),
            Step::Ok(Duration::from_millis(100)),
        ]));
        let (shutdown_tx, _) = shutdown_channel();

        let outcome = dispatch(&config(4, 1), client, &shutdown_tx).await;

        let ids: Vec<usize> = outcome.successes.iter().map(HammerResult::hammer_id).collect();
        if ids != vec![0, 1, 2, 3] {
            return Err(AppError::validation(format!("Unexpected order: {:?}", ids)));
        }
        Ok(())
    })
}
