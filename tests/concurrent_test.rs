//! Ordering and failure isolation of the concurrent runner

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use futures_util::StreamExt;
use powerchord::{
    execute, map_concurrent, run_all, run_all_streaming, timed_async, try_run_all, TaskError,
};
use tokio::time::sleep;

use common::scrambled_delay_ms;

#[tokio::test]
async fn test_run_all_order_independent_of_completion() {
    for len in [1, 2, 5, 13] {
        let units = (0..len).map(move |i| async move {
            sleep(Duration::from_millis(scrambled_delay_ms(i, len))).await;
            i * 10
        });

        let values = run_all(units).await.unwrap();

        assert_eq!(values.len(), len);
        assert_eq!(values, (0..len).map(|i| i * 10).collect::<Vec<_>>());
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_run_all_order_on_multi_thread_runtime() {
    let len = 16;
    let units = (0..len).map(move |i| async move {
        sleep(Duration::from_millis(scrambled_delay_ms(i, len))).await;
        format!("unit-{i}")
    });

    let values = run_all(units).await.unwrap();

    for (i, value) in values.iter().enumerate() {
        assert_eq!(value, &format!("unit-{i}"));
    }
}

#[tokio::test]
async fn test_failure_at_index_2_does_not_stop_later_units() {
    let finished = Arc::new(AtomicUsize::new(0));

    let units: Vec<_> = (0..5u64)
        .map(|i| {
            let finished = Arc::clone(&finished);
            async move {
                if i == 2 {
                    return Err(TaskError::Config("unit 2 failed".to_string()));
                }
                // Units past the failure take longer than the failing one
                sleep(Duration::from_millis(20 * (i + 1))).await;
                finished.fetch_add(1, Ordering::SeqCst);
                Ok(i)
            }
        })
        .collect();

    let err = try_run_all(units).await.unwrap_err();
    assert_eq!(err.to_string(), "Configuration error: unit 2 failed");

    // Units 3 and 4 were not cancelled and finish on their own
    sleep(Duration::from_millis(300)).await;
    assert_eq!(finished.load(Ordering::SeqCst), 4);
}

#[tokio::test]
async fn test_failure_observed_only_when_slot_reached() {
    let units = (0..3u64).map(|i| async move {
        sleep(Duration::from_millis(if i == 0 { 100 } else { 1 })).await;
        if i == 2 {
            Err(TaskError::Config("late slot".to_string()))
        } else {
            Ok(i)
        }
    });

    let mut results = run_all_streaming(units);

    // Slot 2 already failed, but slots 0 and 1 still come through first
    assert_eq!(results.next().await.unwrap().unwrap().unwrap(), 0);
    assert_eq!(results.next().await.unwrap().unwrap().unwrap(), 1);
    assert!(results.next().await.unwrap().unwrap().is_err());
    assert!(results.next().await.is_none());
}

#[tokio::test]
async fn test_dropping_results_does_not_cancel_units() {
    let finished = Arc::new(AtomicUsize::new(0));

    let units: Vec<_> = (0..3)
        .map(|_| {
            let finished = Arc::clone(&finished);
            async move {
                sleep(Duration::from_millis(30)).await;
                finished.fetch_add(1, Ordering::SeqCst);
            }
        })
        .collect();

    drop(run_all_streaming(units));

    sleep(Duration::from_millis(200)).await;
    assert_eq!(finished.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_map_concurrent_over_commands() {
    let results = map_concurrent(
        |word: &'static str| async move { execute(&format!("echo {word}")).await },
        ["alpha", "beta", "gamma"],
    )
    .await
    .unwrap();

    let outputs: Vec<String> = results
        .into_iter()
        .map(|r| r.unwrap().stdout_lossy().trim_end().to_string())
        .collect();
    assert_eq!(outputs, vec!["alpha", "beta", "gamma"]);
}

#[tokio::test]
async fn test_timed_batch_of_commands() {
    let batch = timed_async(run_all(
        ["echo hello", "exit 1"].map(|cmd| async move { execute(cmd).await }),
    ))
    .await;

    let results = batch.value.unwrap();
    let hello = results[0].as_ref().unwrap();
    assert!(hello.success);
    assert_eq!(hello.stdout_lossy().trim_end(), "hello");
    assert!(hello.stderr.is_empty());

    let exit = results[1].as_ref().unwrap();
    assert!(!exit.success);
    assert!(exit.stdout.is_empty());
    assert!(exit.stderr.is_empty());

    assert!(!batch.duration.is_empty());
}
