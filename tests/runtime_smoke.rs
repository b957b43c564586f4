#![cfg(test)]
// End-to-end runtime smoke test (headless)
// - Starts filingsview::app::run in the background against a closed port.
// - Runs with FILINGSVIEW_TEST_HEADLESS=1 to bypass raw TTY setup/restore.
// - The initial fetch fails fast; the runtime must keep running and not panic.
// - If still running after the wait, aborts the task and asserts the join was a clean cancel.

use std::time::Duration;

use filingsview::theme::Settings;

#[tokio::test(flavor = "multi_thread")]
async fn runtime_smoke_headless_initializes_and_runs_without_panic() {
    unsafe {
        std::env::set_var("FILINGSVIEW_TEST_HEADLESS", "1");
    }

    let settings = Settings {
        service_url: "http://127.0.0.1:9".into(),
        connect_timeout_secs: 1,
        ..Settings::default()
    };
    let handle = tokio::spawn(async move { filingsview::app::run(settings).await });

    tokio::time::sleep(Duration::from_millis(100)).await;

    if handle.is_finished() {
        match handle.await {
            Ok(run_result) => {
                if let Err(e) = run_result {
                    panic!("app::run returned error early: {e:?}");
                }
                return;
            }
            Err(join_err) => panic!("app::run task panicked: {join_err}"),
        }
    }

    handle.abort();
    match handle.await {
        Ok(run_result) => {
            if let Err(e) = run_result {
                panic!("app::run completed with error on abort race: {e:?}");
            }
        }
        Err(join_err) => {
            assert!(
                join_err.is_cancelled(),
                "app::run join error should be cancellation, got: {join_err}"
            );
        }
    }
}
