//! Tests for the system command runner.

use std::time::Duration;

use super::{CommandError, CommandRunner, DecodePolicy, SystemRunner};

fn runner() -> SystemRunner {
    SystemRunner::new(DecodePolicy::default(), Duration::from_secs(5))
}

#[tokio::test]
async fn missing_binary_reports_not_found() {
    let result = runner().run("dns-switch-no-such-binary", &[]).await;
    assert!(matches!(result, Err(CommandError::NotFound { .. })));
}

#[tokio::test]
async fn is_available_false_for_missing_binary() {
    assert!(!runner().is_available("dns-switch-no-such-binary").await);
}

#[test]
fn failed_error_displays_decoded_stderr() {
    let error = CommandError::Failed {
        command: "netsh".to_owned(),
        code: Some(1),
        stderr: "The interface name is invalid.".to_owned(),
    };
    let message = error.to_string();
    assert!(message.contains("status 1"), "got {message}");
    assert!(message.contains("interface name is invalid"), "got {message}");
}

#[test]
fn failed_error_without_code_displays_unknown_status() {
    let error = CommandError::Failed {
        command: "netsh".to_owned(),
        code: None,
        stderr: String::new(),
    };
    assert!(error.to_string().contains("unknown status"));
}

#[cfg(unix)]
mod unix {
    use super::*;

    #[tokio::test]
    async fn captures_decoded_stdout() {
        let output = runner().run("echo", &["hello"]).await.unwrap();
        assert_eq!(output.stdout.trim(), "hello");
        assert!(output.stderr.is_empty());
        assert_eq!(output.code, Some(0));
    }

    #[tokio::test]
    async fn nonzero_exit_surfaces_decoded_stderr() {
        let result = runner().run("sh", &["-c", "echo oops >&2; exit 3"]).await;
        match result {
            Err(CommandError::Failed { code, stderr, .. }) => {
                assert_eq!(code, Some(3));
                assert_eq!(stderr.trim(), "oops");
            }
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn hung_command_times_out() {
        let quick = SystemRunner::new(DecodePolicy::default(), Duration::from_millis(100));
        let result = quick.run("sleep", &["5"]).await;
        assert!(matches!(result, Err(CommandError::TimedOut { .. })));
    }

    #[tokio::test]
    async fn is_available_true_for_present_binary() {
        assert!(runner().is_available("echo").await);
    }

    #[tokio::test]
    async fn runner_reference_also_implements_the_trait() {
        let runner = runner();
        let by_ref = &runner;
        let output = by_ref.run("echo", &["shared"]).await.unwrap();
        assert_eq!(output.stdout.trim(), "shared");
    }
}
