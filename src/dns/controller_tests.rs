//! Tests for the DNS configuration controller.

use std::collections::VecDeque;
use std::sync::Mutex;

use super::{DnsController, DnsError, DnsServers};
use crate::command::{CommandError, CommandOutput, CommandRunner};

/// Scripted reply for one invocation, popped in call order.
enum Reply {
    Stdout(&'static str),
    Fail { code: i32, stderr: &'static str },
}

/// Command-runner mock replying from a queue (default: success with empty
/// output) and recording every full argument list.
struct RecordingRunner {
    replies: Mutex<VecDeque<Reply>>,
    calls: Mutex<Vec<Vec<String>>>,
}

impl RecordingRunner {
    fn new(replies: Vec<Reply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn succeeding() -> Self {
        Self::new(Vec::new())
    }

    fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }
}

impl CommandRunner for RecordingRunner {
    async fn run(&self, command: &str, args: &[&str]) -> Result<CommandOutput, CommandError> {
        let call = std::iter::once(command.to_owned())
            .chain(args.iter().map(|arg| (*arg).to_owned()))
            .collect();
        self.calls.lock().unwrap().push(call);

        match self.replies.lock().unwrap().pop_front() {
            None => Ok(CommandOutput {
                code: Some(0),
                stdout: String::new(),
                stderr: String::new(),
            }),
            Some(Reply::Stdout(stdout)) => Ok(CommandOutput {
                code: Some(0),
                stdout: stdout.to_owned(),
                stderr: String::new(),
            }),
            Some(Reply::Fail { code, stderr }) => Err(CommandError::Failed {
                command: command.to_owned(),
                code: Some(code),
                stderr: stderr.to_owned(),
            }),
        }
    }

    async fn is_available(&self, _command: &str) -> bool {
        true
    }
}

fn pair() -> DnsServers {
    DnsServers::new("8.8.8.8", Some("8.8.4.4".to_owned())).unwrap()
}

#[tokio::test]
async fn current_returns_decoded_stdout() {
    let report = "Configuration for interface \"Wi-Fi\"\n    DNS servers configured through DHCP:  192.168.1.1\n";
    let runner = RecordingRunner::new(vec![Reply::Stdout(report)]);
    let controller = DnsController::new(&runner);

    let text = controller.current("Wi-Fi").await.unwrap();

    assert_eq!(text, report);
    assert_eq!(
        runner.calls(),
        vec![vec![
            "netsh".to_owned(),
            "interface".to_owned(),
            "ip".to_owned(),
            "show".to_owned(),
            "dns".to_owned(),
            "name=Wi-Fi".to_owned(),
        ]]
    );
}

#[tokio::test]
async fn current_failure_is_a_typed_read_error() {
    let runner = RecordingRunner::new(vec![Reply::Fail {
        code: 1,
        stderr: "The interface name is invalid.",
    }]);
    let controller = DnsController::new(&runner);

    let result = controller.current("Nope").await;

    assert!(matches!(result, Err(DnsError::Read { .. })));
}

#[tokio::test]
async fn set_static_with_one_address_issues_exactly_one_command() {
    let runner = RecordingRunner::succeeding();
    let controller = DnsController::new(&runner);
    let servers = DnsServers::new("8.8.8.8", None).unwrap();

    controller.set_static("Wi-Fi", &servers).await.unwrap();

    assert_eq!(
        runner.calls(),
        vec![vec![
            "netsh".to_owned(),
            "interface".to_owned(),
            "ip".to_owned(),
            "set".to_owned(),
            "dns".to_owned(),
            "name=Wi-Fi".to_owned(),
            "source=static".to_owned(),
            "addr=8.8.8.8".to_owned(),
        ]]
    );
}

#[tokio::test]
async fn set_static_with_pair_issues_set_then_add() {
    let runner = RecordingRunner::succeeding();
    let controller = DnsController::new(&runner);

    controller.set_static("Wi-Fi", &pair()).await.unwrap();

    let calls = runner.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(
        calls[0],
        vec![
            "netsh".to_owned(),
            "interface".to_owned(),
            "ip".to_owned(),
            "set".to_owned(),
            "dns".to_owned(),
            "name=Wi-Fi".to_owned(),
            "source=static".to_owned(),
            "addr=8.8.8.8".to_owned(),
        ]
    );
    assert_eq!(
        calls[1],
        vec![
            "netsh".to_owned(),
            "interface".to_owned(),
            "ip".to_owned(),
            "add".to_owned(),
            "dns".to_owned(),
            "name=Wi-Fi".to_owned(),
            "addr=8.8.4.4".to_owned(),
            "index=2".to_owned(),
        ]
    );
}

#[tokio::test]
async fn set_static_stops_after_primary_failure() {
    let runner = RecordingRunner::new(vec![Reply::Fail {
        code: 1,
        stderr: "Access is denied.",
    }]);
    let controller = DnsController::new(&runner);

    let result = controller.set_static("Wi-Fi", &pair()).await;

    assert!(matches!(result, Err(DnsError::Apply { .. })));
    assert_eq!(runner.calls().len(), 1, "secondary must not be attempted");
}

#[tokio::test]
async fn set_static_reports_secondary_failure() {
    let runner = RecordingRunner::new(vec![
        Reply::Stdout(""),
        Reply::Fail {
            code: 1,
            stderr: "The object already exists.",
        },
    ]);
    let controller = DnsController::new(&runner);

    let result = controller.set_static("Wi-Fi", &pair()).await;

    assert!(matches!(result, Err(DnsError::Apply { .. })));
    assert_eq!(runner.calls().len(), 2);
}

#[tokio::test]
async fn reset_dynamic_issues_dhcp_command_and_is_idempotent() {
    let runner = RecordingRunner::succeeding();
    let controller = DnsController::new(&runner);

    controller.reset_dynamic("Ethernet").await.unwrap();
    controller.reset_dynamic("Ethernet").await.unwrap();

    let expected = vec![
        "netsh".to_owned(),
        "interface".to_owned(),
        "ip".to_owned(),
        "set".to_owned(),
        "dns".to_owned(),
        "name=Ethernet".to_owned(),
        "source=dhcp".to_owned(),
    ];
    assert_eq!(runner.calls(), vec![expected.clone(), expected]);
}
