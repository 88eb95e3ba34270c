//! ICMP echo through the system `ping` binary (iputils or BSD syntax).
//!
//! `-W` bounds the wait for each echo reply. iputils reads it in seconds,
//! the macOS and BSD tools in milliseconds. The child process is killed if
//! the probe future is dropped.

use super::{DEFAULT_MIN_REPLIES, DEFAULT_PROBE_TIMEOUT};
use async_trait::async_trait;
use nameserver_sort_application::ports::{ProbeMeasurement, ProbeTransport};
use nameserver_sort_domain::{Candidate, DomainError, TransportProfile};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::debug;

const PING_INTERVAL_SECS: &str = "0.2";
const PING_INTERVAL: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PingSummary {
    pub transmitted: u32,
    pub received: u32,
    pub average_ms: Option<f64>,
}

pub struct SystemPingProbe {
    program: String,
}

impl SystemPingProbe {
    pub fn new() -> Self {
        Self {
            program: "ping".to_string(),
        }
    }

    pub fn with_program(program: &str) -> Self {
        Self {
            program: program.to_string(),
        }
    }

    fn command(&self, address: &Candidate, profile: &TransportProfile, replies: u32) -> Command {
        let wait = wait_arg(profile.timeout().unwrap_or(DEFAULT_PROBE_TIMEOUT));

        let mut cmd = Command::new(&self.program);
        if profile.family().is_ipv6() {
            cmd.arg("-6");
        }
        cmd.arg("-n")
            .arg("-q")
            .args(["-c", &replies.to_string()])
            .args(["-i", PING_INTERVAL_SECS])
            .args(["-W", &wait])
            .arg(address.as_str())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true);
        cmd
    }
}

impl Default for SystemPingProbe {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProbeTransport for SystemPingProbe {
    async fn probe(
        &self,
        address: &Candidate,
        profile: &TransportProfile,
    ) -> Result<ProbeMeasurement, DomainError> {
        let required = profile.min_replies().unwrap_or(DEFAULT_MIN_REPLIES).max(1);
        let wait = profile.timeout().unwrap_or(DEFAULT_PROBE_TIMEOUT);
        // Last reply may arrive a full wait after the last send.
        let budget = PING_INTERVAL * required + wait + Duration::from_secs(1);

        let output = tokio::time::timeout(budget, self.command(address, profile, required).output())
            .await
            .map_err(|_| DomainError::ProbeTimeout {
                address: address.to_string(),
            })?
            .map_err(|e| DomainError::ProbeFailed {
                address: address.to_string(),
                reason: format!("failed to run {}: {}", self.program, e),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let summary = parse_ping_summary(&stdout).ok_or_else(|| DomainError::ProbeFailed {
            address: address.to_string(),
            reason: format!("unrecognised ping output (exit {:?})", output.status.code()),
        })?;

        debug!(
            address = %address,
            transmitted = summary.transmitted,
            received = summary.received,
            "Ping finished"
        );

        if summary.received < required {
            return Err(DomainError::InsufficientReplies {
                address: address.to_string(),
                received: summary.received,
                required,
            });
        }

        let average_latency_ms = summary.average_ms.ok_or_else(|| DomainError::ProbeFailed {
            address: address.to_string(),
            reason: "no round-trip statistics".to_string(),
        })?;

        Ok(ProbeMeasurement {
            average_latency_ms,
            replies: summary.received,
        })
    }

    fn name(&self) -> &'static str {
        "ping"
    }
}

/// Per-reply wait in the unit the platform's `ping -W` expects.
#[cfg(any(
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "netbsd",
    target_os = "dragonfly"
))]
pub fn wait_arg(wait: Duration) -> String {
    wait.as_millis().max(1).to_string()
}

/// Per-reply wait in the unit the platform's `ping -W` expects.
#[cfg(not(any(
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "netbsd",
    target_os = "dragonfly"
)))]
pub fn wait_arg(wait: Duration) -> String {
    wait.as_secs().max(1).to_string()
}

/// Extracts packet counts and the average RTT from ping's summary lines.
///
/// Understands both
/// `rtt min/avg/max/mdev = 9.8/10.2/11.0/0.4 ms` (iputils) and
/// `round-trip min/avg/max/stddev = ...` (BSD, busybox).
pub fn parse_ping_summary(output: &str) -> Option<PingSummary> {
    let counts = output
        .lines()
        .find(|line| line.contains("packets transmitted"))?;

    let mut transmitted = None;
    let mut received = None;
    for part in counts.split(',') {
        let part = part.trim();
        let value = part
            .split_whitespace()
            .next()
            .and_then(|v| v.parse::<u32>().ok());
        if part.contains("transmitted") {
            transmitted = value;
        } else if part.contains("received") {
            received = value;
        }
    }

    let average_ms = output
        .lines()
        .find(|line| line.contains("min/avg/max"))
        .and_then(|line| line.split_once('='))
        .and_then(|(_, values)| values.trim().split('/').nth(1))
        .and_then(|avg| avg.trim().parse::<f64>().ok());

    Some(PingSummary {
        transmitted: transmitted?,
        received: received?,
        average_ms,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iputils_summary() {
        let output = "PING 8.8.8.8 (8.8.8.8) 56(84) bytes of data.\n\
            \n\
            --- 8.8.8.8 ping statistics ---\n\
            10 packets transmitted, 10 received, 0% packet loss, time 1808ms\n\
            rtt min/avg/max/mdev = 9.812/10.254/11.037/0.391 ms\n";

        let summary = parse_ping_summary(output).unwrap();
        assert_eq!(summary.transmitted, 10);
        assert_eq!(summary.received, 10);
        assert_eq!(summary.average_ms, Some(10.254));
    }

    #[test]
    fn test_parse_bsd_summary() {
        let output = "--- 1.1.1.1 ping statistics ---\n\
            5 packets transmitted, 4 packets received, 20.0% packet loss\n\
            round-trip min/avg/max/stddev = 14.101/15.500/17.930/1.402 ms\n";

        let summary = parse_ping_summary(output).unwrap();
        assert_eq!(summary.transmitted, 5);
        assert_eq!(summary.received, 4);
        assert_eq!(summary.average_ms, Some(15.5));
    }

    #[test]
    fn test_parse_total_loss_has_no_average() {
        let output = "--- 192.0.2.1 ping statistics ---\n\
            3 packets transmitted, 0 received, +3 errors, 100% packet loss, time 2041ms\n";

        let summary = parse_ping_summary(output).unwrap();
        assert_eq!(summary.received, 0);
        assert_eq!(summary.average_ms, None);
    }

    #[test]
    fn test_parse_garbage() {
        assert!(parse_ping_summary("ping: unknown host nowhere.invalid").is_none());
        assert!(parse_ping_summary("").is_none());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_wait_arg_in_seconds_on_linux() {
        assert_eq!(wait_arg(Duration::from_secs(2)), "2");
        assert_eq!(wait_arg(Duration::from_millis(200)), "1");
    }

    #[cfg(target_os = "macos")]
    #[test]
    fn test_wait_arg_in_millis_on_macos() {
        assert_eq!(wait_arg(Duration::from_secs(2)), "2000");
        assert_eq!(wait_arg(Duration::from_secs(1)), "1000");
    }

    #[test]
    fn test_command_carries_wait_arg() {
        let probe = SystemPingProbe::new();
        let profile = TransportProfile::Ipv4OrHostname {
            timeout: Duration::from_secs(3),
            min_replies: 4,
        };

        let cmd = probe.command(&Candidate::from("192.0.2.1"), &profile, 4);
        let args: Vec<String> = cmd
            .as_std()
            .get_args()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();

        let w = args.iter().position(|a| a == "-W").unwrap();
        assert_eq!(args[w + 1], wait_arg(Duration::from_secs(3)));
        assert_ne!(args[w + 1], "0");
        assert_eq!(args.last().map(String::as_str), Some("192.0.2.1"));
    }

    #[tokio::test]
    async fn test_missing_binary_is_probe_failure() {
        let probe = SystemPingProbe::with_program("/nonexistent/ping-binary");
        let profile = TransportProfile::Ipv4OrHostname {
            timeout: Duration::from_secs(1),
            min_replies: 1,
        };

        let result = probe.probe(&Candidate::from("127.0.0.1"), &profile).await;
        assert!(matches!(result, Err(DomainError::ProbeFailed { .. })));
    }
}
