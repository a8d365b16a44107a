use async_trait::async_trait;
use tokio::process::Command;

/// Host reachability check. The run loop only sees this trait, so the system
/// ping can be swapped for a native ICMP socket or a test fake without
/// touching the enumeration logic.
#[async_trait]
pub trait Prober {
    async fn is_reachable(&self, host: &str) -> bool;
}

/// Probes with a single echo request through the OS ping utility and trusts
/// its exit status alone. No timeout of our own; the utility's applies.
pub struct PingProber;

impl PingProber {
    fn command(host: &str) -> Command {
        let mut cmd = Command::new("ping");
        #[cfg(target_os = "windows")]
        cmd.args(["-n", "1", host]);
        #[cfg(not(target_os = "windows"))]
        cmd.args(["-c", "1", host]);
        cmd.stdout(std::process::Stdio::null())
            .stderr(std::process::Stdio::null());
        cmd
    }
}

#[async_trait]
impl Prober for PingProber {
    async fn is_reachable(&self, host: &str) -> bool {
        probe_with(host, Self::command(host)).await
    }
}

/// Runs one probe command. Invocation errors (missing utility, permission
/// error, etc.) are logged and count as unreachable; one bad candidate never
/// aborts the run.
async fn probe_with(host: &str, mut cmd: Command) -> bool {
    match cmd.status().await {
        Ok(status) => status.success(),
        Err(e) => {
            eprintln!("Error pinging host {}: {}", host, e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ping_command_sends_a_single_echo() {
        let cmd = PingProber::command("example.com");
        let args: Vec<&std::ffi::OsStr> = cmd.as_std().get_args().collect();
        #[cfg(not(target_os = "windows"))]
        assert_eq!(args, ["-c", "1", "example.com"]);
        #[cfg(target_os = "windows")]
        assert_eq!(args, ["-n", "1", "example.com"]);
    }

    #[tokio::test]
    async fn failed_invocation_is_unreachable() {
        let cmd = Command::new("/nonexistent/ping-utility");
        assert!(!probe_with("example.com", cmd).await);
    }
}
