//! Sleep subcommand logic
//!
//! Used to keep a container alive for deployment smoke tests.

use std::time::Duration;

use crate::config::defaults::INFINITE_SLEEP_INTERVAL_SECONDS;
use crate::core::messages::Message;

/// How long to sleep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SleepPlan {
    /// Sleep once for the given number of seconds
    Once(u64),
    /// Sleep in fixed increments until the process is signalled
    Forever { interval: Duration },
}

impl SleepPlan {
    /// Plan for a configured duration; 0 means forever
    pub fn from_seconds(seconds: u64) -> Self {
        if seconds > 0 {
            Self::Once(seconds)
        } else {
            Self::Forever {
                interval: Duration::from_secs(INFINITE_SLEEP_INTERVAL_SECONDS),
            }
        }
    }
}

/// Carry out `plan`, reporting each message before the sleep it announces
///
/// Returns only for [`SleepPlan::Once`].
pub async fn execute<F>(plan: SleepPlan, mut report: F)
where
    F: FnMut(&Message),
{
    match plan {
        SleepPlan::Once(seconds) => {
            report(&Message::Sleeping { seconds });
            tokio::time::sleep(Duration::from_secs(seconds)).await;
        }
        SleepPlan::Forever { interval } => loop {
            report(&Message::SleepingInfinitely);
            tokio::time::sleep(interval).await;
        },
    }
}
