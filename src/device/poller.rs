// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Periodic status polling.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

use super::Heater;
use crate::protocol::Protocol;

/// Handle to a running poller.
///
/// Dropping the handle leaves the poller running for the rest of the
/// runtime's life. Call [`stop`](Self::stop) to end it.
#[derive(Debug)]
pub struct PollerHandle {
    task: JoinHandle<()>,
}

impl PollerHandle {
    /// Stops scheduling further polls.
    ///
    /// Requests already in flight are not cancelled; their responses still
    /// update the mirror.
    pub fn stop(self) {
        tracing::debug!("Stopping heater poller");
        self.task.abort();
    }

    /// Returns `true` if the poller has stopped.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl<P: Protocol> Heater<P> {
    /// Spawns the status poller on the current tokio runtime.
    ///
    /// The first poll happens one interval after the call, then once per
    /// interval. Each poll runs as its own task, so a heater that never
    /// answers does not hold back later polls.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    #[must_use = "dropping the handle detaches the poller; keep it to stop polling"]
    pub fn start_polling(&self) -> PollerHandle {
        let heater = self.clone();
        let period = self.poll_interval.max(Duration::from_millis(1));

        tracing::info!(interval = ?period, "Starting heater poller");

        let task = tokio::spawn(async move {
            let start = time::Instant::now() + period;
            let mut ticker = time::interval_at(start, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                let heater = heater.clone();
                tokio::spawn(async move {
                    heater.fetch_status().await;
                });
            }
        });

        PollerHandle { task }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::tests::{Reply, ScriptedProtocol, body};

    #[tokio::test(start_paused = true)]
    async fn polls_once_per_interval() {
        let protocol = ScriptedProtocol::new([body("18.0", "2"), body("18.5", "4")]);
        let heater = Heater::new(protocol, Duration::from_secs(5));
        let handle = heater.start_polling();

        // Nothing before the first interval elapses
        time::sleep(Duration::from_secs(4)).await;
        assert!(heater.protocol.requests().is_empty());

        time::sleep(Duration::from_secs(2)).await;
        assert_eq!(heater.protocol.requests().len(), 1);
        assert!(heater.state().is_on());

        time::sleep(Duration::from_secs(5)).await;
        assert_eq!(heater.protocol.requests().len(), 2);
        assert!(!heater.state().is_on());

        handle.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn stop_ends_polling() {
        let protocol = ScriptedProtocol::new(Vec::<Reply>::new());
        let heater = Heater::new(protocol, Duration::from_secs(1));
        let handle = heater.start_polling();

        time::sleep(Duration::from_millis(1500)).await;
        handle.stop();
        let count = heater.protocol.requests().len();

        time::sleep(Duration::from_secs(5)).await;
        assert_eq!(heater.protocol.requests().len(), count);
    }
}
