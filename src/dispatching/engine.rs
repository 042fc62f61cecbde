//! The shared admission + selection loop.
//!
//! # Algorithm
//! 1. Admit every process whose arrival is at or before the clock.
//! 2. If nothing is ready, jump the clock to the next arrival.
//! 3. Let the policy pick a ready entry and a slice length; run it.
//! 4. Apply the policy's post-dispatch hook to the entries still waiting.
//! 5. Finish the entry if its burst is used up, otherwise requeue it at the tail.
//! 6. Admit arrivals up to the new clock, then repeat until drained.
//!
//! Each iteration either finishes a process, consumes at least one tick of
//! burst, or admits a process, so the loop terminates for any finite batch.

use log::{debug, trace};

use super::{AdmissionQueue, Dispatch, SelectionPolicy};
use crate::models::{Process, RunInterval};

/// Runs the admission simulation under a selection policy.
#[derive(Debug)]
pub struct AdmissionEngine<'a, P: SelectionPolicy + ?Sized> {
    policy: &'a P,
}

impl<'a, P: SelectionPolicy + ?Sized> AdmissionEngine<'a, P> {
    /// Creates an engine driven by `policy`.
    pub fn new(policy: &'a P) -> Self {
        Self { policy }
    }

    /// Simulates an owned working copy of the batch to completion.
    pub fn simulate(&self, processes: Vec<Process>) -> Dispatch {
        let total = processes.len();
        let mut queue = AdmissionQueue::new(processes);
        let mut slices = Vec::new();
        let mut clock: i64 = 0;

        queue.admit(clock);

        while !queue.is_drained() {
            if queue.ready_is_empty() {
                let Some(next) = queue.next_arrival() else {
                    break;
                };
                trace!("{}: CPU idle from t={clock} to t={next}", self.policy.name());
                clock = next;
                queue.admit(clock);
                continue;
            }

            let Some(index) = self.policy.select(queue.ready_mut()) else {
                break;
            };
            let Some(mut entry) = queue.take(index) else {
                break;
            };

            let run = self.policy.time_slice(&entry).min(entry.remaining).max(0);
            slices.push(RunInterval::new(entry.process.id, clock, clock + run));
            debug!(
                "{}: t={clock} run process {} for {run} (remaining {})",
                self.policy.name(),
                entry.process.id,
                entry.remaining - run
            );
            clock += run;
            entry.remaining -= run;

            self.policy.after_dispatch(queue.ready_mut());

            if entry.remaining <= 0 {
                queue.finish(entry, clock);
            } else {
                queue.requeue(entry);
            }

            queue.admit(clock);
        }

        debug_assert_eq!(queue.finished_len(), total);
        let (order, completions) = queue.into_finished();

        Dispatch {
            order,
            completions,
            slices,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules;

    #[test]
    fn test_empty_batch() {
        let dispatch = AdmissionEngine::new(&rules::ShortestBurst).simulate(Vec::new());
        assert!(dispatch.order.is_empty());
        assert!(dispatch.slices.is_empty());
    }

    #[test]
    fn test_idle_gap_jumps_to_next_arrival() {
        let dispatch = AdmissionEngine::new(&rules::ShortestBurst)
            .simulate(vec![Process::new(1, 0, 2), Process::new(2, 10, 3)]);
        assert_eq!(dispatch.finish_order(), vec![1, 2]);
        assert_eq!(dispatch.slices[1], RunInterval::new(2, 10, 13));
        assert_eq!(dispatch.completions, vec![2, 13]);
    }

    #[test]
    fn test_first_arrival_after_zero() {
        let dispatch =
            AdmissionEngine::new(&rules::Rotation::new(1)).simulate(vec![Process::new(1, 5, 2)]);
        assert_eq!(dispatch.slices[0], RunInterval::new(1, 5, 6));
        assert_eq!(dispatch.completions, vec![7]);
    }

    #[test]
    fn test_works_through_dyn_policy() {
        let policy: Box<dyn SelectionPolicy> = Box::new(rules::AgedPriority);
        let dispatch = AdmissionEngine::new(policy.as_ref()).simulate(vec![
            Process::new(1, 0, 1).with_priority(5),
            Process::new(2, 0, 1).with_priority(2),
        ]);
        assert_eq!(dispatch.finish_order(), vec![2, 1]);
    }
}
