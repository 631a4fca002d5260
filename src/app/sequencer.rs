//! Fail-fast execution of installation steps.

use std::io::Write;

use super::executor::StepExecutor;
use super::interrupts::Interrupts;
use super::reporter::Reporter;
use crate::domain::{AppError, Step};
use crate::ports::CommandRunner;

/// Runs steps in order, stopping at the first failure or trapped signal.
pub struct Sequencer<'r, R: CommandRunner, O: Write, E: Write> {
    executor: StepExecutor<R>,
    reporter: &'r mut Reporter<O, E>,
}

impl<'r, R: CommandRunner, O: Write, E: Write> Sequencer<'r, R, O, E> {
    pub fn new(executor: StepExecutor<R>, reporter: &'r mut Reporter<O, E>) -> Self {
        Self { executor, reporter }
    }

    pub fn executor(&self) -> &StepExecutor<R> {
        &self.executor
    }

    /// Run every step. Each step is raced against `interrupts`, so a signal
    /// aborts the step that is in flight rather than waiting for it.
    pub async fn run(
        &mut self,
        steps: &[Step],
        interrupts: &mut Interrupts,
    ) -> Result<(), AppError> {
        for step in steps {
            self.reporter.step_started(&step.description);

            let outcome = tokio::select! {
                biased;
                signal = interrupts.recv() => Err(signal),
                outcome = self.executor.execute(&step.action, &mut *self.reporter) => Ok(outcome),
            };

            match outcome {
                Ok(Ok(())) => self.reporter.step_succeeded(&step.description),
                Ok(Err(reason)) => {
                    self.reporter.step_failed(&step.description, &reason);
                    return Err(self.abort(AppError::StepFailed {
                        description: step.description.clone(),
                        reason,
                    }));
                }
                Err(signal) => return Err(self.abort(AppError::Interrupted(signal))),
            }
        }

        self.reporter.installation_succeeded();
        Ok(())
    }

    fn abort(&mut self, error: AppError) -> AppError {
        let signal = match &error {
            AppError::Interrupted(signal) => Some(*signal),
            _ => None,
        };
        self.reporter.installation_failed(signal);
        error
    }
}
