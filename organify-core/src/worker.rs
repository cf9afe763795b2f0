//! Background execution of operations, one at a time.
//!
//! Each run executes synchronously on its own thread; the host polls the
//! runner instead of blocking and a new request is rejected while a previous
//! thread is alive.

use crate::effector::{DryRunEffector, Effector, FsEffector};
use crate::errors::CoreError;
use crate::logging::OpLog;
use crate::operations::{self, OperationContext, OperationKind, OperationRequest, ResultSink};
use crate::progress::{CancelFlag, ProgressSink};
use std::sync::Arc;
use std::thread::JoinHandle;

/// A running (or finished, not yet reaped) operation.
pub struct OperationHandle {
    kind: OperationKind,
    cancel: CancelFlag,
    join: JoinHandle<Result<usize, CoreError>>,
}

impl OperationHandle {
    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }

    /// Request cooperative cancellation; the thread stops at its next poll.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Block until the thread ends and return its outcome.
    pub fn join(self) -> Result<usize, CoreError> {
        self.join.join().unwrap_or(Err(CoreError::Panicked))
    }
}

/// Enforces the at-most-one-operation-in-flight rule.
#[derive(Default)]
pub struct OperationRunner {
    active: Option<OperationHandle>,
}

impl OperationRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.active.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    /// Start `request` on a fresh worker thread.
    ///
    /// Returns [`CoreError::Busy`] while a previous operation's thread is
    /// still alive. The returned flag cancels this run.
    pub fn spawn(
        &mut self,
        request: OperationRequest,
        log: Arc<dyn OpLog>,
        progress: Arc<dyn ProgressSink>,
        results: Option<Arc<dyn ResultSink>>,
        dry_run: bool,
    ) -> Result<CancelFlag, CoreError> {
        if self.is_busy() {
            return Err(CoreError::Busy);
        }

        let kind = request.kind();
        let cancel = CancelFlag::new();
        let thread_cancel = cancel.clone();
        let join = std::thread::spawn(move || {
            let fx: Box<dyn Effector> = if dry_run {
                Box::new(DryRunEffector)
            } else {
                Box::new(FsEffector)
            };
            let ctx = OperationContext::new(
                log.as_ref(),
                progress.as_ref(),
                &thread_cancel,
                fx.as_ref(),
                dry_run,
            );
            operations::run(&request, &ctx, results.as_deref())
        });

        self.active = Some(OperationHandle {
            kind,
            cancel: cancel.clone(),
            join,
        });
        Ok(cancel)
    }

    /// Cancel the active operation, if any.
    pub fn cancel(&self) {
        if let Some(handle) = &self.active {
            handle.cancel();
        }
    }

    /// Reap a finished operation. `None` while one is still running or when
    /// nothing was started.
    pub fn poll(&mut self) -> Option<Result<usize, CoreError>> {
        if self.active.as_ref().is_some_and(OperationHandle::is_finished) {
            return self.active.take().map(OperationHandle::join);
        }
        None
    }

    /// Block until the active operation ends, returning its outcome.
    pub fn join(&mut self) -> Option<Result<usize, CoreError>> {
        self.active.take().map(OperationHandle::join)
    }
}
