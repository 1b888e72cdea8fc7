// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! In-flight call handles and completion contexts
//!
//! A [`NetworkTask`] represents one in-flight marketplace call and exposes
//! best-effort cancellation. A [`CompletionContext`] names the runtime the
//! result callback is delivered on, so transport-task completion never
//! leaks into the consumer's execution context.

use tokio::{runtime::Handle, task::AbortHandle};

/// Execution context a result callback is delivered on.
///
/// Callbacks are spawned onto the wrapped runtime handle rather than
/// invoked inline on the transport task.
#[derive(Debug, Clone)]
pub struct CompletionContext {
    handle: Handle,
}

impl CompletionContext {
    /// Deliver callbacks on the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime, same as
    /// [`Handle::current`].
    pub fn current() -> Self {
        Self {
            handle: Handle::current(),
        }
    }

    /// Deliver callbacks on the given runtime handle
    pub fn on(handle: Handle) -> Self {
        Self { handle }
    }

    pub(crate) fn deliver<F>(&self, callback: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.handle.spawn(async move { callback() });
    }
}

/// Cancellable handle for one in-flight call.
///
/// Dropping the handle does not cancel the call; the callback still
/// fires. Cancellation is explicit and best-effort: it suppresses a
/// callback that has not yet been scheduled, and is a no-op once the
/// call has completed.
#[derive(Debug)]
pub struct NetworkTask {
    abort: AbortHandle,
}

impl NetworkTask {
    pub(crate) fn new(abort: AbortHandle) -> Self {
        Self { abort }
    }

    /// Cancel the in-flight call.
    ///
    /// If the call has not completed, its callback will never be invoked.
    /// Cancelling a completed call does nothing.
    pub fn cancel(&self) {
        self.abort.abort();
    }

    /// Whether the underlying call has finished (completed or cancelled)
    pub fn is_finished(&self) -> bool {
        self.abort.is_finished()
    }
}
