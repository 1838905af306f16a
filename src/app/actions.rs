//! Background request plumbing shared by every screen.

use super::App;
use crate::api::ApiError;
use crate::types::Remote;
use eframe::egui;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::warn;

/// Shared handle to the result slot of one form. The UI thread polls it each
/// frame; the task that owns the request writes into it exactly once.
pub struct Slot<T>(Arc<Mutex<Remote<T>>>);

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self(Arc::new(Mutex::new(Remote::Idle)))
    }
}

impl<T> Clone for Slot<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> Slot<T> {
    pub fn get(&self) -> MutexGuard<'_, Remote<T>> {
        self.0.lock().unwrap()
    }

    pub fn set(&self, value: Remote<T>) {
        *self.0.lock().unwrap() = value;
    }

    pub fn is_loading(&self) -> bool {
        self.0.lock().unwrap().is_loading()
    }

    pub fn is_idle(&self) -> bool {
        matches!(*self.0.lock().unwrap(), Remote::Idle)
    }

    /// Consume a ready value, resetting the slot to idle. Used for one-shot
    /// results such as a completed login or a submitted form.
    pub fn take_ready(&self) -> Option<T> {
        let mut guard = self.0.lock().unwrap();
        if matches!(*guard, Remote::Ready(_)) {
            if let Remote::Ready(value) = std::mem::take(&mut *guard) {
                return Some(value);
            }
        }
        None
    }

    /// Consume a failure message, resetting the slot to idle.
    pub fn take_error(&self) -> Option<String> {
        let mut guard = self.0.lock().unwrap();
        if matches!(*guard, Remote::Failed(_)) {
            if let Remote::Failed(message) = std::mem::take(&mut *guard) {
                return Some(message);
            }
        }
        None
    }

    pub fn error(&self) -> Option<String> {
        self.0.lock().unwrap().error().map(str::to_string)
    }
}

/// A 401 forces a logout only when a session existed when the request was
/// fired. A rejected login is a 401 too, and that one belongs inline on
/// the form, not in the session-expired toast.
fn ends_session(error: &ApiError, had_session: bool) -> bool {
    had_session && error.is_unauthorized()
}

impl App {
    /// Run one request on the tokio runtime, writing the outcome into `slot`.
    ///
    /// A slot that is already loading is left alone, so a double-clicked
    /// button never fires twice. A 401 on an authenticated request
    /// additionally raises the shared session-expired flag, which the
    /// update loop turns into a logout.
    pub(crate) fn spawn_into<T, F>(&self, ctx: &egui::Context, slot: &Slot<T>, future: F)
    where
        T: Send + 'static,
        F: Future<Output = Result<T, ApiError>> + Send + 'static,
    {
        if slot.is_loading() {
            return;
        }
        slot.set(Remote::Loading);
        let slot = slot.clone();
        let expired = self.session_expired.clone();
        let had_session = self.session.is_some();
        let ctx = ctx.clone();
        self.runtime.spawn(async move {
            match future.await {
                Ok(value) => slot.set(Remote::Ready(value)),
                Err(e) => {
                    if ends_session(&e, had_session) {
                        *expired.lock().unwrap() = true;
                    }
                    warn!(error = %e, "background request failed");
                    slot.set(Remote::Failed(e.user_message()));
                }
            }
            ctx.request_repaint();
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_ready_resets_to_idle() {
        let slot: Slot<i32> = Slot::default();
        slot.set(Remote::Ready(7));
        assert_eq!(slot.take_ready(), Some(7));
        assert!(slot.is_idle());
        assert_eq!(slot.take_ready(), None);
    }

    #[test]
    fn take_error_resets_to_idle() {
        let slot: Slot<i32> = Slot::default();
        slot.set(Remote::Failed("no".into()));
        assert_eq!(slot.take_error().as_deref(), Some("no"));
        assert!(slot.is_idle());
    }

    #[test]
    fn rejected_login_does_not_end_the_session() {
        let denied = ApiError::Unauthorized("Invalid credentials".into());
        assert!(!ends_session(&denied, false));
        assert!(ends_session(&denied, true));

        let other = ApiError::NotFound;
        assert!(!ends_session(&other, true));
    }
}
