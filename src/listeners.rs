//! Bookkeeping for callbacks registered on the window.
//!
//! A callback must stay alive for as long as the window holds it, and must be
//! detached before it is dropped. [`Registrations`] owns them keyed by event
//! name and hands back whatever it displaces so the caller can detach it.

#[cfg(test)]
#[path = "listeners_test.rs"]
mod listeners_test;

#[derive(Debug)]
pub struct Registrations<T> {
    entries: Vec<(&'static str, T)>,
}

impl<T> Default for Registrations<T> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<T> Registrations<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep `callback` for `event`. Returns the callback it replaces, which is
    /// still attached and must be detached by the caller.
    pub fn insert(&mut self, event: &'static str, callback: T) -> Option<T> {
        if let Some(slot) = self.entries.iter_mut().find(|(name, _)| *name == event) {
            return Some(std::mem::replace(&mut slot.1, callback));
        }
        self.entries.push((event, callback));
        None
    }

    /// Take every registration for detaching.
    pub fn drain(&mut self) -> Vec<(&'static str, T)> {
        std::mem::take(&mut self.entries)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
