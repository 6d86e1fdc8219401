//! Application Context
//!
//! Shared signals provided via Leptos Context API: the loading counter
//! behind the spinner, the plant-list reload trigger, and the request
//! generations that keep slow responses from clobbering newer state.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Count of in-flight guarded operations - read
    pub loading: ReadSignal<u32>,
    /// Count of in-flight guarded operations - write
    set_loading: WriteSignal<u32>,
    /// Trigger to reload the plant list - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload the plant list - write
    set_reload_trigger: WriteSignal<u32>,
    /// Generation of the latest plant-list request
    pub plant_requests: RequestGeneration,
    /// Generation of the latest details request
    pub detail_requests: RequestGeneration,
}

impl AppContext {
    pub fn new(
        loading: (ReadSignal<u32>, WriteSignal<u32>),
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            loading: loading.0,
            set_loading: loading.1,
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            plant_requests: RequestGeneration::new(),
            detail_requests: RequestGeneration::new(),
        }
    }

    /// Trigger a reload of the plant list
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Bracket a network operation; the spinner stays up while any guard
    /// from this context is alive and clears when the last one drops.
    pub fn begin_loading(&self) -> LoadingGuard {
        self.set_loading.update(|count| *count += 1);
        LoadingGuard {
            set_loading: self.set_loading,
        }
    }
}

/// Scoped spinner handle. Dropping it releases the loading counter, so the
/// spinner cannot stick on early returns or error paths.
pub struct LoadingGuard {
    set_loading: WriteSignal<u32>,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.set_loading.update(|count| *count = count.saturating_sub(1));
    }
}

/// Monotonically increasing ticket counter for one mutable view. A handler
/// takes a ticket before awaiting and only applies its response if no newer
/// ticket has been issued since, so a slow early request cannot overwrite
/// state written by a later one.
#[derive(Clone, Copy)]
pub struct RequestGeneration {
    current: ReadSignal<u64>,
    set_current: WriteSignal<u64>,
}

impl RequestGeneration {
    pub fn new() -> Self {
        let (current, set_current) = signal(0u64);
        Self {
            current,
            set_current,
        }
    }

    /// Issue the next ticket, invalidating all earlier ones
    pub fn next(&self) -> u64 {
        let ticket = self.current.get_untracked() + 1;
        self.set_current.set(ticket);
        ticket
    }

    /// Whether `ticket` is still the newest one issued
    pub fn is_current(&self, ticket: u64) -> bool {
        self.current.get_untracked() == ticket
    }
}
