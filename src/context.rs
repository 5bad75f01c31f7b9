//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload the task list from the API - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload the task list from the API - write
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(reload_trigger: (ReadSignal<u32>, WriteSignal<u32>)) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    /// Trigger a reload of the task list
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reload_fires_exactly_once_per_call() {
        let ctx = AppContext::new(signal(0u32));
        ctx.reload();
        assert_eq!(ctx.reload_trigger.get_untracked(), 1);
        ctx.reload();
        assert_eq!(ctx.reload_trigger.get_untracked(), 2);
    }
}
