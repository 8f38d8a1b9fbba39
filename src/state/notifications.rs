use leptos::*;

/// How long a banner stays up before it removes itself
const DISMISS_MS: u32 = 5_000;

/// One transient banner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
}

/// Transient error surfacing. Banners stack freely and each one dismisses
/// itself after a fixed interval; there is no queue and no deduplication.
#[derive(Clone, Copy)]
pub struct Notifications {
    items: RwSignal<Vec<Notification>>,
    next_id: StoredValue<u64>,
}

impl Notifications {
    fn new() -> Self {
        Self {
            items: create_rw_signal(Vec::new()),
            next_id: store_value(0),
        }
    }

    /// Current banners, oldest first
    pub fn items(&self) -> Vec<Notification> {
        self.items.get()
    }

    /// Show a banner and schedule its removal
    pub fn notify(&self, message: impl Into<String>) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        self.items.update(|list| {
            list.push(Notification {
                id,
                message: message.into(),
            })
        });

        #[cfg(target_arch = "wasm32")]
        {
            use gloo_timers::callback::Timeout;

            let items = self.items;
            Timeout::new(DISMISS_MS, move || {
                items.update(|list| list.retain(|n| n.id != id));
            })
            .forget();
        }
    }
}

/// Provide the notification center at the app root
pub fn provide_notifications() {
    provide_context(Notifications::new());
}

/// Hook to access the notification center
pub fn use_notifications() -> Notifications {
    use_context::<Notifications>().expect("Notifications must be provided by a parent component")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banners_stack_without_deduplication() {
        let runtime = create_runtime();
        let notifications = Notifications::new();

        notifications.notify("Analysis failed. Please try again.");
        notifications.notify("Analysis failed. Please try again.");

        let items = notifications.items();
        assert_eq!(items.len(), 2);
        assert_ne!(items[0].id, items[1].id);
        assert_eq!(items[0].message, items[1].message);

        runtime.dispose();
    }
}
