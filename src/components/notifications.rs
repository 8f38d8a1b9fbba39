use leptos::*;

use crate::state::use_notifications;

/// Stacked transient error banners
#[component]
pub fn NotificationArea() -> impl IntoView {
    let notifications = use_notifications();

    view! {
        <div class="notifications">
            <For
                each=move || notifications.items()
                key=|n| n.id
                children=move |n| {
                    view! { <div class="notification notification-error">{n.message}</div> }
                }
            />
        </div>
    }
}
