use leptos::*;

use crate::api::ApiClient;
use crate::models::{days_in_month, AnalysisRequest, FormFields, FormSnapshot, Month};
use crate::state::{use_analysis, use_notifications};

/// Analysis parameter form. Selectors are read both live (signals) and at
/// submit time (node refs); checkbox flags come from checkbox state only.
#[component]
pub fn AnalysisForm() -> impl IntoView {
    let analysis = use_analysis();
    let notifications = use_notifications();
    let client = ApiClient::new();

    // Live control values, tracked while the operator edits the form
    let (room_type, set_room_type) = create_signal("2".to_string());
    let (month, set_month) = create_signal("January".to_string());
    let (day, set_day) = create_signal(1u8);
    let (mode, set_mode) = create_signal("basic".to_string());

    let room_type_ref = create_node_ref::<html::Select>();
    let month_ref = create_node_ref::<html::Select>();
    let day_ref = create_node_ref::<html::Select>();
    let mode_ref = create_node_ref::<html::Select>();
    let anomalies_ref = create_node_ref::<html::Input>();
    let trends_ref = create_node_ref::<html::Input>();

    let day_count = create_memo(move |_| days_in_month(&month.get()));

    let on_month_change = move |ev: ev::Event| {
        let value = event_target_value(&ev);
        let days = days_in_month(&value);
        set_month.set(value);
        // A shrinking range never keeps an out-of-range day selected
        if day.get_untracked() > days {
            set_day.set(1);
        }
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let snapshot = FormSnapshot {
            submitted: FormFields {
                room_type: room_type_ref.get().map(|el| el.value()),
                month: month_ref.get().map(|el| el.value()),
                day: day_ref.get().map(|el| el.value()),
                mode: mode_ref.get().map(|el| el.value()),
            },
            live: FormFields {
                room_type: Some(room_type.get_untracked()),
                month: Some(month.get_untracked()),
                day: Some(day.get_untracked().to_string()),
                mode: Some(mode.get_untracked()),
            },
            show_anomalies: anomalies_ref.get().map(|el| el.checked()).unwrap_or(true),
            show_trends: trends_ref.get().map(|el| el.checked()).unwrap_or(true),
        };

        match AnalysisRequest::from_form(&snapshot) {
            Ok(request) => analysis.submit(client.clone(), request, notifications),
            Err(e) => {
                log::warn!("rejected analysis request: {e}");
                notifications.notify(e.to_string());
            }
        }
    };

    view! {
        <form class="analysis-form" on:submit=on_submit>
            <div class="form-grid">
                <div class="form-field">
                    <label for="room-type">"Room Type"</label>
                    <select
                        id="room-type"
                        node_ref=room_type_ref
                        on:change=move |ev| set_room_type.set(event_target_value(&ev))
                    >
                        <option value="2">"2 Bedroom"</option>
                        <option value="4">"4 Bedroom"</option>
                        <option value="6">"6 Bedroom"</option>
                    </select>
                </div>

                <div class="form-field">
                    <label for="month">"Month"</label>
                    <select id="month" node_ref=month_ref on:change=on_month_change>
                        {Month::ALL
                            .iter()
                            .map(|m| view! { <option value=m.as_str()>{m.as_str()}</option> })
                            .collect_view()}
                    </select>
                </div>

                <div class="form-field">
                    <label for="day">"Day"</label>
                    <select
                        id="day"
                        node_ref=day_ref
                        prop:value=move || day.get().to_string()
                        on:change=move |ev| set_day.set(event_target_value(&ev).parse().unwrap_or(1))
                    >
                        {move || {
                            (1..=day_count.get())
                                .map(|d| view! { <option value=d.to_string()>{d.to_string()}</option> })
                                .collect_view()
                        }}
                    </select>
                </div>

                <div class="form-field">
                    <label for="analysis-mode">"Analysis Mode"</label>
                    <select
                        id="analysis-mode"
                        node_ref=mode_ref
                        on:change=move |ev| set_mode.set(event_target_value(&ev))
                    >
                        <option value="basic">"Basic"</option>
                        <option value="enhanced">"Enhanced"</option>
                    </select>
                </div>
            </div>

            <div class="form-options">
                <label class="checkbox-label">
                    <input type="checkbox" node_ref=anomalies_ref checked=true />
                    "Show anomalies"
                </label>
                <label class="checkbox-label">
                    <input type="checkbox" node_ref=trends_ref checked=true />
                    "Show trends"
                </label>
            </div>

            <button type="submit" class="analyze-button">
                "Run Analysis"
            </button>
        </form>
    }
}
