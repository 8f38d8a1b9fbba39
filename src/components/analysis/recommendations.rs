use leptos::*;

/// Recommendation rows in the order the service supplied them. The list is
/// rebuilt wholesale on every render pass.
#[component]
pub fn RecommendationsList(items: Vec<String>) -> impl IntoView {
    let rows = if items.is_empty() {
        view! { <p class="placeholder-text">"No recommendations for this day"</p> }.into_view()
    } else {
        view! {
            <ul class="recommendations">
                {items
                    .iter()
                    .map(|text| {
                        view! {
                            <li class="recommendation">
                                <span class="recommendation-icon">"\u{1f4a1}"</span>
                                {text.clone()}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        }
        .into_view()
    };

    view! {
        <div class="card recommendations-card">
            <h3>"Recommendations"</h3>
            {rows}
        </div>
    }
}
