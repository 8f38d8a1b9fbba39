use leptos::*;

use crate::api::ApiClient;
use crate::components::{AnalysisForm, Layout, NotificationArea, ResultsSection};
use crate::state::{provide_analysis_context, provide_notifications, provide_theme_context};

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    // Provide shared state at the app root
    provide_theme_context();
    provide_notifications();
    provide_analysis_context();

    // One startup probe of the analysis service; outcome is log-only
    spawn_local(async {
        let client = ApiClient::new();
        match client.health().await {
            Ok(health) => log::info!("analysis service reachable: {} {}", health.service, health.version),
            Err(e) => log::warn!("analysis service health check failed: {e}"),
        }
    });

    view! {
        <Layout>
            <AnalysisForm />
            <ResultsSection />
        </Layout>
        <NotificationArea />
    }
}
