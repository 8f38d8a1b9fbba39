use leptos::*;

use crate::state::{use_theme, Theme};

/// Layout component with navbar and page content
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="layout">
            <Navbar />
            <main class="main-content">{children()}</main>
        </div>
    }
}

/// Navbar with title and theme toggle
#[component]
fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="navbar-content">
                <h1 class="navbar-title">"Energy Consumption Analyzer"</h1>
                <div class="navbar-actions">
                    <ThemeToggle />
                </div>
            </div>
        </nav>
    }
}

/// Theme toggle button
#[component]
fn ThemeToggle() -> impl IntoView {
    let theme_ctx = use_theme();

    let icon = move || {
        match theme_ctx.theme.get() {
            Theme::Light => "\u{1f319}", // Show what clicking will do
            Theme::Dark => "\u{2600}\u{fe0f}",
        }
    };

    view! {
        <button
            class="theme-toggle"
            aria-label="Toggle theme"
            on:click=move |_| theme_ctx.toggle()
        >
            {icon}
        </button>
    }
}
