//! Sidebar Component
//!
//! Section links that scroll the page smoothly.

use leptos::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use thermo_dashboard::dashboard::{ScrollTarget, Section, SECTIONS};

use crate::state::DashboardState;

/// Sidebar navigation component
#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav class="w-56 shrink-0 bg-gray-800 border-r border-gray-700 min-h-screen sticky top-0">
            <div class="flex items-center space-x-3 px-6 h-16">
                <span class="text-2xl">"🌡️"</span>
                <span class="text-xl font-bold text-white">"Thermo"</span>
            </div>

            <ul class="px-3 space-y-1">
                {SECTIONS
                    .iter()
                    .map(|section| view! { <NavItem section=*section /> })
                    .collect_view()}
            </ul>
        </nav>
    }
}

/// Individual sidebar link
#[component]
fn NavItem(section: Section) -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    let is_active = create_memo(move |_| state.nav.with(|nav| nav.is_active(section.id)));

    let on_click = move |ev: ev::MouseEvent| {
        ev.prevent_default();

        let mut target = None;
        state.nav.update(|nav| target = nav.scroll_to_section(section.id, section.id));

        if let Some(target) = target {
            scroll_into_view(target);
        }
    };

    view! {
        <li>
            <a
                href=format!("#{}", section.id)
                on:click=on_click
                class=move || {
                    let base = "flex items-center space-x-3 px-4 py-2 rounded-lg transition-colors";
                    if is_active.get() {
                        format!("{} bg-gray-700 text-white", base)
                    } else {
                        format!("{} text-gray-300 hover:text-white hover:bg-gray-700", base)
                    }
                }
            >
                <span>{section.icon}</span>
                <span>{section.label}</span>
            </a>
        </li>
    }
}

fn scroll_into_view(target: ScrollTarget) {
    let element = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(target.section));

    if let Some(element) = element {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}
