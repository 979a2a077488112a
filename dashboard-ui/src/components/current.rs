//! Current Temperature Card

use leptos::*;

use thermo_dashboard::render::format;

use crate::state::DashboardState;

/// Latest reading with the API status dot
#[component]
pub fn CurrentCard() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    view! {
        <div class="bg-gray-800 rounded-xl p-6 border border-gray-700">
            <div class="flex items-center justify-between">
                <span class="text-gray-400 text-sm">"Current temperature"</span>
                <span class="flex items-center space-x-2 text-sm text-gray-400">
                    <span class=move || state.status.get().css_class() />
                    <span>{move || state.status.get().label()}</span>
                </span>
            </div>

            <div class="text-5xl font-bold mt-4">
                {move || {
                    state.current.get()
                        .map(|c| c.temperature)
                        .unwrap_or_else(|| format::PLACEHOLDER.to_string())
                }}
                <span class="text-2xl text-gray-400 ml-2">{format::UNIT}</span>
            </div>

            <div class="text-sm text-gray-500 mt-2">
                {move || state.current.get().map(|c| c.updated).unwrap_or_default()}
            </div>
        </div>
    }
}
