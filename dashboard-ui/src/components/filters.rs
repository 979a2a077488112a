//! Window Filters
//!
//! Start/end inputs with apply, reset and the preset shortcuts.

use leptos::*;

use thermo_dashboard::window::{Preset, WindowInputs};

use crate::state::DashboardState;

/// Filter panel component
#[component]
pub fn Filters() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    let on_start = move |ev| {
        let value = event_target_value(&ev);
        state.inputs.update(|inputs| inputs.start = value);
    };
    let on_end = move |ev| {
        let value = event_target_value(&ev);
        state.inputs.update(|inputs| inputs.end = value);
    };

    view! {
        <div class="flex flex-wrap items-end gap-4">
            <label class="flex flex-col text-sm text-gray-400">
                "From"
                <input
                    type="datetime-local"
                    class="mt-1 bg-gray-700 text-white rounded-lg px-3 py-2"
                    prop:value=move || state.inputs.with(|i: &WindowInputs| i.start.clone())
                    on:input=on_start
                />
            </label>
            <label class="flex flex-col text-sm text-gray-400">
                "To"
                <input
                    type="datetime-local"
                    class="mt-1 bg-gray-700 text-white rounded-lg px-3 py-2"
                    prop:value=move || state.inputs.with(|i: &WindowInputs| i.end.clone())
                    on:input=on_end
                />
            </label>

            <button
                on:click=move |_| state.apply()
                class="px-4 py-2 rounded-lg text-sm font-medium bg-indigo-600 hover:bg-indigo-700 text-white"
            >
                "Apply"
            </button>
            <PresetButton preset=Preset::Reset />

            <div class="flex space-x-2">
                <PresetButton preset=Preset::Last24Hours />
                <PresetButton preset=Preset::Last7Days />
                <PresetButton preset=Preset::Last30Days />
            </div>
        </div>
    }
}

/// Window shortcut button
#[component]
fn PresetButton(preset: Preset) -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    view! {
        <button
            on:click=move |_| state.apply_preset(preset)
            class="px-4 py-2 rounded-lg text-sm font-medium bg-gray-700 text-gray-300 hover:bg-gray-600"
        >
            {preset.label()}
        </button>
    }
}
