//! Summary Cards

use leptos::*;

use thermo_dashboard::render::{format, SummaryPanel};

use crate::state::DashboardState;

/// Average / max / min / count cards
#[component]
pub fn SummaryCards() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let summary = state.summary;

    view! {
        <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
            <StatCard label="Average" unit=true value=move || summary.with(|s: &SummaryPanel| s.average.clone()) />
            <StatCard label="Maximum" unit=true value=move || summary.with(|s: &SummaryPanel| s.max.clone()) />
            <StatCard label="Minimum" unit=true value=move || summary.with(|s: &SummaryPanel| s.min.clone()) />
            <StatCard label="Readings" unit=false value=move || summary.with(|s: &SummaryPanel| s.count.clone()) />
        </div>
    }
}

#[component]
fn StatCard<F>(label: &'static str, unit: bool, value: F) -> impl IntoView
where
    F: Fn() -> String + 'static,
{
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700">
            <span class="text-gray-400 text-sm">{label}</span>
            <div class="text-3xl font-bold mt-2">
                {value}
                {unit.then(|| view! {
                    <span class="text-base text-gray-500 ml-1">{format::UNIT}</span>
                })}
            </div>
        </div>
    }
}
