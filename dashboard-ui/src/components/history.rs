//! History Table

use leptos::*;

use thermo_dashboard::render::TableRow;

use crate::state::DashboardState;

/// Most recent readings, oldest first
#[component]
pub fn HistoryTable() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    view! {
        <table class="w-full text-sm">
            <thead>
                <tr class="text-left text-gray-400 border-b border-gray-700">
                    <th class="py-2">"Time"</th>
                    <th class="py-2">"Temperature"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    state.rows.get()
                        .into_iter()
                        .map(|row| match row {
                            TableRow::Reading { time, temperature } => view! {
                                <tr class="border-b border-gray-700/50">
                                    <td class="py-2 text-gray-300">{time}</td>
                                    <td class="py-2 font-medium">{temperature}</td>
                                </tr>
                            },
                            TableRow::Placeholder { message } => view! {
                                <tr>
                                    <td colspan="2" class="py-6 text-center text-gray-500">{message}</td>
                                </tr>
                            },
                        })
                        .collect_view()
                }}
            </tbody>
        </table>
    }
}
