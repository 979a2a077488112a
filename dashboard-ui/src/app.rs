//! App Root Component
//!
//! Page layout: sidebar on the left, the four dashboard sections on the right.

use leptos::*;

use crate::components::{
    CurrentCard, Filters, HistoryTable, Sidebar, SummaryCards, TemperatureChart,
};
use crate::state::provide_dashboard_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let state = provide_dashboard_state();

    let polling = state.start();
    on_cleanup(move || polling.stop());

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex">
            <Sidebar />

            <main class="flex-1 px-6 py-8 space-y-8 max-w-6xl mx-auto">
                <header>
                    <h1 class="text-3xl font-bold">"Temperature Dashboard"</h1>
                    <p class="text-gray-400 mt-1">"Live readings from the sensor API"</p>
                </header>

                <section id="current">
                    <CurrentCard />
                </section>

                <section id="chart" class="bg-gray-800 rounded-xl p-6 space-y-4">
                    <h2 class="text-xl font-semibold">"Temperature"</h2>
                    <Filters />
                    <TemperatureChart />
                </section>

                <section id="statistics">
                    <h2 class="text-lg font-semibold mb-4">"Statistics"</h2>
                    <SummaryCards />
                </section>

                <section id="history" class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"History"</h2>
                    <HistoryTable />
                </section>
            </main>
        </div>
    }
}
