use crate::domain::a001_connector::ui::list::ConnectorsPage;
use crate::domain::a002_obsidian_vault::ui::details::AddObsidianConnectorPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <p style="padding: 20px;">"Page not found"</p> }>
                <Route
                    path=path!("/dashboard/:search_space_id/connectors")
                    view=ConnectorsPage
                />
                <Route
                    path=path!("/dashboard/:search_space_id/connectors/add/obsidian-connector")
                    view=AddObsidianConnectorPage
                />
            </Routes>
        </Router>
    }
}
