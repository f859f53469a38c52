use crate::routes::routes::AppRoutes;
use crate::system::auth::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // The bearer token lives in AuthProvider's context so pages never
    // touch browser storage directly.
    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
    }
}
