use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found" style="min-height: 70vh; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 1rem; padding: 8rem 2rem 4rem;">
            <h1 style="font-size: 3rem; color: #111827;">{"404"}</h1>
            <p style="color: #6b7280;">{"This page drifted off course."}</p>
            <Link<Route> to={Route::Home} classes="btn btn-primary">
                {"Back to home"}
            </Link<Route>>
        </div>
    }
}
