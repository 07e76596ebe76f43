use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod analytics;
mod config;
mod dom;
mod page_effects;
mod forms {
    pub mod flow;
    pub mod form;
    pub mod rules;
    pub mod state;
    pub mod submit;
}
mod components {
    pub mod anchor;
    pub mod counter;
    pub mod in_view;
    pub mod nav;
    pub mod notification;
    pub mod reveal;
}
mod pages {
    pub mod faq;
    pub mod home;
    pub mod not_found;
}

use components::{nav::Nav, notification::NotificationProvider};
use page_effects::use_page_effects;
use pages::{home::Home, not_found::NotFound};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    use_page_effects();

    html! {
        <BrowserRouter>
            <NotificationProvider>
                <Nav />
                <Switch<Route> render={switch} />
            </NotificationProvider>
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    dom::preload_stylesheet(config::FONT_STYLESHEET);

    info!("Starting application");
    yew::Renderer::<App>::new().render();
    info!("Digital Crew Solution website initialized successfully!");
}
