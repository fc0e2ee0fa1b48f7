use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, debug, error};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;
use crate::auth::{AuthProvider, AuthContext};
use crate::components::chatbot::Chatbot;
use crate::components::common_toast::ToastProvider;
use crate::components::navbar::Navbar;
use crate::components::sidebar::Sidebar;

pub mod api;
pub mod auth;
pub mod browser;
pub mod components;
pub mod config;
pub mod pages {
    pub mod analytics;
    pub mod dashboard;
    pub mod edit_event;
    pub mod event_details;
    pub mod event_schedule;
    pub mod event_scores;
    pub mod events;
    pub mod login;
    pub mod new_event;
    pub mod not_found;
    pub mod organizer_event_details;
    pub mod organizer_events;
    pub mod profile;
    pub mod register;
    pub mod registrations;
    pub mod scheduling;
    pub mod sub_event_details;
    pub mod sub_events;
}

use pages::{
    analytics::Analytics, dashboard::Dashboard, edit_event::EditEvent,
    event_details::EventDetails, event_schedule::EventSchedule, event_scores::EventScores,
    events::Events, login::Login, new_event::NewEvent, not_found::NotFound,
    organizer_event_details::OrganizerEventDetails, organizer_events::OrganizerEvents,
    profile::Profile, register::Register, registrations::Registrations,
    scheduling::Scheduling, sub_event_details::SubEventDetails, sub_events::SubEvents,
};

// Unit test modules only
#[cfg(test)]
mod tests;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/dashboard")]
    Dashboard,
    #[at("/dashboard/profile")]
    Profile,
    #[at("/dashboard/events")]
    Events,
    #[at("/dashboard/events/:id")]
    EventDetails { id: String },
    #[at("/dashboard/events/:id/scores")]
    EventScores { id: String },
    #[at("/dashboard/student/registrations")]
    Registrations,
    #[at("/dashboard/organizer/events")]
    OrganizerEvents,
    #[at("/dashboard/organizer/events/new")]
    NewEvent,
    #[at("/dashboard/organizer/events/:id")]
    OrganizerEventDetails { id: String },
    #[at("/dashboard/organizer/events/:id/edit")]
    EditEvent { id: String },
    #[at("/dashboard/organizer/events/:id/schedule")]
    EventSchedule { id: String },
    #[at("/dashboard/organizer/scheduling")]
    Scheduling,
    #[at("/dashboard/organizer/analytics")]
    Analytics,
    #[at("/dashboard/organizer/subevents")]
    SubEvents,
    #[at("/dashboard/organizer/subevents/:event_id/:sub_event_id")]
    SubEventDetails { event_id: String, sub_event_id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
fn app() -> Html {
    debug!("App component rendering");
    html! {
        <ToastProvider>
            <AuthProvider>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </AuthProvider>
        </ToastProvider>
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
}

/// Renders its children only for a signed-in user, sending everyone else to login.
#[function_component(ProtectedRoute)]
pub fn protected_route(props: &Props) -> Html {
    let auth = use_context::<AuthContext>();
    let navigator = use_navigator();
    let loading = auth.as_ref().map(|a| a.state.loading).unwrap_or(false);
    let is_authenticated = auth
        .as_ref()
        .map(|a| a.state.is_authenticated())
        .unwrap_or(false);

    {
        use_effect_with((is_authenticated, loading), move |(is_auth, loading)| {
            if !*is_auth && !*loading {
                debug!("Not signed in, redirecting to login");
                if let Some(navigator) = &navigator {
                    navigator.push(&Route::Login);
                }
            }
            || ()
        });
    }

    if loading {
        html! {
            <div class="flex items-center justify-center min-h-screen bg-gray-50">
                <div class="animate-spin rounded-full h-12 w-12 border-t-2 border-b-2 border-gray-600"></div>
            </div>
        }
    } else if is_authenticated {
        html! {
            <>
                {props.children.clone()}
            </>
        }
    } else {
        html! {}
    }
}

/// Sidebar, top bar and assistant around every dashboard page.
#[function_component(DashboardLayout)]
pub fn dashboard_layout(props: &Props) -> Html {
    html! {
        <ProtectedRoute>
            <div class="flex h-screen bg-gray-50">
                <Sidebar />
                <div class="flex flex-col flex-1 overflow-hidden">
                    <Navbar />
                    <main class="flex-1 overflow-y-auto bg-white p-4 md:p-6 text-gray-800">
                        {props.children.clone()}
                    </main>
                </div>
                <Chatbot />
            </div>
        </ProtectedRoute>
    }
}

fn dashboard_page(page: Html) -> Html {
    html! { <DashboardLayout>{page}</DashboardLayout> }
}

fn switch(routes: Route) -> Html {
    debug!("Route switch: {:?}", routes);
    match routes {
        Route::Home => {
            debug!("Redirecting / to the dashboard");
            html! { <Redirect<Route> to={Route::Dashboard} /> }
        },
        Route::Login => html! { <Login /> },
        Route::Register => html! { <Register /> },
        Route::Dashboard => dashboard_page(html! { <Dashboard /> }),
        Route::Profile => dashboard_page(html! { <Profile /> }),
        Route::Events => dashboard_page(html! { <Events /> }),
        Route::EventDetails { id } => {
            debug!("Rendering event details for: {}", id);
            dashboard_page(html! { <EventDetails {id} /> })
        },
        Route::EventScores { id } => {
            debug!("Rendering scores for event: {}", id);
            dashboard_page(html! { <EventScores {id} /> })
        },
        Route::Registrations => dashboard_page(html! { <Registrations /> }),
        Route::OrganizerEvents => dashboard_page(html! { <OrganizerEvents /> }),
        Route::NewEvent => dashboard_page(html! { <NewEvent /> }),
        Route::OrganizerEventDetails { id } => {
            debug!("Rendering organizer view of event: {}", id);
            dashboard_page(html! { <OrganizerEventDetails {id} /> })
        },
        Route::EditEvent { id } => {
            debug!("Rendering edit form for event: {}", id);
            dashboard_page(html! { <EditEvent {id} /> })
        },
        Route::EventSchedule { id } => {
            debug!("Rendering schedule for event: {}", id);
            dashboard_page(html! { <EventSchedule {id} /> })
        },
        Route::Scheduling => dashboard_page(html! { <Scheduling /> }),
        Route::Analytics => dashboard_page(html! { <Analytics /> }),
        Route::SubEvents => dashboard_page(html! { <SubEvents /> }),
        Route::SubEventDetails { event_id, sub_event_id } => {
            debug!("Rendering sub-event {} of event {}", sub_event_id, event_id);
            dashboard_page(html! { <SubEventDetails {event_id} {sub_event_id} /> })
        },
        Route::NotFound => {
            debug!("Rendering 404 Not Found");
            html! { <NotFound /> }
        },
    }
}

#[wasm_bindgen]
pub async fn run_app() -> Result<(), JsValue> {
    // Initialize logging
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    info!("Logger initialized");

    // Set up panic hook
    console_error_panic_hook::set_once();
    info!("Panic hook set");

    info!("Mounting application");
    yew::Renderer::<App>::new().render();
    info!("Application mounted");

    Ok(())
}

// Entry point Trunk calls
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = run_app().await {
            error!("Failed to run app: {:?}", e);
        }
    });
    Ok(())
}
