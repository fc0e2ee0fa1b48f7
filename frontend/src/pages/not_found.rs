use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="min-h-screen flex flex-col items-center justify-center bg-gray-50">
            <h1 class="text-3xl font-bold text-gray-900">{"404 - Page Not Found"}</h1>
            <p class="mt-2 text-gray-600">{"The page you're looking for doesn't exist."}</p>
            <Link<Route> to={Route::Dashboard} classes="mt-4 text-indigo-600 hover:text-indigo-500">
                {"Back to dashboard"}
            </Link<Route>>
        </div>
    }
}
