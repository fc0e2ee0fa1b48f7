use yew::prelude::*;
use yew::events::SubmitEvent;
use yew_router::prelude::*;
use web_sys::HtmlInputElement;
use log::debug;

use crate::auth::AuthContext;
use crate::Route;

#[function_component(Login)]
pub fn login() -> Html {
    let auth = use_context::<AuthContext>();
    let authenticated = auth.as_ref().map_or(false, |auth| auth.state.is_authenticated());
    let auth_error = auth.as_ref().and_then(|auth| auth.state.error.clone());
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(String::new);
    // only surface auth errors raised by this form
    let submitted = use_state(|| false);

    let navigator = use_navigator();

    // Redirect to the dashboard once signed in, including on arrival
    {
        let navigator = navigator.clone();
        use_effect_with(authenticated, move |authenticated| {
            if *authenticated {
                debug!("User authenticated, redirecting to dashboard");
                if let Some(navigator) = &navigator {
                    navigator.push(&Route::Dashboard);
                }
            }
            || ()
        });
    }

    {
        let error = error.clone();
        let submitted = *submitted;
        use_effect_with((auth_error, submitted), move |(auth_error, submitted)| {
            if *submitted {
                if let Some(message) = auth_error {
                    error.set(message.clone());
                }
            }
            || ()
        });
    }

    let Some(auth) = auth else {
        return html! {};
    };

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let submitted = submitted.clone();
        let login = auth.login.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let email = email.trim().to_string();
            let password = password.to_string();

            if email.is_empty() || password.is_empty() {
                error.set("Please enter both email and password".to_string());
                return;
            }

            error.set(String::new());
            submitted.set(true);
            login.emit((email, password));
        })
    };

    let onemailchange = {
        let email = email.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let onpasswordchange = {
        let password = password.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let loading = auth.state.loading;

    html! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-gray-900">
                        {"Sign in to your account"}
                    </h2>
                    <p class="mt-2 text-center text-sm text-gray-600">
                        {"Or "}
                        <Link<Route> to={Route::Register} classes="font-medium text-indigo-600 hover:text-indigo-500">
                            {"create a new account"}
                        </Link<Route>>
                    </p>
                </div>
                <form class="mt-8 space-y-6" onsubmit={onsubmit}>
                    <div class="rounded-md shadow-sm -space-y-px">
                        <div>
                            <label for="email" class="sr-only">{"Email address"}</label>
                            <input
                                id="email"
                                name="email"
                                type="email"
                                required=true
                                class="appearance-none rounded-none relative block w-full px-3 py-2 border border-gray-300 placeholder-gray-500 text-gray-900 rounded-t-md focus:outline-none focus:ring-indigo-500 focus:border-indigo-500 focus:z-10 sm:text-sm"
                                placeholder="Email address"
                                onchange={onemailchange}
                            />
                        </div>
                        <div>
                            <label for="password" class="sr-only">{"Password"}</label>
                            <input
                                id="password"
                                name="password"
                                type="password"
                                required=true
                                class="appearance-none rounded-none relative block w-full px-3 py-2 border border-gray-300 placeholder-gray-500 text-gray-900 rounded-b-md focus:outline-none focus:ring-indigo-500 focus:border-indigo-500 focus:z-10 sm:text-sm"
                                placeholder="Password"
                                onchange={onpasswordchange}
                            />
                        </div>
                    </div>

                    if !error.is_empty() {
                        <div class="text-red-500 text-sm text-center">
                            {error.to_string()}
                        </div>
                    }

                    <div>
                        <button
                            type="submit"
                            disabled={loading}
                            class="group relative w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-white bg-indigo-600 hover:bg-indigo-700 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-indigo-500 disabled:opacity-50"
                        >
                            {if loading { "Signing in..." } else { "Sign in" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
