use crate::auth::AuthContext;
use crate::Route;
use log::debug;
use shared::catalog::DEPARTMENTS;
use shared::forms::register_form::RegisterField;
use shared::{RegisterForm, UserRole};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

const INPUT_CLASS: &str = "mt-1 appearance-none relative block w-full px-3 py-2 border border-gray-300 placeholder-gray-500 text-gray-900 rounded-md focus:outline-none focus:ring-indigo-500 focus:border-indigo-500 sm:text-sm";
const SELECT_CLASS: &str = "mt-1 block w-full pl-3 pr-10 py-2 text-base text-black border-gray-300 focus:outline-none focus:ring-indigo-500 focus:border-indigo-500 sm:text-sm rounded-md";

/// Account sign-up with department-dependent course choices.
#[function_component(Register)]
pub fn register() -> Html {
    let auth = use_context::<AuthContext>();
    let authenticated = auth.as_ref().map_or(false, |auth| auth.state.is_authenticated());
    let auth_error = auth.as_ref().and_then(|auth| auth.state.error.clone());
    let form = use_state(RegisterForm::default);
    let error = use_state(String::new);
    let submitted = use_state(|| false);

    let navigator = use_navigator();

    {
        let navigator = navigator.clone();
        use_effect_with(authenticated, move |authenticated| {
            if *authenticated {
                debug!("Account ready, redirecting to dashboard");
                if let Some(navigator) = &navigator {
                    navigator.push(&Route::Dashboard);
                }
            }
            || ()
        });
    }

    {
        let error = error.clone();
        use_effect_with((auth_error, *submitted), move |(auth_error, submitted)| {
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

    let text_input = |field: RegisterField| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*form).clone();
            next.set(field, e.target_unchecked_into::<HtmlInputElement>().value());
            form.set(next);
        })
    };

    let on_role = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            let mut next = (*form).clone();
            next.set_role(value.parse().unwrap_or_default());
            form.set(next);
        })
    };

    let on_department = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let mut next = (*form).clone();
            next.set_department(e.target_unchecked_into::<HtmlSelectElement>().value());
            form.set(next);
        })
    };

    let on_course = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let mut next = (*form).clone();
            next.set_course(e.target_unchecked_into::<HtmlSelectElement>().value());
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let error = error.clone();
        let submitted = submitted.clone();
        let register = auth.register.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match form.to_request() {
                Ok(request) => {
                    error.set(String::new());
                    submitted.set(true);
                    register.emit(request);
                }
                Err(e) => error.set(e.to_string()),
            }
        })
    };

    let loading = auth.state.loading;

    html! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-gray-900">{"Create a new account"}</h2>
                    <p class="mt-2 text-center text-sm text-gray-600">
                        {"Or "}
                        <Link<Route> to={Route::Login} classes="font-medium text-indigo-600 hover:text-indigo-500">
                            {"sign in to your account"}
                        </Link<Route>>
                    </p>
                </div>

                if !error.is_empty() {
                    <div class="bg-red-50 border-l-4 border-red-500 p-4">
                        <p class="text-red-700">{error.to_string()}</p>
                    </div>
                }

                <form class="mt-8 space-y-6" {onsubmit}>
                    <div class="rounded-md shadow-sm space-y-4 m-6 p-4">
                        <div>
                            <label for="username" class="block text-sm font-medium text-gray-700">{"Username"}</label>
                            <input id="username" name="username" type="text" required=true class={INPUT_CLASS}
                                placeholder="Username" value={form.username.clone()} oninput={text_input(RegisterField::Username)} />
                        </div>
                        <div>
                            <label for="email" class="block text-sm font-medium text-gray-700">{"Email address"}</label>
                            <input id="email" name="email" type="email" autocomplete="email" required=true class={INPUT_CLASS}
                                placeholder="Email address" value={form.email.clone()} oninput={text_input(RegisterField::Email)} />
                        </div>
                        <div>
                            <label for="password" class="block text-sm font-medium text-gray-700">{"Password"}</label>
                            <input id="password" name="password" type="password" autocomplete="new-password" required=true class={INPUT_CLASS}
                                placeholder="Password" value={form.password.clone()} oninput={text_input(RegisterField::Password)} />
                            <p class="mt-1 text-xs text-gray-500">
                                {"Password must be at least 6 characters with a number, uppercase and lowercase letter."}
                            </p>
                        </div>
                        <div>
                            <label for="role" class="block text-sm font-medium text-gray-700">{"Role"}</label>
                            <select id="role" name="role" required=true class={SELECT_CLASS} onchange={on_role}>
                                {for [UserRole::Student, UserRole::Organizer].into_iter().map(|role| html! {
                                    <option value={role.as_str()} selected={form.role == role}>{role.label()}</option>
                                })}
                            </select>
                        </div>
                        <div>
                            <label for="department" class="block text-sm font-medium text-gray-700">{"Department"}</label>
                            <select id="department" name="department" required=true class={SELECT_CLASS} onchange={on_department}>
                                <option value="" selected={form.department.is_empty()}>{"Select department"}</option>
                                {for DEPARTMENTS.iter().map(|dept| html! {
                                    <option key={*dept} value={*dept} selected={form.department == *dept}>{*dept}</option>
                                })}
                            </select>
                        </div>
                        <div>
                            <label for="course" class="block text-sm font-medium text-gray-700">{"Course"}</label>
                            <select id="course" name="course" required=true class={SELECT_CLASS}
                                onchange={on_course} disabled={form.course_disabled()}>
                                <option value="" selected={form.course.is_empty()}>{"Select course"}</option>
                                {for form.course_options().iter().map(|course| html! {
                                    <option key={*course} value={*course} selected={form.course == *course}>{*course}</option>
                                })}
                            </select>
                        </div>
                    </div>
                    <div>
                        <button
                            type="submit"
                            disabled={loading}
                            class="group relative w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-white bg-indigo-600 hover:bg-indigo-700 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-indigo-500"
                        >
                            {if loading { "Creating account..." } else { "Create account" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
