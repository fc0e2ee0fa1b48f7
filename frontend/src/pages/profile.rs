use crate::auth::AuthContext;
use yew::prelude::*;

#[function_component(Profile)]
pub fn profile() -> Html {
    let user = use_context::<AuthContext>().and_then(|auth| auth.state.user);
    let username = user.as_ref().map(|u| u.username.clone()).unwrap_or_default();
    let email = user.as_ref().map(|u| u.email.clone()).unwrap_or_default();
    let role = user.as_ref().map(|u| u.role.as_str()).unwrap_or_default();

    html! {
        <div class="p-6 bg-gray-50 shadow-md rounded-md">
            <h1 class="text-2xl font-semibold text-gray-900">{"Profile"}</h1>
            <p class="text-gray-700 mt-2">{"View and edit your profile information."}</p>
            <div class="mt-4">
                <p class="text-gray-800"><strong>{"Username: "}</strong>{username}</p>
                <p class="text-gray-800"><strong>{"Email: "}</strong>{email}</p>
                <p class="text-gray-800"><strong>{"Role: "}</strong>{role}</p>
            </div>
        </div>
    }
}
