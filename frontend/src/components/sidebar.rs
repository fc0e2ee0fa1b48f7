use crate::auth::AuthContext;
use crate::components::common_modal::Modal;
use crate::Route;
use shared::navigation::{is_active, nav_items, NavIcon};
use yew::prelude::*;
use yew_router::prelude::*;

fn icon(icon: NavIcon) -> &'static str {
    match icon {
        NavIcon::Home => "⌂",
        NavIcon::Calendar => "📅",
        NavIcon::Inbox => "✉",
        NavIcon::Chart => "📊",
        NavIcon::Trophy => "🏆",
    }
}

#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    let auth = use_context::<AuthContext>();
    let pathname = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_default();
    let profile_open = use_state(|| false);

    let Some(auth) = auth else {
        return html! {};
    };

    let role = auth.state.role().unwrap_or_default();
    let username = auth
        .state
        .user
        .as_ref()
        .map(|u| u.username.clone())
        .unwrap_or_default();

    let open_profile = {
        let profile_open = profile_open.clone();
        Callback::from(move |_: MouseEvent| profile_open.set(true))
    };
    let close_profile = {
        let profile_open = profile_open.clone();
        Callback::from(move |_| profile_open.set(false))
    };
    let on_sign_out = {
        let logout = auth.logout.clone();
        Callback::from(move |_: MouseEvent| logout.emit(()))
    };

    let field = |value: Option<&str>| value.filter(|v| !v.is_empty()).unwrap_or("N/A").to_string();
    let user = auth.state.user.as_ref();

    html! {
        <div class="hidden md:flex md:flex-shrink-0">
            <div class="flex flex-col w-64">
                <div class="flex flex-col h-0 flex-1 bg-gray-800">
                    <div class="flex-1 flex flex-col pt-5 pb-4 overflow-y-auto">
                        <div class="flex items-center flex-shrink-0 px-4">
                            <span class="text-white text-xl font-semibold">{"Campus Events"}</span>
                        </div>
                        <nav class="mt-5 flex-1 px-2 space-y-1">
                            {for nav_items(role).iter().filter_map(|item| {
                                let route = Route::recognize(item.href)?;
                                let active = is_active(item.href, &pathname);
                                Some(html! {
                                    <Link<Route>
                                        to={route}
                                        classes={classes!(
                                            "group", "flex", "items-center", "px-2", "py-2", "text-sm", "font-medium", "rounded-md",
                                            if active { "bg-gray-900 text-white" } else { "text-gray-300 hover:bg-gray-700 hover:text-white" }
                                        )}
                                    >
                                        <span class="mr-3 flex-shrink-0 w-6 text-center" aria-hidden="true">{icon(item.icon)}</span>
                                        {item.name}
                                    </Link<Route>>
                                })
                            })}
                        </nav>
                    </div>
                    <div class="flex-shrink-0 flex border-t border-gray-700 p-4">
                        <div class="flex-shrink-0 w-full group block">
                            <div class="flex items-center cursor-pointer" onclick={open_profile}>
                                <div class="ml-3">
                                    <p class="text-sm font-medium text-white hover:underline">{username}</p>
                                    <p class="text-xs font-medium text-gray-300 group-hover:text-gray-200 hover:underline">
                                        {role.label()}
                                    </p>
                                </div>
                            </div>
                            <button
                                onclick={on_sign_out}
                                class="mt-3 text-sm text-gray-400 hover:text-white w-full text-left"
                            >
                                {"Sign out"}
                            </button>
                        </div>
                    </div>
                </div>
            </div>

            <Modal is_open={*profile_open} title="Profile" on_close={close_profile}>
                <div class="space-y-4">
                    <p class="text-gray-800 text-lg">
                        <strong class="text-gray-900">{"Username: "}</strong>
                        {field(user.map(|u| u.username.as_str()))}
                    </p>
                    <p class="text-gray-800 text-lg">
                        <strong class="text-gray-900">{"Email: "}</strong>
                        {field(user.map(|u| u.email.as_str()))}
                    </p>
                    <p class="text-gray-800 text-lg">
                        <strong class="text-gray-900">{"Role: "}</strong>
                        {field(user.map(|u| u.role.as_str()))}
                    </p>
                </div>
            </Modal>
        </div>
    }
}

