use crate::auth::AuthContext;
use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let auth = use_context::<AuthContext>();
    let menu_open = use_state(|| false);

    let Some(auth) = auth else {
        return html! {};
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };
    let on_logout = {
        let logout = auth.logout.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            logout.emit(());
        })
    };

    let username = auth
        .state
        .user
        .as_ref()
        .map(|u| u.username.clone())
        .unwrap_or_default();

    html! {
        <nav class="bg-white border-b border-gray-200 shadow-sm">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between h-16">
                    <div class="flex items-center">
                        <Link<Route> to={Route::Dashboard} classes="text-xl font-bold text-indigo-600">
                            {"EventManager"}
                        </Link<Route>>
                    </div>
                    <div class="flex items-center space-x-4">
                        <div class="relative">
                            <button
                                onclick={toggle_menu}
                                class="flex items-center space-x-2 text-sm font-medium text-gray-700 hover:text-indigo-500"
                            >
                                <span>{username}</span>
                            </button>
                            if *menu_open {
                                <div class="absolute right-0 mt-2 w-48 bg-white border rounded-md shadow-lg py-1 z-40">
                                    <div onclick={close_menu}>
                                        <Link<Route> to={Route::Profile} classes="block px-4 py-2 text-sm hover:bg-gray-100">
                                            {"Profile"}
                                        </Link<Route>>
                                    </div>
                                    <button
                                        onclick={on_logout}
                                        class="w-full text-left block px-4 py-2 text-sm hover:bg-gray-100"
                                    >
                                        {"Logout"}
                                    </button>
                                </div>
                            }
                        </div>
                    </div>
                </div>
            </div>
        </nav>
    }
}
