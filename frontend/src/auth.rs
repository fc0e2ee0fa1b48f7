use crate::api::auth;
use crate::config::{TOKEN_KEY, USER_KEY};
use gloo_storage::{LocalStorage, Storage};
use log::{debug, error};
use shared::{ApiError, AuthResponse, RegisterRequest, UserDto, UserRole};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::functional::use_reducer_eq;
use yew::prelude::*;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<UserDto>,
    pub token: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
}

impl AuthState {
    fn from_storage() -> Self {
        let token = LocalStorage::get::<String>(TOKEN_KEY).ok();
        let user = LocalStorage::get::<UserDto>(USER_KEY).ok();
        match (user, token) {
            (Some(user), Some(token)) => Self {
                user: Some(user),
                token: Some(token),
                ..Default::default()
            },
            _ => Self::default(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }

    pub fn role(&self) -> Option<UserRole> {
        self.user.as_ref().map(|user| user.role)
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user.as_ref().map(|user| user.id.as_str())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum AuthAction {
    Started,
    Succeeded(AuthResponse),
    Failed(String),
    LoggedOut,
}

impl Reducible for AuthState {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AuthAction::Started => Rc::new(Self {
                loading: true,
                error: None,
                ..(*self).clone()
            }),
            AuthAction::Succeeded(AuthResponse { token, user }) => {
                if let Err(e) = LocalStorage::set(TOKEN_KEY, &token) {
                    error!("Failed to store token in local storage: {}", e);
                }
                if let Err(e) = LocalStorage::set(USER_KEY, &user) {
                    error!("Failed to store user in local storage: {}", e);
                }
                Rc::new(Self {
                    user: Some(user),
                    token: Some(token),
                    loading: false,
                    error: None,
                })
            }
            AuthAction::Failed(error) => Rc::new(Self {
                user: None,
                token: None,
                loading: false,
                error: Some(error),
            }),
            AuthAction::LoggedOut => {
                LocalStorage::delete(TOKEN_KEY);
                LocalStorage::delete(USER_KEY);
                Rc::new(Self::default())
            }
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct AuthProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AuthContext {
    pub state: AuthState,
    pub login: Callback<(String, String)>,
    pub register: Callback<RegisterRequest>,
    pub logout: Callback<()>,
}

fn failure_message(err: &ApiError, fallback: &str) -> String {
    error!("Authentication request failed: {}", err);
    err.user_message(fallback)
}

#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let auth = use_reducer_eq(AuthState::from_storage);

    let login = {
        let auth = auth.clone();
        Callback::from(move |(email, password): (String, String)| {
            let auth = auth.clone();
            auth.dispatch(AuthAction::Started);
            spawn_local(async move {
                match auth::login(&email, &password).await {
                    Ok(response) => auth.dispatch(AuthAction::Succeeded(response)),
                    Err(e) => auth.dispatch(AuthAction::Failed(failure_message(
                        &e,
                        "Login failed. Please check your credentials.",
                    ))),
                }
            });
        })
    };

    let register = {
        let auth = auth.clone();
        Callback::from(move |request: RegisterRequest| {
            let auth = auth.clone();
            auth.dispatch(AuthAction::Started);
            spawn_local(async move {
                match auth::register(&request).await {
                    Ok(response) => auth.dispatch(AuthAction::Succeeded(response)),
                    Err(e) => auth.dispatch(AuthAction::Failed(failure_message(
                        &e,
                        "Registration failed. Please try again.",
                    ))),
                }
            });
        })
    };

    let logout = {
        let auth = auth.clone();
        Callback::from(move |_: ()| {
            debug!("Signing out");
            auth.dispatch(AuthAction::LoggedOut);
        })
    };

    let context = AuthContext {
        state: (*auth).clone(),
        login,
        register,
        logout,
    };

    html! {
        <ContextProvider<AuthContext> context={context}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}
