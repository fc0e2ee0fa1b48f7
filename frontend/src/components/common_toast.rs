use gloo_timers::callback::Timeout;
use uuid::Uuid;
use yew::prelude::*;

/// How long a notice stays up unless dismissed.
pub const DEFAULT_TOAST_MS: u32 = 5000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastType {
    Success,
    Error,
    Info,
}

impl ToastType {
    fn classes(&self) -> &'static str {
        match self {
            ToastType::Success => "bg-green-500 border-green-600",
            ToastType::Error => "bg-red-500 border-red-600",
            ToastType::Info => "bg-gray-700 border-gray-800",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ToastType::Success => "✓",
            ToastType::Error => "✕",
            ToastType::Info => "ℹ",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub toast_type: ToastType,
    /// Milliseconds, `None` for manual dismiss
    pub duration: Option<u32>,
}

impl Toast {
    pub fn new(message: impl Into<String>, toast_type: ToastType) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            toast_type,
            duration: Some(DEFAULT_TOAST_MS),
        }
    }

    pub fn with_duration(mut self, duration: u32) -> Self {
        self.duration = Some(duration);
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastContext {
    pub toasts: Vec<Toast>,
    pub add_toast: Callback<Toast>,
    pub remove_toast: Callback<Uuid>,
}

impl ToastContext {
    pub fn success(&self, message: impl Into<String>) {
        self.add_toast.emit(Toast::new(message, ToastType::Success));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.add_toast
            .emit(Toast::new(message, ToastType::Error).with_duration(8000));
    }

    pub fn info(&self, message: impl Into<String>) {
        self.add_toast.emit(Toast::new(message, ToastType::Info));
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let toasts = use_reducer(ToastList::default);

    let add_toast = {
        let toasts = toasts.clone();
        Callback::from(move |toast: Toast| {
            let toast_id = toast.id;
            let duration = toast.duration;
            toasts.dispatch(ToastListAction::Push(toast));

            if let Some(duration_ms) = duration {
                let toasts = toasts.clone();
                Timeout::new(duration_ms, move || {
                    toasts.dispatch(ToastListAction::Remove(toast_id));
                })
                .forget();
            }
        })
    };

    let remove_toast = {
        let toasts = toasts.clone();
        Callback::from(move |id: Uuid| toasts.dispatch(ToastListAction::Remove(id)))
    };

    let context = ToastContext {
        toasts: toasts.items.clone(),
        add_toast,
        remove_toast,
    };

    html! {
        <ContextProvider<ToastContext> context={context}>
            {props.children.clone()}
            <ToastStack />
        </ContextProvider<ToastContext>>
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
struct ToastList {
    items: Vec<Toast>,
}

enum ToastListAction {
    Push(Toast),
    Remove(Uuid),
}

impl Reducible for ToastList {
    type Action = ToastListAction;

    fn reduce(self: std::rc::Rc<Self>, action: Self::Action) -> std::rc::Rc<Self> {
        let mut items = self.items.clone();
        match action {
            ToastListAction::Push(toast) => items.push(toast),
            ToastListAction::Remove(id) => items.retain(|t| t.id != id),
        }
        std::rc::Rc::new(ToastList { items })
    }
}

#[function_component(ToastStack)]
fn toast_stack() -> Html {
    let Some(toast_context) = use_context::<ToastContext>() else {
        return html! {};
    };

    html! {
        <div class="fixed top-4 right-4 z-50 space-y-2">
            {for toast_context.toasts.iter().map(|toast| html! {
                <ToastItem key={toast.id.to_string()} toast={toast.clone()} />
            })}
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct ToastItemProps {
    toast: Toast,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let toast_context = use_context::<ToastContext>();

    let on_close = {
        let toast_id = props.toast.id;
        Callback::from(move |_: MouseEvent| {
            if let Some(ctx) = &toast_context {
                ctx.remove_toast.emit(toast_id);
            }
        })
    };

    html! {
        <div class={classes!(
            "flex", "items-center", "p-4", "rounded-lg", "shadow-lg", "border-l-4", "text-white", "min-w-80", "max-w-md",
            props.toast.toast_type.classes()
        )}>
            <span class="flex-shrink-0 mr-3 text-lg font-bold">{props.toast.toast_type.icon()}</span>
            <p class="flex-1 text-sm font-medium">{&props.toast.message}</p>
            <button onclick={on_close} class="flex-shrink-0 ml-3 text-white hover:text-gray-200 focus:outline-none">
                <span class="text-lg">{"×"}</span>
            </button>
        </div>
    }
}
