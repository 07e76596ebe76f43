use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    fn class(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    pub leaving: bool,
}

pub enum NotificationAction {
    Push(Notification),
    /// Starts the slide-out transition.
    Dismiss(u64),
    Remove(u64),
}

/// Toasts currently on screen, oldest first. At most
/// [`config::MAX_VISIBLE_NOTIFICATIONS`] are kept; pushing past the limit
/// evicts the oldest.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotificationCenter {
    pub items: VecDeque<Notification>,
}

impl NotificationCenter {
    fn apply(mut self, action: NotificationAction) -> Self {
        match action {
            NotificationAction::Push(notification) => {
                while self.items.len() >= config::MAX_VISIBLE_NOTIFICATIONS {
                    self.items.pop_front();
                }
                self.items.push_back(notification);
            }
            NotificationAction::Dismiss(id) => {
                if let Some(item) = self.items.iter_mut().find(|n| n.id == id) {
                    item.leaving = true;
                }
            }
            NotificationAction::Remove(id) => {
                self.items.retain(|n| n.id != id);
            }
        }
        self
    }
}

impl Reducible for NotificationCenter {
    type Action = NotificationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new((*self).clone().apply(action))
    }
}

/// Handle passed down through context to raise toasts.
#[derive(Clone)]
pub struct Notifier {
    center: UseReducerHandle<NotificationCenter>,
    next_id: Rc<Cell<u64>>,
}

impl PartialEq for Notifier {
    fn eq(&self, other: &Self) -> bool {
        self.center == other.center && Rc::ptr_eq(&self.next_id, &other.next_id)
    }
}

impl Notifier {
    pub fn success(&self, message: impl Into<String>) {
        self.show(message.into(), Severity::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(message.into(), Severity::Error);
    }

    fn show(&self, message: String, severity: Severity) {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        self.center.dispatch(NotificationAction::Push(Notification {
            id,
            message,
            severity,
            leaving: false,
        }));

        let center = self.center.clone();
        Timeout::new(config::NOTIFICATION_VISIBLE_MS, move || {
            center.dispatch(NotificationAction::Dismiss(id));
            let center = center.clone();
            Timeout::new(config::NOTIFICATION_EXIT_MS, move || {
                center.dispatch(NotificationAction::Remove(id));
            })
            .forget();
        })
        .forget();
    }
}

#[derive(Properties, PartialEq)]
pub struct NotificationProviderProps {
    pub children: Children,
}

#[function_component(NotificationProvider)]
pub fn notification_provider(props: &NotificationProviderProps) -> Html {
    let center = use_reducer(NotificationCenter::default);
    let next_id = use_state(|| Rc::new(Cell::new(0u64)));
    let notifier = Notifier {
        center: center.clone(),
        next_id: (*next_id).clone(),
    };

    html! {
        <ContextProvider<Notifier> context={notifier}>
            { for props.children.iter() }
            <div class="notification-stack">
                { for center.items.iter().map(|n| html! {
                    <div
                        key={n.id}
                        class={classes!("notification", n.severity.class(), n.leaving.then(|| "leaving"))}
                        role="status"
                    >
                        { &n.message }
                    </div>
                }) }
            </div>
            <style>
                {r#"
                    .notification-stack {
                        position: fixed;
                        top: 20px;
                        right: 20px;
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                        z-index: 1000;
                        pointer-events: none;
                    }
                    .notification {
                        color: white;
                        padding: 1rem 1.5rem;
                        border-radius: 0.5rem;
                        box-shadow: 0 10px 25px rgba(0,0,0,0.1);
                        max-width: 360px;
                        pointer-events: auto;
                        animation: notificationIn 0.3s ease forwards;
                        transition: transform 0.3s ease;
                    }
                    .notification.success {
                        background-color: #10b981;
                    }
                    .notification.error {
                        background-color: #ef4444;
                    }
                    .notification.leaving {
                        transform: translateX(120%);
                    }
                    @keyframes notificationIn {
                        from { transform: translateX(120%); }
                        to { transform: translateX(0); }
                    }
                "#}
            </style>
        </ContextProvider<Notifier>>
    }
}

#[hook]
pub fn use_notifier() -> Option<Notifier> {
    use_context::<Notifier>()
}
