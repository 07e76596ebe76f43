use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::notification::use_notifier;
use crate::forms::flow::{begin_submit, finish_submit, PageEffects, SubmitStep};
use crate::forms::rules::{FieldSpec, FormSpec, InputKind};
use crate::forms::state::{FormAction, FormState};
use crate::forms::submit;

#[derive(Properties, PartialEq)]
pub struct ValidatedFormProps {
    pub spec: &'static FormSpec,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub button_class: Classes,
}

/// A form driven by a [`FormSpec`] rule table: validates on submit and on
/// blur, clears a field's error while typing, and delivers the submission.
#[function_component(ValidatedForm)]
pub fn validated_form(props: &ValidatedFormProps) -> Html {
    let spec = props.spec;
    let state = use_reducer(|| FormState::new(spec));
    let notifier = use_notifier();

    let onsubmit = {
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let effects = PageEffects {
                notifier: notifier.clone(),
            };
            let submission = match begin_submit(&state, &effects) {
                SubmitStep::Ignored => return,
                SubmitStep::Rejected(errors) => {
                    state.dispatch(FormAction::Rejected(errors));
                    return;
                }
                SubmitStep::Deliver(submission) => submission,
            };

            state.dispatch(FormAction::Started);
            let state = state.clone();
            spawn_local(async move {
                let result = submit::deliver(&submission).await;
                state.dispatch(finish_submit(spec, &submission, result, &effects));
            });
        })
    };

    html! {
        <form id={spec.dom_id} class={props.class.clone()} {onsubmit} novalidate={true}>
            { for spec.fields.iter().map(|field| render_field(field, &state)) }
            <button
                type="submit"
                class={props.button_class.clone()}
                disabled={state.is_submitting()}
            >
                { state.button_label() }
            </button>
        </form>
    }
}

fn render_field(field: &'static FieldSpec, state: &UseReducerHandle<FormState>) -> Html {
    let id = field.id;
    let error = state.error(id);
    let style = error.map(|_| "border-color: #ef4444;");

    let onblur = {
        let state = state.clone();
        Callback::from(move |_: FocusEvent| state.dispatch(FormAction::Blur(id)))
    };

    let input = match field.input {
        InputKind::TextArea => {
            let oninput = {
                let state = state.clone();
                Callback::from(move |e: InputEvent| {
                    let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
                    state.dispatch(FormAction::Input(id, value));
                })
            };
            html! {
                <textarea
                    id={field.dom_id}
                    name={field.id.as_str()}
                    rows="5"
                    placeholder={field.placeholder}
                    value={state.value(id).to_string()}
                    {style}
                    {oninput}
                    {onblur}
                />
            }
        }
        InputKind::Text | InputKind::Email => {
            let oninput = {
                let state = state.clone();
                Callback::from(move |e: InputEvent| {
                    let value = e.target_unchecked_into::<HtmlInputElement>().value();
                    state.dispatch(FormAction::Input(id, value));
                })
            };
            let kind = if field.input == InputKind::Email { "email" } else { "text" };
            html! {
                <input
                    type={kind}
                    id={field.dom_id}
                    name={field.id.as_str()}
                    placeholder={field.placeholder}
                    value={state.value(id).to_string()}
                    {style}
                    {oninput}
                    {onblur}
                />
            }
        }
    };

    html! {
        <div class="form-group" key={field.dom_id}>
            <label for={field.dom_id}>{ field.label }</label>
            { input }
            if let Some(message) = error {
                <div class="error-message">{ message }</div>
            }
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Element, Event, EventInit, HtmlElement};

    use super::*;
    use crate::components::notification::NotificationProvider;
    use crate::config;
    use crate::forms::rules::{CONTACT_FORM, EMAIL_MESSAGE, NEWSLETTER_FORM};

    wasm_bindgen_test_configure!(run_in_browser);

    const ERROR_BORDER: &str = "border-color: #ef4444";

    #[derive(Properties, PartialEq)]
    struct HarnessProps {
        spec: &'static FormSpec,
    }

    #[function_component(Harness)]
    fn harness(props: &HarnessProps) -> Html {
        html! {
            <NotificationProvider>
                <ValidatedForm spec={props.spec} />
            </NotificationProvider>
        }
    }

    async fn settle(ms: u32) {
        TimeoutFuture::new(ms).await;
    }

    async fn mount(spec: &'static FormSpec) -> Element {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        yew::Renderer::<Harness>::with_root_and_props(root.clone(), HarnessProps { spec }).render();
        settle(0).await;
        root
    }

    fn find(root: &Element, selector: &str) -> Element {
        root.query_selector(selector).unwrap().unwrap()
    }

    fn count(root: &Element, selector: &str) -> u32 {
        root.query_selector_all(selector).unwrap().length()
    }

    fn has_error_border(field: &Element) -> bool {
        field
            .get_attribute("style")
            .map(|style| style.contains(ERROR_BORDER))
            .unwrap_or(false)
    }

    fn type_into(root: &Element, dom_id: &str, value: &str) {
        let field = find(root, &format!("#{}", dom_id));
        if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(textarea) = field.dyn_ref::<HtmlTextAreaElement>() {
            textarea.set_value(value);
        }
        let init = EventInit::new();
        init.set_bubbles(true);
        let event = Event::new_with_event_init_dict("input", &init).unwrap();
        field.dispatch_event(&event).unwrap();
    }

    fn submit(root: &Element) {
        find(root, "button[type=submit]")
            .unchecked_into::<HtmlElement>()
            .click();
    }

    #[wasm_bindgen_test]
    async fn empty_contact_marks_every_field_once() {
        let root = mount(&CONTACT_FORM).await;
        submit(&root);
        settle(0).await;

        assert_eq!(count(&root, ".form-group"), 4);
        assert_eq!(count(&root, ".form-group > .error-message"), 4);
        for field in CONTACT_FORM.fields {
            let group = find(&root, &format!("#{}", field.dom_id))
                .parent_element()
                .unwrap();
            assert_eq!(count(&group, ".error-message"), 1);
            assert_eq!(
                find(&group, ".error-message").text_content().as_deref(),
                Some(field.message)
            );
            assert!(has_error_border(&find(&group, &format!("#{}", field.dom_id))));
        }
        assert_eq!(count(&root, ".notification"), 0);
    }

    #[wasm_bindgen_test]
    async fn typing_removes_the_error_and_the_border() {
        let root = mount(&CONTACT_FORM).await;
        submit(&root);
        settle(0).await;

        type_into(&root, "name", "A");
        settle(0).await;

        let name = find(&root, "#name");
        assert!(!has_error_border(&name));
        let group = name.parent_element().unwrap();
        assert_eq!(count(&group, ".error-message"), 0);
        // other fields keep theirs
        assert_eq!(count(&root, ".error-message"), 3);
    }

    #[wasm_bindgen_test]
    async fn valid_contact_submits_and_resets() {
        let root = mount(&CONTACT_FORM).await;
        type_into(&root, "name", "Al");
        type_into(&root, "email", "al@x.com");
        type_into(&root, "subject", "Hi there");
        type_into(&root, "message", "This is a long enough message.");
        settle(0).await;

        submit(&root);
        settle(0).await;

        let button = find(&root, "button[type=submit]");
        assert!(button.has_attribute("disabled"));
        assert_eq!(button.text_content().as_deref(), Some("Sending..."));
        assert_eq!(count(&root, ".error-message"), 0);

        settle(config::SIMULATED_SUBMIT_DELAY_MS + 200).await;

        assert_eq!(
            find(&root, ".notification.success").text_content().as_deref(),
            Some(CONTACT_FORM.success_message)
        );
        let button = find(&root, "button[type=submit]");
        assert!(!button.has_attribute("disabled"));
        assert_eq!(button.text_content().as_deref(), Some("Send Message"));
        assert_eq!(find(&root, "#name").unchecked_into::<HtmlInputElement>().value(), "");
        assert_eq!(
            find(&root, "#message").unchecked_into::<HtmlTextAreaElement>().value(),
            ""
        );
    }

    #[wasm_bindgen_test]
    async fn bad_newsletter_email_shows_one_error_and_stays_idle() {
        let root = mount(&NEWSLETTER_FORM).await;
        type_into(&root, "newsletter-name", "Ada");
        type_into(&root, "newsletter-email", "not-an-email");
        settle(0).await;

        submit(&root);
        settle(0).await;

        assert_eq!(count(&root, ".error-message"), 1);
        let group = find(&root, "#newsletter-email").parent_element().unwrap();
        assert_eq!(
            find(&group, ".error-message").text_content().as_deref(),
            Some(EMAIL_MESSAGE)
        );
        let button = find(&root, "button[type=submit]");
        assert!(!button.has_attribute("disabled"));
        assert_eq!(button.text_content().as_deref(), Some("Subscribe"));
        assert_eq!(count(&root, ".notification"), 0);
    }
}
