use yew::prelude::*;
use web_sys::{Element, MouseEvent};

/// Accordion rule: clicking the open item closes it, clicking any other
/// item opens that one and closes the rest.
pub fn toggle_open(current: Option<usize>, clicked: usize) -> Option<usize> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

const FAQS: &[(&str, &str)] = &[
    (
        "How quickly can you start on a new project?",
        "Most engagements kick off within two weeks. After a short discovery call we send a proposal with scope, timeline and a fixed price.",
    ),
    (
        "Do you work with early-stage startups?",
        "Yes. Roughly half of our clients are pre-seed to Series A teams. We can act as your whole engineering team or augment the one you have.",
    ),
    (
        "Who owns the code you write?",
        "You do. All source code, designs and infrastructure accounts are transferred to you, and we document everything so your team can take over.",
    ),
    (
        "What happens after launch?",
        "Every project includes 30 days of support. After that you can move to a monthly maintenance plan or hand the product over to your in-house team.",
    ),
    (
        "How do you price your services?",
        "Fixed-price for well defined projects and a monthly retainer for ongoing work. There are no hidden fees; hosting and third-party services are billed at cost.",
    ),
];

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    answer: AttrValue,
    open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let answer_ref = use_node_ref();

    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    // scrollHeight is measured from the previous render, which is enough
    // since the answer text never changes
    let max_height = if props.open {
        answer_ref
            .cast::<Element>()
            .map(|el| el.scroll_height())
            .unwrap_or(0)
    } else {
        0
    };

    html! {
        <div class={classes!("faq-item", props.open.then(|| "active"))}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{ props.question.clone() }</span>
                <span class="toggle-icon">{ if props.open { "−" } else { "+" } }</span>
            </button>
            <div ref={answer_ref} class="faq-answer" style={format!("max-height: {}px;", max_height)}>
                <p>{ props.answer.clone() }</p>
            </div>
        </div>
    }
}

#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    let open = use_state(|| None::<usize>);

    html! {
        <section id="faq" class="faq">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">{"Frequently Asked Questions"}</h2>
                    <p class="section-subtitle">{"Everything you need to know before working with us"}</p>
                </div>
                <div class="faq-list">
                    { for FAQS.iter().enumerate().map(|(index, (question, answer))| {
                        let on_toggle = {
                            let open = open.clone();
                            Callback::from(move |_: ()| open.set(toggle_open(*open, index)))
                        };
                        html! {
                            <FaqItem
                                key={index}
                                question={*question}
                                answer={*answer}
                                open={*open == Some(index)}
                                {on_toggle}
                            />
                        }
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .faq-list {
                    max-width: 800px;
                    margin: 0 auto;
                }

                .faq-item {
                    background: #ffffff;
                    border: 1px solid #e5e7eb;
                    border-radius: 12px;
                    margin-bottom: 1rem;
                    overflow: hidden;
                    transition: all 0.3s ease;
                }

                .faq-item:hover {
                    border-color: #93c5fd;
                }

                .faq-question {
                    width: 100%;
                    padding: 1.5rem;
                    background: none;
                    border: none;
                    color: #111827;
                    font-size: 1.1rem;
                    font-weight: 600;
                    text-align: left;
                    cursor: pointer;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .faq-question:hover {
                    color: #2563eb;
                }

                .toggle-icon {
                    font-size: 1.5rem;
                    color: #2563eb;
                    transition: transform 0.3s ease;
                }

                .faq-item.active .toggle-icon {
                    transform: rotate(180deg);
                }

                .faq-answer {
                    overflow: hidden;
                    transition: max-height 0.5s ease;
                    padding: 0 1.5rem;
                    color: #4b5563;
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_from_closed() {
        assert_eq!(toggle_open(None, 2), Some(2));
    }

    #[test]
    fn clicking_open_item_closes_it() {
        assert_eq!(toggle_open(Some(2), 2), None);
    }

    #[test]
    fn clicking_another_item_switches() {
        assert_eq!(toggle_open(Some(0), 3), Some(3));
    }
}
