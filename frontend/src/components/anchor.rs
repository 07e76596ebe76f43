use web_sys::MouseEvent;
use yew::prelude::*;

use crate::dom;

#[derive(Properties, PartialEq)]
pub struct AnchorLinkProps {
    /// In-page target such as `#contact`.
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    /// Runs after the scroll has been started.
    #[prop_or_default]
    pub onclick: Option<Callback<()>>,
    #[prop_or_default]
    pub children: Children,
}

/// Link to a section of the page that scrolls there smoothly instead of
/// jumping.
#[function_component(AnchorLink)]
pub fn anchor_link(props: &AnchorLinkProps) -> Html {
    let onclick = {
        let href = props.href.clone();
        let after = props.onclick.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            dom::scroll_to_anchor(&href);
            if let Some(after) = &after {
                after.emit(());
            }
        })
    };

    html! {
        <a href={props.href.clone()} class={props.class.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}
