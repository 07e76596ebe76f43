use yew::prelude::*;

use crate::components::in_view::{use_in_view, ViewportOptions};
use crate::config;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Card wrapper that fades in once it scrolls into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_view(
        node.clone(),
        ViewportOptions {
            threshold: config::REVEAL_THRESHOLD,
            root_margin: config::REVEAL_ROOT_MARGIN,
            fallback_delay_ms: 0,
        },
    );

    html! {
        <div ref={node} class={classes!(props.class.clone(), "fade-in", visible.then(|| "visible"))}>
            { for props.children.iter() }
        </div>
    }
}
