use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::components::in_view::{use_in_view, ViewportOptions};
use crate::config;

/// Counts up from zero to `target` over roughly
/// [`config::COUNTER_DURATION_MS`], one step per tick.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterAnimation {
    target: u32,
    step: f64,
    current: f64,
    done: bool,
}

impl CounterAnimation {
    pub fn new(target: u32) -> Self {
        let ticks = f64::from(config::COUNTER_DURATION_MS) / f64::from(config::COUNTER_TICK_MS);
        Self {
            target,
            step: f64::from(target) / ticks,
            current: 0.0,
            done: false,
        }
    }

    pub fn tick(&mut self) {
        if self.done {
            return;
        }
        self.current += self.step;
        if self.current >= f64::from(self.target) {
            self.current = f64::from(self.target);
            self.done = true;
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn display(&self) -> String {
        format!("{}+", self.current.floor() as u64)
    }
}

impl Reducible for CounterAnimation {
    type Action = ();

    fn reduce(self: Rc<Self>, _: ()) -> Rc<Self> {
        let mut next = (*self).clone();
        next.tick();
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    pub target: u32,
    pub label: AttrValue,
}

#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let node = use_node_ref();
    let target = props.target;
    let animation = use_reducer(move || CounterAnimation::new(target));
    let started = use_in_view(
        node.clone(),
        ViewportOptions {
            threshold: config::COUNTER_THRESHOLD,
            root_margin: config::COUNTER_ROOT_MARGIN,
            fallback_delay_ms: config::COUNTER_FALLBACK_DELAY_MS,
        },
    );

    {
        let animation = animation.clone();
        let running = started && !animation.is_done();
        use_effect_with_deps(
            move |running: &bool| {
                let interval = running.then(|| {
                    Interval::new(config::COUNTER_TICK_MS, move || animation.dispatch(()))
                });
                move || drop(interval)
            },
            running,
        );
    }

    html! {
        <div class="stat-item">
            <span ref={node} class="stat-number" data-target={target.to_string()}>
                { animation.display() }
            </span>
            <span class="stat-label">{ props.label.clone() }</span>
        </div>
    }
}
