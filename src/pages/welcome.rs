//! Animated welcome screen: the headline types itself out, holds, deletes,
//! then the page moves on to the auth chooser.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::state::welcome::Typewriter;

#[cfg(feature = "hydrate")]
use gloo_timers::callback::{Interval, Timeout};
#[cfg(feature = "hydrate")]
use leptos::prelude::LocalStorage;
#[cfg(feature = "hydrate")]
use leptos_router::{NavigateOptions, hooks::use_navigate};

/// Advance the typewriter one frame and schedule the next one. When the
/// sequence ends the page navigates to `/auth`.
#[cfg(feature = "hydrate")]
fn run_step<N>(
    machine: StoredValue<Typewriter>,
    timer: StoredValue<Option<Timeout>, LocalStorage>,
    text: RwSignal<String>,
    navigate: N,
) where
    N: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let next = machine.try_update_value(Typewriter::step).flatten();
    text.set(machine.with_value(|m| m.text().to_owned()));

    match next {
        Some(delay) => {
            let navigate = navigate.clone();
            timer.set_value(Some(Timeout::new(delay, move || {
                run_step(machine, timer, text, navigate);
            })));
        }
        None => navigate("/auth", NavigateOptions::default()),
    }
}

#[component]
pub fn WelcomePage() -> impl IntoView {
    let text = RwSignal::new(String::new());
    let cursor_on = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    {
        let navigate = use_navigate();
        let machine = StoredValue::new(Typewriter::default());
        let timer = StoredValue::new_local(None::<Timeout>);
        let cursor = StoredValue::new_local(Some(Interval::new(500, move || {
            cursor_on.update(|v| *v = !*v);
        })));

        run_step(machine, timer, text, navigate);

        on_cleanup(move || {
            timer.set_value(None);
            cursor.set_value(None);
        });
    }

    view! {
        <div class="page page--centered">
            <h1 class="welcome__headline">
                {move || text.get()}
                <span
                    class="welcome__cursor"
                    class=("welcome__cursor--off", move || !cursor_on.get())
                ></span>
            </h1>
        </div>
    }
}
