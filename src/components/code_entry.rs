//! Six-slot verification-code entry form.
//!
//! All transition rules live in [`crate::state::verify::VerifyState`]; this
//! component wires keystrokes to that state and owns the two timers around
//! it: the repeating 1-second countdown tick and the one-shot delayed
//! transition after a check. Both handles are dropped (cancelled) on screen
//! teardown so nothing fires against unmounted state.

use leptos::prelude::*;

use crate::state::verify::{CODE_LEN, CodeCheck, DigitOutcome, VerifyState};

#[cfg(feature = "hydrate")]
use crate::state::verify::RESULT_DELAY_MS;

/// Code-entry form with countdown-gated resend.
///
/// `on_verified` fires exactly once, one second after a correct code.
/// `on_resend` fires when the user requests a new code after the countdown
/// has run out; the response (if any) is not observed here.
#[component]
pub fn CodeEntryForm(
    /// The code the assembled input is compared against.
    expected: &'static str,
    #[prop(into)] on_verified: Callback<()>,
    #[prop(into)] on_resend: Callback<()>,
) -> impl IntoView {
    let verify = RwSignal::new(VerifyState::default());
    let slot_refs: [NodeRef<leptos::html::Input>; CODE_LEN] =
        core::array::from_fn(|_| NodeRef::new());

    #[cfg(feature = "hydrate")]
    let pending = StoredValue::new_local(None::<gloo_timers::callback::Timeout>);
    #[cfg(feature = "hydrate")]
    let ticker = StoredValue::new_local(None::<gloo_timers::callback::Interval>);

    let focus_slot = move |index: usize| {
        #[cfg(feature = "hydrate")]
        if let Some(input) = slot_refs[index].get_untracked() {
            let _ = input.focus();
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = index;
    };

    #[cfg(feature = "hydrate")]
    let start_ticker = move || {
        ticker.set_value(Some(gloo_timers::callback::Interval::new(1_000, move || {
            verify.update(VerifyState::tick);
        })));
    };

    #[cfg(feature = "hydrate")]
    {
        start_ticker();
        // Release the interval once the countdown bottoms out; resend
        // recreates it.
        Effect::new(move || {
            if verify.with(|v| v.countdown()) == 0 {
                ticker.set_value(None);
            }
        });
        on_cleanup(move || {
            ticker.set_value(None);
            pending.set_value(None);
        });
    }

    let on_input = move |index: usize, ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        let outcome = verify
            .try_update(|v| v.input_digit(index, &value, expected))
            .unwrap_or(DigitOutcome::REJECTED);

        if !outcome.accepted {
            // Rejected input leaves the signal untouched, so push the
            // canonical slot text back into the DOM by hand.
            #[cfg(feature = "hydrate")]
            {
                use wasm_bindgen::JsCast;
                if let Some(input) = ev
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                {
                    input.set_value(&verify.with_untracked(|v| v.slot_text(index)));
                }
            }
            return;
        }

        if let Some(next) = outcome.focus {
            focus_slot(next);
        }

        match outcome.completed {
            Some(CodeCheck::Valid) => {
                #[cfg(feature = "hydrate")]
                pending.set_value(Some(gloo_timers::callback::Timeout::new(
                    RESULT_DELAY_MS,
                    move || {
                        if verify.try_update(VerifyState::begin_navigation).unwrap_or(false) {
                            on_verified.run(());
                        }
                    },
                )));
            }
            Some(CodeCheck::Invalid) => {
                #[cfg(feature = "hydrate")]
                pending.set_value(Some(gloo_timers::callback::Timeout::new(
                    RESULT_DELAY_MS,
                    move || {
                        verify.update(VerifyState::reset_after_mismatch);
                        focus_slot(0);
                    },
                )));
            }
            Some(CodeCheck::Unknown) | None => {}
        }
    };

    let on_keydown = move |index: usize, ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Backspace" {
            if let Some(prev) = verify.try_update(|v| v.backspace(index)).flatten() {
                focus_slot(prev);
            }
        }
    };

    let on_resend_click = move |_| {
        if !verify.try_update(VerifyState::resend).unwrap_or(false) {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            pending.set_value(None);
            start_ticker();
        }
        focus_slot(0);
        on_resend.run(());
    };

    let slot_class = move || match verify.with(|v| v.check()) {
        CodeCheck::Valid => "code-entry__slot code-entry__slot--valid",
        CodeCheck::Invalid => "code-entry__slot code-entry__slot--invalid",
        CodeCheck::Unknown => "code-entry__slot",
    };

    let slots = (0..CODE_LEN)
        .map(|index| {
            let node_ref = slot_refs[index];
            view! {
                <input
                    class=slot_class
                    type="text"
                    inputmode="numeric"
                    maxlength="1"
                    node_ref=node_ref
                    prop:value=move || verify.with(|v| v.slot_text(index))
                    on:input=move |ev| on_input(index, ev)
                    on:keydown=move |ev| on_keydown(index, ev)
                />
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="code-entry">
            <div class="code-entry__slots">{slots}</div>

            <Show when=move || verify.with(|v| v.check() == CodeCheck::Valid)>
                <p class="code-entry__status code-entry__status--valid">
                    "Code verified successfully!"
                </p>
            </Show>

            <Show when=move || verify.with(|v| v.check() == CodeCheck::Invalid)>
                <p class="code-entry__status code-entry__status--invalid">
                    "Invalid code. Please enter a valid code."
                </p>
            </Show>

            <div class="code-entry__resend">
                {move || {
                    if verify.with(VerifyState::can_resend) {
                        view! {
                            <button class="btn btn--outline" on:click=on_resend_click>
                                "Resend code"
                            </button>
                        }
                            .into_any()
                    } else {
                        view! {
                            <p class="code-entry__countdown">
                                "Resend code in "
                                <span class="code-entry__seconds">
                                    {move || verify.with(|v| v.countdown())}
                                    "s"
                                </span>
                            </p>
                        }
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}
