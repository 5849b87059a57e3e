//! Transient snackbar notification host.
//!
//! Rendered once near the root so messages survive navigation. Auto-hides
//! after a few seconds unless a newer message has replaced the current one
//! in the meantime; a close button dismisses immediately.

use leptos::prelude::*;

use crate::state::ui::UiState;

#[cfg(feature = "hydrate")]
const AUTO_HIDE_MS: u64 = 4000;

/// Snackbar display area — expects `RwSignal<UiState>` in context.
#[component]
pub fn SnackbarHost() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    Effect::new(move || {
        let Some(current) = ui.get().snackbar else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(AUTO_HIDE_MS)).await;
                ui.update(|u| {
                    if u.snackbar.as_ref() == Some(&current) {
                        u.hide_snackbar();
                    }
                });
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = current;
        }
    });

    view! {
        {move || {
            ui.get()
                .snackbar
                .map(|s| {
                    view! {
                        <div class=format!("snackbar snackbar--{}", s.severity.as_str())>
                            <span class="snackbar__message">{s.message}</span>
                            <button
                                class="snackbar__close"
                                on:click=move |_| ui.update(UiState::hide_snackbar)
                            >
                                "\u{d7}"
                            </button>
                        </div>
                    }
                })
        }}
    }
}
