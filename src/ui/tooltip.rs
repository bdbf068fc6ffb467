use leptos::prelude::*;

/// Tooltip shown while the trigger is hovered or focused
#[component]
pub fn Tooltip(
    /// Tooltip body
    content: ViewFn,
    /// The element that triggers the tooltip
    children: Children,
    /// Delay before showing tooltip (ms)
    #[prop(default = 300)]
    delay: u32,
) -> impl IntoView {
    let (is_visible, set_is_visible) = signal(false);
    let (should_show, set_should_show) = signal(false);

    // Handle delayed show
    Effect::new(move |_| {
        if should_show.get() {
            set_timeout(
                move || {
                    if should_show.get_untracked() {
                        set_is_visible.set(true);
                    }
                },
                std::time::Duration::from_millis(delay as u64),
            );
        } else {
            set_is_visible.set(false);
        }
    });

    view! {
        <span
            class="kc-tooltip-container"
            on:mouseenter=move |_| set_should_show.set(true)
            on:mouseleave=move |_| set_should_show.set(false)
            on:focusin=move |_| set_should_show.set(true)
            on:focusout=move |_| set_should_show.set(false)
        >
            {children()}
            <Show when=move || is_visible.get()>
                <div class="pf-v5-c-tooltip pf-m-top" role="tooltip">
                    <div class="pf-v5-c-tooltip__arrow"></div>
                    <div class="pf-v5-c-tooltip__content">{content.run()}</div>
                </div>
            </Show>
        </span>
    }
}
