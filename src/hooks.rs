use drax_calculator::debounce::{Debouncer, GlooScheduler};
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Holds the state and callbacks for a debounced input field.
#[derive(Clone)]
pub struct DebouncedInput {
    /// The current text content of the input field, updated on every keystroke.
    pub text: String,
    /// True between a keystroke and the delivery of its value.
    pub loading: bool,
    /// Callback for the input's `oninput` event.
    pub oninput: Callback<InputEvent>,
    /// Empties the field and drops any pending delivery.
    pub clear: Callback<()>,
}

/// Custom hook wiring an input field to a [`Debouncer`].
///
/// `on_deliver` receives the field text once typing has paused for
/// `idle_ms`. It is captured on first render, so pass a stable callback
/// such as one built from a reducer dispatcher.
#[hook]
pub fn use_debounced_input(idle_ms: u32, on_deliver: Callback<String>) -> DebouncedInput {
    let text_handle = use_state(String::new);
    let loading_handle = use_state(|| false);

    let debouncer = {
        let loading_setter = loading_handle.clone();
        use_mut_ref(move || {
            Debouncer::new(GlooScheduler, idle_ms, move |value: String| {
                on_deliver.emit(value)
            })
            .with_loading_listener(move |loading| loading_setter.set(loading))
        })
    };

    let oninput = {
        let text_setter = text_handle.clone();
        let debouncer = debouncer.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            text_setter.set(value.clone());
            debouncer.borrow_mut().input(value);
        })
    };

    let clear = {
        let text_setter = text_handle.clone();
        Callback::from(move |_| {
            debouncer.borrow_mut().cancel();
            text_setter.set(String::new());
        })
    };

    DebouncedInput {
        text: (*text_handle).clone(),
        loading: *loading_handle,
        oninput,
        clear,
    }
}
