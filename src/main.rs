//! Plate weight calculator front end using Yew.
//! Wires the session reducer, debounced inputs and view components.

use drax_calculator::{
    catalog::{self, HttpCatalogSource},
    config::{CATALOG_URL, DEBOUNCE_MS, LOG_LEVEL},
    logging, MachineRecord, Session, SessionAction,
};
use std::rc::Rc;
use yew::prelude::*;

mod components;
mod hooks;

use components::{field_text, Calculator, LoadErrorBanner, MachineTable, SearchBar};
use hooks::use_debounced_input;

// ──────────────────────────────────────────────────────────────────────────────
// Helper functions

/// Callback that wraps the delivered text into a session action.
fn dispatch_text(
    dispatcher: UseReducerDispatcher<Session>,
    action: fn(String) -> SessionAction,
) -> Callback<String> {
    Callback::from(move |text: String| dispatcher.dispatch(action(text)))
}

// ──────────────────────────────────────────────────────────────────────────────

/// Primary application component wiring state, effects, and UI elements.
#[function_component(Main)]
fn main_component() -> Html {
    let session = use_reducer(Session::new);

    // Fetch the catalog once on mount. A failure is terminal for the page.
    {
        let dispatcher = session.dispatcher();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let source = HttpCatalogSource::new(CATALOG_URL);
                let result = catalog::load(&source).await;
                dispatcher.dispatch(SessionAction::Loaded(result));
            });
            || ()
        });
    }

    let search = use_debounced_input(
        DEBOUNCE_MS,
        dispatch_text(session.dispatcher(), SessionAction::Search),
    );
    let plate_count = use_debounced_input(
        DEBOUNCE_MS,
        dispatch_text(session.dispatcher(), SessionAction::EditPlateCount),
    );
    let total_weight = use_debounced_input(
        DEBOUNCE_MS,
        dispatch_text(session.dispatcher(), SessionAction::EditTotalWeight),
    );

    let on_clear_search = {
        let clear = search.clear.clone();
        let dispatcher = session.dispatcher();
        Callback::from(move |_: MouseEvent| {
            clear.emit(());
            dispatcher.dispatch(SessionAction::ClearSearch);
        })
    };

    // Selecting or clearing a machine empties both calculator fields,
    // including anything still waiting on the debounce timer.
    let clear_fields = {
        let clear_count = plate_count.clear.clone();
        let clear_total = total_weight.clear.clone();
        Callback::from(move |_: ()| {
            clear_count.emit(());
            clear_total.emit(());
        })
    };

    let on_select = {
        let dispatcher = session.dispatcher();
        let clear_fields = clear_fields.clone();
        Callback::from(move |record: MachineRecord| {
            clear_fields.emit(());
            dispatcher.dispatch(SessionAction::Select(record));
        })
    };

    let on_clear_selection = {
        let dispatcher = session.dispatcher();
        Callback::from(move |_: MouseEvent| {
            clear_fields.emit(());
            dispatcher.dispatch(SessionAction::ClearSelection);
        })
    };

    let rows = session.table_rows();
    let selection = session.selection();

    html! {
        <div class="drax-calculator">
            <LoadErrorBanner error={session.load_error().cloned()} />

            <Calculator
                machine_label={selection.machine_label().map(str::to_string)}
                plate_weight={selection.plate_weight()}
                plate_count_text={field_text(&plate_count.text, plate_count.loading, selection.plate_count())}
                total_weight_text={field_text(&total_weight.text, total_weight.loading, selection.total_weight())}
                editable={selection.is_editable()}
                plate_count_loading={plate_count.loading}
                total_weight_loading={total_weight.loading}
                on_plate_count_input={plate_count.oninput.clone()}
                on_total_weight_input={total_weight.oninput.clone()}
                on_clear={on_clear_selection}
            />

            <SearchBar
                text={search.text.clone()}
                loading={search.loading}
                oninput={search.oninput.clone()}
                on_clear={on_clear_search}
            />

            <MachineTable {rows} {on_select} />
        </div>
    }
}

/// Entry point: installs logging and the panic hook, then renders the app.
fn main() {
    console_error_panic_hook::set_once();
    logging::init(LOG_LEVEL);
    yew::Renderer::<Main>::new().render();
}
