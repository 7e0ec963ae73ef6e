//! Pure Yew view components for the plate weight calculator.
//!
//! Everything here renders from props; state lives in the session reducer.

use drax_calculator::catalog::{LoadError, MachineRecord};
use drax_calculator::table::RowViewModel;
use drax_calculator::utils::format_field;
use std::rc::Rc;
use yew::prelude::*;

/// Spinner shown while a debounced input is waiting, icon otherwise.
fn loading_addon(input_id: &'static str, icon: &'static str, loading: bool) -> Html {
    html! {
        <span class="input-group-text">
            <span for={input_id}
                class={classes!("spinner-border", "spinner-border-sm", (!loading).then_some("d-none"))}
                role="status" />
            <i for={input_id} class={classes!("fas", icon, loading.then_some("d-none"))} />
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct SearchBarProps {
    pub text: String,
    pub loading: bool,
    pub oninput: Callback<InputEvent>,
    pub on_clear: Callback<MouseEvent>,
}

#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    html! {
        <div class="input-group mb-3">
            { loading_addon("input--search", "fa-search", props.loading) }
            <input type="text"
                id="input--search"
                class="form-control"
                placeholder="Search machines"
                aria-label="Search machines"
                value={props.text.clone()}
                oninput={props.oninput.clone()}
            />
            <button id="btn--clear-search"
                type="button"
                class="btn btn-secondary"
                aria-label="Clear search"
                onclick={props.on_clear.clone()}>
                <i class="fas fa-times" />
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct MachineTableProps {
    pub rows: Rc<Vec<RowViewModel>>,
    pub on_select: Callback<MachineRecord>,
}

/// Series glyph, machine name, plate weight and a "Set" button per machine.
#[function_component(MachineTable)]
pub fn machine_table(props: &MachineTableProps) -> Html {
    html! {
        <table class="table table-striped">
            <thead>
                <tr>
                    <th scope="col">{ "Series" }</th>
                    <th scope="col">{ "Machine" }</th>
                    <th scope="col">{ "Plate" }</th>
                    <th scope="col" />
                </tr>
            </thead>
            <tbody id="tbody--plate-weights">
                { props.rows.iter().map(|row| render_machine_row(row, &props.on_select)).collect::<Html>() }
            </tbody>
        </table>
    }
}

fn render_machine_row(row: &RowViewModel, on_select: &Callback<MachineRecord>) -> Html {
    let onclick = {
        let record = row.record.clone();
        on_select.reform(move |_: MouseEvent| record.clone())
    };
    html! {
        <tr>
            <td class="font--default" aria-label={row.series_name.clone()}>{ &row.series_glyph }</td>
            <th scope="row" aria-label={row.machine_name.clone()}>{ &row.machine_name }</th>
            <td aria-label={row.plate_weight.to_string()}>{ &row.plate_weight_label }</td>
            <td>
                <button type="button"
                    class="btn btn-primary"
                    aria-label={row.select_label()}
                    {onclick}>
                    { "Set" }
                </button>
            </td>
        </tr>
    }
}

#[derive(Properties, PartialEq)]
pub struct CalculatorProps {
    pub machine_label: Option<String>,
    pub plate_weight: Option<f64>,
    pub plate_count_text: String,
    pub total_weight_text: String,
    pub editable: bool,
    pub plate_count_loading: bool,
    pub total_weight_loading: bool,
    pub on_plate_count_input: Callback<InputEvent>,
    pub on_total_weight_input: Callback<InputEvent>,
    pub on_clear: Callback<MouseEvent>,
}

#[function_component(Calculator)]
pub fn calculator(props: &CalculatorProps) -> Html {
    html! {
        <div class="calculator">
            <div class="input-group mb-3">
                if let Some(name) = &props.machine_label {
                    <span id="span--machine-name" class="input-group-text input-group--max-50">{ name }</span>
                }
                <input type="number"
                    id="input--plate-weight"
                    class="form-control"
                    placeholder="Plate weight"
                    aria-label="Plate weight"
                    readonly={true}
                    value={format_field(props.plate_weight)}
                />
                if props.editable {
                    <button id="btn--clear-context"
                        type="button"
                        class="btn btn-danger"
                        aria-label="Clear selected machine"
                        onclick={props.on_clear.clone()}>
                        <i class="fas fa-trash" />
                    </button>
                }
            </div>
            <div class="input-group mb-3">
                { loading_addon("input--plate-number", "fa-layer-group", props.plate_count_loading) }
                <input type="number"
                    id="input--plate-number"
                    class="form-control"
                    placeholder="Number of plates"
                    aria-label="Number of plates"
                    disabled={!props.editable}
                    value={props.plate_count_text.clone()}
                    oninput={props.on_plate_count_input.clone()}
                />
            </div>
            <div class="input-group mb-3">
                { loading_addon("input--total-weight", "fa-weight-hanging", props.total_weight_loading) }
                <input type="number"
                    id="input--total-weight"
                    class="form-control"
                    placeholder="Total weight"
                    aria-label="Total weight"
                    disabled={!props.editable}
                    value={props.total_weight_text.clone()}
                    oninput={props.on_total_weight_input.clone()}
                />
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadErrorBannerProps {
    pub error: Option<LoadError>,
}

#[function_component(LoadErrorBanner)]
pub fn load_error_banner(props: &LoadErrorBannerProps) -> Html {
    match &props.error {
        Some(err) => html! {
            <div class="alert alert-danger" role="alert">{ err.to_string() }</div>
        },
        None => html! {},
    }
}

/// Field text for a calculator input: what the user is typing while a
/// delivery is pending, otherwise the session's value.
pub fn field_text(typed: &str, loading: bool, value: Option<f64>) -> String {
    if loading {
        typed.to_string()
    } else {
        format_field(value)
    }
}
