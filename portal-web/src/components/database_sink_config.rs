use leptos::*;
use portal::{
    ConfigOptionMap, DatabaseSinkAction, DatabaseSinkField, DatabaseSinkForm,
    EventFormat, FieldKind, SslMode,
};

use super::inputs::{InputBoxView, RadioGroupView, SelectView, SwitchView};

/// Settings of a postgres notification target. `on_change` receives the
/// complete option map every time one of the exported values changes.
#[component]
pub fn DatabaseSinkConfig(
    #[prop(into)] on_change: Callback<ConfigOptionMap>,
) -> impl IntoView {
    let form = create_rw_signal(DatabaseSinkForm::new());
    form.update(|form| {
        form.subscribe(move |options| on_change.call(options.clone()));
    });

    // only re-render the inputs when the toggle swaps them, not on every key
    let visible_fields = create_memo(move |_| form.with(|f| f.visible_fields()));
    let use_connection_string =
        Signal::derive(move || form.with(|f| f.uses_connection_string()));

    let toggle = Callback::new(move |checked: bool| {
        form.update(|form| {
            form.apply(DatabaseSinkAction::UseConnectionString(checked));
        });
    });

    view! {
        <div class="flex flex-wrap w-full max-w-2xl border p-4 font-mono">
            <SwitchView
                id="use-connection-string"
                label="Enter Connection String"
                checked=use_connection_string
                on_change=toggle
            />
            {move || {
                visible_fields
                    .get()
                    .into_iter()
                    .map(|field| field_view(form, field))
                    .collect_view()
            }}
        </div>
    }
}

fn field_view(form: RwSignal<DatabaseSinkForm>, field: DatabaseSinkField) -> View {
    let value = Signal::derive(move || form.with(|f| f.value(field).to_string()));
    let on_input = Callback::new(move |value: String| {
        form.update(|form| {
            form.apply(DatabaseSinkAction::Set(field, value));
        });
    });

    match field.kind() {
        FieldKind::Select => {
            let options = Signal::derive(|| {
                SslMode::options()
                    .into_iter()
                    .map(|(label, value)| (label.to_string(), value.to_string()))
                    .collect::<Vec<_>>()
            });
            view! {
                <SelectView
                    id=field.id()
                    label=field.label()
                    value
                    options
                    on_change=on_input
                />
            }
            .into_view()
        }
        FieldKind::Radio => {
            let options = EventFormat::ALL
                .iter()
                .map(|format| (format.label(), format.as_str()))
                .collect::<Vec<_>>();
            view! {
                <RadioGroupView
                    id=field.id()
                    label=field.label()
                    value
                    options
                    on_change=on_input
                    tooltip=field.tooltip()
                />
            }
            .into_view()
        }
        kind => {
            let input_type = match kind {
                FieldKind::Password => "password",
                FieldKind::Number => "number",
                _ => "text",
            };
            view! {
                <InputBoxView
                    id=field.id()
                    label=field.label()
                    value
                    on_input
                    input_type
                    multiline={kind == FieldKind::Multiline}
                    tooltip=field.tooltip()
                />
            }
            .into_view()
        }
    }
}
