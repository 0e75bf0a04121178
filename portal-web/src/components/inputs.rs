use leptos::*;

const INPUT_CLASS: &str = "bg-gray-50 border border-gray-300 text-gray-900 \
                           rounded-lg focus:ring-blue-500 \
                           focus:border-blue-500 block w-full p-2.5";

#[component]
pub fn InputBoxView(
    id: &'static str,
    label: &'static str,
    value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] multiline: bool,
    #[prop(optional)] required: bool,
    #[prop(optional_no_strip)] tooltip: Option<&'static str>,
    #[prop(optional_no_strip)] placeholder: Option<&'static str>,
    #[prop(optional_no_strip)] error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    let input_view = if multiline {
        view! {
            <textarea
                id=id
                name=id
                rows=4
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
                placeholder=placeholder.unwrap_or_default()
                class=INPUT_CLASS
            />
        }
        .into_view()
    } else {
        view! {
            <input
                id=id
                name=id
                type=input_type
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
                placeholder=placeholder.unwrap_or_default()
                class=INPUT_CLASS
            />
        }
        .into_view()
    };

    view! {
        <div class="w-full flex-col items-start text-left mb-2 p-2 bg-white text-gray-800">
            <FieldLabelView id label required tooltip />
            {input_view}
            {move || error.and_then(|error| error.get()).map(|msg| view! {
                <div class="text-red-500">{msg}</div>
            })}
        </div>
    }
}

#[component]
pub fn SelectView(
    id: &'static str,
    label: &'static str,
    value: Signal<String>,
    /// (label, value) pairs
    options: Signal<Vec<(String, String)>>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="w-full flex-col items-start text-left mb-2 p-2 bg-white text-gray-800">
            <FieldLabelView id label required=false tooltip=None />
            <select
                id=id
                name=id
                on:change=move |ev| on_change.call(event_target_value(&ev))
                class=INPUT_CLASS
            >
                <For
                    each=move || options.get()
                    key=|(_, option_value)| option_value.clone()
                    children=move |(option_label, option_value)| {
                        let selected_value = option_value.clone();
                        view! {
                            <option
                                value=option_value
                                selected=move || value.get() == selected_value
                            >
                                {option_label}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}

#[component]
pub fn RadioGroupView(
    id: &'static str,
    label: &'static str,
    value: Signal<String>,
    options: Vec<(&'static str, &'static str)>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional_no_strip)] tooltip: Option<&'static str>,
) -> impl IntoView {
    let radios = options
        .into_iter()
        .map(|(option_label, option_value)| {
            view! {
                <label class="mr-4">
                    <input
                        type="radio"
                        name=id
                        value=option_value
                        prop:checked=move || value.get() == option_value
                        on:change=move |_| on_change.call(option_value.to_string())
                    />
                    " "{option_label}
                </label>
            }
        })
        .collect_view();

    view! {
        <div class="w-full flex-col items-start text-left mb-2 p-2 bg-white text-gray-800">
            <FieldLabelView id label required=false tooltip />
            <div id=id>{radios}</div>
        </div>
    }
}

#[component]
pub fn CheckboxView(
    id: &'static str,
    label: &'static str,
    checked: Signal<bool>,
    #[prop(into)] on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <div class="w-full text-left mb-2 p-2 bg-white text-gray-800">
            <input
                type="checkbox"
                id=id
                name=id
                prop:checked=move || checked.get()
                on:change=move |ev| on_change.call(event_target_checked(&ev))
            />
            <label for=id class="ml-2">{label}</label>
        </div>
    }
}

/// Checkbox rendered as a toggle switch.
#[component]
pub fn SwitchView(
    id: &'static str,
    label: &'static str,
    checked: Signal<bool>,
    #[prop(into)] on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <label for=id class="inline-flex items-center cursor-pointer mb-2 p-2">
            <input
                type="checkbox"
                id=id
                class="sr-only peer"
                prop:checked=move || checked.get()
                on:change=move |ev| on_change.call(event_target_checked(&ev))
            />
            <div class="relative w-11 h-6 bg-gray-200 rounded-full peer \
                        peer-checked:bg-blue-600 after:content-[''] \
                        after:absolute after:top-[2px] after:start-[2px] \
                        after:bg-white after:rounded-full after:h-5 after:w-5 \
                        peer-checked:after:translate-x-full"></div>
            <span class="ms-3 text-base font-semibold text-gray-900">{label}</span>
        </label>
    }
}

#[component]
fn FieldLabelView(
    id: &'static str,
    label: &'static str,
    required: bool,
    tooltip: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="flex justify-between items-center">
            <label
                for=id
                title=tooltip.unwrap_or_default()
                class="text-base font-semibold text-gray-900"
            >
                {label}
                {if required { " *" } else { "" }}
            </label>
        </div>
    }
}
