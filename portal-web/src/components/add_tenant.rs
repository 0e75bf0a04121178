use std::cell::Cell;

use leptos::ev::{MouseEvent, SubmitEvent};
use leptos::*;
use portal::{
    create_tenant, list_storage_classes, KubernetesFactor, Lifetime,
    TenantField, TenantForm, TenantOwner, Zone,
};
use wasm_bindgen_futures::spawn_local;

use super::inputs::{CheckboxView, InputBoxView, SelectView};
use super::submission_status_view::SubmissionStatusView;
use super::zones_selector::ZonesSelector;
use crate::GlobalState;

/// Records a close request so it can be forwarded after the form state is
/// released.
#[derive(Default)]
struct CloseRequest(Cell<Option<bool>>);

impl TenantOwner for CloseRequest {
    fn close_modal_and_refresh(&self, reload_data: bool) {
        self.0.set(Some(reload_data));
    }
}

const TEXT_FIELDS: [TenantField; 5] = [
    TenantField::TenantName,
    TenantField::Image,
    TenantField::ServiceName,
    TenantField::VolumesPerServer,
    TenantField::MountPath,
];

#[component]
pub fn AddTenantModal(
    #[prop(into)] close_modal_and_refresh: Callback<bool>,
) -> impl IntoView {
    let state = use_context::<GlobalState>()
        .expect("state to have been provided");
    let form = create_rw_signal(TenantForm::new());
    let lifetime = Lifetime::new();
    on_cleanup({
        let lifetime = lifetime.clone();
        move || lifetime.unmount()
    });

    {
        let api = state.api.clone();
        let lifetime = lifetime.clone();
        spawn_local(async move {
            if let Some(result) =
                lifetime.guard(list_storage_classes(api.as_ref())).await
            {
                form.update(|form| form.apply_storage_classes(result));
            }
        });
    }

    let on_submit = {
        let api = state.api.clone();
        let lifetime = lifetime.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            let Some(Ok(spec)) = form.try_update(|form| form.begin_submit())
            else {
                return;
            };
            log::info!("creating tenant {}", spec.name);
            let api = api.clone();
            let lifetime = lifetime.clone();
            spawn_local(async move {
                let request = async { create_tenant(api.as_ref(), &spec).await };
                let Some(result) = lifetime.guard(request).await else {
                    return;
                };
                let created = form
                    .try_update(|form| form.finish_submit(result))
                    .unwrap_or(false);
                if created {
                    close_modal_and_refresh.call(true);
                }
            });
        }
    };

    let on_cancel = move |_: MouseEvent| {
        let request = CloseRequest::default();
        form.update(|form| form.cancel(&request));
        if let Some(reload_data) = request.0.take() {
            close_modal_and_refresh.call(reload_data);
        }
    };

    let is_submitting = Signal::derive(move || form.with(|f| f.is_submitting()));
    let submit_error = Signal::derive(move || {
        form.with(|f| match f.error_message() {
            "" => None,
            msg => Some(msg.to_string()),
        })
    });

    let text_inputs = TEXT_FIELDS
        .into_iter()
        .map(|field| tenant_input(form, field, "text"))
        .collect_view();

    view! {
        <div class="fixed inset-0 bg-gray-600 bg-opacity-50 flex items-center justify-center">
            <form
                class="bg-white rounded-lg shadow-lg p-6 w-full max-w-2xl"
                on:submit=on_submit
            >
                <h2 class="text-xl font-bold mb-4">"Create Tenant"</h2>
                {text_inputs}
                <ZonesSelector on_change={move |zones: Vec<Zone>| {
                    form.update(|form| form.set_zones(zones));
                }} />
                <div class="flex w-full">
                    <div class="w-2/3">
                        {tenant_input(form, TenantField::VolumeSize, "number")}
                    </div>
                    <div class="w-1/3">
                        <SelectView
                            id="size_factor"
                            label="Unit"
                            value=Signal::derive(move || {
                                form.with(|f| f.size_factor().to_string())
                            })
                            options=Signal::derive(|| {
                                KubernetesFactor::for_dropdown()
                                    .into_iter()
                                    .map(|(l, v)| (l.to_string(), v.to_string()))
                                    .collect::<Vec<_>>()
                            })
                            on_change=move |value: String| {
                                if let Some(factor) = KubernetesFactor::from_value(&value) {
                                    form.update(|form| form.set_size_factor(factor));
                                }
                            }
                        />
                    </div>
                </div>
                <SelectView
                    id=TenantField::StorageClass.key()
                    label=TenantField::StorageClass.label()
                    value=Signal::derive(move || {
                        form.with(|f| f.value(TenantField::StorageClass).to_string())
                    })
                    options=Signal::derive(move || {
                        form.with(|f| {
                            f.storage_classes()
                                .iter()
                                .map(|class| (class.clone(), class.clone()))
                                .collect::<Vec<_>>()
                        })
                    })
                    on_change=move |value: String| {
                        form.update(|form| form.set(TenantField::StorageClass, value));
                    }
                />
                {tenant_input(form, TenantField::AccessKey, "text")}
                {tenant_input(form, TenantField::SecretKey, "password")}
                <CheckboxView
                    id="enable_mcs"
                    label="Enable mcs"
                    checked=Signal::derive(move || form.with(|f| f.enable_mcs()))
                    on_change=move |checked: bool| form.update(|form| form.set_enable_mcs(checked))
                />
                <CheckboxView
                    id="enable_ssl"
                    label="Enable SSL"
                    checked=Signal::derive(move || form.with(|f| f.enable_ssl()))
                    on_change=move |checked: bool| form.update(|form| form.set_enable_ssl(checked))
                />
                <SubmissionStatusView is_submitting submit_error />
                <div class="flex justify-end gap-2 mt-4">
                    <button
                        type="button"
                        class="px-4 py-2 rounded border"
                        on:click=on_cancel
                    >
                        "Cancel"
                    </button>
                    <button
                        type="submit"
                        class="px-4 py-2 rounded bg-blue-600 text-white disabled:opacity-50"
                        disabled=move || is_submitting.get()
                    >
                        "Save"
                    </button>
                </div>
            </form>
        </div>
    }
}

fn tenant_input(
    form: RwSignal<TenantForm>,
    field: TenantField,
    input_type: &'static str,
) -> impl IntoView {
    let value = Signal::derive(move || form.with(|f| f.value(field).to_string()));
    let error = Signal::derive(move || {
        form.with(|f| f.field_error(field).map(|msg| msg.to_string()))
    });
    view! {
        <InputBoxView
            id=field.key()
            label=field.label()
            value
            on_input=move |value: String| form.update(|form| form.set(field, value))
            input_type
            required=field.is_required()
            error=Some(error)
        />
    }
}
