//! Customer maintenance page: one form for both create (`/customers/new`)
//! and edit (`/customers/:id`), with photo upload and interest selection.

#[cfg(test)]
#[path = "customer_form_test.rs"]
mod customer_form_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::layout::MainLayout;
use crate::net::mapper::{self, CustomerForm};
use crate::net::types::Customer;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::validate::customer::validate_customer;
use crate::validate::{FieldErrors, Validated};

/// What the edit-mode fetch means for the form. Both settled outcomes end
/// the loading indicator; only the failure one leaves the form empty.
#[derive(Clone, Debug, PartialEq, Eq)]
enum ExistingFetch {
    Pending,
    Fill(Customer),
    Fail(String),
}

fn classify_existing(value: Option<Result<Customer, String>>) -> ExistingFetch {
    match value {
        Some(Ok(customer)) => ExistingFetch::Fill(customer),
        Some(Err(message)) => ExistingFetch::Fail(message),
        None => ExistingFetch::Pending,
    }
}

#[component]
pub fn CustomerFormPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let params = use_params_map();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let customer_id = move || params.with(|p| p.get("id"));
    let is_edit = move || customer_id().is_some();

    let form = RwSignal::new(CustomerForm::default());
    let errors = RwSignal::new(FieldErrors::new());
    let saving = RwSignal::new(false);
    let load_settled = RwSignal::new(false);

    let interests = LocalResource::new(|| async { crate::net::api::list_interests().await });

    // In edit mode, fetch the record; `/customers/new` resolves to no
    // fetch at all.
    let existing = LocalResource::new(move || {
        let id = customer_id();
        async move {
            match id {
                Some(id) => Some(crate::net::api::get_customer(&id).await),
                None => None,
            }
        }
    });

    // Load the fetched record into the form exactly once. A failed fetch
    // also settles: the loading indicator ends and the error is shown.
    Effect::new(move || {
        if load_settled.get_untracked() {
            return;
        }
        match classify_existing(existing.get().flatten()) {
            ExistingFetch::Fill(customer) => {
                form.set(mapper::form_from_customer(&customer));
                load_settled.set(true);
            }
            ExistingFetch::Fail(message) => {
                load_settled.set(true);
                ui.update(|u| u.show_snackbar(message, crate::state::ui::Severity::Error));
            }
            ExistingFetch::Pending => {}
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_customer(form.get()) {
            Validated::Invalid(field_errors) => errors.set(field_errors),
            Validated::Valid(valid) => {
                errors.set(FieldErrors::new());
                #[cfg(feature = "hydrate")]
                {
                    let navigate = navigate.clone();
                    let id = customer_id();
                    let usuario_id = auth.get_untracked().user_id();
                    saving.set(true);
                    leptos::task::spawn_local(async move {
                        let outcome = match id {
                            Some(id) => {
                                let payload = mapper::update_payload(&id, &valid, &usuario_id);
                                crate::net::api::update_customer(&payload).await
                            }
                            None => {
                                let payload = mapper::create_payload(&valid, &usuario_id);
                                crate::net::api::create_customer(&payload).await
                            }
                        };
                        saving.set(false);
                        match outcome {
                            Ok(()) => {
                                ui.update(|u| {
                                    u.show_snackbar("Customer saved", crate::state::ui::Severity::Success);
                                });
                                navigate("/customers", NavigateOptions::default());
                            }
                            Err(message) => {
                                ui.update(|u| {
                                    u.show_snackbar(message, crate::state::ui::Severity::Error);
                                });
                            }
                        }
                    });
                }
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = (valid, ui, auth);
                }
            }
        }
    };

    let on_photo_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input: web_sys::HtmlInputElement = event_target(&ev);
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::util::file::file_to_base64(&file).await {
                    Ok(data_url) => form.update(|f| f.imagen = data_url),
                    Err(message) => {
                        ui.update(|u| {
                        u.show_snackbar(message, crate::state::ui::Severity::Error);
                    });
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, ui);
        }
    };

    let field_error = move |field: &'static str| {
        errors
            .get()
            .get(field)
            .map(|message| view! { <p class="field-error">{*message}</p> })
    };

    let loading_existing = move || is_edit() && !load_settled.get();

    view! {
        <MainLayout>
            <div class="customer-form-page">
                <header class="customer-form-page__header">
                    <h1>{move || if is_edit() { "Edit customer" } else { "New customer" }}</h1>
                    <A href="/customers">"Back to list"</A>
                </header>

                <Show when=move || loading_existing()>
                    <p class="customer-form-page__loading">"Loading customer..."</p>
                </Show>

                <form class="customer-form" on:submit=on_submit>
                    <div class="customer-form__photo">
                        <Show when=move || !form.get().imagen.is_empty()>
                            <img class="customer-form__preview" src=move || form.get().imagen/>
                        </Show>
                        <label class="btn">
                            "Upload photo"
                            <input type="file" accept="image/*" on:change=on_photo_change/>
                        </label>
                    </div>

                    <label class="customer-form__label">
                        "First name"
                        <input
                            type="text"
                            prop:value=move || form.get().nombre
                            on:input=move |ev| form.update(|f| f.nombre = event_target_value(&ev))
                        />
                    </label>
                    {move || field_error("nombre")}

                    <label class="customer-form__label">
                        "Last name"
                        <input
                            type="text"
                            prop:value=move || form.get().apellidos
                            on:input=move |ev| form.update(|f| f.apellidos = event_target_value(&ev))
                        />
                    </label>
                    {move || field_error("apellidos")}

                    <label class="customer-form__label">
                        "National id"
                        <input
                            type="text"
                            prop:value=move || form.get().identificacion
                            on:input=move |ev| {
                                form.update(|f| f.identificacion = event_target_value(&ev));
                            }
                        />
                    </label>
                    {move || field_error("identificacion")}

                    <label class="customer-form__label">
                        "Mobile phone"
                        <input
                            type="text"
                            prop:value=move || form.get().telefono_celular
                            on:input=move |ev| {
                                form.update(|f| f.telefono_celular = event_target_value(&ev));
                            }
                        />
                    </label>
                    {move || field_error("telefonoCelular")}

                    <label class="customer-form__label">
                        "Other phone"
                        <input
                            type="text"
                            prop:value=move || form.get().otro_telefono
                            on:input=move |ev| {
                                form.update(|f| f.otro_telefono = event_target_value(&ev));
                            }
                        />
                    </label>
                    {move || field_error("otroTelefono")}

                    <label class="customer-form__label">
                        "Address"
                        <input
                            type="text"
                            prop:value=move || form.get().direccion
                            on:input=move |ev| form.update(|f| f.direccion = event_target_value(&ev))
                        />
                    </label>
                    {move || field_error("direccion")}

                    <label class="customer-form__label">
                        "Birth date"
                        <input
                            type="date"
                            prop:value=move || form.get().f_nacimiento
                            on:input=move |ev| {
                                form.update(|f| f.f_nacimiento = event_target_value(&ev));
                            }
                        />
                    </label>
                    {move || field_error("fNacimiento")}

                    <label class="customer-form__label">
                        "Affiliation date"
                        <input
                            type="date"
                            prop:value=move || form.get().f_afiliacion
                            on:input=move |ev| {
                                form.update(|f| f.f_afiliacion = event_target_value(&ev));
                            }
                        />
                    </label>
                    {move || field_error("fAfiliacion")}

                    <fieldset class="customer-form__sex">
                        <legend>"Sex"</legend>
                        <label>
                            <input
                                type="radio"
                                name="sexo"
                                prop:checked=move || form.get().sexo == "M"
                                on:change=move |_| form.update(|f| f.sexo = "M".to_owned())
                            />
                            "Male"
                        </label>
                        <label>
                            <input
                                type="radio"
                                name="sexo"
                                prop:checked=move || form.get().sexo == "F"
                                on:change=move |_| form.update(|f| f.sexo = "F".to_owned())
                            />
                            "Female"
                        </label>
                    </fieldset>
                    {move || field_error("sexo")}

                    <label class="customer-form__label">
                        "Interest"
                        <select
                            prop:value=move || form.get().intereses_id
                            on:change=move |ev| {
                                form.update(|f| f.intereses_id = event_target_value(&ev));
                            }
                        >
                            <option value="">"Select an interest"</option>
                            {move || {
                                interests
                                    .get()
                                    .and_then(Result::ok)
                                    .unwrap_or_default()
                                    .into_iter()
                                    .map(|interest| {
                                        let selected = interest.id == form.get_untracked().intereses_id;
                                        view! {
                                            <option value=interest.id.clone() selected=selected>
                                                {interest.descripcion.clone()}
                                            </option>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </select>
                    </label>
                    {move || field_error("interesesId")}

                    <label class="customer-form__label">
                        "Personal bio"
                        <textarea
                            prop:value=move || form.get().resena_personal
                            on:input=move |ev| {
                                form.update(|f| f.resena_personal = event_target_value(&ev));
                            }
                        ></textarea>
                    </label>
                    {move || field_error("resenaPersonal")}

                    <div class="customer-form__actions">
                        <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                            {move || if saving.get() { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </form>
            </div>
        </MainLayout>
    }
}
