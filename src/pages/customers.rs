//! Customer query page: filterable list scoped to the signed-in user,
//! client-side pagination, and delete with confirmation.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::layout::MainLayout;
use crate::net::types::{CustomerFilters, CustomerListItem};
use crate::state::auth::AuthState;
use crate::state::ui::UiState;

const ROWS_PER_PAGE_OPTIONS: [usize; 4] = [5, 10, 25, 50];

#[component]
pub fn CustomersPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    // Filter inputs are staged; the query only re-runs on an explicit
    // search, scoped to the session's user id at that moment.
    let identificacion = RwSignal::new(String::new());
    let nombre = RwSignal::new(String::new());
    let applied = RwSignal::new(CustomerFilters {
        usuario_id: auth.get_untracked().user_id(),
        ..CustomerFilters::default()
    });

    let page = RwSignal::new(0usize);
    let rows_per_page = RwSignal::new(10usize);
    let pending_delete = RwSignal::new(None::<CustomerListItem>);

    let customers = LocalResource::new(move || {
        let filters = applied.get();
        async move { crate::net::api::list_customers(&filters).await }
    });

    let on_search = move |_| {
        applied.set(CustomerFilters {
            identificacion: identificacion.get(),
            nombre: nombre.get(),
            usuario_id: auth.get_untracked().user_id(),
        });
        page.set(0);
    };

    let on_delete_confirm = move |_| {
        let Some(customer) = pending_delete.get() else {
            return;
        };
        pending_delete.set(None);
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_customer(&customer.id).await {
                    Ok(()) => {
                        ui.update(|u| {
                            u.show_snackbar("Customer deleted", crate::state::ui::Severity::Success);
                        });
                        customers.refetch();
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
            let _ = (customer, ui);
        }
    };

    view! {
        <MainLayout>
            <div class="customers-page">
                <header class="customers-page__header">
                    <h1>"Customers"</h1>
                    <a class="btn btn--primary" href="/customers/new">
                        "+ New customer"
                    </a>
                </header>

                <div class="customers-page__filters">
                    <label>
                        "National id"
                        <input
                            type="text"
                            prop:value=move || identificacion.get()
                            on:input=move |ev| identificacion.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Name"
                        <input
                            type="text"
                            prop:value=move || nombre.get()
                            on:input=move |ev| nombre.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn" on:click=on_search>
                        "Search"
                    </button>
                </div>

                <Suspense fallback=move || {
                    view! { <p class="customers-page__loading">"Loading customers..."</p> }
                }>
                    {move || {
                        customers
                            .get()
                            .map(|result| match result {
                                Ok(list) if list.is_empty() => {
                                    view! {
                                        <div class="customers-page__empty">
                                            <p>"No customers found."</p>
                                            <A href="/customers/new">"Create the first one"</A>
                                        </div>
                                    }
                                        .into_any()
                                }
                                Ok(list) => {
                                    view! {
                                        <CustomerTable
                                            list=list
                                            page=page
                                            rows_per_page=rows_per_page
                                            pending_delete=pending_delete
                                        />
                                    }
                                        .into_any()
                                }
                                Err(message) => {
                                    view! {
                                        <p class="customers-page__error">{message}</p>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </div>

            <Show when=move || pending_delete.get().is_some()>
                {move || {
                    pending_delete
                        .get()
                        .map(|customer| {
                            let label = format!(
                                "Delete {} {}?", customer.nombre, customer.apellidos,
                            );
                            view! {
                                <div class="dialog-backdrop" on:click=move |_| pending_delete.set(None)>
                                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                                        <h2>"Confirm delete"</h2>
                                        <p>{label}</p>
                                        <div class="dialog__actions">
                                            <button class="btn" on:click=move |_| pending_delete.set(None)>
                                                "Cancel"
                                            </button>
                                            <button class="btn btn--danger" on:click=on_delete_confirm>
                                                "Delete"
                                            </button>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                }}
            </Show>
        </MainLayout>
    }
}

/// Paginated result table. Pagination is purely client-side over the full
/// result set, the way the backend expects (the list endpoint does not
/// page).
#[component]
fn CustomerTable(
    list: Vec<CustomerListItem>,
    page: RwSignal<usize>,
    rows_per_page: RwSignal<usize>,
    pending_delete: RwSignal<Option<CustomerListItem>>,
) -> impl IntoView {
    let total = list.len();
    let list = StoredValue::new(list);

    let visible = move || {
        let rows = rows_per_page.get().max(1);
        let start = page.get() * rows;
        list.with_value(|l| l.iter().skip(start).take(rows).cloned().collect::<Vec<_>>())
    };

    let last_page = move || {
        let rows = rows_per_page.get().max(1);
        total.saturating_sub(1) / rows
    };

    let range_label = move || {
        let rows = rows_per_page.get().max(1);
        let start = page.get() * rows;
        let end = (start + rows).min(total);
        format!("{}\u{2013}{} of {}", start + 1, end, total)
    };

    view! {
        <table class="customers-table">
            <thead>
                <tr>
                    <th>"National id"</th>
                    <th>"First name"</th>
                    <th>"Last name"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    visible()
                        .into_iter()
                        .map(|customer| {
                            let edit_href = format!("/customers/{}", customer.id);
                            let identificacion = customer.identificacion.clone();
                            let nombre = customer.nombre.clone();
                            let apellidos = customer.apellidos.clone();
                            view! {
                                <tr>
                                    <td>{identificacion}</td>
                                    <td>{nombre}</td>
                                    <td>{apellidos}</td>
                                    <td class="customers-table__actions">
                                        <A href=edit_href>"Edit"</A>
                                        <button
                                            class="btn btn--link"
                                            on:click=move |_| pending_delete.set(Some(customer.clone()))
                                        >
                                            "Delete"
                                        </button>
                                    </td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </tbody>
        </table>
        <div class="customers-table__pagination">
            <label>
                "Rows per page"
                <select on:change=move |ev| {
                    rows_per_page.set(event_target_value(&ev).parse().unwrap_or(10));
                    page.set(0);
                }>
                    {ROWS_PER_PAGE_OPTIONS
                        .into_iter()
                        .map(|n| {
                            view! {
                                <option
                                    value=n.to_string()
                                    selected=move || rows_per_page.get() == n
                                >
                                    {n.to_string()}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </label>
            <span class="customers-table__range">{range_label}</span>
            <button
                class="btn"
                disabled=move || page.get() == 0
                on:click=move |_| page.update(|p| *p = p.saturating_sub(1))
            >
                "Prev"
            </button>
            <button
                class="btn"
                disabled=move || page.get() >= last_page()
                on:click=move |_| page.update(|p| *p += 1)
            >
                "Next"
            </button>
        </div>
    }
}
