use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use shared::{validate_debt_form, CreateDebtRequest, Debt, DebtStatus, UpdateDebtRequest};

mod components;
mod services;

use components::debt_form::DebtForm;
use components::debt_list::DebtList;
use services::api::ApiClient;

// Today's date in the free-form MM/DD/YYYY shape the tracker expects
fn today() -> String {
    chrono::Local::now().format("%m/%d/%Y").to_string()
}

#[function_component(App)]
fn app() -> Html {
    let debts = use_state(Vec::<Debt>::new);
    let loading = use_state(|| true);

    // Transient form state
    let name = use_state(String::new);
    let amount = use_state(String::new);
    let date = use_state(today);
    let status = use_state(|| DebtStatus::Pending);
    let editing_id = use_state(|| Option::<i64>::None);
    let submitting = use_state(|| false);
    let form_error = use_state(|| Option::<String>::None);

    // Re-fetch the full list and replace the displayed snapshot
    let refresh_debts = {
        let debts = debts.clone();
        let loading = loading.clone();
        Callback::from(move |_: ()| {
            let debts = debts.clone();
            let loading = loading.clone();
            spawn_local(async move {
                match ApiClient::new().list_debts().await {
                    Ok(list) => debts.set(list),
                    Err(e) => web_sys::console::warn_1(&format!("Refresh failed: {}", e).into()),
                }
                loading.set(false);
            });
        })
    };

    // Initial load
    {
        let refresh_debts = refresh_debts.clone();
        use_effect_with((), move |_| {
            refresh_debts.emit(());
            || ()
        });
    }

    let reset_form = {
        let name = name.clone();
        let amount = amount.clone();
        let date = date.clone();
        let status = status.clone();
        let editing_id = editing_id.clone();
        let form_error = form_error.clone();
        Callback::from(move |_: ()| {
            name.set(String::new());
            amount.set(String::new());
            date.set(today());
            status.set(DebtStatus::Pending);
            editing_id.set(None);
            form_error.set(None);
        })
    };

    let on_name_change = {
        let name = name.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };
    let on_amount_change = {
        let amount = amount.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            amount.set(input.value());
        })
    };
    let on_date_change = {
        let date = date.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            date.set(input.value());
        })
    };

    // Add in the default mode, update when a row is being edited
    let on_submit = {
        let name = name.clone();
        let amount = amount.clone();
        let date = date.clone();
        let status = status.clone();
        let editing_id = editing_id.clone();
        let submitting = submitting.clone();
        let form_error = form_error.clone();
        let refresh_debts = refresh_debts.clone();
        let reset_form = reset_form.clone();
        Callback::from(move |_: ()| {
            let validation = validate_debt_form(&name, &amount, &date);
            let Some(cleaned_amount) = validation.cleaned_amount else {
                form_error.set(Some(join_errors(&validation)));
                return;
            };
            if !validation.is_valid {
                form_error.set(Some(join_errors(&validation)));
                return;
            }

            let name_value = name.trim().to_string();
            let date_value = date.trim().to_string();
            let status_value = *status;
            let target = *editing_id;

            let submitting = submitting.clone();
            let form_error = form_error.clone();
            let refresh_debts = refresh_debts.clone();
            let reset_form = reset_form.clone();
            submitting.set(true);
            spawn_local(async move {
                let api = ApiClient::new();
                let result = match target {
                    Some(id) => {
                        api.update_debt(
                            id,
                            UpdateDebtRequest {
                                name: name_value,
                                amount: cleaned_amount,
                                date: date_value,
                                status: status_value,
                            },
                        )
                        .await
                        .map(|_| ())
                    }
                    None => {
                        api.create_debt(CreateDebtRequest {
                            name: name_value,
                            amount: cleaned_amount,
                            date: date_value,
                            status: None,
                        })
                        .await
                        .map(|_| ())
                    }
                };

                submitting.set(false);
                match result {
                    Ok(()) => {
                        reset_form.emit(());
                        refresh_debts.emit(());
                    }
                    Err(e) => form_error.set(Some(e)),
                }
            });
        })
    };

    // Fill the form from a row and switch the submit button to update mode
    let on_edit = {
        let name = name.clone();
        let amount = amount.clone();
        let date = date.clone();
        let status = status.clone();
        let editing_id = editing_id.clone();
        let form_error = form_error.clone();
        Callback::from(move |debt: Debt| {
            editing_id.set(Some(debt.id));
            name.set(debt.name);
            amount.set(debt.amount.to_string());
            date.set(debt.date);
            status.set(debt.status);
            form_error.set(None);
        })
    };

    let on_cancel_edit = {
        let reset_form = reset_form.clone();
        Callback::from(move |_: ()| reset_form.emit(()))
    };

    let on_delete = {
        let refresh_debts = refresh_debts.clone();
        let reset_form = reset_form.clone();
        let editing_id = editing_id.clone();
        Callback::from(move |id: i64| {
            let refresh_debts = refresh_debts.clone();
            let reset_form = reset_form.clone();
            let was_editing = *editing_id == Some(id);
            spawn_local(async move {
                match ApiClient::new().delete_debt(id).await {
                    Ok(_) => {
                        if was_editing {
                            reset_form.emit(());
                        }
                        refresh_debts.emit(());
                    }
                    Err(e) => web_sys::console::warn_1(&format!("Delete failed: {}", e).into()),
                }
            });
        })
    };

    let on_toggle = {
        let status = status.clone();
        let refresh_debts = refresh_debts.clone();
        Callback::from(move |id: i64| {
            let status = status.clone();
            let refresh_debts = refresh_debts.clone();
            spawn_local(async move {
                match ApiClient::new().toggle_status(id).await {
                    Ok(updated) => {
                        // Keep the form's status in sync with the row under edit
                        status.set(updated.status);
                        refresh_debts.emit(());
                    }
                    Err(e) => web_sys::console::warn_1(&format!("Toggle failed: {}", e).into()),
                }
            });
        })
    };

    html! {
        <div class="container">
            <h1 class="header">{"💸 Debt Keeper 💸"}</h1>

            <DebtForm
                name={(*name).clone()}
                amount={(*amount).clone()}
                date={(*date).clone()}
                editing={editing_id.is_some()}
                submitting={*submitting}
                form_error={(*form_error).clone()}
                on_name_change={on_name_change}
                on_amount_change={on_amount_change}
                on_date_change={on_date_change}
                on_submit={on_submit}
                on_cancel_edit={on_cancel_edit}
            />

            {if *loading {
                html! { <div class="empty-state">{"Loading..."}</div> }
            } else {
                html! {
                    <DebtList
                        debts={(*debts).clone()}
                        editing_id={*editing_id}
                        on_edit={on_edit}
                        on_delete={on_delete}
                        on_toggle={on_toggle}
                    />
                }
            }}
        </div>
    }
}

fn join_errors(validation: &shared::DebtFormValidation) -> String {
    validation
        .errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

fn main() {
    yew::Renderer::<App>::new().render();
}
