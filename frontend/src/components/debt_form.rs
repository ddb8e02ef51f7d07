use yew::prelude::*;

use shared::{MAX_AMOUNT_LEN, MAX_DATE_LEN, MAX_NAME_LEN};

#[derive(Properties, PartialEq)]
pub struct DebtFormProps {
    // Form state
    pub name: String,
    pub amount: String,
    pub date: String,
    pub editing: bool,
    pub submitting: bool,
    pub form_error: Option<String>,

    // Event handlers
    pub on_name_change: Callback<Event>,
    pub on_amount_change: Callback<Event>,
    pub on_date_change: Callback<Event>,
    pub on_submit: Callback<()>,
    pub on_cancel_edit: Callback<()>,
}

#[function_component(DebtForm)]
pub fn debt_form(props: &DebtFormProps) -> Html {
    html! {
        <section class="debt-form-section">
            {if let Some(error) = props.form_error.as_ref() {
                html! {
                    <div class="form-message error">
                        {error}
                    </div>
                }
            } else { html! {} }}

            <form class="debt-form" onsubmit={
                let on_submit = props.on_submit.clone();
                Callback::from(move |e: SubmitEvent| {
                    e.prevent_default();
                    on_submit.emit(());
                })
            }>
                <div class="form-group">
                    <input
                        type="text"
                        id="name"
                        placeholder="Debtor's Name"
                        maxlength={MAX_NAME_LEN.to_string()}
                        value={props.name.clone()}
                        onchange={props.on_name_change.clone()}
                        disabled={props.submitting}
                    />
                </div>

                <div class="form-group">
                    <input
                        type="text"
                        id="amount"
                        placeholder="Amount owed (₱)"
                        inputmode="decimal"
                        maxlength={MAX_AMOUNT_LEN.to_string()}
                        value={props.amount.clone()}
                        onchange={props.on_amount_change.clone()}
                        disabled={props.submitting}
                    />
                </div>

                <div class="form-group">
                    <input
                        type="text"
                        id="date"
                        placeholder="Borrowed date (MM/DD/YYYY)"
                        maxlength={MAX_DATE_LEN.to_string()}
                        value={props.date.clone()}
                        onchange={props.on_date_change.clone()}
                        disabled={props.submitting}
                    />
                </div>

                <button type="submit" class="add-button" disabled={props.submitting}>
                    {if props.editing { "Update Debtor's Details" } else { "Add a Debtor" }}
                </button>

                {if props.editing {
                    html! {
                        <button
                            type="button"
                            class="cancel-button"
                            onclick={
                                let on_cancel_edit = props.on_cancel_edit.clone();
                                Callback::from(move |_: MouseEvent| on_cancel_edit.emit(()))
                            }
                        >
                            {"Cancel Edit"}
                        </button>
                    }
                } else { html! {} }}
            </form>
        </section>
    }
}
