use yew::prelude::*;

use shared::{format_amount, Debt, DebtStatus};

#[derive(Properties, PartialEq)]
pub struct DebtListProps {
    pub debts: Vec<Debt>,
    pub editing_id: Option<i64>,

    pub on_edit: Callback<Debt>,
    pub on_delete: Callback<i64>,
    pub on_toggle: Callback<i64>,
}

#[function_component(DebtList)]
pub fn debt_list(props: &DebtListProps) -> Html {
    if props.debts.is_empty() {
        return html! {
            <div class="empty-state">{"No debts recorded yet."}</div>
        };
    }

    html! {
        <div class="debt-list">
            {for props.debts.iter().map(|debt| {
                let row_class = if debt.status == DebtStatus::Paid {
                    "debt-item paid"
                } else {
                    "debt-item"
                };
                let is_editing = props.editing_id == Some(debt.id);

                let on_edit = {
                    let on_edit = props.on_edit.clone();
                    let debt = debt.clone();
                    Callback::from(move |_: MouseEvent| on_edit.emit(debt.clone()))
                };
                let on_delete = {
                    let on_delete = props.on_delete.clone();
                    let id = debt.id;
                    Callback::from(move |_: MouseEvent| on_delete.emit(id))
                };
                let on_toggle = {
                    let on_toggle = props.on_toggle.clone();
                    let id = debt.id;
                    Callback::from(move |_: MouseEvent| on_toggle.emit(id))
                };

                html! {
                    <div key={debt.id} class={row_class}>
                        <div class="debt-details">
                            <span class="debt-name">{&debt.name}</span>
                            <span class="debt-text">
                                {format!("{} | {}", format_amount(debt.amount), debt.date)}
                            </span>
                            <span class="debt-status">{format!("Status: {}", debt.status)}</span>
                        </div>

                        // Toggle control only appears on the row being edited
                        {if is_editing {
                            html! {
                                <button
                                    class={if debt.status == DebtStatus::Pending {
                                        "icon-button toggle pending"
                                    } else {
                                        "icon-button toggle paid"
                                    }}
                                    title={if debt.status == DebtStatus::Pending {
                                        "Mark as paid"
                                    } else {
                                        "Mark as pending"
                                    }}
                                    onclick={on_toggle}
                                >
                                    {if debt.status == DebtStatus::Pending { "○" } else { "✓" }}
                                </button>
                            }
                        } else { html! {} }}

                        <button class="icon-button edit" title="Edit" onclick={on_edit}>
                            {"✎"}
                        </button>
                        <button class="icon-button delete" title="Delete" onclick={on_delete}>
                            {"🗑"}
                        </button>
                    </div>
                }
            })}
        </div>
    }
}
