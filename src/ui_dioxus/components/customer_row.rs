use dioxus::prelude::*;
use crate::domain::customer::{Customer, CustomerId, CustomerRow};

#[component]
pub fn CustomerRowView(
    customer: Customer,
    on_open: EventHandler<Customer>,
    on_edit: EventHandler<Customer>,
    on_delete: EventHandler<CustomerId>,
) -> Element {
    let row = CustomerRow::from(&customer);
    let open_customer = customer.clone();
    let edit_customer = customer.clone();
    let delete_id = row.id.clone();

    rsx! {
        tr {
            style: "cursor: pointer; border-bottom: 1px solid rgb(243, 240, 240);",
            onclick: move |_| on_open.call(open_customer.clone()),

            td { style: "padding: 8px;", "{row.name}" }
            td { style: "padding: 8px;", "{row.email}" }
            td { style: "padding: 8px;", "{row.loan_type}" }
            td { style: "padding: 8px;", "{row.outstanding_balance}" }
            td {
                style: "padding: 8px;",
                span {
                    class: row.badge_class(),
                    style: if row.is_paid() {
                        "padding: 2px 8px; border-radius: 4px; color: white; background: #10b981;"
                    } else {
                        "padding: 2px 8px; border-radius: 4px; color: white; background: #ef4444;"
                    },
                    "{row.status}"
                }
            }
            td {
                style: "padding: 8px; display: flex; gap: 6px;",
                button {
                    style: "padding: 4px 10px; border: 1px solid #3b82f6; background: white;
                           color: #3b82f6; border-radius: 4px; cursor: pointer; font-size: 12px;",
                    onclick: move |e| {
                        e.stop_propagation();
                        on_edit.call(edit_customer.clone());
                    },
                    "Edit"
                }
                button {
                    style: "padding: 4px 10px; border: none; background: #dc2626;
                           color: white; border-radius: 4px; cursor: pointer; font-size: 12px;",
                    onclick: move |e| {
                        e.stop_propagation();
                        on_delete.call(delete_id.clone());
                    },
                    "Delete"
                }
            }
        }
    }
}
