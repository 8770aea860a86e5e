//! Sample data for development and testing: the users and templates the
//! original client apps were built against.

use serde_json::json;

use crate::state::AppState;
use crate::template::models::{Alignment, DataBinding, Field, SaveTemplateRequest, Sections};
use crate::user::models::User;

/// Seed the stores with the sample users and templates. Skips any store
/// that already has data.
pub fn seed_sample_data(state: &AppState) {
    if state.users.is_empty() {
        for user in sample_users() {
            state.users.insert(user);
        }
        log::info!("Seeded {} sample user(s)", state.users.list().len());
    }

    if state.templates.is_empty() {
        for request in sample_templates() {
            match state.templates.save(request) {
                Ok(template) => log::info!("Seeded template '{}'", template.name),
                Err(e) => log::error!("Failed to seed template: {}", e),
            }
        }
    }
}

fn attributes(value: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
    match value {
        serde_json::Value::Object(map) => map,
        _ => serde_json::Map::new(),
    }
}

fn sample_users() -> Vec<User> {
    vec![
        User::new(
            "Alice Johnson",
            attributes(json!({
                "employee_id": "EMP-001",
                "personal": { "address": "123 Tech Lane, New York, NY 10001" },
                "company": { "name": "ABC Corporation" },
                "payDetail": {
                    "period": "January 2025",
                    "total_salary_amount": "7500 USD",
                    "basic_pay": "5000 USD",
                    "allowances": "2000 USD",
                    "deductions": "500 USD"
                },
                "generated_date": "2025-01-15",
                "note": "This is a computer-generated document."
            })),
        ),
        User::new(
            "Bob Smith",
            attributes(json!({
                "employee_id": "EMP-002",
                "personal": { "address": "456 Business Ave, Los Angeles, CA 90001" },
                "company": { "name": "ABC Corporation" },
                "payDetail": {
                    "period": "January 2025",
                    "total_salary_amount": "8500 USD",
                    "basic_pay": "6000 USD",
                    "allowances": "2500 USD",
                    "deductions": "0 USD"
                },
                "generated_date": "2025-01-15",
                "note": "This is a computer-generated document."
            })),
        ),
        User::new(
            "Charlie Brown",
            attributes(json!({
                "billDetail": {
                    "invoice_number": "INV-2025-001",
                    "date": "2025-01-15",
                    "bill_to": "Charlie Brown",
                    "description": "Web Development Services",
                    "quantity": "40",
                    "unit_price": "75 USD",
                    "amount": "3000 USD",
                    "payment_terms": "Net 30 days"
                }
            })),
        ),
        User::new(
            "Diana Prince",
            attributes(json!({
                "billDetail": {
                    "invoice_number": "INV-2025-002",
                    "date": "2025-01-16",
                    "bill_to": "Diana Prince",
                    "description": "Consulting Services",
                    "quantity": "20",
                    "unit_price": "100 USD",
                    "amount": "2000 USD",
                    "payment_terms": "Net 15 days"
                }
            })),
        ),
        User::new(
            "Edward Wilson",
            attributes(json!({
                "billDetail": {
                    "invoice_number": "BILL-2025-001",
                    "date": "2025-01-17",
                    "description": "Monthly Subscription",
                    "amount": "99 USD",
                    "tax": "8.91 USD",
                    "total": "107.91 USD",
                    "due_date": "2025-02-17"
                }
            })),
        ),
    ]
}

fn field(key: &str, mapping: &str, default: &str, alignment: Alignment) -> Field {
    Field {
        key: key.to_string(),
        mapping_field: mapping.to_string(),
        default_value: default.to_string(),
        alignment,
    }
}

fn sample_templates() -> Vec<SaveTemplateRequest> {
    use Alignment::{Center, Left, Right};

    vec![
        SaveTemplateRequest {
            name: "Salary Slip".to_string(),
            data_binding: Some(DataBinding::User),
            sections: Sections {
                header: vec![
                    field("Company Name", "company.name", "ABC Corporation", Center),
                    field("Employee Name", "name", "N/A", Left),
                    field("Employee ID", "employee_id", "N/A", Left),
                    field("Pay Period", "payDetail.period", "Monthly", Right),
                ],
                body: vec![
                    field("Basic Pay", "payDetail.basic_pay", "0 USD", Left),
                    field("Allowances", "payDetail.allowances", "0 USD", Left),
                    field("Deductions", "payDetail.deductions", "0 USD", Left),
                    field("Total Salary Amount", "payDetail.total_salary_amount", "0 USD", Right),
                    field("Address", "personal.address", "Not provided", Left),
                ],
                footer: vec![
                    field("Generated Date", "generated_date", "N/A", Center),
                    field("Note", "note", "This is a computer-generated document.", Center),
                ],
            },
        },
        SaveTemplateRequest {
            name: "Invoice".to_string(),
            data_binding: Some(DataBinding::None),
            sections: Sections {
                header: vec![
                    field("INVOICE", "invoice.title", "INVOICE", Center),
                    field("Invoice Number", "billDetail.invoice_number", "INV-0000", Left),
                    field("Date", "billDetail.date", "N/A", Right),
                    field("Bill To", "billDetail.bill_to", "Customer Name", Left),
                ],
                body: vec![
                    field("Description", "billDetail.description", "Service/Product", Left),
                    field("Quantity", "billDetail.quantity", "1", Center),
                    field("Unit Price", "billDetail.unit_price", "0 USD", Right),
                    field("Total Amount", "billDetail.amount", "0 USD", Right),
                ],
                footer: vec![
                    field("Payment Terms", "billDetail.payment_terms", "Net 30 days", Left),
                    field(
                        "Thank you for your business!",
                        "",
                        "Thank you for your business!",
                        Center,
                    ),
                ],
            },
        },
        SaveTemplateRequest {
            name: "Bill".to_string(),
            data_binding: Some(DataBinding::None),
            sections: Sections {
                header: vec![
                    field("BILL", "bill.title", "BILL", Center),
                    field("Bill Number", "billDetail.invoice_number", "BILL-0000", Left),
                    field("Date", "billDetail.date", "N/A", Right),
                ],
                body: vec![
                    field("Item Description", "billDetail.description", "Item/Service", Left),
                    field("Amount", "billDetail.amount", "0 USD", Right),
                    field("Tax", "billDetail.tax", "0 USD", Right),
                    field("Total", "billDetail.total", "0 USD", Right),
                ],
                footer: vec![
                    field("Payment Due Date", "billDetail.due_date", "N/A", Left),
                    field(
                        "Please pay within the due date",
                        "",
                        "Please pay within the due date",
                        Center,
                    ),
                ],
            },
        },
    ]
}
