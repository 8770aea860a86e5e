use crate::error::ServiceError;
use crate::template::models::{
    Alignment, DataBinding, Field, SaveTemplateRequest, Sections, Template,
};
use crate::template::store::TemplateStore;

fn field(key: &str, mapping: &str, default: &str, alignment: Alignment) -> Field {
    Field {
        key: key.to_string(),
        mapping_field: mapping.to_string(),
        default_value: default.to_string(),
        alignment,
    }
}

fn invoice_request() -> SaveTemplateRequest {
    SaveTemplateRequest {
        name: "Invoice".to_string(),
        data_binding: None,
        sections: Sections {
            header: vec![field("Invoice Number", "billDetail.invoice_number", "INV-0000", Alignment::Left)],
            body: vec![field("Total Amount", "billDetail.amount", "0 USD", Alignment::Right)],
            footer: vec![field("Payment Terms", "", "Net 30 days", Alignment::Center)],
        },
    }
}

#[test]
fn test_save_and_get_round_trip() {
    let store = TemplateStore::new();
    let stored = store.save(invoice_request()).unwrap();

    let fetched = store.get("Invoice").unwrap();
    assert_eq!(fetched, stored);
    assert_eq!(fetched.sections.header.len(), 1);
    assert_eq!(fetched.sections.header[0].key, "Invoice Number");
    assert_eq!(fetched.sections.footer[0].alignment, Alignment::Center);
}

#[test]
fn test_save_rejects_blank_name() {
    let store = TemplateStore::new();
    let mut request = invoice_request();
    request.name = "   ".to_string();

    match store.save(request) {
        Err(ServiceError::Validation(msg)) => assert!(msg.contains("name")),
        other => panic!("expected validation error, got {:?}", other.map(|t| t.name)),
    }
}

#[test]
fn test_save_overwrites_by_name() {
    let store = TemplateStore::new();
    let first = store.save(invoice_request()).unwrap();

    let mut second = invoice_request();
    second.sections.body.push(field("Tax", "billDetail.tax", "0 USD", Alignment::Right));
    let stored = store.save(second).unwrap();

    let all = store.list();
    assert_eq!(all.len(), 1, "list() must never contain duplicate names");
    assert_eq!(all[0].sections.body.len(), 2);

    // The original creation time survives the overwrite
    assert_eq!(stored.created_at, first.created_at);
    assert!(stored.updated_at >= first.updated_at);
}

#[test]
fn test_list_order_is_stable() {
    let store = TemplateStore::new();
    for name in ["Invoice", "Bill", "Salary Slip"] {
        let mut request = invoice_request();
        request.name = name.to_string();
        store.save(request).unwrap();
    }

    let first: Vec<String> = store.list().into_iter().map(|t| t.name).collect();
    let second: Vec<String> = store.list().into_iter().map(|t| t.name).collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
}

#[test]
fn test_get_unknown_template_is_not_found() {
    let store = TemplateStore::new();
    match store.get("Missing") {
        Err(ServiceError::NotFound(msg)) => assert!(msg.contains("Missing")),
        other => panic!("expected not found, got {:?}", other.map(|t| t.name)),
    }
}

#[test]
fn test_data_binding_inferred_from_name() {
    let store = TemplateStore::new();

    let mut salary = invoice_request();
    salary.name = "Salary Slip".to_string();
    assert_eq!(store.save(salary).unwrap().data_binding, DataBinding::User);

    let mut shouting = invoice_request();
    shouting.name = "MONTHLY SALARY REPORT".to_string();
    assert_eq!(store.save(shouting).unwrap().data_binding, DataBinding::User);

    assert_eq!(
        store.save(invoice_request()).unwrap().data_binding,
        DataBinding::None
    );
}

#[test]
fn test_explicit_data_binding_wins_over_inference() {
    let store = TemplateStore::new();
    let mut request = invoice_request();
    request.name = "Salary Slip".to_string();
    request.data_binding = Some(DataBinding::None);

    assert_eq!(store.save(request).unwrap().data_binding, DataBinding::None);
}

#[test]
fn test_wire_format_round_trip() {
    // The shape existing clients send: capitalized section keys, no
    // data_binding field.
    let payload = serde_json::json!({
        "name": "Salary Slip",
        "Header": [
            { "key": "Company Name", "mapping_field": "company.name",
              "default_value": "ABC Corporation", "alignment": "Center" }
        ],
        "Body": [],
        "Footer": []
    });

    let request: SaveTemplateRequest = serde_json::from_value(payload).unwrap();
    assert_eq!(request.name, "Salary Slip");
    assert_eq!(request.data_binding, None);
    assert_eq!(request.sections.header[0].alignment, Alignment::Center);

    let store = TemplateStore::new();
    let stored = store.save(request).unwrap();
    assert_eq!(stored.data_binding, DataBinding::User);

    let serialized = serde_json::to_value(&stored).unwrap();
    assert!(serialized.get("Header").is_some(), "sections stay flattened");
    assert_eq!(serialized["data_binding"], "user");

    let reloaded: Template = serde_json::from_value(serialized).unwrap();
    assert_eq!(reloaded, stored);
}

#[test]
fn test_snapshot_replace_all_round_trip() {
    let store = TemplateStore::new();
    store.save(invoice_request()).unwrap();
    let snapshot = store.snapshot();

    let restored = TemplateStore::new();
    restored.replace_all(snapshot.clone());
    assert_eq!(restored.list(), snapshot);
}
