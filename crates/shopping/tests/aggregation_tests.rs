use foodgram_shopping::{LineItem, RawLineItem, ShoppingListError, aggregate, aggregate_records};

fn cart_items() -> Vec<LineItem> {
    vec![
        LineItem::new("Flour", "g", 500),
        LineItem::new("Eggs", "pcs", 3),
        LineItem::new("Flour", "g", 200),
        LineItem::new("Milk", "ml", 250),
        LineItem::new("Eggs", "pcs", 2),
    ]
}

#[test]
fn test_order_of_first_appearance_is_preserved() {
    let list = aggregate(cart_items());

    let names: Vec<&str> = list.names().collect();
    assert_eq!(names, vec!["Flour", "Eggs", "Milk"]);
}

#[test]
fn test_duplicates_are_not_summed() {
    let list = aggregate(vec![
        LineItem::new("Salt", "g", 10),
        LineItem::new("Salt", "g", 5),
    ]);

    assert_eq!(list.len(), 1);
    assert_eq!(list.get("Salt").unwrap().total_quantity, 10);
}

#[test]
fn test_same_name_different_unit_collapses_to_first() {
    let list = aggregate(vec![
        LineItem::new("Sugar", "g", 100),
        LineItem::new("Sugar", "tbsp", 2),
    ]);

    let sugar = list.get("Sugar").unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(sugar.measurement_unit, "g");
    assert_eq!(sugar.total_quantity, 100);
}

#[test]
fn test_names_are_case_sensitive() {
    let list = aggregate(vec![
        LineItem::new("salt", "g", 1),
        LineItem::new("Salt", "g", 2),
    ]);

    assert_eq!(list.len(), 2);
}

#[test]
fn test_aggregate_is_idempotent() {
    let first = aggregate(cart_items());
    let second = aggregate(cart_items());

    let first: Vec<_> = first.iter().cloned().collect();
    let second: Vec<_> = second.iter().cloned().collect();
    assert_eq!(first, second);
}

#[test]
fn test_empty_input_gives_empty_list() {
    assert!(aggregate(Vec::new()).is_empty());
    assert!(aggregate_records(Vec::new()).unwrap().is_empty());
}

#[test]
fn test_records_are_aggregated_in_query_order() {
    let records = vec![
        RawLineItem::new("Potatoes", "g", 1200),
        RawLineItem::new("Onion", "pcs", 4),
        RawLineItem::new("Potatoes", "kg", 1),
    ];

    let list = aggregate_records(records).unwrap();

    let lines: Vec<String> = list
        .iter()
        .enumerate()
        .map(|(i, entry)| entry.to_line(i + 1))
        .collect();
    assert_eq!(lines, vec!["1. Potatoes - 1200, g", "2. Onion - 4, pcs"]);
}

#[test]
fn test_missing_name_rejects_records() {
    let records = vec![
        RawLineItem::new("Rice", "g", 300),
        RawLineItem {
            name: None,
            measurement_unit: Some("g".to_string()),
            total: Some(10),
        },
        RawLineItem::new("Beans", "g", 200),
    ];

    let err = aggregate_records(records).unwrap_err();

    assert_eq!(err.to_string(), "line item #1 is missing its name");
}

#[test]
fn test_missing_unit_rejects_records() {
    let records = vec![RawLineItem {
        name: Some("Rice".to_string()),
        measurement_unit: None,
        total: Some(10),
    }];

    assert!(matches!(
        aggregate_records(records),
        Err(ShoppingListError::MalformedLineItem {
            index: 0,
            field: "measurement unit"
        })
    ));
}
