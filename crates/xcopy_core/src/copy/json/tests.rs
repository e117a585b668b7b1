use serde_json::{Value, json};

use crate::copy::{CopyError, Primitive, Shape, copy, shape_of};
use crate::impl_record;

#[derive(Debug, Default, PartialEq)]
struct Item {
	sku: String,
	qty: u32,
	price: f64,
}

impl_record!(Item { sku, qty, price });

#[derive(Debug, Default, PartialEq)]
struct Order {
	id: u64,
	customer: Option<String>,
	items: Vec<Item>,
	notes: Vec<Primitive>,
	paid: bool,
}

impl_record!(Order { id, customer, items, notes, paid });

#[test]
fn json_values_classify_by_content() {
	assert_eq!(shape_of(&json!({})).ok(), Some(Shape::Mapping));
	assert_eq!(shape_of(&json!([])).ok(), Some(Shape::Sequence));
	assert_eq!(shape_of(&json!("s")).ok(), Some(Shape::Scalar));
	assert_eq!(shape_of(&json!(1.5)).ok(), Some(Shape::Scalar));
	assert_eq!(shape_of(&json!(true)).ok(), Some(Shape::Scalar));
	assert_eq!(shape_of(&Value::Null).ok(), Some(Shape::Open));
}

#[test]
fn json_payload_fills_typed_record() {
	let payload = json!({
		"id": "1001",
		"customer": "ada",
		"items": [
			{ "sku": "A-1", "qty": 2, "price": "3.25" },
			{ "sku": "B-7", "qty": "1", "price": 10 }
		],
		"notes": ["gift", 3, null],
		"paid": "true",
		"unknown": { "ignored": true }
	});
	let mut order = Order::default();

	copy(&payload, &mut order).expect("copy succeeds");

	assert_eq!(order.id, 1001);
	assert_eq!(order.customer.as_deref(), Some("ada"));
	assert_eq!(
		order.items,
		vec![
			Item {
				sku: "A-1".to_owned(),
				qty: 2,
				price: 3.25,
			},
			Item {
				sku: "B-7".to_owned(),
				qty: 1,
				price: 10.0,
			},
		]
	);
	assert_eq!(order.notes, vec![Primitive::Str("gift".to_owned()), Primitive::Int(3), Primitive::Nil]);
	assert!(order.paid);
}

#[test]
fn typed_record_fills_json_object() {
	let order = Order {
		id: 7,
		customer: None,
		items: vec![Item {
			sku: "Z".to_owned(),
			qty: 1,
			price: 0.5,
		}],
		notes: Vec::new(),
		paid: false,
	};
	let mut doc = json!({});

	let err = copy(&order, &mut doc).expect_err("null entries cannot take records");
	assert!(matches!(err, CopyError::ShapeMismatch { ref dst, .. } if dst == "Open"), "unexpected error: {err}");
	assert_eq!(doc["id"], json!(7));
	assert!(doc.get("customer").is_some_and(Value::is_null), "empty optional copies as null");
}

#[test]
fn json_template_fixes_scalar_types() {
	let src = json!({ "port": "8080", "debug": "false", "ratio": 2, "name": 12, "extra": "x" });
	let mut template = json!({ "port": 0, "debug": true, "ratio": 0.5, "name": "" });

	copy(&src, &mut template).expect("copy succeeds");

	assert_eq!(template, json!({ "port": 8080, "debug": false, "ratio": 2.0, "name": "12", "extra": "x" }));
}

#[test]
fn json_arrays_grow_with_null_slots() {
	let src = json!([1, "two", 3.5]);
	let mut dst = json!([]);

	copy(&src, &mut dst).expect("copy succeeds");

	assert_eq!(dst, json!([1, "two", 3.5]));
}

#[test]
fn non_finite_float_in_open_slot_becomes_null() {
	let mut dst = json!({ "ratio": null });

	copy(&json!({ "ratio": 1.5 }), &mut dst).expect("finite float lands");
	assert_eq!(dst["ratio"], 1.5);

	let src: std::collections::BTreeMap<String, Primitive> = [("ratio".to_owned(), Primitive::Float(f64::INFINITY))].into_iter().collect();
	let mut dst = json!({ "ratio": null });
	copy(&src, &mut dst).expect("open slots accept any scalar");
	assert!(dst["ratio"].is_null());
}

#[test]
fn non_finite_float_cannot_enter_json_number() {
	let mut dst = json!(0.0);

	let err = copy(&f64::NAN, &mut dst).expect_err("NaN has no JSON form");

	assert_eq!(err, CopyError::conversion("float", "json number"));
}

#[test]
fn json_object_into_json_array_needs_index_keys() {
	let mut dst = json!([]);
	copy(&json!({ "1": "b", "0": "a" }), &mut dst).expect("index keys");
	assert_eq!(dst, json!(["a", "b"]));

	let err = copy(&json!({ "k": 1 }), &mut dst).expect_err("non-index key");
	assert_eq!(err, CopyError::InvalidIndex { designator: "k".to_owned() });
}
