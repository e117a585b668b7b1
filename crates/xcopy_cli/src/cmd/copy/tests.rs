use xcopy_testkit::{fixture_json, scratch_path};

use crate::cmd::test_support::{copy_fixtures, fixture_arg, run_xcopy, run_xcopy_failure};

const PAYLOAD: &str = "order_payload.json";
const TEMPLATE: &str = "order_template.json";

fn copy_failure(extra: &[&str]) -> String {
	let payload = fixture_arg(PAYLOAD);
	let template = fixture_arg(TEMPLATE);
	let mut args = vec!["copy", payload.as_str(), template.as_str()];
	args.extend_from_slice(extra);
	run_xcopy_failure(&args)
}

#[test]
fn copy_fills_template_with_typed_values() {
	let doc = copy_fixtures(PAYLOAD, TEMPLATE, &[]);

	assert_eq!(doc["id"], 5120, "template number slot coerces the string id");
	assert_eq!(doc["customer"]["vip"], true);
	assert_eq!(doc["customer"]["email"], "grace@example.com");
	assert_eq!(doc["lines"][0]["qty"], 2);
	assert_eq!(doc["lines"][1]["unit_price"], 0.25);
	assert_eq!(doc["attributes"]["channel"], "web");
	assert!(doc["tracking"].is_null());
	assert_eq!(doc["total"], 0.0, "template-only keys survive");
}

#[test]
fn copy_json_report_wraps_result() {
	let report = copy_fixtures(PAYLOAD, TEMPLATE, &["--json"]);

	assert_eq!(report["shape"], "Mapping");
	assert!(report["source"].as_str().is_some_and(|item| item.ends_with(PAYLOAD)));
	assert!(report.get("out").is_none());
	assert_eq!(report["result"]["note"], "leave at door");
}

#[test]
fn copy_writes_out_file() {
	let out = scratch_path("copy-out.json");
	let out_arg = out.to_string_lossy().into_owned();
	let payload = fixture_arg(PAYLOAD);
	let template = fixture_arg(TEMPLATE);

	let output = run_xcopy(&["copy", &payload, &template, "--out", &out_arg]);
	assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
	assert!(String::from_utf8_lossy(&output.stdout).starts_with("wrote: "));

	let written: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&out).expect("out file written")).expect("out file is json");
	assert_eq!(written, copy_fixtures(PAYLOAD, TEMPLATE, &[]), "file matches stdout rendering");
	assert_eq!(written["customer"]["name"], fixture_json(PAYLOAD)["customer"]["name"]);
}

#[test]
fn no_coerce_reports_conversion_error() {
	let stderr = copy_failure(&["--no-coerce"]);

	assert!(stderr.contains("error: could not convert between string and bool"), "unexpected stderr: {stderr}");
}

#[test]
fn structure_into_null_slot_fails() {
	let payload = fixture_arg(PAYLOAD);
	let dest = fixture_arg("nested_into_null.json");
	let stderr = run_xcopy_failure(&["copy", &payload, &dest]);

	assert!(stderr.contains("error: cannot copy Mapping to Open"), "unexpected stderr: {stderr}");
}

#[test]
fn max_depth_bounds_the_walk() {
	let stderr = copy_failure(&["--max-depth", "0"]);

	assert!(stderr.contains("copy depth exceeded (max=0)"), "unexpected stderr: {stderr}");
}

#[test]
fn max_index_bounds_sequence_growth() {
	let stderr = copy_failure(&["--max-index", "0"]);

	assert!(stderr.contains("error: sequence index '1' exceeds limit (max=0)"), "unexpected stderr: {stderr}");
}

#[test]
fn missing_input_names_the_path() {
	let template = fixture_arg(TEMPLATE);
	let stderr = run_xcopy_failure(&["copy", "does-not-exist.json", &template]);

	assert!(stderr.contains("does-not-exist.json"), "unexpected stderr: {stderr}");
}
