use crate::copy::{ConvertOptions, Converter, IdentityConverter, Primitive, ScalarKind, StandardConverter};

const LENIENT: ConvertOptions = ConvertOptions { nil_to_zero: true };
const STRICT: ConvertOptions = ConvertOptions { nil_to_zero: false };

#[test]
fn strings_parse_into_numeric_kinds() {
	let conv = StandardConverter;
	assert_eq!(conv.convert(&"42".into(), ScalarKind::Int, STRICT), Some(Primitive::Int(42)));
	assert_eq!(conv.convert(&"-7".into(), ScalarKind::Int, STRICT), Some(Primitive::Int(-7)));
	assert_eq!(conv.convert(&"7".into(), ScalarKind::Uint, STRICT), Some(Primitive::Uint(7)));
	assert_eq!(conv.convert(&"2.5".into(), ScalarKind::Float, STRICT), Some(Primitive::Float(2.5)));
	assert_eq!(conv.convert(&"true".into(), ScalarKind::Bool, STRICT), Some(Primitive::Bool(true)));
}

#[test]
fn unparsable_strings_have_no_conversion() {
	let conv = StandardConverter;
	assert_eq!(conv.convert(&"forty".into(), ScalarKind::Int, STRICT), None);
	assert_eq!(conv.convert(&"-1".into(), ScalarKind::Uint, STRICT), None);
	assert_eq!(conv.convert(&"yes".into(), ScalarKind::Bool, STRICT), None);
}

#[test]
fn scalars_format_into_strings() {
	let conv = StandardConverter;
	assert_eq!(conv.convert(&Primitive::Int(12), ScalarKind::Str, STRICT), Some("12".into()));
	assert_eq!(conv.convert(&Primitive::Uint(3), ScalarKind::Str, STRICT), Some("3".into()));
	assert_eq!(conv.convert(&Primitive::Float(1.5), ScalarKind::Str, STRICT), Some("1.5".into()));
	assert_eq!(conv.convert(&Primitive::Bool(false), ScalarKind::Str, STRICT), Some("false".into()));
}

#[test]
fn numeric_kinds_convert_only_when_value_survives() {
	let conv = StandardConverter;
	assert_eq!(conv.convert(&Primitive::Int(5), ScalarKind::Uint, STRICT), Some(Primitive::Uint(5)));
	assert_eq!(conv.convert(&Primitive::Int(-5), ScalarKind::Uint, STRICT), None);
	assert_eq!(conv.convert(&Primitive::Uint(u64::MAX), ScalarKind::Int, STRICT), None);
	assert_eq!(conv.convert(&Primitive::Int(3), ScalarKind::Float, STRICT), Some(Primitive::Float(3.0)));
	assert_eq!(conv.convert(&Primitive::Float(4.0), ScalarKind::Int, STRICT), Some(Primitive::Int(4)));
	assert_eq!(conv.convert(&Primitive::Float(4.5), ScalarKind::Int, STRICT), None);
	assert_eq!(conv.convert(&Primitive::Float(-1.0), ScalarKind::Uint, STRICT), None);
	assert_eq!(conv.convert(&Primitive::Float(f64::NAN), ScalarKind::Int, STRICT), None);
	assert_eq!(conv.convert(&Primitive::Float(1e300), ScalarKind::Int, STRICT), None);
}

#[test]
fn bools_and_numbers_do_not_mix() {
	let conv = StandardConverter;
	assert_eq!(conv.convert(&Primitive::Bool(true), ScalarKind::Int, STRICT), None);
	assert_eq!(conv.convert(&Primitive::Int(1), ScalarKind::Bool, STRICT), None);
}

#[test]
fn nil_converts_to_zero_only_when_enabled() {
	let conv = StandardConverter;
	assert_eq!(conv.convert(&Primitive::Nil, ScalarKind::Int, LENIENT), Some(Primitive::Int(0)));
	assert_eq!(conv.convert(&Primitive::Nil, ScalarKind::Str, LENIENT), Some(Primitive::Str(String::new())));
	assert_eq!(conv.convert(&Primitive::Nil, ScalarKind::Int, STRICT), None);
}

#[test]
fn identity_converter_rejects_cross_kind_pairs() {
	let conv = IdentityConverter;
	assert_eq!(conv.convert(&"42".into(), ScalarKind::Str, STRICT), Some("42".into()));
	assert_eq!(conv.convert(&"42".into(), ScalarKind::Int, STRICT), None);
	assert_eq!(conv.convert(&Primitive::Nil, ScalarKind::Bool, LENIENT), Some(Primitive::Bool(false)));
}

#[test]
fn closures_act_as_converters() {
	let upper = |value: &Primitive, target: ScalarKind, _: ConvertOptions| match (value, target) {
		(Primitive::Str(text), ScalarKind::Str) => Some(Primitive::Str(text.to_uppercase())),
		_ => None,
	};
	assert_eq!(upper.convert(&"abc".into(), ScalarKind::Str, STRICT), Some("ABC".into()));
	assert_eq!(upper.convert(&"1".into(), ScalarKind::Int, STRICT), None);
}
