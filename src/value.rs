use serde_json::Value;

/// Turn text-typed command values into the JSON type the bridge expects.
///
/// Callers working from a command line hand everything over as strings:
/// `"true"`/`"false"` in any case become booleans and an optionally signed
/// integer becomes a number. Every other value, strings included, is
/// returned untouched.
pub fn coerce(value: Value) -> Value {
	let text = match value {
		Value::String(text) => text,
		other => return other,
	};
	if text.eq_ignore_ascii_case("true") {
		return Value::Bool(true);
	}
	if text.eq_ignore_ascii_case("false") {
		return Value::Bool(false);
	}
	if let Ok(number) = text.parse::<i64>() {
		return Value::from(number);
	}
	if let Ok(number) = text.parse::<u64>() {
		return Value::from(number);
	}
	Value::String(text)
}
