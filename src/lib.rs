use std::collections::BTreeMap;

use console_error_panic_hook::set_once as set_panic_hook;
use serde::Serialize;
use serde_json::Value;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::prelude::*;

pub mod case;

pub use case::{
    CaseError, CaseOptions, CaseStyle, CaseStyleInfo, camel, convert, convert_all, convert_with,
    dot_case, split_words, to_kebab_case, to_kebab_case_checked,
};


#[wasm_bindgen(start)]
pub fn wasm_start() {
    set_panic_hook();
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// `None` stands for JS `undefined`, which has no JSON counterpart.
fn js_type_name(value: Option<&Value>) -> &'static str {
    value.map_or("undefined", json_type_name)
}

// A bare string counts as a single input; arrays must hold only strings.
fn inputs_from_value(value: Option<Value>) -> Result<Vec<String>, CaseError> {
    let items = match value {
        Some(Value::String(text)) => return Ok(vec![text]),
        Some(Value::Array(items)) => items,
        other => {
            return Err(CaseError::NotText {
                index: 0,
                found: js_type_name(other.as_ref()),
            });
        }
    };
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::String(text) => Ok(text),
            other => Err(CaseError::NotText {
                index,
                found: json_type_name(&other),
            }),
        })
        .collect()
}

fn single_input_from_value(value: Option<Value>) -> Result<String, CaseError> {
    match value {
        Some(Value::String(text)) => Ok(text),
        other => Err(CaseError::InputNotText {
            found: js_type_name(other.as_ref()),
        }),
    }
}

// Options may be omitted, a bare style name, or a full options object.
fn options_from_value(value: Option<Value>) -> Result<CaseOptions, CaseError> {
    match value {
        None | Some(Value::Null) => Ok(CaseOptions::default()),
        Some(Value::String(style)) => style
            .parse()
            .map(CaseOptions::new)
            .map_err(|err: CaseError| CaseError::InvalidOptions(err.to_string())),
        Some(other) => serde_json::from_value(other)
            .map_err(|err| CaseError::InvalidOptions(err.to_string())),
    }
}

fn convert_style_internal(style: CaseStyle, inputs: Option<Value>) -> Result<String, CaseError> {
    let inputs = inputs_from_value(inputs)?;
    convert(style, &inputs)
}

fn to_kebab_case_checked_internal(input: Option<Value>) -> Result<String, CaseError> {
    let input = single_input_from_value(input)?;
    to_kebab_case_checked(&input)
}

fn convert_case_internal(
    inputs: Option<Value>,
    options: Option<Value>,
) -> Result<String, CaseError> {
    let options = options_from_value(options)?;
    let inputs = inputs_from_value(inputs)?;
    convert_with(&inputs, &options)
}

fn convert_case_all_internal(
    inputs: Option<Value>,
) -> Result<BTreeMap<&'static str, String>, CaseError> {
    let inputs = inputs_from_value(inputs)?;
    convert_all(&inputs)
}

fn list_case_styles_internal() -> Vec<CaseStyleInfo> {
    CaseStyle::ALL.iter().map(|style| style.info()).collect()
}

fn read_js(value: JsValue) -> Result<Option<Value>, CaseError> {
    if value.is_undefined() {
        return Ok(None);
    }
    serde_wasm_bindgen::from_value(value)
        .map(Some)
        .map_err(|_| CaseError::NotText {
            index: 0,
            found: "unsupported value",
        })
}

fn to_js_error(err: CaseError) -> JsValue {
    log::debug!("case conversion rejected input: {err}");
    let js_err = js_sys::Error::new(&err.to_string());
    js_err.set_name(err.category());
    js_err.into()
}

fn run_style(style: CaseStyle, inputs: JsValue) -> Result<String, JsValue> {
    read_js(inputs)
        .and_then(|value| convert_style_internal(style, value))
        .map_err(to_js_error)
}

/// `camel("john munene")` or `camel(["John", "Munene"])` returns `"johnMunene"`.
#[wasm_bindgen(js_name = camel)]
pub fn camel_js(inputs: JsValue) -> Result<String, JsValue> {
    run_style(CaseStyle::Camel, inputs)
}

#[wasm_bindgen(js_name = dotCase)]
pub fn dot_case_js(inputs: JsValue) -> Result<String, JsValue> {
    run_style(CaseStyle::Dot, inputs)
}

#[wasm_bindgen(js_name = toKebabCase)]
pub fn to_kebab_case_js(inputs: JsValue) -> Result<String, JsValue> {
    run_style(CaseStyle::Kebab, inputs)
}

#[wasm_bindgen(js_name = toKebabCaseChecked)]
pub fn to_kebab_case_checked_js(input: JsValue) -> Result<String, JsValue> {
    read_js(input)
        .map_err(|err| match err {
            CaseError::NotText { found, .. } => CaseError::InputNotText { found },
            other => other,
        })
        .and_then(to_kebab_case_checked_internal)
        .map_err(to_js_error)
}

#[wasm_bindgen(js_name = convertCase)]
pub fn convert_case(inputs: JsValue, options: JsValue) -> Result<String, JsValue> {
    let options = read_js(options).map_err(to_js_error)?;
    read_js(inputs)
        .and_then(|inputs| convert_case_internal(inputs, options))
        .map_err(to_js_error)
}

#[wasm_bindgen(js_name = convertCaseAll)]
pub fn convert_case_all(inputs: JsValue) -> Result<JsValue, JsValue> {
    let map = read_js(inputs)
        .and_then(convert_case_all_internal)
        .map_err(to_js_error)?;
    // Plain object rather than a JS Map, so callers can index by style id.
    map.serialize(&Serializer::json_compatible())
        .map_err(|err| JsValue::from_str(&err.to_string()))
}

#[wasm_bindgen(js_name = listCaseStyles)]
pub fn list_case_styles() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&list_case_styles_internal())
        .map_err(|err| JsValue::from_str(&err.to_string()))
}
