use crate::errors::MathError;
use wasm_bindgen::prelude::*;

pub mod matrix_js;
pub mod point_js;
pub mod vector_js;

fn to_js_error(err: MathError) -> JsError {
    JsError::new(&err.to_string())
}
