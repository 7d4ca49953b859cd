use crate::float_types::Real;
use crate::point::P3;
use crate::wasm::{matrix_js::T3Js, to_js_error, vector_js::V3Js};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct P3Js {
    pub(crate) inner: P3,
}

#[wasm_bindgen]
impl P3Js {
    #[wasm_bindgen(constructor)]
    pub fn new(x: f64, y: f64, z: f64) -> P3Js {
        P3Js {
            inner: P3::new(x as Real, y as Real, z as Real),
        }
    }

    #[wasm_bindgen(js_name = fromArray)]
    pub fn from_array(values: &[f32]) -> Result<P3Js, JsError> {
        P3::try_from(values).map(P3Js::from).map_err(to_js_error)
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> f64 {
        self.inner.x as f64
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> f64 {
        self.inner.y as f64
    }

    #[wasm_bindgen(getter)]
    pub fn z(&self) -> f64 {
        self.inner.z as f64
    }

    // point + vector = point
    #[wasm_bindgen(js_name = addVector)]
    pub fn add_vector(&self, v: &V3Js) -> P3Js {
        (self.inner + v.inner).into()
    }

    // point - vector = point
    #[wasm_bindgen(js_name = subVector)]
    pub fn sub_vector(&self, v: &V3Js) -> P3Js {
        (self.inner - v.inner).into()
    }

    // point - point = vector
    #[wasm_bindgen(js_name = vectorFrom)]
    pub fn vector_from(&self, other: &P3Js) -> V3Js {
        (self.inner - other.inner).into()
    }

    pub fn distance(&self, other: &P3Js) -> f64 {
        self.inner.distance(other.inner) as f64
    }

    pub fn transform(&self, t: &T3Js) -> P3Js {
        self.inner.transform(&t.inner).into()
    }

    pub fn equivalent(&self, other: &P3Js, epsilon: f64) -> bool {
        self.inner.equivalent(other.inner, epsilon as Real)
    }

    #[wasm_bindgen(js_name = toString)]
    pub fn to_js_string(&self) -> String {
        self.inner.to_string()
    }
}

// Rust-only conversions (not visible to JS)
impl From<P3> for P3Js {
    fn from(p: P3) -> Self {
        P3Js { inner: p }
    }
}

impl From<&P3Js> for P3 {
    fn from(p: &P3Js) -> Self {
        p.inner
    }
}
