use crate::float_types::Real;
use crate::vector::V3;
use crate::wasm::to_js_error;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct V3Js {
    pub(crate) inner: V3,
}

#[wasm_bindgen]
impl V3Js {
    #[wasm_bindgen(constructor)]
    pub fn new(x: f64, y: f64, z: f64) -> V3Js {
        V3Js {
            inner: V3::new(x as Real, y as Real, z as Real),
        }
    }

    #[wasm_bindgen(js_name = fromArray)]
    pub fn from_array(values: &[f32]) -> Result<V3Js, JsError> {
        V3::try_from(values).map(V3Js::from).map_err(to_js_error)
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

    pub fn dot(&self, other: &V3Js) -> f64 {
        self.inner.dot(other.inner) as f64
    }

    pub fn cross(&self, other: &V3Js) -> V3Js {
        self.inner.cross(other.inner).into()
    }

    pub fn add(&self, other: &V3Js) -> V3Js {
        (self.inner + other.inner).into()
    }

    pub fn sub(&self, other: &V3Js) -> V3Js {
        (self.inner - other.inner).into()
    }

    pub fn length(&self) -> f64 {
        self.inner.length() as f64
    }

    pub fn equivalent(&self, other: &V3Js, epsilon: f64) -> bool {
        self.inner.equivalent(other.inner, epsilon as Real)
    }

    #[wasm_bindgen(js_name = toString)]
    pub fn to_js_string(&self) -> String {
        self.inner.to_string()
    }
}

// Rust-only conversions
impl From<V3> for V3Js {
    fn from(v: V3) -> Self {
        V3Js { inner: v }
    }
}

impl From<&V3Js> for V3 {
    fn from(v: &V3Js) -> Self {
        v.inner
    }
}
