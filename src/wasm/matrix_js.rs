use crate::affine::T3;
use crate::float_types::Real;
use crate::matrix4::M4;
use crate::vector::V4;
use crate::wasm::{point_js::P3Js, to_js_error, vector_js::V3Js};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct M4Js {
    pub(crate) inner: M4,
}

#[wasm_bindgen]
impl M4Js {
    #[wasm_bindgen(constructor)]
    pub fn identity() -> M4Js {
        M4::identity().into()
    }

    /// 16 values, row-major.
    #[wasm_bindgen(js_name = fromArray)]
    pub fn from_array(values: &[f32]) -> Result<M4Js, JsError> {
        M4::try_from(values).map(M4Js::from).map_err(to_js_error)
    }

    pub fn translate(x: f64, y: f64, z: f64) -> M4Js {
        M4::translate(x as Real, y as Real, z as Real).into()
    }

    pub fn scale(x: f64, y: f64, z: f64) -> M4Js {
        M4::scale(x as Real, y as Real, z as Real).into()
    }

    #[wasm_bindgen(js_name = rotateX)]
    pub fn rotate_x(radians: f64) -> M4Js {
        M4::rotate_x(radians as Real).into()
    }

    #[wasm_bindgen(js_name = rotateY)]
    pub fn rotate_y(radians: f64) -> M4Js {
        M4::rotate_y(radians as Real).into()
    }

    #[wasm_bindgen(js_name = rotateZ)]
    pub fn rotate_z(radians: f64) -> M4Js {
        M4::rotate_z(radians as Real).into()
    }

    // apply self, then other
    pub fn compose(&self, other: &M4Js) -> M4Js {
        self.inner.compose(&other.inner).into()
    }

    /// Returns `[x, y, z, w]`.
    #[wasm_bindgen(js_name = mulV4)]
    pub fn mul_v4(&self, x: f64, y: f64, z: f64, w: f64) -> Vec<f32> {
        let v = V4::new(x as Real, y as Real, z as Real, w as Real);
        self.inner.mul_v4(v).to_array().to_vec()
    }

    #[wasm_bindgen(js_name = transformPoint)]
    pub fn transform_point(&self, p: &P3Js) -> P3Js {
        self.inner.transform_point(p.inner).into()
    }

    /// Upper-left 3×3 block, 9 values row-major.
    #[wasm_bindgen(js_name = upperLeft)]
    pub fn upper_left(&self) -> Vec<f32> {
        self.inner.upper_left().rows().concat()
    }

    pub fn translation(&self) -> V3Js {
        self.inner.translation().into()
    }

    #[wasm_bindgen(js_name = toT3)]
    pub fn to_t3(&self) -> Result<T3Js, JsError> {
        T3::try_from(self.inner).map(T3Js::from).map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = toArray)]
    pub fn to_array(&self) -> Vec<f32> {
        self.inner.rows().concat()
    }

    pub fn equivalent(&self, other: &M4Js, epsilon: f64) -> bool {
        self.inner.equivalent(&other.inner, epsilon as Real)
    }

    #[wasm_bindgen(js_name = toString)]
    pub fn to_js_string(&self) -> String {
        self.inner.to_string()
    }
}

impl From<M4> for M4Js {
    fn from(m: M4) -> Self {
        M4Js { inner: m }
    }
}

#[wasm_bindgen]
pub struct T3Js {
    pub(crate) inner: T3,
}

#[wasm_bindgen]
impl T3Js {
    #[wasm_bindgen(constructor)]
    pub fn identity() -> T3Js {
        T3::identity().into()
    }

    /// 12 values: three linear rows, then the translation row.
    #[wasm_bindgen(js_name = fromArray)]
    pub fn from_array(values: &[f32]) -> Result<T3Js, JsError> {
        T3::try_from(values).map(T3Js::from).map_err(to_js_error)
    }

    pub fn translate(x: f64, y: f64, z: f64) -> T3Js {
        T3::translate(x as Real, y as Real, z as Real).into()
    }

    pub fn scale(x: f64, y: f64, z: f64) -> T3Js {
        T3::scale(x as Real, y as Real, z as Real).into()
    }

    #[wasm_bindgen(js_name = rotateX)]
    pub fn rotate_x(radians: f64) -> T3Js {
        T3::rotate_x(radians as Real).into()
    }

    #[wasm_bindgen(js_name = rotateY)]
    pub fn rotate_y(radians: f64) -> T3Js {
        T3::rotate_y(radians as Real).into()
    }

    #[wasm_bindgen(js_name = rotateZ)]
    pub fn rotate_z(radians: f64) -> T3Js {
        T3::rotate_z(radians as Real).into()
    }

    pub fn compose(&self, other: &T3Js) -> T3Js {
        self.inner.compose(&other.inner).into()
    }

    pub fn transform(&self, p: &P3Js) -> P3Js {
        self.inner.transform(p.inner).into()
    }

    /// Returns `[x, y, z, w]`; see `T3::mul_v3` for what `w` means here.
    #[wasm_bindgen(js_name = mulV3)]
    pub fn mul_v3(&self, v: &V3Js) -> Vec<f32> {
        self.inner.mul_v3(v.inner).to_array().to_vec()
    }

    #[wasm_bindgen(js_name = upperLeft)]
    pub fn upper_left(&self) -> Vec<f32> {
        self.inner.upper_left().rows().concat()
    }

    pub fn translation(&self) -> V3Js {
        self.inner.translation().into()
    }

    #[wasm_bindgen(js_name = toM4)]
    pub fn to_m4(&self) -> M4Js {
        M4::from(self.inner).into()
    }

    #[wasm_bindgen(js_name = toArray)]
    pub fn to_array(&self) -> Vec<f32> {
        self.inner.rows().concat()
    }

    pub fn equivalent(&self, other: &T3Js, epsilon: f64) -> bool {
        self.inner.equivalent(&other.inner, epsilon as Real)
    }

    #[wasm_bindgen(js_name = toString)]
    pub fn to_js_string(&self) -> String {
        self.inner.to_string()
    }
}

impl From<T3> for T3Js {
    fn from(t: T3) -> Self {
        T3Js { inner: t }
    }
}
