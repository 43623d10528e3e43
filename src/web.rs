//! WASM entry point - slider-driven hand with a smoothed wrist

use crate::dynamics::WristSmoother;
use crate::kinematics::render;
use crate::pose::{Pose, PoseField};
use crate::render::SvgWriter;
use wasm_bindgen::prelude::*;

/// Hand state owned by the page. Each control calls [`HandDemo::set`] with its
/// channel name; the page asks for a fresh SVG every animation frame.
#[wasm_bindgen]
pub struct HandDemo {
    pose: Pose,
    smoother: WristSmoother,
    writer: SvgWriter,
}

#[wasm_bindgen]
impl HandDemo {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            pose: Pose::DEFAULT,
            smoother: WristSmoother::default(),
            writer: SvgWriter::default(),
        }
    }

    /// Replaces one channel, clamped to its slider range.
    pub fn set(&mut self, field: &str, value: f32) -> Result<(), JsValue> {
        let field: PoseField = field
            .parse()
            .map_err(|e: crate::HandError| JsValue::from_str(&e.to_string()))?;
        self.pose = self.pose.with_clamped(field, value);
        Ok(())
    }

    pub fn get(&self, field: &str) -> Option<f32> {
        PoseField::from_name(field).map(|f| self.pose.get(f))
    }

    /// Slider readout for a channel.
    pub fn readout(&self, field: &str) -> Option<String> {
        self.get(field).map(PoseField::format_value)
    }

    pub fn reset(&mut self) {
        self.pose.reset();
    }

    /// Replaces the whole pose from a JSON object carrying all eight fields.
    pub fn load(&mut self, json: &str) -> Result<(), JsValue> {
        self.pose = serde_json::from_str(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(())
    }

    /// Advances the wrist animation by `dt` seconds and returns the SVG to show.
    pub fn frame(&mut self, dt: f32) -> String {
        let shown = self.smoother.update(&self.pose, dt.min(0.1));
        self.writer.render_to_string(&render(&shown))
    }
}

impl Default for HandDemo {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Warn).expect("Failed to init logger");
}
