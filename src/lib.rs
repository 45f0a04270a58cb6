pub mod core;
pub mod gen;
pub mod pluck;
pub mod random;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn start() {
  #[cfg(feature = "console_error_panic_hook")]
  console_error_panic_hook::set_once();
}
