#[cfg(target_arch = "wasm32")]
pub mod websys;
#[cfg(target_arch = "wasm32")]
pub use websys as platform;

#[cfg(not(target_arch = "wasm32"))]
pub mod headless;
#[cfg(not(target_arch = "wasm32"))]
pub use headless as platform;
