pub mod assets;
pub mod flags;
pub mod scaffold;
pub mod template;
pub mod toolchain;
