pub mod constants;
pub mod form;
pub mod particles;
pub mod projects;
pub mod reveal;
pub mod scroll;
pub mod theme;
pub mod validate;

pub use constants::*;
pub use form::*;
pub use particles::*;
pub use projects::*;
pub use reveal::*;
pub use scroll::*;
pub use theme::*;
pub use validate::*;
