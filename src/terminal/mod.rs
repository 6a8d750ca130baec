//! Terminal module: a character-grid [`Surface`](crate::render::Surface)
//! painted with crossterm.

mod surface;

pub use surface::TerminalSurface;
