pub mod font;
pub mod sprite;
pub mod sprites;
