use crate::core::data::colour::Colour;
use crate::core::data::escape::Escape;

pub trait ColourMap: Send + Sync {
    fn map(&self, escape: Escape) -> Colour;
}
