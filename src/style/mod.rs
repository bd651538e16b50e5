pub mod properties;
pub mod theme;

pub use properties::{Align, Flex, FlexDir, Grid, Justify};
pub use theme::{Colors, Theme};
