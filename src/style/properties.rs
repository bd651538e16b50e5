use glam::IVec2;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum FlexDir {
    Row,
    #[default]
    Column,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Justify {
    #[default]
    Start,
    Center,
    End,
    SpaceBetween,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Start,
    Center,
    End,
    Stretch,
}

/// How a [`Stack`](crate::widgets::Stack) places its kids.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct Flex {
    pub dir: FlexDir,
    pub justify: Justify,
    pub align: Align,
    pub gap: i32,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    pub cols: u16,
    pub gap: IVec2,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            cols: 1,
            gap: IVec2::ZERO,
        }
    }
}
