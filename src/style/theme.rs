use glam::Vec4;

const fn rgb(r: u8, g: u8, b: u8) -> Vec4 {
    Vec4::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
}

/// Colors for one visual state of a widget.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Colors {
    pub text: Vec4,
    pub background: Vec4,
    pub border: Vec4,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Theme {
    pub background: Vec4,
    pub normal: Colors,
    pub hover: Colors,
    pub disabled: Colors,
    pub primary: Colors,
    pub selection: Colors,
    pub selection_hover: Colors,
    pub inverse: Colors,
    /// Fill colors for the debug-kids draw mode, cycled by kid index.
    pub debug_colors: [Vec4; 4],
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: rgb(0xfc, 0xfc, 0xfc),
            normal: Colors {
                text: rgb(0x33, 0x33, 0x33),
                background: rgb(0xf8, 0xf8, 0xf8),
                border: rgb(0xbb, 0xbb, 0xbb),
            },
            hover: Colors {
                text: rgb(0x22, 0x22, 0x22),
                background: rgb(0xff, 0xff, 0xff),
                border: rgb(0x3b, 0x82, 0xf6),
            },
            disabled: Colors {
                text: rgb(0x88, 0x88, 0x88),
                background: rgb(0xf0, 0xf0, 0xf0),
                border: rgb(0xe0, 0xe0, 0xe0),
            },
            primary: Colors {
                text: rgb(0xff, 0xff, 0xff),
                background: rgb(0x25, 0x63, 0xeb),
                border: rgb(0x1d, 0x4e, 0xd8),
            },
            selection: Colors {
                text: rgb(0xff, 0xff, 0xff),
                background: rgb(0xbb, 0xbb, 0xbb),
                border: rgb(0xbb, 0xbb, 0xbb),
            },
            selection_hover: Colors {
                text: rgb(0xff, 0xff, 0xff),
                background: rgb(0x3b, 0x82, 0xf6),
                border: rgb(0x3b, 0x82, 0xf6),
            },
            inverse: Colors {
                text: rgb(0xff, 0xff, 0xff),
                background: rgb(0x44, 0x44, 0x44),
                border: rgb(0x44, 0x44, 0x44),
            },
            debug_colors: [
                rgb(0xff, 0xaa, 0xaa),
                rgb(0xaa, 0xff, 0xaa),
                rgb(0xaa, 0xaa, 0xff),
                rgb(0xff, 0xff, 0xaa),
            ],
        }
    }
}
