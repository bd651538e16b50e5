use glam::{IVec2, ivec2};

use crate::{
    layout::Kid,
    style::{Align, Flex, FlexDir, Justify},
};

/// Places already laid out kids along one axis.
///
/// Only kid origins are written, except with `Align::Stretch` where every
/// kid is widened to the largest cross size. Returns the content size.
pub fn compute(flex: Flex, kids: &mut [Kid], avail: IVec2, content_origin: IVec2) -> IVec2 {
    let row = flex.dir == FlexDir::Row;
    let main = |v: IVec2| if row { v.x } else { v.y };
    let cross = |v: IVec2| if row { v.y } else { v.x };
    let along = |m: i32, c: i32| if row { ivec2(m, c) } else { ivec2(c, m) };

    let gaps = flex.gap * (kids.len() as i32 - 1).max(0);
    let (mut main_used, mut cross_max) = (gaps, 0);
    for k in kids.iter() {
        main_used += main(k.slot.rect.size);
        cross_max = cross_max.max(cross(k.slot.rect.size));
    }

    let free = (main(avail) - main_used).max(0);
    let (offset, spread) = match flex.justify {
        Justify::Start => (0, 0),
        Justify::Center => (free / 2, 0),
        Justify::End => (free, 0),
        Justify::SpaceBetween if kids.len() > 1 => (0, free / (kids.len() as i32 - 1)),
        Justify::SpaceBetween => (0, 0),
    };

    let mut cursor = offset;
    for k in kids.iter_mut() {
        let size = k.slot.rect.size;
        let cross_offset = match flex.align {
            Align::Center => (cross_max - cross(size)).max(0) / 2,
            Align::End => (cross_max - cross(size)).max(0),
            Align::Start | Align::Stretch => 0,
        };
        if flex.align == Align::Stretch {
            k.slot.natural = Some(size);
            k.slot.rect.size = along(main(size), cross_max);
        }
        k.slot.rect.origin = content_origin + along(cursor, cross_offset);
        cursor += main(size) + flex.gap + spread;
    }

    let main_extent = if flex.justify == Justify::Start {
        main_used
    } else {
        main_used.max(main(avail))
    };
    along(main_extent, cross_max)
}
