use crate::consts;
use enum_map::Enum;
use ratatui::layout::{Flex, Layout, Rect, Size};

/// Center a `size`-sized rectangle within `area`
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [rect] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::vertical([size.height]).flex(Flex::Center).areas(rect);
    rect
}

pub(crate) fn get_display_area(buffer_area: Rect) -> Rect {
    center_rect(buffer_area, consts::DISPLAY_SIZE)
}

/// Navigation helpers for fieldless `Enum` types used as menu entries
pub(crate) trait EnumExt: Enum + Copy {
    fn min() -> Self {
        Self::from_usize(0)
    }

    fn max() -> Self {
        Self::from_usize(Self::LENGTH - 1)
    }

    fn next(self) -> Option<Self> {
        let i = self.into_usize() + 1;
        (i < Self::LENGTH).then(|| Self::from_usize(i))
    }

    fn prev(self) -> Option<Self> {
        self.into_usize().checked_sub(1).map(Self::from_usize)
    }

    fn iter() -> impl Iterator<Item = Self> {
        (0..Self::LENGTH).map(Self::from_usize)
    }
}

impl<T: Enum + Copy> EnumExt for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
    enum Sample {
        A,
        B,
        C,
    }

    #[rstest]
    #[case(Rect::new(0, 0, 80, 24), Size::new(14, 14), Rect::new(33, 5, 14, 14))]
    #[case(Rect::new(0, 0, 80, 24), Size::new(80, 24), Rect::new(0, 0, 80, 24))]
    #[case(Rect::new(10, 2, 60, 20), Size::new(20, 10), Rect::new(30, 7, 20, 10))]
    fn test_center_rect(#[case] area: Rect, #[case] size: Size, #[case] r: Rect) {
        assert_eq!(center_rect(area, size), r);
    }

    #[test]
    fn enum_navigation() {
        assert_eq!(Sample::min(), Sample::A);
        assert_eq!(Sample::max(), Sample::C);
        assert_eq!(Sample::A.next(), Some(Sample::B));
        assert_eq!(Sample::C.next(), None);
        assert_eq!(Sample::A.prev(), None);
        assert_eq!(Sample::B.prev(), Some(Sample::A));
        assert_eq!(Sample::iter().count(), 3);
    }
}
