use enum_dispatch::enum_dispatch;
use enum_map::Enum;
use serde::Deserialize;
use std::fmt;
use std::time::Duration;

/// Gameplay options.  Each field corresponds to a constant that the game
/// hard-codes in its default configuration; all of them are adjustable from
/// the main menu, and their defaults can be set in the configuration file.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct Options {
    pub(crate) grid_size: GridSize,
    pub(crate) speed: Speed,
    /// When true, the snake holds still until the first steering key
    pub(crate) wait_for_key: bool,
}

impl Options {
    pub(crate) fn get(&self, key: OptKey) -> OptValue {
        match key {
            OptKey::GridSize => self.grid_size.into(),
            OptKey::Speed => self.speed.into(),
            OptKey::WaitForKey => self.wait_for_key.into(),
        }
    }

    pub(crate) fn set(&mut self, key: OptKey, value: OptValue) {
        match key {
            OptKey::GridSize => {
                self.grid_size = value
                    .try_into()
                    .expect("Options::set(GridSize, value) called with non-GridSize value");
            }
            OptKey::Speed => {
                self.speed = value
                    .try_into()
                    .expect("Options::set(Speed, value) called with non-Speed value");
            }
            OptKey::WaitForKey => {
                self.wait_for_key = value
                    .try_into()
                    .expect("Options::set(WaitForKey, value) called with non-Bool value");
            }
        }
    }
}

impl Default for Options {
    fn default() -> Options {
        Options {
            grid_size: GridSize::default(),
            speed: Speed::default(),
            wait_for_key: true,
        }
    }
}

#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
pub(crate) enum OptKey {
    GridSize,
    Speed,
    WaitForKey,
}

impl OptKey {
    pub(crate) const DISPLAY_WIDTH: u16 = 12;

    pub(crate) fn iter() -> impl Iterator<Item = OptKey> {
        (0..Self::LENGTH).map(Self::from_usize)
    }

    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            OptKey::GridSize => "Grid Size",
            OptKey::Speed => "Speed",
            OptKey::WaitForKey => "Wait For Key",
        }
    }
}

impl fmt::Display for OptKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[enum_dispatch]
pub(crate) trait Adjustable {
    fn increase(&mut self);
    fn decrease(&mut self);
    fn toggle(&mut self);
    fn can_increase(&self) -> bool;
    fn can_decrease(&self) -> bool;
}

#[enum_dispatch(Adjustable)] // This also gives us From and TryInto
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum OptValue {
    Bool(bool),
    GridSize,
    Speed,
}

impl OptValue {
    pub(crate) const DISPLAY_WIDTH: u16 = 10;
}

// This is needed for EnumMap to be convenient to construct.
impl Default for OptValue {
    fn default() -> OptValue {
        OptValue::Bool(false)
    }
}

impl fmt::Display for OptValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            OptValue::Bool(false) => write!(f, "   [ ]    "),
            OptValue::Bool(true) => write!(f, "   [✓]    "),
            OptValue::GridSize(sz) => {
                write!(
                    f,
                    "{left} {sz:6} {right}",
                    left = if sz.can_decrease() { '◀' } else { '◁' },
                    right = if sz.can_increase() { '▶' } else { '▷' }
                )
            }
            OptValue::Speed(sp) => {
                write!(
                    f,
                    "{left} {sp:6} {right}",
                    left = if sp.can_decrease() { '◀' } else { '◁' },
                    right = if sp.can_increase() { '▶' } else { '▷' }
                )
            }
        }
    }
}

impl Adjustable for bool {
    fn increase(&mut self) {
        *self = true;
    }

    fn decrease(&mut self) {
        *self = false;
    }

    fn toggle(&mut self) {
        *self = !*self;
    }

    fn can_increase(&self) -> bool {
        !*self
    }

    fn can_decrease(&self) -> bool {
        *self
    }
}

/// Edge length of the square board, in cells
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum GridSize {
    #[default]
    Small,
    Large,
}

impl GridSize {
    pub(crate) fn cells(self) -> u16 {
        match self {
            GridSize::Small => 12,
            GridSize::Large => 20,
        }
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GridSize::Small => "Small",
            GridSize::Large => "Large",
        };
        f.pad(name)
    }
}

impl Adjustable for GridSize {
    fn increase(&mut self) {
        *self = GridSize::Large;
    }

    fn decrease(&mut self) {
        *self = GridSize::Small;
    }

    fn toggle(&mut self) {}

    fn can_increase(&self) -> bool {
        *self != GridSize::Large
    }

    fn can_decrease(&self) -> bool {
        *self != GridSize::Small
    }
}

/// How often the snake moves
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Speed {
    #[default]
    Slow,
    Fast,
}

impl Speed {
    /// Time between movements of the snake
    pub(crate) fn tick_period(self) -> Duration {
        match self {
            Speed::Slow => Duration::from_millis(200),
            Speed::Fast => Duration::from_millis(100),
        }
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Speed::Slow => "Slow",
            Speed::Fast => "Fast",
        };
        f.pad(name)
    }
}

impl Adjustable for Speed {
    fn increase(&mut self) {
        *self = Speed::Fast;
    }

    fn decrease(&mut self) {
        *self = Speed::Slow;
    }

    fn toggle(&mut self) {}

    fn can_increase(&self) -> bool {
        *self != Speed::Fast
    }

    fn can_decrease(&self) -> bool {
        *self != Speed::Slow
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod opt_key {
        use super::*;

        #[test]
        fn display_width() {
            let actual_width = OptKey::iter()
                .map(|key| key.as_str().chars().count())
                .max()
                .unwrap();
            assert_eq!(actual_width, usize::from(OptKey::DISPLAY_WIDTH));
        }

        #[test]
        fn fmt_width() {
            assert_eq!(
                format!(
                    "{:width$}",
                    OptKey::Speed,
                    width = usize::from(OptKey::DISPLAY_WIDTH)
                ),
                "Speed       "
            );
        }
    }

    mod opt_value {
        use super::*;

        #[test]
        fn display_width() {
            let actual_width = [
                OptValue::Bool(false),
                OptValue::Bool(true),
                OptValue::GridSize(GridSize::Small),
                OptValue::GridSize(GridSize::Large),
                OptValue::Speed(Speed::Slow),
                OptValue::Speed(Speed::Fast),
            ]
            .iter()
            .map(|value| value.to_string().chars().count())
            .max()
            .unwrap();
            assert_eq!(actual_width, usize::from(OptValue::DISPLAY_WIDTH));
        }
    }

    mod options {
        use super::*;

        #[test]
        fn get_set_roundtrip() {
            let mut opts = Options::default();
            for key in OptKey::iter() {
                let mut value = opts.get(key);
                value.increase();
                opts.set(key, value);
                assert_eq!(opts.get(key), value);
            }
            assert_eq!(
                opts,
                Options {
                    grid_size: GridSize::Large,
                    speed: Speed::Fast,
                    wait_for_key: true,
                }
            );
        }

        #[test]
        fn defaults() {
            let opts = Options::default();
            assert_eq!(opts.grid_size.cells(), 12);
            assert_eq!(opts.speed.tick_period(), Duration::from_millis(200));
            assert!(opts.wait_for_key);
        }
    }
}
