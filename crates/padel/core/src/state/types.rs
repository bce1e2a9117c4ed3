use core::ops::{Index, IndexMut};

/// One of the two teams on court.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Team {
    A,
    B,
}

impl Team {
    pub const ALL: [Team; 2] = [Team::A, Team::B];

    /// Returns the opposing team.
    #[inline]
    pub const fn other(self) -> Self {
        match self {
            Team::A => Team::B,
            Team::B => Team::A,
        }
    }
}

/// Court side the server is serving from.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Side {
    #[default]
    Right,
    Left,
}

impl Side {
    #[inline]
    pub const fn flip(self) -> Self {
        match self {
            Side::Right => Side::Left,
            Side::Left => Side::Right,
        }
    }
}

/// Which of a team's two players is meant.
///
/// Index 0 is `First`, index 1 is `Second`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerSlot {
    #[default]
    First,
    Second,
}

impl PlayerSlot {
    pub const fn index(self) -> usize {
        match self {
            PlayerSlot::First => 0,
            PlayerSlot::Second => 1,
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(PlayerSlot::First),
            1 => Some(PlayerSlot::Second),
            _ => None,
        }
    }

    #[inline]
    pub const fn toggle(self) -> Self {
        match self {
            PlayerSlot::First => PlayerSlot::Second,
            PlayerSlot::Second => PlayerSlot::First,
        }
    }
}

/// A value held once per team.
///
/// The key domain is closed, so this is a pair of named fields rather than a
/// map; indexing by [`Team`] is exhaustive and cannot miss.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerTeam<T> {
    pub a: T,
    pub b: T,
}

impl<T> PerTeam<T> {
    pub const fn new(a: T, b: T) -> Self {
        Self { a, b }
    }

    #[inline]
    pub fn get(&self, team: Team) -> &T {
        match team {
            Team::A => &self.a,
            Team::B => &self.b,
        }
    }

    #[inline]
    pub fn get_mut(&mut self, team: Team) -> &mut T {
        match team {
            Team::A => &mut self.a,
            Team::B => &mut self.b,
        }
    }

    pub fn map<U, F>(self, mut f: F) -> PerTeam<U>
    where
        F: FnMut(T) -> U,
    {
        PerTeam {
            a: f(self.a),
            b: f(self.b),
        }
    }

    /// Iterates `(team, value)` pairs, team A first.
    pub fn iter(&self) -> impl Iterator<Item = (Team, &T)> {
        [(Team::A, &self.a), (Team::B, &self.b)].into_iter()
    }
}

impl<T: Clone> PerTeam<T> {
    pub fn splat(value: T) -> Self {
        Self {
            a: value.clone(),
            b: value,
        }
    }
}

impl PerTeam<u32> {
    /// Absolute difference between the two counts.
    #[inline]
    pub fn gap(&self) -> u32 {
        self.a.abs_diff(self.b)
    }

    #[inline]
    pub fn total(&self) -> u32 {
        self.a + self.b
    }
}

impl<T> Index<Team> for PerTeam<T> {
    type Output = T;

    fn index(&self, team: Team) -> &T {
        self.get(team)
    }
}

impl<T> IndexMut<Team> for PerTeam<T> {
    fn index_mut(&mut self, team: Team) -> &mut T {
        self.get_mut(team)
    }
}
