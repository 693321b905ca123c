//! Owner identification and per-owner data storage.
//!
//! ## Owner
//!
//! The four fixed participants: one human and three automated players.
//! Declaration order is turn order and tie-break order.
//!
//! ## OwnerMap
//!
//! Per-owner storage backed by a fixed array for O(1) access.
//! Supports iteration and indexing by `Owner`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::error::{ConquestError, Result};

/// Number of participants in every game.
pub const OWNER_COUNT: usize = 4;

/// A participant capable of claiming cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Owner {
    Human,
    Bot1,
    Bot2,
    Bot3,
}

impl Owner {
    /// All owners in turn order.
    pub const ALL: [Owner; OWNER_COUNT] = [Owner::Human, Owner::Bot1, Owner::Bot2, Owner::Bot3];

    /// Automated owners in the order they act each round.
    pub const BOTS: [Owner; 3] = [Owner::Bot1, Owner::Bot2, Owner::Bot3];

    /// Position in turn order (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look up an owner by turn-order index.
    ///
    /// ```
    /// use territory_conquest::core::Owner;
    ///
    /// assert_eq!(Owner::from_index(2).unwrap(), Owner::Bot2);
    /// assert!(Owner::from_index(4).is_err());
    /// ```
    pub fn from_index(index: u8) -> Result<Self> {
        Self::ALL
            .get(index as usize)
            .copied()
            .ok_or(ConquestError::UnknownOwner(index))
    }

    /// True for the three bots.
    #[must_use]
    pub const fn is_automated(self) -> bool {
        !matches!(self, Owner::Human)
    }

    /// Short stable name, used by hosts for labels and lookups.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Owner::Human => "human",
            Owner::Bot1 => "bot1",
            Owner::Bot2 => "bot2",
            Owner::Bot3 => "bot3",
        }
    }
}

impl std::fmt::Display for Owner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Owner::Human => write!(f, "Human"),
            bot => write!(f, "Bot {}", bot.index()),
        }
    }
}

/// Per-owner data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use territory_conquest::core::{Owner, OwnerMap};
///
/// let mut counts: OwnerMap<u32> = OwnerMap::with_value(1);
/// counts[Owner::Bot2] += 1;
/// assert_eq!(counts[Owner::Bot2], 2);
/// assert_eq!(counts[Owner::Human], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnerMap<T> {
    data: [T; OWNER_COUNT],
}

impl<T> OwnerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Owner) -> T) -> Self {
        Self {
            data: Owner::ALL.map(factory),
        }
    }

    /// Create a map with every entry set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a map with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    #[must_use]
    pub fn get(&self, owner: Owner) -> &T {
        &self.data[owner.index()]
    }

    pub fn get_mut(&mut self, owner: Owner) -> &mut T {
        &mut self.data[owner.index()]
    }

    /// Iterate over (Owner, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Owner, &T)> {
        Owner::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (Owner, &mut T) pairs in turn order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Owner, &mut T)> {
        Owner::ALL.into_iter().zip(self.data.iter_mut())
    }
}

impl<T> Index<Owner> for OwnerMap<T> {
    type Output = T;

    fn index(&self, owner: Owner) -> &Self::Output {
        self.get(owner)
    }
}

impl<T> IndexMut<Owner> for OwnerMap<T> {
    fn index_mut(&mut self, owner: Owner) -> &mut Self::Output {
        self.get_mut(owner)
    }
}
