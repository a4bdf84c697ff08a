//! Team identity pool: the fixed set of row keys.
//!
//! Every sidebar row is backed by a team named after one of these color codes,
//! and the same code is the team's only member. A bare color code renders as
//! nothing, so the member name stays invisible while the team prefix shows.

use std::fmt;

/// Number of addressable sidebar rows.
pub const POOL_SIZE: usize = 15;

const CODES: [&str; POOL_SIZE] = [
    "§1", "§2", "§3", "§4", "§5", "§6", "§7", "§8", "§9", "§a", "§b", "§c", "§d", "§e", "§f",
];

/// One row key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TeamColor(u8);

impl TeamColor {
    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn as_str(self) -> &'static str {
        CODES[self.index()]
    }
}

impl fmt::Display for TeamColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The ordered pool of row keys.
pub struct TeamPool;

impl TeamPool {
    pub const fn size() -> usize {
        POOL_SIZE
    }

    /// Color at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= TeamPool::size()`.
    pub fn at(index: usize) -> TeamColor {
        match Self::get(index) {
            Some(color) => color,
            None => panic!("team pool index {index} out of range 0..{POOL_SIZE}"),
        }
    }

    pub fn get(index: usize) -> Option<TeamColor> {
        (index < POOL_SIZE).then(|| TeamColor(index as u8))
    }

    pub fn iter() -> impl Iterator<Item = TeamColor> {
        (0..POOL_SIZE as u8).map(TeamColor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn pool_has_fifteen_unique_codes() {
        assert_eq!(TeamPool::size(), 15);
        let unique: HashSet<&str> = TeamPool::iter().map(TeamColor::as_str).collect();
        assert_eq!(unique.len(), 15);
    }

    #[test]
    fn pool_is_ordered() {
        let colors: Vec<TeamColor> = TeamPool::iter().collect();
        assert!(colors.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(TeamPool::at(0).as_str(), "§1");
        assert_eq!(TeamPool::at(14).to_string(), "§f");
    }

    #[test]
    fn out_of_range_lookup() {
        assert_eq!(TeamPool::get(15), None);
        assert!(std::panic::catch_unwind(|| TeamPool::at(15)).is_err());
    }
}
