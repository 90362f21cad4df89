//! Per-ship projectile storage.
//!
//! A ship owns its shots in a plain `Vec`. Hits and expiry only flip an
//! `active` flag; the owner compacts the storage once per tick in
//! [`ProjectileArena::sweep`] with `swap_remove`, so nothing is ever removed
//! while another system is iterating.
//!
//! # Invariants
//! - Order is not stable across a sweep.
//! - `len()` counts inactive entries until the next sweep. Fire caps compare
//!   against `len()`, so a shot that just hit still occupies its slot for the
//!   rest of the tick.

pub trait Projectile {
    fn is_active(&self) -> bool;
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectileArena<T> {
    items: Vec<T>,
}

impl<T> Default for ProjectileArena<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Projectile> ProjectileArena<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    pub fn active(&self) -> impl Iterator<Item = &T> {
        self.items.iter().filter(|p| p.is_active())
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Drop every inactive entry. Returns how many were removed.
    pub fn sweep(&mut self) -> usize {
        let mut removed = 0;
        let mut i = 0;
        while i < self.items.len() {
            if self.items[i].is_active() {
                i += 1;
            } else {
                // The swapped-in tail element lands at `i` and is checked next.
                self.items.swap_remove(i);
                removed += 1;
            }
        }
        removed
    }
}

impl<'a, T: Projectile> IntoIterator for &'a ProjectileArena<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
