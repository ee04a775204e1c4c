//! Navigation Engine
//!
//! Circular, category-filtered, bidirectional traversal over the tracked
//! collection. The cursor is `None` when nothing is selected.
//!
//! The collection can be rebuilt between two commands, so a cursor is
//! always re-checked against the current length before it is dereferenced.
//! No operation fails: every anomaly ends in "nothing selected".

use waymark_a11y::{Category, Direction};

/// Page-side effects of a navigation step
pub trait NavigationHost<T> {
    /// Category of an element, computed on demand
    fn category_of(&self, element: &T) -> Category;

    /// Remove the selection marker
    fn clear(&mut self, element: &T);

    /// Mark, focus and scroll to an element
    fn select(&mut self, element: &T);

    /// Scroll the viewport back to the document origin
    fn scroll_to_origin(&mut self);
}

/// Next index of `category` from `start` in `direction`, wrapping at the ends.
///
/// An empty collection returns `start` unchanged. Running off the end of
/// the collection yields `None`, and the following call wraps around.
pub fn advance<T, F>(
    start: Option<usize>,
    direction: Direction,
    category: Category,
    collection: &[T],
    category_of: F,
) -> Option<usize>
where
    F: Fn(&T) -> Category,
{
    let len = collection.len();
    if len == 0 {
        return start;
    }

    match direction {
        Direction::Forward => {
            let from = match start {
                Some(i) if i < len - 1 => i + 1,
                _ => 0,
            };
            (from..len).find(|&i| category_of(&collection[i]) == category)
        }
        Direction::Backward => {
            let until = start.unwrap_or(len).min(len);
            (0..until).rev().find(|&i| category_of(&collection[i]) == category)
        }
    }
}

/// Cursor, direction and the highlighted element for one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState<T> {
    cursor: Option<usize>,
    direction: Direction,
    /// Element carrying the highlight; survives collection rebuilds
    highlighted: Option<T>,
}

impl<T> Default for NavigationState<T> {
    fn default() -> Self {
        Self {
            cursor: None,
            direction: Direction::Forward,
            highlighted: None,
        }
    }
}

impl<T: Clone + PartialEq> NavigationState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn highlighted(&self) -> Option<&T> {
        self.highlighted.as_ref()
    }

    /// Takes effect on the next `move_to_next`
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Element under the cursor, if the cursor is still in bounds
    pub fn selected<'a>(&self, collection: &'a [T]) -> Option<&'a T> {
        self.cursor.and_then(|i| collection.get(i))
    }

    /// Clear the highlighted element, then the cursor element if it differs
    fn clear_selection<H>(&mut self, collection: &[T], host: &mut H)
    where
        H: NavigationHost<T>,
    {
        let previous = self.highlighted.take();
        if let Some(previous) = &previous {
            host.clear(previous);
        }
        if let Some(current) = self.selected(collection).filter(|&c| previous.as_ref() != Some(c)) {
            host.clear(current);
        }
    }

    /// Move to the next element of `category` and select it
    pub fn move_to_next<H>(&mut self, category: Category, collection: &[T], host: &mut H) -> Option<usize>
    where
        H: NavigationHost<T>,
    {
        self.clear_selection(collection, host);

        let next = advance(self.cursor, self.direction, category, collection, |e| host.category_of(e));
        self.cursor = next;

        match self.selected(collection) {
            Some(element) => {
                host.select(element);
                self.highlighted = Some(element.clone());
                tracing::trace!(index = ?next, %category, "selected");
            }
            None => tracing::trace!(%category, "no selection"),
        }
        next
    }

    /// Clear the selection, face forward and scroll to the top
    pub fn reset_to_top<H>(&mut self, collection: &[T], host: &mut H)
    where
        H: NavigationHost<T>,
    {
        self.clear_selection(collection, host);
        self.cursor = None;
        self.direction = Direction::Forward;
        host.scroll_to_origin();
    }
}
