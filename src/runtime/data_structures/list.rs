use crate::runtime::error::{self, script_error_str, ErrorKind};
use std::{
    fmt::{self, Debug, Formatter},
    rc::Rc,
};

/// A single cell of a list.  Cells are never modified once they are linked into a list.
struct Node<T> {
    head: T,
    tail: Option<Rc<Node<T>>>,
}

/// A persistent singly-linked list.  Prepending shares the existing list as the tail of a new cell,
/// so a list can be held by any number of stack slots, queue items and quotations at once without
/// copying.
///
/// The empty list holds no allocation at all, every empty list is the same value.
pub struct List<T> {
    first: Option<Rc<Node<T>>>,
}

/// Iterate over the elements of a list from the head onwards.
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.tail.as_deref();
            &node.head
        })
    }
}

impl<T> List<T> {
    /// The empty list.
    pub const fn null() -> List<T> {
        List { first: None }
    }

    /// Is this the empty list?
    pub fn is_null(&self) -> bool {
        self.first.is_none()
    }

    /// Create a new list with the element prepended to this one.  This list is left untouched.
    pub fn cons(&self, head: T) -> List<T> {
        List {
            first: Some(Rc::new(Node {
                head,
                tail: self.first.clone(),
            })),
        }
    }

    /// The first element of the list.
    pub fn head(&self) -> error::Result<&T> {
        match &self.first {
            Some(node) => Ok(&node.head),
            None => script_error_str(ErrorKind::EmptyList, "head of empty list"),
        }
    }

    /// Everything but the first element of the list.
    pub fn tail(&self) -> error::Result<List<T>> {
        match &self.first {
            Some(node) => Ok(List {
                first: node.tail.clone(),
            }),
            None => script_error_str(ErrorKind::EmptyList, "tail of empty list"),
        }
    }

    /// Split the list into its head and tail, or None for the empty list.
    pub fn uncons(&self) -> Option<(&T, List<T>)> {
        self.first.as_ref().map(|node| {
            (
                &node.head,
                List {
                    first: node.tail.clone(),
                },
            )
        })
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.first.as_deref(),
        }
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.is_null()
    }

    /// Do both lists share the very same first cell?
    pub fn ptr_eq(&self, other: &List<T>) -> bool {
        match (&self.first, &other.first) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

/// Copies only the reference to the first cell.
impl<T> Clone for List<T> {
    fn clone(&self) -> Self {
        List {
            first: self.first.clone(),
        }
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        List::null()
    }
}

/// Build a list holding the elements in iteration order.
impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let items: Vec<T> = iter.into_iter().collect();

        items
            .into_iter()
            .rev()
            .fold(List::null(), |tail, head| tail.cons(head))
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Element by element comparison, walking the lists in a loop rather than recursively.
impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.ptr_eq(other) {
            return true;
        }

        let mut a = self.iter();
        let mut b = other.iter();

        loop {
            match (a.next(), b.next()) {
                (None, None) => return true,
                (Some(x), Some(y)) if x == y => continue,
                _ => return false,
            }
        }
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Release uniquely owned cells one at a time.  The default drop would recurse once per cell and
/// can overflow the host stack on long lists.
impl<T> Drop for List<T> {
    fn drop(&mut self) {
        let mut next = self.first.take();

        while let Some(node) = next {
            match Rc::try_unwrap(node) {
                Ok(mut node) => next = node.tail.take(),
                Err(_) => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cons_leaves_the_original_alone() {
        let tail: List<i32> = [2, 3].into_iter().collect();
        let list = tail.cons(1);

        assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
        assert_eq!(tail.iter().copied().collect::<Vec<_>>(), [2, 3]);
        assert!(list.tail().unwrap().ptr_eq(&tail));
    }

    #[test]
    fn head_and_tail_of_null_fail() {
        let null: List<i32> = List::null();

        assert_eq!(null.head().unwrap_err().kind(), &ErrorKind::EmptyList);
        assert_eq!(null.tail().unwrap_err().kind(), &ErrorKind::EmptyList);
        assert!(null.uncons().is_none());
    }

    #[test]
    fn long_lists_drop_without_recursion() {
        let list: List<usize> = (0..1_000_000).collect();
        let shared = list.tail().unwrap();

        assert_eq!(list.len(), 1_000_000);
        drop(list);
        assert_eq!(shared.head().unwrap(), &1);
    }
}
