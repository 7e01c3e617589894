//! Singly linked list of integers with owned, boxed nodes.
use drillkit::IndexError;

#[derive(Debug)]
struct Node {
    value: i32,
    next: Option<Box<Node>>,
}

#[derive(Debug, Default)]
pub struct LinkedList {
    head: Option<Box<Node>>,
    len: usize,
}

impl LinkedList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn push_front(&mut self, value: i32) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
        self.len += 1;
    }

    pub fn push_back(&mut self, value: i32) {
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        *link = Some(Box::new(Node { value, next: None }));
        self.len += 1;
    }

    /// Inserts `value` so that it ends up at position `index`; `index == len`
    /// appends.
    pub fn insert(&mut self, index: usize, value: i32) -> Result<(), IndexError> {
        let len = self.len;
        if index > len {
            return Err(IndexError { index, len });
        }
        let link = self.link_at(index).ok_or(IndexError { index, len })?;
        let next = link.take();
        *link = Some(Box::new(Node { value, next }));
        self.len += 1;
        Ok(())
    }

    pub fn pop_front(&mut self) -> Option<i32> {
        self.remove(0).ok()
    }

    pub fn pop_back(&mut self) -> Option<i32> {
        let last = self.len.checked_sub(1)?;
        self.remove(last).ok()
    }

    pub fn remove(&mut self, index: usize) -> Result<i32, IndexError> {
        let len = self.len;
        if index >= len {
            return Err(IndexError { index, len });
        }
        let link = self.link_at(index).ok_or(IndexError { index, len })?;
        let mut node = link.take().ok_or(IndexError { index, len })?;
        *link = node.next.take();
        self.len -= 1;
        Ok(node.value)
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// The link that owns the node at `index`.
    fn link_at(&mut self, index: usize) -> Option<&mut Option<Box<Node>>> {
        let mut link = &mut self.head;
        for _ in 0..index {
            let Some(node) = link else {
                return None;
            };
            link = &mut node.next;
        }
        Some(link)
    }
}

impl Drop for LinkedList {
    fn drop(&mut self) {
        // Unlink iteratively so long lists do not recurse through `Box` drops.
        let mut next = self.head.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(node.value)
    }
}
