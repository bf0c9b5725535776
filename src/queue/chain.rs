use std::{marker::PhantomData, ptr::NonNull};

struct Node<T> {
    next: Option<NonNull<Node<T>>>,
    data: T,
}

/// Singly-linked list of heap nodes with a head and a tail pointer.
///
/// Every node is allocated by `push_back` and owned by the chain until `pop_front` turns it back
/// into a `Box`. Nodes never point backwards, so unlinking the head is the only reclamation step.
/// The chain itself is not synchronized; `ConcurrentQueue` keeps it behind its lock.
pub(super) struct Chain<T> {
    head: Option<NonNull<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    len: usize,
    _owns: PhantomData<Box<Node<T>>>,
}

// The chain owns its nodes exactly like a `Box<Node<T>>` would.
unsafe impl<T: Send> Send for Chain<T> {}
unsafe impl<T: Sync> Sync for Chain<T> {}

impl<T> Chain<T> {
    pub(super) const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            _owns: PhantomData,
        }
    }

    #[inline]
    pub(super) fn len(&self) -> usize {
        self.len
    }

    pub(super) fn push_back(&mut self, data: T) {
        let node = NonNull::from(Box::leak(Box::new(Node { next: None, data })));
        match self.tail {
            None => self.head = Some(node),
            // SAFETY: `tail` is a live node of this chain and `&mut self` rules out other access.
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(node) },
        }
        self.tail = Some(node);
        self.len += 1;
    }

    pub(super) fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        // SAFETY: `head` was leaked by `push_back` and is unlinked here exactly once.
        let node = unsafe { Box::from_raw(head.as_ptr()) };
        self.head = node.next;
        self.len -= 1;
        if self.len == 0 {
            // Drop the tail as well, it still points at the node we just freed.
            self.head = None;
            self.tail = None;
        }
        Some(node.data)
    }

    pub(super) fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head,
            remaining: self.len,
            _chain: PhantomData,
        }
    }

    #[cfg(test)]
    pub(super) fn assert_invariants(&self) {
        assert_eq!(self.len == 0, self.head.is_none());
        assert_eq!(self.len == 0, self.tail.is_none());
        assert_eq!(self.len == 1, self.len > 0 && self.head == self.tail);

        let mut cursor = self.head;
        let mut last = None;
        for _ in 0..self.len {
            let node = cursor.expect("chain shorter than its length");
            last = Some(node);
            cursor = unsafe { node.as_ref().next };
        }
        assert!(cursor.is_none(), "chain longer than its length");
        assert_eq!(last, self.tail);
    }
}

impl<T> Drop for Chain<T> {
    fn drop(&mut self) {
        // Unlink one node at a time so long chains don't recurse through `Drop`.
        while self.pop_front().is_some() {}
    }
}

pub(super) struct Iter<'a, T> {
    next: Option<NonNull<Node<T>>>,
    remaining: usize,
    _chain: PhantomData<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.next?;
        // SAFETY: the borrowed chain keeps every node alive and unmodified for `'a`.
        let node = unsafe { &*node.as_ptr() };
        self.next = node.next;
        self.remaining -= 1;
        Some(&node.data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
