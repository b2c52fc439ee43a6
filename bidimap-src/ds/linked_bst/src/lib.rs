use std::{
    cmp::Ordering::{Equal, Greater, Less},
    fmt, mem,
};

use pair_fmt::{Pair, StrJoin};

struct Node<D, L> {
    data: D,
    link: L,
    left: Option<Box<Node<D, L>>>,
    right: Option<Box<Node<D, L>>>,
}

/// An unbalanced BST ordered by `data`, where every node carries an
/// opaque companion payload `link`.
pub struct LinkedBst<D, L> {
    root: Option<Box<Node<D, L>>>,
}

impl<D, L> Node<D, L> {
    fn new(data: D, link: L) -> Self {
        Self { data, link, left: None, right: None }
    }
}

impl<D, L> LinkedBst<D, L> {
    pub fn new() -> Self { Self { root: None } }

    pub fn is_empty(&self) -> bool { self.root.is_none() }
    pub fn is_leaf(&self) -> bool {
        match &self.root {
            Some(node) => node.left.is_none() && node.right.is_none(),
            None => true,
        }
    }
    pub fn root_entry(&self) -> Option<(&D, &L)> {
        self.root.as_ref().map(|node| (&node.data, &node.link))
    }

    pub fn inorder(&self, link_first: bool) -> String
    where
        D: fmt::Display,
        L: fmt::Display,
    {
        let mut entries = vec![];
        Self::collect(&self.root, &mut entries);
        if link_first {
            StrJoin(entries.iter().map(|&(d, l)| Pair(l, d)), ", ")
                .to_string()
        } else {
            StrJoin(entries.iter().map(|&(d, l)| Pair(d, l)), ", ")
                .to_string()
        }
    }

    fn collect<'a>(
        slot: &'a Option<Box<Node<D, L>>>,
        out: &mut Vec<(&'a D, &'a L)>,
    ) {
        if let Some(node) = slot {
            Self::collect(&node.left, out);
            out.push((&node.data, &node.link));
            Self::collect(&node.right, out);
        }
    }
}

impl<D: Ord, L> LinkedBst<D, L> {
    pub fn contains(&self, target: &D) -> bool {
        self.locate(target).is_some()
    }
    pub fn find(&self, target: &D) -> Option<&D> {
        self.locate(target).map(|node| &node.data)
    }
    pub fn link(&self, target: &D) -> Option<&L> {
        self.locate(target).map(|node| &node.link)
    }

    fn locate(&self, target: &D) -> Option<&Node<D, L>> {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            cur = match target.cmp(&node.data) {
                Equal => return Some(node),
                Less => node.left.as_deref(),
                Greater => node.right.as_deref(),
            };
        }
        None
    }

    // The tree is not ordered by link, so this is an exhaustive scan.
    pub fn contains_link(&self, target: &L) -> bool
    where
        L: Ord,
    {
        Self::scan_link(&self.root, target)
    }

    fn scan_link(slot: &Option<Box<Node<D, L>>>, target: &L) -> bool
    where
        L: Ord,
    {
        match slot {
            Some(node) => {
                *target == node.link
                    || Self::scan_link(&node.left, target)
                    || Self::scan_link(&node.right, target)
            }
            None => false,
        }
    }

    pub fn insert(&mut self, data: D, link: L) -> bool {
        Self::insert_at(&mut self.root, data, link)
    }

    fn insert_at(
        slot: &mut Option<Box<Node<D, L>>>,
        data: D,
        link: L,
    ) -> bool {
        match slot {
            None => {
                *slot = Some(Box::new(Node::new(data, link)));
                true
            }
            Some(node) => match data.cmp(&node.data) {
                Equal => false,
                Less => Self::insert_at(&mut node.left, data, link),
                Greater => Self::insert_at(&mut node.right, data, link),
            },
        }
    }

    pub fn remove(&mut self, target: &D) -> Option<(D, L)> {
        Self::remove_at(&mut self.root, target)
    }

    fn remove_at(
        slot: &mut Option<Box<Node<D, L>>>,
        target: &D,
    ) -> Option<(D, L)> {
        match target.cmp(&slot.as_deref()?.data) {
            Less => Self::remove_at(&mut slot.as_deref_mut()?.left, target),
            Greater => {
                Self::remove_at(&mut slot.as_deref_mut()?.right, target)
            }
            Equal => Some(Self::splice(slot)),
        }
    }

    // Removes the occupied `slot` and returns its entry. A node with two
    // children takes the entry of its inorder predecessor (the rightmost
    // node of the left subtree), which is spliced out in its stead.
    fn splice(slot: &mut Option<Box<Node<D, L>>>) -> (D, L) {
        let mut node = slot.take().unwrap();
        if node.left.is_none() {
            *slot = node.right.take();
            (node.data, node.link)
        } else if node.right.is_none() {
            *slot = node.left.take();
            (node.data, node.link)
        } else {
            let (data, link) = Self::take_rightmost(&mut node.left);
            let removed = (
                mem::replace(&mut node.data, data),
                mem::replace(&mut node.link, link),
            );
            *slot = Some(node);
            removed
        }
    }

    fn take_rightmost(slot: &mut Option<Box<Node<D, L>>>) -> (D, L) {
        match slot {
            Some(node) if node.right.is_some() => {
                Self::take_rightmost(&mut node.right)
            }
            _ => {
                let node = slot.take().unwrap();
                *slot = node.left;
                (node.data, node.link)
            }
        }
    }
}

impl<D, L> Default for LinkedBst<D, L> {
    fn default() -> Self { Self::new() }
}

struct AsSexp<'a, D, L>(&'a Option<Box<Node<D, L>>>);
impl<D: fmt::Debug, L> fmt::Debug for AsSexp<'_, D, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            None => write!(f, "."),
            Some(node) if node.left.is_none() && node.right.is_none() => {
                write!(f, "{:?}", node.data)
            }
            Some(node) => write!(
                f,
                "({:?} {:?} {:?})",
                node.data,
                AsSexp(&node.left),
                AsSexp(&node.right)
            ),
        }
    }
}

impl<D: fmt::Debug, L> fmt::Debug for LinkedBst<D, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", AsSexp(&self.root))
    }
}

impl<D: fmt::Display, L: fmt::Display> fmt::Display for LinkedBst<D, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries = vec![];
        Self::collect(&self.root, &mut entries);
        write!(f, "{}", StrJoin(entries.iter().map(|&(d, l)| Pair(d, l)), ", "))
    }
}

#[cfg(test)]
fn sample_tree() -> LinkedBst<i32, i32> {
    let mut tree = LinkedBst::new();
    for data in [8, 3, 10, 1, 6, 4, 7, 14, 13] {
        assert!(tree.insert(data, data * 100));
    }
    tree
}

#[test]
fn insert_find_link() {
    let tree = sample_tree();
    assert!(tree.contains(&8));
    assert!(tree.contains(&13));
    assert!(!tree.contains(&5));
    assert_eq!(tree.find(&6), Some(&6));
    assert_eq!(tree.find(&5), None);
    assert_eq!(tree.link(&6), Some(&600));
    assert_eq!(tree.link(&5), None);
    assert_eq!(format!("{tree:?}"), "(8 (3 1 (6 4 7)) (10 . (14 13 .)))");
}

#[test]
fn duplicate_insert() {
    let mut tree = sample_tree();
    assert!(!tree.insert(6, 999));
    assert_eq!(tree.link(&6), Some(&600));
    assert_eq!(format!("{tree:?}"), "(8 (3 1 (6 4 7)) (10 . (14 13 .)))");
}

#[test]
fn remove_absent() {
    let mut tree = sample_tree();
    assert_eq!(tree.remove(&5), None);
    assert_eq!(format!("{tree:?}"), "(8 (3 1 (6 4 7)) (10 . (14 13 .)))");
}

#[test]
fn remove_leaf_and_single_child() {
    let mut tree = LinkedBst::new();
    for data in [5, 3, 2] {
        tree.insert(data, data * 100);
    }
    assert_eq!(format!("{tree:?}"), "(5 (3 2 .) .)");

    // 3 has a sole child; it is spliced into 3's place.
    assert_eq!(tree.remove(&3), Some((3, 300)));
    assert_eq!(format!("{tree:?}"), "(5 2 .)");

    assert_eq!(tree.remove(&2), Some((2, 200)));
    assert_eq!(format!("{tree:?}"), "5");

    assert_eq!(tree.remove(&5), Some((5, 500)));
    assert_eq!(format!("{tree:?}"), ".");
    assert!(tree.is_empty());
}

#[test]
fn remove_two_children_shallow_predecessor() {
    // The left child has no right subtree, so it is itself the inorder
    // predecessor of the root.
    let mut tree = LinkedBst::new();
    for data in [5, 3, 8, 2] {
        tree.insert(data, data * 100);
    }
    assert_eq!(format!("{tree:?}"), "(5 (3 2 .) 8)");

    assert_eq!(tree.remove(&5), Some((5, 500)));
    assert_eq!(format!("{tree:?}"), "(3 2 8)");
    assert_eq!(tree.link(&3), Some(&300));
}

#[test]
fn remove_two_children_deep_predecessor() {
    let mut tree = sample_tree();

    // The predecessor of 8 is 7, the rightmost node under 3; a
    // successor splice would have promoted 10 instead.
    assert_eq!(tree.remove(&8), Some((8, 800)));
    assert_eq!(format!("{tree:?}"), "(7 (3 1 (6 4 .)) (10 . (14 13 .)))");
    assert_eq!(tree.link(&7), Some(&700));

    assert_eq!(tree.remove(&7), Some((7, 700)));
    assert_eq!(format!("{tree:?}"), "(6 (3 1 4) (10 . (14 13 .)))");
    assert_eq!(tree.link(&6), Some(&600));
}

#[test]
fn contains_link_scans() {
    let mut tree = LinkedBst::new();
    tree.insert(2, 20);
    tree.insert(1, 30);
    tree.insert(3, 10);
    assert!(tree.contains_link(&30));
    assert!(tree.contains_link(&10));
    assert!(tree.contains_link(&20));
    assert!(!tree.contains_link(&40));
    assert!(!LinkedBst::<i32, i32>::new().contains_link(&0));
}

#[test]
fn inorder_fmt() {
    let mut tree = LinkedBst::new();
    tree.insert(2, 'b');
    tree.insert(3, 'c');
    tree.insert(1, 'a');
    assert_eq!(tree.inorder(false), "(1, a), (2, b), (3, c)");
    assert_eq!(tree.inorder(true), "(a, 1), (b, 2), (c, 3)");
    assert_eq!(tree.to_string(), "(1, a), (2, b), (3, c)");
    assert_eq!(LinkedBst::<i32, char>::new().inorder(false), "");
}

#[test]
fn accessors() {
    let mut tree = LinkedBst::new();
    assert!(tree.is_empty());
    assert!(tree.is_leaf());
    assert_eq!(tree.root_entry(), None);

    tree.insert(2, 'b');
    assert!(!tree.is_empty());
    assert!(tree.is_leaf());
    assert_eq!(tree.root_entry(), Some((&2, &'b')));

    tree.insert(1, 'a');
    assert!(!tree.is_leaf());
    assert_eq!(tree.root_entry(), Some((&2, &'b')));
}
