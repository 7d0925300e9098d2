use crate::types::Node;

/// One arena slot of a [`super::LinkedBinaryTree`].
///
/// A released slot has `element == None` and sits on the tree's free list.
/// `generation` is bumped on every release so that positions minted for a
/// previous occupant never validate again. It saturates at `u32::MAX`; a
/// slot released at that generation is retired and never reoccupied.
#[derive(Clone, Debug)]
pub(crate) struct Slot<E, M> {
    pub(crate) p: Option<u32>,
    pub(crate) l: Option<u32>,
    pub(crate) r: Option<u32>,
    pub(crate) element: Option<E>,
    pub(crate) meta: M,
    pub(crate) generation: u32,
}

impl<E, M: Default> Slot<E, M> {
    pub(crate) fn new(element: E, p: Option<u32>) -> Self {
        Self {
            p,
            l: None,
            r: None,
            element: Some(element),
            meta: M::default(),
            generation: 0,
        }
    }

    pub(crate) fn occupy(&mut self, element: E, p: Option<u32>) {
        self.p = p;
        self.l = None;
        self.r = None;
        self.element = Some(element);
        self.meta = M::default();
    }

    pub(crate) fn release(&mut self) -> Option<E> {
        self.p = None;
        self.l = None;
        self.r = None;
        self.meta = M::default();
        self.generation = self.generation.saturating_add(1);
        self.element.take()
    }
}

impl<E, M> Slot<E, M> {
    #[inline]
    pub(crate) fn is_live(&self) -> bool {
        self.element.is_some()
    }

    /// Generation exhausted: reusing the slot could revive old positions.
    #[inline]
    pub(crate) fn is_retired(&self) -> bool {
        !self.is_live() && self.generation == u32::MAX
    }
}

impl<E, M> Node for Slot<E, M> {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}
