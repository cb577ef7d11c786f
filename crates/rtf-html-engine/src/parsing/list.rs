use crate::markers::{ListMarkers, WrapperKind};

/// One list item with its nested items.
///
/// `depth` is 0 for top-level items; children always sit one level deeper
/// than their parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListNode {
    pub text: String,
    pub depth: usize,
    pub children: Vec<ListNode>,
}

impl ListNode {
    pub fn new(text: impl Into<String>, depth: usize) -> Self {
        Self {
            text: text.into(),
            depth,
            children: vec![],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ListState {
    #[default]
    Inactive,
    Active {
        kind: WrapperKind,
        items: Vec<ListNode>,
    },
}

/// Collects consecutive list blocks of a chunk into a list tree.
pub struct ListAccumulator<'t> {
    markers: &'t ListMarkers,
    max_depth: usize,
    state: ListState,
}

impl<'t> ListAccumulator<'t> {
    /// `max_depth` is the deepest nesting level kept; deeper level markers
    /// are ignored and those items land at the top level.
    pub fn new(markers: &'t ListMarkers, max_depth: usize) -> Self {
        Self {
            markers,
            max_depth,
            state: ListState::Inactive,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, ListState::Active { .. })
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    /// Whether the block with this control run is a list item.
    pub fn is_list_block(&self, run: &str) -> bool {
        self.markers.is_item(run)
    }

    /// Adds a list block.
    ///
    /// The first block activates the list and fixes its wrapper kind. Later
    /// blocks become top-level items, or children of the last item chain when
    /// their run carries a level marker.
    pub fn push(&mut self, run: &str, text: String) {
        let kind = self.markers.wrapper_for(run);
        let depth = self.markers.depth_of(run, self.max_depth);

        match &mut self.state {
            ListState::Inactive => {
                self.state = ListState::Active {
                    kind,
                    items: vec![ListNode::new(text, 0)],
                };
            }
            ListState::Active { items, .. } => attach(items, 0, depth, text),
        }
    }

    /// Appends rendered inline markup to the last top-level item.
    ///
    /// Used for formatting-only fragments that continue an item on the same
    /// line. Does nothing while inactive.
    pub fn append_to_last(&mut self, fragment: &str) {
        if let ListState::Active { items, .. } = &mut self.state
            && let Some(last) = items.last_mut()
        {
            last.text.push_str(fragment);
        }
    }

    /// Ends the list, returning its kind and items. `None` while inactive.
    pub fn take(&mut self) -> Option<(WrapperKind, Vec<ListNode>)> {
        match std::mem::take(&mut self.state) {
            ListState::Inactive => None,
            ListState::Active { kind, items } => Some((kind, items)),
        }
    }
}

fn attach(siblings: &mut Vec<ListNode>, level: usize, depth: usize, text: String) {
    if level < depth
        && let Some(last) = siblings.last_mut()
    {
        return attach(&mut last.children, level + 1, depth, text);
    }
    siblings.push(ListNode::new(text, level));
}
