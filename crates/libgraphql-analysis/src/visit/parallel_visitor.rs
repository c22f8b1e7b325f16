use crate::visit::Node;
use crate::visit::VisitAction;
use crate::visit::VisitInfo;
use crate::visit::Visitor;
use crate::visit::dispatch_enter;
use crate::visit::dispatch_leave;

#[derive(Clone, Copy, Debug, PartialEq)]
enum MemberState {
    Active,

    /// The visitor broke out of the traversal and has already been left out
    /// of every node it was inside of.
    Done,

    /// The visitor skipped the node at this depth and ignores everything
    /// beneath it.
    SkippingFrom(usize),
}

/// Runs several visitors over the same traversal.
///
/// Each member observes exactly the hook calls it would see if it were
/// traversed alone: a member that skips a node sees none of that node's
/// descendants (but is still left out of the node itself), and a member that
/// breaks is immediately left out of every node it is inside of and then
/// retired while the other members carry on.
///
/// If a member requests a replacement, the first such replacement for a node
/// is returned and that node's children are not visited by anyone.
pub struct ParallelVisitor<'a, 'v> {
    members: Vec<(MemberState, Box<dyn Visitor<'a> + 'v>)>,
    open_nodes: Vec<(Node<'a>, VisitInfo)>,
}

impl<'a, 'v> ParallelVisitor<'a, 'v> {
    pub fn new(visitors: Vec<Box<dyn Visitor<'a> + 'v>>) -> Self {
        Self {
            members: visitors
                .into_iter()
                .map(|visitor| (MemberState::Active, visitor))
                .collect(),
            open_nodes: vec![],
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl<'a> Visitor<'a> for ParallelVisitor<'a, '_> {
    fn enter(&mut self, node: Node<'a>, info: &VisitInfo) -> VisitAction {
        self.open_nodes.push((node, info.clone()));

        let mut replacement = None;
        for (state, visitor) in self.members.iter_mut() {
            if *state != MemberState::Active {
                continue;
            }

            match dispatch_enter(visitor.as_mut(), node, info) {
                VisitAction::Break => {
                    for (open_node, open_info) in self.open_nodes.iter().rev() {
                        dispatch_leave(visitor.as_mut(), *open_node, open_info);
                    }
                    *state = MemberState::Done;
                },
                VisitAction::Continue => (),
                VisitAction::Replace(new_node) => {
                    *state = MemberState::SkippingFrom(info.depth);
                    if replacement.is_none() {
                        replacement = Some(new_node);
                    }
                },
                VisitAction::Skip => *state = MemberState::SkippingFrom(info.depth),
            }
        }

        if let Some(new_node) = replacement {
            return VisitAction::Replace(new_node);
        }

        if self.members.iter().all(|(state, _)| *state == MemberState::Done) {
            VisitAction::Break
        } else if self.members.iter().any(|(state, _)| *state == MemberState::Active) {
            VisitAction::Continue
        } else {
            VisitAction::Skip
        }
    }

    fn leave(&mut self, node: Node<'a>, info: &VisitInfo) {
        self.open_nodes.pop();

        for (state, visitor) in self.members.iter_mut() {
            match *state {
                MemberState::Active => dispatch_leave(visitor.as_mut(), node, info),
                MemberState::SkippingFrom(depth) if depth == info.depth => {
                    dispatch_leave(visitor.as_mut(), node, info);
                    *state = MemberState::Active;
                },
                MemberState::Done | MemberState::SkippingFrom(_) => (),
            }
        }
    }
}
