//! Tree search primitives shared by the lint predicates.
//!
//! Both searches look at descendants only, in pre-order. The tree is finite
//! and strictly tree-shaped, so every walk terminates.

use crate::syntax::{Node, NodeKind, Token};

/// First descendant of `kind`. A matching child's own subtree is not searched
/// before its later siblings are.
pub fn find_first<'t>(node: Node<'t>, kind: NodeKind) -> Option<Node<'t>> {
    for child in node.child_nodes() {
        if child.is(kind) {
            return Some(child);
        }
        if let Some(found) = find_first(child, kind) {
            return Some(found);
        }
    }
    None
}

/// Every descendant of `kind`, including ones nested inside other matches.
pub fn find_all<'t>(node: Node<'t>, kind: NodeKind) -> Vec<Node<'t>> {
    let mut found = Vec::new();
    collect_all(node, kind, &mut found);
    found
}

fn collect_all<'t>(node: Node<'t>, kind: NodeKind, out: &mut Vec<Node<'t>>) {
    for child in node.child_nodes() {
        if child.is(kind) {
            out.push(child);
        }
        collect_all(child, kind, out);
    }
}

/// Walks up from `node`'s parent. Returns false as soon as an ancestor's kind
/// is in `stop`, true as soon as one is in `targets`.
pub fn has_ancestor_of_kind(node: Node<'_>, stop: &[NodeKind], targets: &[NodeKind]) -> bool {
    for ancestor in node.ancestors() {
        if stop.contains(&ancestor.kind()) {
            return false;
        }
        if targets.contains(&ancestor.kind()) {
            return true;
        }
    }
    false
}

/// Operand tokens of every descendant, in pre-order.
pub fn used_operands<'t>(node: Node<'t>) -> Vec<&'t Token> {
    let mut operands = Vec::new();
    collect_operands(node, &mut operands);
    operands
}

fn collect_operands<'t>(node: Node<'t>, out: &mut Vec<&'t Token>) {
    for child in node.child_nodes() {
        out.extend(child.operands());
        collect_operands(child, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{SyntaxTree, TokenKind, TreeBuilder};
    use crate::types::Dialect;

    // Root > Stmt > CExpr(CExpr(a) CExpr(b)) CExpr(c)
    fn nested() -> SyntaxTree {
        let mut b = TreeBuilder::new("a b c", Dialect::Postgres).unwrap();
        b.start_node(NodeKind::Root);
        b.start_node(NodeKind::Stmt);
        b.start_node(NodeKind::CExpr);
        b.leaf(NodeKind::CExpr).unwrap();
        b.leaf(NodeKind::CExpr).unwrap();
        b.finish_node().unwrap();
        b.leaf(NodeKind::CExpr).unwrap();
        b.finish_node().unwrap();
        b.bump().unwrap();
        b.finish_node().unwrap();
        b.finish().unwrap()
    }

    #[test]
    fn find_first_stops_at_the_outer_match() {
        let tree = nested();
        let first = find_first(tree.root(), NodeKind::CExpr).unwrap();
        assert_eq!(first.text(), "ab");
        assert!(find_first(tree.root(), NodeKind::WhereClause).is_none());
    }

    #[test]
    fn find_first_excludes_the_start_node() {
        let tree = nested();
        let outer = find_first(tree.root(), NodeKind::CExpr).unwrap();
        assert_eq!(find_first(outer, NodeKind::CExpr).unwrap().text(), "a");
    }

    #[test]
    fn find_all_descends_into_matches() {
        let tree = nested();
        let texts: Vec<_> = find_all(tree.root(), NodeKind::CExpr)
            .into_iter()
            .map(|node| node.text())
            .collect();
        assert_eq!(texts, vec!["ab", "a", "b", "c"]);
    }

    #[test]
    fn ancestor_walk_honours_stop_kinds() {
        let tree = nested();
        let inner = find_all(tree.root(), NodeKind::CExpr)[1];
        assert!(has_ancestor_of_kind(inner, &[], &[NodeKind::Stmt]));
        assert!(!has_ancestor_of_kind(
            inner,
            &[NodeKind::CExpr],
            &[NodeKind::Stmt]
        ));
        assert!(!has_ancestor_of_kind(inner, &[], &[NodeKind::TargetList]));
    }

    #[test]
    fn operands_come_from_operator_nodes_only() {
        let mut b = TreeBuilder::new("x = 1 AND y = 2", Dialect::Postgres).unwrap();
        b.start_node(NodeKind::Root);
        b.start_node(NodeKind::AExprAnd);
        for _ in 0..2 {
            b.start_node(NodeKind::AExprCompare);
            b.leaf(NodeKind::CExpr).unwrap();
            b.bump().unwrap();
            b.leaf(NodeKind::CExpr).unwrap();
            b.finish_node().unwrap();
            if b.peek().map(|token| token.kind) == Some(TokenKind::And) {
                b.bump().unwrap();
            }
        }
        b.finish_node().unwrap();
        b.bump().unwrap();
        b.finish_node().unwrap();
        let tree = b.finish().unwrap();

        let operands: Vec<_> = used_operands(tree.root())
            .into_iter()
            .map(|token| token.text.as_str())
            .collect();
        assert_eq!(operands, vec!["=", "="]);
    }
}
