use crate::lexer::Token;

use super::{Expression, NodeString};

/// An insertion-ordered list of key/value expression pairs, per spec.md §3
/// (`HashLiteral.pairs` preserves parse order).
#[derive(Debug, Clone, PartialEq)]
pub struct HashLiteral {
    pub token: Token,
    pub pairs: Vec<(Expression, Expression)>,
}

impl NodeString for HashLiteral {
    fn node_string(&self) -> String {
        let pairs = self
            .pairs
            .iter()
            .map(|(k, v)| format!("{}:{}", k.node_string(), v.node_string()))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{{{pairs}}}")
    }
}
