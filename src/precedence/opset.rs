use crate::cursor::{Cursor, Position};
use crate::parser::Parser;
use log::trace;
use std::cell::RefCell;
use std::collections::HashMap;

/// A recognized operator token and where its text started
pub(crate) struct Lookahead<H> {
    pub(crate) name: String,
    pub(crate) handler: H,
    pub(crate) start: Position,
}

/// Operator table plus a one-token lookahead slot
///
/// When the climb loop reads an operator that binds too loosely for the
/// current level, the token stays consumed and is parked in the slot. The
/// enclosing level then takes it from the slot instead of scanning the text
/// again.
pub(crate) struct OpSet<H> {
    handlers: HashMap<String, H>,
    lookahead: RefCell<Option<Lookahead<H>>>,
}

impl<H: Clone> OpSet<H> {
    pub(crate) fn new() -> Self {
        OpSet {
            handlers: HashMap::new(),
            lookahead: RefCell::new(None),
        }
    }

    pub(crate) fn insert(&mut self, name: String, handler: H) {
        self.handlers.insert(name, handler);
    }

    pub(crate) fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// The next registered operator: the parked one, else one read from the cursor
    ///
    /// A token that `format` reads but that is not in the table is put back,
    /// so whatever comes next (a closing bracket, say) can still be matched.
    pub(crate) fn next<'code, O>(&self, format: &O, cursor: &mut Cursor<'code>) -> Option<Lookahead<H>>
    where
        O: Parser<'code>,
        O::Output: AsRef<str>,
    {
        if let Some(parked) = self.lookahead.take() {
            return Some(parked);
        }

        let start = cursor.position();
        let token = format.parse(cursor).ok()?;
        let name = token.as_ref();
        match self.handlers.get(name) {
            Some(handler) => Some(Lookahead {
                name: name.to_string(),
                handler: handler.clone(),
                start,
            }),
            None => {
                trace!("operator `{name}` not registered here, putting it back");
                cursor.set_position(start);
                None
            }
        }
    }

    pub(crate) fn put_back(&self, lookahead: Lookahead<H>) {
        let previous = self.lookahead.replace(Some(lookahead));
        debug_assert!(previous.is_none(), "lookahead slot already occupied");
    }

    pub(crate) fn take_parked(&self) -> Option<Lookahead<H>> {
        self.lookahead.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::precedence::handler::TrailingOp;
    use crate::text::pattern;
    use std::rc::Rc;

    fn table() -> OpSet<TrailingOp<i64>> {
        let mut ops: OpSet<TrailingOp<i64>> = OpSet::new();
        ops.insert(
            "+".to_string(),
            TrailingOp::LeftInfix(Rc::new(|a: i64, b: i64| Some(a + b)), 50),
        );
        ops
    }

    #[test]
    fn test_next_registered() {
        let ops = table();
        let format = pattern("[+)]").unwrap();
        let mut cursor = Cursor::new("+1");

        let found = ops.next(&format, &mut cursor).unwrap();
        assert_eq!(found.name, "+");
        assert_eq!(found.start.offset(), 0);
        assert_eq!(cursor.head(), Some('1'));
    }

    #[test]
    fn test_next_unregistered_puts_back() {
        let ops = table();
        let format = pattern("[+)]").unwrap();
        let mut cursor = Cursor::new(")");

        assert!(ops.next(&format, &mut cursor).is_none());
        assert_eq!(cursor.position().offset(), 0);
    }

    #[test]
    fn test_parked_token_is_returned_first() {
        let ops = table();
        let format = pattern("[+)]").unwrap();
        let mut cursor = Cursor::new("++");

        let first = ops.next(&format, &mut cursor).unwrap();
        ops.put_back(first);
        assert_eq!(cursor.position().offset(), 1);

        let again = ops.next(&format, &mut cursor).unwrap();
        assert_eq!(again.start.offset(), 0);
        assert_eq!(cursor.position().offset(), 1);
        assert!(ops.take_parked().is_none());
        assert!(ops.contains("+"));
    }

    #[test]
    fn test_reregistering_overwrites() {
        let mut ops = table();
        ops.insert(
            "+".to_string(),
            TrailingOp::LeftInfix(Rc::new(|a: i64, b: i64| Some(a - b)), 55),
        );

        let format = pattern(r"\+").unwrap();
        let found = ops.next(&format, &mut Cursor::new("+")).unwrap();
        assert_eq!(found.handler.precedence(), 55);
    }
}
