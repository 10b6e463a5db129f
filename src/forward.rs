use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::parser::Parser;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

type Slot<'code, T> = Rc<RefCell<Option<Rc<dyn Parser<'code, Output = T> + 'code>>>>;

/// A parser whose implementation is supplied after it is created
///
/// Clones share the same slot. This is how recursive grammars are closed:
/// hand clones of the reference to the parsers that need it, then
/// [`define`](ForwardRef::define) it once the whole grammar is built.
///
/// Parsing through a reference that was never defined is a bug in the
/// grammar, not a failed match, and panics.
///
/// ```
/// use parsiclimb::{Parser, parse_str};
/// use parsiclimb::choice::ChoiceExt;
/// use parsiclimb::forward::forward_ref;
/// use parsiclimb::map::MapExt;
/// use parsiclimb::sequence::SequenceExt;
/// use parsiclimb::text::literal;
///
/// // nested = "(" nested ")" | "x"
/// let nested = forward_ref::<usize>();
/// nested.define(
///     literal('(')
///         .then(nested.clone())
///         .skip(literal(')'))
///         .map(|depth| depth + 1)
///         .or(literal('x').map(|_| 0)),
/// );
/// assert_eq!(parse_str(&nested, "((x))"), Ok(2));
/// ```
pub struct ForwardRef<'code, T> {
    slot: Slot<'code, T>,
}

impl<'code, T> ForwardRef<'code, T> {
    pub fn new() -> Self {
        ForwardRef {
            slot: Rc::new(RefCell::new(None)),
        }
    }

    /// Wire the reference to its implementation, replacing any earlier one
    pub fn define<P>(&self, parser: P)
    where
        P: Parser<'code, Output = T> + 'code,
    {
        *self.slot.borrow_mut() = Some(Rc::new(parser));
    }

    /// Drop the implementation
    ///
    /// A grammar closed through a forward reference owns itself through
    /// shared pointers; grammars that own their forward references call this
    /// on drop to break the cycle.
    pub fn undefine(&self) {
        self.slot.borrow_mut().take();
    }

    pub fn is_defined(&self) -> bool {
        self.slot.borrow().is_some()
    }
}

impl<'code, T> Default for ForwardRef<'code, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'code, T> Clone for ForwardRef<'code, T> {
    fn clone(&self) -> Self {
        ForwardRef {
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<'code, T> fmt::Debug for ForwardRef<'code, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForwardRef")
            .field("defined", &self.is_defined())
            .finish()
    }
}

impl<'code, T> Parser<'code> for ForwardRef<'code, T> {
    type Output = T;

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<Self::Output> {
        // Release the borrow before parsing; the implementation usually recurses back here.
        let parser = self.slot.borrow().clone();
        match parser {
            Some(parser) => parser.parse(cursor),
            None => panic!("forward reference parsed before it was defined"),
        }
    }
}

pub fn forward_ref<'code, T>() -> ForwardRef<'code, T> {
    ForwardRef::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choice::ChoiceExt;
    use crate::error::NoMatch;
    use crate::map::MapExt;
    use crate::repeat::many;
    use crate::sequence::SequenceExt;
    use crate::text::literal;

    #[test]
    fn test_forward_ref_delegates() {
        let digit = forward_ref::<char>();
        digit.define(literal('7'));

        let mut cursor = Cursor::new("78");
        assert_eq!(digit.parse(&mut cursor), Ok('7'));
        assert_eq!(digit.parse(&mut cursor), Err(NoMatch));
    }

    #[test]
    fn test_forward_ref_recursion() {
        // list = "[" list* "]", counting the lists
        let list = forward_ref::<usize>();
        list.define(
            literal('[')
                .then(many(list.clone()))
                .skip(literal(']'))
                .map(|children| 1 + children.iter().sum::<usize>()),
        );

        let mut cursor = Cursor::new("[[][[]]]");
        assert_eq!(list.parse(&mut cursor), Ok(4));
        assert!(cursor.at_end());
    }

    #[test]
    fn test_forward_ref_clones_share_slot() {
        let a = forward_ref::<char>();
        let b = a.clone();
        assert!(!b.is_defined());

        a.define(literal('z').or(literal('y')));
        assert!(b.is_defined());

        b.undefine();
        assert!(!a.is_defined());
    }

    #[test]
    #[should_panic(expected = "before it was defined")]
    fn test_undefined_forward_ref_panics() {
        let never = forward_ref::<char>();
        let parser = literal('a').or(never);
        let mut cursor = Cursor::new("b");
        let _ = parser.parse(&mut cursor);
    }
}
