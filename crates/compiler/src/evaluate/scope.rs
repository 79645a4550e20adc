use std::{
    cell::{Cell, RefCell},
    collections::BTreeMap,
    sync::Arc,
};

use codemap::Spanned;

use crate::{
    ast::Mixin,
    common::Identifier,
    error::{ErrorKind, MossError, MossResult},
    value::Value,
};

/// A stack of name-binding frames.
///
/// Frames are individually shared (`Arc<RefCell<..>>`) so that a mixin can
/// capture its definition environment with [`Scopes::new_closure`]: the
/// closure holds the same frames, and later writes to an outer frame stay
/// visible through the capture, while frames pushed after the capture do not.
#[allow(clippy::type_complexity)]
#[derive(Debug, Default, Clone)]
pub(crate) struct Scopes {
    variables: Arc<RefCell<Vec<Arc<RefCell<BTreeMap<Identifier, Value>>>>>>,
    mixins: Arc<RefCell<Vec<Arc<RefCell<BTreeMap<Identifier, Mixin>>>>>>,
    len: Arc<Cell<usize>>,
}

impl Scopes {
    pub fn new() -> Self {
        Self {
            variables: Arc::new(RefCell::new(vec![Arc::new(RefCell::new(BTreeMap::new()))])),
            mixins: Arc::new(RefCell::new(vec![Arc::new(RefCell::new(BTreeMap::new()))])),
            len: Arc::new(Cell::new(1)),
        }
    }

    /// A new stack sharing every frame currently on this one
    pub fn new_closure(&self) -> Self {
        debug_assert_eq!(self.len(), (*self.variables).borrow().len());
        Self {
            variables: Arc::new(RefCell::new(
                (*self.variables).borrow().iter().map(Arc::clone).collect(),
            )),
            mixins: Arc::new(RefCell::new(
                (*self.mixins).borrow().iter().map(Arc::clone).collect(),
            )),
            len: Arc::new(Cell::new(self.len())),
        }
    }

    pub fn len(&self) -> usize {
        (*self.len).get()
    }

    pub fn enter_new_scope(&mut self) {
        let len = self.len();
        debug_assert_eq!(len, (*self.variables).borrow().len());
        (*self.len).set(len + 1);
        (*self.variables)
            .borrow_mut()
            .push(Arc::new(RefCell::new(BTreeMap::new())));
        (*self.mixins)
            .borrow_mut()
            .push(Arc::new(RefCell::new(BTreeMap::new())));
    }

    pub fn exit_scope(&mut self) {
        let len = self.len();
        debug_assert_eq!(len, (*self.variables).borrow().len());
        (*self.len).set(len - 1);
        (*self.variables).borrow_mut().pop();
        (*self.mixins).borrow_mut().pop();
    }
}

/// Variables
impl Scopes {
    /// Bind `name` in the innermost frame, shadowing any outer binding
    pub fn insert_var(&mut self, name: Identifier, v: Value) -> Option<Value> {
        debug_assert_eq!(self.len(), (*self.variables).borrow().len());
        let last = self.len() - 1;
        (*(*self.variables).borrow_mut()[last])
            .borrow_mut()
            .insert(name, v)
    }

    /// Walk the frames innermost-first for `name`
    pub fn get_var(&self, name: Identifier) -> Option<Value> {
        debug_assert_eq!(self.len(), (*self.variables).borrow().len());
        for scope in (*self.variables).borrow().iter().rev() {
            if let Some(v) = (**scope).borrow().get(&name) {
                return Some(v.clone());
            }
        }

        None
    }
}

/// Mixins
impl Scopes {
    pub fn insert_mixin(&mut self, name: Identifier, mixin: Mixin) {
        debug_assert_eq!(self.len(), (*self.mixins).borrow().len());
        let last = self.len() - 1;
        (*(*self.mixins).borrow_mut()[last])
            .borrow_mut()
            .insert(name, mixin);
    }

    pub fn mixin_exists(&self, name: Identifier) -> bool {
        debug_assert_eq!(self.len(), (*self.mixins).borrow().len());
        (*self.mixins)
            .borrow()
            .iter()
            .any(|scope| (**scope).borrow().contains_key(&name))
    }

    pub fn get_mixin(&self, name: Spanned<Identifier>) -> MossResult<Mixin> {
        debug_assert_eq!(self.len(), (*self.mixins).borrow().len());
        for scope in (*self.mixins).borrow().iter().rev() {
            if let Some(mixin) = (**scope).borrow().get(&name.node) {
                return Ok(mixin.clone());
            }
        }

        Err(MossError::new(
            ErrorKind::UndefinedVariable,
            "Undefined mixin.",
            name.span,
        ))
    }
}
