use std::{
    any::{Any, TypeId, type_name},
    fmt::{self, Debug, Display},
    rc::Rc,
};

/// The runtime type a set locks onto.
#[derive(Clone, Copy, Debug, Eq)]
pub struct ElementType {
    id: TypeId,
    name: &'static str,
}

impl ElementType {
    pub fn of<T: 'static + ?Sized>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for ElementType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

trait Value: Any + Debug {
    fn as_any(&self) -> &dyn Any;
    fn eq_value(&self, other: &dyn Value) -> bool;
}

impl<T: PartialEq + Debug + 'static> Value for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn eq_value(&self, other: &dyn Value) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }
}

/// A reference-like element: two `Shared` values are equal only when they
/// point at the same allocation, whatever the pointee's fields hold.
pub struct Shared<T>(Rc<T>);

impl<T> Shared<T> {
    pub fn new(rc: Rc<T>) -> Self {
        Self(rc)
    }

    pub fn get(&self) -> &T {
        &self.0
    }
}

impl<T> PartialEq for Shared<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T: Debug> Debug for Shared<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("&")?;
        Debug::fmt(&*self.0, f)
    }
}

/// An opaque set element.
///
/// Plain values built with [`Element::new`] compare structurally through
/// `PartialEq`. Values built with [`Element::shared`] compare by identity and
/// have a runtime type of their own, distinct from the pointee's.
#[derive(Clone)]
pub struct Element {
    value: Rc<dyn Value>,
    ty: ElementType,
}

impl Element {
    /// Wrapping an `Element` yields that element, so the runtime type is
    /// always the innermost value's.
    pub fn new<T: PartialEq + Debug + 'static>(value: T) -> Self {
        if let Some(inner) = (&value as &dyn Any).downcast_ref::<Element>() {
            return inner.clone();
        }
        Self {
            value: Rc::new(value),
            ty: ElementType::of::<T>(),
        }
    }

    pub fn shared<T: Debug + 'static>(rc: Rc<T>) -> Self {
        if let Some(inner) = (&*rc as &dyn Any).downcast_ref::<Element>() {
            return inner.clone();
        }
        Self::new(Shared::new(rc))
    }

    pub fn element_type(&self) -> ElementType {
        self.ty
    }

    pub fn type_name(&self) -> &'static str {
        self.ty.name()
    }

    /// Matches the runtime type exactly; a shared element is a `Shared<T>`.
    pub fn is<T: 'static>(&self) -> bool {
        self.ty.id() == TypeId::of::<T>()
    }

    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        (*self.value).as_any().downcast_ref::<T>()
    }

    /// The pointee of an element built with [`Element::shared`].
    pub fn shared_ref<T: 'static>(&self) -> Option<&T> {
        self.downcast_ref::<Shared<T>>().map(Shared::get)
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.ty == other.ty && (*self.value).eq_value(&*other.value)
    }
}

impl Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&*self.value, f)
    }
}
