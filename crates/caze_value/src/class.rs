//! Nominal runtime classes.
//!
//! A class is identified by its [`ClassId`] and carries the set of every
//! class it is assignable to (itself and `Object` included). The set is
//! computed once, when the class is declared, so an instance-of check is a
//! single hash lookup and never walks a hierarchy.
//!
//! Ids are allocated from a process-wide counter, so classes declared by
//! independent callers never collide.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::LazyLock;

use rustc_hash::FxHashSet;

use crate::heap::Heap;

/// Identity of a declared class.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassId(u32);

impl ClassId {
    /// The root class every reference type is assignable to.
    pub const OBJECT: ClassId = ClassId(0);

    fn fresh() -> Self {
        static NEXT: AtomicU32 = AtomicU32::new(1);
        ClassId(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw numeric id.
    #[inline]
    pub fn raw(self) -> u32 {
        self.0
    }
}

/// Which value variant may carry a class as its runtime class.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Instances {
    /// `Value::object` instances.
    Objects,
    /// `Value::function` instances.
    Functions,
    /// Only the builtin variant the class describes (`Int` for `Integer`,
    /// `Str` for `String`, ...). A declared subclass has no instances.
    Builtin,
}

struct ClassData {
    id: ClassId,
    name: String,
    ancestors: FxHashSet<ClassId>,
    instances: Instances,
}

/// A declared class or interface.
///
/// Cloning is cheap; equality is by [`ClassId`].
#[derive(Clone)]
pub struct Class(Heap<ClassData>);

impl Class {
    /// Declare a new class with the given direct supertypes.
    ///
    /// Interfaces and classes are not distinguished: a class may list any
    /// number of supertypes and inherits all of their ancestors.
    ///
    /// A class extending `Function` is functional. A class extending a
    /// builtin value class (`Integer`, `String`, `Some`, ...) can name a
    /// type but has no instances.
    pub fn declare(name: impl Into<String>, supertypes: &[&Class]) -> Self {
        let mut instances = Instances::Objects;
        for sup in supertypes {
            match sup.instances() {
                Instances::Builtin => instances = Instances::Builtin,
                Instances::Functions if instances == Instances::Objects => {
                    instances = Instances::Functions;
                }
                _ => {}
            }
        }
        Class::with_instances(name, supertypes, instances)
    }

    fn with_instances(
        name: impl Into<String>,
        supertypes: &[&Class],
        instances: Instances,
    ) -> Self {
        let id = ClassId::fresh();
        let mut ancestors = FxHashSet::default();
        ancestors.insert(id);
        ancestors.insert(ClassId::OBJECT);
        for sup in supertypes {
            ancestors.extend(sup.0.ancestors.iter().copied());
        }
        Class(Heap::new(ClassData {
            id,
            name: name.into(),
            ancestors,
            instances,
        }))
    }

    fn root() -> Self {
        let mut ancestors = FxHashSet::default();
        ancestors.insert(ClassId::OBJECT);
        Class(Heap::new(ClassData {
            id: ClassId::OBJECT,
            name: "Object".to_string(),
            ancestors,
            instances: Instances::Objects,
        }))
    }

    #[inline]
    pub fn id(&self) -> ClassId {
        self.0.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.0.name
    }

    #[inline]
    pub fn instances(&self) -> Instances {
        self.0.instances
    }

    /// Check whether instances of `self` are assignable to `other`.
    #[inline]
    pub fn is_subclass_of(&self, other: &Class) -> bool {
        self.0.ancestors.contains(&other.id())
    }

    /// Every class `self` is assignable to, in no particular order.
    pub fn ancestors(&self) -> impl Iterator<Item = ClassId> + '_ {
        self.0.ancestors.iter().copied()
    }

    pub fn object() -> Class {
        BUILTINS.object.clone()
    }

    /// Abstract supertype of the boxed numeric classes.
    pub fn number() -> Class {
        BUILTINS.number.clone()
    }

    pub fn string() -> Class {
        BUILTINS.string.clone()
    }

    pub fn boolean() -> Class {
        BUILTINS.boolean.clone()
    }

    pub fn byte() -> Class {
        BUILTINS.byte.clone()
    }

    pub fn short() -> Class {
        BUILTINS.short.clone()
    }

    pub fn character() -> Class {
        BUILTINS.character.clone()
    }

    pub fn integer() -> Class {
        BUILTINS.integer.clone()
    }

    pub fn long() -> Class {
        BUILTINS.long.clone()
    }

    pub fn float() -> Class {
        BUILTINS.float.clone()
    }

    pub fn double() -> Class {
        BUILTINS.double.clone()
    }

    /// Root functional class. Declared functional classes extend it.
    pub fn function() -> Class {
        BUILTINS.function.clone()
    }

    pub fn option() -> Class {
        BUILTINS.option.clone()
    }

    pub fn some() -> Class {
        BUILTINS.some.clone()
    }

    pub fn none() -> Class {
        BUILTINS.none.clone()
    }
}

impl PartialEq for Class {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for Class {}

impl fmt::Debug for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Class({}#{})", self.name(), self.id().raw())
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

struct Builtins {
    object: Class,
    number: Class,
    string: Class,
    boolean: Class,
    byte: Class,
    short: Class,
    character: Class,
    integer: Class,
    long: Class,
    float: Class,
    double: Class,
    function: Class,
    option: Class,
    some: Class,
    none: Class,
}

impl Builtins {
    fn new() -> Self {
        let builtin = |name: &str, supertypes: &[&Class]| {
            Class::with_instances(name, supertypes, Instances::Builtin)
        };
        let number = Class::declare("Number", &[]);
        let option = Class::declare("Option", &[]);
        Builtins {
            object: Class::root(),
            string: builtin("String", &[]),
            boolean: builtin("Boolean", &[]),
            byte: builtin("Byte", &[&number]),
            short: builtin("Short", &[&number]),
            character: builtin("Character", &[]),
            integer: builtin("Integer", &[&number]),
            long: builtin("Long", &[&number]),
            float: builtin("Float", &[&number]),
            double: builtin("Double", &[&number]),
            function: Class::with_instances("Function", &[], Instances::Functions),
            some: builtin("Some", &[&option]),
            none: builtin("None", &[&option]),
            number,
            option,
        }
    }
}

static BUILTINS: LazyLock<Builtins> = LazyLock::new(Builtins::new);
