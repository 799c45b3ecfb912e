// AST definitions for the Alpha front end: positions, types and the file header

use crate::env::CompilationEnvironment;
use crate::errors::CompileError;
use crate::parser::primitives::Primitive;
use std::fmt;

/// Size of the type-name buffer. Names must be strictly shorter than this.
pub const TYPE_NAME_MAX: usize = 255;

/// Source location information for error reporting. Both fields are 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// The location one column to the right on the same line.
    pub fn next_column(self) -> Self {
        Self::new(self.line, self.column + 1)
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// How a value of a type is represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    UnsignedInt,
    SignedInt,
    Bool,
    Float,
    Array,
    Pointer,
    Object,
    NullType,
}

/// Shape of a [`Type`] node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeKind {
    /// One of the built-in scalars, shared by every type that names it.
    Primitive(&'static Primitive),
    Pointer(Box<Type>),
    Array(Box<Type>),
    /// A user-named type, resolved later. `args` are its generic arguments
    /// in source order.
    Object { args: Vec<Type> },
}

/// What a copy of a type should do with one qualifier flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Qualifier {
    Clear,
    Keep,
    Force,
}

impl Qualifier {
    fn apply(self, flag: bool) -> bool {
        match self {
            Qualifier::Clear => false,
            Qualifier::Keep => flag,
            Qualifier::Force => true,
        }
    }
}

/// A parsed type expression such as `u32`, `int*[]` or `map<string, T> const`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Type {
    pub kind: TypeKind,
    /// Rendered name: the spelling for primitives and objects, the child's
    /// name plus `*` or `[]` for pointers and arrays.
    pub name: String,
    /// Size in bytes of a value of this type.
    pub size: usize,
    pub is_const: bool,
    pub is_volatile: bool,
}

impl Type {
    fn from_kind(kind: TypeKind, name: String, size: usize) -> Self {
        Type {
            kind,
            name,
            size,
            is_const: false,
            is_volatile: false,
        }
    }

    pub fn primitive(primitive: &'static Primitive, env: &CompilationEnvironment) -> Self {
        Self::from_kind(
            TypeKind::Primitive(primitive),
            primitive.name.to_string(),
            primitive.size(env.bits),
        )
    }

    /// Classify a base name: a primitive if the spelling is built in,
    /// otherwise a reference-sized object handle.
    pub fn named(name: &str, env: &CompilationEnvironment) -> Self {
        match Primitive::lookup(name) {
            Some(primitive) => Self::primitive(primitive, env),
            None => Self::from_kind(
                TypeKind::Object { args: Vec::new() },
                name.to_string(),
                env.pointer_size(),
            ),
        }
    }

    /// `T*` for a given `T`.
    pub fn pointer_to(child: Type, env: &CompilationEnvironment) -> Result<Self, CompileError> {
        let name = render_name(&child.name, "*")?;
        Ok(Self::from_kind(
            TypeKind::Pointer(Box::new(child)),
            name,
            env.pointer_size(),
        ))
    }

    /// `T[]` for a given `T`.
    pub fn array_of(child: Type, env: &CompilationEnvironment) -> Result<Self, CompileError> {
        let name = render_name(&child.name, "[]")?;
        Ok(Self::from_kind(
            TypeKind::Array(Box::new(child)),
            name,
            env.pointer_size(),
        ))
    }

    pub fn encoding(&self) -> Encoding {
        match &self.kind {
            TypeKind::Primitive(primitive) => primitive.encoding,
            TypeKind::Pointer(_) => Encoding::Pointer,
            TypeKind::Array(_) => Encoding::Array,
            TypeKind::Object { .. } => Encoding::Object,
        }
    }

    pub fn is_object(&self) -> bool {
        matches!(self.kind, TypeKind::Object { .. })
    }

    /// Pointee of a pointer, element of an array, first argument of a
    /// generic object.
    pub fn child(&self) -> Option<&Type> {
        match &self.kind {
            TypeKind::Pointer(child) | TypeKind::Array(child) => Some(child),
            TypeKind::Object { args } => args.first(),
            TypeKind::Primitive(_) => None,
        }
    }

    /// Generic arguments; empty for anything but a parameterized object.
    pub fn args(&self) -> &[Type] {
        match &self.kind {
            TypeKind::Object { args } => args,
            _ => &[],
        }
    }

    pub fn args_mut(&mut self) -> Option<&mut Vec<Type>> {
        match &mut self.kind {
            TypeKind::Object { args } => Some(args),
            _ => None,
        }
    }

    /// Independent deep copy, with each qualifier on the top node cleared,
    /// kept or forced. Nested types keep their own qualifiers.
    pub fn copy_with(&self, constness: Qualifier, volatility: Qualifier) -> Type {
        let mut copy = self.clone();
        copy.is_const = constness.apply(self.is_const);
        copy.is_volatile = volatility.apply(self.is_volatile);
        copy
    }
}

impl fmt::Display for Type {
    /// Full spelling, including generic arguments and qualifiers.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            TypeKind::Primitive(_) => write!(f, "{}", self.name)?,
            TypeKind::Pointer(child) => write!(f, "{}*", child)?,
            TypeKind::Array(child) => write!(f, "{}[]", child)?,
            TypeKind::Object { args } => {
                write!(f, "{}", self.name)?;
                if !args.is_empty() {
                    write!(f, "<")?;
                    for (i, arg) in args.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{}", arg)?;
                    }
                    write!(f, ">")?;
                }
            }
        }
        if self.is_const {
            write!(f, " const")?;
        }
        if self.is_volatile {
            write!(f, " volatile")?;
        }
        Ok(())
    }
}

fn render_name(child: &str, suffix: &str) -> Result<String, CompileError> {
    let name = format!("{}{}", child, suffix);
    if name.len() >= TYPE_NAME_MAX {
        return Err(CompileError::TypeNameOverflow { name });
    }
    Ok(name)
}

/// The `executable NAME;` or `package NAME;` line that opens every file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub name: String,
    pub is_executable: bool,
    pub location: SourceLocation,
}

impl fmt::Display for SourceFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_executable {
            "executable"
        } else {
            "package"
        };
        write!(f, "({} \"{}\")", kind, self.name)
    }
}
