//! The `Type` lattice: five primitives and homogeneous arrays

/// A resolved static type
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    /// `真假`
    Boolean,
    /// `整数`
    Int,
    /// `小数`
    Float,
    /// `词`
    String,
    /// `字`
    Char,
    /// `T[]`
    Array(Box<Type>),
}

impl Type {
    pub fn array_of(element: Type) -> Self {
        Type::Array(Box::new(element))
    }

    /// Map a primitive type keyword to its type
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "真假" => Some(Type::Boolean),
            "整数" => Some(Type::Int),
            "小数" => Some(Type::Float),
            "词" => Some(Type::String),
            "字" => Some(Type::Char),
            _ => None,
        }
    }

    /// Source spelling of this type, e.g. `整数[][]`
    pub fn keyword(&self) -> String {
        match self {
            Type::Boolean => "真假".to_string(),
            Type::Int => "整数".to_string(),
            Type::Float => "小数".to_string(),
            Type::String => "词".to_string(),
            Type::Char => "字".to_string(),
            Type::Array(element) => format!("{}[]", element.keyword()),
        }
    }

    /// Structural-nominal equivalence: same primitive tag, or arrays of
    /// equivalent element types
    pub fn is_equivalent_to(&self, other: &Type) -> bool {
        match (self, other) {
            (Type::Boolean, Type::Boolean)
            | (Type::Int, Type::Int)
            | (Type::Float, Type::Float)
            | (Type::String, Type::String)
            | (Type::Char, Type::Char) => true,
            (Type::Array(a), Type::Array(b)) => a.is_equivalent_to(b),
            _ => false,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Type::Int | Type::Float)
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, Type::Boolean)
    }

    pub fn element_type(&self) -> Option<&Type> {
        match self {
            Type::Array(element) => Some(element),
            _ => None,
        }
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Type::Boolean => write!(f, "Boolean"),
            Type::Int => write!(f, "Int"),
            Type::Float => write!(f, "Float"),
            Type::String => write!(f, "String"),
            Type::Char => write!(f, "Char"),
            Type::Array(element) => write!(f, "{}[]", element),
        }
    }
}
