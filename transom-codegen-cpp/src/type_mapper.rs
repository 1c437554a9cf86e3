//! Mapping resolved source types to C++ spellings.
//!
//! Three pure functions over [`TypeDescriptor`]: the type spelling itself,
//! the argument-passing spelling, and the default-value literal. Purity
//! matters because the two walkers consult the mapper independently and the
//! documents they produce must agree.

use transom_syntax::{NamedType, PrimitiveKind, TypeDescriptor};

/// Generic-container substitutions, keyed on the bare source name.
///
/// A closed table: source containers the transpiler understands map to the
/// standard (or boost) equivalent, everything else falls through to the
/// reference-type rules.
fn known_generic(name: &str) -> Option<&'static str> {
    match name {
        "List" => Some("std::vector"),
        "Dictionary" => Some("std::map"),
        "Nullable" => Some("boost::optional"),
        _ => None,
    }
}

/// The C++ spelling for a resolved type.
///
/// Heap-allocated reference types with no better translation become
/// `std::shared_ptr<T>`: the source lifetime model is not recoverable, so
/// shared ownership is the conservative default.
pub fn cpp_type(ty: &TypeDescriptor) -> String {
    match ty {
        TypeDescriptor::Array { element } => match element {
            Some(element) => format!("std::vector<{}>", cpp_type(element)),
            // no idea what kind of an array this is
            None => "std::vector<boost::any>".to_string(),
        },
        TypeDescriptor::Primitive(kind) => primitive_spelling(*kind).to_string(),
        TypeDescriptor::TypeParameter(name) => name.clone(),
        TypeDescriptor::Named(named) => named_spelling(named),
    }
}

fn named_spelling(named: &NamedType) -> String {
    if let Some(mapped) = known_generic(&named.name) {
        let args: Vec<String> = named.type_arguments.iter().map(cpp_type).collect();
        return format!("{}<{}>", mapped, args.join(", "));
    }

    if named.is_reference {
        return match named.name.as_str() {
            "DateTime" => "boost::date".to_string(),
            "NullPointerException" => "std::invalid_argument".to_string(),
            "StringBuilder" => "std::ostringstream".to_string(),
            // highly inefficient
            "ArrayList" => "std::vector<boost::any>".to_string(),
            name => format!("std::shared_ptr<{}>", name),
        };
    }

    named.name.clone()
}

fn primitive_spelling(kind: PrimitiveKind) -> &'static str {
    match kind {
        PrimitiveKind::Void => "void",
        PrimitiveKind::Bool => "bool",
        PrimitiveKind::Char => "char",
        PrimitiveKind::Int8 => "int8_t",
        PrimitiveKind::UInt8 => "uint8_t",
        PrimitiveKind::Int16 => "int16_t",
        PrimitiveKind::UInt16 => "uint16_t",
        PrimitiveKind::Int32 => "int32_t",
        PrimitiveKind::UInt32 => "uint32_t",
        PrimitiveKind::Int64 => "int64_t",
        PrimitiveKind::UInt64 => "uint64_t",
        PrimitiveKind::Float32 => "float",
        PrimitiveKind::Float64 => "double",
        PrimitiveKind::Decimal => "/* Decimal types not supported */ double",
        PrimitiveKind::String => "std::string",
        PrimitiveKind::IntPtr => "int *",
        PrimitiveKind::UIntPtr => "unsigned int *",
    }
}

/// The spelling used when a value of this type is passed as an argument.
///
/// Strings, optionals and anything the mapper cannot classify pass as
/// `const T&`; copying a type of unknown cost is the one mistake this
/// cannot make. Classified primitives pass by value.
pub fn argument_type(ty: &TypeDescriptor) -> String {
    let spelling = cpp_type(ty);
    match ty {
        TypeDescriptor::Primitive(PrimitiveKind::String) => format!("const {}&", spelling),
        TypeDescriptor::Primitive(_) => spelling,
        TypeDescriptor::Array { .. }
        | TypeDescriptor::Named(_)
        | TypeDescriptor::TypeParameter(_) => format!("const {}&", spelling),
    }
}

/// The default-value literal for a field of this type, when one exists.
///
/// Only a fixed set of primitive categories has one; reference types and
/// arrays return `None` so the declaration walker omits the initializer
/// rather than guessing.
pub fn default_value(ty: &TypeDescriptor) -> Option<&'static str> {
    let TypeDescriptor::Primitive(kind) = ty else {
        return None;
    };
    match kind {
        PrimitiveKind::Int8
        | PrimitiveKind::UInt8
        | PrimitiveKind::Int16
        | PrimitiveKind::UInt16
        | PrimitiveKind::Int32
        | PrimitiveKind::UInt32
        | PrimitiveKind::Int64
        | PrimitiveKind::UInt64 => Some("0"),
        PrimitiveKind::Float64 => Some("0.0"),
        PrimitiveKind::Float32 => Some("0.0f"),
        PrimitiveKind::Char => Some("''"),
        PrimitiveKind::IntPtr | PrimitiveKind::UIntPtr => Some("nullptr"),
        PrimitiveKind::Void
        | PrimitiveKind::Bool
        | PrimitiveKind::Decimal
        | PrimitiveKind::String => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use transom_syntax::{CompositeKind, NamedType, PrimitiveKind, TypeDescriptor};

    fn named(name: &str) -> TypeDescriptor {
        TypeDescriptor::Named(NamedType::reference(name))
    }

    fn generic(name: &str, args: Vec<TypeDescriptor>) -> TypeDescriptor {
        TypeDescriptor::Named(NamedType {
            name: name.to_string(),
            type_arguments: args,
            is_reference: true,
            kind: CompositeKind::Class,
        })
    }

    #[test]
    fn test_primitives() {
        assert_eq!(cpp_type(&TypeDescriptor::Primitive(PrimitiveKind::Void)), "void");
        assert_eq!(cpp_type(&TypeDescriptor::Primitive(PrimitiveKind::Int32)), "int32_t");
        assert_eq!(cpp_type(&TypeDescriptor::Primitive(PrimitiveKind::UInt64)), "uint64_t");
        assert_eq!(
            cpp_type(&TypeDescriptor::Primitive(PrimitiveKind::String)),
            "std::string"
        );
    }

    #[test]
    fn test_array_of_known_element() {
        let ty = TypeDescriptor::Array {
            element: Some(Box::new(TypeDescriptor::Primitive(PrimitiveKind::Int32))),
        };
        assert_eq!(cpp_type(&ty), "std::vector<int32_t>");
    }

    #[test]
    fn test_array_of_unresolved_element() {
        let ty = TypeDescriptor::Array { element: None };
        assert_eq!(cpp_type(&ty), "std::vector<boost::any>");
    }

    #[test]
    fn test_known_generic_containers() {
        let list = generic("List", vec![TypeDescriptor::Primitive(PrimitiveKind::String)]);
        assert_eq!(cpp_type(&list), "std::vector<std::string>");

        let map = generic(
            "Dictionary",
            vec![
                TypeDescriptor::Primitive(PrimitiveKind::String),
                generic("List", vec![named("Person")]),
            ],
        );
        assert_eq!(
            cpp_type(&map),
            "std::map<std::string, std::vector<std::shared_ptr<Person>>>"
        );

        let opt = generic("Nullable", vec![TypeDescriptor::Primitive(PrimitiveKind::Int32)]);
        assert_eq!(cpp_type(&opt), "boost::optional<int32_t>");
    }

    #[test]
    fn test_well_known_library_types() {
        assert_eq!(cpp_type(&named("DateTime")), "boost::date");
        assert_eq!(cpp_type(&named("StringBuilder")), "std::ostringstream");
        assert_eq!(cpp_type(&named("NullPointerException")), "std::invalid_argument");
        assert_eq!(cpp_type(&named("ArrayList")), "std::vector<boost::any>");
    }

    #[test]
    fn test_unknown_reference_type_is_shared_ptr() {
        assert_eq!(cpp_type(&named("Person")), "std::shared_ptr<Person>");
    }

    #[test]
    fn test_value_type_keeps_bare_name() {
        let ty = TypeDescriptor::Named(NamedType::value("Point", CompositeKind::Struct));
        assert_eq!(cpp_type(&ty), "Point");
    }

    #[test]
    fn test_type_parameter_passes_through() {
        assert_eq!(cpp_type(&TypeDescriptor::TypeParameter("T".into())), "T");
    }

    #[test]
    fn test_mapping_is_idempotent() {
        let ty = generic("Dictionary", vec![named("Key"), named("Value")]);
        assert_eq!(cpp_type(&ty), cpp_type(&ty));
        assert_eq!(argument_type(&ty), argument_type(&ty));
    }

    #[test]
    fn test_argument_type_by_value_for_primitives() {
        assert_eq!(
            argument_type(&TypeDescriptor::Primitive(PrimitiveKind::Int32)),
            "int32_t"
        );
        assert_eq!(argument_type(&TypeDescriptor::Primitive(PrimitiveKind::Bool)), "bool");
    }

    #[test]
    fn test_argument_type_const_ref_for_strings_and_unclassified() {
        assert_eq!(
            argument_type(&TypeDescriptor::Primitive(PrimitiveKind::String)),
            "const std::string&"
        );
        assert_eq!(argument_type(&named("Person")), "const std::shared_ptr<Person>&");
        let opt = generic("Nullable", vec![TypeDescriptor::Primitive(PrimitiveKind::Int32)]);
        assert_eq!(argument_type(&opt), "const boost::optional<int32_t>&");
    }

    #[test]
    fn test_default_values() {
        assert_eq!(default_value(&TypeDescriptor::Primitive(PrimitiveKind::Int32)), Some("0"));
        assert_eq!(
            default_value(&TypeDescriptor::Primitive(PrimitiveKind::Float64)),
            Some("0.0")
        );
        assert_eq!(
            default_value(&TypeDescriptor::Primitive(PrimitiveKind::Float32)),
            Some("0.0f")
        );
        assert_eq!(default_value(&TypeDescriptor::Primitive(PrimitiveKind::Char)), Some("''"));
        assert_eq!(
            default_value(&TypeDescriptor::Primitive(PrimitiveKind::IntPtr)),
            Some("nullptr")
        );
    }

    #[test]
    fn test_no_default_for_references_and_arrays() {
        assert_eq!(default_value(&named("Person")), None);
        assert_eq!(default_value(&TypeDescriptor::Array { element: None }), None);
        assert_eq!(default_value(&TypeDescriptor::Primitive(PrimitiveKind::String)), None);
    }
}
