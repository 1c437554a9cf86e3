//! End-to-end tests for the declaration document.

use transom_codegen_cpp::{EmitError, emit_header};
use transom_syntax::testing::MapModel;
use transom_syntax::{
    Accessibility, CompilationUnit, ConstructorDecl, ConversionSettings, EnumDecl, EnumMember,
    FieldDecl, Item, Member, MethodDecl, NamespaceDecl, NodeId, Parameter, PrimitiveKind,
    PropertyDecl, PropertyStyle, Symbol, TypeDecl, TypeDeclKind, TypeDescriptor, UsingDirective,
    VariableDeclarator,
};

fn int32() -> TypeDescriptor {
    TypeDescriptor::Primitive(PrimitiveKind::Int32)
}

fn string() -> TypeDescriptor {
    TypeDescriptor::Primitive(PrimitiveKind::String)
}

fn void() -> TypeDescriptor {
    TypeDescriptor::Primitive(PrimitiveKind::Void)
}

fn class(name: &str, id: u32, members: Vec<Member>) -> TypeDecl {
    TypeDecl {
        id: NodeId(id),
        name: name.to_string(),
        kind: TypeDeclKind::Class,
        type_parameters: Vec::new(),
        bases: Vec::new(),
        members,
    }
}

fn field(id: u32, name: &str) -> Member {
    Member::Field(FieldDecl {
        declarators: vec![VariableDeclarator {
            id: NodeId(id),
            name: name.to_string(),
            initializer: None,
        }],
    })
}

fn settings() -> ConversionSettings {
    ConversionSettings::default()
}

#[test]
fn person_in_nested_namespace() {
    let unit = CompilationUnit {
        usings: Vec::new(),
        items: vec![Item::Namespace(NamespaceDecl {
            name: "Foo.Bar".to_string(),
            items: vec![Item::Type(class(
                "Person",
                1,
                vec![
                    field(10, "ssn"),
                    Member::Property(PropertyDecl {
                        id: NodeId(11),
                        name: "Name".to_string(),
                        has_getter: true,
                        has_setter: false,
                    }),
                ],
            ))],
        })],
    };
    let model = MapModel::new()
        .symbol(
            NodeId(10),
            Symbol::new("ssn", int32()).with_accessibility(Accessibility::Private),
        )
        .symbol(NodeId(11), Symbol::new("Name", string()));

    let header = emit_header(&unit, &model, &settings()).unwrap();

    assert_eq!(
        header,
        "namespace Foo { namespace Bar { \n\
         class Person { \n\
         private:\n\
         \x20 int32_t ssn = 0;\n\
         public:\n\
         \x20 std::string GetName() const;\n\
         \x20 Person();\n\
         };\n\
         } /* Foo*/ } /* Bar*/ \n"
    );
}

#[test]
fn default_constructor_synthesized_once_in_public_section() {
    let unit = CompilationUnit {
        usings: Vec::new(),
        items: vec![Item::Type(class("Point", 1, vec![field(10, "x"), field(11, "y")]))],
    };
    let model = MapModel::new()
        .symbol(
            NodeId(10),
            Symbol::new("x", int32()).with_accessibility(Accessibility::Private),
        )
        .symbol(
            NodeId(11),
            Symbol::new("y", int32()).with_accessibility(Accessibility::Private),
        );

    let header = emit_header(&unit, &model, &settings()).unwrap();

    assert_eq!(header.matches("Point();").count(), 1);
    let public_at = header.find("public:").expect("public section");
    let ctor_at = header.find("Point();").unwrap();
    assert!(ctor_at > public_at);
}

#[test]
fn no_default_constructor_when_one_is_declared() {
    let unit = CompilationUnit {
        usings: Vec::new(),
        items: vec![Item::Type(class(
            "Point",
            1,
            vec![
                field(10, "x"),
                Member::Constructor(ConstructorDecl {
                    id: NodeId(20),
                    name: "Point".to_string(),
                    parameters: Vec::new(),
                    body: Vec::new(),
                }),
            ],
        ))],
    };
    let model = MapModel::new()
        .symbol(
            NodeId(10),
            Symbol::new("x", int32()).with_accessibility(Accessibility::Private),
        )
        .symbol(NodeId(20), Symbol::new("Point", void()));

    let header = emit_header(&unit, &model, &settings()).unwrap();
    assert_eq!(header.matches("Point();").count(), 1);
}

#[test]
fn section_order_is_independent_of_declaration_order() {
    let members_forward = vec![field(10, "a"), field(11, "b"), field(12, "c")];
    let mut members_reversed = members_forward.clone();
    members_reversed.reverse();

    let model = || {
        MapModel::new()
            .symbol(
                NodeId(10),
                Symbol::new("a", int32()).with_accessibility(Accessibility::Public),
            )
            .symbol(
                NodeId(11),
                Symbol::new("b", int32()).with_accessibility(Accessibility::Protected),
            )
            .symbol(
                NodeId(12),
                Symbol::new("c", int32()).with_accessibility(Accessibility::Private),
            )
    };

    let unit_of = |members| CompilationUnit {
        usings: Vec::new(),
        items: vec![Item::Type(class("Mixed", 1, members))],
    };

    for members in [members_forward, members_reversed] {
        let header = emit_header(&unit_of(members), &model(), &settings()).unwrap();
        let pri = header.find("private:").unwrap();
        let pro = header.find("protected:").unwrap();
        let pub_ = header.find("public:").unwrap();
        assert!(pri < pro && pro < pub_, "section order broken in:\n{header}");
    }
}

#[test]
fn enum_block_and_stream_operator() {
    let unit = CompilationUnit {
        usings: Vec::new(),
        items: vec![Item::Enum(EnumDecl {
            id: NodeId(1),
            name: "Color".to_string(),
            members: vec![
                EnumMember {
                    id: NodeId(2),
                    name: "Red".to_string(),
                },
                EnumMember {
                    id: NodeId(3),
                    name: "Green".to_string(),
                },
                EnumMember {
                    id: NodeId(4),
                    name: "LightBlue".to_string(),
                },
            ],
        })],
    };

    let header = emit_header(&unit, &MapModel::new(), &settings()).unwrap();

    assert_eq!(
        header,
        "enum class Color\n\
         {\n\
         \x20 Red,\n\
         \x20 Green,\n\
         \x20 LightBlue,\n\
         }\n\
         std::ostream& operator<<(std::ostream& os, const Color obj)\n\
         {\n\
         \x20 switch (obj)\n\
         \x20 {\n\
         \x20   case Color::Red: os << \"red\"; break;\n\
         \x20   case Color::Green: os << \"green\"; break;\n\
         \x20   case Color::LightBlue: os << \"light blue\"; break;\n\
         \x20 }\n\
         \x20 return os;\n\
         }\n"
    );

    // the enum block precedes its stream operator
    assert!(header.find("enum class Color").unwrap() < header.find("operator<<").unwrap());
}

#[test]
fn interface_methods_are_pure_virtual() {
    let unit = CompilationUnit {
        usings: Vec::new(),
        items: vec![Item::Type(TypeDecl {
            id: NodeId(1),
            name: "IShape".to_string(),
            kind: TypeDeclKind::Interface,
            type_parameters: Vec::new(),
            bases: Vec::new(),
            members: vec![Member::Method(MethodDecl {
                id: NodeId(10),
                name: "Area".to_string(),
                parameters: Vec::new(),
                body: None,
            })],
        })],
    };
    let model = MapModel::new().symbol(
        NodeId(10),
        Symbol::new("Area", TypeDescriptor::Primitive(PrimitiveKind::Float64)),
    );

    let header = emit_header(&unit, &model, &settings()).unwrap();
    assert!(header.contains("virtual double Area() = 0;"));
}

#[test]
fn method_modifiers_and_parameters() {
    let unit = CompilationUnit {
        usings: Vec::new(),
        items: vec![Item::Type(class(
            "Maths",
            1,
            vec![Member::Method(MethodDecl {
                id: NodeId(10),
                name: "Clamp".to_string(),
                parameters: vec![
                    Parameter {
                        id: NodeId(11),
                        name: "value".to_string(),
                    },
                    Parameter {
                        id: NodeId(12),
                        name: "label".to_string(),
                    },
                ],
                body: Some(Vec::new()),
            })],
        ))],
    };
    let mut symbol = Symbol::new("Clamp", int32());
    symbol.is_static = true;
    let model = MapModel::new()
        .symbol(NodeId(10), symbol)
        .symbol(NodeId(11), Symbol::new("value", int32()))
        .symbol(NodeId(12), Symbol::new("label", string()));

    let header = emit_header(&unit, &model, &settings()).unwrap();
    assert!(header.contains("static int32_t Clamp(int32_t value, const std::string& label);"));
}

#[test]
fn generic_method_gets_template_prologue() {
    let unit = CompilationUnit {
        usings: Vec::new(),
        items: vec![Item::Type(class(
            "Box",
            1,
            vec![Member::Method(MethodDecl {
                id: NodeId(10),
                name: "Wrap".to_string(),
                parameters: Vec::new(),
                body: Some(Vec::new()),
            })],
        ))],
    };
    let mut symbol = Symbol::new("Wrap", void());
    symbol.type_parameters = vec!["T".to_string(), "U".to_string()];
    let model = MapModel::new().symbol(NodeId(10), symbol);

    let header = emit_header(&unit, &model, &settings()).unwrap();
    assert!(header.contains("template <typename T, typename U> void Wrap();"));
}

#[test]
fn class_template_parameters_and_bases() {
    let unit = CompilationUnit {
        usings: Vec::new(),
        items: vec![Item::Type(TypeDecl {
            id: NodeId(1),
            name: "Pair".to_string(),
            kind: TypeDeclKind::Class,
            type_parameters: vec!["K".to_string(), "V".to_string()],
            bases: vec!["Entry".to_string(), "IComparable".to_string()],
            members: Vec::new(),
        })],
    };

    let header = emit_header(&unit, &MapModel::new(), &settings()).unwrap();
    assert!(header.contains(
        "template <typename K, typename V> class Pair : public Entry, public IComparable { "
    ));
}

#[test]
fn declspec_property_style() {
    let unit = CompilationUnit {
        usings: Vec::new(),
        items: vec![Item::Type(class(
            "Person",
            1,
            vec![Member::Property(PropertyDecl {
                id: NodeId(10),
                name: "Name".to_string(),
                has_getter: true,
                has_setter: true,
            })],
        ))],
    };
    let model = MapModel::new().symbol(NodeId(10), Symbol::new("Name", string()));
    let settings = ConversionSettings {
        property_style: PropertyStyle::DeclspecProperty,
        ..ConversionSettings::default()
    };

    let header = emit_header(&unit, &model, &settings).unwrap();
    assert!(
        header.contains("__declspec(property(get=GetName,put=SetName)) std::string Name;")
    );
    assert!(header.contains("std::string GetName() const;"));
    assert!(header.contains("void SetName(std::string);"));
}

#[test]
fn property_accessors_use_configured_prefixes() {
    let unit = CompilationUnit {
        usings: Vec::new(),
        items: vec![Item::Type(class(
            "Person",
            1,
            vec![Member::Property(PropertyDecl {
                id: NodeId(10),
                name: "Age".to_string(),
                has_getter: true,
                has_setter: true,
            })],
        ))],
    };
    let model = MapModel::new().symbol(NodeId(10), Symbol::new("Age", int32()));
    let settings = ConversionSettings {
        getter_prefix: "Read".to_string(),
        setter_prefix: "Write".to_string(),
        ..ConversionSettings::default()
    };

    let header = emit_header(&unit, &model, &settings).unwrap();
    assert!(header.contains("int32_t ReadAge() const;"));
    assert!(header.contains("void WriteAge(int32_t);"));
}

#[test]
fn unresolved_member_is_skipped() {
    let unit = CompilationUnit {
        usings: Vec::new(),
        items: vec![Item::Type(class(
            "Sparse",
            1,
            vec![field(10, "known"), field(11, "unknown")],
        ))],
    };
    // only `known` resolves
    let model = MapModel::new().symbol(
        NodeId(10),
        Symbol::new("known", int32()).with_accessibility(Accessibility::Private),
    );

    let header = emit_header(&unit, &model, &settings()).unwrap();
    assert!(header.contains("known"));
    assert!(!header.contains("unknown"));
}

#[test]
fn unresolved_accessibility_is_fatal() {
    let unit = CompilationUnit {
        usings: Vec::new(),
        items: vec![Item::Type(class("Broken", 1, vec![field(10, "f")]))],
    };
    let mut symbol = Symbol::new("f", int32());
    symbol.accessibility = None;
    let model = MapModel::new().symbol(NodeId(10), symbol);

    let err = emit_header(&unit, &model, &settings()).unwrap_err();
    assert!(matches!(err, EmitError::UnresolvedAccessibility { member } if member == "f"));
}

#[test]
fn using_directives_translate_non_system_namespaces() {
    let unit = CompilationUnit {
        usings: vec![
            UsingDirective {
                namespace: "System".to_string(),
            },
            UsingDirective {
                namespace: "Acme.Widgets".to_string(),
            },
        ],
        items: Vec::new(),
    };

    let header = emit_header(&unit, &MapModel::new(), &settings()).unwrap();
    assert_eq!(header, "using namespace Acme::Widgets;\n");
}

#[test]
fn const_and_static_field_modifiers() {
    let unit = CompilationUnit {
        usings: Vec::new(),
        items: vec![Item::Type(class("Config", 1, vec![field(10, "limit")]))],
    };
    let mut symbol = Symbol::new("limit", int32()).with_accessibility(Accessibility::Public);
    symbol.is_const = true;
    symbol.is_static = true;
    let model = MapModel::new().symbol(NodeId(10), symbol);

    let header = emit_header(&unit, &model, &settings()).unwrap();
    assert!(header.contains("const static int32_t limit = 0;"));
}
