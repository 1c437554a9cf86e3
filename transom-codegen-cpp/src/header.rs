//! The declaration (header) walker.

use tracing::warn;
use transom_codegen::CodeBuilder;
use transom_syntax::{
    CompilationUnit, ConstructorDecl, ConversionSettings, EnumDecl, FieldDecl, Item, Member,
    MethodDecl, NamespaceDecl, PropertyDecl, PropertyStyle, SemanticModel, TypeDecl, TypeDeclKind,
    UsingDirective,
};

use crate::error::EmitError;
use crate::members::{has_initializable_members, resolve_parameters, template_prologue};
use crate::naming::humanize_identifier;
use crate::type_builder::TypeCodeBuilder;
use crate::type_mapper::{cpp_type, default_value};

/// Imported namespaces assumed to exist in the target environment; their
/// using directives are dropped instead of translated.
const SYSTEM_NAMESPACES: &[&str] = &[
    "System",
    "System.Collections",
    "System.Collections.Generic",
    "System.Text",
    "System.Linq",
];

/// Emit the declaration document for a compilation unit.
pub fn emit_header(
    unit: &CompilationUnit,
    model: &dyn SemanticModel,
    settings: &ConversionSettings,
) -> Result<String, EmitError> {
    HeaderWalker::new(model, settings).walk(unit)
}

/// Traverses the tree once and assembles the header text.
///
/// Holds no mutable state of its own; each [`HeaderWalker::walk`] call owns
/// its builders locally, so one walker may serve several units.
pub struct HeaderWalker<'a> {
    model: &'a dyn SemanticModel,
    settings: &'a ConversionSettings,
}

impl<'a> HeaderWalker<'a> {
    pub fn new(model: &'a dyn SemanticModel, settings: &'a ConversionSettings) -> Self {
        Self { model, settings }
    }

    /// Produce the whole declaration document.
    pub fn walk(&self, unit: &CompilationUnit) -> Result<String, EmitError> {
        let mut cb = CodeBuilder::new();
        for using in &unit.usings {
            self.visit_using(&mut cb, using);
        }
        for item in &unit.items {
            self.visit_item(&mut cb, item)?;
        }
        Ok(cb.build())
    }

    fn visit_item(&self, cb: &mut CodeBuilder, item: &Item) -> Result<(), EmitError> {
        match item {
            Item::Namespace(ns) => self.visit_namespace(cb, ns),
            Item::Type(decl) => self.visit_type(cb, decl),
            Item::Enum(decl) => self.visit_enum(cb, decl),
        }
    }

    fn visit_using(&self, cb: &mut CodeBuilder, using: &UsingDirective) {
        if SYSTEM_NAMESPACES.contains(&using.namespace.as_str()) {
            return;
        }
        let path = using.namespace.split('.').collect::<Vec<_>>().join("::");
        cb.append_indented("using namespace ");
        cb.append(&path);
        cb.append_line(";");
    }

    /// All dotted segments open on one line and close on one line, each
    /// closing brace annotated with its segment name.
    fn visit_namespace(&self, cb: &mut CodeBuilder, ns: &NamespaceDecl) -> Result<(), EmitError> {
        let parts: Vec<&str> = ns.name.split('.').collect();

        cb.append_indent();
        for part in &parts {
            cb.append("namespace ").append(part).append(" { ");
        }
        cb.append_line("");

        for item in &ns.items {
            self.visit_item(cb, item)?;
        }

        cb.append_indent();
        for part in &parts {
            cb.append("} /* ").append(part).append("*/ ");
        }
        cb.append_line("");
        Ok(())
    }

    /// The enum block, followed by a synthesized stream-insertion operator
    /// printing a humanized rendering of each member.
    fn visit_enum(&self, cb: &mut CodeBuilder, decl: &EnumDecl) -> Result<(), EmitError> {
        cb.append_indented("enum class ");
        cb.append_line(&decl.name);
        cb.scope(|cb| {
            for member in &decl.members {
                cb.append_indented(&member.name).append_line(",");
            }
            Ok::<_, EmitError>(())
        })?;

        cb.push_line(&format!(
            "std::ostream& operator<<(std::ostream& os, const {} obj)",
            decl.name
        ));
        cb.scope(|cb| {
            cb.push_line("switch (obj)");
            cb.scope(|cb| {
                for member in &decl.members {
                    cb.append_indented(&format!("case {}::{}: ", decl.name, member.name));
                    cb.append_line(&format!(
                        "os << \"{}\"; break;",
                        humanize_identifier(&member.name)
                    ));
                }
                Ok::<_, EmitError>(())
            })?;
            cb.push_line("return os;");
            Ok::<_, EmitError>(())
        })?;
        Ok(())
    }

    fn visit_type(&self, cb: &mut CodeBuilder, decl: &TypeDecl) -> Result<(), EmitError> {
        let mut tcb = TypeCodeBuilder::new();
        tcb.top.append_indent();

        if !decl.type_parameters.is_empty() {
            tcb.top.append(&template_prologue(&decl.type_parameters));
        }

        tcb.top.append("class ").append(&decl.name);

        for (i, base) in decl.bases.iter().enumerate() {
            if i == 0 {
                tcb.top.append(" : ");
            }
            tcb.top.append("public ").append(base);
            if i + 1 != decl.bases.len() {
                tcb.top.append(", ");
            }
        }

        tcb.top.append_line(" { ");

        for member in &decl.members {
            match member {
                Member::Field(field) => self.visit_field(&mut tcb, field)?,
                Member::Property(property) => self.visit_property(&mut tcb, property)?,
                Member::Method(method) => self.visit_method(&mut tcb, decl, method)?,
                Member::Constructor(ctor) => self.visit_constructor(&mut tcb, ctor)?,
            }
        }

        if decl.kind == TypeDeclKind::Class
            && has_initializable_members(decl, self.model)
            && !decl.has_default_constructor()
        {
            tcb.public.push_line(&format!("{}();", decl.name));
        }

        tcb.bottom.push_line("};");

        cb.append(&tcb.render());
        Ok(())
    }

    /// One declaration line per co-declared name, each carrying modifiers,
    /// the mapped type and a default initializer when the mapper has one.
    fn visit_field(&self, tcb: &mut TypeCodeBuilder, field: &FieldDecl) -> Result<(), EmitError> {
        for declarator in &field.declarators {
            let Some(symbol) = self.model.declared_symbol(declarator.id) else {
                warn!(field = %declarator.name, "skipping field with unresolved symbol");
                continue;
            };

            let spelling = cpp_type(&symbol.ty);
            let builder = tcb.bucket_for(symbol.accessibility, &declarator.name)?;
            builder.append_indent();
            builder.append_if("const ", symbol.is_const);
            builder.append_if("static ", symbol.is_static);
            builder.append(&spelling).append(" ").append(&declarator.name);
            if let Some(default) = default_value(&symbol.ty) {
                builder.append(" = ").append(default);
            }
            builder.append_line(";");
        }
        Ok(())
    }

    fn visit_method(
        &self,
        tcb: &mut TypeCodeBuilder,
        owner: &TypeDecl,
        method: &MethodDecl,
    ) -> Result<(), EmitError> {
        let owner_is_interface = owner.kind == TypeDeclKind::Interface;

        let Some(symbol) = self.model.declared_symbol(method.id) else {
            warn!(method = %method.name, "skipping method with unresolved symbol");
            return Ok(());
        };
        let Some(parameters) = resolve_parameters(&method.parameters, self.model) else {
            warn!(method = %method.name, "skipping method with unresolved parameter");
            return Ok(());
        };

        let builder = tcb.bucket_for(symbol.accessibility, &method.name)?;
        builder.append_indent();

        if symbol.is_generic() {
            builder.append(&template_prologue(&symbol.type_parameters));
        }

        builder.append_if("virtual ", owner_is_interface || symbol.is_virtual);
        builder.append_if("static ", symbol.is_static);

        builder.append(&cpp_type(&symbol.ty));
        builder.append(" ");
        builder.append(&method.name);
        builder.append("(");
        for (i, (name, spelling)) in parameters.iter().enumerate() {
            builder.append(spelling).append(" ").append(name);
            if i + 1 < parameters.len() {
                builder.append(", ");
            }
        }
        builder.append(")");
        builder.append_if(" = 0", owner_is_interface);
        builder.append_line(";");
        Ok(())
    }

    /// Property accessors, in the bucket of the property itself. Accessor
    /// accessibility narrower than the property's is not honored; see the
    /// compatibility notes in DESIGN.md.
    fn visit_property(
        &self,
        tcb: &mut TypeCodeBuilder,
        property: &PropertyDecl,
    ) -> Result<(), EmitError> {
        let Some(symbol) = self.model.declared_symbol(property.id) else {
            warn!(property = %property.name, "skipping property with unresolved symbol");
            return Ok(());
        };

        let spelling = cpp_type(&symbol.ty);
        let getter = format!("{}{}", self.settings.getter_prefix, property.name);
        let setter = format!("{}{}", self.settings.setter_prefix, property.name);
        let builder = tcb.bucket_for(symbol.accessibility, &property.name)?;

        if self.settings.property_style == PropertyStyle::DeclspecProperty {
            builder.append_indented("__declspec(property(");
            if property.has_getter {
                builder.append("get=").append(&getter);
            }
            if property.has_setter {
                builder.append_if(",", property.has_getter);
                builder.append("put=").append(&setter);
            }
            builder.append(")) ").append(&spelling).append(" ").append(&property.name);
            builder.append_line(";");
        }

        if property.has_getter {
            builder.push_line(&format!("{} {}() const;", spelling, getter));
        }
        if property.has_setter {
            builder.push_line(&format!("void {}({});", setter, spelling));
        }
        Ok(())
    }

    fn visit_constructor(
        &self,
        tcb: &mut TypeCodeBuilder,
        ctor: &ConstructorDecl,
    ) -> Result<(), EmitError> {
        let Some(symbol) = self.model.declared_symbol(ctor.id) else {
            warn!(constructor = %ctor.name, "skipping constructor with unresolved symbol");
            return Ok(());
        };
        let Some(parameters) = resolve_parameters(&ctor.parameters, self.model) else {
            warn!(constructor = %ctor.name, "skipping constructor with unresolved parameter");
            return Ok(());
        };

        let builder = tcb.bucket_for(symbol.accessibility, &ctor.name)?;
        builder.append_indented(&ctor.name).append("(");
        for (i, (name, spelling)) in parameters.iter().enumerate() {
            builder.append(spelling).append(" ").append(name);
            if i + 1 < parameters.len() {
                builder.append(", ");
            }
        }
        builder.append_line(");");
        Ok(())
    }
}
