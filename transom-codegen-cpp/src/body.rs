//! The definition (implementation) walker.

use tracing::warn;
use transom_codegen::CodeBuilder;
use transom_syntax::{
    BinaryOp, CompilationUnit, ConstructorDecl, ConversionSettings, Expr, Item, Literal, Member,
    MethodDecl, SemanticModel, Stmt, TypeDecl, VariableDeclarator,
};

use crate::error::EmitError;
use crate::members::{has_initializable_members, resolve_parameters, template_prologue};
use crate::type_mapper::{cpp_type, default_value};

/// Emit the definition document for a compilation unit.
///
/// Settings currently do not influence the definition side (property
/// accessors have no bodies in the declared subset), but the walker is
/// constructed from the same triple as the header walker.
pub fn emit_implementation(
    unit: &CompilationUnit,
    model: &dyn SemanticModel,
    _settings: &ConversionSettings,
) -> Result<String, EmitError> {
    ImplWalker::new(model).walk(unit)
}

/// Traverses the tree once and assembles qualified member definitions.
pub struct ImplWalker<'a> {
    model: &'a dyn SemanticModel,
}

impl<'a> ImplWalker<'a> {
    pub fn new(model: &'a dyn SemanticModel) -> Self {
        Self { model }
    }

    /// Produce the whole definition document.
    pub fn walk(&self, unit: &CompilationUnit) -> Result<String, EmitError> {
        let mut cb = CodeBuilder::new();
        for item in &unit.items {
            self.visit_item(&mut cb, item)?;
        }
        Ok(cb.build())
    }

    fn visit_item(&self, cb: &mut CodeBuilder, item: &Item) -> Result<(), EmitError> {
        match item {
            // namespaces contribute no text of their own here
            Item::Namespace(ns) => {
                for item in &ns.items {
                    self.visit_item(cb, item)?;
                }
                Ok(())
            }
            Item::Type(decl) => self.visit_type(cb, decl),
            // enums are emitted entirely in the header
            Item::Enum(_) => Ok(()),
        }
    }

    fn visit_type(&self, cb: &mut CodeBuilder, decl: &TypeDecl) -> Result<(), EmitError> {
        let initializable = has_initializable_members(decl, self.model);

        if initializable && !decl.has_default_constructor() {
            cb.append_indented(&decl.name)
                .append("::")
                .append(&decl.name)
                .append_line("() :");
            let initializers = self.field_initializers(decl);
            cb.indented(|cb| {
                Self::append_initializer_list(cb, &initializers);
                Ok::<_, EmitError>(())
            })?;
            cb.append_line("{}").blank();
        }

        self.hoist_static_fields(cb, decl);

        for member in &decl.members {
            match member {
                Member::Method(method) => self.visit_method(cb, decl, method)?,
                Member::Constructor(ctor) => self.visit_constructor(cb, decl, ctor, initializable)?,
                // field declarations and property accessors carry no
                // out-of-line definitions in the declared subset
                Member::Field(_) | Member::Property(_) => {}
            }
        }
        Ok(())
    }

    /// Static field initializers move out of the class body into qualified
    /// definitions, emitted ahead of the type's other members.
    fn hoist_static_fields(&self, cb: &mut CodeBuilder, decl: &TypeDecl) {
        for field in decl.fields() {
            for declarator in &field.declarators {
                let Some(initializer) = &declarator.initializer else {
                    continue;
                };
                let Some(symbol) = self.model.declared_symbol(declarator.id) else {
                    continue;
                };
                if !symbol.is_static {
                    continue;
                }

                let spelling = cpp_type(&symbol.ty);
                let value = self.render_static_initializer(&spelling, initializer);
                cb.append_indented(&spelling)
                    .append(" ")
                    .append(&decl.name)
                    .append("::")
                    .append(&declarator.name)
                    .append(" = ")
                    .append(&value)
                    .append_line(";");
                cb.blank();
            }
        }
    }

    /// `new T(args)` on a shared-ownership field becomes
    /// `std::make_shared<T>(args)`.
    fn render_static_initializer(&self, field_spelling: &str, initializer: &Expr) -> String {
        if field_spelling.starts_with("std::shared_ptr<") {
            if let Expr::ObjectCreation {
                type_name,
                arguments,
                ..
            } = initializer
            {
                let args: Vec<String> = arguments.iter().map(|a| self.render_expr(a)).collect();
                return format!("std::make_shared<{}>({})", type_name, args.join(", "));
            }
        }
        self.render_expr(initializer)
    }

    fn visit_method(
        &self,
        cb: &mut CodeBuilder,
        owner: &TypeDecl,
        method: &MethodDecl,
    ) -> Result<(), EmitError> {
        // abstract and interface members have no definition
        let Some(body) = &method.body else {
            return Ok(());
        };
        let Some(symbol) = self.model.declared_symbol(method.id) else {
            warn!(method = %method.name, "skipping method body with unresolved symbol");
            return Ok(());
        };
        let Some(parameters) = resolve_parameters(&method.parameters, self.model) else {
            warn!(method = %method.name, "skipping method body with unresolved parameter");
            return Ok(());
        };

        cb.append_indent();
        if symbol.is_generic() {
            cb.append(&template_prologue(&symbol.type_parameters));
        }
        cb.append(&cpp_type(&symbol.ty));
        cb.append(" ");
        cb.append(&owner.name).append("::").append(&method.name);
        cb.append("(");
        for (i, (name, spelling)) in parameters.iter().enumerate() {
            cb.append(spelling).append(" ").append(name);
            if i + 1 < parameters.len() {
                cb.append(", ");
            }
        }
        // end of parameter block, body follows
        cb.append_line(")");

        cb.scope(|cb| {
            for stmt in body {
                self.emit_stmt(cb, stmt);
            }
            Ok(())
        })
    }

    fn visit_constructor(
        &self,
        cb: &mut CodeBuilder,
        owner: &TypeDecl,
        ctor: &ConstructorDecl,
        owner_initializable: bool,
    ) -> Result<(), EmitError> {
        let Some(parameters) = resolve_parameters(&ctor.parameters, self.model) else {
            warn!(constructor = %ctor.name, "skipping constructor body with unresolved parameter");
            return Ok(());
        };

        cb.append_indent()
            .append(&ctor.name)
            .append("::")
            .append(&ctor.name)
            .append("(");
        for (i, (name, spelling)) in parameters.iter().enumerate() {
            cb.append(spelling).append(" ").append(name);
            if i + 1 != parameters.len() {
                cb.append(", ");
            }
        }
        cb.append(")");

        if owner_initializable {
            cb.append_line(" :");
            let initializers = self.field_initializers(owner);
            cb.indented(|cb| {
                Self::append_initializer_list(cb, &initializers);
                Ok::<_, EmitError>(())
            })?;
        } else {
            cb.append_line("");
        }

        cb.push_line("{");
        cb.indented(|cb| {
            for stmt in &ctor.body {
                self.emit_stmt(cb, stmt);
            }
            Ok::<_, EmitError>(())
        })?;
        cb.push_line("}");
        Ok(())
    }

    /// One `name(value)` entry per non-static value field: the declared
    /// initializer when present, the mapper default otherwise, and
    /// value-initialization when neither exists.
    fn field_initializers(&self, decl: &TypeDecl) -> Vec<String> {
        let mut entries = Vec::new();
        for field in decl.fields() {
            for declarator in &field.declarators {
                let Some(symbol) = self.model.declared_symbol(declarator.id) else {
                    continue;
                };
                if symbol.is_static || !symbol.ty.is_value_semantics() {
                    continue;
                }
                let value = match &declarator.initializer {
                    Some(expr) => self.render_expr(expr),
                    None => default_value(&symbol.ty).unwrap_or("").to_string(),
                };
                entries.push(format!("{}({})", declarator.name, value));
            }
        }
        entries
    }

    fn append_initializer_list(cb: &mut CodeBuilder, entries: &[String]) {
        for (i, entry) in entries.iter().enumerate() {
            cb.append_indented(entry);
            if i + 1 != entries.len() {
                cb.append(",");
            }
            cb.append_line("");
        }
    }

    fn emit_stmt(&self, cb: &mut CodeBuilder, stmt: &Stmt) {
        match stmt {
            Stmt::LocalDeclaration {
                inferred,
                declarators,
            } => self.emit_local_declaration(cb, *inferred, declarators),
            Stmt::Expression(expr) => {
                if let Some(rewritten) = self.rewrite_builtin_call(expr) {
                    cb.push_line(&rewritten);
                } else {
                    cb.push_line(&format!("{};", self.render_expr(expr)));
                }
            }
            Stmt::Return(value) => {
                match value {
                    Some(expr) => cb.push_line(&format!("return {};", self.render_expr(expr))),
                    None => cb.push_line("return;"),
                };
            }
            Stmt::Empty => {
                cb.push_line(";");
            }
        }
    }

    fn emit_local_declaration(
        &self,
        cb: &mut CodeBuilder,
        inferred: bool,
        declarators: &[VariableDeclarator],
    ) {
        let spelling = if inferred {
            "auto".to_string()
        } else {
            declarators
                .first()
                .and_then(|v| self.model.declared_symbol(v.id))
                .map(|s| cpp_type(&s.ty))
                .unwrap_or_else(|| "auto".to_string())
        };

        let names: Vec<String> = declarators
            .iter()
            .map(|v| match &v.initializer {
                Some(expr) => format!("{} = {}", v.name, self.render_expr(expr)),
                None => v.name.clone(),
            })
            .collect();

        cb.push_line(&format!("{} {};", spelling, names.join(", ")));
    }

    /// The recognized standard-library call patterns. Anything that does
    /// not match falls back to structural recursion.
    fn rewrite_builtin_call(&self, expr: &Expr) -> Option<String> {
        let Expr::Invocation {
            callee, arguments, ..
        } = expr
        else {
            return None;
        };
        let Expr::MemberAccess {
            receiver, member, ..
        } = callee.as_ref()
        else {
            return None;
        };
        let Expr::Identifier { name, .. } = receiver.as_ref() else {
            return None;
        };

        match (name.as_str(), member.as_str()) {
            ("Console", "WriteLine") => Some(self.stream_statement(arguments, true)),
            ("Console", "Write") => Some(self.stream_statement(arguments, false)),
            ("Environment", "Exit") => {
                let code = arguments
                    .first()
                    .map(|a| self.render_expr(a))
                    .unwrap_or_else(|| "0".to_string());
                Some(format!("exit({});", code))
            }
            _ => None,
        }
    }

    /// `cout << a << b << endl;` with concatenation chains flattened into
    /// insertion operands.
    fn stream_statement(&self, arguments: &[Expr], newline: bool) -> String {
        let mut operands = Vec::new();
        for argument in arguments {
            self.flatten_stream_operand(argument, &mut operands);
        }

        let mut out = String::from("cout");
        for operand in &operands {
            out.push_str(" << ");
            out.push_str(operand);
        }
        if newline {
            out.push_str(" << endl");
        }
        out.push(';');
        out
    }

    fn flatten_stream_operand(&self, expr: &Expr, out: &mut Vec<String>) {
        match expr {
            Expr::Binary {
                op: BinaryOp::Add,
                left,
                right,
            } => {
                self.flatten_stream_operand(left, out);
                self.flatten_stream_operand(right, out);
            }
            // stream insertion takes the bare literal, not a constructed string
            Expr::Literal(Literal::String(text)) => {
                out.push(format!("\"{}\"", escape_string(text)));
            }
            other => out.push(self.render_expr(other)),
        }
    }

    fn render_expr(&self, expr: &Expr) -> String {
        match expr {
            Expr::Identifier { name, .. } => name.clone(),
            Expr::Literal(literal) => render_literal(literal),
            Expr::MemberAccess {
                receiver, member, ..
            } => {
                let receiver_is_value = receiver
                    .node_id()
                    .and_then(|id| self.model.expression_type(id))
                    .is_some_and(|ty| !ty.is_reference_semantics());
                let separator = if receiver_is_value { "." } else { "->" };
                format!("{}{}{}", self.render_expr(receiver), separator, member)
            }
            Expr::Invocation {
                callee, arguments, ..
            } => {
                let args: Vec<String> = arguments.iter().map(|a| self.render_expr(a)).collect();
                format!("{}({})", self.render_expr(callee), args.join(", "))
            }
            Expr::ObjectCreation {
                type_name,
                arguments,
                ..
            } => {
                let args: Vec<String> = arguments.iter().map(|a| self.render_expr(a)).collect();
                format!("{}({})", type_name, args.join(", "))
            }
            Expr::Binary { op, left, right } => format!(
                "{} {} {}",
                self.render_expr(left),
                op.as_str(),
                self.render_expr(right)
            ),
            Expr::Assignment { target, value } => {
                format!("{} = {}", self.render_expr(target), self.render_expr(value))
            }
        }
    }
}

fn render_literal(literal: &Literal) -> String {
    match literal {
        Literal::String(text) => format!("std::string(\"{}\")", escape_string(text)),
        Literal::Char(c) => format!("'{}'", escape_char(*c)),
        Literal::Number(spelling) => spelling.clone(),
        Literal::Bool(value) => value.to_string(),
        Literal::Null => "nullptr".to_string(),
    }
}

fn escape_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out
}

fn escape_char(c: char) -> String {
    match c {
        '\\' => "\\\\".to_string(),
        '\'' => "\\'".to_string(),
        '\n' => "\\n".to_string(),
        '\r' => "\\r".to_string(),
        '\t' => "\\t".to_string(),
        other => other.to_string(),
    }
}
