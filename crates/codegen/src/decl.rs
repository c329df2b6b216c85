use super::*;

/// Class member along with whether it must end with a semicolon even when
/// semicolons are omitted.
struct Member<'m> {
    node: &'m ClassMember,
    force_semi: bool,
}

impl Spanned for Member<'_> {
    fn span(&self) -> Span {
        self.node.span()
    }
}

impl<'a> Emitter<'a> {
    pub fn emit_decl(&mut self, node: &Decl) -> Result {
        match node {
            Decl::Class(n) => self.emit_class_decl(n),
            Decl::Fn(n) => self.emit_fn_decl(n),
            Decl::Var(n) => {
                self.emit_var_decl(n)?;
                formatting_semi!(self);
                Ok(())
            }
            Decl::TypeAlias(n) => self.emit_type_alias(n),
            Decl::OpaqueType(n) => self.emit_opaque_type(n),
            Decl::Interface(n) => self.emit_interface_decl(n),
            Decl::DeclareFn(n) => self.emit_declare_fn_decl(n),
            Decl::DeclareClass(n) => self.emit_declare_class_decl(n),
            Decl::Module(n) => self.emit_module_decl_block(n),
            Decl::DeclareModuleExports(n) => self.emit_declare_module_exports(n),
        }
    }

    fn emit_declare(&mut self, declare: bool) -> Result {
        if declare {
            keyword!(self, "declare");
            space!(self);
        }
        Ok(())
    }

    fn emit_class_decl(&mut self, node: &ClassDecl) -> Result {
        self.emit_declare(node.declare)?;
        keyword!(self, "class");
        space!(self);
        self.emit_ident(&node.ident)?;
        self.emit_class_trailing(&node.class)
    }

    pub(crate) fn emit_class_expr(&mut self, node: &ClassExpr) -> Result {
        keyword!(self, "class");
        opt_leading_space!(self, emit_ident, node.ident);
        self.emit_class_trailing(&node.class)
    }

    fn emit_class_trailing(&mut self, node: &Class) -> Result {
        opt!(self, emit_type_params, node.type_params);

        if let Some(super_class) = &node.super_class {
            space!(self);
            keyword!(self, "extends");
            space!(self);
            self.emit_expr(super_class)?;
            opt!(self, emit_type_args, node.super_type_args);
        }

        if !node.implements.is_empty() {
            space!(self);
            keyword!(self, "implements");
            space!(self);
            self.emit_heritage(&node.implements)?;
        }

        space!(self);
        let body = node
            .body
            .iter()
            .filter(|m| !matches!(m, ClassMember::Empty(..)))
            .collect::<Vec<_>>();
        let members = body
            .iter()
            .enumerate()
            .map(|(i, node)| Member {
                node,
                force_semi: match (node, body.get(i + 1)) {
                    (ClassMember::ClassProp(..), Some(next)) => starts_with_bracket_or_star(next),
                    _ => false,
                },
            })
            .collect::<Vec<_>>();
        self.emit_list(
            node.span,
            &members,
            |e, member| e.emit_member(member),
            ListFormat::ClassMembers,
        )
    }

    fn emit_member(&mut self, member: &Member) -> Result {
        self.emit_class_member(member.node)?;
        if member.force_semi && !self.cfg.semicolons {
            semi!(self);
        }
        Ok(())
    }

    pub fn emit_class_member(&mut self, node: &ClassMember) -> Result {
        match node {
            ClassMember::Method(n) => self.emit_class_method(n),
            ClassMember::ClassProp(n) => self.emit_class_prop(n),
            ClassMember::Index(n) => {
                self.emit_indexer(n)?;
                formatting_semi!(self);
                Ok(())
            }
            ClassMember::Empty(_) => {
                semi!(self);
                Ok(())
            }
        }
    }

    fn emit_class_method(&mut self, node: &ClassMethod) -> Result {
        if node.is_static {
            keyword!(self, "static");
            space!(self);
        }
        match node.kind {
            MethodKind::Method => {
                if node.function.is_async {
                    keyword!(self, "async");
                    space!(self);
                }
                if node.function.is_generator {
                    punct!(self, "*");
                }
            }
            MethodKind::Getter => {
                keyword!(self, "get");
                space!(self);
            }
            MethodKind::Setter => {
                keyword!(self, "set");
                space!(self);
            }
        }
        self.emit_key(&node.key)?;
        if node.optional {
            punct!(self, "?");
        }
        self.emit_fn_sig_and_body(&node.function)
    }

    fn emit_class_prop(&mut self, node: &ClassProp) -> Result {
        if node.declare {
            keyword!(self, "declare");
            space!(self);
        }
        if node.is_static {
            keyword!(self, "static");
            space!(self);
        }
        if node.readonly {
            keyword!(self, "readonly");
            space!(self);
        }
        opt!(self, emit_variance, node.variance);
        self.emit_key(&node.key)?;
        if node.optional {
            punct!(self, "?");
        }
        opt!(self, emit_type_ann, node.type_ann);
        if let Some(value) = &node.value {
            space!(self);
            operator!(self, "=");
            space!(self);
            self.emit_expr(value)?;
        }
        formatting_semi!(self);
        Ok(())
    }

    fn emit_key(&mut self, node: &Key) -> Result {
        match node {
            Key::Public(n) => self.emit_prop_name(n),
            Key::Private(n) => {
                punct!(self, "#");
                self.emit_ident(&n.id)
            }
        }
    }

    fn emit_fn_decl(&mut self, node: &FnDecl) -> Result {
        self.emit_declare(node.declare)?;
        if node.function.is_async {
            keyword!(self, "async");
            space!(self);
        }
        keyword!(self, "function");
        if node.function.is_generator {
            punct!(self, "*");
        }
        space!(self);
        self.emit_ident(&node.ident)?;
        self.emit_fn_sig_and_body(&node.function)
    }

    /// Everything after the name of a function or method.
    pub(crate) fn emit_fn_sig_and_body(&mut self, node: &Function) -> Result {
        opt!(self, emit_type_params, node.type_params);
        self.emit_params(expr::params_span(&node.params), &node.params, |p| &p.pat)?;
        self.emit_return_type(node.return_type.as_ref(), node.predicate.as_ref())?;

        match &node.body {
            Some(body) => {
                space!(self);
                self.emit_block_stmt(body)
            }
            None => {
                formatting_semi!(self);
                Ok(())
            }
        }
    }

    pub(crate) fn emit_var_decl(&mut self, node: &VarDecl) -> Result {
        self.emit_declare(node.declare)?;
        keyword!(self, node.kind.as_str());
        space!(self);
        self.emit_list(
            node.span,
            &node.decls,
            |e, decl| e.emit_var_declarator(decl),
            ListFormat::VariableDeclarationList,
        )
    }

    fn emit_var_declarator(&mut self, node: &VarDeclarator) -> Result {
        self.emit_pat(&node.name)?;
        if let Some(init) = &node.init {
            space!(self);
            operator!(self, "=");
            space!(self);
            self.emit_expr(init)?;
        }
        Ok(())
    }

    fn emit_type_alias(&mut self, node: &TypeAliasDecl) -> Result {
        self.emit_declare(node.declare)?;
        keyword!(self, "type");
        space!(self);
        self.emit_ident(&node.id)?;
        opt!(self, emit_type_params, node.type_params);
        space!(self);
        operator!(self, "=");
        space!(self);
        self.emit_type(&node.type_ann)?;
        formatting_semi!(self);
        Ok(())
    }

    fn emit_opaque_type(&mut self, node: &OpaqueTypeDecl) -> Result {
        self.emit_declare(node.declare)?;
        keyword!(self, "opaque");
        space!(self);
        keyword!(self, "type");
        space!(self);
        self.emit_ident(&node.id)?;
        opt!(self, emit_type_params, node.type_params);
        if let Some(supertype) = &node.supertype {
            punct!(self, ":");
            space!(self);
            self.emit_type(supertype)?;
        }
        if let Some(impltype) = &node.impltype {
            space!(self);
            operator!(self, "=");
            space!(self);
            self.emit_type(impltype)?;
        }
        formatting_semi!(self);
        Ok(())
    }

    fn emit_interface_decl(&mut self, node: &InterfaceDecl) -> Result {
        self.emit_declare(node.declare)?;
        keyword!(self, "interface");
        space!(self);
        self.emit_ident(&node.id)?;
        opt!(self, emit_type_params, node.type_params);
        if !node.extends.is_empty() {
            space!(self);
            keyword!(self, "extends");
            space!(self);
            self.emit_heritage(&node.extends)?;
        }
        space!(self);
        self.emit_object_type(&node.body, ListFormat::InterfaceMembers)
    }

    pub(crate) fn emit_declare_fn_decl(&mut self, node: &DeclareFnDecl) -> Result {
        self.emit_declare(node.declare)?;
        keyword!(self, "function");
        space!(self);
        self.emit_ident(&node.id)?;
        self.emit_fn_type_sig(&node.fn_type)?;
        if let Some(predicate) = &node.predicate {
            space!(self);
            self.emit_predicate(predicate)?;
        }
        formatting_semi!(self);
        Ok(())
    }

    pub(crate) fn emit_declare_class_decl(&mut self, node: &DeclareClassDecl) -> Result {
        self.emit_declare(node.declare)?;
        keyword!(self, "class");
        space!(self);
        self.emit_ident(&node.id)?;
        opt!(self, emit_type_params, node.type_params);
        if let Some(extends) = &node.extends {
            space!(self);
            keyword!(self, "extends");
            space!(self);
            self.emit_interface_extends(extends)?;
        }
        if !node.mixins.is_empty() {
            space!(self);
            keyword!(self, "mixins");
            space!(self);
            self.emit_heritage(&node.mixins)?;
        }
        if !node.implements.is_empty() {
            space!(self);
            keyword!(self, "implements");
            space!(self);
            self.emit_heritage(&node.implements)?;
        }
        space!(self);
        self.emit_object_type(&node.body, ListFormat::InterfaceMembers)
    }

    fn emit_module_decl_block(&mut self, node: &AmbientModuleDecl) -> Result {
        self.emit_declare(node.declare)?;
        keyword!(self, "module");
        space!(self);
        match &node.id {
            ModuleName::Str(s) => self.emit_str_lit(s)?,
            ModuleName::Ident(i) => self.emit_ident(i)?,
        }
        space!(self);
        punct!(self, "{");
        if !node.body.is_empty() || self.has_pending_comments(node.span) {
            self.wr.increase_indent()?;
            self.wr.write_line()?;
            self.emit_module_items(&node.body)?;
            if !node.span.is_dummy() {
                self.emit_leading_comments(node.span.hi)?;
                self.wr.write_line()?;
            }
            self.wr.decrease_indent()?;
        }
        punct!(self, "}");
        Ok(())
    }

    fn emit_declare_module_exports(&mut self, node: &DeclareModuleExports) -> Result {
        keyword!(self, "declare");
        space!(self);
        keyword!(self, "module");
        punct!(self, ".");
        keyword!(self, "exports");
        self.emit_type_ann(&node.type_ann)?;
        formatting_semi!(self);
        Ok(())
    }

    fn emit_heritage(&mut self, list: &[InterfaceExtends]) -> Result {
        self.emit_list(
            DUMMY_SP,
            list,
            |e, n| e.emit_interface_extends(n),
            ListFormat::HeritageClauseTypes,
        )
    }

    fn emit_interface_extends(&mut self, node: &InterfaceExtends) -> Result {
        self.emit_type_name(&node.name)?;
        opt!(self, emit_type_args, node.type_args);
        Ok(())
    }
}

/// Returns true if a member starting with `[` or `*` would be read as part of
/// the preceding field without a semicolon.
fn starts_with_bracket_or_star(node: &ClassMember) -> bool {
    match node {
        ClassMember::Method(m) => {
            let plain = !m.is_static && m.kind == MethodKind::Method && !m.function.is_async;
            plain && (m.function.is_generator || matches!(m.key, Key::Public(PropName::Computed(..))))
        }
        ClassMember::ClassProp(p) => {
            matches!(p.key, Key::Public(PropName::Computed(..)))
                && !p.is_static
                && !p.declare
                && !p.readonly
                && p.variance.is_none()
        }
        ClassMember::Index(i) => !i.is_static && !i.readonly && i.variance.is_none(),
        ClassMember::Empty(..) => false,
    }
}
